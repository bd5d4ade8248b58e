//! Play page rendering.
//!
//! The page is the hand-off point: the browser, not this service, navigates
//! to EmulatorJS. Request values reach the inline script as JSON literals
//! with `<` and `>` escaped so they cannot close the `<script>` element.

use tera::{Context, Tera};

use crate::config::PlayConfig;
use crate::translate::LaunchPlan;

const TEMPLATE_NAME: &str = "play.html";
const TEMPLATE: &str = include_str!("../../templates/play.html");

/// Compiled play page template.
#[derive(Debug)]
pub struct PlayPage {
    tera: Tera,
    redirect_delay_ms: u64,
}

impl PlayPage {
    pub fn new(config: &PlayConfig) -> Result<Self, tera::Error> {
        let mut tera = Tera::default();
        tera.add_raw_template(TEMPLATE_NAME, TEMPLATE)?;
        Ok(Self {
            tera,
            redirect_delay_ms: config.redirect_delay_ms,
        })
    }

    pub fn render(&self, plan: &LaunchPlan) -> Result<String, tera::Error> {
        let mut context = Context::new();
        context.insert("core_json", &script_literal(&plan.requested_core));
        context.insert("rom_json", &script_literal(&plan.requested_rom));
        context.insert("destination_json", &script_literal(&plan.destination));
        context.insert("destination", &plan.destination);
        context.insert("core", &plan.core);
        context.insert("rom_path", &plan.rom_path);
        context.insert("delay_ms", &self.redirect_delay_ms);
        context.insert("delay_secs", &self.redirect_delay_ms.div_ceil(1000));
        self.tera.render(TEMPLATE_NAME, &context)
    }
}

/// JSON string literal that is safe inside an inline `<script>`.
pub fn script_literal(value: &str) -> String {
    serde_json::Value::from(value)
        .to_string()
        .replace('<', "\\u003c")
        .replace('>', "\\u003e")
        .replace('\u{2028}', "\\u2028")
        .replace('\u{2029}', "\\u2029")
}
