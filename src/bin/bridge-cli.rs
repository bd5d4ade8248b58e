use clap::{Parser, Subcommand};
use serde_json::Value;

use retroarch_bridge::config::FrontendConfig;
use retroarch_bridge::translate::{CoreMap, FrontendTarget, Translator};

#[derive(Parser)]
#[command(name = "bridge-cli")]
#[command(about = "Management CLI for the RetroArch HTTP bridge", long_about = None)]
struct Cli {
    #[arg(short, long, default_value = "http://localhost:8081")]
    url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Check bridge health
    Health,
    /// Print the EmulatorJS URL a play request would redirect to
    Resolve {
        /// libretro core name (e.g. snes9x_libretro)
        #[arg(long)]
        core: String,
        /// ROM path as the backend reports it (e.g. /roms/snes/game.sfc)
        #[arg(long)]
        rom: String,
        #[arg(long, env = "EMULATORJS_SCHEME", default_value = "http")]
        frontend_scheme: String,
        #[arg(long, env = "EMULATORJS_HOST", default_value = "localhost")]
        frontend_host: String,
        #[arg(long, env = "EMULATORJS_PORT", default_value_t = 8082)]
        frontend_port: u16,
    },
    /// List the built-in core mapping
    Cores,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command {
        Commands::Health => {
            let res = reqwest::Client::new()
                .get(format!("{}/health", cli.url.trim_end_matches('/')))
                .send()
                .await?;
            print_response(res).await?;
        }
        Commands::Resolve {
            core,
            rom,
            frontend_scheme,
            frontend_host,
            frontend_port,
        } => {
            let frontend = FrontendConfig {
                scheme: frontend_scheme,
                host: frontend_host,
                port: frontend_port,
            };
            let translator =
                Translator::new(CoreMap::builtin(), FrontendTarget::from_config(&frontend));
            let plan = translator.plan(&core, &rom);
            println!("{}", serde_json::to_string_pretty(&plan)?);
        }
        Commands::Cores => {
            let cores = CoreMap::builtin();
            for (name, target) in cores.entries() {
                println!("{:<28} {}", name, target);
            }
            println!("{:<28} {}", "(anything else)", cores.fallback());
        }
    }

    Ok(())
}

async fn print_response(res: reqwest::Response) -> Result<(), Box<dyn std::error::Error>> {
    let status = res.status();
    if !status.is_success() {
        eprintln!("Error: bridge returned status {}", status);
        if let Ok(text) = res.text().await {
            eprintln!("Response: {}", text);
        }
        return Ok(());
    }

    let json: Value = res.json().await?;
    println!("{}", serde_json::to_string_pretty(&json)?);
    Ok(())
}
