//! Route handlers.

use axum::{
    extract::{rejection::QueryRejection, Query, State},
    response::Html,
    Json,
};
use serde::Serialize;

use crate::http::error::BridgeError;
use crate::http::server::AppState;
use crate::observability::metrics;

/// Name reported by the health endpoint and the startup banner.
pub const SERVICE_NAME: &str = "retroarch-bridge";

#[derive(Debug, Serialize)]
pub struct HealthStatus {
    pub status: &'static str,
    pub service: &'static str,
}

/// `GET /health` and `GET /`.
///
/// Only says the bridge process is up; downstream services are not probed.
pub async fn health() -> Json<HealthStatus> {
    Json(HealthStatus {
        status: "ok",
        service: SERVICE_NAME,
    })
}

/// `GET /play?core=<core>&rom=<path>`
pub async fn play(
    State(state): State<AppState>,
    query: Result<Query<Vec<(String, String)>>, QueryRejection>,
) -> Result<Html<String>, BridgeError> {
    let params = match query {
        Ok(Query(params)) => params,
        Err(rejection) => {
            tracing::debug!(error = %rejection, "Unreadable query string");
            return Err(BridgeError::MissingParameters);
        }
    };

    let (Some(core), Some(rom)) = (first_param(&params, "core"), first_param(&params, "rom"))
    else {
        return Err(BridgeError::MissingParameters);
    };

    let plan = state.translator.plan(core, rom);
    tracing::debug!(
        requested_core = %plan.requested_core,
        core = %plan.core,
        rom_path = %plan.rom_path,
        destination = %plan.destination,
        "Launch plan built"
    );
    metrics::record_play(plan.core);

    Ok(Html(state.page.render(&plan)?))
}

/// Any unrouted path.
pub async fn not_found() -> BridgeError {
    BridgeError::NotFound
}

/// First non-empty value for `name`.
fn first_param<'a>(params: &'a [(String, String)], name: &str) -> Option<&'a str> {
    params
        .iter()
        .find(|(key, value)| key == name && !value.is_empty())
        .map(|(_, value)| value.as_str())
}
