use axum::{extract::State, routing::get, Json, Router};
use serde::Serialize;
use tracing::{instrument, warn};

use crate::state::AppState;

#[derive(Debug, Serialize)]
pub struct RootResponse {
    pub message: &'static str,
}

/// Store connectivity report. Built best-effort; never fails.
#[derive(Debug, Serialize)]
pub struct StoreReport {
    pub backend: String,
    pub database: String,
    pub database_url: String,
    pub database_name: String,
    pub connection_status: String,
    pub collections: Vec<String>,
}

pub fn diagnostics_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/test", get(test_store))
}

pub async fn root() -> Json<RootResponse> {
    Json(RootResponse {
        message: "Calorie Counter API is running",
    })
}

#[instrument(skip(state))]
pub async fn test_store(State(state): State<AppState>) -> Json<StoreReport> {
    let mut report = StoreReport {
        backend: "running".into(),
        database: "not available".into(),
        database_url: set_or_not(state.config.database_url.is_some()),
        database_name: set_or_not(state.config.database_name.is_some()),
        connection_status: "Not Connected".into(),
        collections: Vec::new(),
    };

    if let Ok(store) = state.store() {
        report.connection_status = "Connected".into();
        match store.list_collections().await {
            Ok(mut names) => {
                names.truncate(10);
                report.collections = names;
                report.database = format!("connected and working ({})", store.database_name());
            }
            Err(e) => {
                warn!(error = %e, "listing collections failed");
                let msg: String = e.to_string().chars().take(50).collect();
                report.database = format!("connected but error: {msg}");
            }
        }
    }

    Json(report)
}

fn set_or_not(present: bool) -> String {
    let label = if present { "set" } else { "not set" };
    label.to_string()
}
