use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, instrument};

use crate::{
    common::parse_day,
    entries::repo as entries_repo,
    error::{AppResult, ValidationError},
    extract::ApiQuery,
    state::AppState,
};

use super::dto::{DailySummary, SummaryQuery};
use super::services::summarize;

pub fn summary_routes() -> Router<AppState> {
    Router::new().route("/api/summary", get(daily_summary))
}

#[instrument(skip(state))]
pub async fn daily_summary(
    State(state): State<AppState>,
    ApiQuery(p): ApiQuery<SummaryQuery>,
) -> AppResult<Json<DailySummary>> {
    let raw = p
        .day
        .filter(|d| !d.trim().is_empty())
        .ok_or_else(|| ValidationError::new("day", "is required"))?;
    let day = parse_day("day", &raw)?;

    // Unbounded: the summary must cover every entry of the day.
    let docs = entries_repo::list(state.store()?, Some(day.as_str()), None).await?;
    debug!(%day, entries = docs.len(), "summarizing day");
    Ok(Json(summarize(day, &docs)))
}
