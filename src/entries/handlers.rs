use axum::{extract::State, routing::get, Json, Router};
use tracing::{debug, info, instrument};

use crate::{
    common::{check_limit, parse_day, CreatedResponse},
    error::AppResult,
    extract::{ApiJson, ApiQuery},
    state::AppState,
};

use super::dto::{EntriesPage, EntriesQuery, Entry};
use super::{repo, services};

pub fn entry_routes() -> Router<AppState> {
    Router::new().route("/api/entries", get(list_entries).post(create_entry))
}

#[instrument(skip(state, entry))]
pub async fn create_entry(
    State(state): State<AppState>,
    ApiJson(entry): ApiJson<Entry>,
) -> AppResult<Json<CreatedResponse>> {
    let entry = services::validate_entry(entry)?;
    let id = repo::insert(state.store()?, &entry).await?;
    info!(%id, date = %entry.date, meal = entry.meal.as_str(), "entry logged");
    Ok(Json(CreatedResponse { id }))
}

#[instrument(skip(state))]
pub async fn list_entries(
    State(state): State<AppState>,
    ApiQuery(p): ApiQuery<EntriesQuery>,
) -> AppResult<Json<EntriesPage>> {
    let limit = check_limit(p.limit)?;
    let day = match p.day.as_deref() {
        Some(raw) if !raw.trim().is_empty() => Some(parse_day("day", raw)?),
        _ => None,
    };
    let docs = repo::list(state.store()?, day.as_deref(), Some(limit)).await?;
    let page = services::build_page(docs);
    debug!(count = page.items.len(), total = page.total, "entries listed");
    Ok(Json(page))
}
