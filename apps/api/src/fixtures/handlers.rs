use axum::{
    extract::{Path, Query, State},
    Json,
};
use serde::Deserialize;

use crate::fixtures::service::{FixtureError, ALL_CATEGORIES};
use crate::models::fixture::{LiveMatch, MatchDetail, NewsItem, SportBundle};
use crate::state::AppState;

// Fixture routes answer misses with a flat `{"error": "..."}` 404 (see `FixtureError`),
// not the nested `AppError` body used by the plan API.

#[derive(Debug, Deserialize)]
pub struct NewsQuery {
    pub category: Option<String>,
}

/// GET /api/sports/:sport
pub async fn handle_get_sport(
    State(state): State<AppState>,
    Path(sport): Path<String>,
) -> Result<Json<SportBundle>, FixtureError> {
    let bundle = state.fixtures.get_sport(&sport)?;
    Ok(Json(bundle.clone()))
}

/// GET /api/matches/live
pub async fn handle_live_matches(State(state): State<AppState>) -> Json<Vec<LiveMatch>> {
    Json(state.fixtures.list_live_matches())
}

/// GET /api/news?category=
pub async fn handle_news(
    State(state): State<AppState>,
    Query(params): Query<NewsQuery>,
) -> Json<Vec<NewsItem>> {
    let category = params.category.as_deref().unwrap_or(ALL_CATEGORIES);
    Json(state.fixtures.list_news(category).into_iter().cloned().collect())
}

/// GET /api/match/:id
///
/// A non-numeric id cannot name any match, so it is a 404 like any other miss.
pub async fn handle_match_detail(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> Result<Json<MatchDetail>, FixtureError> {
    let id = raw_id
        .parse::<u32>()
        .map_err(|_| FixtureError::MatchNotFound(raw_id.clone()))?;
    Ok(Json(state.fixtures.get_match_by_id(id)?))
}
