pub mod health;

use axum::{
    routing::{get, post},
    Router,
};

use crate::coaching::handlers as coaching;
use crate::fixtures::handlers as fixtures;
use crate::state::AppState;

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(health::health_handler))
        // Fixture data (read-only)
        .route("/api/sports/:sport", get(fixtures::handle_get_sport))
        .route("/api/matches/live", get(fixtures::handle_live_matches))
        .route("/api/news", get(fixtures::handle_news))
        .route("/api/match/:id", get(fixtures::handle_match_detail))
        // Coaching plans
        .route("/api/v1/plans", get(coaching::handle_list_use_cases))
        .route("/api/v1/plans/:use_case", post(coaching::handle_create_plan))
        .with_state(state)
}
