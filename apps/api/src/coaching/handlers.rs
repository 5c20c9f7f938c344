//! Axum route handlers for the coaching plan API.

use axum::{
    extract::{Path, State},
    Json,
};
use serde::Serialize;

use crate::coaching::planner::{create_plan, PlanRequest, PlanResponse};
use crate::coaching::use_case::{Sampling, UseCase};
use crate::errors::AppError;
use crate::models::athlete::ProfileField;
use crate::state::AppState;

/// Catalog entry so the presentation layer can build its form and headings from the
/// same table the builder and partitioner use.
#[derive(Debug, Serialize)]
pub struct UseCaseSummary {
    pub use_case: UseCase,
    pub title: &'static str,
    pub required_fields: &'static [ProfileField],
    pub section_labels: &'static [&'static str],
    pub sampling: Sampling,
}

/// GET /api/v1/plans
pub async fn handle_list_use_cases() -> Json<Vec<UseCaseSummary>> {
    Json(
        UseCase::ALL
            .into_iter()
            .map(|use_case| UseCaseSummary {
                use_case,
                title: use_case.title(),
                required_fields: use_case.required_fields(),
                section_labels: use_case.section_labels(),
                sampling: use_case.sampling(),
            })
            .collect(),
    )
}

/// POST /api/v1/plans/:use_case
///
/// Validates the profile, generates the plan and returns it split into sections.
pub async fn handle_create_plan(
    State(state): State<AppState>,
    Path(slug): Path<String>,
    Json(request): Json<PlanRequest>,
) -> Result<Json<PlanResponse>, AppError> {
    let use_case = UseCase::from_slug(&slug)
        .ok_or_else(|| AppError::NotFound(format!("Unknown plan type '{slug}'")))?;

    let response = create_plan(
        state.generator.as_ref(),
        use_case,
        request,
        state.config.preamble_mode,
    )
    .await?;

    Ok(Json(response))
}
