//! Plan pipeline: orchestrates one coaching request end to end.
//!
//! Flow: validate → build prompt → generate (single provider call, model fallback
//! only) → partition into sections → return response.
//!
//! Nothing is persisted. Two identical requests make two independent provider calls.

use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use uuid::Uuid;

use crate::coaching::builder::build;
use crate::coaching::partitioner::{partition, PreambleMode};
use crate::coaching::use_case::UseCase;
use crate::coaching::validation::validate;
use crate::errors::AppError;
use crate::llm_client::{Credential, TextGenerator};
use crate::models::athlete::ProfileForm;
use crate::models::plan::PlanSection;

// ────────────────────────────────────────────────────────────────────────────
// Data models
// ────────────────────────────────────────────────────────────────────────────

/// Request body for plan generation.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PlanRequest {
    #[serde(flatten)]
    pub profile: ProfileForm,
    /// Key typed into the form. Replaces the configured key for this call only.
    #[serde(default)]
    pub api_key: Option<String>,
}

#[derive(Debug, Clone, Serialize)]
pub struct PlanResponse {
    pub plan_id: Uuid,
    pub use_case: UseCase,
    pub title: &'static str,
    pub model: String,
    pub sections: Vec<PlanSection>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preamble: Option<String>,
}

// ────────────────────────────────────────────────────────────────────────────
// Pipeline
// ────────────────────────────────────────────────────────────────────────────

/// Runs the full plan pipeline for `use_case`.
///
/// Validation failures return before the generator is touched.
pub async fn create_plan(
    generator: &dyn TextGenerator,
    use_case: UseCase,
    request: PlanRequest,
    preamble_mode: PreambleMode,
) -> Result<PlanResponse, AppError> {
    // Step 1: Validate
    let profile = validate(&request.profile, use_case)?;

    // Step 2: Build prompt
    let generation_request = build(&profile, use_case);

    // Step 3: Generate
    let plan_id = Uuid::new_v4();
    info!("Generating {} plan {}", use_case.slug(), plan_id);

    let rekeyed;
    let generator = match request.api_key.and_then(Credential::new) {
        Some(credential) => {
            rekeyed = generator.with_credential(credential);
            &*rekeyed
        }
        None => generator,
    };

    let output = generator
        .generate(&generation_request)
        .await
        .map_err(|failure| {
            warn!(
                "Plan {} failed ({:?}): {}",
                plan_id, failure.kind, failure.message
            );
            AppError::Generation(failure)
        })?;

    // Step 4: Partition
    let plan = partition(&output.text, use_case.section_labels(), preamble_mode);

    if plan.filled_count() == 0 {
        warn!(
            "Plan {} from {} matched none of the {} section headings",
            plan_id,
            output.model,
            use_case.section_labels().len()
        );
    }

    info!(
        "Plan {} generated by {}: {}/{} sections filled",
        plan_id,
        output.model,
        plan.filled_count(),
        plan.sections.len()
    );

    Ok(PlanResponse {
        plan_id,
        use_case,
        title: use_case.title(),
        model: output.model,
        sections: plan.sections,
        preamble: plan.preamble,
    })
}

// ────────────────────────────────────────────────────────────────────────────
// Tests
// ────────────────────────────────────────────────────────────────────────────
