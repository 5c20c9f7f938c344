//! Field Validator: the gate between raw form input and prompt construction.
//!
//! Pure: no I/O, no logging. A failure here must short-circuit before any provider call.

use std::collections::BTreeSet;

use thiserror::Error;

use crate::coaching::use_case::UseCase;
use crate::models::athlete::{AthleteProfile, ExperienceLevel, ProfileField, ProfileForm};

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Missing required fields: {}", join_fields(.0))]
    MissingFields(BTreeSet<ProfileField>),

    #[error("Unknown experience level '{0}' (expected Beginner, Intermediate or Advanced)")]
    InvalidExperienceLevel(String),
}

fn join_fields(fields: &BTreeSet<ProfileField>) -> String {
    fields
        .iter()
        .map(ProfileField::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

/// Checks the use case's required fields and normalizes the rest.
///
/// A field counts as missing when it is absent or blank after trimming. All missing
/// fields are reported together, not just the first one.
pub fn validate(form: &ProfileForm, use_case: UseCase) -> Result<AthleteProfile, ValidationError> {
    let missing: BTreeSet<ProfileField> = use_case
        .required_fields()
        .iter()
        .copied()
        .filter(|&field| clean(form.field(field)).is_none())
        .collect();

    if !missing.is_empty() {
        return Err(ValidationError::MissingFields(missing));
    }

    let experience_level = match clean(form.experience_level.as_deref()) {
        Some(raw) => Some(
            raw.parse::<ExperienceLevel>()
                .map_err(ValidationError::InvalidExperienceLevel)?,
        ),
        None => None,
    };

    Ok(AthleteProfile {
        sport: clean(form.sport.as_deref()),
        position: clean(form.position.as_deref()),
        experience_level,
        goal: clean(form.goal.as_deref()),
        injury_history: clean(form.injury_history.as_deref()),
        injury_type: clean(form.injury_type.as_deref()),
        diet_preference: clean(form.diet_preference.as_deref()),
        training_intensity: clean(form.training_intensity.as_deref()),
    })
}

fn clean(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}
