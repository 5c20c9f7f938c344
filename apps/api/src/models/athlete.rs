use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Self-reported experience band. Case-insensitive when parsed from a form value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ExperienceLevel {
    Beginner,
    Intermediate,
    Advanced,
}

impl ExperienceLevel {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExperienceLevel::Beginner => "Beginner",
            ExperienceLevel::Intermediate => "Intermediate",
            ExperienceLevel::Advanced => "Advanced",
        }
    }
}

impl fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "beginner" => Ok(ExperienceLevel::Beginner),
            "intermediate" => Ok(ExperienceLevel::Intermediate),
            "advanced" => Ok(ExperienceLevel::Advanced),
            _ => Err(s.to_string()),
        }
    }
}

/// Names of the form fields a use case can require.
/// Ordering follows the form layout so error messages list fields top to bottom.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ProfileField {
    Sport,
    Position,
    Goal,
    InjuryType,
    TrainingIntensity,
}

impl ProfileField {
    pub fn as_str(&self) -> &'static str {
        match self {
            ProfileField::Sport => "sport",
            ProfileField::Position => "position",
            ProfileField::Goal => "goal",
            ProfileField::InjuryType => "injury_type",
            ProfileField::TrainingIntensity => "training_intensity",
        }
    }
}

impl fmt::Display for ProfileField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Raw field values exactly as the presentation layer collected them.
/// Nothing here is trusted until it passes `coaching::validation::validate`.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct ProfileForm {
    pub sport: Option<String>,
    pub position: Option<String>,
    pub experience_level: Option<String>,
    pub goal: Option<String>,
    pub injury_history: Option<String>,
    pub injury_type: Option<String>,
    pub diet_preference: Option<String>,
    pub training_intensity: Option<String>,
}

impl ProfileForm {
    /// Returns the raw value behind a requirable field.
    pub fn field(&self, field: ProfileField) -> Option<&str> {
        match field {
            ProfileField::Sport => self.sport.as_deref(),
            ProfileField::Position => self.position.as_deref(),
            ProfileField::Goal => self.goal.as_deref(),
            ProfileField::InjuryType => self.injury_type.as_deref(),
            ProfileField::TrainingIntensity => self.training_intensity.as_deref(),
        }
    }
}

/// A profile whose required fields have been checked for the use case it was validated against.
///
/// Every value is trimmed; blank optional values are `None`. Fields that were not
/// required for the use case may still be `None` and render as a default in prompts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AthleteProfile {
    pub sport: Option<String>,
    pub position: Option<String>,
    pub experience_level: Option<ExperienceLevel>,
    pub goal: Option<String>,
    pub injury_history: Option<String>,
    pub injury_type: Option<String>,
    pub diet_preference: Option<String>,
    pub training_intensity: Option<String>,
}
