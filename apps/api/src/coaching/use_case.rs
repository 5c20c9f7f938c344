//! The fixed catalog of plan types.
//!
//! Each `UseCase` owns its required form fields, its section labels and its sampling
//! constants. The section labels are the one source of truth shared by the prompt
//! builder (which asks the model for those headings) and the response partitioner
//! (which looks for them).

use serde::{Deserialize, Serialize};

use crate::models::athlete::ProfileField;

/// Sampling constants for one use case. Safety-sensitive plans sample cooler.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Sampling {
    pub temperature: f32,
    pub top_p: f32,
    pub max_output_tokens: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum UseCase {
    Workout,
    Recovery,
    Nutrition,
    Tactics,
    Mental,
    WarmUp,
    Hydration,
    Drills,
    Stamina,
    PerformanceGap,
}

impl UseCase {
    pub const ALL: [UseCase; 10] = [
        UseCase::Workout,
        UseCase::Recovery,
        UseCase::Nutrition,
        UseCase::Tactics,
        UseCase::Mental,
        UseCase::WarmUp,
        UseCase::Hydration,
        UseCase::Drills,
        UseCase::Stamina,
        UseCase::PerformanceGap,
    ];

    pub fn from_slug(slug: &str) -> Option<UseCase> {
        UseCase::ALL.into_iter().find(|u| u.slug() == slug)
    }

    /// URL path segment, identical to the serde representation.
    pub fn slug(&self) -> &'static str {
        match self {
            UseCase::Workout => "workout",
            UseCase::Recovery => "recovery",
            UseCase::Nutrition => "nutrition",
            UseCase::Tactics => "tactics",
            UseCase::Mental => "mental",
            UseCase::WarmUp => "warm-up",
            UseCase::Hydration => "hydration",
            UseCase::Drills => "drills",
            UseCase::Stamina => "stamina",
            UseCase::PerformanceGap => "performance-gap",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            UseCase::Workout => "Workout Plan",
            UseCase::Recovery => "Recovery Plan",
            UseCase::Nutrition => "Nutrition Plan",
            UseCase::Tactics => "Tactical Advice",
            UseCase::Mental => "Mental Training Plan",
            UseCase::WarmUp => "Warm-Up & Cooldown",
            UseCase::Hydration => "Hydration Plan",
            UseCase::Drills => "Drill Plan",
            UseCase::Stamina => "Stamina Plan",
            UseCase::PerformanceGap => "Performance Gap Analysis",
        }
    }

    /// Fields that must be non-blank before a prompt may be built.
    pub fn required_fields(&self) -> &'static [ProfileField] {
        use ProfileField::*;
        match self {
            UseCase::Workout => &[Sport, Position, Goal],
            UseCase::Recovery => &[InjuryType],
            UseCase::Nutrition => &[Sport, Goal],
            UseCase::Tactics => &[Sport, Position],
            UseCase::Mental => &[Sport, Goal],
            UseCase::WarmUp => &[Sport, Position],
            UseCase::Hydration => &[Sport, TrainingIntensity],
            UseCase::Drills => &[Sport, Position, Goal],
            UseCase::Stamina => &[Sport, Goal],
            UseCase::PerformanceGap => &[Sport, Position, Goal],
        }
    }

    /// Headings the model is asked to produce, in the order it is asked to produce them.
    ///
    /// Within one list no label may be a substring of another, otherwise the partitioner
    /// would always resolve the overlap to whichever comes first.
    pub fn section_labels(&self) -> &'static [&'static str] {
        match self {
            UseCase::Workout => &[
                "Weekly Schedule",
                "Strength Program",
                "Conditioning",
                "Skill Work",
                "Rest Days",
                "Nutrition Tips",
                "Injury Prevention",
                "Progression Plan",
            ],
            UseCase::Recovery => &[
                "Injury Overview",
                "Rehabilitation Phases",
                "Recommended Exercises",
                "Exercises to Avoid",
                "Pain Management",
                "Return to Play Criteria",
            ],
            UseCase::Nutrition => &[
                "Daily Calorie Target",
                "Macronutrient Split",
                "Meal Plan",
                "Pre-Training Fuel",
                "Post-Training Recovery Meals",
                "Supplements",
            ],
            UseCase::Tactics => &[
                "Positional Role",
                "Attacking Play",
                "Defensive Duties",
                "Decision Making",
                "Game Scenarios",
            ],
            UseCase::Mental => &[
                "Mindset Assessment",
                "Focus Techniques",
                "Visualization Routine",
                "Pressure Management",
                "Confidence Building",
            ],
            UseCase::WarmUp => &[
                "Warm-Up Routine",
                "Dynamic Stretches",
                "Activation Drills",
                "Cooldown Routine",
                "Static Stretches",
            ],
            UseCase::Hydration => &[
                "Daily Fluid Target",
                "Before Exercise",
                "During Exercise",
                "After Exercise",
                "Electrolyte Guidance",
            ],
            UseCase::Drills => &[
                "Technical Drills",
                "Tactical Drills",
                "Conditioning Drills",
                "Drill Schedule",
                "Success Metrics",
            ],
            UseCase::Stamina => &[
                "Aerobic Base",
                "Interval Training",
                "Endurance Sessions",
                "Recovery Strategy",
                "Progress Benchmarks",
            ],
            UseCase::PerformanceGap => &[
                "Current Strengths",
                "Performance Gaps",
                "Priority Areas",
                "Improvement Plan",
                "Measurable Targets",
            ],
        }
    }

    pub fn sampling(&self) -> Sampling {
        let (temperature, top_p, max_output_tokens) = match self {
            UseCase::Workout => (0.7, 0.9, 2048),
            UseCase::Recovery => (0.3, 0.8, 2048),
            UseCase::Nutrition => (0.5, 0.9, 2048),
            UseCase::Tactics => (0.9, 0.95, 2048),
            UseCase::Mental => (0.7, 0.9, 1536),
            UseCase::WarmUp => (0.5, 0.9, 1024),
            UseCase::Hydration => (0.4, 0.85, 1024),
            UseCase::Drills => (0.8, 0.95, 2048),
            UseCase::Stamina => (0.6, 0.9, 2048),
            UseCase::PerformanceGap => (0.4, 0.85, 2048),
        };
        Sampling {
            temperature,
            top_p,
            max_output_tokens,
        }
    }
}
