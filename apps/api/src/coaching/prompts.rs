// One prompt template per use case. Reuses cross-cutting fragments from llm_client::prompts.
//
// Slots: {persona}, {format_instruction}, {sections}, {safety_instruction},
//        {sport}, {position}, {experience_level}, {goal}, {injury_history},
//        {injury_type}, {diet_preference}, {training_intensity}
// `coaching::builder::build` binds every slot; a template may use any subset.

use crate::coaching::use_case::UseCase;

pub const WORKOUT_TEMPLATE: &str = r#"{persona}

Create a personalised weekly workout plan for this athlete.

Sport: {sport}
Position: {position}
Experience level: {experience_level}
Primary goal: {goal}
Injury history: {injury_history}
Preferred training intensity: {training_intensity}

Balance sport-specific strength, conditioning and skill work for the position, and keep
the load appropriate for the experience level and injury history.

{format_instruction}
{sections}"#;

pub const RECOVERY_TEMPLATE: &str = r#"{persona}

Create a step-by-step injury recovery plan.

Injury: {injury_type}
Sport: {sport}
Position: {position}
Experience level: {experience_level}
Previous injuries: {injury_history}

{safety_instruction}

{format_instruction}
{sections}"#;

pub const NUTRITION_TEMPLATE: &str = r#"{persona}

Design a nutrition plan that supports this athlete's training.

Sport: {sport}
Position: {position}
Primary goal: {goal}
Dietary preference: {diet_preference}
Training intensity: {training_intensity}

Give quantities in grams or servings and name real foods that fit the dietary preference.

{format_instruction}
{sections}"#;

pub const TACTICS_TEMPLATE: &str = r#"{persona}

Give tactical advice for a player in this role.

Sport: {sport}
Position: {position}
Experience level: {experience_level}
Focus: {goal}

Explain what the player should do with and without the ball (or equivalent for the sport),
with concrete in-game cues they can recognise.

{format_instruction}
{sections}"#;

pub const MENTAL_TEMPLATE: &str = r#"{persona}

Build a mental training plan for competition readiness.

Sport: {sport}
Position: {position}
Experience level: {experience_level}
Mental goal: {goal}

Include short daily exercises and a pre-competition routine.

{format_instruction}
{sections}"#;

pub const WARM_UP_TEMPLATE: &str = r#"{persona}

Design a warm-up and cooldown routine for a training session or match.

Sport: {sport}
Position: {position}
Experience level: {experience_level}
Injury history: {injury_history}

Give durations and repetitions for each movement.

{format_instruction}
{sections}"#;

pub const HYDRATION_TEMPLATE: &str = r#"{persona}

Create a hydration plan for this athlete.

Sport: {sport}
Training intensity: {training_intensity}
Primary goal: {goal}
Dietary preference: {diet_preference}

Give fluid volumes in millilitres and timings relative to the session.

{format_instruction}
{sections}"#;

pub const DRILLS_TEMPLATE: &str = r#"{persona}

Design a set of training drills.

Sport: {sport}
Position: {position}
Experience level: {experience_level}
Skill to develop: {goal}

For each drill give setup, duration, repetitions and the coaching points to watch.

{format_instruction}
{sections}"#;

pub const STAMINA_TEMPLATE: &str = r#"{persona}

Create a stamina and endurance development plan.

Sport: {sport}
Position: {position}
Experience level: {experience_level}
Endurance goal: {goal}
Current training intensity: {training_intensity}
Injury history: {injury_history}

Progress the load gradually over several weeks.

{format_instruction}
{sections}"#;

pub const PERFORMANCE_GAP_TEMPLATE: &str = r#"{persona}

Analyse the gap between this athlete's current level and their target.

Sport: {sport}
Position: {position}
Experience level: {experience_level}
Target: {goal}
Injury history: {injury_history}

Be specific about which physical, technical and mental attributes hold them back.

{format_instruction}
{sections}"#;

pub fn template_for(use_case: UseCase) -> &'static str {
    match use_case {
        UseCase::Workout => WORKOUT_TEMPLATE,
        UseCase::Recovery => RECOVERY_TEMPLATE,
        UseCase::Nutrition => NUTRITION_TEMPLATE,
        UseCase::Tactics => TACTICS_TEMPLATE,
        UseCase::Mental => MENTAL_TEMPLATE,
        UseCase::WarmUp => WARM_UP_TEMPLATE,
        UseCase::Hydration => HYDRATION_TEMPLATE,
        UseCase::Drills => DRILLS_TEMPLATE,
        UseCase::Stamina => STAMINA_TEMPLATE,
        UseCase::PerformanceGap => PERFORMANCE_GAP_TEMPLATE,
    }
}
