//! Prompt Builder: renders a use case's template from a validated profile.
//!
//! Pure string substitution. Never touches the network.

use crate::coaching::prompts::template_for;
use crate::coaching::use_case::UseCase;
use crate::llm_client::prompts::{COACH_PERSONA, SAFETY_INSTRUCTION, SECTION_FORMAT_INSTRUCTION};
use crate::llm_client::GenerationRequest;
use crate::models::athlete::AthleteProfile;

/// Default for an absent injury history.
pub const NO_INJURY_HISTORY: &str = "None";
/// Default for every other absent optional field.
pub const NOT_SPECIFIED: &str = "Not specified";

/// Builds the request for `use_case`: rendered prompt plus the use case's sampling constants.
pub fn build(profile: &AthleteProfile, use_case: UseCase) -> GenerationRequest {
    let sections = numbered_sections(use_case.section_labels());
    let experience_level = profile
        .experience_level
        .map(|level| level.as_str())
        .unwrap_or(NOT_SPECIFIED);

    let slots: [(&str, &str); 12] = [
        ("persona", COACH_PERSONA),
        ("format_instruction", SECTION_FORMAT_INSTRUCTION),
        ("safety_instruction", SAFETY_INSTRUCTION),
        ("sections", sections.as_str()),
        ("sport", or_default(&profile.sport, NOT_SPECIFIED)),
        ("position", or_default(&profile.position, NOT_SPECIFIED)),
        ("experience_level", experience_level),
        ("goal", or_default(&profile.goal, NOT_SPECIFIED)),
        ("injury_history", or_default(&profile.injury_history, NO_INJURY_HISTORY)),
        ("injury_type", or_default(&profile.injury_type, NOT_SPECIFIED)),
        ("diet_preference", or_default(&profile.diet_preference, NOT_SPECIFIED)),
        ("training_intensity", or_default(&profile.training_intensity, NOT_SPECIFIED)),
    ];

    let prompt = render(template_for(use_case), &slots);
    let sampling = use_case.sampling();

    GenerationRequest::new(
        prompt,
        sampling.temperature,
        Some(sampling.top_p),
        Some(sampling.max_output_tokens),
    )
}

fn or_default<'a>(value: &'a Option<String>, default: &'a str) -> &'a str {
    value.as_deref().unwrap_or(default)
}

/// "1. First\n2. Second" is the exact heading list the partitioner will look for.
pub fn numbered_sections(labels: &[&str]) -> String {
    labels
        .iter()
        .enumerate()
        .map(|(i, label)| format!("{}. {}", i + 1, label))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Single left-to-right pass over `template`, replacing `{name}` with its slot value.
///
/// Substituted values are copied verbatim and never rescanned, so user input that
/// happens to contain `{goal}` stays literal. Unknown `{...}` sequences are kept as-is.
fn render(template: &str, slots: &[(&str, &str)]) -> String {
    let mut out = String::with_capacity(template.len() + 256);
    let mut rest = template;

    while let Some(open) = rest.find('{') {
        out.push_str(&rest[..open]);
        let after = &rest[open + 1..];

        let Some(close) = after.find('}') else {
            out.push_str(&rest[open..]);
            return out;
        };

        let name = &after[..close];
        match slots.iter().find(|(slot, _)| *slot == name) {
            Some((_, value)) => out.push_str(value),
            None => {
                out.push('{');
                out.push_str(name);
                out.push('}');
            }
        }
        rest = &after[close + 1..];
    }

    out.push_str(rest);
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::athlete::ExperienceLevel;

    fn full_profile() -> AthleteProfile {
        AthleteProfile {
            sport: Some("Basketball".to_string()),
            position: Some("Point Guard".to_string()),
            experience_level: Some(ExperienceLevel::Advanced),
            goal: Some("Faster first step".to_string()),
            injury_history: Some("Ankle sprain 2024".to_string()),
            injury_type: Some("Patellar tendinopathy".to_string()),
            diet_preference: Some("Vegetarian".to_string()),
            training_intensity: Some("High".to_string()),
        }
    }

    fn minimal_profile() -> AthleteProfile {
        AthleteProfile {
            sport: Some("Cricket".to_string()),
            position: Some("Fast bowler".to_string()),
            experience_level: None,
            goal: Some("Bowl 140 km/h".to_string()),
            injury_history: None,
            injury_type: Some("Side strain".to_string()),
            diet_preference: None,
            training_intensity: Some("Moderate".to_string()),
        }
    }

    #[test]
    fn test_build_is_deterministic() {
        for use_case in UseCase::ALL {
            let a = build(&full_profile(), use_case);
            let b = build(&full_profile(), use_case);
            assert_eq!(a.prompt_text(), b.prompt_text());
            assert_eq!(a, b);
        }
    }

    #[test]
    fn test_no_placeholders_left_in_any_template() {
        for use_case in UseCase::ALL {
            for profile in [full_profile(), minimal_profile()] {
                let request = build(&profile, use_case);
                let text = request.prompt_text();
                assert!(
                    !text.contains('{') && !text.contains('}'),
                    "{use_case:?} left a slot unfilled:\n{text}"
                );
            }
        }
    }

    #[test]
    fn test_every_section_label_announced_in_order() {
        for use_case in UseCase::ALL {
            let request = build(&full_profile(), use_case);
            let text = request.prompt_text();
            let mut cursor = 0;
            for (i, label) in use_case.section_labels().iter().enumerate() {
                let heading = format!("{}. {}", i + 1, label);
                let found = text[cursor..]
                    .find(&heading)
                    .unwrap_or_else(|| panic!("{use_case:?} missing '{heading}'"));
                cursor += found + heading.len();
            }
        }
    }

    #[test]
    fn test_optional_fields_render_defaults() {
        let request = build(&minimal_profile(), UseCase::Workout);
        let text = request.prompt_text();
        assert!(text.contains("Injury history: None"));
        assert!(text.contains("Experience level: Not specified"));
        assert!(text.contains("Sport: Cricket"));
    }

    #[test]
    fn test_recovery_uses_injury_type_and_safety_note() {
        let request = build(&full_profile(), UseCase::Recovery);
        let text = request.prompt_text();
        assert!(text.contains("Injury: Patellar tendinopathy"));
        assert!(text.contains(SAFETY_INSTRUCTION));
    }

    #[test]
    fn test_user_braces_are_not_expanded() {
        let mut profile = full_profile();
        profile.goal = Some("beat {sport} rivals".to_string());
        let request = build(&profile, UseCase::Workout);
        assert!(request.prompt_text().contains("Primary goal: beat {sport} rivals"));
    }

    #[test]
    fn test_sampling_comes_from_use_case() {
        let request = build(&full_profile(), UseCase::Recovery);
        let sampling = UseCase::Recovery.sampling();
        assert_eq!(request.temperature(), sampling.temperature);
        assert_eq!(request.top_p(), Some(sampling.top_p));
        assert_eq!(request.max_output_tokens(), Some(sampling.max_output_tokens));
    }

    #[test]
    fn test_render_leaves_unknown_and_unclosed_braces() {
        let out = render("a {x} {unknown} {open", &[("x", "1")]);
        assert_eq!(out, "a 1 {unknown} {open");
    }

    #[test]
    fn test_numbered_sections_format() {
        assert_eq!(numbered_sections(&["A", "B"]), "1. A\n2. B");
        assert_eq!(numbered_sections(&[]), "");
    }
}
