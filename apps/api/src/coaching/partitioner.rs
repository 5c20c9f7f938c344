//! Response Partitioner: splits free model text into labelled sections.
//!
//! A line is a header when it contains a label as a case-insensitive substring. When a
//! line contains several labels, the label listed first wins, not the one appearing
//! first in the line. Header lines are not part of any body. Lines after a header
//! accumulate (each followed by `\n`) until the next header.
//!
//! Text before the first header is dropped by default. If the provider skips headings
//! or opens with prose, that text is lost; `PreambleMode::Keep` retains it instead.

use crate::models::plan::{PlanSection, StructuredPlan};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum PreambleMode {
    #[default]
    Drop,
    Keep,
}

pub fn partition(raw_text: &str, labels: &[&str], mode: PreambleMode) -> StructuredPlan {
    let needles: Vec<String> = labels.iter().map(|l| l.to_lowercase()).collect();
    let mut bodies = vec![String::new(); labels.len()];
    let mut preamble = String::new();
    let mut current: Option<usize> = None;

    for line in raw_text.lines() {
        let lowered = line.to_lowercase();

        if let Some(index) = needles.iter().position(|n| lowered.contains(n.as_str())) {
            current = Some(index);
            continue;
        }

        match current {
            Some(index) => {
                bodies[index].push_str(line);
                bodies[index].push('\n');
            }
            None if mode == PreambleMode::Keep => {
                preamble.push_str(line);
                preamble.push('\n');
            }
            None => {}
        }
    }

    let sections = labels
        .iter()
        .zip(bodies)
        .map(|(label, body)| PlanSection {
            label: label.to_string(),
            body,
        })
        .collect();

    StructuredPlan {
        sections,
        preamble: (mode == PreambleMode::Keep).then_some(preamble),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_preamble_is_dropped_by_default() {
        let plan = partition(
            "intro line\n1. Workout Plan\nrun 5k",
            &["Workout Plan"],
            PreambleMode::Drop,
        );
        assert_eq!(plan.sections.len(), 1);
        assert_eq!(plan.get("Workout Plan"), Some("run 5k\n"));
        assert_eq!(plan.preamble, None);
    }

    #[test]
    fn test_preamble_kept_when_requested() {
        let plan = partition(
            "intro line\nsecond intro\n1. Workout Plan\nrun 5k",
            &["Workout Plan"],
            PreambleMode::Keep,
        );
        assert_eq!(plan.preamble.as_deref(), Some("intro line\nsecond intro\n"));
        assert_eq!(plan.get("Workout Plan"), Some("run 5k\n"));
    }

    #[test]
    fn test_earlier_label_in_list_wins_tie() {
        let plan = partition(
            "## Nutrition Guide\neat oats",
            &["Nutrition Guide", "Guide"],
            PreambleMode::Drop,
        );
        assert_eq!(plan.get("Nutrition Guide"), Some("eat oats\n"));
        assert_eq!(plan.get("Guide"), Some(""));
    }

    #[test]
    fn test_list_order_beats_line_order() {
        // "Guide" appears later in the line but earlier in the list.
        let plan = partition(
            "Nutrition Guide\nsleep 8h",
            &["Guide", "Nutrition"],
            PreambleMode::Drop,
        );
        assert_eq!(plan.get("Guide"), Some("sleep 8h\n"));
        assert_eq!(plan.get("Nutrition"), Some(""));
    }

    #[test]
    fn test_header_match_is_case_insensitive() {
        let plan = partition(
            "**WEEKLY SCHEDULE**\nMon: legs\nTue: rest",
            &["Weekly Schedule"],
            PreambleMode::Drop,
        );
        assert_eq!(plan.get("Weekly Schedule"), Some("Mon: legs\nTue: rest\n"));
    }

    #[test]
    fn test_every_label_present_even_when_nothing_matches() {
        let labels = ["Aerobic Base", "Interval Training", "Recovery Strategy"];
        let plan = partition("no headings at all\njust prose", &labels, PreambleMode::Drop);
        assert_eq!(plan.labels().collect::<Vec<_>>(), labels);
        assert!(plan.sections.iter().all(|s| s.body.is_empty()));
        assert_eq!(plan.filled_count(), 0);
    }

    #[test]
    fn test_output_follows_label_order_not_text_order() {
        let plan = partition(
            "2. Second\nb\n1. First\na",
            &["First", "Second"],
            PreambleMode::Drop,
        );
        assert_eq!(plan.labels().collect::<Vec<_>>(), vec!["First", "Second"]);
        assert_eq!(plan.get("First"), Some("a\n"));
        assert_eq!(plan.get("Second"), Some("b\n"));
    }

    #[test]
    fn test_repeated_header_appends_to_same_bucket() {
        let plan = partition(
            "Drills\none\nTargets\nx\nDrills\ntwo",
            &["Drills", "Targets"],
            PreambleMode::Drop,
        );
        assert_eq!(plan.get("Drills"), Some("one\ntwo\n"));
        assert_eq!(plan.get("Targets"), Some("x\n"));
    }

    #[test]
    fn test_blank_lines_inside_a_section_are_kept() {
        let plan = partition("Plan\nline one\n\nline two\n", &["Plan"], PreambleMode::Drop);
        assert_eq!(plan.get("Plan"), Some("line one\n\nline two\n"));
    }

    #[test]
    fn test_empty_input_and_empty_labels() {
        let plan = partition("", &["Only"], PreambleMode::Keep);
        assert_eq!(plan.get("Only"), Some(""));
        assert_eq!(plan.preamble.as_deref(), Some(""));

        let plan = partition("some text", &[], PreambleMode::Drop);
        assert!(plan.sections.is_empty());
    }

    #[test]
    fn test_crlf_line_endings_are_handled() {
        let plan = partition("Plan\r\nrun\r\n", &["Plan"], PreambleMode::Drop);
        assert_eq!(plan.get("Plan"), Some("run\n"));
    }
}
