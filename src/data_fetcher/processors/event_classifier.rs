//! Classification of the sub-events inside one plate appearance.
//!
//! The live feed mixes pitches with substitutions, pickoff throws, mound
//! visits and other game-state entries. [`classify`] walks a fixed table and
//! the first matching rule decides what happens to a sub-event.

use crate::data_fetcher::processors::json_path::{get_or_default, get_path};
use serde_json::Value;

/// What the extractor does with a sub-event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubEventKind {
    /// A new pitcher enters mid plate appearance.
    PitchingChange,
    /// A fielder enters or moves to another position.
    DefensiveChange,
    /// A pinch hitter replaces the batter.
    PinchHitter,
    /// No record, no state change.
    Skip,
    /// A pitch; emits one record.
    Pitch,
}

#[derive(Debug, Clone, Copy)]
enum Rule {
    EventType(&'static str),
    Code(&'static str),
    Description(&'static str),
    NotPitch,
}

/// Ordered rules. Earlier rows take priority: an automatic strike (`AC`) is
/// skipped even though it is flagged as a pitch.
const RULES: &[(Rule, SubEventKind)] = &[
    (Rule::EventType("pitching_substitution"), SubEventKind::PitchingChange),
    (Rule::Code("AC"), SubEventKind::Skip),
    (Rule::EventType("defensive_substitution"), SubEventKind::DefensiveChange),
    (Rule::EventType("defensive_switch"), SubEventKind::DefensiveChange),
    (Rule::EventType("offensive_substitution"), SubEventKind::PinchHitter),
    (Rule::EventType("batter_timeout"), SubEventKind::Skip),
    (Rule::EventType("wild_pitch"), SubEventKind::Skip),
    (Rule::Description("Pitcher Step Off"), SubEventKind::Skip),
    (Rule::Description("Pickoff Attempt 1B"), SubEventKind::Skip),
    (Rule::Description("Pickoff Attempt 2B"), SubEventKind::Skip),
    (Rule::Description("Pickoff Attempt 3B"), SubEventKind::Skip),
    (Rule::EventType("stolen_base_1b"), SubEventKind::Skip),
    (Rule::EventType("stolen_base_2b"), SubEventKind::Skip),
    (Rule::EventType("stolen_base_3b"), SubEventKind::Skip),
    (Rule::EventType("mound_visit"), SubEventKind::Skip),
    (Rule::EventType("game_advisory"), SubEventKind::Skip),
    (Rule::NotPitch, SubEventKind::Skip),
];

fn detail<'a>(sub_event: &'a Value, key: &str) -> Option<&'a str> {
    get_path(sub_event, &["details", key]).and_then(Value::as_str)
}

impl Rule {
    fn matches(self, sub_event: &Value) -> bool {
        match self {
            Rule::EventType(expected) => detail(sub_event, "eventType") == Some(expected),
            Rule::Code(expected) => detail(sub_event, "code") == Some(expected),
            Rule::Description(expected) => detail(sub_event, "description") == Some(expected),
            Rule::NotPitch => !get_or_default(sub_event, &["isPitch"], false),
        }
    }
}

/// Classifies one entry of a play's `playEvents`.
pub fn classify(sub_event: &Value) -> SubEventKind {
    RULES
        .iter()
        .find(|(rule, _)| rule.matches(sub_event))
        .map_or(SubEventKind::Pitch, |(_, kind)| *kind)
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn event(event_type: Option<&str>, code: Option<&str>, is_pitch: bool) -> Value {
        let mut details = serde_json::Map::new();
        if let Some(event_type) = event_type {
            details.insert("eventType".into(), json!(event_type));
        }
        if let Some(code) = code {
            details.insert("code".into(), json!(code));
        }
        json!({ "details": details, "isPitch": is_pitch })
    }

    #[test]
    fn test_plain_pitch() {
        assert_eq!(classify(&event(None, Some("B"), true)), SubEventKind::Pitch);
        assert_eq!(classify(&event(None, Some("X"), true)), SubEventKind::Pitch);
    }

    #[test]
    fn test_substitutions() {
        assert_eq!(
            classify(&event(Some("pitching_substitution"), None, false)),
            SubEventKind::PitchingChange
        );
        assert_eq!(
            classify(&event(Some("defensive_substitution"), None, false)),
            SubEventKind::DefensiveChange
        );
        assert_eq!(
            classify(&event(Some("defensive_switch"), None, false)),
            SubEventKind::DefensiveChange
        );
        assert_eq!(
            classify(&event(Some("offensive_substitution"), None, false)),
            SubEventKind::PinchHitter
        );
    }

    #[test]
    fn test_first_match_wins() {
        // A pitching change flagged as a pitch is still a pitching change.
        assert_eq!(
            classify(&event(Some("pitching_substitution"), Some("AC"), true)),
            SubEventKind::PitchingChange
        );
        // Automatic strikes are skipped before the pitch flag is consulted.
        assert_eq!(classify(&event(None, Some("AC"), true)), SubEventKind::Skip);
        assert_eq!(
            classify(&event(Some("defensive_switch"), Some("AC"), false)),
            SubEventKind::Skip
        );
    }

    #[test]
    fn test_skipped_kinds() {
        for event_type in [
            "batter_timeout",
            "wild_pitch",
            "stolen_base_1b",
            "stolen_base_2b",
            "stolen_base_3b",
            "mound_visit",
            "game_advisory",
        ] {
            assert_eq!(
                classify(&event(Some(event_type), None, true)),
                SubEventKind::Skip,
                "{event_type}"
            );
        }
    }

    #[test]
    fn test_pickoffs_and_step_offs() {
        for description in [
            "Pitcher Step Off",
            "Pickoff Attempt 1B",
            "Pickoff Attempt 2B",
            "Pickoff Attempt 3B",
        ] {
            let sub_event = json!({ "details": { "description": description }, "isPitch": true });
            assert_eq!(classify(&sub_event), SubEventKind::Skip, "{description}");
        }
    }

    #[test]
    fn test_non_pitch_is_skipped() {
        assert_eq!(classify(&event(None, None, false)), SubEventKind::Skip);
        assert_eq!(classify(&json!({ "details": {} })), SubEventKind::Skip);
    }
}
