//! Speaker plan parsing for lead-directed selection.
//!
//! Extracts an ordered speaking plan from the decider's free-form reply.
//! Pure text handling: no I/O, no session management.

use crate::roster::Roster;

/// Parse a comma-separated list of participant names.
///
/// Entries are trimmed; entries matching no roster name are dropped
/// silently. The reply is untrusted free text, so an unusable reply simply
/// yields an empty plan and the caller falls back to the full roster.
pub fn parse_speaker_plan(reply: &str, roster: &Roster) -> Vec<String> {
    reply
        .split(',')
        .map(str::trim)
        .filter(|entry| !entry.is_empty())
        .filter(|entry| roster.contains(entry))
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster(list: &[&str]) -> Roster {
        Roster::new(list.iter().map(|s| s.to_string()).collect()).unwrap()
    }

    #[test]
    fn test_parse_trims_whitespace() {
        let plan = parse_speaker_plan("  Analyst ,Advisor  ", &roster(&["Analyst", "Advisor"]));
        assert_eq!(plan, vec!["Analyst", "Advisor"]);
    }

    #[test]
    fn test_parse_drops_unknown_names() {
        let plan = parse_speaker_plan(
            "Analyst, Stranger, Advisor",
            &roster(&["Analyst", "Advisor"]),
        );
        assert_eq!(plan, vec!["Analyst", "Advisor"]);
    }

    #[test]
    fn test_parse_preserves_reply_order() {
        let plan = parse_speaker_plan("Advisor, Analyst", &roster(&["Analyst", "Advisor"]));
        assert_eq!(plan, vec!["Advisor", "Analyst"]);
    }

    #[test]
    fn test_parse_empty_reply() {
        assert!(parse_speaker_plan("", &roster(&["Analyst"])).is_empty());
        assert!(parse_speaker_plan("  , ,  ", &roster(&["Analyst"])).is_empty());
    }

    #[test]
    fn test_parse_all_unknown_yields_empty() {
        assert!(parse_speaker_plan("Nobody, NoOne", &roster(&["Analyst"])).is_empty());
    }

    #[test]
    fn test_parse_keeps_repeated_names() {
        // A lead may schedule the same speaker twice in one round
        let plan = parse_speaker_plan("Analyst, Analyst", &roster(&["Analyst"]));
        assert_eq!(plan, vec!["Analyst", "Analyst"]);
    }
}
