//! Parse the inference service's labelled answer
//!
//! Expected shape (labels case-insensitive, surrounding text ignored):
//!
//! ```text
//! VERDICT: NOT NOW
//! VERSE: "All the world's a stage"
//! TEASER: First sentence. Second sentence.
//! ```

use crate::core::error::{BaziError, Result};
use crate::verdict::Verdict;
use serde::{Deserialize, Serialize};

/// Verdict, verse and teaser as returned by the service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OracleAnswer {
    pub verdict: Verdict,
    pub verse: String,
    pub teaser: String,
}

/// Text after `label` on the first line that carries it
fn field<'a>(response: &'a str, label: &str) -> Option<&'a str> {
    response.lines().find_map(|line| {
        let trimmed = line.trim_start();
        let head = trimmed.get(..label.len())?;
        if head.eq_ignore_ascii_case(label) {
            Some(trimmed[label.len()..].trim())
        } else {
            None
        }
    })
}

fn missing(label: &str) -> BaziError {
    BaziError::ExternalService(format!("No {} line in response", label))
}

pub fn parse_answer(response: &str) -> Result<OracleAnswer> {
    let verdict_text = field(response, "VERDICT:").ok_or_else(|| missing("VERDICT"))?;
    let verdict_text = verdict_text.trim_matches(|c: char| c == '[' || c == ']' || c == '*');
    let verdict: Verdict = verdict_text.parse().map_err(BaziError::ExternalService)?;

    let verse = field(response, "VERSE:").ok_or_else(|| missing("VERSE"))?;
    let verse = verse
        .strip_prefix('"')
        .and_then(|v| v.find('"').map(|end| &v[..end]))
        .ok_or_else(|| BaziError::ExternalService("VERSE is not quoted".into()))?;

    let teaser = field(response, "TEASER:").ok_or_else(|| missing("TEASER"))?;
    if verse.is_empty() || teaser.is_empty() {
        return Err(BaziError::ExternalService("Empty VERSE or TEASER".into()));
    }

    Ok(OracleAnswer {
        verdict,
        verse: verse.to_string(),
        teaser: teaser.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_well_formed_answer() {
        let response = r#"VERDICT: YES
VERSE: "Hope springs eternal in the human breast"
TEASER: Fire meets fire this year. The path is open."#;
        let answer = parse_answer(response).unwrap();
        assert_eq!(answer.verdict, Verdict::Yes);
        assert_eq!(answer.verse, "Hope springs eternal in the human breast");
        assert_eq!(answer.teaser, "Fire meets fire this year. The path is open.");
    }

    #[test]
    fn test_parse_with_surrounding_text_and_case() {
        let response = r#"Here is my reading:

    verdict: not now
    Verse: "To be, or not to be"
    teaser: Wait. Prepare.

Good luck!"#;
        let answer = parse_answer(response).unwrap();
        assert_eq!(answer.verdict, Verdict::NotNow);
        assert_eq!(answer.verse, "To be, or not to be");
        assert_eq!(answer.teaser, "Wait. Prepare.");
    }

    #[test]
    fn test_parse_bracketed_verdict() {
        let response = "VERDICT: [NO]\nVERSE: \"Gang aft agley\"\nTEASER: Not this way. Not now.";
        assert_eq!(parse_answer(response).unwrap().verdict, Verdict::No);
    }

    #[test]
    fn test_missing_field_is_service_error() {
        let response = "VERDICT: YES\nTEASER: Something. Something else.";
        assert!(matches!(parse_answer(response), Err(BaziError::ExternalService(_))));
    }

    #[test]
    fn test_unknown_verdict_is_service_error() {
        let response = "VERDICT: MAYBE\nVERSE: \"x\"\nTEASER: y";
        assert!(matches!(parse_answer(response), Err(BaziError::ExternalService(_))));
    }

    #[test]
    fn test_unquoted_verse_is_rejected() {
        let response = "VERDICT: YES\nVERSE: no quotes here\nTEASER: y";
        assert!(parse_answer(response).is_err());
    }
}
