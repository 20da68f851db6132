//! Severity classification for screening scores.
//!
//! A single ordered band table maps total scores to severity levels. The
//! boundaries are contiguous, non-overlapping, and cover the whole 0-30
//! range; every consumer (HTTP responses, the emailed report) reads this
//! table so the boundaries exist in exactly one place.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::domain::foundation::DomainError;

use super::scoring::MAX_SCORE;

/// Ordered severity levels derived from a screening score.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Severity {
    Minimal,
    Mild,
    Moderate,
    ModeratelySevere,
    Severe,
}

impl Severity {
    /// User-facing label for this level.
    pub fn label(&self) -> &'static str {
        match self {
            Severity::Minimal => "Minimal",
            Severity::Mild => "Mild",
            Severity::Moderate => "Moderate",
            Severity::ModeratelySevere => "Moderately Severe",
            Severity::Severe => "Severe",
        }
    }

    /// Fixed user-facing description for this level.
    ///
    /// Policy text reproduced verbatim in API responses and reports.
    pub fn description(&self) -> &'static str {
        match self {
            Severity::Minimal => {
                "Your responses indicate minimal signs of depression. You're doing well!"
            }
            Severity::Mild => {
                "Your responses suggest mild depression symptoms. It's good to stay aware and practice self-care."
            }
            Severity::Moderate => {
                "Your responses indicate moderate depression symptoms. We recommend speaking with a mental health professional."
            }
            Severity::ModeratelySevere => {
                "Your responses suggest moderately severe depression. Professional support would be beneficial."
            }
            Severity::Severe => {
                "Your responses indicate severe depression symptoms. We strongly recommend seeking professional help immediately."
            }
        }
    }
}

impl fmt::Display for Severity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// Severity bands as (inclusive upper bound, level), scanned in order.
const SEVERITY_BANDS: [(u8, Severity); 5] = [
    (4, Severity::Minimal),
    (9, Severity::Mild),
    (14, Severity::Moderate),
    (19, Severity::ModeratelySevere),
    (MAX_SCORE, Severity::Severe),
];

/// A classified score: severity level plus its description.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeverityAssessment {
    pub level: Severity,
}

impl SeverityAssessment {
    /// The description associated with the level.
    pub fn description(&self) -> &'static str {
        self.level.description()
    }
}

/// Classifies a total score into its severity band.
///
/// # Errors
///
/// Returns `InvalidInput` if the score exceeds the maximum achievable
/// score; callers produce scores via [`super::scoring::score`], so this is
/// a precondition violation.
pub fn classify(total_score: u8) -> Result<SeverityAssessment, DomainError> {
    if total_score > MAX_SCORE {
        return Err(DomainError::invalid_input(format!(
            "Score {total_score} exceeds maximum {MAX_SCORE}"
        )));
    }

    let level = SEVERITY_BANDS
        .iter()
        .find(|(upper, _)| total_score <= *upper)
        .map(|(_, level)| *level)
        .unwrap_or(Severity::Severe);

    Ok(SeverityAssessment { level })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn level(score: u8) -> Severity {
        classify(score).unwrap().level
    }

    #[test]
    fn boundaries_classify_correctly() {
        assert_eq!(level(0), Severity::Minimal);
        assert_eq!(level(4), Severity::Minimal);
        assert_eq!(level(5), Severity::Mild);
        assert_eq!(level(9), Severity::Mild);
        assert_eq!(level(10), Severity::Moderate);
        assert_eq!(level(14), Severity::Moderate);
        assert_eq!(level(15), Severity::ModeratelySevere);
        assert_eq!(level(19), Severity::ModeratelySevere);
        assert_eq!(level(20), Severity::Severe);
        assert_eq!(level(30), Severity::Severe);
    }

    #[test]
    fn bands_cover_the_entire_range_without_gaps() {
        let mut previous = level(0);
        for score in 1..=MAX_SCORE {
            let current = level(score);
            // Severity never decreases as the score rises.
            assert!(current >= previous, "score {score}");
            previous = current;
        }
    }

    #[test]
    fn score_above_maximum_is_rejected() {
        assert!(classify(31).is_err());
        assert!(classify(255).is_err());
    }

    #[test]
    fn every_level_has_a_distinct_description() {
        let levels = [
            Severity::Minimal,
            Severity::Mild,
            Severity::Moderate,
            Severity::ModeratelySevere,
            Severity::Severe,
        ];
        for window in levels.windows(2) {
            assert_ne!(window[0].description(), window[1].description());
        }
    }

    #[test]
    fn labels_match_product_wording() {
        assert_eq!(Severity::ModeratelySevere.label(), "Moderately Severe");
        assert_eq!(Severity::ModeratelySevere.to_string(), "Moderately Severe");
    }

    #[test]
    fn severity_serializes_snake_case() {
        let json = serde_json::to_string(&Severity::ModeratelySevere).unwrap();
        assert_eq!(json, "\"moderately_severe\"");
    }
}
