//! SubmitMood - Command handler for a completed mood quiz.

use crate::domain::foundation::DomainError;
use crate::domain::mood::{tally, MoodAnswer, MoodSummary};

/// Command carrying all ten quiz answers in selection order.
#[derive(Debug, Clone)]
pub struct SubmitMoodCommand {
    pub answers: Vec<MoodAnswer>,
}

/// Handler for mood quiz submissions.
///
/// Stateless: the tally is pure and nothing is persisted or dispatched.
#[derive(Debug, Clone, Default)]
pub struct SubmitMoodHandler;

impl SubmitMoodHandler {
    pub fn new() -> Self {
        Self
    }

    pub fn handle(&self, cmd: SubmitMoodCommand) -> Result<MoodSummary, DomainError> {
        tally(&cmd.answers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::mood::Mood;

    fn answers_from(option_indexes: [u8; 10]) -> Vec<MoodAnswer> {
        option_indexes
            .iter()
            .enumerate()
            .map(|(i, &option_index)| MoodAnswer {
                question_id: (i + 1) as u8,
                option_index,
            })
            .collect()
    }

    #[test]
    fn dominant_mood_is_selected() {
        let summary = SubmitMoodHandler::new()
            .handle(SubmitMoodCommand {
                answers: answers_from([2, 2, 2, 2, 2, 2, 0, 0, 1, 3]),
            })
            .unwrap();
        assert_eq!(summary.dominant, Mood::Happy);
        assert_eq!(summary.count(Mood::Happy), 6);
    }

    #[test]
    fn invalid_submission_is_rejected() {
        let result = SubmitMoodHandler::new().handle(SubmitMoodCommand {
            answers: Vec::new(),
        });
        assert!(result.is_err());
    }
}
