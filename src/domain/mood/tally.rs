//! Dominant-mood tally.
//!
//! Tallies category frequency over the quiz answers and selects the
//! plurality category as the dominant mood. Ties break toward the category
//! encountered first in answer iteration order.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::{DomainError, ErrorCode};

use super::quiz::{mood_question_by_id, Mood, MOOD_QUESTION_COUNT};

/// One recorded quiz answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodAnswer {
    pub question_id: u8,
    pub option_index: u8,
}

/// Tally result: per-category counts plus the dominant mood.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MoodSummary {
    /// (category, count) for every category with at least one selection,
    /// in first-encountered order.
    pub counts: Vec<(Mood, usize)>,
    pub dominant: Mood,
}

impl MoodSummary {
    /// Count for a single category (0 if never selected).
    pub fn count(&self, mood: Mood) -> usize {
        self.counts
            .iter()
            .find(|(m, _)| *m == mood)
            .map(|(_, c)| *c)
            .unwrap_or(0)
    }
}

/// Tallies the quiz answers into a mood summary.
///
/// # Errors
///
/// Returns `InvalidInput` unless there is exactly one answer per question
/// with a valid option index.
pub fn tally(answers: &[MoodAnswer]) -> Result<MoodSummary, DomainError> {
    if answers.len() != MOOD_QUESTION_COUNT {
        return Err(DomainError::invalid_input(format!(
            "Expected {} answers, got {}",
            MOOD_QUESTION_COUNT,
            answers.len()
        )));
    }

    let mut counts: Vec<(Mood, usize)> = Vec::with_capacity(4);
    let mut seen_questions: Vec<u8> = Vec::with_capacity(answers.len());

    for answer in answers {
        let question = mood_question_by_id(answer.question_id).ok_or_else(|| {
            DomainError::invalid_input(format!("Unknown question id {}", answer.question_id))
        })?;
        if seen_questions.contains(&answer.question_id) {
            return Err(DomainError::invalid_input(format!(
                "Duplicate answer for question {}",
                answer.question_id
            )));
        }
        seen_questions.push(answer.question_id);

        let option = question.option(answer.option_index).ok_or_else(|| {
            DomainError::invalid_input(format!(
                "Option index {} for question {} is out of range",
                answer.option_index, answer.question_id
            ))
        })?;

        match counts.iter_mut().find(|(m, _)| *m == option.mood) {
            Some((_, c)) => *c += 1,
            None => counts.push((option.mood, 1)),
        }
    }

    // Plurality with first-encountered tie-break: a strictly greater count
    // is required to displace an earlier category.
    let dominant = counts
        .iter()
        .fold(None::<(Mood, usize)>, |best, &(mood, count)| match best {
            Some((_, best_count)) if count <= best_count => best,
            _ => Some((mood, count)),
        })
        .map(|(mood, _)| mood)
        .ok_or_else(|| {
            DomainError::new(ErrorCode::InternalError, "Tally produced no categories")
        })?;

    Ok(MoodSummary { counts, dominant })
}

#[cfg(test)]
mod tests {
    use super::*;

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
    fn uniform_answers_produce_that_mood() {
        // Option index 2 is the Happy option on every question.
        let summary = tally(&answers_from([2; 10])).unwrap();
        assert_eq!(summary.dominant, Mood::Happy);
        assert_eq!(summary.count(Mood::Happy), 10);
        assert_eq!(summary.count(Mood::Calm), 0);
    }

    #[test]
    fn plurality_wins() {
        // 4x Anger, 3x Calm, 2x Happy, 1x Balanced
        let summary = tally(&answers_from([1, 1, 1, 1, 0, 0, 0, 2, 2, 3])).unwrap();
        assert_eq!(summary.dominant, Mood::Anger);
        assert_eq!(summary.count(Mood::Anger), 4);
    }

    #[test]
    fn ties_break_toward_first_encountered_category() {
        // 5x Calm then 5x Happy: Calm is encountered first.
        let summary = tally(&answers_from([0, 0, 0, 0, 0, 2, 2, 2, 2, 2])).unwrap();
        assert_eq!(summary.dominant, Mood::Calm);

        // 5x Happy then 5x Calm: Happy is encountered first.
        let summary = tally(&answers_from([2, 2, 2, 2, 2, 0, 0, 0, 0, 0])).unwrap();
        assert_eq!(summary.dominant, Mood::Happy);
    }

    #[test]
    fn wrong_answer_count_is_rejected() {
        let answers: Vec<MoodAnswer> = answers_from([0; 10]).into_iter().take(9).collect();
        assert!(tally(&answers).is_err());
    }

    #[test]
    fn duplicate_question_is_rejected() {
        let mut answers = answers_from([0; 10]);
        answers[9].question_id = 1;
        let err = tally(&answers).unwrap_err();
        assert!(err.message().contains("Duplicate answer"));
    }

    #[test]
    fn out_of_range_option_is_rejected() {
        let mut answers = answers_from([0; 10]);
        answers[0].option_index = 4;
        assert!(tally(&answers).is_err());
    }

    #[test]
    fn counts_record_first_encounter_order() {
        let summary = tally(&answers_from([3, 1, 0, 2, 2, 2, 1, 1, 1, 3])).unwrap();
        let order: Vec<Mood> = summary.counts.iter().map(|(m, _)| *m).collect();
        assert_eq!(order, vec![Mood::Balanced, Mood::Anger, Mood::Calm, Mood::Happy]);
    }
}
