//! Scoring for the screening questionnaire.
//!
//! The total score is the arithmetic sum of the selected option indexes,
//! one answer per question. Completeness and range are preconditions: the
//! surrounding flow enforces one answer per question before scoring, so a
//! violation here is reported to the caller rather than silently defaulted.

use std::collections::BTreeMap;

use crate::domain::foundation::DomainError;

use super::questionnaire::{question_by_id, QUESTION_COUNT};

/// Highest selectable option index (options are scored 0-3).
pub const MAX_OPTION_INDEX: u8 = 3;

/// Maximum achievable total score.
pub const MAX_SCORE: u8 = (QUESTION_COUNT as u8) * MAX_OPTION_INDEX;

/// A complete set of answers, keyed by question id.
///
/// Keys are unique by construction; insertion order is irrelevant since
/// lookup is by id.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AnswerSet {
    answers: BTreeMap<u8, u8>,
}

impl AnswerSet {
    /// Creates an empty answer set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Records an answer for a question, replacing any previous value.
    pub fn record(&mut self, question_id: u8, option_index: u8) {
        self.answers.insert(question_id, option_index);
    }

    /// Returns the selected option index for a question.
    pub fn get(&self, question_id: u8) -> Option<u8> {
        self.answers.get(&question_id).copied()
    }

    /// Number of answered questions.
    pub fn len(&self) -> usize {
        self.answers.len()
    }

    /// Returns true if no answers are recorded yet.
    pub fn is_empty(&self) -> bool {
        self.answers.is_empty()
    }

    /// Iterates (question_id, option_index) pairs in question-id order.
    pub fn iter(&self) -> impl Iterator<Item = (u8, u8)> + '_ {
        self.answers.iter().map(|(&q, &o)| (q, o))
    }
}

impl FromIterator<(u8, u8)> for AnswerSet {
    fn from_iter<I: IntoIterator<Item = (u8, u8)>>(iter: I) -> Self {
        Self {
            answers: iter.into_iter().collect(),
        }
    }
}

/// Computes the total score for a complete answer set.
///
/// # Errors
///
/// Returns `InvalidInput` if the set does not contain exactly one answer for
/// each of the ten questions, if any answer references an unknown question
/// id, or if any option index is outside `0..=3`.
pub fn score(answers: &AnswerSet) -> Result<u8, DomainError> {
    if answers.len() != QUESTION_COUNT {
        return Err(DomainError::invalid_input(format!(
            "Expected {} answers, got {}",
            QUESTION_COUNT,
            answers.len()
        )));
    }

    let mut total: u8 = 0;
    for (question_id, option_index) in answers.iter() {
        if question_by_id(question_id).is_none() {
            return Err(DomainError::invalid_input(format!(
                "Unknown question id {question_id}"
            ))
            .with_detail("question_id", question_id.to_string()));
        }
        if option_index > MAX_OPTION_INDEX {
            return Err(DomainError::invalid_input(format!(
                "Option index {option_index} for question {question_id} is out of range 0..={MAX_OPTION_INDEX}"
            ))
            .with_detail("question_id", question_id.to_string()));
        }
        total += option_index;
    }

    debug_assert!(total <= MAX_SCORE);
    Ok(total)
}
