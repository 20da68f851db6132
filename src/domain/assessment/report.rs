//! Report payload assembly.
//!
//! Pure assembly of the guardian-facing report from the contact details,
//! the score, the classification, and the answered questions. The payload
//! is handed to the email collaborator; no I/O happens here.

use serde::{Deserialize, Serialize};

use crate::domain::foundation::DomainError;

use super::questionnaire::QUESTIONS;
use super::scoring::{AnswerSet, MAX_SCORE};
use super::severity::SeverityAssessment;

/// Contact details collected before the questionnaire starts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactInfo {
    pub user_name: String,
    pub user_email: String,
    pub parent_name: String,
    pub parent_email: String,
    pub parent_phone: String,
}

/// One answered question, rendered as user-facing text.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AnsweredQuestion {
    pub question: String,
    pub answer: String,
}

/// The fully-assembled report handed to the email collaborator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportPayload {
    pub contact: ContactInfo,
    pub score: u8,
    pub max_score: u8,
    /// `score / max_score * 100`, rounded to one decimal place.
    pub percentage: f64,
    pub severity: String,
    pub description: String,
    /// (question, chosen option) pairs in questionnaire order.
    pub answers: Vec<AnsweredQuestion>,
}

/// Rounds a score to a one-decimal percentage of the maximum.
pub fn score_percentage(score: u8) -> f64 {
    (f64::from(score) / f64::from(MAX_SCORE) * 100.0 * 10.0).round() / 10.0
}

/// Assembles the report payload.
///
/// # Errors
///
/// Returns `InvalidInput` if any question lacks an answer or an answer's
/// option index has no option text; a scored answer set always satisfies
/// both.
pub fn build_report(
    contact: ContactInfo,
    score: u8,
    assessment: &SeverityAssessment,
    answers: &AnswerSet,
) -> Result<ReportPayload, DomainError> {
    let mut answered = Vec::with_capacity(QUESTIONS.len());
    for question in &QUESTIONS {
        let option_index = answers.get(question.id).ok_or_else(|| {
            DomainError::invalid_input(format!("Question {} has no answer", question.id))
        })?;
        let answer = question.option_text(option_index).ok_or_else(|| {
            DomainError::invalid_input(format!(
                "Question {} has no option at index {option_index}",
                question.id
            ))
        })?;
        answered.push(AnsweredQuestion {
            question: question.text.to_string(),
            answer: answer.to_string(),
        });
    }

    Ok(ReportPayload {
        contact,
        score,
        max_score: MAX_SCORE,
        percentage: score_percentage(score),
        severity: assessment.level.label().to_string(),
        description: assessment.description().to_string(),
        answers: answered,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::assessment::severity::classify;

    fn contact() -> ContactInfo {
        ContactInfo {
            user_name: "Jamie".to_string(),
            user_email: "jamie@example.com".to_string(),
            parent_name: "Alex".to_string(),
            parent_email: "alex@example.com".to_string(),
            parent_phone: "555-0100".to_string(),
        }
    }

    fn uniform_answers(option_index: u8) -> AnswerSet {
        (1..=10).map(|q| (q, option_index)).collect()
    }

    #[test]
    fn report_contains_all_ten_answers_in_order() {
        let answers = uniform_answers(1);
        let assessment = classify(10).unwrap();
        let report = build_report(contact(), 10, &assessment, &answers).unwrap();

        assert_eq!(report.answers.len(), 10);
        assert_eq!(report.answers[0].question, QUESTIONS[0].text);
        assert_eq!(report.answers[0].answer, "Several days");
    }

    #[test]
    fn percentage_rounds_to_one_decimal() {
        assert_eq!(score_percentage(12), 40.0);
        assert_eq!(score_percentage(0), 0.0);
        assert_eq!(score_percentage(30), 100.0);
        // 7/30 = 23.333...% -> 23.3
        assert_eq!(score_percentage(7), 23.3);
    }

    #[test]
    fn report_carries_severity_and_description() {
        let answers = uniform_answers(3);
        let assessment = classify(30).unwrap();
        let report = build_report(contact(), 30, &assessment, &answers).unwrap();

        assert_eq!(report.severity, "Severe");
        assert!(report.description.contains("severe depression symptoms"));
        assert_eq!(report.max_score, 30);
    }

    #[test]
    fn missing_answer_is_rejected() {
        let answers: AnswerSet = (1..=9).map(|q| (q, 0)).collect();
        let assessment = classify(0).unwrap();
        assert!(build_report(contact(), 0, &assessment, &answers).is_err());
    }
}
