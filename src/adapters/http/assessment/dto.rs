//! HTTP DTOs for assessment endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::assessment::{ContactInfo, Question, FREQUENCY_OPTIONS};

/// Contact details collected before the questionnaire starts.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactInfoDto {
    pub user_name: String,
    pub user_email: String,
    pub parent_name: String,
    pub parent_email: String,
    pub parent_phone: String,
}

impl From<ContactInfoDto> for ContactInfo {
    fn from(dto: ContactInfoDto) -> Self {
        Self {
            user_name: dto.user_name,
            user_email: dto.user_email,
            parent_name: dto.parent_name,
            parent_email: dto.parent_email,
            parent_phone: dto.parent_phone,
        }
    }
}

/// One answered question.
#[derive(Debug, Clone, Deserialize)]
pub struct AnswerDto {
    pub question_id: u8,
    pub option_index: u8,
}

/// Request carrying the whole completed screening run.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitReportRequest {
    pub contact: ContactInfoDto,
    pub answers: Vec<AnswerDto>,
}

/// Result shown to the user after scoring.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitReportResponse {
    pub assessment_id: String,
    pub score: u8,
    pub max_score: u8,
    pub percentage: f64,
    pub severity: String,
    pub description: String,
    pub report_dispatched: bool,
}

/// A questionnaire entry served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct QuestionResponse {
    pub id: u8,
    pub text: &'static str,
    pub options: [&'static str; 4],
}

impl From<&Question> for QuestionResponse {
    fn from(question: &Question) -> Self {
        Self {
            id: question.id,
            text: question.text,
            options: FREQUENCY_OPTIONS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_report_request_deserializes() {
        let json = r#"{
            "contact": {
                "user_name": "Jordan",
                "user_email": "jordan@example.com",
                "parent_name": "Sam",
                "parent_email": "sam@example.com",
                "parent_phone": "555-0100"
            },
            "answers": [{"question_id": 1, "option_index": 2}]
        }"#;
        let req: SubmitReportRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.contact.user_name, "Jordan");
        assert_eq!(req.answers.len(), 1);
        assert_eq!(req.answers[0].option_index, 2);
    }

    #[test]
    fn question_response_carries_frequency_options() {
        let question = crate::domain::assessment::question_by_id(1).unwrap();
        let response = QuestionResponse::from(question);
        assert_eq!(response.options[0], "Not at all");
        assert_eq!(response.options[3], "Nearly every day");
    }
}
