//! HTTP DTOs for mood quiz endpoints.

use serde::{Deserialize, Serialize};

use crate::domain::mood::{Mood, MoodAnswer, MoodQuestion, MoodSummary};

/// One selected quiz option.
#[derive(Debug, Clone, Deserialize)]
pub struct MoodAnswerDto {
    pub question_id: u8,
    pub option_index: u8,
}

impl From<&MoodAnswerDto> for MoodAnswer {
    fn from(dto: &MoodAnswerDto) -> Self {
        Self {
            question_id: dto.question_id,
            option_index: dto.option_index,
        }
    }
}

/// Request carrying the whole completed quiz.
#[derive(Debug, Clone, Deserialize)]
pub struct SubmitMoodRequest {
    pub answers: Vec<MoodAnswerDto>,
}

/// Tally result returned to clients.
#[derive(Debug, Clone, Serialize)]
pub struct SubmitMoodResponse {
    pub dominant: Mood,
    pub counts: Vec<MoodCount>,
}

/// Count of answers mapped to one mood.
#[derive(Debug, Clone, Serialize)]
pub struct MoodCount {
    pub mood: Mood,
    pub count: usize,
}

impl From<&MoodSummary> for SubmitMoodResponse {
    fn from(summary: &MoodSummary) -> Self {
        Self {
            dominant: summary.dominant,
            counts: summary
                .counts
                .iter()
                .map(|&(mood, count)| MoodCount { mood, count })
                .collect(),
        }
    }
}

/// A quiz entry served to clients.
#[derive(Debug, Clone, Serialize)]
pub struct MoodQuestionResponse {
    pub id: u8,
    pub text: &'static str,
    pub options: Vec<MoodOptionResponse>,
}

/// One selectable option with its display emoji.
#[derive(Debug, Clone, Serialize)]
pub struct MoodOptionResponse {
    pub text: &'static str,
    pub emoji: &'static str,
}

impl From<&MoodQuestion> for MoodQuestionResponse {
    fn from(question: &MoodQuestion) -> Self {
        Self {
            id: question.id,
            text: question.text,
            options: question
                .options
                .iter()
                .map(|opt| MoodOptionResponse {
                    text: opt.text,
                    emoji: opt.emoji,
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submit_mood_request_deserializes() {
        let json = r#"{"answers": [{"question_id": 1, "option_index": 0}]}"#;
        let req: SubmitMoodRequest = serde_json::from_str(json).unwrap();
        assert_eq!(req.answers.len(), 1);
    }

    #[test]
    fn mood_serializes_lowercase() {
        let json = serde_json::to_string(&Mood::Anger).unwrap();
        assert_eq!(json, r#""anger""#);
    }

    #[test]
    fn question_response_keeps_option_emoji() {
        let question = crate::domain::mood::mood_question_by_id(1).unwrap();
        let response = MoodQuestionResponse::from(question);
        assert_eq!(response.options.len(), 4);
        assert!(!response.options[0].emoji.is_empty());
    }
}
