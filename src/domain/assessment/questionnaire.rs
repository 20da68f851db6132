//! The fixed 10-question depression screening questionnaire.
//!
//! PHQ-style Likert items: every question offers the same four frequency
//! options, scored by option index (0-3). The question set is fixed at
//! compile time; the wording is user-facing policy text and must stay
//! stable across the API and the emailed report.

/// Number of questions in the screening questionnaire.
pub const QUESTION_COUNT: usize = 10;

/// Number of options per question; option index doubles as the score.
pub const OPTIONS_PER_QUESTION: usize = 4;

/// The four frequency options shared by every question.
pub const FREQUENCY_OPTIONS: [&str; OPTIONS_PER_QUESTION] = [
    "Not at all",
    "Several days",
    "More than half the days",
    "Nearly every day",
];

/// A single screening question.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Question {
    /// Question id, 1-based and stable.
    pub id: u8,
    /// User-facing question text.
    pub text: &'static str,
}

impl Question {
    /// Returns the option text for the given index, if in range.
    pub fn option_text(&self, option_index: u8) -> Option<&'static str> {
        FREQUENCY_OPTIONS.get(option_index as usize).copied()
    }
}

/// The screening questionnaire, in presentation order.
pub const QUESTIONS: [Question; QUESTION_COUNT] = [
    Question {
        id: 1,
        text: "Over the past two weeks, how often have you felt little interest or pleasure in doing things?",
    },
    Question {
        id: 2,
        text: "How often have you felt down, depressed, or hopeless?",
    },
    Question {
        id: 3,
        text: "How often have you had trouble falling asleep, staying asleep, or sleeping too much?",
    },
    Question {
        id: 4,
        text: "How often have you felt tired or had little energy?",
    },
    Question {
        id: 5,
        text: "How often have you had poor appetite or been overeating?",
    },
    Question {
        id: 6,
        text: "How often have you felt bad about yourself or that you're a failure?",
    },
    Question {
        id: 7,
        text: "How often have you had trouble concentrating on things like reading or watching TV?",
    },
    Question {
        id: 8,
        text: "How often have you moved or spoken so slowly that others noticed? Or been so fidgety or restless?",
    },
    Question {
        id: 9,
        text: "How often have you felt isolated or withdrawn from friends and family?",
    },
    Question {
        id: 10,
        text: "How often have you felt that things are overwhelming or too difficult to handle?",
    },
];

/// Looks up a question by its id.
pub fn question_by_id(id: u8) -> Option<&'static Question> {
    QUESTIONS.iter().find(|q| q.id == id)
}
