//! The fixed 10-question mood-tracking quiz.
//!
//! Unlike the screening questionnaire, options are categorical rather than
//! numeric: each option maps to one of four mood categories.

use serde::{Deserialize, Serialize};
use std::fmt;

/// Number of questions in the mood quiz.
pub const MOOD_QUESTION_COUNT: usize = 10;

/// The four mood categories.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mood {
    Calm,
    Anger,
    Happy,
    Balanced,
}

impl Mood {
    /// User-facing label.
    pub fn label(&self) -> &'static str {
        match self {
            Mood::Calm => "Calm",
            Mood::Anger => "Anger",
            Mood::Happy => "Happy",
            Mood::Balanced => "Balanced",
        }
    }
}

impl fmt::Display for Mood {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// One selectable option: display text, its category, and an emoji.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodOption {
    pub text: &'static str,
    pub mood: Mood,
    pub emoji: &'static str,
}

/// A single mood quiz question with its four options.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoodQuestion {
    pub id: u8,
    pub text: &'static str,
    pub options: [MoodOption; 4],
}

impl MoodQuestion {
    /// Returns the option at the given index, if in range.
    pub fn option(&self, option_index: u8) -> Option<&MoodOption> {
        self.options.get(option_index as usize)
    }
}

macro_rules! opt {
    ($text:literal, $mood:ident, $emoji:literal) => {
        MoodOption {
            text: $text,
            mood: Mood::$mood,
            emoji: $emoji,
        }
    };
}

/// The mood quiz, in presentation order.
pub const MOOD_QUESTIONS: [MoodQuestion; MOOD_QUESTION_COUNT] = [
    MoodQuestion {
        id: 1,
        text: "How would you describe your overall mood today?",
        options: [
            opt!("Peaceful and calm", Calm, "😌"),
            opt!("Frustrated or irritated", Anger, "😠"),
            opt!("Happy and content", Happy, "😊"),
            opt!("Balanced and steady", Balanced, "🌿"),
        ],
    },
    MoodQuestion {
        id: 2,
        text: "How was your energy level throughout the day?",
        options: [
            opt!("Low and relaxed", Calm, "🌙"),
            opt!("Tense and agitated", Anger, "😠"),
            opt!("Positive and upbeat", Happy, "☀️"),
            opt!("Stable and consistent", Balanced, "⚖️"),
        ],
    },
    MoodQuestion {
        id: 3,
        text: "How did you handle stress today?",
        options: [
            opt!("Stayed calm and composed", Calm, "🧘"),
            opt!("Felt overwhelmed or angry", Anger, "💢"),
            opt!("Stayed optimistic", Happy, "🌈"),
            opt!("Found balance easily", Balanced, "🍃"),
        ],
    },
    MoodQuestion {
        id: 4,
        text: "How were your social interactions?",
        options: [
            opt!("Quiet and reflective", Calm, "🤫"),
            opt!("Short-tempered or annoyed", Anger, "😒"),
            opt!("Joyful and warm", Happy, "🤗"),
            opt!("Harmonious and comfortable", Balanced, "🤝"),
        ],
    },
    MoodQuestion {
        id: 5,
        text: "What best describes your thoughts today?",
        options: [
            opt!("Peaceful and clear", Calm, "💭"),
            opt!("Racing or hostile", Anger, "🌪️"),
            opt!("Positive and hopeful", Happy, "✨"),
            opt!("Centered and focused", Balanced, "🎯"),
        ],
    },
    MoodQuestion {
        id: 6,
        text: "How did you sleep last night?",
        options: [
            opt!("Deep and restful", Calm, "😴"),
            opt!("Restless or troubled", Anger, "😖"),
            opt!("Good and pleasant", Happy, "🌟"),
            opt!("Normal and adequate", Balanced, "💤"),
        ],
    },
    MoodQuestion {
        id: 7,
        text: "How productive did you feel?",
        options: [
            opt!("Took it slow and steady", Calm, "🐢"),
            opt!("Distracted by frustration", Anger, "😾"),
            opt!("Enjoyed what I did", Happy, "😄"),
            opt!("Accomplished goals calmly", Balanced, "✅"),
        ],
    },
    MoodQuestion {
        id: 8,
        text: "How did you feel physically?",
        options: [
            opt!("Relaxed and at ease", Calm, "🛀"),
            opt!("Tense or on edge", Anger, "😬"),
            opt!("Light and cheerful", Happy, "🦋"),
            opt!("Healthy and stable", Balanced, "🌱"),
        ],
    },
    MoodQuestion {
        id: 9,
        text: "What was your main emotion today?",
        options: [
            opt!("Tranquility", Calm, "🕊️"),
            opt!("Anger or resentment", Anger, "😡"),
            opt!("Joy", Happy, "😁"),
            opt!("Contentment", Balanced, "😊"),
        ],
    },
    MoodQuestion {
        id: 10,
        text: "How do you feel about tomorrow?",
        options: [
            opt!("Peaceful and accepting", Calm, "🌊"),
            opt!("Worried or irritated", Anger, "😠"),
            opt!("Optimistic and hopeful", Happy, "🌅"),
            opt!("Confident and prepared", Balanced, "🧭"),
        ],
    },
];

/// Looks up a mood question by its id.
pub fn mood_question_by_id(id: u8) -> Option<&'static MoodQuestion> {
    MOOD_QUESTIONS.iter().find(|q| q.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn quiz_has_ten_sequential_ids() {
        for (index, question) in MOOD_QUESTIONS.iter().enumerate() {
            assert_eq!(question.id as usize, index + 1);
        }
    }

    #[test]
    fn every_question_offers_all_four_categories() {
        for question in &MOOD_QUESTIONS {
            let moods: Vec<Mood> = question.options.iter().map(|o| o.mood).collect();
            assert!(moods.contains(&Mood::Calm));
            assert!(moods.contains(&Mood::Anger));
            assert!(moods.contains(&Mood::Happy));
            assert!(moods.contains(&Mood::Balanced));
        }
    }

    #[test]
    fn option_lookup_respects_bounds() {
        let q = &MOOD_QUESTIONS[0];
        assert_eq!(q.option(0).unwrap().mood, Mood::Calm);
        assert!(q.option(4).is_none());
    }

    #[test]
    fn mood_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Mood::Balanced).unwrap(), "\"balanced\"");
    }
}
