//! Mood tracking quiz - categorical tally with plurality dominant mood.

mod quiz;
mod tally;

pub use quiz::{
    mood_question_by_id, Mood, MoodOption, MoodQuestion, MOOD_QUESTIONS, MOOD_QUESTION_COUNT,
};
pub use tally::{tally, MoodAnswer, MoodSummary};
