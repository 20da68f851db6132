//! HTTP adapter for mood quiz endpoints.

mod dto;
mod handlers;
mod routes;

pub use dto::{
    MoodAnswerDto, MoodCount, MoodOptionResponse, MoodQuestionResponse, SubmitMoodRequest,
    SubmitMoodResponse,
};
pub use handlers::MoodHandlers;
pub use routes::mood_routes;
