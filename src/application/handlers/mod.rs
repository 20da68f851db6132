//! Application command handlers.

mod create_post;
mod get_post;
mod list_posts;
mod send_chat_message;
mod submit_assessment;
mod submit_mood;

pub use create_post::{CreatePostCommand, CreatePostHandler, CreatePostResult};
pub use get_post::{GetPostHandler, GetPostQuery};
pub use list_posts::{ListPostsHandler, ListPostsQuery};
pub use send_chat_message::{SendChatMessageCommand, SendChatMessageHandler};
pub use submit_assessment::{
    SubmitAssessmentCommand, SubmitAssessmentHandler, SubmitAssessmentResult,
};
pub use submit_mood::{SubmitMoodCommand, SubmitMoodHandler};
