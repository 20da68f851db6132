//! AI adapters.
//!
//! Implementations of the `ChatProvider` port: the Gemini client used in
//! production and a canned-response mock for tests.

mod gemini_provider;
mod mock_provider;

pub use gemini_provider::{GeminiConfig, GeminiProvider};
pub use mock_provider::MockChatProvider;
