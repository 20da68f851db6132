//! Mock chat provider for testing.

use std::sync::Mutex;

use async_trait::async_trait;

use crate::ports::{ChatError, ChatMessage, ChatProvider};

/// Mock provider that replays canned responses.
///
/// Responses are consumed in order; once exhausted, the last one repeats.
/// Every received transcript is recorded for assertions.
#[derive(Debug, Default)]
pub struct MockChatProvider {
    responses: Mutex<Vec<String>>,
    transcripts: Mutex<Vec<Vec<ChatMessage>>>,
    fail_with_auth_error: bool,
}

impl MockChatProvider {
    /// Creates a provider with a single canned response.
    pub fn new(response: impl Into<String>) -> Self {
        Self {
            responses: Mutex::new(vec![response.into()]),
            transcripts: Mutex::new(Vec::new()),
            fail_with_auth_error: false,
        }
    }

    /// Adds another canned response to the queue.
    pub fn with_response(self, response: impl Into<String>) -> Self {
        self.responses.lock().unwrap().push(response.into());
        self
    }

    /// Makes every call fail with `AuthenticationFailed`.
    pub fn failing() -> Self {
        Self {
            responses: Mutex::new(Vec::new()),
            transcripts: Mutex::new(Vec::new()),
            fail_with_auth_error: true,
        }
    }

    /// Returns the transcripts received so far.
    pub fn received(&self) -> Vec<Vec<ChatMessage>> {
        self.transcripts.lock().unwrap().clone()
    }
}

#[async_trait]
impl ChatProvider for MockChatProvider {
    async fn generate_reply(&self, transcript: &[ChatMessage]) -> Result<String, ChatError> {
        if self.fail_with_auth_error {
            return Err(ChatError::AuthenticationFailed);
        }

        self.transcripts.lock().unwrap().push(transcript.to_vec());

        let mut responses = self.responses.lock().unwrap();
        if responses.is_empty() {
            return Err(ChatError::EmptyResponse);
        }
        if responses.len() > 1 {
            Ok(responses.remove(0))
        } else {
            Ok(responses[0].clone())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn replays_responses_in_order() {
        let provider = MockChatProvider::new("first").with_response("second");

        let transcript = vec![ChatMessage::user("hi")];
        assert_eq!(provider.generate_reply(&transcript).await.unwrap(), "first");
        assert_eq!(provider.generate_reply(&transcript).await.unwrap(), "second");
        // Last response repeats once the queue drains
        assert_eq!(provider.generate_reply(&transcript).await.unwrap(), "second");
    }

    #[tokio::test]
    async fn records_received_transcripts() {
        let provider = MockChatProvider::new("ok");
        provider
            .generate_reply(&[ChatMessage::user("hello")])
            .await
            .unwrap();

        let received = provider.received();
        assert_eq!(received.len(), 1);
        assert_eq!(received[0][0].content, "hello");
    }

    #[tokio::test]
    async fn failing_provider_reports_auth_error() {
        let provider = MockChatProvider::failing();
        let result = provider.generate_reply(&[ChatMessage::user("hi")]).await;
        assert!(matches!(result, Err(ChatError::AuthenticationFailed)));
    }
}
