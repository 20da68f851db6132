//! Gemini implementation of the ChatProvider port.
//!
//! Calls the Generative Language API's `generateContent` endpoint. The
//! companion persona is primed through a fixed opening exchange: the system
//! prompt goes out as the first user turn, followed by a canned model
//! acknowledgement, then the real transcript with `assistant` mapped to
//! Gemini's `model` role.

use async_trait::async_trait;
use reqwest::Client;
use secrecy::{ExposeSecret, Secret};
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::ports::{ChatError, ChatMessage, ChatProvider, ChatRole};

/// The companion persona, sent as the priming turn of every conversation.
const SYSTEM_PROMPT: &str = "You are NexlyAI, a compassionate and empathetic mental health support companion. Your role is to:

1. Listen actively and validate feelings without judgment
2. Provide emotional support and encouragement
3. Offer evidence-based coping strategies when appropriate
4. Help users identify and process their emotions
5. Suggest healthy habits and self-care practices
6. Encourage seeking professional help when needed

Guidelines:
- Always be warm, empathetic, and non-judgmental
- Use a conversational, friendly tone
- Keep responses concise but meaningful (2-4 sentences usually)
- Ask thoughtful follow-up questions to understand better
- Never diagnose mental health conditions
- For crisis situations, immediately recommend professional crisis resources
- Celebrate small wins and progress
- Use supportive emojis sparingly and naturally
- Avoid being preachy or overly clinical

Remember: You're a supportive friend, not a therapist. Your goal is to provide comfort, validation, and gentle guidance.";

/// Canned model acknowledgement closing the priming exchange.
const PRIMING_ACK: &str = "I understand. I'm here to support you with warmth and empathy. How can I help you today?";

/// Configuration for the Gemini provider.
#[derive(Debug, Clone)]
pub struct GeminiConfig {
    /// API key for authentication.
    api_key: Secret<String>,
    /// Model to use (e.g., "gemini-2.5-flash").
    pub model: String,
    /// Base URL for the API (default: https://generativelanguage.googleapis.com/v1).
    pub base_url: String,
    /// Request timeout.
    pub timeout: Duration,
}

impl GeminiConfig {
    /// Creates a new configuration with the given API key.
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: Secret::new(api_key.into()),
            model: "gemini-2.5-flash".to_string(),
            base_url: "https://generativelanguage.googleapis.com/v1".to_string(),
            timeout: Duration::from_secs(60),
        }
    }

    /// Sets the model to use.
    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    /// Sets the base URL.
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = url.into();
        self
    }

    /// Sets the request timeout.
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    fn api_key(&self) -> &str {
        self.api_key.expose_secret()
    }
}

/// Gemini API provider implementation.
pub struct GeminiProvider {
    config: GeminiConfig,
    client: Client,
}

impl GeminiProvider {
    /// Creates a new provider with the given configuration.
    pub fn new(config: GeminiConfig) -> Result<Self, ChatError> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| ChatError::Unavailable(format!("Failed to create HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Builds the generateContent endpoint URL. The key travels as a query
    /// parameter, which is how this API authenticates.
    fn generate_url(&self) -> String {
        format!(
            "{}/models/{}:generateContent?key={}",
            self.config.base_url,
            self.config.model,
            self.config.api_key()
        )
    }

    /// Converts the transcript into Gemini's contents array, prefixed with
    /// the persona priming exchange.
    fn to_contents(transcript: &[ChatMessage]) -> Vec<Content> {
        let mut contents = vec![
            Content::user(SYSTEM_PROMPT),
            Content::model(PRIMING_ACK),
        ];

        for (index, message) in transcript.iter().enumerate() {
            // The client seeds conversations with an assistant greeting;
            // drop it so the contents alternate correctly after priming.
            if index == 0 && message.role == ChatRole::Assistant {
                continue;
            }
            contents.push(match message.role {
                ChatRole::User => Content::user(&message.content),
                ChatRole::Assistant => Content::model(&message.content),
            });
        }

        contents
    }
}

#[derive(Debug, Serialize)]
struct GenerateContentRequest {
    contents: Vec<Content>,
    #[serde(rename = "generationConfig")]
    generation_config: GenerationConfig,
}

#[derive(Debug, Serialize, Deserialize)]
struct Content {
    role: String,
    parts: Vec<Part>,
}

impl Content {
    fn user(text: &str) -> Self {
        Self {
            role: "user".to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }

    fn model(text: &str) -> Self {
        Self {
            role: "model".to_string(),
            parts: vec![Part {
                text: text.to_string(),
            }],
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
struct Part {
    text: String,
}

#[derive(Debug, Serialize)]
struct GenerationConfig {
    temperature: f32,
    #[serde(rename = "topK")]
    top_k: u32,
    #[serde(rename = "topP")]
    top_p: f32,
    #[serde(rename = "maxOutputTokens")]
    max_output_tokens: u32,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            temperature: 0.9,
            top_k: 40,
            top_p: 0.95,
            max_output_tokens: 2048,
        }
    }
}

#[derive(Debug, Deserialize)]
struct GenerateContentResponse {
    candidates: Option<Vec<Candidate>>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    content: Option<Content>,
}

impl GenerateContentResponse {
    fn into_text(self) -> Option<String> {
        self.candidates?
            .into_iter()
            .next()?
            .content?
            .parts
            .into_iter()
            .next()
            .map(|part| part.text)
    }
}

#[async_trait]
impl ChatProvider for GeminiProvider {
    async fn generate_reply(&self, transcript: &[ChatMessage]) -> Result<String, ChatError> {
        let request = GenerateContentRequest {
            contents: Self::to_contents(transcript),
            generation_config: GenerationConfig::default(),
        };

        let response = self
            .client
            .post(self.generate_url())
            .header("Content-Type", "application/json")
            .json(&request)
            .send()
            .await
            .map_err(|e| {
                if e.is_timeout() || e.is_connect() {
                    ChatError::Network(e.to_string())
                } else {
                    ChatError::Unavailable(e.to_string())
                }
            })?;

        let status = response.status();
        if !status.is_success() {
            let error_body = response.text().await.unwrap_or_default();
            return Err(match status.as_u16() {
                401 | 403 => ChatError::AuthenticationFailed,
                429 => ChatError::Unavailable(format!("Rate limited: {}", error_body)),
                500..=599 => {
                    ChatError::Unavailable(format!("Server error {}: {}", status, error_body))
                }
                _ => ChatError::Network(format!("Unexpected status {}: {}", status, error_body)),
            });
        }

        let body: GenerateContentResponse = response
            .json()
            .await
            .map_err(|e| ChatError::Parse(e.to_string()))?;

        let text = body.into_text().ok_or(ChatError::EmptyResponse)?;
        if text.is_empty() {
            return Err(ChatError::EmptyResponse);
        }
        Ok(text)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn contents_start_with_priming_exchange() {
        let transcript = vec![ChatMessage::user("I feel anxious")];
        let contents = GeminiProvider::to_contents(&transcript);

        assert_eq!(contents.len(), 3);
        assert_eq!(contents[0].role, "user");
        assert!(contents[0].parts[0].text.starts_with("You are NexlyAI"));
        assert_eq!(contents[1].role, "model");
        assert_eq!(contents[2].parts[0].text, "I feel anxious");
    }

    #[test]
    fn leading_assistant_greeting_is_dropped() {
        let transcript = vec![
            ChatMessage::assistant("Hi! How are you feeling today?"),
            ChatMessage::user("Not great"),
        ];
        let contents = GeminiProvider::to_contents(&transcript);

        // priming pair + one user turn; the greeting is skipped
        assert_eq!(contents.len(), 3);
        assert_eq!(contents[2].role, "user");
        assert_eq!(contents[2].parts[0].text, "Not great");
    }

    #[test]
    fn assistant_turns_map_to_model_role() {
        let transcript = vec![
            ChatMessage::user("hello"),
            ChatMessage::assistant("hi there"),
            ChatMessage::user("how are you"),
        ];
        let contents = GeminiProvider::to_contents(&transcript);

        assert_eq!(contents[3].role, "model");
        assert_eq!(contents[4].role, "user");
    }

    #[test]
    fn generation_config_serializes_camel_case() {
        let json = serde_json::to_value(GenerationConfig::default()).unwrap();
        assert_eq!(json["topK"], 40);
        assert_eq!(json["maxOutputTokens"], 2048);
        assert!((json["temperature"].as_f64().unwrap() - 0.9).abs() < 1e-6);
    }

    #[test]
    fn response_text_extraction() {
        let body = r#"{
            "candidates": [
                {"content": {"role": "model", "parts": [{"text": "You're doing great."}]}}
            ]
        }"#;
        let response: GenerateContentResponse = serde_json::from_str(body).unwrap();
        assert_eq!(response.into_text().unwrap(), "You're doing great.");
    }

    #[test]
    fn empty_candidates_yield_no_text() {
        let response: GenerateContentResponse =
            serde_json::from_str(r#"{"candidates": []}"#).unwrap();
        assert!(response.into_text().is_none());
    }

    #[test]
    fn generate_url_carries_model_and_key() {
        let provider = GeminiProvider::new(
            GeminiConfig::new("AIzaTest").with_base_url("http://localhost:8081/v1"),
        )
        .unwrap();
        assert_eq!(
            provider.generate_url(),
            "http://localhost:8081/v1/models/gemini-2.5-flash:generateContent?key=AIzaTest"
        );
    }
}
