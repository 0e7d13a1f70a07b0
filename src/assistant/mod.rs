//! AI assistant: a chat transcript over the assistance endpoint, plus image
//! analysis.

use serde::Serialize;

use crate::client::{ApiClient, AssistRequest};
use crate::errors::ApiError;

/// Context string sent with every assistance request.
const ASSIST_CONTEXT: &str = "DIY repair assistance";

/// Canned reply appended when the assistance call fails.
const FALLBACK_REPLY: &str = "Something went wrong. Please try again.";

/// Who produced a transcript message.
#[derive(Debug, Clone, Copy, Serialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    User,
    Assistant,
}

/// One message in the assistant transcript.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

/// Chat state for the AI assistant widget.
#[derive(Debug, Default)]
pub struct Assistant {
    transcript: Vec<ChatMessage>,
}

impl Assistant {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn transcript(&self) -> &[ChatMessage] {
        &self.transcript
    }

    /// Reset the transcript.
    pub fn clear(&mut self) {
        self.transcript.clear();
    }

    /// Send a message and append the reply to the transcript. A failed call
    /// appends a canned notice instead; the error is logged, not propagated.
    /// Blank messages are ignored.
    pub async fn send(&mut self, client: &ApiClient, credential: &str, message: &str) {
        if message.trim().is_empty() {
            return;
        }

        self.transcript.push(ChatMessage {
            role: ChatRole::User,
            content: message.to_string(),
        });

        let request = AssistRequest {
            message: message.to_string(),
            context: ASSIST_CONTEXT.to_string(),
        };

        let content = match client.ai_assist(&request, credential).await {
            Ok(response) => response.response,
            Err(e) => {
                tracing::error!("Assistance request failed: {}", e);
                FALLBACK_REPLY.to_string()
            }
        };

        self.transcript.push(ChatMessage {
            role: ChatRole::Assistant,
            content,
        });
    }

    /// Analyze an uploaded image and return the analysis text.
    pub async fn analyze(
        client: &ApiClient,
        credential: &str,
        bytes: Vec<u8>,
        filename: &str,
    ) -> Result<String, ApiError> {
        let response = client.analyze_image(bytes, filename, credential).await?;
        Ok(response.analysis)
    }
}
