//! Model invocation adapter.
//!
//! [`ModelAdapter`] pairs a hydrated prompt (or a chat turn) with the
//! personalized system instruction and hands the request to a
//! [`ModelBackend`]. It never fails: empty answers and backend errors are
//! turned into fixed, student-facing sentences.
//!
//! ```text
//! prompt + profile + language → ModelRequest → ModelBackend → text | fallback
//! ```

pub mod client;
pub mod models;

use crate::personalization::{build_system_instruction, BaseRole};
use crate::profile::{Language, StudentProfile};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::sync::Arc;
use thiserror::Error;
use tracing::{error, warn};

pub use client::GeminiClient;
use models::{Content, GenerateContentRequest, GenerationConfig, SystemInstruction, ThinkingConfig};

pub const DEFAULT_MODEL: &str = "gemini-3-flash-preview";

pub const EMPTY_EDUCATION_RESPONSE: &str =
    "I apologize, but I couldn't generate a response at this time.";
pub const FAILED_EDUCATION_RESPONSE: &str =
    "Sorry, I encountered an error while processing your request.";
pub const EMPTY_CHAT_RESPONSE: &str = "I'm having trouble thinking of a response.";
pub const FAILED_CHAT_RESPONSE: &str = "Sorry, I lost my train of thought. Can you say that again?";

#[derive(Error, Debug)]
pub enum LLMError {
    #[error("Failed to create HTTP client: {0}")]
    ClientBuild(String),
    #[error("Invalid model endpoint: {0}")]
    InvalidUrl(String),
    #[error("Request timeout - the API took too long to respond")]
    Timeout,
    #[error("Connection error - unable to reach the API: {0}")]
    Connection(String),
    #[error("Network error: {0}")]
    Network(String),
    #[error("Authentication failed - check your API key")]
    Unauthorized,
    #[error("Access forbidden - insufficient permissions")]
    Forbidden,
    #[error("Rate limit exceeded - too many requests")]
    RateLimited,
    #[error("Server error ({status}): {body}")]
    Server { status: u16, body: String },
    #[error("HTTP error {status}: {body}")]
    Status { status: u16, body: String },
    #[error("Failed to parse API response as JSON: {0}")]
    Decode(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    User,
    Model,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: Role,
    pub content: String,
    pub timestamp: DateTime<Utc>,
}

impl ChatMessage {
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(Role::User, content)
    }

    pub fn model(content: impl Into<String>) -> Self {
        Self::new(Role::Model, content)
    }

    fn new(role: Role, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
            timestamp: Utc::now(),
        }
    }

    fn to_content(&self) -> Content {
        match self.role {
            Role::User => Content::user(&self.content),
            Role::Model => Content::model(&self.content),
        }
    }
}

/// Everything a backend needs for one model call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelRequest {
    pub model: String,
    pub system_instruction: String,
    pub contents: Vec<Content>,
    pub generation_config: Option<GenerationConfig>,
}

impl ModelRequest {
    pub fn to_wire(&self) -> GenerateContentRequest {
        GenerateContentRequest {
            contents: self.contents.clone(),
            system_instruction: Some(SystemInstruction::new(&self.system_instruction)),
            generation_config: self.generation_config.clone(),
        }
    }
}

/// A model that turns a request into text. `Ok(None)` means the call
/// succeeded but produced no text.
#[async_trait]
pub trait ModelBackend: Send + Sync {
    async fn generate(&self, request: &ModelRequest) -> Result<Option<String>, LLMError>;
}

#[derive(Clone)]
pub struct ModelAdapter {
    backend: Arc<dyn ModelBackend>,
    model: String,
}

impl ModelAdapter {
    pub fn new(backend: Arc<dyn ModelBackend>, model: impl Into<String>) -> Self {
        Self {
            backend,
            model: model.into(),
        }
    }

    pub fn model(&self) -> &str {
        &self.model
    }

    pub fn education_request(
        &self,
        prompt: &str,
        profile: &StudentProfile,
        language: Language,
    ) -> ModelRequest {
        ModelRequest {
            model: self.model.clone(),
            system_instruction: build_system_instruction(BaseRole::Tutor, profile, language),
            contents: vec![Content::user(prompt)],
            generation_config: Some(GenerationConfig {
                thinking_config: Some(ThinkingConfig { thinking_budget: 0 }),
            }),
        }
    }

    pub fn chat_request(
        &self,
        history: &[ChatMessage],
        new_message: &str,
        profile: &StudentProfile,
        language: Language,
    ) -> ModelRequest {
        let mut contents: Vec<Content> = history.iter().map(ChatMessage::to_content).collect();
        contents.push(Content::user(new_message));

        ModelRequest {
            model: self.model.clone(),
            system_instruction: build_system_instruction(
                BaseRole::ConversationalTutor,
                profile,
                language,
            ),
            contents,
            generation_config: None,
        }
    }

    pub async fn generate_education_response(
        &self,
        prompt: &str,
        profile: &StudentProfile,
        language: Language,
    ) -> String {
        let request = self.education_request(prompt, profile, language);
        match self.backend.generate(&request).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!(model = %self.model, "Model returned no text");
                EMPTY_EDUCATION_RESPONSE.to_string()
            }
            Err(e) => {
                error!(model = %self.model, error = %e, "Gemini API error");
                FAILED_EDUCATION_RESPONSE.to_string()
            }
        }
    }

    /// `history` is only read; the caller appends both turns afterwards.
    pub async fn generate_chat_response(
        &self,
        history: &[ChatMessage],
        new_message: &str,
        profile: &StudentProfile,
        language: Language,
    ) -> String {
        let request = self.chat_request(history, new_message, profile, language);
        match self.backend.generate(&request).await {
            Ok(Some(text)) => text,
            Ok(None) => {
                warn!(model = %self.model, turns = history.len(), "Chat model returned no text");
                EMPTY_CHAT_RESPONSE.to_string()
            }
            Err(e) => {
                error!(model = %self.model, error = %e, "Gemini chat API error");
                FAILED_CHAT_RESPONSE.to_string()
            }
        }
    }
}

#[cfg(test)]
mod tests;
