//! OpenAI-compatible Chat Completions wire types, GitHub Models subset.
//!
//! Only the fields the adapter reads or sends are modeled; unknown fields in
//! vendor replies are ignored.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::ProviderError;
use crate::types::{GenerationOptions, Message, Response, ResponseMetadata, Usage};

#[derive(Debug, Clone, Serialize)]
pub(super) struct ChatCompletionRequest {
    pub model: String,
    pub messages: Vec<WireMessage>,
    pub temperature: f32,
    pub top_p: f32,
    #[serde(skip_serializing_if = "std::ops::Not::not")]
    pub stream: bool,
}

#[derive(Debug, Clone, Serialize)]
pub(super) struct WireMessage {
    pub role: String,
    pub content: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl ChatCompletionRequest {
    pub fn new(
        model: &str,
        messages: Vec<Message>,
        options: &GenerationOptions,
        stream: bool,
    ) -> Self {
        Self {
            model: model.to_string(),
            messages: messages
                .into_iter()
                .map(|m| WireMessage {
                    role: m.role,
                    content: m.content,
                    metadata: m.metadata,
                })
                .collect(),
            temperature: options.temperature_or_default(),
            top_p: options.top_p_or_default(),
            stream,
        }
    }
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ChatCompletionResponse {
    #[serde(default)]
    pub id: Option<String>,
    #[serde(default)]
    pub created: Option<i64>,
    #[serde(default)]
    pub model: Option<String>,
    #[serde(default)]
    pub choices: Vec<ChatChoice>,
    #[serde(default)]
    pub usage: Option<WireUsage>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ChatChoice {
    pub message: WireAssistantMessage,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct WireAssistantMessage {
    #[serde(default)]
    pub content: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct WireUsage {
    #[serde(default)]
    pub prompt_tokens: Option<u32>,
    #[serde(default)]
    pub completion_tokens: Option<u32>,
    #[serde(default)]
    pub total_tokens: Option<u32>,
}

impl ChatCompletionResponse {
    /// Map the vendor reply into the normalized [`Response`].
    ///
    /// Usage counts the vendor omits stay `None`. A reply with no choices is
    /// a vendor fault, not a panic.
    pub fn into_response(
        self,
        provider: &str,
        configured_model: &str,
    ) -> Result<Response, ProviderError> {
        let choice = self.choices.into_iter().next().ok_or_else(|| {
            ProviderError::api("GitHub Models API error: response contained no choices")
                .with_provider(provider)
        })?;

        let usage = Usage {
            prompt_tokens: self.usage.as_ref().and_then(|u| u.prompt_tokens),
            completion_tokens: self.usage.as_ref().and_then(|u| u.completion_tokens),
            total_tokens: self.usage.as_ref().and_then(|u| u.total_tokens),
        };

        Ok(Response {
            content: choice.message.content.unwrap_or_default(),
            usage: Some(usage),
            metadata: ResponseMetadata {
                id: self.id,
                model: self.model.unwrap_or_else(|| configured_model.to_string()),
                created: self.created.and_then(|secs| chrono::DateTime::from_timestamp(secs, 0)),
                provider: provider.to_string(),
            },
        })
    }
}

/// One incremental update on the streaming wire.
#[derive(Debug, Clone, Deserialize)]
pub(super) struct ChatCompletionChunk {
    #[serde(default)]
    pub choices: Vec<ChunkChoice>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct ChunkChoice {
    #[serde(default)]
    pub delta: ChunkDelta,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub(super) struct ChunkDelta {
    #[serde(default)]
    pub content: Option<String>,
}

impl ChatCompletionChunk {
    /// Text carried by this update. Absent and empty deltas map to `None` so
    /// the stream never yields empty fragments.
    pub fn delta_text(&self) -> Option<&str> {
        self.choices
            .first()
            .and_then(|c| c.delta.content.as_deref())
            .filter(|text| !text.is_empty())
    }
}
