//! Normalized generation responses.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Token accounting reported by the vendor.
///
/// Fields the vendor does not supply stay `None` — unknown is never coerced
/// to zero.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub prompt_tokens: Option<u32>,
    pub completion_tokens: Option<u32>,
    pub total_tokens: Option<u32>,
}

/// Attribution for a response: which adapter produced it, with which model.
///
/// A caller consuming responses from several adapters at once can rely on
/// `provider` and `model` always being present; `id` and `created` are
/// filled in when the vendor reports them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ResponseMetadata {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub model: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub created: Option<DateTime<Utc>>,
    pub provider: String,
}

impl ResponseMetadata {
    pub fn new(provider: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            id: None,
            model: model.into(),
            created: None,
            provider: provider.into(),
        }
    }
}

/// One completed generation.
///
/// Constructed exactly once by an adapter per non-streaming call and not
/// mutated afterwards. `content` is always present and may be empty.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Response {
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub usage: Option<Usage>,
    pub metadata: ResponseMetadata,
}

impl Response {
    pub fn new(content: impl Into<String>, metadata: ResponseMetadata) -> Self {
        Self {
            content: content.into(),
            usage: None,
            metadata,
        }
    }

    pub fn with_usage(mut self, usage: Usage) -> Self {
        self.usage = Some(usage);
        self
    }
}
