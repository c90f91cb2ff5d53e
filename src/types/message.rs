//! Conversation messages in the standardized format.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

/// One turn of a conversation.
///
/// `role` is a free-form speaker tag — `system`, `user`, and `assistant` by
/// convention, but the set of legal values is an adapter concern, not
/// enforced here. `content` is always present and may be empty. `metadata`
/// is carried through opaquely; adapters may ignore keys they do not
/// understand.
///
/// Messages are constructed by the caller and treated as immutable once
/// passed to a provider call; adapters read them but never retain them
/// beyond the call.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Message {
    pub role: String,
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub metadata: Option<HashMap<String, serde_json::Value>>,
}

impl Message {
    /// Create a message with an arbitrary role tag.
    pub fn new(role: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            role: role.into(),
            content: content.into(),
            metadata: None,
        }
    }

    /// Create a system message.
    pub fn system(content: impl Into<String>) -> Self {
        Self::new("system", content)
    }

    /// Create a user message.
    pub fn user(content: impl Into<String>) -> Self {
        Self::new("user", content)
    }

    /// Create an assistant message.
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new("assistant", content)
    }

    /// Attach opaque metadata to this message.
    pub fn with_metadata(mut self, metadata: HashMap<String, serde_json::Value>) -> Self {
        self.metadata = Some(metadata);
        self
    }
}
