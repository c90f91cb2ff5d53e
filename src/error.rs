//! Error taxonomy for the provider abstraction.
//!
//! Every fault that crosses the provider boundary is one of a closed set of
//! kinds, each carrying the same inspectable fields: a human-readable
//! message, the identifier of the adapter that raised it, an optional vendor
//! error code, and a structured detail map. Adapters fold vendor failures
//! into these kinds; no vendor error type escapes the contract.
//!
//! Callers match on the variant to decide what to do: fix their setup
//! ([`ProviderError::Configuration`]), retry or fail the call
//! ([`ProviderError::Api`]), or pick a different model
//! ([`ProviderError::ModelNotFound`]).

use std::collections::HashMap;

/// Structured detail attached to a provider error.
///
/// Defaults to empty, never absent. Values must not contain secrets.
pub type ErrorDetails = HashMap<String, serde_json::Value>;

/// A failure reported by a provider adapter.
#[derive(Debug, thiserror::Error)]
pub enum ProviderError {
    /// The adapter could not be constructed or used because required setup
    /// (client, credential, endpoint) is missing or invalid.
    #[error("Configuration error: {message}")]
    Configuration {
        message: String,
        provider: Option<String>,
        code: Option<String>,
        details: ErrorDetails,
    },

    /// A call to the underlying vendor failed after the adapter was
    /// otherwise ready. The vendor failure's description is embedded in
    /// `message`; the adapter stays usable for further calls.
    #[error("API error: {message}")]
    Api {
        message: String,
        provider: Option<String>,
        code: Option<String>,
        details: ErrorDetails,
    },

    /// The vendor reported that the requested model identifier does not
    /// exist.
    #[error("Model not found: {message}")]
    ModelNotFound {
        message: String,
        provider: Option<String>,
        code: Option<String>,
        details: ErrorDetails,
    },
}

impl ProviderError {
    /// Create a configuration error.
    pub fn configuration(message: impl Into<String>) -> Self {
        Self::Configuration {
            message: message.into(),
            provider: None,
            code: None,
            details: ErrorDetails::new(),
        }
    }

    /// Create an API error.
    pub fn api(message: impl Into<String>) -> Self {
        Self::Api {
            message: message.into(),
            provider: None,
            code: None,
            details: ErrorDetails::new(),
        }
    }

    /// Create a model-not-found error.
    pub fn model_not_found(message: impl Into<String>) -> Self {
        Self::ModelNotFound {
            message: message.into(),
            provider: None,
            code: None,
            details: ErrorDetails::new(),
        }
    }

    /// Attach the identifier of the adapter that raised this error.
    pub fn with_provider(mut self, provider: impl Into<String>) -> Self {
        *self.provider_mut() = Some(provider.into());
        self
    }

    /// Attach a vendor error code (HTTP status, vendor-specific string).
    pub fn with_code(mut self, code: impl Into<String>) -> Self {
        *self.code_mut() = Some(code.into());
        self
    }

    /// Attach one structured detail entry.
    pub fn with_detail(mut self, key: impl Into<String>, value: impl Into<serde_json::Value>) -> Self {
        self.details_mut().insert(key.into(), value.into());
        self
    }

    /// The human-readable message.
    pub fn message(&self) -> &str {
        match self {
            Self::Configuration { message, .. }
            | Self::Api { message, .. }
            | Self::ModelNotFound { message, .. } => message,
        }
    }

    /// Identifier of the adapter that raised this error, if known.
    pub fn provider(&self) -> Option<&str> {
        match self {
            Self::Configuration { provider, .. }
            | Self::Api { provider, .. }
            | Self::ModelNotFound { provider, .. } => provider.as_deref(),
        }
    }

    /// Vendor error code, if the vendor supplied one.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::Configuration { code, .. }
            | Self::Api { code, .. }
            | Self::ModelNotFound { code, .. } => code.as_deref(),
        }
    }

    /// Structured detail map. Empty unless the adapter attached entries.
    pub fn details(&self) -> &ErrorDetails {
        match self {
            Self::Configuration { details, .. }
            | Self::Api { details, .. }
            | Self::ModelNotFound { details, .. } => details,
        }
    }

    fn provider_mut(&mut self) -> &mut Option<String> {
        match self {
            Self::Configuration { provider, .. }
            | Self::Api { provider, .. }
            | Self::ModelNotFound { provider, .. } => provider,
        }
    }

    fn code_mut(&mut self) -> &mut Option<String> {
        match self {
            Self::Configuration { code, .. }
            | Self::Api { code, .. }
            | Self::ModelNotFound { code, .. } => code,
        }
    }

    fn details_mut(&mut self) -> &mut ErrorDetails {
        match self {
            Self::Configuration { details, .. }
            | Self::Api { details, .. }
            | Self::ModelNotFound { details, .. } => details,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_leave_details_empty() {
        let err = ProviderError::api("boom");
        assert_eq!(err.message(), "boom");
        assert_eq!(err.provider(), None);
        assert_eq!(err.code(), None);
        assert!(err.details().is_empty());
    }

    #[test]
    fn builders_populate_shared_fields() {
        let err = ProviderError::configuration("client missing")
            .with_provider("github")
            .with_code("init_failed")
            .with_detail("endpoint", "https://models.github.ai/inference");

        assert_eq!(err.provider(), Some("github"));
        assert_eq!(err.code(), Some("init_failed"));
        assert_eq!(
            err.details().get("endpoint"),
            Some(&serde_json::json!("https://models.github.ai/inference"))
        );
    }

    #[test]
    fn display_embeds_message() {
        let err = ProviderError::api("connection timed out").with_provider("github");
        assert!(err.to_string().contains("connection timed out"));

        let err = ProviderError::model_not_found("no such model: gpt-99");
        assert!(err.to_string().contains("gpt-99"));
    }

    #[test]
    fn variants_are_matchable() {
        let err = ProviderError::model_not_found("gone");
        assert!(matches!(err, ProviderError::ModelNotFound { .. }));
    }
}
