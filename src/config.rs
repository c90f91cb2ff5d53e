//! Provider selection and credential settings.
//!
//! Settings are explicit values handed to the factory — there is no
//! process-wide singleton. [`AiSettings::from_env`] is the only place this
//! crate reads the environment, and it delegates to an injectable lookup so
//! tests never have to mutate process state.

use std::collections::HashMap;
use std::fmt;

use secrecy::SecretString;
use serde::{Deserialize, Serialize};

use crate::error::ProviderError;

/// Backend selector: the small closed set of providers the settings surface
/// understands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderKind {
    Gemini,
    Github,
    OpenAi,
}

impl ProviderKind {
    /// Parse a selector name. Unknown names are rejected rather than mapped
    /// to a catch-all, since the factory has nothing to build for them.
    pub fn from_name(name: &str) -> Option<Self> {
        match name {
            "gemini" => Some(Self::Gemini),
            "github" => Some(Self::Github),
            "openai" => Some(Self::OpenAi),
            _ => None,
        }
    }
}

impl fmt::Display for ProviderKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Gemini => write!(f, "gemini"),
            Self::Github => write!(f, "github"),
            Self::OpenAi => write!(f, "openai"),
        }
    }
}

/// Resolved AI settings: which backend to talk to, as which model, with
/// which credential.
///
/// The API key is held as a [`SecretString`] so it is redacted from debug
/// output and only exposed at the point the auth header is built.
#[derive(Debug, Clone)]
pub struct AiSettings {
    pub provider: ProviderKind,
    pub model_name: String,
    pub api_key: SecretString,
    pub github_endpoint: String,
    /// Open-ended per-provider options, passed to the adapter untouched.
    pub extra: HashMap<String, serde_json::Value>,
}

impl AiSettings {
    pub const DEFAULT_MODEL: &'static str = "gemini-1.5-flash";
    pub const DEFAULT_GITHUB_ENDPOINT: &'static str = "https://models.github.ai/inference";

    /// Settings with defaults for everything but the selector and key.
    pub fn new(provider: ProviderKind, api_key: impl Into<String>) -> Self {
        Self {
            provider,
            model_name: Self::DEFAULT_MODEL.to_string(),
            api_key: SecretString::from(api_key.into()),
            github_endpoint: Self::DEFAULT_GITHUB_ENDPOINT.to_string(),
            extra: HashMap::new(),
        }
    }

    pub fn with_model_name(mut self, model_name: impl Into<String>) -> Self {
        self.model_name = model_name.into();
        self
    }

    pub fn with_github_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.github_endpoint = endpoint.into();
        self
    }

    pub fn with_extra(mut self, extra: HashMap<String, serde_json::Value>) -> Self {
        self.extra = extra;
        self
    }

    /// Resolve settings from `AI_*` environment variables.
    ///
    /// Recognized variables: `AI_PROVIDER` (default `gemini`),
    /// `AI_MODEL_NAME`, `AI_API_KEY` (required), `AI_GITHUB_ENDPOINT`.
    pub fn from_env() -> Result<Self, ProviderError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Resolve settings through an arbitrary key lookup.
    ///
    /// This is the full resolution logic behind [`AiSettings::from_env`];
    /// passing a closure over a map makes it testable without touching the
    /// process environment.
    pub fn from_lookup(
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, ProviderError> {
        let provider = match lookup("AI_PROVIDER") {
            Some(name) => {
                let name = name.trim().to_ascii_lowercase();
                ProviderKind::from_name(&name).ok_or_else(|| {
                    ProviderError::configuration(format!("unknown AI provider '{name}'"))
                })?
            }
            None => ProviderKind::Gemini,
        };

        let api_key = lookup("AI_API_KEY")
            .filter(|key| !key.trim().is_empty())
            .ok_or_else(|| ProviderError::configuration("AI API key must be provided"))?;

        let model_name =
            lookup("AI_MODEL_NAME").unwrap_or_else(|| Self::DEFAULT_MODEL.to_string());
        let github_endpoint = lookup("AI_GITHUB_ENDPOINT")
            .unwrap_or_else(|| Self::DEFAULT_GITHUB_ENDPOINT.to_string());

        Ok(Self {
            provider,
            model_name,
            api_key: SecretString::from(api_key),
            github_endpoint,
            extra: HashMap::new(),
        })
    }
}
