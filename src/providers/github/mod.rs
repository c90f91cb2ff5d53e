//! GitHub Models adapter.
//!
//! Speaks the OpenAI-compatible Chat Completions surface that GitHub Models
//! exposes at `https://models.github.ai/inference`: JSON over HTTPS for full
//! responses, SSE for streaming. All vendor faults are folded into the
//! [`ProviderError`] taxonomy with `provider = "github"`.

mod wire;

use std::collections::HashMap;

use async_trait::async_trait;
use eventsource_stream::Eventsource;
use futures::StreamExt;
use secrecy::{ExposeSecret, SecretString};
use tracing::{debug, warn};

use crate::error::ProviderError;
use crate::streaming::TextStream;
use crate::traits::Provider;
use crate::types::{GenerationOptions, Message, Response};

/// Identifier this adapter stamps on responses and errors.
pub const PROVIDER_ID: &str = "github";

const DEFAULT_MODEL: &str = "openai/gpt-4o";
const DEFAULT_ENDPOINT: &str = "https://models.github.ai/inference";

/// Configuration for [`GithubModelsProvider`].
#[derive(Debug, Clone)]
pub struct GithubModelsConfig {
    pub api_key: SecretString,
    pub model: String,
    pub endpoint: String,
    /// Open-ended vendor-specific options. Unknown keys are ignored by this
    /// adapter but kept for the adapter's lifetime.
    pub extra: HashMap<String, serde_json::Value>,
}

impl GithubModelsConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: SecretString::from(api_key.into()),
            model: DEFAULT_MODEL.to_string(),
            endpoint: DEFAULT_ENDPOINT.to_string(),
            extra: HashMap::new(),
        }
    }

    pub fn with_model(mut self, model: impl Into<String>) -> Self {
        self.model = model.into();
        self
    }

    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    pub fn with_extra(mut self, extra: HashMap<String, serde_json::Value>) -> Self {
        self.extra = extra;
        self
    }
}

/// GitHub Models implementation of the provider contract.
///
/// Construction builds the HTTP client once; a build failure surfaces
/// immediately as [`ProviderError::Configuration`], so a held instance is
/// ready. Per-call failures are [`ProviderError::Api`] and leave the
/// adapter usable.
pub struct GithubModelsProvider {
    config: GithubModelsConfig,
    http_client: reqwest::Client,
}

impl GithubModelsProvider {
    pub fn new(config: GithubModelsConfig) -> Result<Self, ProviderError> {
        let http_client = reqwest::Client::builder().build().map_err(|e| {
            ProviderError::configuration(format!(
                "failed to initialize GitHub Models client: {e}"
            ))
            .with_provider(PROVIDER_ID)
        })?;
        Ok(Self {
            config,
            http_client,
        })
    }

    /// Reuse an existing HTTP client, sharing its connection pool.
    pub fn with_http_client(config: GithubModelsConfig, http_client: reqwest::Client) -> Self {
        Self {
            config,
            http_client,
        }
    }

    fn completions_url(&self) -> String {
        format!(
            "{}/chat/completions",
            self.config.endpoint.trim_end_matches('/')
        )
    }

    fn ensure_ready(&self) -> Result<(), ProviderError> {
        if self.validate_config() {
            Ok(())
        } else {
            Err(
                ProviderError::configuration("GitHub Models adapter is not configured")
                    .with_provider(PROVIDER_ID),
            )
        }
    }

    async fn send(
        &self,
        body: &wire::ChatCompletionRequest,
        stream: bool,
    ) -> Result<reqwest::Response, ProviderError> {
        let mut request = self
            .http_client
            .post(self.completions_url())
            .bearer_auth(self.config.api_key.expose_secret())
            .json(body);
        if stream {
            request = request
                .header(reqwest::header::ACCEPT, "text/event-stream")
                .header(reqwest::header::CACHE_CONTROL, "no-cache");
        }

        let response = request.send().await.map_err(|e| {
            ProviderError::api(format!("GitHub Models request failed: {e}"))
                .with_provider(PROVIDER_ID)
        })?;

        let status = response.status();
        if !status.is_success() {
            let body_text = response.text().await.unwrap_or_default();
            warn!(provider = PROVIDER_ID, status = %status, "chat completion request rejected");
            return Err(ProviderError::api(format!(
                "GitHub Models API error: {status}: {body_text}"
            ))
            .with_provider(PROVIDER_ID)
            .with_code(status.as_str()));
        }
        Ok(response)
    }
}

#[async_trait]
impl Provider for GithubModelsProvider {
    fn provider_id(&self) -> &str {
        PROVIDER_ID
    }

    async fn generate_response(
        &self,
        messages: Vec<Message>,
        options: &GenerationOptions,
    ) -> Result<Response, ProviderError> {
        self.ensure_ready()?;

        let body =
            wire::ChatCompletionRequest::new(&self.config.model, messages, options, false);
        debug!(
            provider = PROVIDER_ID,
            model = %self.config.model,
            messages = body.messages.len(),
            "sending chat completion request"
        );

        let response = self.send(&body, false).await?;
        let parsed: wire::ChatCompletionResponse = response.json().await.map_err(|e| {
            ProviderError::api(format!("GitHub Models API error: invalid response body: {e}"))
                .with_provider(PROVIDER_ID)
        })?;

        let response = parsed.into_response(PROVIDER_ID, &self.config.model)?;
        debug!(
            provider = PROVIDER_ID,
            content_len = response.content.len(),
            "chat completion received"
        );
        Ok(response)
    }

    async fn stream_response(
        &self,
        messages: Vec<Message>,
        options: &GenerationOptions,
    ) -> Result<TextStream, ProviderError> {
        self.ensure_ready()?;

        let body = wire::ChatCompletionRequest::new(&self.config.model, messages, options, true);
        debug!(
            provider = PROVIDER_ID,
            model = %self.config.model,
            messages = body.messages.len(),
            "starting chat completion stream"
        );

        let response = self.send(&body, true).await?;
        let mut events = response.bytes_stream().eventsource();

        // The response body is owned by the stream; dropping the stream on
        // any exit path closes the connection.
        let stream = async_stream::stream! {
            while let Some(event) = events.next().await {
                let event = match event {
                    Ok(event) => event,
                    Err(e) => {
                        yield Err(ProviderError::api(format!(
                            "GitHub Models streaming error: {e}"
                        ))
                        .with_provider(PROVIDER_ID));
                        return;
                    }
                };

                let data = event.data.trim();
                if data.is_empty() || data == "[DONE]" {
                    continue;
                }

                let chunk: wire::ChatCompletionChunk = match serde_json::from_str(data) {
                    Ok(chunk) => chunk,
                    Err(e) => {
                        yield Err(ProviderError::api(format!(
                            "GitHub Models streaming error: invalid chunk: {e}"
                        ))
                        .with_provider(PROVIDER_ID));
                        return;
                    }
                };

                if let Some(text) = chunk.delta_text() {
                    yield Ok(text.to_string());
                }
            }
        };

        Ok(Box::pin(stream))
    }

    fn validate_config(&self) -> bool {
        !self.config.api_key.expose_secret().is_empty()
            && !self.config.model.is_empty()
            && !self.config.endpoint.is_empty()
    }
}
