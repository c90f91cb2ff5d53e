//! The provider capability trait and caller-facing extensions.

use async_trait::async_trait;

use crate::error::ProviderError;
use crate::streaming::{TextStream, TextStreamHandle, make_cancellable_stream};
use crate::types::{GenerationOptions, Message, Response};

/// The capability every concrete LLM backend adapter implements.
///
/// An adapter owns its credentials, model name, and extra configuration,
/// all fixed at construction. Construction performs any one-time client
/// setup and fails with [`ProviderError::Configuration`] rather than
/// deferring the fault to first use; a value you hold is therefore ready.
/// Per-call vendor failures surface as [`ProviderError::Api`] and leave the
/// adapter ready for further calls.
///
/// Adapter state is read-only after construction, so one instance may be
/// shared across tasks; each call carries its own request/response state.
#[async_trait]
pub trait Provider: Send + Sync {
    /// Stable identifier for this adapter (e.g. `"github"`), used to
    /// attribute responses and errors.
    fn provider_id(&self) -> &str;

    /// Generate one complete response for the conversation.
    ///
    /// The returned [`Response`] always carries the model name and the
    /// adapter's identifier in its metadata; usage fields the vendor omits
    /// stay `None`. An empty conversation is passed through to the vendor —
    /// the vendor's rejection, if any, surfaces as an error, never a panic.
    async fn generate_response(
        &self,
        messages: Vec<Message>,
        options: &GenerationOptions,
    ) -> Result<Response, ProviderError>;

    /// Generate a response as a lazy stream of text fragments.
    ///
    /// Same preconditions and option defaults as [`Provider::generate_response`].
    /// Fragments are yielded in vendor emission order; empty fragments are
    /// suppressed. A failure during iteration (including at the first poll)
    /// yields one `Err` and ends the stream.
    async fn stream_response(
        &self,
        messages: Vec<Message>,
        options: &GenerationOptions,
    ) -> Result<TextStream, ProviderError>;

    /// Like [`Provider::stream_response`], but paired with a cancellation
    /// handle. Cancelling (or dropping the stream) closes the vendor
    /// connection.
    async fn stream_response_with_cancel(
        &self,
        messages: Vec<Message>,
        options: &GenerationOptions,
    ) -> Result<TextStreamHandle, ProviderError> {
        let stream = self.stream_response(messages, options).await?;
        let (stream, cancel) = make_cancellable_stream(stream);
        Ok(TextStreamHandle { stream, cancel })
    }

    /// Report whether this adapter is ready for generation calls.
    ///
    /// Pure and side-effect free: `false` means not ready, it never raises.
    fn validate_config(&self) -> bool;
}

/// Single-shot conveniences available on every [`Provider`].
#[async_trait]
pub trait ProviderExt: Provider {
    /// Ask a single question and return the reply text.
    async fn ask(&self, prompt: String) -> Result<String, ProviderError> {
        let response = self
            .generate_response(vec![Message::user(prompt)], &GenerationOptions::default())
            .await?;
        Ok(response.content)
    }

    /// Ask with a system prompt steering the reply.
    async fn ask_with_system(
        &self,
        system_prompt: String,
        user_prompt: String,
    ) -> Result<String, ProviderError> {
        let messages = vec![Message::system(system_prompt), Message::user(user_prompt)];
        let response = self
            .generate_response(messages, &GenerationOptions::default())
            .await?;
        Ok(response.content)
    }
}

impl<T: Provider + ?Sized> ProviderExt for T {}
