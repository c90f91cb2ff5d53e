//! Streaming types for incremental generation.
//!
//! A streaming call yields a lazy, finite, non-restartable sequence of text
//! fragments. Fragments arrive in vendor emission order and must be appended
//! in that order to reconstruct the full text; they carry no usage or
//! metadata. Dropping the stream — on normal completion, early abandonment,
//! or error — drops the underlying HTTP response body and closes the vendor
//! connection.

use std::pin::Pin;

use futures::Stream;
use tokio_util::sync::CancellationToken;

use crate::error::ProviderError;

/// The fragment sequence produced by a streaming generation call.
///
/// Once the stream yields an `Err`, it terminates; it never silently
/// resumes.
pub type TextStream = Pin<Box<dyn Stream<Item = Result<String, ProviderError>> + Send>>;

/// A handle that can be used to request cancellation of a stream.
#[derive(Clone, Debug)]
pub struct CancelHandle {
    token: CancellationToken,
}

impl CancelHandle {
    fn new() -> Self {
        Self {
            token: CancellationToken::new(),
        }
    }

    /// Request cancellation. The wrapped stream stops as soon as possible,
    /// and dropping it closes the underlying connection so the vendor stops
    /// generating tokens.
    pub fn cancel(&self) {
        self.token.cancel();
    }

    /// Check whether cancellation was requested.
    pub fn is_cancelled(&self) -> bool {
        self.token.is_cancelled()
    }
}

/// A [`TextStream`] paired with a first-class cancellation handle.
pub struct TextStreamHandle {
    pub stream: TextStream,
    pub cancel: CancelHandle,
}

/// Wrap a [`TextStream`] so it can be cancelled, returning the handle.
pub fn make_cancellable_stream(stream: TextStream) -> (TextStream, CancelHandle) {
    let handle = CancelHandle::new();
    let token = handle.token.clone();
    let mut inner = stream;
    let s = async_stream::stream! {
        use futures::StreamExt;
        loop {
            tokio::select! {
                _ = token.cancelled() => break,
                item = inner.next() => {
                    let Some(item) = item else { break };
                    yield item;
                }
            }
        }
    };
    (Box::pin(s), handle)
}
