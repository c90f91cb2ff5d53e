//! curiosity-ai
//!
//! A provider-agnostic interface for calling LLM backends. Callers build a
//! conversation out of [`types::Message`] values, obtain an adapter through
//! [`providers::provider_from_settings`] (or construct one directly), and
//! receive either a normalized [`types::Response`] or a lazy stream of text
//! fragments — never a vendor wire shape, never a vendor error type.
//!
//! ```rust,no_run
//! use curiosity_ai::prelude::*;
//!
//! # async fn example() -> Result<(), ProviderError> {
//! let settings = AiSettings::from_env()?;
//! let provider = provider_from_settings(&settings)?;
//!
//! let reply = provider
//!     .generate_response(
//!         vec![Message::user("What is a borrow checker?")],
//!         &GenerationOptions::default(),
//!     )
//!     .await?;
//! println!("{} ({})", reply.content, reply.metadata.provider);
//! # Ok(())
//! # }
//! ```
#![deny(unsafe_code)]

pub mod config;
pub mod error;
pub mod providers;
pub mod streaming;
pub mod traits;
pub mod types;

pub use error::ProviderError;

/// Commonly used items, re-exported for convenient glob import.
pub mod prelude {
    pub use crate::config::{AiSettings, ProviderKind};
    pub use crate::error::ProviderError;
    pub use crate::providers::provider_from_settings;
    pub use crate::streaming::{TextStream, TextStreamHandle};
    pub use crate::traits::{Provider, ProviderExt};
    pub use crate::types::{GenerationOptions, Message, Response, Usage};
}
