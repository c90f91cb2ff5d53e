//! Standardized message, response, and per-call option types.

mod message;
mod options;
mod response;

pub use message::Message;
pub use options::GenerationOptions;
pub use response::{Response, ResponseMetadata, Usage};
