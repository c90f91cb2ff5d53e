//! Per-call generation options.

use serde::{Deserialize, Serialize};

/// Sampling overrides for a single generation call.
///
/// Knobs left unset fall back to `1.0` when the request is built. Values are
/// passed through to the vendor unvalidated; range checking is the vendor's
/// business.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize, Deserialize)]
pub struct GenerationOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f32>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f32>,
}

impl GenerationOptions {
    pub const DEFAULT_TEMPERATURE: f32 = 1.0;
    pub const DEFAULT_TOP_P: f32 = 1.0;

    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_temperature(mut self, temperature: f32) -> Self {
        self.temperature = Some(temperature);
        self
    }

    pub fn with_top_p(mut self, top_p: f32) -> Self {
        self.top_p = Some(top_p);
        self
    }

    /// The temperature to send, applying the default when unset.
    pub fn temperature_or_default(&self) -> f32 {
        self.temperature.unwrap_or(Self::DEFAULT_TEMPERATURE)
    }

    /// The top_p to send, applying the default when unset.
    pub fn top_p_or_default(&self) -> f32 {
        self.top_p.unwrap_or(Self::DEFAULT_TOP_P)
    }
}
