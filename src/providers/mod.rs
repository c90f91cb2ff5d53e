//! Concrete provider adapters and the selection factory.

pub mod github;

pub use github::{GithubModelsConfig, GithubModelsProvider};

use secrecy::ExposeSecret;

use crate::config::{AiSettings, ProviderKind};
use crate::error::ProviderError;
use crate::traits::Provider;

/// Build the adapter selected by `settings.provider`.
///
/// Selectors without a registered adapter are configuration errors naming
/// the selector; callers decide whether to fall back or abort.
pub fn provider_from_settings(settings: &AiSettings) -> Result<Box<dyn Provider>, ProviderError> {
    match settings.provider {
        ProviderKind::Github => {
            let config = GithubModelsConfig::new(settings.api_key.expose_secret())
                .with_model(settings.model_name.clone())
                .with_endpoint(settings.github_endpoint.clone())
                .with_extra(settings.extra.clone());
            Ok(Box::new(GithubModelsProvider::new(config)?))
        }
        other => Err(ProviderError::configuration(format!(
            "no adapter registered for provider '{other}'"
        ))),
    }
}
