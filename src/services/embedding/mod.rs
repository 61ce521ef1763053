//! Embedding provider capability.
//!
//! The rest of the crate consumes exactly one call from the language-model
//! provider: `embed(text) -> vector`. The trait keeps that seam narrow so
//! tests can script it and a caching or retrying decorator can wrap it
//! without touching the search code.

pub mod errors;
#[cfg(feature = "reqwest")]
pub mod openai;

pub use errors::ProviderError;
#[cfg(feature = "reqwest")]
pub use openai::{OpenAiConfig, OpenAiEmbeddingClient};

use async_trait::async_trait;

/// Capability handle for turning text into a fixed-dimensionality embedding.
///
/// Implementations must not retry internally; a failure propagates as a
/// [`ProviderError`] and any retry policy lives with the caller.
#[async_trait]
pub trait EmbeddingProvider: Send + Sync {
    async fn embed(&self, text: &str) -> Result<Vec<f32>, ProviderError>;
}
