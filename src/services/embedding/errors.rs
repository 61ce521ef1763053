use thiserror::Error;

/// Failures from the embedding provider.
///
/// A search cannot proceed without a query vector, so any of these aborts
/// the enclosing operation with no partial result.
#[derive(Debug, Error)]
pub enum ProviderError {
    #[error("Authentication failed: {message}")]
    AuthenticationFailed { message: String },

    #[error("Rate limit exceeded: {message}")]
    RateLimitExceeded { message: String },

    #[error("Request timeout after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[cfg(feature = "reqwest")]
    #[error("Network error: {source}")]
    NetworkError { source: reqwest::Error },

    #[error("Invalid request: {message}")]
    InvalidRequest { message: String },

    #[error("Quota exceeded: {message}")]
    QuotaExceeded { message: String },

    #[error("Server error: {status} - {message}")]
    ServerError { status: u16, message: String },

    #[error("Parse error: {message}")]
    ParseError { message: String },

    #[error("Provider returned no embedding")]
    EmptyResponse,

    #[error("Configuration error: {message}")]
    ConfigurationError { message: String },
}

impl ProviderError {
    /// Whether a caller-side retry could plausibly succeed. The provider
    /// layer itself never retries.
    pub fn is_retryable(&self) -> bool {
        match self {
            ProviderError::RateLimitExceeded { .. } => true,
            ProviderError::Timeout { .. } => true,
            #[cfg(feature = "reqwest")]
            ProviderError::NetworkError { .. } => true,
            ProviderError::ServerError { status, .. } => *status >= 500,
            _ => false,
        }
    }

    #[cfg(feature = "reqwest")]
    pub fn from_reqwest_error(error: reqwest::Error) -> Self {
        if error.is_timeout() {
            ProviderError::Timeout { timeout_ms: 30000 }
        } else {
            ProviderError::NetworkError { source: error }
        }
    }

    #[cfg(feature = "reqwest")]
    pub fn from_status_and_body(status: reqwest::StatusCode, body: &str) -> Self {
        let status_code = status.as_u16();

        // OpenAI-style error envelope: {"error": {"message": ...}}
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|v| {
                v.get("error")
                    .and_then(|e| e.get("message"))
                    .and_then(|m| m.as_str())
                    .map(str::to_string)
            })
            .unwrap_or_else(|| body.to_string());

        match status_code {
            400 => ProviderError::InvalidRequest { message },
            401 => ProviderError::AuthenticationFailed { message },
            403 => {
                if message.to_lowercase().contains("quota") {
                    ProviderError::QuotaExceeded { message }
                } else {
                    ProviderError::AuthenticationFailed { message }
                }
            }
            429 => ProviderError::RateLimitExceeded { message },
            500..=599 => ProviderError::ServerError {
                status: status_code,
                message,
            },
            _ => ProviderError::InvalidRequest {
                message: format!("HTTP {status_code}: {message}"),
            },
        }
    }
}
