use thiserror::Error;

use crate::services::embedding::ProviderError;
use crate::vector::VectorError;

/// Custom error types for the MeetScribe application
#[derive(Error, Debug)]
pub enum MeetScribeError {
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Embedding storage error: {0}")]
    Vector(#[from] VectorError),

    #[error("Embedding provider error: {0}")]
    Provider(#[from] ProviderError),

    #[error("Invalid configuration: {message}")]
    InvalidConfig { message: String },

    #[error("Service error: {message}")]
    Service { message: String },

    #[error("Validation error: {field}: {message}")]
    Validation { field: String, message: String },

    #[error("Not found: {resource}")]
    NotFound { resource: String },

    #[error("UUID parsing error: {0}")]
    Uuid(#[from] uuid::Error),

    #[error("Time parsing error: {0}")]
    Time(#[from] chrono::ParseError),

    #[error("Unknown error: {message}")]
    Unknown { message: String },
}

impl MeetScribeError {
    /// Create an invalid configuration error
    pub fn invalid_config<S: Into<String>>(message: S) -> Self {
        Self::InvalidConfig {
            message: message.into(),
        }
    }

    /// Create a service error
    pub fn service<S: Into<String>>(message: S) -> Self {
        Self::Service {
            message: message.into(),
        }
    }

    /// Create a validation error
    pub fn validation<S: Into<String>>(field: S, message: S) -> Self {
        Self::Validation {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Create a not found error
    pub fn not_found<S: Into<String>>(resource: S) -> Self {
        Self::NotFound {
            resource: resource.into(),
        }
    }

    /// Get error category for logging
    pub fn category(&self) -> &'static str {
        match self {
            MeetScribeError::Database(_) => "database",
            MeetScribeError::Io(_) => "io",
            MeetScribeError::Json(_) => "json",
            MeetScribeError::Vector(_) => "vector",
            MeetScribeError::Provider(_) => "provider",
            MeetScribeError::InvalidConfig { .. } => "config",
            MeetScribeError::Service { .. } => "service",
            MeetScribeError::Validation { .. } => "validation",
            MeetScribeError::NotFound { .. } => "not_found",
            MeetScribeError::Uuid(_) => "uuid",
            MeetScribeError::Time(_) => "time",
            MeetScribeError::Unknown { .. } => "unknown",
        }
    }
}

impl From<anyhow::Error> for MeetScribeError {
    fn from(err: anyhow::Error) -> Self {
        MeetScribeError::Unknown {
            message: err.to_string(),
        }
    }
}

/// Result type alias for MeetScribe
pub type Result<T> = std::result::Result<T, MeetScribeError>;
