//! Environment variable constants used throughout the application
//!
//! This module centralizes all environment variable names to ensure
//! consistency and make it easier to manage configuration across the
//! codebase.

/// Logging configuration
pub mod logging {
    /// Log level configuration (e.g., "debug", "info", "warn", "error")
    pub const LOG_LEVEL: &str = "MEETSCRIBE_LOG_LEVEL";

    /// Log file path for file-based logging
    pub const LOG_FILE: &str = "MEETSCRIBE_LOG_FILE";

    /// Disable colored output (follows the NO_COLOR standard)
    pub const NO_COLOR: &str = "NO_COLOR";
}

/// Database configuration
pub mod database {
    /// Override for the default database path (~/.meetscribe/meetings.db)
    pub const MEETSCRIBE_DB: &str = "MEETSCRIBE_DB";
}

/// External API configuration
pub mod apis {
    /// OpenAI API key for embedding generation
    pub const OPENAI_API_KEY: &str = "OPENAI_API_KEY";
}
