pub mod cli;
pub mod database;
pub mod models;
pub mod services;
pub mod vector;

pub mod config;
pub mod env;
pub mod error;
pub mod logging;

pub use error::{MeetScribeError, Result};
pub use logging::{init_logging, LoggingConfig};
