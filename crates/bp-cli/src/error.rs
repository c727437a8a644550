//! CLI error types.

use thiserror::Error;

/// Errors surfaced by the `bondprice` command line.
#[derive(Debug, Error)]
pub enum CliError {
    /// The pricing library rejected the inputs.
    #[error("pricing failed: {0}")]
    Pricing(#[from] bondprice::Error),

    /// The requested configuration file does not exist.
    #[error("config file not found: {0}")]
    FileNotFound(String),

    /// The configuration file is not valid TOML for this tool.
    #[error("invalid config: {0}")]
    Config(#[from] toml::de::Error),

    /// Reading input or writing output failed.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Writing CSV output failed.
    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    /// Writing JSON output failed.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Result type for CLI operations.
pub type Result<T> = std::result::Result<T, CliError>;
