//! Error types for the host tool.

use pms7003_protocol::ProtocolError;
use thiserror::Error;

/// Errors that can occur while running a `pms7003` command.
#[derive(Debug, Error)]
pub enum CliError {
    /// I/O error on a file, stdin/stdout or the serial bridge.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Configuration file could not be parsed.
    #[error("config error: {0}")]
    Config(#[from] serde_yaml::Error),

    /// JSON output could not be produced.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Hex dump could not be parsed.
    #[error("invalid hex: {0}")]
    Hex(#[from] hex::FromHexError),

    /// Frame encoding or decoding failed.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Bad command-line argument.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

/// Result type alias for host tool operations.
pub type CliResult<T> = Result<T, CliError>;
