//! Error types for the SideOut scoreboard.
//!
//! Match operations themselves never fail (rejections are no-ops), so these
//! errors only surface at the edges: the settings dialog and configuration.
//!
//! All errors use the `SO_ERR_` prefix convention for easy grepping in logs.
//! Error codes are grouped by subsystem:
//! - 1xx: Settings validation errors
//! - 9xx: General / configuration / internal errors

use thiserror::Error;

use crate::TeamId;

/// Central error enum for all SideOut operations that can fail.
#[derive(Debug, Error)]
pub enum SideoutError {
    // =================================================================
    // Settings Errors (1xx)
    // =================================================================
    /// A numeric rule is outside the range the settings dialog accepts.
    #[error("SO_ERR_100: {field} must be between {min} and {max}, got {value}")]
    RuleOutOfRange {
        field: &'static str,
        value: u32,
        min: u32,
        max: u32,
    },

    /// A team name is empty or whitespace.
    #[error("SO_ERR_101: Team name for {0} must not be empty")]
    EmptyTeamName(TeamId),

    // =================================================================
    // General / Internal (9xx)
    // =================================================================
    /// Unrecoverable internal error.
    #[error("SO_ERR_900: Internal error: {0}")]
    Internal(String),

    /// Serialization / deserialization error.
    #[error("SO_ERR_901: Serialization error: {0}")]
    Serialization(String),

    /// Configuration error (malformed document, bad values, etc.).
    #[error("SO_ERR_902: Configuration error: {0}")]
    Configuration(String),
}

/// Crate-wide `Result` alias.
pub type Result<T> = std::result::Result<T, SideoutError>;

impl From<serde_json::Error> for SideoutError {
    fn from(err: serde_json::Error) -> Self {
        Self::Serialization(err.to_string())
    }
}
