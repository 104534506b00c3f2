//! Error types for the region-blur crate.
//!
//! All fallible operations return [`Result<T>`] which uses [`Error`].
//!
//! Mode-gated operations (starting a drag outside edit mode, clicking
//! outside edit mode) are silent no-ops, not errors. Errors exist only at
//! the configuration and command-decoding boundaries, where the host has
//! something to report to the user.
//!
//! # Error Categories
//!
//! | Category | Variants |
//! |----------|----------|
//! | Configuration | [`Error::Config`] |
//! | Command | [`Error::UnknownMode`], [`Error::UnknownAction`] |
//! | External | [`Error::Json`] |

// ============================================================================
// Imports
// ============================================================================

use std::result::Result as StdResult;

use thiserror::Error;

// ============================================================================
// Result Alias
// ============================================================================

/// Result type alias using crate [`enum@Error`].
///
/// All fallible operations in this crate return this type.
pub type Result<T> = StdResult<T, Error>;

// ============================================================================
// Error Enum
// ============================================================================

/// Main error type for the crate.
#[derive(Error, Debug)]
pub enum Error {
    // ========================================================================
    // Configuration Errors
    // ========================================================================
    /// Configuration error.
    ///
    /// Returned when session configuration is invalid.
    #[error("Configuration error: {message}")]
    Config {
        /// Description of the configuration error.
        message: String,
    },

    // ========================================================================
    // Command Errors
    // ========================================================================
    /// Mode string outside the recognized set.
    ///
    /// Only `off`, `on`, and `edit` are valid modes.
    #[error("Unknown mode: {value}")]
    UnknownMode {
        /// The unrecognized mode string.
        value: String,
    },

    /// Command message whose action is not recognized.
    #[error("Unknown action: {action}")]
    UnknownAction {
        /// The unrecognized action name.
        action: String,
    },

    // ========================================================================
    // External Errors
    // ========================================================================
    /// JSON serialization error.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
}

// ============================================================================
// Error Constructors
// ============================================================================

impl Error {
    /// Creates a configuration error.
    #[inline]
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Creates an unknown mode error.
    #[inline]
    pub fn unknown_mode(value: impl Into<String>) -> Self {
        Self::UnknownMode {
            value: value.into(),
        }
    }

    /// Creates an unknown action error.
    #[inline]
    pub fn unknown_action(action: impl Into<String>) -> Self {
        Self::UnknownAction {
            action: action.into(),
        }
    }
}

// ============================================================================
// Error Predicates
// ============================================================================

impl Error {
    /// Returns `true` if this error came from decoding an inbound command.
    ///
    /// Command errors mean the payload was rejected before touching session
    /// state; the sender (e.g. a popup) should surface them to the user.
    #[inline]
    #[must_use]
    pub fn is_command_error(&self) -> bool {
        matches!(
            self,
            Self::UnknownMode { .. } | Self::UnknownAction { .. } | Self::Json(_)
        )
    }

    /// Returns `true` if this is a configuration error.
    #[inline]
    #[must_use]
    pub fn is_config_error(&self) -> bool {
        matches!(self, Self::Config { .. })
    }
}

// ============================================================================
// Tests
// ============================================================================
