//! Inbound command message types.
//!
//! The host UI (typically a toolbar popup) drives the session with a single
//! message kind: set the mode.
//!
//! # Format
//!
//! ```json
//! {
//!   "action": "setMode",
//!   "mode": "edit"
//! }
//! ```
//!
//! The payload is decoded in two steps: [`ModeCommand::from_json`] for the
//! envelope, then [`ModeCommand::parse_mode`] to validate the action name
//! and mode string. Both reject bad input before any session state is
//! touched.

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};
use crate::mode::Mode;

// ============================================================================
// Constants
// ============================================================================

/// The only recognized command action.
pub const SET_MODE_ACTION: &str = "setMode";

// ============================================================================
// ModeCommand
// ============================================================================

/// A mode-change command from the host UI.
///
/// Fields stay raw strings so the envelope can be decoded (and logged, or
/// echoed back) even when the mode value is invalid; validation happens in
/// [`parse_mode`](Self::parse_mode).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModeCommand {
    /// Command action; [`SET_MODE_ACTION`] is the only recognized value.
    pub action: String,

    /// Requested mode as a wire string.
    pub mode: String,
}

impl ModeCommand {
    /// Creates a set-mode command.
    #[inline]
    #[must_use]
    pub fn set_mode(mode: Mode) -> Self {
        Self {
            action: SET_MODE_ACTION.to_string(),
            mode: mode.as_str().to_string(),
        }
    }

    /// Decodes a command from its JSON payload.
    ///
    /// # Errors
    ///
    /// [`Error::Json`] if the payload is not a valid command envelope.
    pub fn from_json(payload: &str) -> Result<Self> {
        Ok(serde_json::from_str(payload)?)
    }

    /// Encodes the command as a JSON payload.
    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// Validates the command and extracts the requested mode.
    ///
    /// # Errors
    ///
    /// - [`Error::UnknownAction`] if the action is not [`SET_MODE_ACTION`]
    /// - [`Error::UnknownMode`] if the mode string is not recognized
    pub fn parse_mode(&self) -> Result<Mode> {
        if self.action != SET_MODE_ACTION {
            return Err(Error::unknown_action(&self.action));
        }
        self.mode.parse()
    }
}

// ============================================================================
// Tests
// ============================================================================
