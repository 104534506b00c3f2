//! Session mode: the three-state switch driven by the host UI.
//!
//! | Mode | Blur visuals | Pointer behavior |
//! |------|--------------|------------------|
//! | `Off` | cleared | normal page interaction |
//! | `On` | active | normal page interaction |
//! | `Edit` | active | crosshair cursor, drag-select and click-toggle armed |
//!
//! A fresh session always starts in [`Mode::Off`].

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::Error;

// ============================================================================
// Mode
// ============================================================================

/// Interaction mode of a blur session.
///
/// Serializes as the lowercase wire strings `"off"`, `"on"`, `"edit"`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Mode {
    /// Blur disabled; all blur state cleared on entry.
    #[default]
    Off,
    /// Blur visuals active; the page otherwise behaves normally.
    On,
    /// Selection mode: drag to blur regions, click to toggle one element.
    Edit,
}

impl Mode {
    /// Returns `true` if this is edit mode.
    #[inline]
    #[must_use]
    pub fn is_edit(self) -> bool {
        matches!(self, Self::Edit)
    }

    /// Returns the lowercase wire name of the mode.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Off => "off",
            Self::On => "on",
            Self::Edit => "edit",
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Mode {
    type Err = Error;

    /// Parses a wire mode string.
    ///
    /// # Errors
    ///
    /// [`Error::UnknownMode`] for anything other than `off`, `on`, `edit`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "off" => Ok(Self::Off),
            "on" => Ok(Self::On),
            "edit" => Ok(Self::Edit),
            other => Err(Error::unknown_mode(other)),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
