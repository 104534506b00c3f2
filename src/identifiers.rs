//! Type-safe identifiers for page entities.
//!
//! Newtype wrappers prevent mixing incompatible handles at compile time.
//!
//! # Usage
//!
//! ```
//! use region_blur::ElementId;
//!
//! let id = ElementId::new(7);
//! assert_eq!(id.value(), 7);
//! assert_eq!(id.to_string(), "7");
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;

use serde::{Deserialize, Serialize};

// ============================================================================
// ElementId
// ============================================================================

/// Stable handle for a live page element.
///
/// Issued by the host's [`PageDom`](crate::page::PageDom) implementation;
/// the core never owns elements, it keys its bookkeeping maps by this ID.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ElementId(u64);

impl ElementId {
    /// Creates an element ID from its raw value.
    #[inline]
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self(value)
    }

    /// Returns the raw ID value.
    #[inline]
    #[must_use]
    pub const fn value(self) -> u64 {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u64> for ElementId {
    fn from(value: u64) -> Self {
        Self(value)
    }
}

// ============================================================================
// Tests
// ============================================================================
