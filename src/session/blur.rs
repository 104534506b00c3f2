//! Blur registry: which elements are blurred, and how to undo it.
//!
//! Membership here is the sole source of truth for whether an element's
//! blur visual is active. Each entry carries the element's original inline
//! filter, saved before the first mutation and restored exactly on removal,
//! so repeated toggling never corrupts a page-authored filter.

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::FxHashMap;
use tracing::debug;

use crate::identifiers::ElementId;
use crate::page::{MARKER_CLASS, PageDom};

// ============================================================================
// Constants
// ============================================================================

/// Inline style property the blur visual lives in.
const FILTER_PROPERTY: &str = "filter";

// ============================================================================
// BlurRegistry
// ============================================================================

/// The set of currently-blurred elements with their saved original filters.
#[derive(Debug, Default)]
pub(crate) struct BlurRegistry {
    /// Blurred element -> original inline filter (may be empty).
    entries: FxHashMap<ElementId, String>,
}

impl BlurRegistry {
    /// Blurs an element: saves its inline filter, applies the blur filter,
    /// and adds the marker class.
    ///
    /// Idempotent; returns `false` if the element was already blurred.
    pub(crate) fn apply(&mut self, page: &mut dyn PageDom, id: ElementId, filter: &str) -> bool {
        if self.entries.contains_key(&id) {
            return false;
        }

        let original = page.style(id, FILTER_PROPERTY);
        self.entries.insert(id, original);
        page.set_style(id, FILTER_PROPERTY, filter);
        page.add_class(id, MARKER_CLASS);

        debug!(element_id = %id, "Blurred element");
        true
    }

    /// Unblurs an element: restores the saved filter (empty string when none
    /// was saved) and removes the marker class.
    ///
    /// Idempotent; returns `false` if the element was not blurred.
    pub(crate) fn remove(&mut self, page: &mut dyn PageDom, id: ElementId) -> bool {
        let Some(original) = self.entries.remove(&id) else {
            return false;
        };

        page.set_style(id, FILTER_PROPERTY, &original);
        page.remove_class(id, MARKER_CLASS);

        debug!(element_id = %id, "Unblurred element");
        true
    }

    /// Unblurs every element and empties the registry.
    pub(crate) fn clear_all(&mut self, page: &mut dyn PageDom) {
        let count = self.entries.len();
        for (id, original) in self.entries.drain() {
            page.set_style(id, FILTER_PROPERTY, &original);
            page.remove_class(id, MARKER_CLASS);
        }
        if count > 0 {
            debug!(count, "Cleared all blurred elements");
        }
    }

    /// Re-applies the blur visual to every member without touching
    /// membership or saved filters.
    ///
    /// Used when the mode returns from off: members keep their original
    /// sidecar values, only the visuals are swept back on.
    pub(crate) fn reapply_all(&self, page: &mut dyn PageDom, filter: &str) {
        for id in self.entries.keys() {
            page.set_style(*id, FILTER_PROPERTY, filter);
            page.add_class(*id, MARKER_CLASS);
        }
        if !self.entries.is_empty() {
            debug!(count = self.entries.len(), "Re-applied blur visuals");
        }
    }

    /// Tests membership.
    #[inline]
    pub(crate) fn contains(&self, id: ElementId) -> bool {
        self.entries.contains_key(&id)
    }

    /// Number of blurred elements.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Current members, in no particular order.
    pub(crate) fn ids(&self) -> Vec<ElementId> {
        self.entries.keys().copied().collect()
    }

    /// Inserts a member directly, bypassing the page.
    #[cfg(test)]
    pub(crate) fn insert_raw(&mut self, id: ElementId, original: impl Into<String>) {
        self.entries.insert(id, original.into());
    }
}

// ============================================================================
// Tests
// ============================================================================
