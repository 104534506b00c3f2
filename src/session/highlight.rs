//! Highlight tracker: the live outline preview during a drag.
//!
//! Same sidecar discipline as the blur registry, but for the `outline`
//! property and with a refresh-per-move lifecycle: each pointer move clears
//! every previous highlight and outlines the new intersecting set, so the
//! preview always matches the current rectangle exactly.

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::FxHashMap;
use tracing::trace;

use crate::identifiers::ElementId;
use crate::page::PageDom;

// ============================================================================
// Constants
// ============================================================================

/// Inline style property the highlight lives in.
const OUTLINE_PROPERTY: &str = "outline";

// ============================================================================
// HighlightTracker
// ============================================================================

/// Elements currently outlined as a drag preview, with their saved original
/// outlines.
///
/// Non-empty only while a drag is in progress.
#[derive(Debug, Default)]
pub(crate) struct HighlightTracker {
    /// Highlighted element -> original inline outline (may be empty).
    entries: FxHashMap<ElementId, String>,
}

impl HighlightTracker {
    /// Replaces the highlighted set: restores every previous outline, then
    /// saves and outlines each element of `ids`.
    pub(crate) fn refresh(
        &mut self,
        page: &mut dyn PageDom,
        ids: impl IntoIterator<Item = ElementId>,
        outline: &str,
    ) {
        self.clear(page);
        for id in ids {
            let original = page.style(id, OUTLINE_PROPERTY);
            self.entries.insert(id, original);
            page.set_style(id, OUTLINE_PROPERTY, outline);
        }
        trace!(count = self.entries.len(), "Refreshed highlight set");
    }

    /// Restores every saved outline and empties the set.
    pub(crate) fn clear(&mut self, page: &mut dyn PageDom) {
        for (id, original) in self.entries.drain() {
            page.set_style(id, OUTLINE_PROPERTY, &original);
        }
    }

    /// Number of highlighted elements.
    #[inline]
    pub(crate) fn len(&self) -> usize {
        self.entries.len()
    }

    /// Tests membership.
    #[cfg(test)]
    pub(crate) fn contains(&self, id: ElementId) -> bool {
        self.entries.contains_key(&id)
    }
}

// ============================================================================
// Tests
// ============================================================================
