//! Intersection finder: which eligible elements fall inside a rectangle.
//!
//! Runs on every pointer-move during a drag, over a fresh element snapshot,
//! so the result always reflects the live layout. Linear in the element
//! count; fast enough for ordinary pages, and deliberately unoptimized
//! beyond that.
//!
//! # Example
//!
//! ```
//! use region_blur::{EligibleTags, ElementId, ElementInfo, Rect};
//! use region_blur::session::intersect::eligible_in_rect;
//!
//! let elements = vec![
//!     ElementInfo::new(ElementId::new(1), "P", Rect::new(20.0, 20.0, 30.0, 30.0)),
//!     ElementInfo::new(ElementId::new(2), "DIV", Rect::new(30.0, 30.0, 30.0, 30.0)),
//! ];
//! let hits = eligible_in_rect(
//!     &elements,
//!     Rect::new(10.0, 10.0, 90.0, 90.0),
//!     &EligibleTags::standard(),
//! );
//! assert_eq!(hits, vec![ElementId::new(1)]); // DIV is not an eligible tag
//! ```

// ============================================================================
// Imports
// ============================================================================

use crate::config::EligibleTags;
use crate::geometry::Rect;
use crate::identifiers::ElementId;
use crate::page::ElementInfo;

// ============================================================================
// Finder
// ============================================================================

/// Returns every element whose tag is eligible and whose bounding box
/// strictly overlaps `rect`, preserving the snapshot's traversal order.
///
/// Overlap is open-interval ([`Rect::intersects`]): an element that merely
/// touches the rectangle's edge is excluded.
#[must_use]
pub fn eligible_in_rect(
    elements: &[ElementInfo],
    rect: Rect,
    tags: &EligibleTags,
) -> Vec<ElementId> {
    elements
        .iter()
        .filter(|el| tags.contains(&el.tag) && el.rect.intersects(&rect))
        .map(|el| el.id)
        .collect()
}

// ============================================================================
// Tests
// ============================================================================
