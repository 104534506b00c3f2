//! The page bridge: how the core reaches the host's DOM.
//!
//! The core never holds element references. The host implements [`PageDom`]
//! over its real document (or uses [`MemoryPage`] in tests) and the session
//! drives every visual mutation through it.
//!
//! | Type | Description |
//! |------|-------------|
//! | [`PageDom`] | Host bridge trait: layout queries and style mutation |
//! | [`ElementInfo`] | One element's identity, tag, and bounding box |
//! | [`MemoryPage`] | In-memory implementation for tests and headless hosts |
//! | [`Cursor`] | Page-level cursor state |
//!
//! # CSS contract
//!
//! Blurred elements get [`MARKER_CLASS`] added; the host must style it with
//! `pointer-events: none` so blurred content stops swallowing clicks.
//! [`marker_style_rules`] returns ready-made CSS text for hosts that inject
//! a style element.

// ============================================================================
// Submodules
// ============================================================================

/// In-memory page implementation.
pub mod memory;

pub use memory::MemoryPage;

// ============================================================================
// Imports
// ============================================================================

use serde::{Deserialize, Serialize};

use crate::geometry::Rect;
use crate::identifiers::ElementId;

// ============================================================================
// Constants
// ============================================================================

/// Class added to every blurred element.
///
/// The host's stylesheet must disable pointer events for this class; see
/// [`marker_style_rules`].
pub const MARKER_CLASS: &str = "blurred-element";

/// Border of the drag-selection overlay box.
pub const OVERLAY_BORDER: &str = "2px dashed #007bff";

/// Translucent fill of the drag-selection overlay box.
pub const OVERLAY_FILL: &str = "rgba(0, 123, 255, 0.1)";

/// Stacking order of the drag-selection overlay box.
pub const OVERLAY_Z_INDEX: i32 = 9999;

/// Outline applied to elements previewed during a drag.
pub const HIGHLIGHT_OUTLINE: &str = "2px solid #007bff";

/// Returns the CSS rules the host must install for [`MARKER_CLASS`].
///
/// A blurred element must not receive pointer events, and hovering it shows
/// the neutral cursor rather than e.g. a link hand.
#[must_use]
pub fn marker_style_rules() -> String {
    format!(
        ".{MARKER_CLASS} {{\n    pointer-events: none !important;\n}}\n\
         .{MARKER_CLASS}:hover {{\n    cursor: default !important;\n}}\n"
    )
}

// ============================================================================
// ElementInfo
// ============================================================================

/// A live element as reported by the page: identity, tag, and bounding box.
///
/// The bounding box comes from the live layout, so it is only valid for the
/// pointer pass that requested it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ElementInfo {
    /// Host-issued element handle.
    pub id: ElementId,

    /// Tag name as the DOM reports it (conventionally uppercase).
    pub tag: String,

    /// Axis-aligned bounding box in viewport coordinates.
    pub rect: Rect,
}

impl ElementInfo {
    /// Creates an element record.
    #[inline]
    #[must_use]
    pub fn new(id: ElementId, tag: impl Into<String>, rect: Rect) -> Self {
        Self {
            id,
            tag: tag.into(),
            rect,
        }
    }
}

// ============================================================================
// Cursor
// ============================================================================

/// Page-level cursor state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Cursor {
    /// The default arrow cursor.
    #[default]
    Default,
    /// Crosshair, shown while edit mode is active.
    Crosshair,
}

// ============================================================================
// PageDom
// ============================================================================

/// Host bridge to the real page.
///
/// All methods are synchronous: the core runs inside the page's single
/// event-handling thread, not across a transport. Implementations should
/// treat unknown element IDs as no-ops rather than panic; an element can
/// leave the document while the session still tracks it.
pub trait PageDom {
    /// Snapshot of every element under the document body, in tree traversal
    /// order, with live bounding boxes.
    fn elements(&self) -> Vec<ElementInfo>;

    /// Reads an element's inline style value for `name`.
    ///
    /// Returns the empty string when the property has no inline value, the
    /// DOM `element.style` convention.
    fn style(&self, id: ElementId, name: &str) -> String;

    /// Sets an element's inline style value for `name`.
    ///
    /// An empty `value` clears the inline declaration.
    fn set_style(&mut self, id: ElementId, name: &str, value: &str);

    /// Adds a class to an element's class list.
    fn add_class(&mut self, id: ElementId, class: &str);

    /// Removes a class from an element's class list.
    fn remove_class(&mut self, id: ElementId, class: &str);

    /// Sets the page-level cursor.
    fn set_cursor(&mut self, cursor: Cursor);

    /// Enables or disables text selection on the page.
    fn set_text_selection_enabled(&mut self, enabled: bool);

    /// Shows the drag-selection overlay box at the given rectangle.
    ///
    /// Visuals per the module constants: [`OVERLAY_BORDER`],
    /// [`OVERLAY_FILL`], [`OVERLAY_Z_INDEX`], fixed position, no pointer
    /// interaction.
    fn show_selection_overlay(&mut self, rect: Rect);

    /// Moves/resizes the drag-selection overlay box.
    fn update_selection_overlay(&mut self, rect: Rect);

    /// Removes the drag-selection overlay box.
    fn remove_selection_overlay(&mut self);
}

// ============================================================================
// Tests
// ============================================================================
