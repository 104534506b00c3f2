//! In-memory page implementation.
//!
//! [`MemoryPage`] stands in for a real document: elements are flat records
//! with fixed bounding boxes, inline styles are a string map, and the
//! selection overlay is a tracked rectangle. It backs the crate's own
//! scenario tests and gives hosts a headless target for integration tests.
//!
//! The handle is cheaply clonable; clones share the same page, so a test can
//! keep one clone for assertions while the session owns another.
//!
//! # Example
//!
//! ```
//! use region_blur::{MemoryPage, PageDom, Rect};
//!
//! let page = MemoryPage::new();
//! let photo = page.insert("img", Rect::new(20.0, 20.0, 30.0, 30.0));
//!
//! assert_eq!(page.elements().len(), 1);
//! assert_eq!(page.style(photo, "filter"), "");
//! ```

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use rustc_hash::FxHashMap;

use crate::geometry::{Point, Rect};
use crate::identifiers::ElementId;

use super::{Cursor, ElementInfo, MARKER_CLASS, PageDom};

// ============================================================================
// Types
// ============================================================================

/// One stored element.
struct MemoryElement {
    id: ElementId,
    tag: String,
    rect: Rect,
    styles: FxHashMap<String, String>,
    classes: Vec<String>,
}

/// Shared mutable page state.
struct MemoryPageInner {
    /// Elements in tree traversal order.
    elements: Vec<MemoryElement>,
    /// Next handle to issue.
    next_id: u64,
    cursor: Cursor,
    text_selection_enabled: bool,
    overlay: Option<Rect>,
}

// ============================================================================
// MemoryPage
// ============================================================================

/// An in-memory [`PageDom`] implementation.
#[derive(Clone)]
pub struct MemoryPage {
    inner: Arc<Mutex<MemoryPageInner>>,
}

impl fmt::Debug for MemoryPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let inner = self.inner.lock();
        f.debug_struct("MemoryPage")
            .field("element_count", &inner.elements.len())
            .field("cursor", &inner.cursor)
            .field("overlay", &inner.overlay)
            .finish_non_exhaustive()
    }
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// MemoryPage - Construction
// ============================================================================

impl MemoryPage {
    /// Creates an empty page.
    #[must_use]
    pub fn new() -> Self {
        Self {
            inner: Arc::new(Mutex::new(MemoryPageInner {
                elements: Vec::new(),
                next_id: 1,
                cursor: Cursor::Default,
                text_selection_enabled: true,
                overlay: None,
            })),
        }
    }

    /// Adds an element with the given tag and bounding box, in tree order.
    ///
    /// Returns the handle issued for it.
    pub fn insert(&self, tag: &str, rect: Rect) -> ElementId {
        let mut inner = self.inner.lock();
        let id = ElementId::new(inner.next_id);
        inner.next_id += 1;
        inner.elements.push(MemoryElement {
            id,
            tag: tag.to_ascii_uppercase(),
            rect,
            styles: FxHashMap::default(),
            classes: Vec::new(),
        });
        id
    }

    /// Removes an element, simulating it leaving the document.
    pub fn remove(&self, id: ElementId) {
        self.inner.lock().elements.retain(|el| el.id != id);
    }
}

// ============================================================================
// MemoryPage - Inspection
// ============================================================================

impl MemoryPage {
    /// Returns the topmost element containing `point` that still receives
    /// pointer events.
    ///
    /// Elements carrying [`MARKER_CLASS`] are skipped, the way
    /// `pointer-events: none` makes a real browser's hit testing pass
    /// through them. Later siblings win, the painting-order convention.
    #[must_use]
    pub fn hit_test(&self, point: Point) -> Option<ElementId> {
        let inner = self.inner.lock();
        inner
            .elements
            .iter()
            .rev()
            .find(|el| {
                el.rect.contains(point) && !el.classes.iter().any(|c| c == MARKER_CLASS)
            })
            .map(|el| el.id)
    }

    /// Tests whether an element currently carries a class.
    #[must_use]
    pub fn has_class(&self, id: ElementId, class: &str) -> bool {
        let inner = self.inner.lock();
        inner
            .elements
            .iter()
            .find(|el| el.id == id)
            .is_some_and(|el| el.classes.iter().any(|c| c == class))
    }

    /// Current page cursor.
    #[must_use]
    pub fn cursor(&self) -> Cursor {
        self.inner.lock().cursor
    }

    /// Whether text selection is currently enabled.
    #[must_use]
    pub fn text_selection_enabled(&self) -> bool {
        self.inner.lock().text_selection_enabled
    }

    /// The selection overlay's rectangle, if one is shown.
    #[must_use]
    pub fn overlay(&self) -> Option<Rect> {
        self.inner.lock().overlay
    }
}

// ============================================================================
// PageDom Implementation
// ============================================================================

impl PageDom for MemoryPage {
    fn elements(&self) -> Vec<ElementInfo> {
        let inner = self.inner.lock();
        inner
            .elements
            .iter()
            .map(|el| ElementInfo::new(el.id, el.tag.clone(), el.rect))
            .collect()
    }

    fn style(&self, id: ElementId, name: &str) -> String {
        let inner = self.inner.lock();
        inner
            .elements
            .iter()
            .find(|el| el.id == id)
            .and_then(|el| el.styles.get(name))
            .cloned()
            .unwrap_or_default()
    }

    fn set_style(&mut self, id: ElementId, name: &str, value: &str) {
        let mut inner = self.inner.lock();
        if let Some(el) = inner.elements.iter_mut().find(|el| el.id == id) {
            if value.is_empty() {
                el.styles.remove(name);
            } else {
                el.styles.insert(name.to_string(), value.to_string());
            }
        }
    }

    fn add_class(&mut self, id: ElementId, class: &str) {
        let mut inner = self.inner.lock();
        if let Some(el) = inner.elements.iter_mut().find(|el| el.id == id)
            && !el.classes.iter().any(|c| c == class)
        {
            el.classes.push(class.to_string());
        }
    }

    fn remove_class(&mut self, id: ElementId, class: &str) {
        let mut inner = self.inner.lock();
        if let Some(el) = inner.elements.iter_mut().find(|el| el.id == id) {
            el.classes.retain(|c| c != class);
        }
    }

    fn set_cursor(&mut self, cursor: Cursor) {
        self.inner.lock().cursor = cursor;
    }

    fn set_text_selection_enabled(&mut self, enabled: bool) {
        self.inner.lock().text_selection_enabled = enabled;
    }

    fn show_selection_overlay(&mut self, rect: Rect) {
        self.inner.lock().overlay = Some(rect);
    }

    fn update_selection_overlay(&mut self, rect: Rect) {
        self.inner.lock().overlay = Some(rect);
    }

    fn remove_selection_overlay(&mut self) {
        self.inner.lock().overlay = None;
    }
}

// ============================================================================
// Tests
// ============================================================================
