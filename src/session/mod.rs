//! The blur session: one controller per page context.
//!
//! [`BlurSession`] owns the mode, the drag state, and both element
//! registries, and drives every visual mutation through the host's
//! [`PageDom`]. It is the Rust shape of "one content script instance per
//! page": constructed once, always starting in [`Mode::Off`].
//!
//! # Event wiring
//!
//! The host forwards three kinds of input:
//!
//! | Input | Entry point |
//! |-------|-------------|
//! | Pointer down / move / up | [`pointer_down`](BlurSession::pointer_down), [`pointer_move`](BlurSession::pointer_move), [`pointer_up`](BlurSession::pointer_up) |
//! | Click on an element | [`click`](BlurSession::click) |
//! | Mode command from the UI | [`set_mode`](BlurSession::set_mode), [`handle_message`](BlurSession::handle_message), [`listen`](BlurSession::listen) |
//!
//! Every entry point locks the session state and runs to completion, so
//! handlers never interleave even when pointer events and mode commands
//! arrive from different tasks.
//!
//! # Example
//!
//! ```
//! use region_blur::{BlurSession, MemoryPage, Mode, PageDom, Point, Rect};
//!
//! let page = MemoryPage::new();
//! let photo = page.insert("img", Rect::new(20.0, 20.0, 30.0, 30.0));
//!
//! let session = BlurSession::new(page.clone());
//! session.set_mode(Mode::Edit);
//!
//! // Drag a rectangle across the photo.
//! session.pointer_down(Point::new(10.0, 10.0));
//! session.pointer_move(Point::new(100.0, 100.0));
//! session.pointer_up(Point::new(100.0, 100.0));
//!
//! assert!(session.is_blurred(photo));
//! assert_eq!(page.style(photo, "filter"), "blur(5px)");
//! ```

// ============================================================================
// Submodules
// ============================================================================

/// Session configuration builder.
pub mod builder;

/// Intersection finder.
pub mod intersect;

mod blur;
mod highlight;
mod selection;

pub use builder::SessionBuilder;

// ============================================================================
// Imports
// ============================================================================

use std::fmt;
use std::sync::Arc;

use parking_lot::Mutex;
use tokio::sync::mpsc;
use tracing::{debug, trace, warn};

use crate::config::SessionConfig;
use crate::error::Result;
use crate::geometry::{Point, Rect};
use crate::identifiers::ElementId;
use crate::mode::Mode;
use crate::page::{Cursor, PageDom};
use crate::protocol::ModeCommand;

use blur::BlurRegistry;
use highlight::HighlightTracker;
use selection::DragState;

// ============================================================================
// Types
// ============================================================================

/// Mutable session state, serialized behind the session lock.
struct SessionState {
    /// Current interaction mode.
    mode: Mode,

    /// Drag-selection state.
    drag: DragState,

    /// Blurred elements with saved original filters.
    blur: BlurRegistry,

    /// Drag-preview highlights with saved original outlines.
    highlight: HighlightTracker,

    /// The host's page bridge.
    page: Box<dyn PageDom + Send>,
}

/// Internal shared state for a session.
struct SessionInner {
    /// Resolved configuration.
    config: SessionConfig,

    /// Lock-serialized mutable state.
    state: Mutex<SessionState>,
}

// ============================================================================
// BlurSession
// ============================================================================

/// A per-page blur controller.
///
/// Cheaply clonable; clones share the same session, so pointer glue and an
/// async command listener can hold their own handles.
#[derive(Clone)]
pub struct BlurSession {
    /// Shared inner state.
    inner: Arc<SessionInner>,
}

// ============================================================================
// BlurSession - Display
// ============================================================================

impl fmt::Debug for BlurSession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.inner.state.lock();
        f.debug_struct("BlurSession")
            .field("mode", &state.mode)
            .field("dragging", &state.drag.is_dragging())
            .field("blurred_count", &state.blur.len())
            .finish_non_exhaustive()
    }
}

// ============================================================================
// BlurSession - Construction
// ============================================================================

impl BlurSession {
    /// Creates a session with the stock configuration.
    ///
    /// The session starts in [`Mode::Off`] with nothing blurred.
    #[must_use]
    pub fn new<P>(page: P) -> Self
    where
        P: PageDom + Send + 'static,
    {
        Self::with_config(page, SessionConfig::default())
    }

    /// Creates a configuration builder for a session.
    #[inline]
    #[must_use]
    pub fn builder() -> SessionBuilder {
        SessionBuilder::new()
    }

    /// Creates a session with a resolved configuration.
    pub(crate) fn with_config<P>(page: P, config: SessionConfig) -> Self
    where
        P: PageDom + Send + 'static,
    {
        Self {
            inner: Arc::new(SessionInner {
                config,
                state: Mutex::new(SessionState {
                    mode: Mode::Off,
                    drag: DragState::Idle,
                    blur: BlurRegistry::default(),
                    highlight: HighlightTracker::default(),
                    page: Box::new(page),
                }),
            }),
        }
    }
}

// ============================================================================
// BlurSession - Mode Controller
// ============================================================================

impl BlurSession {
    /// Returns the current mode.
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.inner.state.lock().mode
    }

    /// Applies a mode change.
    ///
    /// On any change: cursor becomes crosshair iff edit, text selection is
    /// disabled iff edit. Entering [`Mode::Off`] unblurs everything and
    /// empties the blurred set; entering any other mode re-applies the blur
    /// visual to every member without changing membership. An in-flight
    /// drag is cancelled when the mode leaves edit.
    pub fn set_mode(&self, mode: Mode) {
        let mut guard = self.inner.state.lock();
        let state = &mut *guard;

        let previous = state.mode;
        state.mode = mode;

        // A drag cannot survive leaving edit mode: drop the overlay and the
        // preview without blurring anything.
        if !mode.is_edit() && state.drag.finish().is_some() {
            state.page.remove_selection_overlay();
            state.highlight.clear(state.page.as_mut());
            debug!("Cancelled in-flight drag on mode change");
        }

        state.page.set_cursor(if mode.is_edit() {
            Cursor::Crosshair
        } else {
            Cursor::Default
        });
        state.page.set_text_selection_enabled(!mode.is_edit());

        match mode {
            Mode::Off => state.blur.clear_all(state.page.as_mut()),
            Mode::On | Mode::Edit => {
                let filter = self.inner.config.blur_filter();
                state.blur.reapply_all(state.page.as_mut(), &filter);
            }
        }

        debug!(from = %previous, to = %mode, "Mode set");
    }

    /// Validates a decoded command and applies the requested mode.
    ///
    /// # Errors
    ///
    /// Command-decoding errors ([`Error::UnknownAction`],
    /// [`Error::UnknownMode`]); session state is untouched on error.
    ///
    /// [`Error::UnknownAction`]: crate::Error::UnknownAction
    /// [`Error::UnknownMode`]: crate::Error::UnknownMode
    pub fn handle_command(&self, command: &ModeCommand) -> Result<Mode> {
        let mode = command.parse_mode()?;
        self.set_mode(mode);
        Ok(mode)
    }

    /// Decodes a raw JSON command payload and applies the requested mode.
    ///
    /// # Errors
    ///
    /// [`Error::Json`](crate::Error::Json) for malformed payloads, plus the
    /// [`handle_command`](Self::handle_command) errors.
    pub fn handle_message(&self, payload: &str) -> Result<Mode> {
        self.handle_command(&ModeCommand::from_json(payload)?)
    }

    /// Drains a channel of raw command payloads until it closes.
    ///
    /// Rejected payloads are logged and skipped; the sender is responsible
    /// for surfacing errors to the user.
    pub async fn listen(&self, mut commands: mpsc::Receiver<String>) {
        while let Some(payload) = commands.recv().await {
            match self.handle_message(&payload) {
                Ok(mode) => debug!(%mode, "Applied mode command"),
                Err(error) => warn!(%error, "Rejected mode command"),
            }
        }
        debug!("Command channel closed");
    }
}

// ============================================================================
// BlurSession - Pointer Events
// ============================================================================

impl BlurSession {
    /// Starts a drag selection at `point`.
    ///
    /// No-op outside edit mode, or if a drag is already in progress.
    pub fn pointer_down(&self, point: Point) {
        let mut guard = self.inner.state.lock();
        let state = &mut *guard;

        if !state.mode.is_edit() || state.drag.is_dragging() {
            return;
        }

        state.drag.begin(point);
        state
            .page
            .show_selection_overlay(Rect::from_corners(point, point));
        debug!(x = point.x, y = point.y, "Drag started");
    }

    /// Stretches the drag selection to `point`.
    ///
    /// Resizes the overlay and refreshes the highlight preview to the
    /// elements intersecting the current rectangle. No-op while idle.
    pub fn pointer_move(&self, point: Point) {
        let mut guard = self.inner.state.lock();
        let state = &mut *guard;

        let Some(start) = state.drag.start() else {
            return;
        };

        let rect = Rect::from_corners(start, point);
        state.page.update_selection_overlay(rect);

        let snapshot = state.page.elements();
        let hits = intersect::eligible_in_rect(&snapshot, rect, &self.inner.config.eligible);
        trace!(hits = hits.len(), "Selection pass");

        state.highlight.refresh(
            state.page.as_mut(),
            hits,
            &self.inner.config.highlight_outline,
        );
    }

    /// Finishes the drag at `point`, blurring every intersecting element.
    ///
    /// Removes the overlay, computes the final set from the drag anchor and
    /// the release point, blurs each hit, and clears the highlight preview.
    /// No-op while idle.
    pub fn pointer_up(&self, point: Point) {
        let mut guard = self.inner.state.lock();
        let state = &mut *guard;

        let Some(start) = state.drag.finish() else {
            return;
        };

        state.page.remove_selection_overlay();

        let rect = Rect::from_corners(start, point);
        let snapshot = state.page.elements();
        let hits = intersect::eligible_in_rect(&snapshot, rect, &self.inner.config.eligible);
        debug!(count = hits.len(), "Blurring selected elements");

        let filter = self.inner.config.blur_filter();
        for id in hits {
            state.blur.apply(state.page.as_mut(), id, &filter);
        }

        state.highlight.clear(state.page.as_mut());
    }

    /// Toggles blur on a clicked element.
    ///
    /// No-op outside edit mode, for ineligible tags, and for elements no
    /// longer in the document. Note that in a real page a blurred element
    /// never receives this click in the first place: the marker class
    /// disables its pointer events, and unblurring it requires the mode-off
    /// sweep or a direct [`unblur_element`](Self::unblur_element) call.
    pub fn click(&self, id: ElementId) {
        let mut guard = self.inner.state.lock();
        let state = &mut *guard;

        if !state.mode.is_edit() {
            return;
        }

        let Some(info) = state.page.elements().into_iter().find(|el| el.id == id) else {
            return;
        };
        if !self.inner.config.eligible.contains(&info.tag) {
            return;
        }

        if state.blur.contains(id) {
            state.blur.remove(state.page.as_mut(), id);
        } else {
            let filter = self.inner.config.blur_filter();
            state.blur.apply(state.page.as_mut(), id, &filter);
        }
    }
}

// ============================================================================
// BlurSession - Direct Blur Control
// ============================================================================

impl BlurSession {
    /// Blurs an element directly, regardless of mode or tag eligibility.
    ///
    /// Host-level escape hatch; the drag and click paths are the normal way
    /// in. Returns `false` if the element was already blurred.
    pub fn blur_element(&self, id: ElementId) -> bool {
        let mut guard = self.inner.state.lock();
        let state = &mut *guard;
        let filter = self.inner.config.blur_filter();
        state.blur.apply(state.page.as_mut(), id, &filter)
    }

    /// Unblurs an element directly.
    ///
    /// Returns `false` if the element was not blurred.
    pub fn unblur_element(&self, id: ElementId) -> bool {
        let mut guard = self.inner.state.lock();
        let state = &mut *guard;
        state.blur.remove(state.page.as_mut(), id)
    }
}

// ============================================================================
// BlurSession - Accessors
// ============================================================================

impl BlurSession {
    /// Returns `true` while a drag selection is in progress.
    #[must_use]
    pub fn is_dragging(&self) -> bool {
        self.inner.state.lock().drag.is_dragging()
    }

    /// Tests whether an element is currently blurred.
    #[must_use]
    pub fn is_blurred(&self, id: ElementId) -> bool {
        self.inner.state.lock().blur.contains(id)
    }

    /// Number of currently-blurred elements.
    #[must_use]
    pub fn blurred_len(&self) -> usize {
        self.inner.state.lock().blur.len()
    }

    /// Snapshot of the blurred set, sorted by element ID.
    #[must_use]
    pub fn blurred(&self) -> Vec<ElementId> {
        let mut ids = self.inner.state.lock().blur.ids();
        ids.sort_unstable();
        ids
    }

    /// Number of elements currently highlighted by the drag preview.
    #[must_use]
    pub fn highlighted_len(&self) -> usize {
        self.inner.state.lock().highlight.len()
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    use crate::page::{HIGHLIGHT_OUTLINE, MARKER_CLASS, MemoryPage};

    /// A page with one eligible paragraph and one ineligible div, matching
    /// the canonical drag scenario.
    fn scenario_page() -> (MemoryPage, ElementId, ElementId) {
        let page = MemoryPage::new();
        let paragraph = page.insert("p", Rect::new(20.0, 20.0, 30.0, 30.0));
        let container = page.insert("div", Rect::new(200.0, 200.0, 100.0, 100.0));
        (page, paragraph, container)
    }

    fn drag(session: &BlurSession, from: Point, to: Point) {
        session.pointer_down(from);
        session.pointer_move(to);
        session.pointer_up(to);
    }

    #[test]
    fn test_starts_off_and_idle() {
        let session = BlurSession::new(MemoryPage::new());
        assert_eq!(session.mode(), Mode::Off);
        assert!(!session.is_dragging());
        assert_eq!(session.blurred_len(), 0);
    }

    #[test]
    fn test_drag_blurs_eligible_intersecting_elements() {
        let (page, paragraph, container) = scenario_page();
        let session = BlurSession::new(page.clone());
        session.set_mode(Mode::Edit);

        drag(&session, Point::new(10.0, 10.0), Point::new(100.0, 100.0));

        assert_eq!(session.blurred(), vec![paragraph]);
        assert_eq!(page.style(paragraph, "filter"), "blur(5px)");
        assert!(page.has_class(paragraph, MARKER_CLASS));
        assert!(!session.is_blurred(container));
        assert_eq!(page.style(container, "filter"), "");
    }

    #[test]
    fn test_drag_in_reverse_direction() {
        let (page, paragraph, _) = scenario_page();
        let session = BlurSession::new(page);
        session.set_mode(Mode::Edit);

        drag(&session, Point::new(100.0, 100.0), Point::new(10.0, 10.0));
        assert!(session.is_blurred(paragraph));
    }

    #[test]
    fn test_drag_ignored_outside_edit_mode() {
        let (page, paragraph, _) = scenario_page();
        let session = BlurSession::new(page.clone());

        for mode in [Mode::Off, Mode::On] {
            session.set_mode(mode);
            drag(&session, Point::new(10.0, 10.0), Point::new(100.0, 100.0));
            assert!(!session.is_blurred(paragraph));
            assert_eq!(page.overlay(), None);
        }
    }

    #[test]
    fn test_move_and_up_while_idle_are_noops() {
        let (page, paragraph, _) = scenario_page();
        let session = BlurSession::new(page.clone());
        session.set_mode(Mode::Edit);

        session.pointer_move(Point::new(100.0, 100.0));
        session.pointer_up(Point::new(100.0, 100.0));

        assert_eq!(session.blurred_len(), 0);
        assert_eq!(session.highlighted_len(), 0);
        assert_eq!(page.style(paragraph, "outline"), "");
    }

    #[test]
    fn test_drag_highlights_preview_then_clears() {
        let (page, paragraph, _) = scenario_page();
        let session = BlurSession::new(page.clone());
        session.set_mode(Mode::Edit);

        session.pointer_down(Point::new(10.0, 10.0));
        session.pointer_move(Point::new(100.0, 100.0));

        assert!(session.is_dragging());
        assert_eq!(session.highlighted_len(), 1);
        assert_eq!(page.style(paragraph, "outline"), HIGHLIGHT_OUTLINE);
        assert_eq!(
            page.overlay(),
            Some(Rect::new(10.0, 10.0, 90.0, 90.0))
        );

        // Moving away from the paragraph drops it from the preview.
        session.pointer_move(Point::new(12.0, 12.0));
        assert_eq!(session.highlighted_len(), 0);
        assert_eq!(page.style(paragraph, "outline"), "");

        session.pointer_up(Point::new(100.0, 100.0));
        assert!(!session.is_dragging());
        assert_eq!(session.highlighted_len(), 0);
        assert_eq!(page.overlay(), None);
        assert_eq!(page.style(paragraph, "outline"), "");
        assert!(session.is_blurred(paragraph));
    }

    #[test]
    fn test_click_toggles_blur() {
        let (mut page, paragraph, _) = scenario_page();
        page.set_style(paragraph, "filter", "sepia(0.3)");
        let session = BlurSession::new(page.clone());
        session.set_mode(Mode::Edit);

        session.click(paragraph);
        assert!(session.is_blurred(paragraph));
        assert_eq!(page.style(paragraph, "filter"), "blur(5px)");

        session.click(paragraph);
        assert!(!session.is_blurred(paragraph));
        assert_eq!(page.style(paragraph, "filter"), "sepia(0.3)");
    }

    #[test]
    fn test_click_ignored_outside_edit_and_for_ineligible_tags() {
        let (page, paragraph, container) = scenario_page();
        let session = BlurSession::new(page);

        session.set_mode(Mode::On);
        session.click(paragraph);
        assert!(!session.is_blurred(paragraph));

        session.set_mode(Mode::Edit);
        session.click(container);
        assert!(!session.is_blurred(container));
    }

    #[test]
    fn test_click_on_missing_element_is_noop() {
        let session = BlurSession::new(MemoryPage::new());
        session.set_mode(Mode::Edit);
        session.click(ElementId::new(404));
        assert_eq!(session.blurred_len(), 0);
    }

    #[test]
    fn test_blurred_element_never_receives_click() {
        // The marker class suppresses pointer events, so hit testing walks
        // past a blurred element: its own unblur click can never happen.
        let (page, paragraph, _) = scenario_page();
        let session = BlurSession::new(page.clone());
        session.set_mode(Mode::Edit);

        let hit = page.hit_test(Point::new(30.0, 30.0));
        assert_eq!(hit, Some(paragraph));
        session.click(paragraph);
        assert!(session.is_blurred(paragraph));

        // The host's next dispatch at the same point misses the element,
        // so membership is unchanged.
        assert_eq!(page.hit_test(Point::new(30.0, 30.0)), None);
        assert!(session.is_blurred(paragraph));
    }

    #[test]
    fn test_mode_edit_sets_cursor_and_text_selection() {
        let (page, _, _) = scenario_page();
        let session = BlurSession::new(page.clone());

        session.set_mode(Mode::Edit);
        assert_eq!(page.cursor(), Cursor::Crosshair);
        assert!(!page.text_selection_enabled());

        session.set_mode(Mode::On);
        assert_eq!(page.cursor(), Cursor::Default);
        assert!(page.text_selection_enabled());
    }

    #[test]
    fn test_mode_off_always_empties_blurred_set() {
        let (mut page, paragraph, _) = scenario_page();
        page.set_style(paragraph, "filter", "invert(1)");
        let session = BlurSession::new(page.clone());

        session.set_mode(Mode::Edit);
        drag(&session, Point::new(10.0, 10.0), Point::new(100.0, 100.0));
        assert_eq!(session.blurred_len(), 1);

        session.set_mode(Mode::Off);
        assert_eq!(session.blurred_len(), 0);
        assert_eq!(page.style(paragraph, "filter"), "invert(1)");
        assert!(!page.has_class(paragraph, MARKER_CLASS));

        // Off again with nothing blurred stays empty.
        session.set_mode(Mode::Off);
        assert_eq!(session.blurred_len(), 0);
    }

    #[test]
    fn test_off_to_on_reapplies_without_changing_membership() {
        let (page, paragraph, container) = scenario_page();
        let session = BlurSession::new(page.clone());

        // Populate the blurred set directly, bypassing apply, while off.
        {
            let mut guard = session.inner.state.lock();
            guard.blur.insert_raw(paragraph, "");
            guard.blur.insert_raw(container, "grayscale(1)");
        }
        assert_eq!(session.blurred_len(), 2);

        session.set_mode(Mode::On);

        assert_eq!(session.blurred(), vec![paragraph, container]);
        assert_eq!(page.style(paragraph, "filter"), "blur(5px)");
        assert_eq!(page.style(container, "filter"), "blur(5px)");
        assert!(page.has_class(paragraph, MARKER_CLASS));
        assert!(page.has_class(container, MARKER_CLASS));

        // Sidecars were untouched by the sweep.
        session.unblur_element(container);
        assert_eq!(page.style(container, "filter"), "grayscale(1)");
    }

    #[test]
    fn test_leaving_edit_cancels_inflight_drag() {
        let (page, paragraph, _) = scenario_page();
        let session = BlurSession::new(page.clone());
        session.set_mode(Mode::Edit);

        session.pointer_down(Point::new(10.0, 10.0));
        session.pointer_move(Point::new(100.0, 100.0));
        assert_eq!(session.highlighted_len(), 1);

        session.set_mode(Mode::On);

        assert!(!session.is_dragging());
        assert_eq!(session.highlighted_len(), 0);
        assert_eq!(page.overlay(), None);
        assert_eq!(page.style(paragraph, "outline"), "");
        // Nothing was blurred by the cancelled drag.
        assert_eq!(session.blurred_len(), 0);

        // The pointer-up that eventually arrives is a no-op.
        session.pointer_up(Point::new(100.0, 100.0));
        assert_eq!(session.blurred_len(), 0);
    }

    #[test]
    fn test_direct_blur_and_unblur() {
        let (page, paragraph, _) = scenario_page();
        let session = BlurSession::new(page.clone());

        assert!(session.blur_element(paragraph));
        assert!(!session.blur_element(paragraph));
        assert_eq!(page.style(paragraph, "filter"), "blur(5px)");

        assert!(session.unblur_element(paragraph));
        assert!(!session.unblur_element(paragraph));
        assert_eq!(page.style(paragraph, "filter"), "");
    }

    #[test]
    fn test_custom_configuration() {
        let page = MemoryPage::new();
        let heading = page.insert("h1", Rect::new(0.0, 0.0, 50.0, 20.0));
        let image = page.insert("img", Rect::new(0.0, 30.0, 50.0, 50.0));

        let session = BlurSession::builder()
            .eligible_tags(["img"].into_iter().collect())
            .blur_px(10.0)
            .build(page.clone())
            .expect("valid config");
        session.set_mode(Mode::Edit);

        drag(&session, Point::new(-10.0, -10.0), Point::new(100.0, 100.0));

        assert!(!session.is_blurred(heading));
        assert!(session.is_blurred(image));
        assert_eq!(page.style(image, "filter"), "blur(10px)");
    }

    #[test]
    fn test_handle_message_applies_mode() {
        let (page, _, _) = scenario_page();
        let session = BlurSession::new(page);

        let mode = session
            .handle_message(r#"{"action": "setMode", "mode": "edit"}"#)
            .expect("valid command");
        assert_eq!(mode, Mode::Edit);
        assert_eq!(session.mode(), Mode::Edit);
    }

    #[test]
    fn test_handle_message_rejects_bad_payloads_untouched() {
        let session = BlurSession::new(MemoryPage::new());
        session.set_mode(Mode::On);

        assert!(session.handle_message("{broken").is_err());
        assert!(
            session
                .handle_message(r#"{"action": "setMode", "mode": "paused"}"#)
                .is_err()
        );
        assert!(
            session
                .handle_message(r#"{"action": "reset", "mode": "off"}"#)
                .is_err()
        );
        assert_eq!(session.mode(), Mode::On);
    }

    #[tokio::test]
    async fn test_listen_drains_command_channel() {
        let page = MemoryPage::new();
        let session = BlurSession::new(page.clone());

        let (tx, rx) = mpsc::channel(8);
        let listener = {
            let session = session.clone();
            tokio::spawn(async move { session.listen(rx).await })
        };

        let payload = ModeCommand::set_mode(Mode::Edit).to_json().expect("encode");
        tx.send(payload).await.expect("send");
        tx.send("not a command".to_string()).await.expect("send");
        drop(tx);

        listener.await.expect("listener task");
        assert_eq!(session.mode(), Mode::Edit);
        assert_eq!(page.cursor(), Cursor::Crosshair);
    }
}
