//! Region Blur - rectangle-selection blur engine for web page content.
//!
//! This library implements the page-side core of a "blur what I select"
//! tool: the user drags rectangles over a page and every eligible element
//! inside them is blurred, with a three-state mode switch driving the
//! interaction.
//!
//! # Architecture
//!
//! The crate is the brains of a content script; the host (a WebExtension
//! content layer, a WebView shell, a test harness) owns the real document
//! and the event sources:
//!
//! - **Core (this crate)**: mode machine, drag tracking, rectangle/element
//!   intersection, blur + highlight bookkeeping with exact style restore
//! - **Host**: implements [`PageDom`], forwards pointer/click events and
//!   mode commands, installs the [`page::marker_style_rules`] CSS
//!
//! Key design principles:
//!
//! - One [`BlurSession`] per page context, always starting in [`Mode::Off`]
//! - The core never holds element references; everything is keyed by
//!   host-issued [`ElementId`]s
//! - Original style values are saved before the first mutation and restored
//!   exactly, so toggling never destroys page-authored styles
//! - Every entry point runs to completion under the session lock
//!
//! # Quick Start
//!
//! ```
//! use region_blur::{BlurSession, MemoryPage, Mode, PageDom, Point, Rect};
//!
//! // In production the host implements PageDom over the live document;
//! // MemoryPage is the bundled in-memory implementation.
//! let page = MemoryPage::new();
//! let photo = page.insert("img", Rect::new(20.0, 20.0, 30.0, 30.0));
//!
//! let session = BlurSession::new(page.clone());
//! session.set_mode(Mode::Edit);
//!
//! session.pointer_down(Point::new(10.0, 10.0));
//! session.pointer_move(Point::new(100.0, 100.0));
//! session.pointer_up(Point::new(100.0, 100.0));
//!
//! assert!(session.is_blurred(photo));
//! assert_eq!(page.style(photo, "filter"), "blur(5px)");
//!
//! // Switching off restores the page exactly.
//! session.set_mode(Mode::Off);
//! assert_eq!(page.style(photo, "filter"), "");
//! ```
//!
//! # Modules
//!
//! | Module | Description |
//! |--------|-------------|
//! | [`session`] | [`BlurSession`] controller and its registries |
//! | [`page`] | Host bridge: [`PageDom`], [`MemoryPage`], CSS contracts |
//! | [`geometry`] | Viewport points, rectangles, strict overlap |
//! | [`config`] | Eligible-tag allow-list and visual tuning |
//! | [`protocol`] | Inbound mode-command messages |
//! | [`mode`] | The off/on/edit mode switch |
//! | [`error`] | Error types and [`Result`] alias |
//! | [`identifiers`] | Type-safe ID wrappers |

// ============================================================================
// Modules
// ============================================================================

/// Eligible-tag allow-list and session configuration.
pub mod config;

/// Error types and result aliases.
///
/// All fallible operations return [`Result<T>`] which uses [`Error`].
pub mod error;

/// Viewport geometry: points, rectangles, overlap testing.
pub mod geometry;

/// Type-safe identifiers for page entities.
pub mod identifiers;

/// Session interaction mode.
pub mod mode;

/// The page bridge: how the core reaches the host's DOM.
pub mod page;

/// Inbound command message types.
pub mod protocol;

/// The blur session controller.
pub mod session;

// ============================================================================
// Re-exports
// ============================================================================

// Session types
pub use session::{BlurSession, SessionBuilder};

// Page types
pub use page::{Cursor, ElementInfo, MARKER_CLASS, MemoryPage, PageDom};

// Core data types
pub use config::{EligibleTags, SessionConfig};
pub use geometry::{Point, Rect};
pub use mode::Mode;

// Protocol types
pub use protocol::ModeCommand;

// Error types
pub use error::{Error, Result};

// Identifier types
pub use identifiers::ElementId;
