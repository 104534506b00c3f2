//! Builder pattern for session configuration.
//!
//! Provides a fluent API for configuring and creating
//! [`BlurSession`](crate::session::BlurSession) instances.
//!
//! # Example
//!
//! ```
//! use region_blur::{EligibleTags, MemoryPage, SessionBuilder};
//!
//! # fn example() -> region_blur::Result<()> {
//! let session = SessionBuilder::new()
//!     .eligible_tags(["img", "video", "canvas"].into_iter().collect::<EligibleTags>())
//!     .blur_px(8.0)
//!     .build(MemoryPage::new())?;
//! # Ok(())
//! # }
//! ```

// ============================================================================
// Imports
// ============================================================================

use crate::config::{EligibleTags, SessionConfig};
use crate::error::{Error, Result};
use crate::page::PageDom;

use super::BlurSession;

// ============================================================================
// SessionBuilder
// ============================================================================

/// Builder for configuring a [`BlurSession`].
#[derive(Debug, Default, Clone)]
pub struct SessionBuilder {
    /// Eligible tag override.
    eligible: Option<EligibleTags>,
    /// Blur radius override, in pixels.
    blur_px: Option<f64>,
    /// Highlight outline override.
    highlight_outline: Option<String>,
}

// ============================================================================
// SessionBuilder Implementation
// ============================================================================

impl SessionBuilder {
    /// Creates a new builder with the stock configuration.
    #[inline]
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the tags allowed to be blurred/highlighted.
    ///
    /// Defaults to [`EligibleTags::standard`].
    #[inline]
    #[must_use]
    pub fn eligible_tags(mut self, tags: EligibleTags) -> Self {
        self.eligible = Some(tags);
        self
    }

    /// Sets the blur radius in pixels. Defaults to 5.
    #[inline]
    #[must_use]
    pub fn blur_px(mut self, px: f64) -> Self {
        self.blur_px = Some(px);
        self
    }

    /// Sets the outline applied to drag-preview highlights.
    ///
    /// Defaults to [`HIGHLIGHT_OUTLINE`](crate::page::HIGHLIGHT_OUTLINE).
    #[inline]
    #[must_use]
    pub fn highlight_outline(mut self, outline: impl Into<String>) -> Self {
        self.highlight_outline = Some(outline.into());
        self
    }

    /// Builds a session over the given page with validation.
    ///
    /// # Errors
    ///
    /// [`Error::Config`] if the blur radius is not a positive finite number
    /// or the highlight outline is empty.
    pub fn build<P>(self, page: P) -> Result<BlurSession>
    where
        P: PageDom + Send + 'static,
    {
        let config = self.into_config()?;
        Ok(BlurSession::with_config(page, config))
    }

    /// Resolves and validates the configuration.
    fn into_config(self) -> Result<SessionConfig> {
        let defaults = SessionConfig::default();

        let blur_px = self.blur_px.unwrap_or(defaults.blur_px);
        if !blur_px.is_finite() || blur_px <= 0.0 {
            return Err(Error::config(format!(
                "Blur radius must be a positive number of pixels, got {blur_px}"
            )));
        }

        let highlight_outline = self
            .highlight_outline
            .unwrap_or(defaults.highlight_outline);
        if highlight_outline.is_empty() {
            return Err(Error::config(
                "Highlight outline must be a non-empty CSS outline value",
            ));
        }

        Ok(SessionConfig {
            eligible: self.eligible.unwrap_or(defaults.eligible),
            blur_px,
            highlight_outline,
        })
    }
}

// ============================================================================
// Tests
// ============================================================================
