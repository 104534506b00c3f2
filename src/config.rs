//! Session configuration: the eligible-tag allow-list and visual tuning.
//!
//! Which element types can be blurred is host-tunable rather than a
//! hardcoded constant; [`EligibleTags::standard`] provides the stock set of
//! content-bearing tags.

// ============================================================================
// Imports
// ============================================================================

use rustc_hash::FxHashSet;

// ============================================================================
// Constants
// ============================================================================

/// The stock allow-list of blurrable tags: text, media, and inline content
/// elements. Structural containers (`div`, `section`, ...) are not in the
/// set.
pub const STANDARD_TAGS: &[&str] = &[
    "P", "IMG", "VIDEO", "IFRAME", "CANVAS", "SVG", "FIGURE", "PICTURE", "AUDIO", "H1", "H2",
    "H3", "H4", "H5", "H6", "BLOCKQUOTE", "PRE", "CODE", "TABLE", "UL", "OL", "LI", "A", "SPAN",
    "STRONG", "EM", "B", "I", "U", "SMALL", "BUTTON",
];

/// Default blur radius in pixels.
pub const DEFAULT_BLUR_PX: f64 = 5.0;

// ============================================================================
// EligibleTags
// ============================================================================

/// The set of element tag names allowed to be blurred or highlighted.
///
/// Membership checks are ASCII-case-insensitive; tags are stored uppercase,
/// the DOM `tagName` convention.
///
/// # Example
///
/// ```
/// use region_blur::EligibleTags;
///
/// let tags = EligibleTags::standard();
/// assert!(tags.contains("img"));
/// assert!(tags.contains("IMG"));
/// assert!(!tags.contains("div"));
///
/// let custom: EligibleTags = ["article", "img"].into_iter().collect();
/// assert!(custom.contains("ARTICLE"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EligibleTags {
    tags: FxHashSet<String>,
}

impl EligibleTags {
    /// Creates the standard allow-list ([`STANDARD_TAGS`]).
    #[must_use]
    pub fn standard() -> Self {
        STANDARD_TAGS.iter().copied().collect()
    }

    /// Creates an empty allow-list.
    ///
    /// With no eligible tags, drags and clicks never match anything.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            tags: FxHashSet::default(),
        }
    }

    /// Adds a tag to the allow-list.
    pub fn insert(&mut self, tag: &str) {
        self.tags.insert(tag.to_ascii_uppercase());
    }

    /// Removes a tag from the allow-list.
    pub fn remove(&mut self, tag: &str) {
        self.tags.remove(&tag.to_ascii_uppercase());
    }

    /// Tests whether a tag is eligible, ignoring ASCII case.
    #[must_use]
    pub fn contains(&self, tag: &str) -> bool {
        self.tags.contains(&tag.to_ascii_uppercase())
    }

    /// Number of eligible tags.
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.tags.len()
    }

    /// Returns `true` if no tags are eligible.
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tags.is_empty()
    }
}

impl Default for EligibleTags {
    /// The standard allow-list.
    fn default() -> Self {
        Self::standard()
    }
}

impl<'a> FromIterator<&'a str> for EligibleTags {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        Self {
            tags: iter
                .into_iter()
                .map(|tag| tag.to_ascii_uppercase())
                .collect(),
        }
    }
}

// ============================================================================
// SessionConfig
// ============================================================================

/// Resolved configuration for a blur session.
///
/// Built through [`SessionBuilder`](crate::session::SessionBuilder); the
/// defaults reproduce the stock visual treatment.
#[derive(Debug, Clone, PartialEq)]
pub struct SessionConfig {
    /// Tags allowed to be blurred/highlighted.
    pub eligible: EligibleTags,

    /// Blur radius in pixels applied to selected elements.
    pub blur_px: f64,

    /// Outline applied to elements while previewed during a drag.
    pub highlight_outline: String,
}

impl SessionConfig {
    /// The CSS filter value applied to blurred elements.
    #[must_use]
    pub fn blur_filter(&self) -> String {
        format!("blur({}px)", self.blur_px)
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            eligible: EligibleTags::standard(),
            blur_px: DEFAULT_BLUR_PX,
            highlight_outline: crate::page::HIGHLIGHT_OUTLINE.to_string(),
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
