//! Feedback category presentation and grouping.
//!
//! The category value is an open string on the wire: `bug` and `idea`
//! carry their own presentation, everything else (including a missing
//! value) resolves to the default entry. Digest grouping follows the
//! same rule, so a record can never fall between the two views.

/// Category key for bug reports.
pub const CATEGORY_BUG: &str = "bug";

/// Category key for feature ideas.
pub const CATEGORY_IDEA: &str = "idea";

/// Fallback category key for everything else.
pub const CATEGORY_OTHER: &str = "other";

// ---------------------------------------------------------------------------
// CategoryStyle
// ---------------------------------------------------------------------------

/// Presentation entry for one feedback category.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CategoryStyle {
    /// Category key this entry applies to.
    pub key: &'static str,
    /// Emoji used in subjects and digest headings.
    pub emoji: &'static str,
    /// Title for the instant notification subject and heading.
    pub title: &'static str,
    /// Section label for the digest heading.
    pub section: &'static str,
    /// Accent color (CSS hex) for the email markup.
    pub accent: &'static str,
}

/// Entries for the recognized categories. Order is the digest section order.
pub const CATEGORY_STYLES: &[CategoryStyle] = &[
    CategoryStyle {
        key: CATEGORY_BUG,
        emoji: "\u{1F6A8}",
        title: "New Bug Report!",
        section: "Bugs",
        accent: "#e74c3c",
    },
    CategoryStyle {
        key: CATEGORY_IDEA,
        emoji: "\u{1F4A1}",
        title: "New Idea Received!",
        section: "Ideas",
        accent: "#f1c40f",
    },
];

/// Default entry for unrecognized or missing category values.
pub const DEFAULT_STYLE: CategoryStyle = CategoryStyle {
    key: CATEGORY_OTHER,
    emoji: "\u{1F4E2}",
    title: "New Message",
    section: "Other",
    accent: "#333",
};

/// Look up the presentation entry for a category value.
///
/// Never fails: unrecognized or missing values resolve to
/// [`DEFAULT_STYLE`].
pub fn style_for(kind: Option<&str>) -> &'static CategoryStyle {
    kind.and_then(|k| CATEGORY_STYLES.iter().find(|s| s.key == k))
        .unwrap_or(&DEFAULT_STYLE)
}

/// Normalize a category value to its digest grouping key.
///
/// `bug` and `idea` keep their own group; every other value merges into
/// `other`.
pub fn group_key(kind: &str) -> &'static str {
    match kind {
        CATEGORY_BUG => CATEGORY_BUG,
        CATEGORY_IDEA => CATEGORY_IDEA,
        _ => CATEGORY_OTHER,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
