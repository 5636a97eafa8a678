//! Presence rules shared by every renderer.
//!
//! A string field is present only if it is non-empty after trimming; a list
//! field is present only if it has at least one element. Two placeholder
//! values inherited from the catalog data also count as absent.

/// Placeholder written in place of a real YouTube video id.
pub const VIDEO_ID_PLACEHOLDER: &str = "PASTE_YOUR_YOUTUBE_ID_HERE";

/// Placeholder written in place of a real repository link.
pub const LINK_PLACEHOLDER: &str = "#";

/// Returns the value unchanged if it has non-whitespace content.
#[must_use]
pub fn text(value: Option<&str>) -> Option<&str> {
    value.filter(|v| !v.trim().is_empty())
}

/// Returns the slice if it holds at least one element.
#[must_use]
pub fn list<T>(items: &[T]) -> Option<&[T]> {
    if items.is_empty() { None } else { Some(items) }
}

/// Like [`text`], but also treats an exact `placeholder` match as absent.
#[must_use]
pub fn text_except<'a>(value: Option<&'a str>, placeholder: &str) -> Option<&'a str> {
    text(value).filter(|v| *v != placeholder)
}
