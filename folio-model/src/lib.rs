//! Portfolio entry model for folio.
//!
//! This crate defines the immutable data every other folio crate reads:
//! - [`Entry`]: one catalog item (project or lab) with optional media, sections and links
//! - [`Slug`]: the unique, stable identifier of an entry
//! - [`Media`], [`GalleryItem`], [`GalleryMode`]: hero image, screenshots and video ids
//! - [`Sections`], [`Links`]: free-form detail content and outbound links
//!
//! Optional fields are plain `Option`/`Vec` values on the wire. Whether a field
//! is *present* for rendering is decided in one place, the [`present`] module,
//! and surfaced through accessor methods such as [`Sections::problem`].

mod content;
mod entry;
mod media;
pub mod present;
mod slug;

pub use content::{Links, Sections};
pub use entry::{Entry, EntryKind, Status};
pub use media::{GalleryItem, GalleryMode, Media, DEFAULT_SCREENSHOT_ALT};
pub use slug::Slug;

/// Result type alias using the crate's error type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur while building model values.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("invalid slug: {0:?}")]
    InvalidSlug(String),

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}
