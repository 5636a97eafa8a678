use serde::{Deserialize, Serialize};

use crate::present;

/// Alt text used for gallery images that don't specify their own.
pub const DEFAULT_SCREENSHOT_ALT: &str = "Project screenshot";

/// How an entry's gallery is laid out.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GalleryMode {
    /// Every image rendered independently, in order.
    #[default]
    Grid,
    /// One image visible at a time with cyclic navigation.
    Carousel,
}

/// Media attached to an entry.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Media {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hero_image: Option<String>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub gallery: Vec<GalleryItem>,
    #[serde(default)]
    pub gallery_mode: GalleryMode,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub youtube_playlist_id: Option<String>,
}

impl Media {
    /// Hero image path, if present.
    pub fn hero_image(&self) -> Option<&str> {
        present::text(self.hero_image.as_deref())
    }

    /// Gallery items, if there is at least one.
    pub fn gallery(&self) -> Option<&[GalleryItem]> {
        present::list(&self.gallery)
    }

    /// Single video id, if present and not the placeholder sentinel.
    pub fn youtube_id(&self) -> Option<&str> {
        present::text_except(self.youtube_id.as_deref(), present::VIDEO_ID_PLACEHOLDER)
    }

    /// Playlist id, if present.
    pub fn youtube_playlist_id(&self) -> Option<&str> {
        present::text(self.youtube_playlist_id.as_deref())
    }

    /// True when the raw video id is the placeholder sentinel.
    pub fn has_placeholder_video_id(&self) -> bool {
        self.youtube_id.as_deref() == Some(present::VIDEO_ID_PLACEHOLDER)
    }
}

/// One gallery image.
///
/// Accepts either a bare path (`"/img/a.png"`) or an object with optional
/// alt text and caption.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "GalleryItemRepr")]
pub struct GalleryItem {
    pub src: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
}

impl GalleryItem {
    /// Creates an item with only a source path.
    pub fn new(src: impl Into<String>) -> Self {
        Self {
            src: src.into(),
            alt: None,
            caption: None,
        }
    }

    /// Alt text, falling back to [`DEFAULT_SCREENSHOT_ALT`].
    pub fn alt(&self) -> &str {
        present::text(self.alt.as_deref()).unwrap_or(DEFAULT_SCREENSHOT_ALT)
    }

    /// Caption, if present.
    pub fn caption(&self) -> Option<&str> {
        present::text(self.caption.as_deref())
    }
}

impl From<&str> for GalleryItem {
    fn from(src: &str) -> Self {
        Self::new(src)
    }
}

#[derive(Deserialize)]
#[serde(untagged)]
enum GalleryItemRepr {
    Path(String),
    Full {
        src: String,
        #[serde(default)]
        alt: Option<String>,
        #[serde(default)]
        caption: Option<String>,
    },
}

impl From<GalleryItemRepr> for GalleryItem {
    fn from(repr: GalleryItemRepr) -> Self {
        match repr {
            GalleryItemRepr::Path(src) => Self::new(src),
            GalleryItemRepr::Full { src, alt, caption } => Self { src, alt, caption },
        }
    }
}
