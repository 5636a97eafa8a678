//! Decides which media blocks apply to an entry and how they are shown.

use folio_model::{GalleryItem, GalleryMode, Media};
use serde::Serialize;

use crate::carousel::Carousel;
use crate::url::{playlist_embed_url, video_embed_url};

/// Label for a carousel whose owner doesn't supply one.
pub const DEFAULT_CAROUSEL_LABEL: &str = "Image carousel";

/// How an image is fitted into its frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Fit {
    /// Letterboxed to the native aspect ratio, never cropped.
    Contain,
    /// Fills the frame, cropping overflow.
    Cover,
}

/// A resolved image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Image {
    pub src: String,
    pub alt: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub caption: Option<String>,
    pub fit: Fit,
}

impl Image {
    fn contained(item: &GalleryItem) -> Self {
        Self {
            src: item.src.clone(),
            alt: item.alt().to_string(),
            caption: item.caption().map(str::to_owned),
            fit: Fit::Contain,
        }
    }
}

/// A resolved gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum Gallery {
    /// Every image shown, in declared order.
    Grid { images: Vec<Image> },
    /// One slide visible at a time under `controller`.
    Carousel {
        label: String,
        slides: Vec<Image>,
        controller: Carousel,
    },
}

impl Gallery {
    /// Images that are currently visible: all of them for a grid, the
    /// controller's slide for a carousel.
    pub fn visible(&self) -> Vec<&Image> {
        match self {
            Self::Grid { images } => images.iter().collect(),
            Self::Carousel {
                slides, controller, ..
            } => controller
                .index()
                .and_then(|i| slides.get(i))
                .into_iter()
                .collect(),
        }
    }
}

/// A resolved video player target.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct VideoEmbed {
    pub src: String,
    pub title: String,
}

/// Everything media-related an entry renders.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ResolvedMedia {
    pub hero: Option<Image>,
    pub gallery: Option<Gallery>,
    pub video: Option<VideoEmbed>,
}

/// Resolves all media of an entry titled `title`.
pub fn resolve_media(title: &str, media: Option<&Media>) -> ResolvedMedia {
    let Some(media) = media else {
        return ResolvedMedia::default();
    };
    ResolvedMedia {
        hero: resolve_hero(title, media),
        gallery: resolve_gallery(title, media),
        video: resolve_video(title, media),
    }
}

pub fn resolve_hero(title: &str, media: &Media) -> Option<Image> {
    media.hero_image().map(|src| Image {
        src: src.to_string(),
        alt: format!("{title} hero"),
        caption: None,
        fit: Fit::Contain,
    })
}

/// Grid by default; a carousel gets a controller sized to the gallery.
pub fn resolve_gallery(title: &str, media: &Media) -> Option<Gallery> {
    let items = media.gallery()?;
    let images: Vec<Image> = items.iter().map(Image::contained).collect();
    Some(match media.gallery_mode {
        GalleryMode::Grid => Gallery::Grid { images },
        GalleryMode::Carousel => Gallery::Carousel {
            label: carousel_label(title),
            controller: Carousel::new(images.len()),
            slides: images,
        },
    })
}

/// Playlist embed if a playlist id is present, otherwise the single-video
/// embed unless the id is absent or the placeholder sentinel.
pub fn resolve_video_embed_url(media: &Media) -> Option<String> {
    if let Some(list) = media.youtube_playlist_id() {
        return Some(playlist_embed_url(list));
    }
    media.youtube_id().map(video_embed_url)
}

pub fn resolve_video(title: &str, media: &Media) -> Option<VideoEmbed> {
    resolve_video_embed_url(media).map(|src| VideoEmbed {
        src,
        title: format!("{title} video"),
    })
}

fn carousel_label(title: &str) -> String {
    if title.trim().is_empty() {
        DEFAULT_CAROUSEL_LABEL.to_string()
    } else {
        format!("{title} screenshots")
    }
}
