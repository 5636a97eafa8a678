//! Media resolution for folio.
//!
//! - [`url`]: normalizes external YouTube URLs into video and playlist ids
//! - [`Carousel`]: cyclic single-slide navigation state
//! - [`KeySignal`]: directional keyboard input with scoped subscriptions
//! - [`resolve_media`]: decides which hero, gallery and video blocks an entry gets
//!
//! Everything here is synchronous and performs no I/O. Media loading belongs
//! to whatever consumes the resolved values.

mod carousel;
mod keys;
mod resolver;
pub mod url;

pub use carousel::{Carousel, Indicator, MountedCarousel};
pub use keys::{Key, KeySignal, KeySubscription};
pub use resolver::{
    DEFAULT_CAROUSEL_LABEL, Fit, Gallery, Image, ResolvedMedia, VideoEmbed, resolve_gallery,
    resolve_hero, resolve_media, resolve_video, resolve_video_embed_url,
};
