//! YouTube URL normalization.
//!
//! Accepts:
//! - `https://youtu.be/VIDEOID`
//! - `https://www.youtube.com/watch?v=VIDEOID`
//! - `https://youtube.com/shorts/VIDEOID`
//! - `https://www.youtube.com/embed/VIDEOID`
//! - any URL carrying a `list=PLAYLISTID` query parameter (playlists)
//!
//! All functions are total: unparsable or unrecognized input yields `None`.

use url::Url;

/// Base of every single-video embed URL.
pub const EMBED_BASE: &str = "https://www.youtube.com/embed/";

/// Base of every playlist embed URL; the playlist id is appended.
pub const PLAYLIST_EMBED_BASE: &str = "https://www.youtube.com/embed/videoseries?list=";

/// Extracts a video id from a YouTube URL.
pub fn parse_video_id(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;

    if url.host_str().is_some_and(|host| host.contains("youtu.be")) {
        return url
            .path_segments()?
            .find(|segment| !segment.is_empty())
            .map(str::to_owned);
    }

    let path = url.path();
    if path == "/watch" {
        return query_param(&url, "v");
    }
    if let Some(rest) = path.strip_prefix("/shorts/") {
        return leading_segment(rest);
    }
    if let Some(rest) = path.strip_prefix("/embed/") {
        return leading_segment(rest);
    }
    None
}

/// Extracts the `list` query parameter from a URL.
pub fn parse_playlist_id(input: &str) -> Option<String> {
    let url = Url::parse(input).ok()?;
    query_param(&url, "list")
}

/// Embed URL for a single video id.
pub fn video_embed_url(id: &str) -> String {
    format!("{EMBED_BASE}{id}")
}

/// Embed URL for a playlist id.
pub fn playlist_embed_url(id: &str) -> String {
    format!("{PLAYLIST_EMBED_BASE}{id}")
}

/// Resolves an arbitrary video URL to an embed target.
///
/// A playlist parameter wins over a video id. `None` means the caller should
/// fall back to a plain link.
pub fn embed_url_for(input: &str) -> Option<String> {
    if let Some(list) = parse_playlist_id(input) {
        return Some(playlist_embed_url(&list));
    }
    parse_video_id(input).map(|id| video_embed_url(&id))
}

fn query_param(url: &Url, key: &str) -> Option<String> {
    url.query_pairs()
        .find(|(k, _)| k == key)
        .map(|(_, v)| v.into_owned())
        .filter(|v| !v.is_empty())
}

fn leading_segment(rest: &str) -> Option<String> {
    rest.split('/')
        .next()
        .filter(|segment| !segment.is_empty())
        .map(str::to_owned)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn embed_path_with_trailing_segments() {
        assert_eq!(
            parse_video_id("https://www.youtube.com/embed/abc/extra"),
            Some("abc".to_string())
        );
    }

    #[test]
    fn empty_shorts_segment_is_none() {
        assert_eq!(parse_video_id("https://youtube.com/shorts/"), None);
    }

    #[test]
    fn empty_v_param_is_none() {
        assert_eq!(parse_video_id("https://www.youtube.com/watch?v="), None);
    }

    #[test]
    fn youtu_be_skips_empty_segments() {
        assert_eq!(
            parse_video_id("https://youtu.be//abc123"),
            Some("abc123".to_string())
        );
        assert_eq!(parse_video_id("https://youtu.be/"), None);
    }
}
