use folio_model::{
    Entry, EntryKind, GalleryItem, GalleryMode, Links, Media, Sections, Slug, Status,
    DEFAULT_SCREENSHOT_ALT,
};
use pretty_assertions::assert_eq;

fn slug(s: &str) -> Slug {
    Slug::parse(s).unwrap()
}

// ── JSON shape ───────────────────────────────────────────────────

#[test]
fn parses_full_project_entry() {
    let e = Entry::from_json(
        r#"{
            "slug": "easy-garden",
            "title": "Easy Garden",
            "subtitle": "Accessible raised garden",
            "tech": ["Arduino", "Sensors"],
            "status": "Featured",
            "highlights": ["a", "b"],
            "media": {
                "heroImage": "/projects/easy-garden/hero.png",
                "gallery": ["/g/1.png", {"src": "/g/2.png", "caption": "Side view"}],
                "galleryMode": "carousel",
                "youtubePlaylistId": "PLabc"
            },
            "sections": {
                "problem": "Bending is hard.",
                "whatILearned": ["HCD"],
                "futureWork": ["Pump"]
            },
            "links": {"report": "/reports/easy-garden.pdf"}
        }"#,
    )
    .unwrap();

    assert_eq!(e.kind, EntryKind::Project);
    assert_eq!(e.slug, slug("easy-garden"));
    assert_eq!(e.status, Some(Status::Featured));
    assert_eq!(e.tech, vec!["Arduino", "Sensors"]);

    let media = e.media.as_ref().unwrap();
    assert_eq!(media.gallery_mode, GalleryMode::Carousel);
    assert_eq!(
        media.gallery,
        vec![
            GalleryItem::new("/g/1.png"),
            GalleryItem {
                src: "/g/2.png".into(),
                alt: None,
                caption: Some("Side view".into()),
            },
        ]
    );
    assert_eq!(media.youtube_playlist_id(), Some("PLabc"));

    let sections = e.sections.as_ref().unwrap();
    assert_eq!(sections.what_i_learned, vec!["HCD"]);
    assert_eq!(sections.future_work, vec!["Pump"]);
    assert!(sections.approach().is_none());
}

#[test]
fn gallery_mode_defaults_to_grid() {
    let media: Media = serde_json::from_str(r#"{"gallery": ["/a.png"]}"#).unwrap();
    assert_eq!(media.gallery_mode, GalleryMode::Grid);
}

#[test]
fn status_in_progress_uses_spaced_name() {
    let s: Status = serde_json::from_str("\"In Progress\"").unwrap();
    assert_eq!(s, Status::InProgress);
    assert_eq!(s.to_string(), "In Progress");
}

#[test]
fn lab_fields_accept_area_and_repo() {
    let e = Entry::from_json(
        r#"{
            "slug": "dsa-coursework",
            "title": "DSA",
            "area": "Coursework",
            "links": {"repo": "https://github.com/x/y"}
        }"#,
    )
    .unwrap();
    assert_eq!(e.category(), Some("Coursework"));
    assert_eq!(e.links.unwrap().github(), Some("https://github.com/x/y"));
}

#[test]
fn kind_is_not_read_from_json() {
    let e = Entry::from_json(r#"{"slug": "x", "title": "X", "kind": "lab"}"#).unwrap();
    assert_eq!(e.kind, EntryKind::Project);
}

#[test]
fn invalid_slug_is_rejected() {
    assert!(Entry::from_json(r#"{"slug": "", "title": "X"}"#).is_err());
}

// ── Presence accessors ───────────────────────────────────────────

#[test]
fn whitespace_problem_is_absent() {
    let sections = Sections {
        problem: Some("   ".into()),
        ..Sections::default()
    };
    assert_eq!(sections.problem(), None);
}

#[test]
fn placeholder_video_id_is_absent() {
    let media = Media {
        youtube_id: Some("PASTE_YOUR_YOUTUBE_ID_HERE".into()),
        ..Media::default()
    };
    assert_eq!(media.youtube_id(), None);
    assert!(media.has_placeholder_video_id());
}

#[test]
fn hash_github_link_is_absent() {
    let links = Links {
        github: Some("#".into()),
        ..Links::default()
    };
    assert_eq!(links.github(), None);
    assert!(!links.any());
}

#[test]
fn gallery_item_alt_falls_back() {
    let item = GalleryItem::new("/a.png");
    assert_eq!(item.alt(), DEFAULT_SCREENSHOT_ALT);
    assert_eq!(item.caption(), None);
}

// ── Routes ───────────────────────────────────────────────────────

#[test]
fn detail_href_uses_kind_prefix() {
    let project = Entry::new(EntryKind::Project, slug("drone"), "Drone");
    let lab = Entry::new(EntryKind::Lab, slug("digital-logic-labs"), "Digital Logic");
    assert_eq!(project.detail_href(), "/projects/drone");
    assert_eq!(lab.detail_href(), "/labs/digital-logic-labs");
}
