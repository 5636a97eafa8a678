use std::io::Write;

use clap::Parser;
use folio_cli::{Args, replay_carousel, run};
use folio_model::{Entry, EntryKind, GalleryItem, GalleryMode, Media, Slug};
use pretty_assertions::assert_eq;
use serde_json::Value;
use tempfile::NamedTempFile;

const CATALOG: &str = r##"{
    "projects": [
        {"slug": "easy-garden", "title": "Easy Garden", "status": "Featured",
         "tech": ["Arduino"],
         "media": {"gallery": ["/1.png", "/2.png", "/3.png"], "galleryMode": "carousel"},
         "links": {"github": "#", "report": "/reports/eg.pdf"}},
        {"slug": "drone", "title": "Drone", "media": {"gallery": ["/a.png"]}}
    ],
    "labs": [
        {"slug": "dsa", "title": "DSA", "area": "Coursework"},
        {"slug": "logic", "title": "Logic", "area": "Digital Logic / FPGA"}
    ]
}"##;

fn catalog_file() -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    file.write_all(CATALOG.as_bytes()).unwrap();
    file
}

fn exec(file: &NamedTempFile, argv: &[&str]) -> anyhow::Result<String> {
    let path = file.path().to_str().unwrap();
    let mut full = vec!["folio", "--catalog", path];
    full.extend_from_slice(argv);
    run(&Args::try_parse_from(full)?)
}

fn json(file: &NamedTempFile, argv: &[&str]) -> Value {
    serde_json::from_str(&exec(file, argv).unwrap()).unwrap()
}

// ── URL commands ─────────────────────────────────────────────────

#[test]
fn video_id_command() {
    let args = Args::try_parse_from(["folio", "video-id", "https://youtu.be/abc123"]).unwrap();
    assert_eq!(run(&args).unwrap(), "abc123");
}

#[test]
fn playlist_id_command_prints_nothing_on_miss() {
    let args = Args::try_parse_from(["folio", "playlist-id", "https://youtu.be/abc123"]).unwrap();
    assert_eq!(run(&args).unwrap(), "");
}

#[test]
fn embed_command() {
    let args = Args::try_parse_from([
        "folio",
        "embed",
        "https://www.youtube.com/playlist?list=PL123",
    ])
    .unwrap();
    assert_eq!(
        run(&args).unwrap(),
        "https://www.youtube.com/embed/videoseries?list=PL123"
    );
}

// ── Catalog commands ─────────────────────────────────────────────

#[test]
fn list_all_in_order() {
    let file = catalog_file();
    let cards = json(&file, &["list"]);
    let slugs: Vec<&str> = cards
        .as_array()
        .unwrap()
        .iter()
        .map(|c| c["slug"].as_str().unwrap())
        .collect();
    assert_eq!(slugs, vec!["easy-garden", "drone", "dsa", "logic"]);
}

#[test]
fn list_filters_by_kind_and_category() {
    let file = catalog_file();
    let labs = json(&file, &["list", "--kind", "lab"]);
    assert_eq!(labs.as_array().unwrap().len(), 2);

    let coursework = json(&file, &["list", "--category", "Coursework"]);
    assert_eq!(coursework.as_array().unwrap().len(), 1);
    assert_eq!(coursework[0]["detail_href"], "/labs/dsa");
}

#[test]
fn show_found_page() {
    let file = catalog_file();
    let page = json(&file, &["show", "easy-garden"]);
    assert_eq!(page["page"], "found");
    let blocks: Vec<&str> = page["blocks"]
        .as_array()
        .unwrap()
        .iter()
        .map(|b| b["block"].as_str().unwrap())
        .collect();
    assert_eq!(blocks, vec!["tags", "gallery", "links"]);
    assert_eq!(page["blocks"][1]["gallery"]["mode"], "carousel");
    // "#" github is dropped, the local report stays.
    assert_eq!(page["blocks"][2]["links"].as_array().unwrap().len(), 1);
    assert_eq!(page["blocks"][2]["links"][0]["target"], "local");
}

#[test]
fn show_missing_slug_is_not_found_not_error() {
    let file = catalog_file();
    let page = json(&file, &["show", "nope", "--kind", "lab"]);
    assert_eq!(page["page"], "not_found");
    assert_eq!(page["back"]["href"], "/labs");
}

#[test]
fn show_text_outline() {
    let file = catalog_file();
    let text = exec(&file, &["--format", "text", "show", "easy-garden"]).unwrap();
    assert!(text.starts_with("Easy Garden"));
    assert!(text.contains("Easy Garden screenshots (3 slides)"));
    assert!(text.contains("* /1.png"));
    assert!(text.ends_with("<- Back to Projects (/projects)"));
}

#[test]
fn missing_catalog_is_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("absent.json");
    let args = Args::try_parse_from(["folio", "--catalog", path.to_str().unwrap(), "list"]).unwrap();
    let err = run(&args).unwrap_err();
    assert!(format!("{err:#}").contains("absent.json"));
}

// ── Carousel replay ──────────────────────────────────────────────

#[test]
fn carousel_replays_keys() {
    let file = catalog_file();
    let out = exec(&file, &["--format", "text", "carousel", "easy-garden", "--keys", "R R L L 2 x R"]).unwrap();
    assert_eq!(out, "0 -> 1 -> 2 -> 1 -> 0 -> 2 -> 0");
}

#[test]
fn carousel_reports_visible_slide() {
    let file = catalog_file();
    let replay = json(&file, &["carousel", "easy-garden", "--keys", "LL"]);
    assert_eq!(replay["slides"], 3);
    assert_eq!(replay["visible"], "/2.png");
}

#[test]
fn carousel_on_grid_gallery_is_error() {
    let file = catalog_file();
    assert!(exec(&file, &["carousel", "drone"]).is_err());
    assert!(exec(&file, &["carousel", "missing"]).is_err());
}

#[test]
fn out_of_range_jump_is_skipped() {
    let mut entry = Entry::new(EntryKind::Project, Slug::parse("x").unwrap(), "X");
    entry.media = Some(Media {
        gallery: vec![GalleryItem::new("/a"), GalleryItem::new("/b")],
        gallery_mode: GalleryMode::Carousel,
        ..Media::default()
    });
    let replay = replay_carousel(&entry, "9R").unwrap();
    assert_eq!(replay.visited, vec![0, 1]);
    assert_eq!(replay.visible.as_deref(), Some("/b"));
}
