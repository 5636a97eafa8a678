//! Command handling for the `folio` binary.
//!
//! [`run`] executes one parsed command and returns what should be printed,
//! so the whole front end can be exercised without a process boundary.

mod outline;

use std::path::PathBuf;

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use folio_catalog::{Catalog, load_catalog};
use folio_media::{Gallery, Key, KeySignal, resolve_gallery, url};
use folio_model::{Entry, EntryKind};
use folio_render::{ViewMode, render_card, render_detail};
use serde::Serialize;
use tracing::debug;

#[derive(Parser, Debug)]
#[command(name = "folio")]
#[command(about = "Render portfolio catalog entries into display blocks")]
pub struct Args {
    /// Path to the catalog JSON document
    #[arg(short, long, default_value = "data/catalog.json", global = true)]
    pub catalog: PathBuf,

    /// Output format
    #[arg(short, long, value_enum, default_value_t = Format::Json, global = true)]
    pub format: Format,

    /// Enable verbose debug logging
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand, Debug)]
pub enum Command {
    /// Print list-view cards
    List {
        /// Only entries of this kind
        #[arg(long, value_enum)]
        kind: Option<KindArg>,
        /// Only entries in this category
        #[arg(long)]
        category: Option<String>,
    },
    /// Print one entry's detail page
    Show {
        slug: String,
        #[arg(long, value_enum, default_value_t = KindArg::Project)]
        kind: KindArg,
        /// Render with list-view rules (capped highlights, short link labels)
        #[arg(long)]
        list_view: bool,
    },
    /// Extract a video id from a YouTube URL
    VideoId { url: String },
    /// Extract a playlist id from a YouTube URL
    PlaylistId { url: String },
    /// Resolve a YouTube URL to its embed URL
    Embed { url: String },
    /// Replay a key sequence against an entry's gallery carousel
    Carousel {
        slug: String,
        /// `L`/`R` for arrow keys, `0`-`9` to jump to a slide
        #[arg(long, default_value = "")]
        keys: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    Json,
    Text,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum KindArg {
    Project,
    Lab,
}

impl From<KindArg> for EntryKind {
    fn from(kind: KindArg) -> Self {
        match kind {
            KindArg::Project => EntryKind::Project,
            KindArg::Lab => EntryKind::Lab,
        }
    }
}

/// Result of replaying keys against a carousel.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CarouselReplay {
    pub slug: String,
    pub slides: usize,
    pub visited: Vec<usize>,
    pub visible: Option<String>,
}

/// Executes `args.command` and returns the text to print.
pub fn run(args: &Args) -> Result<String> {
    match &args.command {
        Command::VideoId { url: link } => Ok(url::parse_video_id(link).unwrap_or_default()),
        Command::PlaylistId { url: link } => Ok(url::parse_playlist_id(link).unwrap_or_default()),
        Command::Embed { url: link } => Ok(url::embed_url_for(link).unwrap_or_default()),
        Command::List { kind, category } => {
            let catalog = open(args)?;
            let cards: Vec<_> = catalog
                .all()
                .iter()
                .filter(|e| kind.is_none_or(|k| e.kind == EntryKind::from(k)))
                .filter(|e| category.as_deref().is_none_or(|c| e.category() == Some(c)))
                .map(render_card)
                .collect();
            match args.format {
                Format::Json => to_json(&cards),
                Format::Text => Ok(outline::cards(&cards)),
            }
        }
        Command::Show {
            slug,
            kind,
            list_view,
        } => {
            let catalog = open(args)?;
            let mode = if *list_view { ViewMode::List } else { ViewMode::Detail };
            let page = render_detail(&catalog, (*kind).into(), slug, mode);
            match args.format {
                Format::Json => to_json(&page),
                Format::Text => Ok(outline::page(&page)),
            }
        }
        Command::Carousel { slug, keys } => {
            let catalog = open(args)?;
            let Some(entry) = catalog.by_slug(slug) else {
                bail!("no entry with slug {slug:?}");
            };
            let replay = replay_carousel(entry, keys)?;
            match args.format {
                Format::Json => to_json(&replay),
                Format::Text => Ok(replay
                    .visited
                    .iter()
                    .map(usize::to_string)
                    .collect::<Vec<_>>()
                    .join(" -> ")),
            }
        }
    }
}

/// Mounts the entry's carousel on a fresh key signal and feeds it `keys`.
pub fn replay_carousel(entry: &Entry, keys: &str) -> Result<CarouselReplay> {
    let gallery = entry
        .media
        .as_ref()
        .and_then(|media| resolve_gallery(&entry.title, media));
    let Some(Gallery::Carousel {
        slides, controller, ..
    }) = gallery
    else {
        bail!("entry {} has no carousel gallery", entry.slug);
    };

    let signal = KeySignal::new();
    let mounted = controller.mount(&signal);
    let mut visited: Vec<usize> = mounted.index().into_iter().collect();
    for ch in keys.chars().filter(|c| !c.is_whitespace()) {
        match ch {
            'L' | 'l' => {
                signal.emit(Key::Left);
            }
            'R' | 'r' => {
                signal.emit(Key::Right);
            }
            d if d.is_ascii_digit() => {
                let k = d.to_digit(10).map_or(0, |k| k as usize);
                if !mounted.goto(k) {
                    debug!(index = k, slides = slides.len(), "Skipping jump past last slide");
                    continue;
                }
            }
            other => {
                signal.emit(Key::Char(other));
                continue;
            }
        }
        visited.extend(mounted.index());
    }

    let carousel = mounted.unmount();
    Ok(CarouselReplay {
        slug: entry.slug.to_string(),
        slides: slides.len(),
        visible: carousel
            .index()
            .and_then(|i| slides.get(i))
            .map(|image| image.src.clone()),
        visited,
    })
}

fn open(args: &Args) -> Result<Catalog> {
    load_catalog(&args.catalog)
        .with_context(|| format!("loading catalog from {}", args.catalog.display()))
}

fn to_json<T: Serialize>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serializing output")
}
