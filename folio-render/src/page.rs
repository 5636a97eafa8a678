use folio_catalog::Catalog;
use folio_model::{Entry, EntryKind, Status};
use serde::Serialize;
use tracing::debug;

use crate::block::{Block, ViewMode};
use crate::render::render_blocks;

/// A plain in-site navigation link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavLink {
    pub href: String,
    pub label: String,
}

impl NavLink {
    /// The single "back to catalog" link for `kind`.
    pub fn back_to(kind: EntryKind) -> Self {
        Self {
            href: kind.route_prefix().to_string(),
            label: format!("Back to {}", kind.catalog_label()),
        }
    }
}

/// List-view card for one entry.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Card {
    pub kind: EntryKind,
    pub slug: String,
    pub title: String,
    pub subtitle: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub status: Option<&'static str>,
    pub detail_href: String,
    pub blocks: Vec<Block>,
}

/// Renders the list-view card of `entry`.
pub fn render_card(entry: &Entry) -> Card {
    Card {
        kind: entry.kind,
        slug: entry.slug.to_string(),
        title: entry.title.clone(),
        subtitle: entry.subtitle.clone(),
        status: entry.status.as_ref().map(Status::label),
        detail_href: entry.detail_href(),
        blocks: render_blocks(entry, ViewMode::List),
    }
}

/// Detail page, or the standard not-found page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "page", rename_all = "snake_case")]
pub enum DetailPage {
    Found {
        kind: EntryKind,
        slug: String,
        title: String,
        subtitle: String,
        blocks: Vec<Block>,
        back: NavLink,
    },
    NotFound {
        title: String,
        message: String,
        back: NavLink,
    },
}

impl DetailPage {
    fn not_found(kind: EntryKind) -> Self {
        let title = match kind {
            EntryKind::Project => "Project Not Found",
            EntryKind::Lab => "Lab Not Found",
        };
        Self::NotFound {
            title: title.to_string(),
            message: format!("That {} doesn't exist.", kind.noun()),
            back: NavLink::back_to(kind),
        }
    }

    pub fn is_found(&self) -> bool {
        matches!(self, Self::Found { .. })
    }

    pub fn back(&self) -> &NavLink {
        match self {
            Self::Found { back, .. } | Self::NotFound { back, .. } => back,
        }
    }
}

/// Looks up `slug` among entries of `kind` and renders its detail page.
///
/// A miss (unknown slug, or a slug belonging to the other kind) yields
/// [`DetailPage::NotFound`]; nothing is partially rendered.
pub fn render_detail(catalog: &Catalog, kind: EntryKind, slug: &str, mode: ViewMode) -> DetailPage {
    let Some(entry) = catalog.by_slug(slug).filter(|e| e.kind == kind) else {
        debug!(slug, ?kind, "Detail lookup missed");
        return DetailPage::not_found(kind);
    };
    DetailPage::Found {
        kind,
        slug: entry.slug.to_string(),
        title: entry.title.clone(),
        subtitle: entry.subtitle.clone(),
        blocks: render_blocks(entry, mode),
        back: NavLink::back_to(kind),
    }
}
