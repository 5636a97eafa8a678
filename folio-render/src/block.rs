use folio_media::{Gallery, Image, VideoEmbed};
use serde::{Deserialize, Serialize};

/// Number of highlights shown on list-view cards.
pub const LIST_HIGHLIGHT_LIMIT: usize = 4;

/// Where an entry is being shown.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ViewMode {
    /// Catalog card; highlights are capped.
    List,
    /// Full detail page.
    #[default]
    Detail,
}

impl ViewMode {
    /// Maximum number of highlights shown, if capped.
    pub fn highlight_limit(&self) -> Option<usize> {
        match self {
            Self::List => Some(LIST_HIGHLIGHT_LIMIT),
            Self::Detail => None,
        }
    }
}

/// One display block. Blocks are emitted in a fixed order; see
/// [`render_blocks`](crate::render_blocks).
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "block", rename_all = "snake_case")]
pub enum Block {
    Tags { items: Vec<String> },
    Highlights { items: Vec<String> },
    Hero { image: Image },
    Gallery { gallery: Gallery },
    Video { embed: VideoEmbed },
    Problem { text: String },
    Approach { items: Vec<String> },
    Results { items: Vec<String> },
    WhatILearned { items: Vec<String> },
    ProblemsEncountered { items: Vec<String> },
    FutureWork { items: Vec<String> },
    Links { links: Vec<LinkItem> },
}

impl Block {
    /// Stable machine name of the block.
    pub fn name(&self) -> &'static str {
        match self {
            Self::Tags { .. } => "tags",
            Self::Highlights { .. } => "highlights",
            Self::Hero { .. } => "hero",
            Self::Gallery { .. } => "gallery",
            Self::Video { .. } => "video",
            Self::Problem { .. } => "problem",
            Self::Approach { .. } => "approach",
            Self::Results { .. } => "results",
            Self::WhatILearned { .. } => "what_i_learned",
            Self::ProblemsEncountered { .. } => "problems_encountered",
            Self::FutureWork { .. } => "future_work",
            Self::Links { .. } => "links",
        }
    }

    /// Section heading shown above the block, if it has one.
    pub fn heading(&self) -> Option<&'static str> {
        match self {
            Self::Tags { .. } | Self::Highlights { .. } | Self::Hero { .. } => None,
            Self::Gallery { .. } => Some("Screenshots"),
            Self::Video { .. } => Some("Video"),
            Self::Problem { .. } => Some("Problem"),
            Self::Approach { .. } => Some("Approach"),
            Self::Results { .. } => Some("Results"),
            Self::WhatILearned { .. } => Some("What I Learned"),
            Self::ProblemsEncountered { .. } => Some("Problems Encountered"),
            Self::FutureWork { .. } => Some("Future Work"),
            Self::Links { .. } => Some("Links"),
        }
    }
}

/// Which link slot a [`LinkItem`] came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkKind {
    Github,
    Demo,
    Video,
    Report,
}

impl LinkKind {
    pub fn label(&self, mode: ViewMode) -> &'static str {
        match (self, mode) {
            (Self::Github, ViewMode::Detail) => "GitHub Repository",
            (Self::Demo, ViewMode::Detail) => "Live Demo",
            (Self::Video, ViewMode::Detail) => "Demo / Video",
            (Self::Report, ViewMode::Detail) => "Final Report (PDF)",
            (Self::Github, ViewMode::List) => "GitHub",
            (Self::Demo, ViewMode::List) => "Demo",
            (Self::Video, ViewMode::List) => "Video",
            (Self::Report, ViewMode::List) => "Report / PDF",
        }
    }
}

/// Whether a link leaves the site.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LinkTarget {
    External,
    Local,
}

impl LinkTarget {
    pub fn of(href: &str) -> Self {
        if href.starts_with("http") {
            Self::External
        } else {
            Self::Local
        }
    }
}

/// One rendered outbound link.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkItem {
    pub kind: LinkKind,
    pub href: String,
    pub label: &'static str,
    pub target: LinkTarget,
}
