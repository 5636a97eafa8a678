use serde::{Deserialize, Serialize};
use std::fmt;

use crate::{Links, Media, Result, Sections, Slug, present};

/// Which catalog an entry belongs to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntryKind {
    #[default]
    Project,
    Lab,
}

impl EntryKind {
    /// Route prefix for this kind's detail pages.
    pub fn route_prefix(&self) -> &'static str {
        match self {
            Self::Project => "/projects",
            Self::Lab => "/labs",
        }
    }

    /// Heading of this kind's catalog page.
    pub fn catalog_label(&self) -> &'static str {
        match self {
            Self::Project => "Projects",
            Self::Lab => "Labs",
        }
    }

    /// Singular lowercase noun, as used in "That project doesn't exist."
    pub fn noun(&self) -> &'static str {
        match self {
            Self::Project => "project",
            Self::Lab => "lab",
        }
    }
}

/// Publication status badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Status {
    Featured,
    #[serde(rename = "In Progress")]
    InProgress,
    Archived,
}

impl Status {
    pub fn label(&self) -> &'static str {
        match self {
            Self::Featured => "Featured",
            Self::InProgress => "In Progress",
            Self::Archived => "Archived",
        }
    }
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// One catalog item.
///
/// Projects and labs share this structure; `kind` is assigned by the catalog
/// section the entry was declared in, not by the entry itself.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Entry {
    #[serde(default, skip_deserializing)]
    pub kind: EntryKind,
    pub slug: Slug,
    pub title: String,
    #[serde(default)]
    pub subtitle: String,
    /// Grouping label; labs call this their `area`.
    #[serde(default, alias = "area", skip_serializing_if = "Option::is_none")]
    pub category: Option<String>,
    #[serde(default)]
    pub tech: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub status: Option<Status>,
    #[serde(default)]
    pub highlights: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub media: Option<Media>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub sections: Option<Sections>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub links: Option<Links>,
}

impl Entry {
    /// Creates a bare entry with only identity and headline fields set.
    pub fn new(kind: EntryKind, slug: Slug, title: impl Into<String>) -> Self {
        Self {
            kind,
            slug,
            title: title.into(),
            subtitle: String::new(),
            category: None,
            tech: Vec::new(),
            status: None,
            highlights: Vec::new(),
            media: None,
            sections: None,
            links: None,
        }
    }

    /// Parses a single entry from JSON. The kind defaults to [`EntryKind::Project`].
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Detail page route, e.g. `/projects/easy-garden`.
    pub fn detail_href(&self) -> String {
        format!("{}/{}", self.kind.route_prefix(), self.slug)
    }

    /// Category, if present.
    pub fn category(&self) -> Option<&str> {
        present::text(self.category.as_deref())
    }

    pub fn tech(&self) -> Option<&[String]> {
        present::list(&self.tech)
    }

    pub fn highlights(&self) -> Option<&[String]> {
        present::list(&self.highlights)
    }
}
