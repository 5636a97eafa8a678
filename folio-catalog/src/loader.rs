//! Catalog documents.
//!
//! The on-disk shape is `{ "projects": [...], "labs": [...] }`. Section
//! membership decides an entry's kind; projects come first in the resulting
//! catalog, each section in declared order.

use std::fs;
use std::path::Path;

use folio_model::{Entry, EntryKind};
use serde::{Deserialize, Serialize};
use tracing::info;

use crate::{Catalog, CatalogError, CatalogResult};

/// Deserialized catalog document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogFile {
    pub projects: Vec<Entry>,
    pub labs: Vec<Entry>,
}

impl CatalogFile {
    /// Flattens both sections into one ordered list, stamping each entry's kind.
    pub fn into_entries(self) -> Vec<Entry> {
        let projects = self.projects.into_iter().map(|e| with_kind(e, EntryKind::Project));
        let labs = self.labs.into_iter().map(|e| with_kind(e, EntryKind::Lab));
        projects.chain(labs).collect()
    }
}

fn with_kind(mut entry: Entry, kind: EntryKind) -> Entry {
    entry.kind = kind;
    entry
}

impl Catalog {
    /// Builds a catalog from a JSON catalog document.
    pub fn from_json_str(json: &str) -> CatalogResult<Self> {
        let file: CatalogFile = serde_json::from_str(json)?;
        Self::new(file.into_entries())
    }
}

/// Reads and builds the catalog at `path`.
pub fn load_catalog(path: impl AsRef<Path>) -> CatalogResult<Catalog> {
    let path = path.as_ref();
    let json = fs::read_to_string(path).map_err(|source| CatalogError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let catalog = Catalog::from_json_str(&json)?;
    info!(
        path = %path.display(),
        entries = catalog.len(),
        "Catalog loaded"
    );
    Ok(catalog)
}
