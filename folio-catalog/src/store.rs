use std::collections::HashMap;

use folio_model::{Entry, EntryKind, GalleryMode, Slug};
use tracing::warn;

use crate::{CatalogError, CatalogResult};

/// Ordered, read-only collection of entries with unique slugs.
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<Entry>,
    index: HashMap<Slug, usize>,
}

impl Catalog {
    /// Builds a catalog, keeping `entries` in the given order.
    ///
    /// Fails if any slug appears twice. Entries that will render in a
    /// degraded way are accepted and logged.
    pub fn new(entries: Vec<Entry>) -> CatalogResult<Self> {
        let mut index = HashMap::with_capacity(entries.len());
        for (pos, entry) in entries.iter().enumerate() {
            if index.insert(entry.slug.clone(), pos).is_some() {
                return Err(CatalogError::DuplicateSlug(entry.slug.to_string()));
            }
            audit(entry);
        }
        Ok(Self { entries, index })
    }

    /// Every entry, in declared order.
    pub fn all(&self) -> &[Entry] {
        &self.entries
    }

    /// The entry with `slug`, if any.
    pub fn by_slug(&self, slug: &str) -> Option<&Entry> {
        self.index.get(slug).map(|&pos| &self.entries[pos])
    }

    /// Entries whose category equals `category`, in declared order.
    pub fn by_category<'a>(&'a self, category: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries
            .iter()
            .filter(move |entry| entry.category() == Some(category))
    }

    /// Entries of one kind, in declared order.
    pub fn by_kind(&self, kind: EntryKind) -> impl Iterator<Item = &Entry> + '_ {
        self.entries.iter().filter(move |entry| entry.kind == kind)
    }

    /// Distinct categories in order of first appearance.
    pub fn categories(&self) -> Vec<&str> {
        let mut seen = Vec::new();
        for category in self.entries.iter().filter_map(Entry::category) {
            if !seen.contains(&category) {
                seen.push(category);
            }
        }
        seen
    }

    /// Entries grouped by category, groups in first-appearance order and
    /// entries in declared order. Uncategorized entries are left out.
    pub fn grouped(&self) -> Vec<(&str, Vec<&Entry>)> {
        self.categories()
            .into_iter()
            .map(|category| (category, self.by_category(category).collect()))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

fn audit(entry: &Entry) {
    let Some(media) = entry.media.as_ref() else {
        return;
    };
    if media.gallery_mode == GalleryMode::Carousel && media.gallery().is_none() {
        warn!(slug = %entry.slug, "Carousel gallery has no slides; it will not render");
    }
    if media.has_placeholder_video_id() {
        warn!(slug = %entry.slug, "Video id is the placeholder; no video will render");
    }
}
