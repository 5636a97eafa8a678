//! Immutable, ordered catalog of folio entries.
//!
//! A [`Catalog`] is built once at startup, from a JSON document or directly
//! from entries, and only read afterwards:
//! - [`Catalog::all`]: every entry in declared order
//! - [`Catalog::by_slug`]: one entry, or `None`
//! - [`Catalog::by_category`] / [`Catalog::by_kind`]: stable-order subsequences
//! - [`Catalog::grouped`]: category groups in first-appearance order

mod error;
mod loader;
mod store;

pub use error::{CatalogError, CatalogResult};
pub use loader::{CatalogFile, load_catalog};
pub use store::Catalog;
