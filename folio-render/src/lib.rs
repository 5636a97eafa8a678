//! Display block composition for folio entries.
//!
//! [`render_blocks`] turns one [`Entry`](folio_model::Entry) into an ordered
//! list of [`Block`]s, including a block only when its backing data is
//! present. [`render_card`] and [`render_detail`] wrap that into the list-view
//! card and the detail page (or the standard not-found page).
//!
//! Everything here is a pure function of its inputs.

mod block;
mod page;
mod render;

pub use block::{Block, LinkItem, LinkKind, LinkTarget, ViewMode, LIST_HIGHLIGHT_LIMIT};
pub use page::{Card, DetailPage, NavLink, render_card, render_detail};
pub use render::{render_blocks, render_links};
