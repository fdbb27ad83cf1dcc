//! Per-site scraping configuration.
//!
//! A [`SiteTable`] maps a site id to a [`SiteConfig`], which maps logical
//! field names (`title`, `content`, `reporter`, free-form `extra_*`) to an
//! optional selector string. Selectors are opaque here; nothing in this crate
//! evaluates them.

mod entry;
mod file;
mod table;

pub use entry::{FieldSelector, SiteConfig};
pub use table::SiteTable;
