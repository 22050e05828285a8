//! Application directory
//!
//! The directory is a small catalog of ForPublic.id applications. This module
//! owns its data model, loads and validates the catalog, and implements the
//! filter used by the directory page and the `catalog list` command.

pub mod catalog;
pub mod filter;
pub mod types;

pub use catalog::Catalog;
pub use filter::{DirectoryView, filter};
pub use types::{Accent, ApplicationRecord, Category, FilterQuery, Localized, SpotlightEntry, Status, ViewMode};
