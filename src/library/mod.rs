//! Catalog management for library items.
//!
//! - `item`: Book, DVD and Magazine items and their listing format
//! - `catalog`: ordered in-memory store with uniqueness predicates
//! - `search`: marker-aware free-text filter
//! - `validate`: input checks applied before items are constructed

pub mod catalog;
pub mod item;
pub mod search;
pub mod validate;

pub use catalog::Catalog;
pub use item::{ItemId, ItemKind, LibraryItem, ParseItemError};
pub use search::SearchQuery;
pub use validate::ValidationError;
