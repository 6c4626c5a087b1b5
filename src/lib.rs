//! libcat - Interactive library catalog
//!
//! An in-memory catalog of books, DVDs and magazines, managed through a
//! text menu. Nothing is persisted between runs.
//!
//! # Modules
//!
//! - `library`: Catalog store, item model, search and input validation
//! - `cli`: Command-line parsing and the interactive session
//! - `config`: Session settings (cancel token, id suggestions)
//!
//! # Usage
//!
//! ```bash
//! # Start a session
//! libcat
//!
//! # Use "q" instead of "-1" to cancel prompts
//! libcat --cancel-token q
//!
//! # Show resolved configuration
//! libcat config
//! ```

pub mod cli;
pub mod config;
pub mod library;

// Re-export main types at crate root for convenience
pub use cli::{Prompt, Session};
pub use library::{Catalog, ItemId, ItemKind, LibraryItem, SearchQuery, ValidationError};
