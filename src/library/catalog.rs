//! In-memory catalog of library items.
//!
//! Items are kept in insertion order. The catalog does not enforce its own
//! uniqueness rules on `add`; callers consult [`Catalog::is_content_duplicate`]
//! and [`Catalog::is_id_occupied`] first.

use tracing::debug;

use super::item::{ItemKind, LibraryItem};
use super::search::SearchQuery;
use super::validate::is_all_digits;

/// Catalog of all items in the current session
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: Vec<LibraryItem>,
}

impl Catalog {
    /// Create a new empty catalog
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an item to the catalog
    pub fn add(&mut self, item: LibraryItem) {
        debug!(kind = %item.kind(), id = %item.id(), "Adding item");
        self.items.push(item);
    }

    /// Remove the first item equal to `item`
    pub fn remove(&mut self, item: &LibraryItem) -> Option<LibraryItem> {
        let pos = self.items.iter().position(|i| i == item)?;
        debug!(kind = %item.kind(), id = %item.id(), "Removing item");
        Some(self.items.remove(pos))
    }

    /// Check if the catalog is empty
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Get the number of items
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Items in insertion order
    pub fn items(&self) -> &[LibraryItem] {
        &self.items
    }

    pub fn iter(&self) -> impl Iterator<Item = &LibraryItem> {
        self.items.iter()
    }

    /// True if an item of the same kind already has this title and author
    /// (case-insensitive)
    pub fn is_content_duplicate(&self, kind: ItemKind, title: &str, author: &str) -> bool {
        let title = title.to_lowercase();
        let author = author.to_lowercase();

        self.items.iter().any(|i| {
            i.kind() == kind
                && i.title().to_lowercase() == title
                && i.author().to_lowercase() == author
        })
    }

    /// True if any item's identifier text is exactly `id_text`
    pub fn is_id_occupied(&self, id_text: &str) -> bool {
        self.items.iter().any(|i| i.id_text() == id_text)
    }

    /// Suggest an identifier one above the largest all-digit identifier
    pub fn suggest_next_id(&self) -> String {
        let max = self
            .items
            .iter()
            .map(LibraryItem::id_text)
            .filter(|id| is_all_digits(id))
            .filter_map(|id| id.parse::<u64>().ok())
            .max()
            .unwrap_or(0);

        max.saturating_add(1).to_string()
    }

    /// Search items by free-text query, see [`SearchQuery`]
    pub fn search(&self, query: &str) -> Vec<&LibraryItem> {
        let query = SearchQuery::parse(query);
        debug!(kind = ?query.kind, term = %query.term, "Searching catalog");

        self.items.iter().filter(|item| query.matches(item)).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Catalog {
        let mut catalog = Catalog::new();
        catalog.add(LibraryItem::book("Dune", "Frank Herbert", "B1"));
        catalog.add(LibraryItem::dvd("Dune", "Frank Herbert", 3));
        catalog.add(LibraryItem::magazine("Wired", "Conde Nast", "7"));
        catalog
    }

    #[test]
    fn test_catalog_add_and_len() {
        let mut catalog = Catalog::new();
        assert!(catalog.is_empty());

        catalog.add(LibraryItem::book("Dune", "Herbert", "1"));
        assert!(!catalog.is_empty());
        assert_eq!(catalog.len(), 1);
    }

    #[test]
    fn test_catalog_remove() {
        let mut catalog = sample();
        let target = LibraryItem::dvd("Dune", "Frank Herbert", 3);

        let removed = catalog.remove(&target);
        assert_eq!(removed, Some(target.clone()));
        assert_eq!(catalog.len(), 2);

        // Second removal is a silent no-op
        assert_eq!(catalog.remove(&target), None);
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn test_catalog_remove_keeps_order() {
        let mut catalog = sample();
        catalog.remove(&LibraryItem::book("Dune", "Frank Herbert", "B1"));

        let ids: Vec<_> = catalog.iter().map(LibraryItem::id_text).collect();
        assert_eq!(ids, vec!["3", "7"]);
    }

    #[test]
    fn test_content_duplicate_is_per_kind() {
        let catalog = sample();

        assert!(catalog.is_content_duplicate(ItemKind::Book, "DUNE", "frank herbert"));
        assert!(catalog.is_content_duplicate(ItemKind::Dvd, "dune", "FRANK HERBERT"));
        assert!(!catalog.is_content_duplicate(ItemKind::Magazine, "Dune", "Frank Herbert"));
        assert!(!catalog.is_content_duplicate(ItemKind::Book, "Dune", "Brian Herbert"));
    }

    #[test]
    fn test_id_occupied_across_kinds() {
        let catalog = sample();

        assert!(catalog.is_id_occupied("B1"));
        assert!(catalog.is_id_occupied("3"));
        assert!(catalog.is_id_occupied("7"));
        assert!(!catalog.is_id_occupied("b1"));
        assert!(!catalog.is_id_occupied("03"));
    }

    #[test]
    fn test_suggest_next_id() {
        assert_eq!(Catalog::new().suggest_next_id(), "1");
        assert_eq!(sample().suggest_next_id(), "8");
    }

    #[test]
    fn test_suggest_next_id_ignores_text_ids() {
        let mut catalog = Catalog::new();
        catalog.add(LibraryItem::book("Dune", "Herbert", "99x"));
        catalog.add(LibraryItem::book("Emma", "Austen", "ISBN"));
        assert_eq!(catalog.suggest_next_id(), "1");
    }
}
