//! Catalog Integration Tests
//!
//! Tests for catalog mutation, uniqueness predicates and search through
//! the public API.

use libcat::{Catalog, ItemKind, LibraryItem};

fn titles<'a>(items: &[&'a LibraryItem]) -> Vec<&'a str> {
    items.iter().map(|i| i.title()).collect()
}

#[test]
fn test_add_makes_catalog_non_empty() {
    let mut catalog = Catalog::new();
    let item = LibraryItem::book("Dune", "Herbert", "1");

    assert!(catalog.is_empty());
    catalog.add(item.clone());
    assert!(!catalog.is_empty());
    assert_eq!(catalog.iter().filter(|i| **i == item).count(), 1);
}

#[test]
fn test_removed_item_no_longer_found() {
    let mut catalog = Catalog::new();
    catalog.add(LibraryItem::book("Dune", "Herbert", "1"));
    catalog.add(LibraryItem::book("Dune Messiah", "Herbert", "2"));

    let target = catalog.search("messiah")[0].clone();
    catalog.remove(&target);

    assert!(catalog.search("messiah").is_empty());
    assert_eq!(titles(&catalog.search("dune")), vec!["Dune"]);
}

#[test]
fn test_id_occupied_only_after_add() {
    let mut catalog = Catalog::new();
    assert!(!catalog.is_id_occupied("42"));

    catalog.add(LibraryItem::dvd("Alien", "Scott", 42));
    assert!(catalog.is_id_occupied("42"));
}

#[test]
fn test_suggest_next_id_skips_non_numeric() {
    let mut catalog = Catalog::new();
    assert_eq!(catalog.suggest_next_id(), "1");

    catalog.add(LibraryItem::book("Emma", "Austen", "3"));
    catalog.add(LibraryItem::dvd("Alien", "Scott", 7));
    catalog.add(LibraryItem::magazine("Wired", "Conde Nast", "2a"));
    assert_eq!(catalog.suggest_next_id(), "8");
}

#[test]
fn test_content_duplicate_case_insensitive_same_kind_only() {
    let mut catalog = Catalog::new();
    catalog.add(LibraryItem::book("DUNE", "herbert", "1"));

    assert!(catalog.is_content_duplicate(ItemKind::Book, "Dune", "Herbert"));
    assert!(!catalog.is_content_duplicate(ItemKind::Dvd, "Dune", "Herbert"));
}

#[test]
fn test_kind_marker_filters_search() {
    let mut catalog = Catalog::new();
    catalog.add(LibraryItem::book("Seven", "Author One", "7"));
    catalog.add(LibraryItem::dvd("Seven", "Author Two", 7));

    let results = catalog.search("-d 7");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].kind(), ItemKind::Dvd);

    let results = catalog.search("7 -b");
    assert_eq!(results.len(), 1);
    assert_eq!(results[0].kind(), ItemKind::Book);
}

#[test]
fn test_search_across_kinds_in_insertion_order() {
    let mut catalog = Catalog::new();
    catalog.add(LibraryItem::dvd("Dune", "Villeneuve", 1));
    catalog.add(LibraryItem::book("Emma", "Austen", "2"));
    catalog.add(LibraryItem::magazine("Dune Fans", "Arrakis Press", "3"));
    catalog.add(LibraryItem::book("Sandworms", "Dunemaster", "4"));

    let results = catalog.search("DUNE");
    assert_eq!(titles(&results), vec!["Dune", "Dune Fans", "Sandworms"]);
}

#[test]
fn test_marker_only_query_lists_kind() {
    let mut catalog = Catalog::new();
    catalog.add(LibraryItem::book("Emma", "Austen", "1"));
    catalog.add(LibraryItem::magazine("Wired", "Conde Nast", "2"));
    catalog.add(LibraryItem::magazine("Byte", "McGraw", "3"));

    assert_eq!(titles(&catalog.search(" -M ")), vec!["Wired", "Byte"]);
    assert_eq!(catalog.search("").len(), 3);
}

#[test]
fn test_search_matches_id_substring() {
    let mut catalog = Catalog::new();
    catalog.add(LibraryItem::book("Emma", "Austen", "ISBN-0141439"));
    catalog.add(LibraryItem::dvd("Alien", "Scott", 1979));

    assert_eq!(titles(&catalog.search("isbn")), vec!["Emma"]);
    assert_eq!(titles(&catalog.search("97")), vec!["Alien"]);
}

#[test]
fn test_rendered_line_round_trip() {
    let items = [
        LibraryItem::book("Dune", "Frank Herbert", "12"),
        LibraryItem::dvd("Alien", "Ridley Scott", 7),
        LibraryItem::magazine("National Geographic", "NG Society", "NG-2024"),
    ];

    for item in items {
        let line = item.to_string();
        let parsed: LibraryItem = line.parse().unwrap();
        assert_eq!(parsed.kind(), item.kind());
        assert_eq!(parsed.id_text(), item.id_text());
        assert_eq!(parsed.title(), item.title());
        assert_eq!(parsed.author(), item.author());
    }
}
