//! Library item data model.
//!
//! Every item carries a title, an author, a kind and an identifier whose
//! representation depends on the kind: DVDs are numbered, books and
//! magazines use free-form text identifiers.

use std::fmt;
use std::str::FromStr;

use thiserror::Error;

/// Kind of library item
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ItemKind {
    /// Printed book (text identifier)
    Book,

    /// DVD (numeric identifier)
    Dvd,

    /// Magazine issue (text identifier)
    Magazine,
}

impl ItemKind {
    /// All kinds in menu order
    pub const ALL: [ItemKind; 3] = [ItemKind::Book, ItemKind::Dvd, ItemKind::Magazine];

    /// Display name used in rendered listings
    pub fn as_str(&self) -> &'static str {
        match self {
            ItemKind::Book => "Book",
            ItemKind::Dvd => "DVD",
            ItemKind::Magazine => "Magazine",
        }
    }

    /// Search marker selecting this kind (`-b`, `-d`, `-m`)
    pub fn marker(&self) -> &'static str {
        match self {
            ItemKind::Book => "-b",
            ItemKind::Dvd => "-d",
            ItemKind::Magazine => "-m",
        }
    }

    /// Map a menu choice ("1", "2", "3") to a kind
    pub fn from_menu_choice(choice: &str) -> Option<Self> {
        match choice {
            "1" => Some(ItemKind::Book),
            "2" => Some(ItemKind::Dvd),
            "3" => Some(ItemKind::Magazine),
            _ => None,
        }
    }

    /// Whether identifiers of this kind are numeric
    pub fn has_numeric_id(&self) -> bool {
        matches!(self, ItemKind::Dvd)
    }
}

impl fmt::Display for ItemKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.pad(self.as_str())
    }
}

impl FromStr for ItemKind {
    type Err = ParseItemError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "book" | "b" => Ok(ItemKind::Book),
            "dvd" | "d" => Ok(ItemKind::Dvd),
            "magazine" | "mag" | "m" => Ok(ItemKind::Magazine),
            _ => Err(ParseItemError::UnknownKind(s.to_string())),
        }
    }
}

/// Item identifier, text or numeric depending on the item kind
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId {
    Text(String),
    Number(u32),
}

impl ItemId {
    /// Identifier rendered as text, the form used for uniqueness checks
    pub fn to_text(&self) -> String {
        self.to_string()
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ItemId::Text(s) => f.pad(s),
            ItemId::Number(n) => fmt::Display::fmt(n, f),
        }
    }
}

/// A single item owned by the catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LibraryItem {
    kind: ItemKind,
    id: ItemId,
    title: String,
    author: String,
}

impl LibraryItem {
    /// Create a book with a text identifier
    pub fn book(
        title: impl Into<String>,
        author: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self::new(ItemKind::Book, ItemId::Text(id.into()), title, author)
    }

    /// Create a DVD with a numeric identifier
    pub fn dvd(title: impl Into<String>, author: impl Into<String>, id: u32) -> Self {
        Self::new(ItemKind::Dvd, ItemId::Number(id), title, author)
    }

    /// Create a magazine with a text identifier
    pub fn magazine(
        title: impl Into<String>,
        author: impl Into<String>,
        id: impl Into<String>,
    ) -> Self {
        Self::new(ItemKind::Magazine, ItemId::Text(id.into()), title, author)
    }

    /// Create an item from an already validated identifier.
    ///
    /// The identifier representation is expected to match the kind
    /// (see [`crate::library::validate::identifier`]).
    pub fn new(
        kind: ItemKind,
        id: ItemId,
        title: impl Into<String>,
        author: impl Into<String>,
    ) -> Self {
        Self {
            kind,
            id,
            title: title.into(),
            author: author.into(),
        }
    }

    pub fn kind(&self) -> ItemKind {
        self.kind
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    /// Identifier rendered as text
    pub fn id_text(&self) -> String {
        self.id.to_text()
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn author(&self) -> &str {
        &self.author
    }
}

/// Renders `[<kind>] ID: <id> | Title: <title> | Auth: <author>` with
/// fixed-width, left-justified kind (8), id (5) and title (20) columns.
impl fmt::Display for LibraryItem {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "[{:<8}] ID: {:<5} | Title: {:<20} | Auth: {}",
            self.kind, self.id, self.title, self.author
        )
    }
}

/// Parses a line produced by the `Display` impl back into an item.
///
/// Column padding is trimmed, so titles and identifiers with trailing
/// whitespace do not survive the round-trip.
impl FromStr for LibraryItem {
    type Err = ParseItemError;

    fn from_str(line: &str) -> Result<Self, Self::Err> {
        let rest = line
            .strip_prefix('[')
            .ok_or(ParseItemError::MissingField("kind"))?;
        let (kind, rest) = rest
            .split_once("] ID: ")
            .ok_or(ParseItemError::MissingField("id"))?;
        let (id, rest) = rest
            .split_once(" | Title: ")
            .ok_or(ParseItemError::MissingField("title"))?;
        let (title, author) = rest
            .split_once(" | Auth: ")
            .ok_or(ParseItemError::MissingField("author"))?;

        let kind: ItemKind = kind.trim_end().parse()?;
        let id = id.trim_end();
        let title = title.trim_end();

        Ok(match kind {
            ItemKind::Dvd => {
                let number = id
                    .parse()
                    .map_err(|_| ParseItemError::InvalidNumericId(id.to_string()))?;
                LibraryItem::dvd(title, author, number)
            }
            ItemKind::Book => LibraryItem::book(title, author, id),
            ItemKind::Magazine => LibraryItem::magazine(title, author, id),
        })
    }
}

/// Errors from parsing kinds or rendered item lines
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseItemError {
    #[error("Unknown item kind: {0}")]
    UnknownKind(String),

    #[error("Malformed item line: missing {0}")]
    MissingField(&'static str),

    #[error("DVD identifier is not a number: {0}")]
    InvalidNumericId(String),
}
