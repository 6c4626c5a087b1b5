//! Field validation performed before an item is constructed.
//!
//! Item constructors trust their arguments; these checks are the boundary
//! between raw user input and the data model.

use thiserror::Error;

use super::item::{ItemId, ItemKind};

/// Minimum number of characters in an author name
pub const MIN_AUTHOR_LEN: usize = 3;

/// Rejected user input
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("Title cannot be empty.")]
    EmptyTitle,

    #[error("Name must be 3+ characters.")]
    AuthorTooShort,

    #[error("Name must contain at least one letter.")]
    AuthorWithoutLetter,

    #[error("ID cannot be empty.")]
    EmptyId,

    #[error("DVD ID must be integer.")]
    NonNumericId,

    #[error("DVD ID is too large: {0}")]
    IdOutOfRange(String),

    #[error("ID Taken.")]
    IdTaken,

    #[error("Enter 1, 2 or 3.")]
    UnknownKind,

    #[error("Invalid Number.")]
    InvalidSelection,
}

/// Check that a title is non-empty
pub fn title(input: &str) -> Result<&str, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyTitle);
    }
    Ok(input)
}

/// Check that an author has at least three characters, one of them a letter
pub fn author(input: &str) -> Result<&str, ValidationError> {
    if input.chars().count() < MIN_AUTHOR_LEN {
        return Err(ValidationError::AuthorTooShort);
    }
    if !input.chars().any(|c| c.is_ascii_alphabetic()) {
        return Err(ValidationError::AuthorWithoutLetter);
    }
    Ok(input)
}

/// Parse a menu choice into an item kind
pub fn kind(input: &str) -> Result<ItemKind, ValidationError> {
    ItemKind::from_menu_choice(input).ok_or(ValidationError::UnknownKind)
}

/// Check that an identifier was entered at all
pub fn required_id(input: &str) -> Result<&str, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyId);
    }
    Ok(input)
}

/// Parse a 1-based selection among `count` listed entries into an index
pub fn selection(input: &str, count: usize) -> Result<usize, ValidationError> {
    if !is_all_digits(input) {
        return Err(ValidationError::InvalidSelection);
    }
    match input.parse::<usize>() {
        Ok(n) if (1..=count).contains(&n) => Ok(n - 1),
        _ => Err(ValidationError::InvalidSelection),
    }
}

/// Turn raw identifier text into the identifier representation of `kind`
pub fn identifier(kind: ItemKind, input: &str) -> Result<ItemId, ValidationError> {
    if input.is_empty() {
        return Err(ValidationError::EmptyId);
    }

    if !kind.has_numeric_id() {
        return Ok(ItemId::Text(input.to_string()));
    }

    if !is_all_digits(input) {
        return Err(ValidationError::NonNumericId);
    }

    input
        .parse()
        .map(ItemId::Number)
        .map_err(|_| ValidationError::IdOutOfRange(input.to_string()))
}

/// True for a non-empty string of ASCII digits
pub fn is_all_digits(s: &str) -> bool {
    !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
}
