//! Interactive menu loop over an in-memory catalog.
//!
//! The session owns the catalog for its whole lifetime. Each menu action
//! returns an [`Outcome`]; a cancelled prompt unwinds to the menu by plain
//! return values.

use std::io::Write;

use anyhow::Result;
use tracing::info;

use super::prompt::{LineSource, Prompter};
use crate::config::ResolvedConfig;
use crate::library::validate::{self, ValidationError};
use crate::library::{Catalog, ItemKind, LibraryItem};

const MENU: &str = "\n[1. Add Item | 2. Remove Item | 3. View Catalog]\nChoice: ";

/// How a menu action ended
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Done,
    Cancelled,
}

/// Which action a search feeds
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum SearchMode {
    View,
    Remove,
}

/// An interactive catalog session
pub struct Session<S, W> {
    catalog: Catalog,
    prompter: Prompter<S, W>,
    suggest_ids: bool,
}

impl<S: LineSource, W: Write> Session<S, W> {
    /// Create a session with an empty catalog
    pub fn new(source: S, out: W, config: &ResolvedConfig) -> Self {
        Self::with_catalog(Catalog::new(), source, out, config)
    }

    /// Create a session over an existing catalog
    pub fn with_catalog(catalog: Catalog, source: S, out: W, config: &ResolvedConfig) -> Self {
        Self {
            catalog,
            prompter: Prompter::new(source, out, config.cancel_token.clone()),
            suggest_ids: config.suggest_ids,
        }
    }

    pub fn catalog(&self) -> &Catalog {
        &self.catalog
    }

    /// Tear down the session, returning the catalog and output sink
    pub fn into_parts(self) -> (Catalog, W) {
        (self.catalog, self.prompter.into_output())
    }

    /// Run the menu loop until the user cancels at the menu or input ends
    pub async fn run(&mut self) -> Result<()> {
        self.prompter.say("=== Generic Library Catalog System ===")?;
        let note = format!(
            "Note: Enter '{}' at any prompt to cancel/return.",
            self.prompter.cancel_token()
        );
        self.prompter.say(note)?;

        loop {
            let Some(choice) = self.prompter.ask_line(MENU).await?.value() else {
                break;
            };

            let outcome = match choice.as_str() {
                "1" => self.add_item().await?,
                "2" => self.remove_item().await?,
                "3" => self.view_items().await?,
                _ => {
                    self.prompter.say("Invalid selection. Please choose 1-3.")?;
                    continue;
                }
            };

            if outcome == Outcome::Cancelled {
                info!("Operation cancelled");
                self.prompter.say(">> Operation Cancelled.")?;
            }
        }

        self.prompter.say("Application Terminated.")?;
        Ok(())
    }

    /// Collect and validate a new item, then add it to the catalog
    pub async fn add_item(&mut self) -> Result<Outcome> {
        loop {
            let Some(kind) = self
                .prompter
                .ask("\nItem Type (1=Book, 2=DVD, 3=Magazine): ", validate::kind)
                .await?
                .value()
            else {
                return Ok(Outcome::Cancelled);
            };

            let Some(title) = self
                .prompter
                .ask("Item Title: ", |s| validate::title(s).map(str::to_string))
                .await?
                .value()
            else {
                return Ok(Outcome::Cancelled);
            };

            let Some(author) = self
                .prompter
                .ask("Author (3+ letters): ", |s| {
                    validate::author(s).map(str::to_string)
                })
                .await?
                .value()
            else {
                return Ok(Outcome::Cancelled);
            };

            if self.catalog.is_content_duplicate(kind, &title, &author) {
                info!(%kind, %title, %author, "Duplicate content rejected");
                self.prompter.say(">> Duplicate Content exists. Restarting...")?;
                continue;
            }

            return self.add_with_id(kind, title, author).await;
        }
    }

    async fn add_with_id(
        &mut self,
        kind: ItemKind,
        title: String,
        author: String,
    ) -> Result<Outcome> {
        loop {
            if self.suggest_ids {
                let suggestion = format!(">> Suggested ID: {}", self.catalog.suggest_next_id());
                self.prompter.say(suggestion)?;
            }

            let Some(raw) = self
                .prompter
                .ask("Unique ID: ", |s| validate::required_id(s).map(str::to_string))
                .await?
                .value()
            else {
                return Ok(Outcome::Cancelled);
            };

            // "007" becomes DVD 7, so the parsed id is checked as well
            let id = if self.catalog.is_id_occupied(&raw) {
                Err(ValidationError::IdTaken)
            } else {
                validate::identifier(kind, &raw).and_then(|id| {
                    if self.catalog.is_id_occupied(&id.to_text()) {
                        Err(ValidationError::IdTaken)
                    } else {
                        Ok(id)
                    }
                })
            };

            match id {
                Ok(id) => {
                    let item = LibraryItem::new(kind, id, title, author);
                    info!(%kind, id = %item.id(), "Item added");
                    self.catalog.add(item);
                    self.prompter.say(">> Success: Item added.")?;
                    return Ok(Outcome::Done);
                }
                Err(reason) => self.prompter.say(format!(">> Error: {}", reason))?,
            }
        }
    }

    /// Show all items matching a query
    pub async fn view_items(&mut self) -> Result<Outcome> {
        self.search_items(SearchMode::View).await
    }

    /// Remove one item chosen among the matches of a query
    pub async fn remove_item(&mut self) -> Result<Outcome> {
        self.search_items(SearchMode::Remove).await
    }

    async fn search_items(&mut self, mode: SearchMode) -> Result<Outcome> {
        if self.catalog.is_empty() {
            self.prompter.say("\nCatalog is EMPTY.")?;
            return Ok(Outcome::Done);
        }

        let message = match mode {
            SearchMode::Remove => "Enter ID/Title to Remove: ",
            SearchMode::View => "Search (-b/-d/-m): ",
        };
        let Some(query) = self.prompter.ask_line(message).await?.value() else {
            return Ok(Outcome::Cancelled);
        };

        let matches: Vec<LibraryItem> = self.catalog.search(&query).into_iter().cloned().collect();

        if matches.is_empty() {
            self.prompter.say("No matching items found.")?;
            return Ok(Outcome::Done);
        }

        if mode == SearchMode::View {
            self.prompter.say(format!("Found {} matches:", matches.len()))?;
            for item in &matches {
                self.prompter.say(item)?;
            }
            return Ok(Outcome::Done);
        }

        let index = if matches.len() == 1 {
            0
        } else {
            self.prompter.say(format!(
                "Found {} matches. Select one to remove:",
                matches.len()
            ))?;
            for (i, item) in matches.iter().enumerate() {
                self.prompter.say(format!("{}. {}", i + 1, item))?;
            }

            let count = matches.len();
            let Some(index) = self
                .prompter
                .ask("Enter # to delete: ", |s| validate::selection(s, count))
                .await?
                .value()
            else {
                return Ok(Outcome::Cancelled);
            };
            index
        };

        let target = &matches[index];
        if let Some(removed) = self.catalog.remove(target) {
            info!(kind = %removed.kind(), id = %removed.id(), "Item removed");
            self.prompter.say(format!(">> Removed: {}", removed))?;
        }

        Ok(Outcome::Done)
    }
}
