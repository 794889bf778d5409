//! Catalog Store Interface
//!
//! The read-only contract between the simulation engine (and the CLI) and whatever
//! holds the book records. Implementations own their synchronization: the engine
//! shares one handle across every task it spawns and never locks around it.

use super::types::{Book, BookId};

use anyhow::Result;
use async_trait::async_trait;

#[async_trait]
pub trait CatalogStore: Send + Sync {
    /// Looks up a single record.
    ///
    /// # Returns
    /// * `Ok(Some(book))` if the record exists.
    /// * `Ok(None)` if no record has this id.
    /// * `Err` if the backend could not answer.
    async fn lookup(&self, id: BookId) -> Result<Option<Book>>;

    /// Returns every record whose title contains `name`, ignoring case, ordered by id.
    async fn search_by_title(&self, name: &str) -> Result<Vec<Book>>;
}
