use serde::{Deserialize, Serialize};

/// Identifier of a book record.
pub type BookId = i64;

/// A single book record as stored in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct Book {
    pub id: BookId,
    pub title: String,
    pub author: String,
    pub genre: String,
}

impl Book {
    pub fn new(id: BookId, title: &str, author: &str, genre: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            author: author.to_string(),
            genre: genre.to_string(),
        }
    }
}
