use super::store::CatalogStore;
use super::types::{Book, BookId};

use anyhow::{Context, Result};
use async_trait::async_trait;
use dashmap::DashMap;
use std::path::Path;

/// In-memory catalog keyed by book id.
///
/// Records are written while the catalog is being loaded and only read afterwards,
/// so `DashMap` shard locks are the only synchronization involved.
pub struct MemoryCatalog {
    books: DashMap<BookId, Book>,
}

impl MemoryCatalog {
    pub fn new() -> Self {
        Self {
            books: DashMap::new(),
        }
    }

    pub fn from_books(books: impl IntoIterator<Item = Book>) -> Self {
        let catalog = Self::new();
        for book in books {
            catalog.insert(book);
        }
        catalog
    }

    /// Loads a catalog from a JSON array of books.
    ///
    /// When the file repeats an id, the last record wins.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path)
            .with_context(|| format!("failed to read catalog file {}", path.display()))?;
        let books: Vec<Book> = serde_json::from_str(&raw)
            .with_context(|| format!("failed to parse catalog file {}", path.display()))?;

        let catalog = Self::from_books(books);
        tracing::info!(
            "Loaded {} books from {}",
            catalog.len(),
            path.display()
        );
        Ok(catalog)
    }

    /// Loads the configured catalog file, or the sample catalog when none is set.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::from_json_file(path),
            None => {
                tracing::info!("No catalog file configured, using the built-in sample");
                Ok(Self::sample())
            }
        }
    }

    /// Small built-in catalog used when no catalog file is configured.
    pub fn sample() -> Self {
        Self::from_books([
            Book::new(1, "Dom Casmurro", "Machado de Assis", "Romance"),
            Book::new(2, "O Cortiço", "Aluísio Azevedo", "Naturalismo"),
            Book::new(3, "Grande Sertão: Veredas", "João Guimarães Rosa", "Romance"),
            Book::new(4, "Vidas Secas", "Graciliano Ramos", "Romance"),
            Book::new(5, "A Hora da Estrela", "Clarice Lispector", "Romance"),
            Book::new(6, "Memórias Póstumas de Brás Cubas", "Machado de Assis", "Romance"),
        ])
    }

    /// Inserts or replaces a record.
    pub fn insert(&self, book: Book) {
        self.books.insert(book.id, book);
    }

    pub fn len(&self) -> usize {
        self.books.len()
    }

    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }
}

impl Default for MemoryCatalog {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CatalogStore for MemoryCatalog {
    async fn lookup(&self, id: BookId) -> Result<Option<Book>> {
        Ok(self.books.get(&id).map(|entry| entry.value().clone()))
    }

    async fn search_by_title(&self, name: &str) -> Result<Vec<Book>> {
        let needle = name.to_lowercase();

        let mut matches: Vec<Book> = self
            .books
            .iter()
            .filter(|entry| entry.value().title.to_lowercase().contains(&needle))
            .map(|entry| entry.value().clone())
            .collect();

        matches.sort_by_key(|book| book.id);
        Ok(matches)
    }
}
