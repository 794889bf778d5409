use crate::catalog::types::BookId;
use std::fmt;

/// Result of simulating the reading of one requested book.
///
/// Callers only ever see the rendered text; the variant exists so the engine and
/// its tests can reason about outcomes without parsing strings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ReadingOutcome {
    /// Lookup returned no record, or the store failed.
    NotFound { book_id: BookId },
    /// The book was found and its reading time elapsed.
    Completed { book_id: BookId, title: String },
}

impl ReadingOutcome {
    pub fn book_id(&self) -> BookId {
        match self {
            ReadingOutcome::NotFound { book_id } => *book_id,
            ReadingOutcome::Completed { book_id, .. } => *book_id,
        }
    }

    pub fn is_completed(&self) -> bool {
        matches!(self, ReadingOutcome::Completed { .. })
    }
}

impl fmt::Display for ReadingOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ReadingOutcome::NotFound { book_id } => {
                write!(f, "Livro com ID {} não encontrado.", book_id)
            }
            ReadingOutcome::Completed { title, .. } => {
                write!(f, "Leitura do livro '{}' concluída!", title)
            }
        }
    }
}
