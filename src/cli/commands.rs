use crate::catalog::store::CatalogStore;
use crate::catalog::types::BookId;
use crate::simulation::engine::SimulationEngine;

use anyhow::Result;
use std::io::Write;
use std::sync::Arc;
use std::time::Duration;

/// Identifier tokens split into the ones that parsed and the ones that did not.
#[derive(Debug, Default, PartialEq, Eq)]
pub struct ParsedIds {
    pub ids: Vec<BookId>,
    pub rejected: Vec<String>,
}

/// Parses raw tokens into book ids, keeping the input order of the valid ones.
pub fn parse_book_ids<S: AsRef<str>>(tokens: &[S]) -> ParsedIds {
    let mut parsed = ParsedIds::default();
    for token in tokens {
        let token = token.as_ref();
        match token.parse::<BookId>() {
            Ok(id) => parsed.ids.push(id),
            Err(_) => parsed.rejected.push(token.to_string()),
        }
    }
    parsed
}

/// Runs the one-shot CLI commands against a catalog and a simulation engine.
pub struct BookCli {
    catalog: Arc<dyn CatalogStore>,
    engine: SimulationEngine,
    reading_duration: Duration,
}

impl BookCli {
    pub fn new(
        catalog: Arc<dyn CatalogStore>,
        engine: SimulationEngine,
        reading_duration: Duration,
    ) -> Self {
        Self {
            catalog,
            engine,
            reading_duration,
        }
    }

    /// Prints the books whose title contains `name`.
    ///
    /// A failing store is reported to the user, not returned as an error.
    pub async fn search<W: Write>(&self, name: &str, out: &mut W) -> Result<()> {
        let books = match self.catalog.search_by_title(name).await {
            Ok(books) => books,
            Err(e) => {
                tracing::error!("Search for '{}' failed: {}", name, e);
                writeln!(out, "Erro ao buscar livros: {}", e)?;
                return Ok(());
            }
        };

        if books.is_empty() {
            writeln!(out, "Nenhum livro encontrado com o nome: {}", name)?;
            return Ok(());
        }

        writeln!(out, "Encontrado(s) {} livro(s):", books.len())?;
        for book in books {
            writeln!(
                out,
                "ID: {}, Título: {}, Autor: {}, Gênero: {}",
                book.id, book.title, book.author, book.genre
            )?;
        }
        Ok(())
    }

    /// Simulates reading the books named by `tokens` and prints one line per valid id,
    /// in completion order.
    pub async fn simulate<S: AsRef<str>, W: Write>(&self, tokens: &[S], out: &mut W) -> Result<()> {
        let ParsedIds { ids, rejected } = parse_book_ids(tokens);

        for token in &rejected {
            tracing::warn!("Skipping invalid book id '{}'", token);
            writeln!(out, "ID de livro inválido: {}", token)?;
        }

        let results = self
            .engine
            .simulate_multiple(&ids, self.reading_duration)
            .await;

        for line in results {
            writeln!(out, "{}", line)?;
        }
        Ok(())
    }
}
