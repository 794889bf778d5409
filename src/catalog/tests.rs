//! Catalog Module Tests
//!
//! ## Test Scopes
//! - **MemoryCatalog**: lookup hits and misses, replacement on insert, title search.
//! - **Loading**: JSON catalog files, including malformed input.

#[cfg(test)]
mod tests {
    use crate::catalog::memory::MemoryCatalog;
    use crate::catalog::store::CatalogStore;
    use crate::catalog::types::Book;
    use std::io::Write;

    // ============================================================
    // TEST 1: MemoryCatalog - lookup and insert
    // ============================================================

    #[tokio::test]
    async fn test_lookup_existing_book() {
        // ARRANGE
        let catalog = MemoryCatalog::from_books([Book::new(7, "Iracema", "José de Alencar", "Romance")]);

        // ACT
        let book = catalog.lookup(7).await.unwrap();

        // ASSERT
        assert_eq!(book, Some(Book::new(7, "Iracema", "José de Alencar", "Romance")));
    }

    #[tokio::test]
    async fn test_lookup_missing_book_is_none() {
        let catalog = MemoryCatalog::sample();

        assert!(catalog.lookup(9_999).await.unwrap().is_none());
        assert!(catalog.lookup(-1).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_insert_replaces_same_id() {
        // ARRANGE
        let catalog = MemoryCatalog::new();

        // ACT: Second insert with the same id replaces the first
        catalog.insert(Book::new(1, "Old Title", "A", "G"));
        catalog.insert(Book::new(1, "New Title", "A", "G"));

        // ASSERT
        assert_eq!(catalog.len(), 1);
        assert_eq!(catalog.lookup(1).await.unwrap().unwrap().title, "New Title");
    }

    #[test]
    fn test_sample_catalog_is_not_empty() {
        let catalog = MemoryCatalog::sample();
        assert!(!catalog.is_empty());
        assert!(MemoryCatalog::default().is_empty());
    }

    // ============================================================
    // TEST 2: MemoryCatalog - title search
    // ============================================================

    #[tokio::test]
    async fn test_search_is_case_insensitive_substring() {
        // ARRANGE
        let catalog = MemoryCatalog::sample();

        // ACT
        let books = catalog.search_by_title("CASMURRO").await.unwrap();

        // ASSERT
        assert_eq!(books.len(), 1);
        assert_eq!(books[0].id, 1);
    }

    #[tokio::test]
    async fn test_search_results_ordered_by_id() {
        // ARRANGE: Inserted out of order, one non-matching title
        let catalog = MemoryCatalog::from_books([
            Book::new(30, "Rust in Action", "T. McNamara", "Tech"),
            Book::new(10, "Programming Rust", "J. Blandy", "Tech"),
            Book::new(20, "Zero to Production in Rust", "L. Palmieri", "Tech"),
            Book::new(40, "Go in Practice", "M. Butcher", "Tech"),
        ]);

        // ACT
        let ids: Vec<i64> = catalog
            .search_by_title("rust")
            .await
            .unwrap()
            .into_iter()
            .map(|book| book.id)
            .collect();

        // ASSERT: Only titles containing "rust", sorted by id
        assert_eq!(ids, vec![10, 20, 30]);
    }

    #[tokio::test]
    async fn test_search_no_match() {
        let catalog = MemoryCatalog::sample();
        assert!(catalog.search_by_title("nonexistent").await.unwrap().is_empty());
    }

    // ============================================================
    // TEST 3: MemoryCatalog - JSON loading
    // ============================================================

    #[tokio::test]
    async fn test_from_json_file() {
        // ARRANGE: Id 1 appears twice
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(
            file,
            r#"[
                {{"id": 1, "title": "First", "author": "A", "genre": "X"}},
                {{"id": 2, "title": "Second", "author": "B", "genre": "Y"}},
                {{"id": 1, "title": "First (revised)", "author": "A", "genre": "X"}}
            ]"#
        )
        .unwrap();

        // ACT
        let catalog = MemoryCatalog::from_json_file(file.path()).unwrap();

        // ASSERT: Last record wins
        assert_eq!(catalog.len(), 2);
        assert_eq!(catalog.lookup(1).await.unwrap().unwrap().title, "First (revised)");
        assert_eq!(catalog.lookup(2).await.unwrap().unwrap().author, "B");
    }

    #[test]
    fn test_from_json_file_rejects_malformed() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        write!(file, r#"{{"id": "not a list"}}"#).unwrap();

        let err = MemoryCatalog::from_json_file(file.path()).err().unwrap();
        assert!(err.to_string().contains("failed to parse catalog file"));
    }

    #[test]
    fn test_from_json_file_missing_file() {
        let err = MemoryCatalog::from_json_file("/definitely/not/here.json")
            .err()
            .unwrap();
        assert!(err.to_string().contains("failed to read catalog file"));
    }
}
