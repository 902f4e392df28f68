//! @acp:module "Catalog Loader"
//! @acp:summary "JSON catalog loading and entry choice"
//! @acp:domain cli
//! @acp:layer io
//!
//! Catalog loading

use std::path::Path;

use super::chooser::Chooser;
use super::types::{CatalogEntry, RawCatalogEntry};
use crate::error::{OnePagerError, Result};

/// The list of candidate books, read once per run
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    entries: Vec<RawCatalogEntry>,
}

impl Catalog {
    pub fn new(entries: Vec<RawCatalogEntry>) -> Self {
        Self { entries }
    }

    /// Read a JSON array of entries
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        Self::from_json(&content)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        let entries: Vec<RawCatalogEntry> = serde_json::from_str(json)?;
        Ok(Self::new(entries))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Validated entry at `index`
    pub fn get(&self, index: usize) -> Option<Result<CatalogEntry>> {
        self.entries.get(index).map(|raw| raw.validate(index))
    }

    /// Let `chooser` pick today's book and validate it
    pub fn choose(&self, chooser: &mut dyn Chooser) -> Result<CatalogEntry> {
        let index = chooser
            .choose(self.entries.len())
            .ok_or_else(|| OnePagerError::NoBook("no books to choose from".to_string()))?;

        let entry = self
            .get(index)
            .ok_or_else(|| OnePagerError::NoBook(format!("no book at index {}", index)))??;
        tracing::info!("Chose '{}' by {} (entry {})", entry.title, entry.author, index);
        Ok(entry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::chooser::FixedChooser;
    use tempfile::TempDir;

    const BOOKS: &str = r#"[
        {"title": "Meditations", "author": "Marcus Aurelius", "gutenberg_url": "https://example.org/2680.txt"},
        {"title": "Broken"},
        {"title": "The Art of War", "author": "Sun Tzu", "gutenberg_url": "https://example.org/132.txt", "cover": "art-of-war.jpg"}
    ]"#;

    #[test]
    fn test_load_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("books.json");
        std::fs::write(&path, BOOKS).unwrap();

        let catalog = Catalog::load(&path).unwrap();
        assert_eq!(catalog.len(), 3);
    }

    #[test]
    fn test_choose_valid_entry() {
        let catalog = Catalog::from_json(BOOKS).unwrap();
        let entry = catalog.choose(&mut FixedChooser(2)).unwrap();
        assert_eq!(entry.title, "The Art of War");
        assert_eq!(entry.cover.as_deref(), Some("art-of-war.jpg"));
    }

    #[test]
    fn test_malformed_entry_fails_only_when_chosen() {
        let catalog = Catalog::from_json(BOOKS).unwrap();
        assert!(catalog.choose(&mut FixedChooser(0)).is_ok());
        assert!(matches!(
            catalog.choose(&mut FixedChooser(1)),
            Err(OnePagerError::MissingField { index: 1, field: "author" })
        ));
    }

    #[test]
    fn test_empty_catalog_is_an_error() {
        let catalog = Catalog::from_json("[]").unwrap();
        assert!(catalog.is_empty());
        assert!(matches!(
            catalog.choose(&mut FixedChooser(0)),
            Err(OnePagerError::NoBook(_))
        ));
    }

    #[test]
    fn test_not_an_array_is_an_error() {
        assert!(matches!(
            Catalog::from_json(r#"{"title": "x"}"#),
            Err(OnePagerError::Json(_))
        ));
    }
}
