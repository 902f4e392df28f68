//! @acp:module "Catalog Types"
//! @acp:summary "Catalog entries with lazy field validation"
//! @acp:domain cli
//! @acp:layer model
//!
//! Catalog types

use serde::{Deserialize, Serialize};

use crate::error::{OnePagerError, Result};

/// A catalog entry as stored on disk.
///
/// Required fields are optional here so that one malformed entry only fails
/// the run if it is the one chosen.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct RawCatalogEntry {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub author: Option<String>,
    #[serde(default)]
    pub gutenberg_url: Option<String>,
    #[serde(default)]
    pub cover: Option<String>,
}

/// A validated book
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CatalogEntry {
    pub title: String,
    pub author: String,
    pub gutenberg_url: String,
    pub cover: Option<String>,
}

impl CatalogEntry {
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        gutenberg_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            gutenberg_url: gutenberg_url.into(),
            cover: None,
        }
    }

    pub fn with_cover(mut self, cover: impl Into<String>) -> Self {
        self.cover = Some(cover.into());
        self
    }
}

impl RawCatalogEntry {
    /// Check required fields; `index` is only used in the error
    pub fn validate(&self, index: usize) -> Result<CatalogEntry> {
        let require = |value: &Option<String>, field: &'static str| {
            value
                .clone()
                .ok_or(OnePagerError::MissingField { index, field })
        };

        Ok(CatalogEntry {
            title: require(&self.title, "title")?,
            author: require(&self.author, "author")?,
            gutenberg_url: require(&self.gutenberg_url, "gutenberg_url")?,
            cover: self.cover.clone(),
        })
    }
}
