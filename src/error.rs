//! @acp:module "Errors"
//! @acp:summary "Library error types and result alias"
//! @acp:domain cli
//! @acp:layer types
//!
//! Error types
//!
//! Library-level failures. Degenerate text is never an error: the excerpt
//! pipeline always produces something, so everything here is about I/O,
//! the catalog, the download, or the page template.

use thiserror::Error;

/// Errors surfaced by the one-pager library
#[derive(Debug, Error)]
pub enum OnePagerError {
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Catalog has no book to choose: {0}")]
    NoBook(String),

    #[error("Catalog entry {index} is missing required field '{field}'")]
    MissingField { index: usize, field: &'static str },

    #[error("Failed to fetch {url}: {message}")]
    Fetch { url: String, message: String },

    #[error("Fetch of {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Template error: {0}")]
    Template(#[from] Box<handlebars::TemplateError>),

    #[error("Render error: {0}")]
    Render(#[from] Box<handlebars::RenderError>),
}

impl From<handlebars::TemplateError> for OnePagerError {
    fn from(err: handlebars::TemplateError) -> Self {
        OnePagerError::Template(Box::new(err))
    }
}

impl From<handlebars::RenderError> for OnePagerError {
    fn from(err: handlebars::RenderError) -> Self {
        OnePagerError::Render(Box::new(err))
    }
}

/// Result alias for library operations
pub type Result<T> = std::result::Result<T, OnePagerError>;
