#![forbid(unsafe_code)]

//! @acp:module "Daily One-Pager Library"
//! @acp:summary "Daily reading page generator for public-domain books"
//! @acp:domain cli
//! @acp:layer api
//! @acp:stability stable
//!
//! # Daily One-Pager
//!
//! Picks a public-domain book from a curated catalog, downloads its plain
//! text, extracts one representative excerpt and renders it as a static
//! HTML page.
//!
//! ## Pipeline
//!
//! - **Strip**: drop the Project Gutenberg header and license
//! - **Normalize**: collapse blank lines and horizontal whitespace
//! - **Segment**: split on chapter headings, or on dashed separators
//! - **Select**: score sections, trim the winner to a word budget
//! - **Render**: fill the page template
//!
//! ## Example
//!
//! ```rust,no_run
//! use onepager::excerpt::{extract_excerpt, SelectionConfig};
//!
//! let raw = std::fs::read_to_string("walden.txt")?;
//! let excerpt = extract_excerpt(&raw, &SelectionConfig::default());
//! println!("{}\n\n{}", excerpt.title, excerpt.content);
//! # Ok::<(), std::io::Error>(())
//! ```

pub mod catalog;
pub mod commands;
pub mod config;
pub mod error;
pub mod excerpt;
pub mod fetch;
pub mod page;

// Re-exports
pub use catalog::{Catalog, CatalogEntry, Chooser};
pub use config::Config;
pub use error::{OnePagerError, Result};
pub use excerpt::{extract_excerpt, Excerpt, Section, SelectionConfig};
pub use fetch::{HttpSource, TextSource};
pub use page::{render_page, CoverImage, PageRenderer};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
