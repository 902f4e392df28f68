//! @acp:module "Catalog"
//! @acp:summary "Curated public-domain book list and daily choice"
//! @acp:domain cli
//! @acp:layer service
//!
//! Catalog
//!
//! The curated list of public-domain books and the daily choice among them.

pub mod chooser;
pub mod loader;
pub mod types;

pub use chooser::{chooser_for, Chooser, FixedChooser, RandomChooser, SeededChooser};
pub use loader::Catalog;
pub use types::{CatalogEntry, RawCatalogEntry};
