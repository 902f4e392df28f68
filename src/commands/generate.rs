//! @acp:module "Generate Command"
//! @acp:summary "Fetch, extract and render today's one-pager"
//! @acp:domain cli
//! @acp:layer handler
//!
//! Generate Command
//!
//! Picks today's book, downloads it, extracts the excerpt and writes the
//! page. Every fallible step runs before the page is touched, so a failed run
//! leaves yesterday's page in place.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use chrono::NaiveDate;
use serde::Serialize;

use crate::catalog::{chooser_for, Catalog, CatalogEntry, Chooser};
use crate::config::Config;
use crate::excerpt::extract_excerpt;
use crate::fetch::{HttpSource, TextSource};
use crate::page::{CoverImage, PageRenderer};

/// Summary of one generated page
#[derive(Debug, Clone, Serialize)]
pub struct GenerateReport {
    pub book: CatalogEntry,
    pub section_title: String,
    pub words: usize,
    pub fallback: bool,
    pub cover_present: bool,
    pub output: PathBuf,
}

/// Run with the real network, the configured seed and today's local date
pub fn execute_generate(config: &Config) -> Result<GenerateReport> {
    let mut chooser = chooser_for(config.seed);
    let source = HttpSource::new(&config.fetch);
    let today = chrono::Local::now().date_naive();
    generate_page(config, chooser.as_mut(), &source, today)
}

/// Generate the page with injected collaborators
pub fn generate_page(
    config: &Config,
    chooser: &mut dyn Chooser,
    source: &dyn TextSource,
    date: NaiveDate,
) -> Result<GenerateReport> {
    let catalog = Catalog::load(&config.books_file)
        .with_context(|| format!("Failed to load catalog from {:?}", config.books_file))?;
    let book = catalog.choose(chooser).context("Failed to choose a book")?;

    let raw = source
        .fetch(&book.gutenberg_url)
        .with_context(|| format!("Failed to download '{}'", book.title))?;

    let excerpt = extract_excerpt(&raw, &config.selection);
    drop(raw);

    fs::create_dir_all(config.covers_path())
        .with_context(|| format!("Failed to create {:?}", config.covers_path()))?;

    let cover = CoverImage::resolve(
        &config.out_dir,
        &config.covers_dir,
        book.cover.as_deref(),
        &config.placeholder_cover,
    );

    let html = PageRenderer::new()?
        .render(date, &book, &excerpt, &cover)
        .context("Failed to render page")?;

    let output = config.page_path();
    write_atomic(&output, &html).with_context(|| format!("Failed to write {:?}", output))?;
    tracing::info!("Wrote {} bytes to {:?}", html.len(), output);

    Ok(GenerateReport {
        section_title: excerpt.title.clone(),
        words: excerpt.word_count(),
        fallback: excerpt.is_fallback(),
        cover_present: cover.present,
        book,
        output,
    })
}

/// Write through a sibling temporary file so readers never see a partial page
fn write_atomic(path: &Path, content: &str) -> std::io::Result<()> {
    let mut tmp = path.as_os_str().to_owned();
    tmp.push(".tmp");
    let tmp = PathBuf::from(tmp);

    let result = fs::write(&tmp, content).and_then(|()| fs::rename(&tmp, path));
    if result.is_err() {
        let _ = fs::remove_file(&tmp);
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_write_atomic_replaces_content() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("index.html");
        fs::write(&path, "old").unwrap();

        write_atomic(&path, "new").unwrap();
        assert_eq!(fs::read_to_string(&path).unwrap(), "new");
        assert!(!dir.path().join("index.html.tmp").exists());
    }

    #[test]
    fn test_write_atomic_failed_rename_leaves_no_temp_file() {
        let dir = TempDir::new().unwrap();
        // A non-empty directory at the target path makes the rename fail
        let path = dir.path().join("index.html");
        fs::create_dir_all(path.join("occupied")).unwrap();

        assert!(write_atomic(&path, "new").is_err());
        assert!(!dir.path().join("index.html.tmp").exists());
        assert!(path.join("occupied").is_dir());
    }
}
