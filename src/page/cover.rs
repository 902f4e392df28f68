//! @acp:module "Cover Lookup"
//! @acp:summary "Local cover image presence check"
//! @acp:domain cli
//! @acp:layer io
//!
//! Cover image lookup
//!
//! Covers are never downloaded. A cover is shown only if its file already
//! sits in the covers directory next to the page.

use std::path::Path;

use serde::Serialize;

/// A cover reference relative to the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CoverImage {
    /// Path used in the `src` attribute, always `/`-separated
    pub rel_path: String,
    /// Whether the file exists on disk
    pub present: bool,
}

impl CoverImage {
    /// Resolve `file` (or `placeholder` when the book has no cover) under `out_dir/covers_dir`
    pub fn resolve(out_dir: &Path, covers_dir: &str, file: Option<&str>, placeholder: &str) -> Self {
        let file = file.unwrap_or(placeholder);
        let present = out_dir.join(covers_dir).join(file).is_file();
        if !present {
            tracing::warn!("Cover {:?} not found in {:?}", file, out_dir.join(covers_dir));
        }

        Self {
            rel_path: format!("{}/{}", covers_dir.trim_end_matches('/'), file),
            present,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_existing_cover() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("covers")).unwrap();
        std::fs::write(dir.path().join("covers/walden.jpg"), b"jpg").unwrap();

        let cover = CoverImage::resolve(dir.path(), "covers", Some("walden.jpg"), "placeholder.jpg");
        assert_eq!(
            cover,
            CoverImage {
                rel_path: "covers/walden.jpg".to_string(),
                present: true
            }
        );
    }

    #[test]
    fn test_missing_cover_falls_back_to_placeholder_name() {
        let dir = TempDir::new().unwrap();
        let cover = CoverImage::resolve(dir.path(), "covers/", None, "placeholder.jpg");
        assert_eq!(cover.rel_path, "covers/placeholder.jpg");
        assert!(!cover.present);
    }

    #[test]
    fn test_placeholder_file_counts_as_present() {
        let dir = TempDir::new().unwrap();
        std::fs::create_dir_all(dir.path().join("covers")).unwrap();
        std::fs::write(dir.path().join("covers/placeholder.jpg"), b"jpg").unwrap();

        let cover = CoverImage::resolve(dir.path(), "covers", None, "placeholder.jpg");
        assert!(cover.present);
    }
}
