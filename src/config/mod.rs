//! @acp:module "Configuration"
//! @acp:summary "Run configuration loading and defaults"
//! @acp:domain cli
//! @acp:layer config
//!
//! Configuration
//!
//! Run configuration loading and defaults. Every field has a default, so a
//! missing config file means "use the built-in layout": `books.json` in the
//! working directory and the page under `docs/`.

use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::excerpt::SelectionConfig;

/// Default config file looked up in the working directory
pub const DEFAULT_CONFIG_FILE: &str = "onepager.config.json";

/// Main run configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Catalog file (JSON array of books)
    #[serde(default = "default_books_file")]
    pub books_file: PathBuf,

    /// Directory the page is written into
    #[serde(default = "default_out_dir")]
    pub out_dir: PathBuf,

    /// Covers directory, relative to `out_dir`
    #[serde(default = "default_covers_dir")]
    pub covers_dir: String,

    /// Page filename inside `out_dir`
    #[serde(default = "default_page_file")]
    pub page_file: String,

    /// Cover filename used when a catalog entry has none
    #[serde(default = "default_placeholder_cover")]
    pub placeholder_cover: String,

    /// Download settings
    #[serde(default)]
    pub fetch: FetchConfig,

    /// Excerpt scoring and trimming tunables
    #[serde(default)]
    pub selection: SelectionConfig,

    /// Fixed seed for the catalog choice (random when unset)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seed: Option<u64>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            books_file: default_books_file(),
            out_dir: default_out_dir(),
            covers_dir: default_covers_dir(),
            page_file: default_page_file(),
            placeholder_cover: default_placeholder_cover(),
            fetch: FetchConfig::default(),
            selection: SelectionConfig::default(),
            seed: None,
        }
    }
}

impl Config {
    /// Load config from a JSON file
    pub fn load<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Ok(serde_json::from_str(&content)?)
    }

    /// Save config to a file
    pub fn save<P: AsRef<Path>>(&self, path: P) -> crate::Result<()> {
        let content = serde_json::to_string_pretty(self)?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Load from the given path if it exists, otherwise fall back to defaults
    pub fn load_or_default<P: AsRef<Path>>(path: P) -> crate::Result<Self> {
        let path = path.as_ref();
        if path.exists() {
            Self::load(path)
        } else {
            tracing::debug!("No config at {:?}, using defaults", path);
            Ok(Self::default())
        }
    }

    /// Full path of the generated page
    pub fn page_path(&self) -> PathBuf {
        self.out_dir.join(&self.page_file)
    }

    /// Full path of the covers directory
    pub fn covers_path(&self) -> PathBuf {
        self.out_dir.join(&self.covers_dir)
    }
}

fn default_books_file() -> PathBuf {
    PathBuf::from("books.json")
}

fn default_out_dir() -> PathBuf {
    PathBuf::from("docs")
}

fn default_covers_dir() -> String {
    "covers".to_string()
}

fn default_page_file() -> String {
    "index.html".to_string()
}

fn default_placeholder_cover() -> String {
    "placeholder.jpg".to_string()
}

/// Download settings
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct FetchConfig {
    /// Whole-request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,

    /// User-Agent header sent with the request
    #[serde(default = "default_user_agent")]
    pub user_agent: String,

    /// Upper bound on the downloaded body
    #[serde(default = "default_max_bytes")]
    pub max_bytes: u64,
}

impl Default for FetchConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            user_agent: default_user_agent(),
            max_bytes: default_max_bytes(),
        }
    }
}

impl FetchConfig {
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }
}

fn default_timeout_secs() -> u64 {
    60
}

fn default_user_agent() -> String {
    format!("daily-onepager/{}", env!("CARGO_PKG_VERSION"))
}

fn default_max_bytes() -> u64 {
    16 * 1024 * 1024
}
