//! @acp:module "Fetch"
//! @acp:summary "Blocking plain-text download with size cap"
//! @acp:domain cli
//! @acp:layer io
//!
//! Text download
//!
//! One blocking GET per run. No retries: any failure ends the run before
//! anything is written.

use std::io::Read;

use crate::config::FetchConfig;
use crate::error::{OnePagerError, Result};

/// Somewhere a book's plain text can be read from
pub trait TextSource {
    fn fetch(&self, url: &str) -> Result<String>;
}

/// HTTP source backed by a blocking `ureq` agent
pub struct HttpSource {
    agent: ureq::Agent,
    max_bytes: u64,
}

impl HttpSource {
    pub fn new(config: &FetchConfig) -> Self {
        let agent = ureq::AgentBuilder::new()
            .timeout(config.timeout())
            .user_agent(&config.user_agent)
            .build();
        Self {
            agent,
            max_bytes: config.max_bytes,
        }
    }
}

impl TextSource for HttpSource {
    fn fetch(&self, url: &str) -> Result<String> {
        tracing::info!("Fetching {}", url);

        let response = self.agent.get(url).call().map_err(|err| match err {
            ureq::Error::Status(status, _) => OnePagerError::HttpStatus {
                url: url.to_string(),
                status,
            },
            ureq::Error::Transport(transport) => OnePagerError::Fetch {
                url: url.to_string(),
                message: transport.to_string(),
            },
        })?;

        let status = response.status();
        if !(200..300).contains(&status) {
            return Err(OnePagerError::HttpStatus {
                url: url.to_string(),
                status,
            });
        }

        let (bytes, truncated) = read_capped(response.into_reader(), self.max_bytes)
            .map_err(|err| OnePagerError::Fetch {
                url: url.to_string(),
                message: err.to_string(),
            })?;
        if truncated {
            tracing::warn!(
                "Download of {} exceeded {} bytes and was cut short; end-of-book markers may be missing",
                url,
                self.max_bytes
            );
        }

        tracing::info!("Fetched {} bytes", bytes.len());
        Ok(String::from_utf8_lossy(&bytes).into_owned())
    }
}

/// Read at most `max_bytes`, reporting whether the stream had more
fn read_capped(reader: impl Read, max_bytes: u64) -> std::io::Result<(Vec<u8>, bool)> {
    let mut bytes = Vec::new();
    reader
        .take(max_bytes.saturating_add(1))
        .read_to_end(&mut bytes)?;
    let truncated = bytes.len() as u64 > max_bytes;
    if truncated {
        bytes.truncate(max_bytes as usize);
    }
    Ok((bytes, truncated))
}

/// In-memory source keyed by URL
#[derive(Debug, Clone, Default)]
pub struct StaticSource {
    texts: std::collections::HashMap<String, String>,
}

impl StaticSource {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, url: impl Into<String>, text: impl Into<String>) -> Self {
        self.texts.insert(url.into(), text.into());
        self
    }
}

impl TextSource for StaticSource {
    fn fetch(&self, url: &str) -> Result<String> {
        self.texts.get(url).cloned().ok_or_else(|| OnePagerError::HttpStatus {
            url: url.to_string(),
            status: 404,
        })
    }
}
