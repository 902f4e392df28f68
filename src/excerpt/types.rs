//! @acp:module "Excerpt Types"
//! @acp:summary "Sections, excerpts and selection tunables"
//! @acp:domain cli
//! @acp:layer model
//!
//! Excerpt types and selection tunables

use serde::{Deserialize, Serialize};

/// Sections shorter than this are penalized and never accepted after trimming
pub const MIN_WORDS: usize = 220;

/// Sections longer than this are penalized by their overage
pub const MAX_WORDS: usize = 900;

/// Word budget a trimmed excerpt grows towards
pub const TRIM_WORDS: usize = 580;

/// Score added per keyword hit
pub const KEYWORD_WEIGHT: f64 = 0.7;

/// Characters of content (after the title) searched for keywords
pub const KEYWORD_WINDOW_CHARS: usize = 300;

/// Position bonus of the first section
pub const POSITION_BASE: f64 = 0.5;

/// Position bonus lost per index
pub const POSITION_DECAY: f64 = 0.03;

/// Characters kept when no section trims to `MIN_WORDS`
pub const FALLBACK_CHARS: usize = 1200;

/// Characters kept in the default section for degenerate text
pub const DEFAULT_SECTION_CHARS: usize = 1800;

/// Title of the default section for degenerate text
pub const DEFAULT_SECTION_TITLE: &str = "Passage";

/// Themes the daily page leans towards
pub const KEYWORDS: &[&str] = &[
    "introduction",
    "preface",
    "foreword",
    "self-reliance",
    "character",
    "discipline",
    "habit",
    "leadership",
    "strategy",
    "decision",
    "time",
    "focus",
    "resolve",
    "courage",
    "thought and character",
    "purpose",
    "planning",
];

/// A titled span of body text
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub title: String,
    pub content: String,
}

impl Section {
    pub fn new(title: impl Into<String>, content: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            content: content.into(),
        }
    }

    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }
}

/// How the excerpt was obtained
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ExcerptOrigin {
    /// Trimmed from a ranked section
    Ranked { index: usize, rank: usize, score: f64 },
    /// Head of the first section, nothing reached the minimum
    Fallback,
}

/// The text shown to the reader
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Excerpt {
    pub title: String,
    pub content: String,
    pub origin: ExcerptOrigin,
}

impl Excerpt {
    pub fn word_count(&self) -> usize {
        word_count(&self.content)
    }

    pub fn is_fallback(&self) -> bool {
        matches!(self.origin, ExcerptOrigin::Fallback)
    }
}

/// Scoring and trimming tunables
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SelectionConfig {
    pub min_words: usize,
    pub max_words: usize,
    pub trim_words: usize,
    pub keyword_weight: f64,
    pub keyword_window_chars: usize,
    pub position_base: f64,
    pub position_decay: f64,
    pub fallback_chars: usize,
    pub default_section_chars: usize,
    pub keywords: Vec<String>,
}

impl Default for SelectionConfig {
    fn default() -> Self {
        Self {
            min_words: MIN_WORDS,
            max_words: MAX_WORDS,
            trim_words: TRIM_WORDS,
            keyword_weight: KEYWORD_WEIGHT,
            keyword_window_chars: KEYWORD_WINDOW_CHARS,
            position_base: POSITION_BASE,
            position_decay: POSITION_DECAY,
            fallback_chars: FALLBACK_CHARS,
            default_section_chars: DEFAULT_SECTION_CHARS,
            keywords: KEYWORDS.iter().map(|k| k.to_string()).collect(),
        }
    }
}

/// Whitespace-separated word count
pub fn word_count(text: &str) -> usize {
    text.split_whitespace().count()
}

/// First `n` characters of `text`, never splitting a code point
pub fn take_chars(text: &str, n: usize) -> &str {
    match text.char_indices().nth(n) {
        Some((end, _)) => &text[..end],
        None => text,
    }
}
