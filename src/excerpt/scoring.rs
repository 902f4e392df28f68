//! @acp:module "Excerpt Scoring"
//! @acp:summary "Length, keyword and position scores for sections"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Section scoring
//!
//! Scores are unbounded sums of three parts: how well the length fits the
//! target range, keyword hits near the top of the section, and a small bonus
//! for appearing early in the book.

use serde::Serialize;

use super::types::{take_chars, word_count, Section, SelectionConfig};

/// Score breakdown for one section
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct SectionScore {
    /// Position of the section in the book
    pub index: usize,
    pub words: usize,
    pub length: f64,
    pub keyword: f64,
    pub position: f64,
}

impl SectionScore {
    pub fn total(&self) -> f64 {
        self.length + self.keyword + self.position
    }
}

/// Score one section at `index`
pub fn score_section(section: &Section, index: usize, config: &SelectionConfig) -> SectionScore {
    let words = word_count(&section.content);
    SectionScore {
        index,
        words,
        length: length_score(words, config),
        keyword: keyword_score(section, config),
        position: position_score(index, config),
    }
}

/// 1.0 inside `[min_words, max_words]`, minus the relative shortfall or overage outside
pub fn length_score(words: usize, config: &SelectionConfig) -> f64 {
    let low = config.min_words as f64;
    let high = config.max_words as f64;
    let w = words as f64;

    let mut score = 1.0;
    if w < low {
        score -= (low - w) / low;
    } else if w > high {
        score -= (w - high) / high;
    }
    score
}

/// `keyword_weight` per keyword found in the title plus the head of the content
pub fn keyword_score(section: &Section, config: &SelectionConfig) -> f64 {
    let haystack = format!(
        "{}\n{}",
        section.title,
        take_chars(&section.content, config.keyword_window_chars)
    )
    .to_lowercase();

    let hits = config
        .keywords
        .iter()
        .filter(|kw| haystack.contains(&kw.to_lowercase()))
        .count();

    hits as f64 * config.keyword_weight
}

/// Linearly decaying bonus for early sections, never negative
pub fn position_score(index: usize, config: &SelectionConfig) -> f64 {
    (config.position_base - index as f64 * config.position_decay).max(0.0)
}

/// Score every section and order them best first.
///
/// Ties keep book order: the lower index ranks first.
pub fn rank_sections(sections: &[Section], config: &SelectionConfig) -> Vec<SectionScore> {
    let mut scored: Vec<SectionScore> = sections
        .iter()
        .enumerate()
        .map(|(i, s)| score_section(s, i, config))
        .collect();

    scored.sort_by(|a, b| {
        b.total()
            .total_cmp(&a.total())
            .then_with(|| a.index.cmp(&b.index))
    });

    for score in &scored {
        tracing::debug!(
            "section {} ({} words): length={:.3} keyword={:.1} position={:.2} total={:.3}",
            score.index,
            score.words,
            score.length,
            score.keyword,
            score.position,
            score.total()
        );
    }

    scored
}
