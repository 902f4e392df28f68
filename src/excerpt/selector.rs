//! @acp:module "Excerpt Selector"
//! @acp:summary "Greedy best-section selection with word-budget trim"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Excerpt selection
//!
//! Walks the ranking best first and returns the first section that still
//! has at least `min_words` after trimming to the word budget. This accepts
//! the first acceptable candidate, not the best trimmed result; a top-ranked
//! section made of one short paragraph loses to a lower-ranked one that
//! trims long enough.

use super::scoring::rank_sections;
use super::types::{take_chars, word_count, Excerpt, ExcerptOrigin, Section, SelectionConfig};

/// Pick and trim the excerpt shown on the page.
///
/// Returns `None` only for an empty slice.
pub fn select_excerpt(sections: &[Section], config: &SelectionConfig) -> Option<Excerpt> {
    let first = sections.first()?;
    let ranked = rank_sections(sections, config);

    for (rank, score) in ranked.iter().enumerate() {
        let section = &sections[score.index];
        let trimmed = trim_to_budget(&section.content, config.trim_words);
        if word_count(&trimmed) >= config.min_words {
            tracing::info!(
                "Selected '{}' (section {}, rank {}, score {:.3})",
                section.title,
                score.index,
                rank,
                score.total()
            );
            return Some(Excerpt {
                title: section.title.clone(),
                content: trimmed,
                origin: ExcerptOrigin::Ranked {
                    index: score.index,
                    rank,
                    score: score.total(),
                },
            });
        }
    }

    tracing::warn!(
        "No section reaches {} words, using the head of '{}'",
        config.min_words,
        first.title
    );
    Some(Excerpt {
        title: first.title.clone(),
        content: take_chars(&first.content, config.fallback_chars).to_string(),
        origin: ExcerptOrigin::Fallback,
    })
}

/// Accumulate whole lines until the next one would pass `budget` words.
///
/// The first line is always kept, however long. Lines are joined with a
/// blank line between them.
pub fn trim_to_budget(content: &str, budget: usize) -> String {
    let mut selected: Vec<&str> = Vec::new();
    let mut count = 0;

    for paragraph in content.lines().map(str::trim).filter(|p| !p.is_empty()) {
        let words = word_count(paragraph);
        if count + words > budget && !selected.is_empty() {
            break;
        }
        selected.push(paragraph);
        count += words;
    }

    selected.join("\n\n")
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn words(n: usize) -> String {
        vec!["word"; n].join(" ")
    }

    /// `lines` lines of `per_line` words each
    fn block(lines: usize, per_line: usize) -> String {
        vec![words(per_line); lines].join("\n")
    }

    #[test]
    fn test_trim_stops_before_budget() {
        let content = block(10, 100);
        let trimmed = trim_to_budget(&content, 580);
        assert_eq!(word_count(&trimmed), 500);
        assert_eq!(trimmed.matches("\n\n").count(), 4);
    }

    #[test]
    fn test_trim_keeps_oversized_first_paragraph() {
        let content = format!("{}\n{}", words(700), words(10));
        let trimmed = trim_to_budget(&content, 580);
        assert_eq!(word_count(&trimmed), 700);
    }

    #[test]
    fn test_trim_skips_blank_lines() {
        let trimmed = trim_to_budget("  one two \n\n\n three ", 580);
        assert_eq!(trimmed, "one two\n\nthree");
    }

    #[test]
    fn test_trim_allows_exact_budget() {
        let content = block(2, 290);
        assert_eq!(word_count(&trim_to_budget(&content, 580)), 580);
    }

    #[test]
    fn test_selects_best_scoring_long_enough_section() {
        let config = SelectionConfig::default();
        let sections = vec![
            Section::new("CHAPTER I", block(13, 50)),
            Section::new("PREFACE", format!("On discipline.\n{}", block(6, 50))),
        ];
        let excerpt = select_excerpt(&sections, &config).unwrap();
        assert_eq!(excerpt.title, "PREFACE");
        assert_eq!(
            excerpt.origin,
            ExcerptOrigin::Ranked {
                index: 1,
                rank: 0,
                score: excerpt_score(&excerpt)
            }
        );
        assert!(excerpt.word_count() >= 220);
    }

    fn excerpt_score(excerpt: &Excerpt) -> f64 {
        match excerpt.origin {
            ExcerptOrigin::Ranked { score, .. } => score,
            ExcerptOrigin::Fallback => f64::NAN,
        }
    }

    #[test]
    fn test_greedy_skips_top_candidate_that_trims_short() {
        let config = SelectionConfig::default();
        // Keywords push the first section to the top, but its 100-word first
        // line is followed by a line that would overflow the budget.
        let sections = vec![
            Section::new("PREFACE", format!("focus courage {}\n{}", words(98), words(600))),
            Section::new("CHAPTER II", block(5, 60)),
        ];
        let excerpt = select_excerpt(&sections, &config).unwrap();
        assert_eq!(excerpt.title, "CHAPTER II");
        assert_eq!(excerpt.word_count(), 300);
    }

    #[test]
    fn test_fallback_when_nothing_reaches_minimum() {
        let config = SelectionConfig::default();
        let long_line = "abcdefghij ".repeat(150);
        let sections = vec![
            Section::new("Introduction", long_line.clone()),
            Section::new("CHAPTER I", words(50)),
        ];
        let excerpt = select_excerpt(&sections, &config).unwrap();
        assert!(excerpt.is_fallback());
        assert_eq!(excerpt.title, "Introduction");
        assert_eq!(excerpt.content, &long_line[..1200]);
    }

    #[test]
    fn test_tie_goes_to_earlier_section() {
        let config = SelectionConfig::default();
        let mut sections: Vec<Section> = (0..17)
            .map(|i| Section::new(format!("Chapter {}", i + 1), "short"))
            .collect();
        sections.push(Section::new("Chapter 18", format!("alpha {}", words(299))));
        sections.push(Section::new("Chapter 19", format!("omega {}", words(299))));

        let excerpt = select_excerpt(&sections, &config).unwrap();
        assert_eq!(excerpt.title, "Chapter 18");
        assert!(excerpt.content.starts_with("alpha"));
    }

    #[test]
    fn test_empty_input_selects_nothing() {
        assert!(select_excerpt(&[], &SelectionConfig::default()).is_none());
    }
}
