//! @acp:module "Excerpt"
//! @acp:summary "Raw book text to one titled excerpt"
//! @acp:domain cli
//! @acp:layer service
//!
//! Excerpt extraction
//!
//! Raw download in, one titled excerpt out:
//! strip boilerplate, space and normalize, segment, score, trim.

pub mod normalize;
pub mod scoring;
pub mod segment;
pub mod selector;
pub mod strip;
pub mod types;

pub use normalize::{normalize, space_headings};
pub use scoring::{rank_sections, score_section, SectionScore};
pub use segment::split_sections;
pub use selector::{select_excerpt, trim_to_budget};
pub use strip::strip_boilerplate;
pub use types::*;

/// Body text ready for segmentation
pub fn prepare_body(raw: &str) -> String {
    normalize(&space_headings(&strip_boilerplate(raw)))
}

/// Segment `body`, substituting a single default section when nothing is found
pub fn sections_or_default(body: &str, config: &SelectionConfig) -> Vec<Section> {
    let sections = split_sections(body);
    if !sections.is_empty() {
        return sections;
    }

    tracing::warn!("No sections found, using the first {} characters", config.default_section_chars);
    vec![Section::new(
        DEFAULT_SECTION_TITLE,
        take_chars(body, config.default_section_chars),
    )]
}

/// Run the whole pipeline on a downloaded text
pub fn extract_excerpt(raw: &str, config: &SelectionConfig) -> Excerpt {
    let body = prepare_body(raw);
    let sections = sections_or_default(&body, config);
    tracing::info!("Body has {} words in {} sections", word_count(&body), sections.len());

    select_excerpt(&sections, config).unwrap_or_else(|| Excerpt {
        title: DEFAULT_SECTION_TITLE.to_string(),
        content: String::new(),
        origin: ExcerptOrigin::Fallback,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_prepare_body_spaces_headings() {
        let raw = "*** START OF X ***\r\nnotes\r\nCHAPTER I\r\n  text   here\r\n*** END OF X ***";
        assert_eq!(prepare_body(raw), "notes\n\nCHAPTER I\n text here");
    }

    #[test]
    fn test_empty_body_gets_default_section() {
        let config = SelectionConfig::default();
        let sections = sections_or_default("", &config);
        assert_eq!(sections, vec![Section::new("Passage", "")]);

        let excerpt = extract_excerpt("*** START OF X ***\n---\n*** END OF X ***", &config);
        assert_eq!(excerpt.title, "Passage");
        assert!(excerpt.is_fallback());
    }

    #[test]
    fn test_default_section_is_capped() {
        let config = SelectionConfig::default();
        let body = "-".repeat(5000);
        let sections = sections_or_default(&body, &config);
        assert_eq!(sections.len(), 1);
        assert_eq!(sections[0].title, "Passage");
        assert_eq!(sections[0].content.chars().count(), 1800);
    }
}
