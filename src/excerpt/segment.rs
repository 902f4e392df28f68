//! @acp:module "Excerpt Segmenter"
//! @acp:summary "Heading and separator based chapter splitting"
//! @acp:domain cli
//! @acp:layer analysis
//!
//! Chapter segmentation
//!
//! Splits a normalized body into titled sections. Heading lines win; books
//! without recognizable headings are cut on dashed separator lines instead.

use std::sync::LazyLock;

use regex::Regex;

use super::types::Section;

/// Title given to text that precedes the first heading
pub const INTRODUCTION_TITLE: &str = "Introduction";

/// `CHAPTER IV.`, `Book the First`, or a bare `PREFACE` / `Introduction.` line
static HEADING: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)^[ \t]*((?:CHAPTER|BOOK|SECTION)[ \t]+\S.*|(?:PREFACE|INTRODUCTION|FOREWORD)\.?[ \t]*)$",
    )
    .unwrap()
});

/// A line made only of three or more `-` / `=`
static SEPARATOR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*[-=]{3,}[ \t]*$").unwrap());

/// Split `text` into ordered sections.
///
/// Returns an empty vec only when the text has nothing but whitespace and
/// separators; callers substitute a default section in that case.
pub fn split_sections(text: &str) -> Vec<Section> {
    let sections = split_on_headings(text);
    if !sections.is_empty() {
        return sections;
    }
    split_on_separators(text)
}

fn split_on_headings(text: &str) -> Vec<Section> {
    let headings: Vec<_> = HEADING
        .captures_iter(text)
        .filter_map(|caps| {
            let line = caps.get(0)?;
            let title = caps.get(1)?;
            starts_paragraph(text, line.start())
                .then(|| (line.start(), line.end(), title.as_str().trim().to_string()))
        })
        .collect();

    if headings.is_empty() {
        return Vec::new();
    }

    let mut sections = Vec::with_capacity(headings.len() + 1);

    let lead = text[..headings[0].0].trim();
    if !lead.is_empty() {
        sections.push(Section::new(INTRODUCTION_TITLE, lead));
    }

    for (i, (_, end, title)) in headings.iter().enumerate() {
        let next = headings.get(i + 1).map(|h| h.0).unwrap_or(text.len());
        sections.push(Section::new(title.clone(), text[*end..next].trim()));
    }

    sections
}

fn split_on_separators(text: &str) -> Vec<Section> {
    SEPARATOR
        .split(text)
        .enumerate()
        .filter_map(|(i, chunk)| {
            let chunk = chunk.trim();
            (!chunk.is_empty()).then(|| Section::new(format!("Section {}", i + 1), chunk))
        })
        .collect()
}

/// True when the line at `start` opens the text or follows a blank line
fn starts_paragraph(text: &str, start: usize) -> bool {
    let before = &text[..start];
    match before.strip_suffix('\n') {
        None => before.trim().is_empty(),
        Some(rest) => {
            let rest = rest.trim_end_matches([' ', '\t']);
            rest.is_empty() || rest.ends_with('\n')
        }
    }
}
