//! @acp:module "Excerpt Normalizer"
//! @acp:summary "Whitespace collapsing and heading spacing"
//! @acp:domain cli
//! @acp:layer logic
//!
//! Whitespace normalization

use std::sync::LazyLock;

use regex::Regex;

/// Two or more line breaks, ignoring horizontal whitespace on the blank lines
static RE_BLANK_RUN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?:[ \t\x0C\x0B]*\n){2,}").unwrap());

static RE_HORIZONTAL_WS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"[ \t\x0C\x0B]+").unwrap());

/// A line opening with `CHAPTER`/`BOOK`/`SECTION`, or a line that is only
/// `PREFACE`/`INTRODUCTION`/`FOREWORD`, not yet preceded by a blank line
static RE_HEADING_START: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?im)\n[ \t]*((?:CHAPTER|BOOK|SECTION)\b|(?:PREFACE|INTRODUCTION|FOREWORD)\.?[ \t]*$)",
    )
    .unwrap()
});

/// Collapse blank-line runs to one blank line and horizontal runs to one space.
///
/// Idempotent: `normalize(&normalize(x)) == normalize(x)`.
pub fn normalize(text: &str) -> String {
    let collapsed = RE_BLANK_RUN.replace_all(text, "\n\n");
    RE_HORIZONTAL_WS
        .replace_all(&collapsed, " ")
        .trim()
        .to_string()
}

/// Put a blank line in front of every line that starts with a heading keyword.
///
/// Front-matter words only count when they stand alone on their line, so
/// wrapped prose such as "introduction to the subject" is left in place.
///
/// Run before [`normalize`]; the extra breaks collapse back to one blank line.
pub fn space_headings(text: &str) -> String {
    RE_HEADING_START
        .replace_all(text, "\n\n$1")
        .into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_collapses_blank_runs() {
        assert_eq!(normalize("a\n\n\n\nb"), "a\n\nb");
        assert_eq!(normalize("a\n  \n\t\nb"), "a\n\nb");
        assert_eq!(normalize("a\nb"), "a\nb");
    }

    #[test]
    fn test_collapses_horizontal_whitespace() {
        assert_eq!(normalize("one \t  two\x0Cthree"), "one two three");
        assert_eq!(normalize("   padded   "), "padded");
    }

    #[test]
    fn test_idempotent() {
        let samples = [
            "",
            "plain",
            " a \n \n b \n\n\n c ",
            "x\t\n\t\n\ty",
            "line one\nline two\n\n\n\n  indented\tline\n",
            "\n\n\n",
            "trailing   \n",
        ];
        for sample in samples {
            let once = normalize(sample);
            assert_eq!(normalize(&once), once, "not idempotent for {:?}", sample);
        }
    }

    #[test]
    fn test_space_headings() {
        let spaced = space_headings("end of text.\nCHAPTER II\nMore.\n  Book III\nx");
        assert_eq!(spaced, "end of text.\n\nCHAPTER II\nMore.\n\nBook III\nx");
    }

    #[test]
    fn test_space_headings_front_matter_only_when_alone() {
        let text = "tail of text.\nPREFACE\nbody\nintroduction to the subject\nForeword.";
        assert_eq!(
            space_headings(text),
            "tail of text.\n\nPREFACE\nbody\nintroduction to the subject\n\nForeword."
        );
    }

    #[test]
    fn test_space_headings_requires_word_boundary() {
        let text = "a\nbookish people\nsectional";
        assert_eq!(space_headings(text), text);
    }

    #[test]
    fn test_space_headings_then_normalize_keeps_single_blank_line() {
        let text = "intro\n\n\nCHAPTER I\nbody";
        assert_eq!(normalize(&space_headings(text)), "intro\n\nCHAPTER I\nbody");
    }
}
