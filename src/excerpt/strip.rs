//! @acp:module "Boilerplate Stripper"
//! @acp:summary "Project Gutenberg front and back matter removal"
//! @acp:domain cli
//! @acp:layer data
//!
//! Boilerplate stripping
//!
//! Project Gutenberg plain-text editions wrap the book between
//! `*** START OF ... ***` and `*** END OF ... ***` lines. Everything outside
//! the markers is license and catalog text.

use std::sync::LazyLock;

use regex::Regex;

/// Start marker, spanning lines up to its closing `***`
static START_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\*\*\* START OF(.*?)\*\*\*").unwrap());

/// End marker, spanning lines up to its closing `***`
static END_MARKER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?is)\*\*\* END OF(.*?)\*\*\*").unwrap());

/// Return the body between the boilerplate markers.
///
/// A missing marker leaves that side of the text untouched. The end marker
/// is only searched for after the start marker. Carriage returns are removed
/// and the result is trimmed.
pub fn strip_boilerplate(raw: &str) -> String {
    let start = START_MARKER.find(raw).map(|m| m.end()).unwrap_or(0);
    let end = END_MARKER
        .find_at(raw, start)
        .map(|m| m.start())
        .unwrap_or(raw.len());

    raw[start..end].replace('\r', "").trim().to_string()
}
