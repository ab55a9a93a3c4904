//! Text canonicalization shared by the keyword matcher and the classifiers.
//!
//! A "word character" is ASCII only: `[0-9A-Za-z_]`. Everything that is not a
//! word character, whitespace or an apostrophe becomes a space, so
//! contractions such as "can't" survive as a single token and non-ASCII
//! letters act as separators. The output is therefore always pure ASCII.

use regex::Regex;
use std::sync::OnceLock;

fn non_word() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"[^0-9A-Za-z_\s']").expect("static pattern"))
}

fn whitespace_run() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\s+").expect("static pattern"))
}

/// Lowercase, replace punctuation with spaces (keeping apostrophes), collapse
/// whitespace runs and trim.
pub fn normalize(text: &str) -> String {
    let lowered = text.to_lowercase();
    let stripped = non_word().replace_all(&lowered, " ");
    let collapsed = whitespace_run().replace_all(&stripped, " ");
    collapsed.trim().to_string()
}
