use crate::core::normalizer::normalize;
use crate::domain::model::MatchResult;
use regex::Regex;

/// Default `max_expected_matches` for [`confidence_from_match`].
pub const DEFAULT_MAX_EXPECTED_MATCHES: usize = 5;

/// Find which keyword phrases occur in `text` as whole words.
///
/// Both the text and every phrase are normalized first, so matching is
/// case-insensitive. A phrase only counts when it is bounded on both sides by
/// an ASCII word boundary: `"log"` does not match inside `"logging"`, and
/// multi-word phrases must appear as one contiguous run.
///
/// A keyword that normalizes to nothing (e.g. `"?!"`) reduces to a bare
/// boundary and matches any text containing at least one word.
pub fn match_keywords<S: AsRef<str>>(text: &str, keywords: &[S]) -> MatchResult {
    let normalized_text = normalize(text);

    let matched_keywords: Vec<String> = keywords
        .iter()
        .map(|keyword| keyword.as_ref())
        .filter(|keyword: &&str| contains_phrase(&normalized_text, &normalize(keyword)))
        .map(str::to_string)
        .collect();

    let match_count = matched_keywords.len();
    let text_length = normalized_text.chars().count();
    let match_density = if text_length > 0 {
        match_count as f64 / (text_length as f64 / 100.0)
    } else {
        0.0
    };

    tracing::trace!(
        "Matched {}/{} keywords over {} chars",
        match_count,
        keywords.len(),
        text_length
    );

    MatchResult {
        matched_keywords,
        match_count,
        text_length,
        match_density,
    }
}

/// Generic confidence derived from a match result.
///
/// Up to 0.8 comes from the match count relative to `max_expected_matches`,
/// up to 0.2 more from match density. Zero matches always yield 0.
pub fn confidence_from_match(result: &MatchResult, max_expected_matches: usize) -> f64 {
    if result.match_count == 0 {
        return 0.0;
    }

    let expected = max_expected_matches.max(1) as f64;
    let base = (result.match_count as f64 / expected).min(1.0) * 0.8;
    let bonus = (result.match_density * 0.1).min(0.2);

    (base + bonus).clamp(0.0, 1.0)
}

fn contains_phrase(haystack: &str, phrase: &str) -> bool {
    let pattern = format!(r"(?-u:\b){}(?-u:\b)", regex::escape(phrase));
    match Regex::new(&pattern) {
        Ok(re) => re.is_match(haystack),
        Err(e) => {
            tracing::warn!("Skipping keyword '{}': {}", phrase, e);
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_finds_matching_keywords_in_order() {
        let result = match_keywords("I cannot login to my account", &["login", "account"]);
        assert_eq!(result.matched_keywords, vec!["login", "account"]);
        assert_eq!(result.match_count, 2);
    }

    #[test]
    fn test_is_case_insensitive_and_keeps_original_casing() {
        let result = match_keywords("LOGIN PROBLEM", &["Login", "problem"]);
        assert_eq!(result.matched_keywords, vec!["Login", "problem"]);
    }

    #[test]
    fn test_does_not_match_inside_longer_words() {
        let result = match_keywords("logging is important", &["log", "login"]);
        assert_eq!(result.match_count, 0);
        assert!(result.matched_keywords.is_empty());
        assert_eq!(result.match_density, 0.0);
    }

    #[test]
    fn test_multi_word_phrase_must_be_contiguous() {
        let hit = match_keywords("I can't login to the system", &["can't login"]);
        assert_eq!(hit.match_count, 1);

        let miss = match_keywords("I can't really login", &["can't login"]);
        assert_eq!(miss.match_count, 0);
    }

    #[test]
    fn test_later_bounded_occurrence_is_found() {
        // First occurrence is glued to "x", the overlapping second one is bounded.
        let result = match_keywords("xab ab ab", &["ab ab"]);
        assert_eq!(result.match_count, 1);
    }

    #[test]
    fn test_phrase_punctuation_is_normalized() {
        let result = match_keywords("the system is down, totally", &["System-Down"]);
        assert_eq!(result.match_count, 0);

        let result = match_keywords("system down again", &["System-Down"]);
        assert_eq!(result.matched_keywords, vec!["System-Down"]);
    }

    #[test]
    fn test_empty_inputs_yield_zero_result() {
        let empty_text = match_keywords("", &["login"]);
        assert_eq!(empty_text, MatchResult::default());

        let no_keywords: [&str; 0] = [];
        let result = match_keywords("some text", &no_keywords);
        assert_eq!(result.match_count, 0);
        assert_eq!(result.text_length, 9);
        assert_eq!(result.match_density, 0.0);

    }

    #[test]
    fn test_blank_keyword_matches_any_word() {
        let result = match_keywords("some text", &["?!"]);
        assert_eq!(result.matched_keywords, vec!["?!"]);

        let punctuation_only = match_keywords("?? !!", &["?!"]);
        assert_eq!(punctuation_only.match_count, 0);
    }

    #[test]
    fn test_non_ascii_letters_are_boundaries() {
        assert_eq!(match_keywords("bugé report", &["bug"]).match_count, 1);
        assert_eq!(match_keywords("urgentó", &["urgent"]).match_count, 1);
        assert_eq!(match_keywords("Café ERROR", &["error", "cafe"]).matched_keywords, vec!["error"]);
    }

    #[test]
    fn test_text_length_counts_normalized_ascii() {
        let result = match_keywords("Café!", &["caf"]);
        assert_eq!(result.text_length, 3);
        assert_eq!(result.match_count, 1);
    }

    #[test]
    fn test_match_density_is_per_hundred_chars() {
        let result = match_keywords("short text with login", &["login"]);
        assert_eq!(result.text_length, 21);
        assert!((result.match_density - 100.0 / 21.0).abs() < 1e-9);
    }

    fn result_with(match_count: usize, match_density: f64) -> MatchResult {
        MatchResult {
            matched_keywords: vec!["keyword".to_string(); match_count],
            match_count,
            text_length: 100,
            match_density,
        }
    }

    #[test]
    fn test_confidence_is_zero_without_matches() {
        assert_eq!(
            confidence_from_match(&result_with(0, 0.0), DEFAULT_MAX_EXPECTED_MATCHES),
            0.0
        );
    }

    #[test]
    fn test_confidence_grows_with_matches() {
        let one = confidence_from_match(&result_with(1, 0.01), DEFAULT_MAX_EXPECTED_MATCHES);
        let three = confidence_from_match(&result_with(3, 0.03), DEFAULT_MAX_EXPECTED_MATCHES);
        assert!(three > one);
        assert!((one - 0.161).abs() < 1e-9);
    }

    #[test]
    fn test_confidence_is_capped() {
        let ten = confidence_from_match(&result_with(10, 10.0), DEFAULT_MAX_EXPECTED_MATCHES);
        assert!(ten <= 1.0);
        assert!((ten - 1.0).abs() < 1e-12);
    }
}
