use crate::core::keyword_matcher::match_keywords;
use crate::core::taxonomy::category_keywords;
use crate::domain::model::{Category, CategoryResult, MatchResult, TicketText};
use std::cmp::Reverse;

const DEFAULT_CATEGORY: Category = Category::Other;
const DEFAULT_CONFIDENCE: f64 = 0.3;

/// Pick the category whose keyword list has the most hits.
///
/// The subject is counted twice so the subject line dominates. Ties go to the
/// category declared first.
pub fn classify_category(input: &TicketText) -> CategoryResult {
    let combined_text = format!("{} {} {}", input.subject, input.subject, input.description);

    let mut candidates: Vec<(Category, MatchResult)> = Category::ALL
        .into_iter()
        .filter(|category| !category_keywords(*category).is_empty())
        .map(|category| (category, match_keywords(&combined_text, category_keywords(category))))
        .filter(|(_, result)| result.match_count > 0)
        .collect();

    // Stable sort keeps declaration order among equal counts.
    candidates.sort_by_key(|(_, result)| Reverse(result.match_count));

    let Some((category, best)) = candidates.into_iter().next() else {
        tracing::debug!("No category keywords matched, using '{}'", DEFAULT_CATEGORY);
        return CategoryResult {
            label: DEFAULT_CATEGORY,
            confidence: DEFAULT_CONFIDENCE,
            keywords_found: Vec::new(),
            reasoning: category_reasoning(DEFAULT_CATEGORY, &[], DEFAULT_CONFIDENCE),
        };
    };

    let confidence = category_confidence(best.match_count);
    tracing::debug!(
        "Category '{}' chosen with {} keyword(s), confidence {:.2}",
        category,
        best.match_count,
        confidence
    );

    CategoryResult {
        label: category,
        confidence,
        reasoning: category_reasoning(category, &best.matched_keywords, confidence),
        keywords_found: best.matched_keywords,
    }
}

fn category_confidence(match_count: usize) -> f64 {
    match match_count {
        0 => DEFAULT_CONFIDENCE,
        1 => 0.6,
        2 => 0.75,
        n => (0.9 + (n - 3) as f64 * 0.02).min(1.0),
    }
}

pub fn category_reasoning(category: Category, keywords: &[String], confidence: f64) -> String {
    if keywords.is_empty() {
        return format!(
            "No specific keywords matched. Defaulting to '{}' category with low confidence.",
            category
        );
    }

    let level = if confidence >= 0.8 {
        "High"
    } else if confidence >= 0.6 {
        "Moderate"
    } else {
        "Low"
    };
    let keyword_list = keywords.iter().take(5).map(String::as_str).collect::<Vec<_>>().join(", ");

    format!(
        "{} confidence match for '{}' category based on keywords: {}.",
        level, category, keyword_list
    )
}
