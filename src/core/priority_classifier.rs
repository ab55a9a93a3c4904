use crate::core::keyword_matcher::match_keywords;
use crate::core::taxonomy::priority_keywords;
use crate::domain::model::{Priority, PriorityResult, TicketText};

const DEFAULT_PRIORITY: Priority = Priority::Medium;
const DEFAULT_CONFIDENCE: f64 = 0.5;

/// Assign the first priority, in severity order, that has any keyword hit.
///
/// Lower levels are never consulted once a higher one matches, so a ticket
/// mentioning both "critical" and "minor" is urgent. Falls back to medium.
pub fn classify_priority(input: &TicketText) -> PriorityResult {
    let combined_text = format!("{} {}", input.subject, input.description);

    for priority in Priority::SEVERITY_ORDER {
        let keywords = priority_keywords(priority);
        if keywords.is_empty() {
            continue;
        }

        let result = match_keywords(&combined_text, keywords);
        if result.match_count > 0 {
            let confidence = priority_confidence(result.match_count);
            tracing::debug!(
                "Priority '{}' chosen with {} keyword(s), confidence {:.2}",
                priority,
                result.match_count,
                confidence
            );

            return PriorityResult {
                label: priority,
                confidence,
                reasoning: priority_reasoning(priority, &result.matched_keywords),
                keywords_found: result.matched_keywords,
            };
        }
    }

    tracing::debug!("No priority keywords matched, using '{}'", DEFAULT_PRIORITY);
    PriorityResult {
        label: DEFAULT_PRIORITY,
        confidence: DEFAULT_CONFIDENCE,
        keywords_found: Vec::new(),
        reasoning: priority_reasoning(DEFAULT_PRIORITY, &[]),
    }
}

fn priority_confidence(match_count: usize) -> f64 {
    match match_count {
        0 => DEFAULT_CONFIDENCE,
        1 => 0.8,
        n => (0.9 + (n - 2) as f64 * 0.03).min(1.0),
    }
}

pub fn priority_reasoning(priority: Priority, keywords: &[String]) -> String {
    if keywords.is_empty() {
        return format!(
            "No priority keywords detected. Defaulting to '{}' priority.",
            priority
        );
    }

    let keyword_list = keywords.iter().take(5).map(String::as_str).collect::<Vec<_>>().join(", ");

    match priority {
        Priority::Urgent => format!(
            "Urgent priority assigned due to critical keywords: {}. Immediate attention required.",
            keyword_list
        ),
        Priority::High => format!(
            "High priority assigned based on keywords: {}. This issue is significant and should be addressed soon.",
            keyword_list
        ),
        Priority::Low => format!(
            "Low priority assigned based on keywords: {}. This can be addressed when time permits.",
            keyword_list
        ),
        Priority::Medium => format!("Medium priority assigned. Keywords found: {}.", keyword_list),
    }
}
