use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Support ticket category, in declaration order.
///
/// The order matters: ties between categories with the same number of
/// keyword hits resolve to the one declared first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    AccountAccess,
    TechnicalIssue,
    BillingQuestion,
    FeatureRequest,
    BugReport,
    Other,
}

impl Category {
    pub const ALL: [Category; 6] = [
        Category::AccountAccess,
        Category::TechnicalIssue,
        Category::BillingQuestion,
        Category::FeatureRequest,
        Category::BugReport,
        Category::Other,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Category::AccountAccess => "account_access",
            Category::TechnicalIssue => "technical_issue",
            Category::BillingQuestion => "billing_question",
            Category::FeatureRequest => "feature_request",
            Category::BugReport => "bug_report",
            Category::Other => "other",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Category::ALL
            .into_iter()
            .find(|c| c.as_str() == wanted)
            .ok_or_else(|| format!("Unknown category: {}", s))
    }
}

/// Ticket priority.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
}

impl Priority {
    pub const ALL: [Priority; 4] = [
        Priority::Urgent,
        Priority::High,
        Priority::Medium,
        Priority::Low,
    ];

    /// Order in which priority keyword lists are consulted. `Medium` is the
    /// fallback and is never matched against keywords.
    pub const SEVERITY_ORDER: [Priority; 3] = [Priority::Urgent, Priority::High, Priority::Low];

    pub fn as_str(&self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
        }
    }
}

impl fmt::Display for Priority {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Priority {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let wanted = s.trim().to_lowercase();
        Priority::ALL
            .into_iter()
            .find(|p| p.as_str() == wanted)
            .ok_or_else(|| format!("Unknown priority: {}", s))
    }
}

/// Free text fed to the classifiers.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TicketText {
    pub subject: String,
    pub description: String,
}

impl TicketText {
    pub fn new(subject: impl Into<String>, description: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            description: description.into(),
        }
    }
}

/// Outcome of matching one keyword list against a text.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct MatchResult {
    /// Matched keywords in their original casing, in list order.
    pub matched_keywords: Vec<String>,
    pub match_count: usize,
    /// Length of the normalized text. Normalized text is pure ASCII, so this
    /// equals its byte length and its UTF-16 length.
    pub text_length: usize,
    /// Matches per 100 characters of normalized text.
    pub match_density: f64,
}

/// Per-axis classification outcome.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassificationResult<L> {
    pub label: L,
    /// Always within `[0, 1]`.
    pub confidence: f64,
    pub keywords_found: Vec<String>,
    pub reasoning: String,
}

pub type CategoryResult = ClassificationResult<Category>;
pub type PriorityResult = ClassificationResult<Priority>;

/// A ticket as seen by the classification service.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Ticket {
    pub id: String,
    pub subject: String,
    pub description: String,
    #[serde(default)]
    pub category: Option<Category>,
    #[serde(default)]
    pub priority: Option<Priority>,
}

impl Ticket {
    pub fn new(
        id: impl Into<String>,
        subject: impl Into<String>,
        description: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            subject: subject.into(),
            description: description.into(),
            category: None,
            priority: None,
        }
    }

    pub fn text(&self) -> TicketText {
        TicketText::new(self.subject.clone(), self.description.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_category_wire_names() {
        assert_eq!(Category::AccountAccess.to_string(), "account_access");
        assert_eq!("Bug_Report".parse::<Category>().unwrap(), Category::BugReport);
        assert!("billing".parse::<Category>().is_err());

        let json = serde_json::to_string(&Category::FeatureRequest).unwrap();
        assert_eq!(json, "\"feature_request\"");
    }

    #[test]
    fn test_priority_wire_names() {
        assert_eq!(" URGENT ".parse::<Priority>().unwrap(), Priority::Urgent);
        assert_eq!(serde_json::to_string(&Priority::Medium).unwrap(), "\"medium\"");
        assert!(!Priority::SEVERITY_ORDER.contains(&Priority::Medium));
    }
}
