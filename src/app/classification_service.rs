//! Combines the category and priority classifiers into one ticket-level
//! decision and keeps a per-ticket decision history.

use crate::config::toml_config::{ServiceConfig, DEFAULT_CATEGORY_WEIGHT, DEFAULT_PRIORITY_WEIGHT};
use crate::core::{classify_category, classify_priority};
use crate::domain::model::{Category, CategoryResult, Priority, PriorityResult, Ticket};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TicketClassification {
    pub ticket_id: String,
    pub category: CategoryResult,
    pub priority: PriorityResult,
    pub overall_confidence: f64,
    pub classified_at: DateTime<Utc>,
    pub auto_applied: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ClassificationLogEntry {
    pub timestamp: DateTime<Utc>,
    pub ticket_id: String,
    pub original_category: Option<Category>,
    pub original_priority: Option<Priority>,
    pub new_category: Category,
    pub new_priority: Priority,
    pub category_confidence: f64,
    pub priority_confidence: f64,
    pub keywords_found: Vec<String>,
    pub reasoning: String,
    /// The ticket already carried a non-default label before classification.
    pub was_override: bool,
}

/// Weights used to blend the two per-axis confidences.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ConfidenceWeights {
    pub category: f64,
    pub priority: f64,
}

impl Default for ConfidenceWeights {
    fn default() -> Self {
        Self {
            category: DEFAULT_CATEGORY_WEIGHT,
            priority: DEFAULT_PRIORITY_WEIGHT,
        }
    }
}

impl From<&ServiceConfig> for ConfidenceWeights {
    fn from(config: &ServiceConfig) -> Self {
        Self {
            category: config.category_weight,
            priority: config.priority_weight,
        }
    }
}

#[derive(Debug, Default)]
pub struct ClassificationService {
    weights: ConfidenceWeights,
    history: Vec<ClassificationLogEntry>,
}

impl ClassificationService {
    pub fn new(weights: ConfidenceWeights) -> Self {
        Self {
            weights,
            history: Vec::new(),
        }
    }

    pub fn from_config(config: &ServiceConfig) -> Self {
        Self::new(ConfidenceWeights::from(config))
    }

    /// Weighted blend of both confidences, rounded to two decimals.
    pub fn overall_confidence(&self, category_confidence: f64, priority_confidence: f64) -> f64 {
        let overall =
            category_confidence * self.weights.category + priority_confidence * self.weights.priority;
        (overall * 100.0).round() / 100.0
    }

    /// Classify one ticket, record the decision, and write the labels onto the
    /// ticket when `apply` is set.
    pub fn classify_ticket(&mut self, ticket: &mut Ticket, apply: bool) -> TicketClassification {
        let text = ticket.text();
        let category = classify_category(&text);
        let priority = classify_priority(&text);
        let overall_confidence = self.overall_confidence(category.confidence, priority.confidence);
        let now = Utc::now();

        let was_override = ticket.category.is_some_and(|c| c != Category::Other)
            || ticket.priority.is_some_and(|p| p != Priority::Medium);

        self.history.push(ClassificationLogEntry {
            timestamp: now,
            ticket_id: ticket.id.clone(),
            original_category: ticket.category,
            original_priority: ticket.priority,
            new_category: category.label,
            new_priority: priority.label,
            category_confidence: category.confidence,
            priority_confidence: priority.confidence,
            keywords_found: category
                .keywords_found
                .iter()
                .chain(priority.keywords_found.iter())
                .cloned()
                .collect(),
            reasoning: format!("Category: {} Priority: {}", category.reasoning, priority.reasoning),
            was_override,
        });

        tracing::info!(
            "Ticket {} classified as {}/{} (overall confidence {:.2}{})",
            ticket.id,
            category.label,
            priority.label,
            overall_confidence,
            if apply { ", applied" } else { "" }
        );

        if apply {
            ticket.category = Some(category.label);
            ticket.priority = Some(priority.label);
        }

        TicketClassification {
            ticket_id: ticket.id.clone(),
            category,
            priority,
            overall_confidence,
            classified_at: now,
            auto_applied: apply,
        }
    }

    pub fn classify_all(&mut self, tickets: &mut [Ticket], apply: bool) -> Vec<TicketClassification> {
        tickets
            .iter_mut()
            .map(|ticket| self.classify_ticket(ticket, apply))
            .collect()
    }

    /// Decisions recorded for `ticket_id`, oldest first.
    pub fn history(&self, ticket_id: &str) -> Vec<&ClassificationLogEntry> {
        self.history
            .iter()
            .filter(|entry| entry.ticket_id == ticket_id)
            .collect()
    }
}
