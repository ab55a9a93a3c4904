pub mod category_classifier;
pub mod keyword_matcher;
pub mod normalizer;
pub mod priority_classifier;
pub mod taxonomy;

pub use crate::domain::model::{
    Category, CategoryResult, ClassificationResult, MatchResult, Priority, PriorityResult,
    TicketText,
};
pub use category_classifier::classify_category;
pub use priority_classifier::classify_priority;
