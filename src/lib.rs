pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use app::classification_service::{ClassificationService, TicketClassification};
pub use crate::core::keyword_matcher::{confidence_from_match, match_keywords};
pub use crate::core::normalizer::normalize;
pub use crate::core::{classify_category, classify_priority};
pub use domain::model::{Category, ClassificationResult, MatchResult, Priority, Ticket, TicketText};
pub use utils::error::{ClassifierError, Result};
