use crate::domain::model::{Category, Priority, Ticket};
use crate::utils::error::{ClassifierError, Result};
use crate::utils::validation::validate_file_extension;
use serde::Deserialize;
use std::path::Path;

#[derive(Debug, Deserialize)]
struct TicketRow {
    #[serde(default)]
    id: Option<String>,
    #[serde(default)]
    subject: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    category: Option<String>,
    #[serde(default)]
    priority: Option<String>,
}

/// Load tickets from a `.csv` or `.json` file.
pub async fn load_tickets<P: AsRef<Path>>(path: P) -> Result<Vec<Ticket>> {
    let path = path.as_ref();
    let shown = path.to_string_lossy();
    validate_file_extension("input", &shown, &["csv", "json"])?;

    tracing::debug!("Reading tickets from {}", shown);
    let content = tokio::fs::read_to_string(path).await?;

    let is_csv = path
        .extension()
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| ext.eq_ignore_ascii_case("csv"));

    let tickets = if is_csv {
        parse_csv(&content)?
    } else {
        parse_json(&content)?
    };

    tracing::info!("Loaded {} ticket(s) from {}", tickets.len(), shown);
    Ok(tickets)
}

/// Parse CSV with a header row. Only `subject` and `description` matter for
/// classification; `id`, `category` and `priority` are optional.
pub fn parse_csv(content: &str) -> Result<Vec<Ticket>> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(content.as_bytes());

    reader
        .deserialize::<TicketRow>()
        .enumerate()
        .map(|(index, row)| into_ticket(row?, index))
        .collect()
}

/// Accepts a JSON array of tickets, an object with a `tickets` array, or a
/// single ticket object.
pub fn parse_json(content: &str) -> Result<Vec<Ticket>> {
    let value: serde_json::Value = serde_json::from_str(content)?;

    let items = match value {
        serde_json::Value::Array(items) => items,
        serde_json::Value::Object(mut obj) => match obj.remove("tickets") {
            Some(serde_json::Value::Array(items)) => items,
            Some(_) => {
                return Err(ClassifierError::ProcessingError {
                    message: "'tickets' must be an array".to_string(),
                })
            }
            None => vec![serde_json::Value::Object(obj)],
        },
        _ => {
            return Err(ClassifierError::ProcessingError {
                message: "expected a JSON array or object of tickets".to_string(),
            })
        }
    };

    items
        .into_iter()
        .enumerate()
        .map(|(index, item)| into_ticket(serde_json::from_value(item)?, index))
        .collect()
}

fn into_ticket(row: TicketRow, index: usize) -> Result<Ticket> {
    let row_number = index + 1;
    let subject = non_empty(row.subject).unwrap_or_default();
    let description = non_empty(row.description).unwrap_or_default();

    if subject.is_empty() && description.is_empty() {
        return Err(ClassifierError::ProcessingError {
            message: format!("row {}: subject and description are both empty", row_number),
        });
    }

    let category = non_empty(row.category)
        .map(|value| value.parse::<Category>())
        .transpose()
        .map_err(|e| ClassifierError::ValidationError {
            message: format!("row {}: {}", row_number, e),
        })?;

    let priority = non_empty(row.priority)
        .map(|value| value.parse::<Priority>())
        .transpose()
        .map_err(|e| ClassifierError::ValidationError {
            message: format!("row {}: {}", row_number, e),
        })?;

    Ok(Ticket {
        id: non_empty(row.id).unwrap_or_else(|| format!("ticket-{}", row_number)),
        subject,
        description,
        category,
        priority,
    })
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}
