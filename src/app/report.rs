use crate::app::classification_service::TicketClassification;
use crate::utils::error::{ClassifierError, Result};
use std::path::Path;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
pub enum OutputFormat {
    Json,
    Csv,
}

impl FromStr for OutputFormat {
    type Err = ClassifierError;

    fn from_str(s: &str) -> Result<Self> {
        match s.trim().to_lowercase().as_str() {
            "json" => Ok(Self::Json),
            "csv" => Ok(Self::Csv),
            _ => Err(ClassifierError::InvalidConfigValueError {
                field: "output.format".to_string(),
                value: s.to_string(),
                reason: "Accepted values: json, csv".to_string(),
            }),
        }
    }
}

const CSV_HEADER: [&str; 7] = [
    "ticket_id",
    "category",
    "category_confidence",
    "priority",
    "priority_confidence",
    "overall_confidence",
    "keywords",
];

pub fn render(results: &[TicketClassification], format: OutputFormat, pretty: bool) -> Result<String> {
    match format {
        OutputFormat::Json if pretty => Ok(serde_json::to_string_pretty(results)?),
        OutputFormat::Json => Ok(serde_json::to_string(results)?),
        OutputFormat::Csv => render_csv(results),
    }
}

fn render_csv(results: &[TicketClassification]) -> Result<String> {
    let mut writer = csv::Writer::from_writer(Vec::new());
    writer.write_record(CSV_HEADER)?;

    for result in results {
        let keywords = result
            .category
            .keywords_found
            .iter()
            .chain(result.priority.keywords_found.iter())
            .map(String::as_str)
            .collect::<Vec<_>>()
            .join(";");

        let category_confidence = format!("{:.2}", result.category.confidence);
        let priority_confidence = format!("{:.2}", result.priority.confidence);
        let overall_confidence = format!("{:.2}", result.overall_confidence);

        writer.write_record([
            result.ticket_id.as_str(),
            result.category.label.as_str(),
            category_confidence.as_str(),
            result.priority.label.as_str(),
            priority_confidence.as_str(),
            overall_confidence.as_str(),
            keywords.as_str(),
        ])?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ClassifierError::IoError(e.into_error()))?;

    String::from_utf8(bytes).map_err(|e| ClassifierError::ProcessingError {
        message: format!("CSV output is not valid UTF-8: {}", e),
    })
}

/// Write the rendered report to `path`, creating parent directories, or to
/// stdout when no path is given.
pub async fn write_report(path: Option<&Path>, content: &str) -> Result<()> {
    let Some(path) = path else {
        println!("{}", content);
        return Ok(());
    };

    if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
        tokio::fs::create_dir_all(parent).await?;
    }

    tokio::fs::write(path, content).await?;
    tracing::info!("Report written to {}", path.display());
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::classification_service::ClassificationService;
    use crate::domain::model::Ticket;

    fn sample_results() -> Vec<TicketClassification> {
        let mut service = ClassificationService::default();
        let mut tickets = vec![
            Ticket::new("T-1", "CRITICAL: cannot login", "Password reset is broken"),
            Ticket::new("T-2", "Hello", "General question about your services."),
        ];
        service.classify_all(&mut tickets, false)
    }

    #[test]
    fn test_parse_format() {
        assert_eq!("JSON".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("csv".parse::<OutputFormat>().unwrap(), OutputFormat::Csv);
        assert!("xml".parse::<OutputFormat>().is_err());
    }

    #[test]
    fn test_render_csv() {
        let output = render(&sample_results(), OutputFormat::Csv, false).unwrap();
        let lines: Vec<&str> = output.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(
            lines[0],
            "ticket_id,category,category_confidence,priority,priority_confidence,overall_confidence,keywords"
        );
        assert!(lines[1].starts_with("T-1,account_access,"));
        assert!(lines[1].contains(",urgent,0.80,"));
        assert_eq!(lines[2], "T-2,other,0.30,medium,0.50,0.38,");
    }

    #[test]
    fn test_render_json() {
        let output = render(&sample_results(), OutputFormat::Json, true).unwrap();
        let parsed: serde_json::Value = serde_json::from_str(&output).unwrap();

        assert_eq!(parsed[0]["ticket_id"], "T-1");
        assert_eq!(parsed[0]["category"]["label"], "account_access");
        assert_eq!(parsed[1]["priority"]["label"], "medium");
        assert_eq!(parsed[1]["auto_applied"], false);
    }

    #[tokio::test]
    async fn test_write_report_creates_directories() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("nested").join("report.json");

        write_report(Some(&path), "[]").await.unwrap();

        assert_eq!(std::fs::read_to_string(&path).unwrap(), "[]");
    }
}
