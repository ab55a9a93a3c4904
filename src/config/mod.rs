pub mod toml_config;

#[cfg(feature = "cli")]
use crate::app::report::OutputFormat;
#[cfg(feature = "cli")]
use crate::utils::error::{ClassifierError, Result};
#[cfg(feature = "cli")]
use crate::utils::validation::{validate_file_extension, validate_path, Validate};
#[cfg(feature = "cli")]
use clap::Parser;

pub use toml_config::TomlConfig;

#[cfg(feature = "cli")]
pub const INPUT_EXTENSIONS: [&str; 2] = ["csv", "json"];

#[cfg(feature = "cli")]
#[derive(Debug, Clone, Parser)]
#[command(name = "ticket-classifier")]
#[command(about = "Auto-tag support tickets with a category and a priority")]
pub struct CliConfig {
    #[arg(long, help = "CSV or JSON file with tickets to classify")]
    pub input: Option<String>,

    #[arg(long, help = "Subject of a single ad-hoc ticket")]
    pub subject: Option<String>,

    #[arg(long, default_value = "", help = "Description of a single ad-hoc ticket")]
    pub description: String,

    #[arg(long, help = "TOML configuration file")]
    pub config: Option<String>,

    #[arg(long, help = "Output format (json or csv), overrides the config file")]
    pub format: Option<OutputFormat>,

    #[arg(long, help = "Write the report here instead of stdout")]
    pub output: Option<String>,

    #[arg(long, help = "Return results without applying them to the tickets")]
    pub no_apply: bool,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,

    #[arg(long, help = "Emit logs as JSON lines")]
    pub json_logs: bool,
}

#[cfg(feature = "cli")]
impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        match (&self.input, &self.subject) {
            (Some(_), Some(_)) => Err(ClassifierError::ConfigValidationError {
                field: "input".to_string(),
                message: "use either --input or --subject, not both".to_string(),
            }),
            (None, None) => Err(ClassifierError::ConfigValidationError {
                field: "input".to_string(),
                message: "either --input or --subject is required".to_string(),
            }),
            (Some(input), None) => {
                validate_path("input", input)?;
                validate_file_extension("input", input, &INPUT_EXTENSIONS)
            }
            (None, Some(_)) => Ok(()),
        }?;

        if let Some(config) = &self.config {
            validate_path("config", config)?;
        }
        if let Some(output) = &self.output {
            validate_path("output", output)?;
        }

        Ok(())
    }
}

#[cfg(all(test, feature = "cli"))]
mod tests {
    use super::*;

    #[test]
    fn test_requires_exactly_one_source() {
        let none = CliConfig::parse_from(["ticket-classifier"]);
        assert!(none.validate().is_err());

        let both = CliConfig::parse_from([
            "ticket-classifier",
            "--input",
            "tickets.csv",
            "--subject",
            "Login issue",
        ]);
        assert!(both.validate().is_err());

        let adhoc = CliConfig::parse_from(["ticket-classifier", "--subject", "Login issue"]);
        assert!(adhoc.validate().is_ok());
    }

    #[test]
    fn test_rejects_unsupported_input_extension() {
        let config = CliConfig::parse_from(["ticket-classifier", "--input", "tickets.xml"]);
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_parses_format_flag() {
        let config = CliConfig::parse_from([
            "ticket-classifier",
            "--input",
            "tickets.json",
            "--format",
            "csv",
            "--no-apply",
        ]);
        assert_eq!(config.format, Some(OutputFormat::Csv));
        assert!(config.no_apply);
        assert!(config.validate().is_ok());
    }
}
