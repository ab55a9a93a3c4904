use thiserror::Error;

#[derive(Error, Debug)]
pub enum ClassifierError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("TOML parsing error: {0}")]
    TomlError(#[from] toml::de::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },

    #[error("Validation error: {message}")]
    ValidationError { message: String },
}

impl ClassifierError {
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::IoError(e) => format!("Could not read or write a file: {}", e),
            Self::CsvError(e) => format!("The CSV input could not be parsed: {}", e),
            Self::SerializationError(e) => format!("The JSON input could not be parsed: {}", e),
            Self::TomlError(e) => format!("The configuration file is not valid TOML: {}", e),
            Self::ConfigValidationError { field, message } => {
                format!("Configuration problem with {}: {}", field, message)
            }
            Self::InvalidConfigValueError { field, value, reason } => {
                format!("'{}' is not a valid value for {}: {}", value, field, reason)
            }
            Self::ProcessingError { message } => format!("Ticket input problem: {}", message),
            Self::ValidationError { message } => format!("Invalid ticket data: {}", message),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::IoError(_) => "Check that the path exists and is readable.",
            Self::CsvError(_) => {
                "Make sure the CSV has a header row with subject and description columns."
            }
            Self::SerializationError(_) => {
                "Provide a JSON array of tickets or an object with a 'tickets' array."
            }
            Self::TomlError(_) | Self::ConfigValidationError { .. } => {
                "Fix the configuration file and try again."
            }
            Self::InvalidConfigValueError { .. } => "Use one of the accepted values listed above.",
            Self::ProcessingError { .. } | Self::ValidationError { .. } => {
                "Fix the offending ticket row and rerun."
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ClassifierError>;
