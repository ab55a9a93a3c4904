use crate::utils::error::{ClassifierError, Result};
use crate::utils::validation::{validate_one_of, validate_range, Validate};
use serde::{Deserialize, Serialize};
use std::path::Path;

pub const DEFAULT_CATEGORY_WEIGHT: f64 = 0.6;
pub const DEFAULT_PRIORITY_WEIGHT: f64 = 0.4;
pub const OUTPUT_FORMATS: [&str; 2] = ["json", "csv"];

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlConfig {
    #[serde(default)]
    pub service: ServiceConfig,
    #[serde(default)]
    pub output: OutputConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    #[serde(default = "default_category_weight")]
    pub category_weight: f64,
    #[serde(default = "default_priority_weight")]
    pub priority_weight: f64,
    #[serde(default = "default_true")]
    pub auto_apply: bool,
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            category_weight: DEFAULT_CATEGORY_WEIGHT,
            priority_weight: DEFAULT_PRIORITY_WEIGHT,
            auto_apply: true,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct OutputConfig {
    #[serde(default = "default_format")]
    pub format: String,
    #[serde(default = "default_true")]
    pub pretty: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: default_format(),
            pretty: true,
        }
    }
}

fn default_category_weight() -> f64 {
    DEFAULT_CATEGORY_WEIGHT
}

fn default_priority_weight() -> f64 {
    DEFAULT_PRIORITY_WEIGHT
}

fn default_true() -> bool {
    true
}

fn default_format() -> String {
    "json".to_string()
}

impl TomlConfig {
    /// Load configuration from a TOML file.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path)?;
        Self::from_toml_str(&content)
    }

    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let processed_content = Self::substitute_env_vars(content)?;
        let config: TomlConfig = toml::from_str(&processed_content)?;
        Ok(config)
    }

    /// Replace `${VAR}` references with environment values; unknown ones are left as-is.
    fn substitute_env_vars(content: &str) -> Result<String> {
        use regex::Regex;
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| ClassifierError::ConfigValidationError {
            field: "environment".to_string(),
            message: e.to_string(),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }
}

impl Validate for TomlConfig {
    fn validate(&self) -> Result<()> {
        validate_range("service.category_weight", self.service.category_weight, 0.0, 1.0)?;
        validate_range("service.priority_weight", self.service.priority_weight, 0.0, 1.0)?;

        let total = self.service.category_weight + self.service.priority_weight;
        if (total - 1.0).abs() > 1e-6 {
            return Err(ClassifierError::ConfigValidationError {
                field: "service".to_string(),
                message: format!("category_weight + priority_weight must equal 1.0, got {}", total),
            });
        }

        validate_one_of("output.format", &self.output.format, &OUTPUT_FORMATS)?;

        Ok(())
    }
}
