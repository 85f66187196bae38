use crate::core::batch::{BatchOptions, InputFormat, ReportFormat};
use crate::utils::error::{GtinError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;

/// Batch run settings, usually loaded from a TOML file and then overridden
/// from the command line.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct BatchConfig {
    #[serde(default)]
    pub input: InputConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub policy: PolicyConfig,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InputConfig {
    pub path: Option<String>,
    pub format: Option<InputFormat>,
    pub column: Option<String>,
    pub delimiter: Option<String>,
    pub trim: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct OutputConfig {
    /// Report goes to stdout when unset.
    pub path: Option<String>,
    pub format: Option<ReportFormat>,
    pub sort: Option<bool>,
    pub dedup: Option<bool>,
    pub only_valid: Option<bool>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PolicyConfig {
    pub fail_on_invalid: Option<bool>,
}

impl BatchConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(GtinError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// Parses `content` after replacing `${VAR}` with process environment values.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        Self::from_toml_str_with(content, |name| std::env::var(name).ok())
    }

    /// Like [`BatchConfig::from_toml_str`], resolving `${VAR}` through `lookup`.
    pub fn from_toml_str_with<F>(content: &str, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let processed_content = Self::substitute_vars(content, lookup)?;

        toml::from_str(&processed_content).map_err(|e| GtinError::ConfigError {
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// Unresolved variables are left as written.
    fn substitute_vars<F>(content: &str, lookup: F) -> Result<String>
    where
        F: Fn(&str) -> Option<String>,
    {
        let re = Regex::new(r"\$\{([^}]+)\}").map_err(|e| GtinError::ConfigError {
            message: format!("Invalid substitution pattern: {}", e),
        })?;

        let result = re.replace_all(content, |caps: &regex::Captures| {
            let var_name = &caps[1];
            lookup(var_name).unwrap_or_else(|| format!("${{{}}}", var_name))
        });

        Ok(result.to_string())
    }

    pub fn input_path(&self) -> Result<&str> {
        validation::validate_required_field("input.path", &self.input.path).map(String::as_str)
    }

    pub fn output_path(&self) -> Option<&str> {
        self.output.path.as_deref()
    }

    pub fn report_format(&self) -> ReportFormat {
        self.output.format.unwrap_or_default()
    }

    pub fn fail_on_invalid(&self) -> bool {
        self.policy.fail_on_invalid.unwrap_or(false)
    }

    pub fn to_options(&self) -> Result<BatchOptions> {
        let defaults = BatchOptions::default();
        let delimiter = match &self.input.delimiter {
            Some(delimiter) => validation::validate_delimiter("input.delimiter", delimiter)?,
            None => defaults.delimiter,
        };

        Ok(BatchOptions {
            input_format: self.input.format.unwrap_or(defaults.input_format),
            column: self.input.column.clone().unwrap_or(defaults.column),
            delimiter,
            trim: self.input.trim.unwrap_or(defaults.trim),
            sort: self.output.sort.unwrap_or(defaults.sort),
            dedup: self.output.dedup.unwrap_or(defaults.dedup),
            only_valid: self.output.only_valid.unwrap_or(defaults.only_valid),
        })
    }

    pub fn validate_config(&self) -> Result<()> {
        let input_path = self.input_path()?;
        validation::validate_path("input.path", input_path)?;

        if let Some(output_path) = self.output_path() {
            validation::validate_path("output.path", output_path)?;
        }

        if let Some(column) = &self.input.column {
            validation::validate_non_empty_string("input.column", column)?;
        }

        if let Some(delimiter) = &self.input.delimiter {
            validation::validate_delimiter("input.delimiter", delimiter)?;
        }

        Ok(())
    }
}

impl Validate for BatchConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
