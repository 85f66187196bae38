use thiserror::Error;

#[derive(Error, Debug)]
pub enum GtinError {
    #[error("\"{input}\" is not a valid GTIN")]
    InvalidGtin { input: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for {field}: \"{value}\" ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl GtinError {
    pub fn invalid(input: impl Into<String>) -> Self {
        GtinError::InvalidGtin {
            input: input.into(),
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            GtinError::InvalidGtin { .. } => ErrorSeverity::High,
            GtinError::CsvError(_) | GtinError::SerializationError(_) => ErrorSeverity::High,
            GtinError::ConfigError { .. }
            | GtinError::InvalidConfigValueError { .. }
            | GtinError::MissingConfigError { .. } => ErrorSeverity::Medium,
            GtinError::IoError(_) => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            GtinError::InvalidGtin { .. } => {
                "Check the digits and the trailing check digit; only 0-9 are accepted"
            }
            GtinError::CsvError(_) => "Verify the input delimiter, header row and column name",
            GtinError::IoError(_) => "Make sure the file exists and is readable/writable",
            GtinError::SerializationError(_) => "Re-run with --format csv or check the output path",
            GtinError::ConfigError { .. }
            | GtinError::InvalidConfigValueError { .. }
            | GtinError::MissingConfigError { .. } => {
                "Fix the configuration file or the command line arguments"
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            GtinError::InvalidGtin { input } => format!("Rejected \"{}\": not a valid GTIN", input),
            GtinError::MissingConfigError { field } => {
                format!("The setting '{}' is required", field)
            }
            GtinError::InvalidConfigValueError { field, reason, .. } => {
                format!("The setting '{}' is invalid: {}", field, reason)
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, GtinError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_invalid_gtin_message_keeps_input() {
        let err = GtinError::invalid("0012a");
        assert_eq!(err.to_string(), "\"0012a\" is not a valid GTIN");
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.severity().exit_code(), 1);
    }

    #[test]
    fn test_every_error_exits_non_zero() {
        let errors = [
            GtinError::invalid("12a456"),
            GtinError::IoError(std::io::Error::new(std::io::ErrorKind::NotFound, "gone")),
            GtinError::ConfigError {
                message: "bad".to_string(),
            },
            GtinError::MissingConfigError {
                field: "input.path".to_string(),
            },
        ];
        for err in errors {
            assert_ne!(err.severity().exit_code(), 0, "{}", err);
        }
        assert_eq!(ErrorSeverity::Critical.exit_code(), 3);
    }

    #[test]
    fn test_config_errors_are_medium() {
        let err = GtinError::MissingConfigError {
            field: "input.path".to_string(),
        };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert!(err.user_friendly_message().contains("input.path"));
    }
}
