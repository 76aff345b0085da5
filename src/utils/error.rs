use thiserror::Error;

#[derive(Error, Debug)]
pub enum FinderError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("CSV export error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Settings file error in '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },

    #[error("Duplicate client id '{id}' in store")]
    DuplicateClientIdError { id: String },

    #[error("Data processing error: {message}")]
    ProcessingError { message: String },
}

/// How bad an error is, for exit-code mapping in the binaries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Config,
    Data,
    Io,
    Internal,
}

impl FinderError {
    pub fn severity(&self) -> ErrorSeverity {
        match self {
            FinderError::IoError(_) => ErrorSeverity::Critical,
            // Bad input data: correctable by the operator, worth a retry.
            FinderError::SerializationError(_) | FinderError::DuplicateClientIdError { .. } => {
                ErrorSeverity::Medium
            }
            FinderError::ConfigValidationError { .. }
            | FinderError::InvalidConfigValueError { .. }
            | FinderError::MissingConfigError { .. }
            | FinderError::CsvError(_)
            | FinderError::ProcessingError { .. } => ErrorSeverity::High,
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            FinderError::IoError(_) => ErrorCategory::Io,
            FinderError::SerializationError(_)
            | FinderError::CsvError(_)
            | FinderError::DuplicateClientIdError { .. } => ErrorCategory::Data,
            FinderError::ConfigValidationError { .. }
            | FinderError::InvalidConfigValueError { .. }
            | FinderError::MissingConfigError { .. } => ErrorCategory::Config,
            FinderError::ProcessingError { .. } => ErrorCategory::Internal,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            FinderError::IoError(_) => {
                "Check that the paths exist and are readable/writable".to_string()
            }
            FinderError::SerializationError(_) => {
                "Check that the store file is valid JSON with the expected client fields"
                    .to_string()
            }
            FinderError::CsvError(_) => {
                "Retry without the csv format, or report this as a bug".to_string()
            }
            FinderError::ConfigValidationError { field, .. } => {
                format!("Fix the '{field}' section of the settings file")
            }
            FinderError::InvalidConfigValueError { field, .. } => {
                format!("Adjust '{field}' and run again")
            }
            FinderError::MissingConfigError { field } => {
                format!("Provide '{field}' on the command line or in the settings file")
            }
            FinderError::DuplicateClientIdError { .. } => {
                "Make every client id in the store file unique".to_string()
            }
            FinderError::ProcessingError { .. } => {
                "Re-run with --verbose and inspect the logs".to_string()
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            FinderError::IoError(e) => format!("File access failed: {e}"),
            FinderError::SerializationError(e) => format!("Could not read the client store: {e}"),
            FinderError::CsvError(e) => format!("CSV export failed: {e}"),
            FinderError::ConfigValidationError { field, message } => {
                format!("Settings problem ({field}): {message}")
            }
            FinderError::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("'{value}' is not a valid {field}: {reason}"),
            FinderError::MissingConfigError { field } => format!("'{field}' was not provided"),
            FinderError::DuplicateClientIdError { id } => {
                format!("Client id '{id}' appears more than once in the store")
            }
            FinderError::ProcessingError { message } => format!("Processing failed: {message}"),
        }
    }
}

pub type Result<T> = std::result::Result<T, FinderError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn severity_maps_to_taxonomy() {
        let err = FinderError::DuplicateClientIdError { id: "1".into() };
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.category(), ErrorCategory::Data);

        let err = FinderError::MissingConfigError {
            field: "output".into(),
        };
        assert_eq!(err.severity(), ErrorSeverity::High);
        assert_eq!(err.category(), ErrorCategory::Config);
    }

    #[test]
    fn suggestions_name_the_field() {
        let err = FinderError::InvalidConfigValueError {
            field: "min_score".into(),
            value: "250".into(),
            reason: "must be between 0 and 100".into(),
        };
        assert!(err.recovery_suggestion().contains("min_score"));
        assert!(err.user_friendly_message().contains("250"));
    }
}
