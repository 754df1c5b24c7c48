use thiserror::Error;

#[derive(Error, Debug)]
pub enum CompareError {
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Missing required argument: {field}")]
    MissingArgumentError { field: String },

    #[error("Invalid value for {field}: '{value}' ({reason})")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Configuration,
    Serialization,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl CompareError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            CompareError::SerializationError(_) => ErrorCategory::Serialization,
            CompareError::MissingArgumentError { .. }
            | CompareError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            CompareError::SerializationError(_) => ErrorSeverity::Critical,
            CompareError::MissingArgumentError { .. }
            | CompareError::InvalidConfigValueError { .. } => ErrorSeverity::High,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            CompareError::SerializationError(e) => {
                format!("Failed to render the comparison report: {}", e)
            }
            CompareError::MissingArgumentError { field } => {
                format!("Missing required argument: {}", field)
            }
            CompareError::InvalidConfigValueError { field, value, reason } => {
                format!("Invalid value '{}' for {}: {}", value, field, reason)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            CompareError::SerializationError(_) => {
                "Re-run without --json to get the plain text verdict".to_string()
            }
            CompareError::MissingArgumentError { .. } => {
                "Provide exactly two strings, e.g. small-compare abc abc".to_string()
            }
            CompareError::InvalidConfigValueError { .. } => {
                "Check small-compare --help for the accepted values".to_string()
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, CompareError>;
