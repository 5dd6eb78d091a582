use thiserror::Error;

#[derive(Error, Debug)]
pub enum HerdError {
    #[error("{resource} not found")]
    NotFound { resource: String },

    #[error("Bad request: {message}")]
    BadRequest { message: String },

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Configuration validation failed for '{field}': {message}")]
    ConfigValidationError { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },

    #[error("Missing required configuration: {field}")]
    MissingConfigError { field: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Client,
    Configuration,
    Storage,
    Data,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Medium,
    High,
    Critical,
}

impl HerdError {
    pub fn not_found(resource: impl Into<String>) -> Self {
        HerdError::NotFound {
            resource: resource.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            HerdError::NotFound { .. } | HerdError::BadRequest { .. } => ErrorCategory::Client,
            HerdError::ConfigError { .. }
            | HerdError::ConfigValidationError { .. }
            | HerdError::InvalidConfigValueError { .. }
            | HerdError::MissingConfigError { .. } => ErrorCategory::Configuration,
            HerdError::IoError(_) => ErrorCategory::Storage,
            HerdError::SerializationError(_) => ErrorCategory::Data,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self.category() {
            ErrorCategory::Client => ErrorSeverity::Medium,
            ErrorCategory::Configuration | ErrorCategory::Data => ErrorSeverity::High,
            ErrorCategory::Storage => ErrorSeverity::Critical,
        }
    }

    /// Process exit code for the binary.
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Medium | ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }

    /// HTTP-style status code used in the error envelope.
    pub fn status_code(&self) -> u16 {
        match self {
            HerdError::NotFound { .. } => 404,
            HerdError::BadRequest { .. } => 400,
            _ => 500,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            HerdError::NotFound { resource } => format!("{} not found", resource),
            HerdError::BadRequest { message } => message.clone(),
            HerdError::IoError(_) => "Could not read the herd data".to_string(),
            HerdError::SerializationError(_) => "Herd data is not valid JSON".to_string(),
            HerdError::ConfigError { message } => format!("Configuration problem: {}", message),
            HerdError::ConfigValidationError { field, message } => {
                format!("Configuration field '{}' is invalid: {}", field, message)
            }
            HerdError::InvalidConfigValueError { field, reason, .. } => {
                format!("Configuration field '{}' is invalid: {}", field, reason)
            }
            HerdError::MissingConfigError { field } => {
                format!("Configuration field '{}' is required", field)
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self.category() {
            ErrorCategory::Client => "Check the owner and animal identifiers",
            ErrorCategory::Configuration => "Review herdbook.toml and the command line flags",
            ErrorCategory::Storage => "Make sure the herd file exists and is readable",
            ErrorCategory::Data => "Fix the herd file so it holds a JSON array of animals",
        }
    }
}

pub type Result<T> = std::result::Result<T, HerdError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_maps_to_client_error() {
        let err = HerdError::not_found("Animal");
        assert_eq!(err.to_string(), "Animal not found");
        assert_eq!(err.status_code(), 404);
        assert_eq!(err.category(), ErrorCategory::Client);
        assert_eq!(err.severity(), ErrorSeverity::Medium);
        assert_eq!(err.exit_code(), 1);
    }

    #[test]
    fn test_io_error_is_critical() {
        let err: HerdError = std::io::Error::new(std::io::ErrorKind::NotFound, "gone").into();
        assert_eq!(err.status_code(), 500);
        assert_eq!(err.severity(), ErrorSeverity::Critical);
        assert_eq!(err.exit_code(), 3);
    }

    #[test]
    fn test_every_error_exits_nonzero() {
        let errors = [
            HerdError::BadRequest { message: "x".to_string() },
            HerdError::MissingConfigError { field: "owner".to_string() },
            HerdError::ConfigError { message: "x".to_string() },
        ];
        for err in &errors {
            assert!(err.severity() >= ErrorSeverity::Medium);
            assert!(err.exit_code() > 0);
        }
    }
}
