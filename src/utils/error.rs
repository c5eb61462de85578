use thiserror::Error;

#[derive(Error, Debug)]
pub enum CalcWeatherError {
    #[error("Invalid argument: {message}")]
    InvalidArgument { message: String },

    #[error("API request failed: {0}")]
    ApiError(#[from] reqwest::Error),

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
    Arithmetic,
    Network,
    Data,
    Configuration,
    System,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ErrorSeverity {
    /// Process exit code for the CLI.
    pub fn exit_code(self) -> i32 {
        match self {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

impl CalcWeatherError {
    pub fn invalid_argument(message: impl Into<String>) -> Self {
        Self::InvalidArgument {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::InvalidArgument { .. } => ErrorCategory::Arithmetic,
            Self::ApiError(_) => ErrorCategory::Network,
            Self::SerializationError(_) => ErrorCategory::Data,
            Self::IoError(_) => ErrorCategory::System,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorCategory::Configuration,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::ApiError(e) if e.is_timeout() || e.is_connect() => ErrorSeverity::Medium,
            Self::ApiError(_) | Self::SerializationError(_) => ErrorSeverity::High,
            Self::InvalidArgument { .. } => ErrorSeverity::High,
            Self::IoError(_) => ErrorSeverity::Critical,
            Self::ConfigError { .. }
            | Self::ConfigValidationError { .. }
            | Self::InvalidConfigValueError { .. }
            | Self::MissingConfigError { .. } => ErrorSeverity::Critical,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            Self::InvalidArgument { .. } => {
                "Check the operands; the divisor must be non-zero".to_string()
            }
            Self::ApiError(e) if e.is_timeout() => {
                "The weather provider timed out; retry or raise --timeout-seconds".to_string()
            }
            Self::ApiError(e) if e.status().is_some() => format!(
                "The weather provider answered with status {}; check the city name and API key",
                e.status().map(|s| s.as_u16()).unwrap_or_default()
            ),
            Self::ApiError(_) => {
                "Check network connectivity and the configured endpoint".to_string()
            }
            Self::SerializationError(_) => {
                "The provider response was not a JSON object; verify the endpoint".to_string()
            }
            Self::IoError(_) => "Check file paths and permissions".to_string(),
            Self::ConfigError { .. } | Self::ConfigValidationError { .. } => {
                "Review the configuration file syntax".to_string()
            }
            Self::InvalidConfigValueError { field, .. } => {
                format!("Correct the value of '{}'", field)
            }
            Self::MissingConfigError { field } => {
                format!("Provide '{}' via the command line or configuration file", field)
            }
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::InvalidArgument { message } => format!("Cannot compute: {}", message),
            Self::ApiError(_) => "Failed to fetch weather data".to_string(),
            Self::SerializationError(_) => "Weather data could not be decoded".to_string(),
            Self::IoError(e) => format!("File access failed: {}", e),
            _ => format!("Configuration problem: {}", self),
        }
    }
}

pub type Result<T> = std::result::Result<T, CalcWeatherError>;
