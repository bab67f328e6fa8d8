use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConvertError {
    #[error("Usage error: {message}")]
    UsageError { message: String },

    #[error("IO error on '{path}': {source}")]
    IoError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("JSON decoding error in '{path}': {source}")]
    ParseError {
        path: String,
        #[source]
        source: serde_json::Error,
    },

    #[error("No recognizable records found in '{path}'")]
    NoRecordsError { path: String },

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error: {message}")]
    ConfigError { message: String },

    #[error("Invalid value for '{field}' ({value}): {reason}")]
    InvalidConfigValueError {
        field: String,
        value: String,
        reason: String,
    },
}

/// 非致命的座標解析問題，只記錄不中止
#[derive(Error, Debug, Clone, PartialEq)]
pub enum CoordinateParseWarning {
    #[error("expected 2 components after cleaning, got {count} in '{cleaned}'")]
    WrongComponentCount { cleaned: String, count: usize },

    #[error("'{component}' is not a number")]
    InvalidNumber { component: String },

    #[error("coordinate ({lat}, {lng}) is out of range")]
    OutOfRange { lat: f64, lng: f64 },

    #[error("field '{field}' is not a {expected}")]
    WrongType {
        field: &'static str,
        expected: &'static str,
    },

    #[error("time entry has no previously parsed point in this path")]
    NoPriorPoint,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Usage,
    Io,
    Input,
    Output,
    Configuration,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl ConvertError {
    pub fn io(path: impl Into<String>, source: std::io::Error) -> Self {
        Self::IoError {
            path: path.into(),
            source,
        }
    }

    pub fn usage(message: impl Into<String>) -> Self {
        Self::UsageError {
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::UsageError { .. } => ErrorCategory::Usage,
            Self::IoError { .. } => ErrorCategory::Io,
            Self::ParseError { .. } | Self::NoRecordsError { .. } => ErrorCategory::Input,
            Self::SerializationError(_) => ErrorCategory::Output,
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                ErrorCategory::Configuration
            }
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::UsageError { .. }
            | Self::ConfigError { .. }
            | Self::InvalidConfigValueError { .. } => ErrorSeverity::Medium,
            Self::ParseError { .. } | Self::NoRecordsError { .. } => ErrorSeverity::High,
            Self::IoError { .. } | Self::SerializationError(_) => ErrorSeverity::Critical,
        }
    }

    /// 行程結束碼；任何中止的錯誤都不為 0
    pub fn exit_code(&self) -> i32 {
        match self.category() {
            ErrorCategory::Usage => 2,
            _ => 1,
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::UsageError { message } => message.clone(),
            Self::IoError { path, source } => {
                format!("Could not access file {}: {}", path, source)
            }
            Self::ParseError { path, source } => {
                format!("Error decoding JSON in {}: {}", path, source)
            }
            Self::NoRecordsError { path } => {
                format!("No recognizable keys found in the JSON file {}", path)
            }
            Self::SerializationError(e) => format!("Could not serialize GeoJSON: {}", e),
            Self::ConfigError { message } => format!("Invalid configuration: {}", message),
            Self::InvalidConfigValueError {
                field,
                value,
                reason,
            } => format!("Invalid value '{}' for {}: {}", value, field, reason),
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::UsageError { .. } => "Pass two different paths: <INPUT> <OUTPUT>",
            Self::IoError { .. } => "Check that the file exists and that you have permission to access it",
            Self::ParseError { .. } => "Make sure the input is the JSON file from your location history export",
            Self::NoRecordsError { .. } => "Re-run with --debug to list the keys present in the input",
            Self::SerializationError(_) => "Report this as a bug together with the input file",
            Self::ConfigError { .. } | Self::InvalidConfigValueError { .. } => {
                "Fix the settings file or command-line flags and try again"
            }
        }
    }
}

pub type Result<T> = std::result::Result<T, ConvertError>;
