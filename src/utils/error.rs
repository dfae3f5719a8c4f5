use std::fmt;
use thiserror::Error;

/// 驗證失敗的種類
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationKind {
    MissingField,
    NonNumeric,
    InvalidCategory,
}

impl fmt::Display for ValidationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingField => write!(f, "missing field"),
            Self::NonNumeric => write!(f, "non-numeric input"),
            Self::InvalidCategory => write!(f, "invalid categorical value"),
        }
    }
}

/// A rejected form field. Always names the offending field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    pub kind: ValidationKind,
    pub field: String,
    pub value: Option<String>,
}

impl ValidationError {
    pub fn missing(field: &str) -> Self {
        Self {
            kind: ValidationKind::MissingField,
            field: field.to_string(),
            value: None,
        }
    }

    pub fn non_numeric(field: &str, value: &str) -> Self {
        Self {
            kind: ValidationKind::NonNumeric,
            field: field.to_string(),
            value: Some(value.to_string()),
        }
    }

    pub fn invalid_category(field: &str, value: &str) -> Self {
        Self {
            kind: ValidationKind::InvalidCategory,
            field: field.to_string(),
            value: Some(value.to_string()),
        }
    }
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.kind, &self.value) {
            (ValidationKind::MissingField, _) => write!(f, "Missing value for {}", self.field),
            (ValidationKind::NonNumeric, Some(value)) => {
                write!(f, "{} must be a number, got '{}'", self.field, value)
            }
            (ValidationKind::InvalidCategory, Some(value)) => {
                write!(f, "Invalid value for {}: '{}'", self.field, value)
            }
            (kind, None) => write!(f, "Invalid value for {} ({})", self.field, kind),
        }
    }
}

impl std::error::Error for ValidationError {}

#[derive(Error, Debug)]
pub enum RiskError {
    #[error("{0}")]
    Validation(#[from] ValidationError),

    #[error("Failed to load model from '{path}': {message}")]
    ModelLoad { path: String, message: String },

    #[error("Inference failed: {message}")]
    Inference { message: String },

    #[error("CSV processing error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    #[error("Configuration error in '{field}': {message}")]
    ConfigValidation { field: String, message: String },

    #[error("Invalid value '{value}' for '{field}': {reason}")]
    InvalidConfigValue {
        field: String,
        value: String,
        reason: String,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Input,
    Model,
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

impl RiskError {
    pub fn inference(message: impl Into<String>) -> Self {
        Self::Inference {
            message: message.into(),
        }
    }

    pub fn model_load(path: impl Into<String>, message: impl Into<String>) -> Self {
        Self::ModelLoad {
            path: path.into(),
            message: message.into(),
        }
    }

    pub fn category(&self) -> ErrorCategory {
        match self {
            Self::Validation(_) | Self::CsvError(_) => ErrorCategory::Input,
            Self::ModelLoad { .. } | Self::Inference { .. } => ErrorCategory::Model,
            Self::ConfigValidation { .. } | Self::InvalidConfigValue { .. } => {
                ErrorCategory::Configuration
            }
            Self::IoError(_) | Self::SerializationError(_) => ErrorCategory::System,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            Self::Validation(_) => ErrorSeverity::Low,
            Self::Inference { .. } | Self::CsvError(_) => ErrorSeverity::Medium,
            Self::ConfigValidation { .. } | Self::InvalidConfigValue { .. } => ErrorSeverity::High,
            Self::ModelLoad { .. } | Self::IoError(_) | Self::SerializationError(_) => {
                ErrorSeverity::Critical
            }
        }
    }

    /// 給使用者看的訊息；推論細節只寫進日誌
    pub fn user_friendly_message(&self) -> String {
        match self {
            Self::Validation(e) => e.to_string(),
            Self::Inference { .. } => "Prediction failed. Please try again later.".to_string(),
            Self::ModelLoad { path, .. } => format!("Could not load the model file '{}'", path),
            Self::ConfigValidation { field, .. } | Self::InvalidConfigValue { field, .. } => {
                format!("Configuration problem with '{}'", field)
            }
            Self::CsvError(_) => "The input file is not valid CSV".to_string(),
            Self::IoError(_) | Self::SerializationError(_) => {
                "An unexpected error occurred".to_string()
            }
        }
    }

    pub fn recovery_suggestion(&self) -> &'static str {
        match self {
            Self::Validation(_) => "Check the highlighted field and submit the form again",
            Self::Inference { .. } => "Verify the model artifact matches the encoded feature set",
            Self::ModelLoad { .. } => "Make sure the model file exists and is a valid JSON export",
            Self::ConfigValidation { .. } | Self::InvalidConfigValue { .. } => {
                "Fix the configuration file or command-line flags"
            }
            Self::CsvError(_) => "Make sure the header row names every form field",
            Self::IoError(_) => "Check file paths and permissions",
            Self::SerializationError(_) => "Check the JSON document for syntax errors",
        }
    }

    /// 嚴重程度對應的行程結束碼
    pub fn exit_code(&self) -> i32 {
        match self.severity() {
            ErrorSeverity::Low => 0,
            ErrorSeverity::Medium => 2,
            ErrorSeverity::High => 1,
            ErrorSeverity::Critical => 3,
        }
    }
}

pub type Result<T> = std::result::Result<T, RiskError>;
