use thiserror::Error;

#[derive(Error, Debug)]
pub enum DocsError {
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

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

    #[error("Page data has no site.layout; cannot compute section spacing")]
    MissingLayout,

    #[error("Render error: {message}")]
    RenderError { message: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    Io,
    Data,
    Configuration,
    Rendering,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub enum ErrorSeverity {
    Low,
    Medium,
    High,
    Critical,
}

impl DocsError {
    pub fn category(&self) -> ErrorCategory {
        match self {
            DocsError::IoError(_) => ErrorCategory::Io,
            DocsError::SerializationError(_) => ErrorCategory::Data,
            DocsError::TomlError(_)
            | DocsError::ConfigValidationError { .. }
            | DocsError::InvalidConfigValueError { .. } => ErrorCategory::Configuration,
            DocsError::MissingLayout | DocsError::RenderError { .. } => ErrorCategory::Rendering,
        }
    }

    pub fn severity(&self) -> ErrorSeverity {
        match self {
            DocsError::IoError(_) => ErrorSeverity::Critical,
            DocsError::SerializationError(_) | DocsError::TomlError(_) => ErrorSeverity::High,
            DocsError::ConfigValidationError { .. }
            | DocsError::InvalidConfigValueError { .. } => ErrorSeverity::High,
            DocsError::MissingLayout => ErrorSeverity::Medium,
            DocsError::RenderError { .. } => ErrorSeverity::High,
        }
    }

    pub fn recovery_suggestion(&self) -> String {
        match self {
            DocsError::IoError(_) => {
                "Check that the output directory is writable and input files exist".to_string()
            }
            DocsError::SerializationError(_) => {
                "Page data must look like {\"site\": {\"layout\": {\"contentPadding\": \"2rem\"}}}"
                    .to_string()
            }
            DocsError::TomlError(_) => "Check the TOML syntax of the site config".to_string(),
            DocsError::ConfigValidationError { field, .. }
            | DocsError::InvalidConfigValueError { field, .. } => {
                format!("Fix the value of '{}' in the site config", field)
            }
            DocsError::MissingLayout => {
                "Set [layout] content_padding, pass --content-padding, or drop --strict".to_string()
            }
            DocsError::RenderError { .. } => "Re-run with --verbose for details".to_string(),
        }
    }

    pub fn user_friendly_message(&self) -> String {
        match self {
            DocsError::IoError(e) => format!("File system problem: {}", e),
            DocsError::SerializationError(e) => format!("Page data is not valid JSON: {}", e),
            DocsError::TomlError(e) => format!("Site config is not valid TOML: {}", e),
            DocsError::MissingLayout => {
                "No layout configuration was supplied for this page".to_string()
            }
            other => other.to_string(),
        }
    }
}

pub type Result<T> = std::result::Result<T, DocsError>;
