//! Error types for form schema parsing and generation

use thiserror::Error;

/// Errors that can occur while turning a JSON form description into markup
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum FormError {
    /// Input is not valid JSON, not UTF-8, or has the wrong shape
    #[error("{0}")]
    MalformedInput(String),

    /// A mandatory key is absent (formName, fields, a field's type or name)
    #[error("Missing required field: {0}")]
    MissingRequiredField(String),

    /// A dropdown or radio field has no options to render
    #[error("Missing options for {field_type} field '{name}'")]
    MissingOptions { name: String, field_type: String },

    /// The field type tag is not one the generator knows how to render
    #[error("Unsupported field type: {0}")]
    UnsupportedFieldType(String),
}

impl FormError {
    /// Stable label for logs and metrics
    pub fn kind(&self) -> &'static str {
        match self {
            Self::MalformedInput(_) => "malformed_input",
            Self::MissingRequiredField(_) => "missing_required_field",
            Self::MissingOptions { .. } => "missing_options",
            Self::UnsupportedFieldType(_) => "unsupported_field_type",
        }
    }
}

impl From<serde_json::Error> for FormError {
    fn from(err: serde_json::Error) -> Self {
        FormError::MalformedInput(err.to_string())
    }
}

impl From<std::str::Utf8Error> for FormError {
    fn from(err: std::str::Utf8Error) -> Self {
        FormError::MalformedInput(format!("request body is not valid UTF-8: {}", err))
    }
}

/// Result type alias for form operations
pub type FormResult<T> = Result<T, FormError>;
