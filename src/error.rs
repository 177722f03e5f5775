//! Error types for configuration building and wire decoding

use thiserror::Error;

/// Result type alias for terminal model operations
pub type Result<T> = std::result::Result<T, TerminalError>;

/// Errors raised synchronously while building configurations or decoding
/// value objects.
///
/// Failures reported by the payment backend are not represented here; those
/// travel as [`crate::types::ApiError`] values.
#[derive(Error, Debug)]
pub enum TerminalError {
    /// A field was set to a value outside its accepted range or format
    #[error("Invalid value for `{field}`: {message}")]
    InvalidField {
        field: &'static str,
        message: String,
    },

    /// A required field was never set on the builder
    #[error("Missing required field `{field}`")]
    MissingField { field: &'static str },

    /// A URL field could not be parsed
    #[error("Invalid URL for `{field}`: {source}")]
    InvalidUrl {
        field: &'static str,
        #[source]
        source: url::ParseError,
    },

    /// A payment option was constructed with a payment method type of the wrong family
    #[error("Invalid payment option: {message}")]
    InvalidPaymentOption { message: String },

    /// A next action payload disagrees with its declared type
    #[error("Inconsistent next action: {message}")]
    InconsistentNextAction { message: String },

    /// No discovered reader matched the discovery filter
    #[error("No reader matched the discovery filter")]
    NoReaderFound,

    /// More than one discovered reader matched the discovery filter
    #[error("Discovery matched {count} readers; the discovery filter must narrow results to one reader")]
    MultipleReadersFound { count: usize },

    /// JSON encoding or decoding error
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Base64 decoding error
    #[error("Base64 error: {0}")]
    Base64(#[from] base64::DecodeError),
}

impl TerminalError {
    /// Create an invalid field error
    pub fn invalid_field(field: &'static str, message: impl Into<String>) -> Self {
        Self::InvalidField {
            field,
            message: message.into(),
        }
    }

    /// Create a missing field error
    pub fn missing_field(field: &'static str) -> Self {
        Self::MissingField { field }
    }

    /// Create an invalid payment option error
    pub fn invalid_payment_option(message: impl Into<String>) -> Self {
        Self::InvalidPaymentOption {
            message: message.into(),
        }
    }

    /// Create an inconsistent next action error
    pub fn inconsistent_next_action(message: impl Into<String>) -> Self {
        Self::InconsistentNextAction {
            message: message.into(),
        }
    }

    /// Whether the error stems from caller-supplied builder input
    pub fn is_validation_error(&self) -> bool {
        matches!(
            self,
            Self::InvalidField { .. }
                | Self::MissingField { .. }
                | Self::InvalidUrl { .. }
                | Self::InvalidPaymentOption { .. }
        )
    }
}
