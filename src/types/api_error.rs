//! API error detail returned by the payment backend

use serde::{Deserialize, Serialize};

/// Error categories documented by the backend.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiErrorType {
    ApiError,
    CardError,
    IdempotencyError,
    InvalidRequestError,
}

impl ApiErrorType {
    /// Parse a wire error type, returning `None` for unrecognized categories
    pub fn from_wire(value: &str) -> Option<Self> {
        match value {
            "api_error" => Some(Self::ApiError),
            "card_error" => Some(Self::CardError),
            "idempotency_error" => Some(Self::IdempotencyError),
            "invalid_request_error" => Some(Self::InvalidRequestError),
            _ => None,
        }
    }
}

/// Structured failure detail from the backend.
///
/// This is a data carrier attached to failed results, not a Rust error type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApiError {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    error_type: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    charge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    decline_code: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    doc_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    param: Option<String>,
}

impl ApiError {
    /// Decode an API error from its JSON representation
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The raw error type string
    pub fn error_type(&self) -> Option<&str> {
        self.error_type.as_deref()
    }

    /// The error type as a known category
    pub fn kind(&self) -> Option<ApiErrorType> {
        self.error_type.as_deref().and_then(ApiErrorType::from_wire)
    }

    /// ID of the failed charge, if applicable
    pub fn charge(&self) -> Option<&str> {
        self.charge.as_deref()
    }

    /// Short code for errors that can be handled programmatically
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Card issuer's reason for a decline, if provided
    pub fn decline_code(&self) -> Option<&str> {
        self.decline_code.as_deref()
    }

    /// URL with more information about the error code
    pub fn doc_url(&self) -> Option<&str> {
        self.doc_url.as_deref()
    }

    /// Human-readable message. For card errors this can be shown to users.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }

    /// The parameter related to the error, if parameter-specific
    pub fn param(&self) -> Option<&str> {
        self.param.as_deref()
    }

    /// Whether the failure is a structural card decline rather than a transient fault
    pub fn is_decline(&self) -> bool {
        self.decline_code.is_some() || self.kind() == Some(ApiErrorType::CardError)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_card_decline() {
        let error = ApiError::from_json(
            r#"{
                "type": "card_error",
                "code": "card_declined",
                "decline_code": "insufficient_funds",
                "message": "Your card has insufficient funds.",
                "charge": "ch_123"
            }"#,
        )
        .unwrap();

        assert_eq!(error.kind(), Some(ApiErrorType::CardError));
        assert_eq!(error.decline_code(), Some("insufficient_funds"));
        assert_eq!(error.charge(), Some("ch_123"));
        assert_eq!(error.param(), None);
        assert!(error.is_decline());
    }

    #[test]
    fn test_all_fields_optional() {
        let error = ApiError::from_json("{}").unwrap();
        assert_eq!(error.error_type(), None);
        assert_eq!(error.kind(), None);
        assert!(!error.is_decline());
        assert_eq!(serde_json::to_string(&error).unwrap(), "{}");
    }

    #[test]
    fn test_unrecognized_type() {
        let error = ApiError::from_json(r#"{"type": "rate_limit_error"}"#).unwrap();
        assert_eq!(error.error_type(), Some("rate_limit_error"));
        assert_eq!(error.kind(), None);
    }
}
