//! Failure outcomes of confirm and refund commands

use super::api_error::ApiError;

/// How the caller should react to a failed command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FailureDisposition {
    /// The backend never answered; the object's state is unknown. Retry with
    /// the original parameters.
    RetryWithOriginal,
    /// The payment method was declined; act on the decline code.
    Declined,
    /// The backend answered with an updated object; inspect its status.
    InspectObject,
}

/// A failed confirm/refund command.
///
/// `object` holds the updated PaymentIntent or Refund when the backend
/// responded, and `api_error` the structured failure detail when one was
/// returned.
#[derive(Debug, Clone, PartialEq)]
pub struct CommandFailure<T> {
    object: Option<T>,
    api_error: Option<ApiError>,
}

impl<T> CommandFailure<T> {
    /// Create a failure for the external command layer to hand back
    pub fn new(object: Option<T>, api_error: Option<ApiError>) -> Self {
        Self { object, api_error }
    }

    pub fn object(&self) -> Option<&T> {
        self.object.as_ref()
    }

    pub fn api_error(&self) -> Option<&ApiError> {
        self.api_error.as_ref()
    }

    /// Consume the failure and return the updated object, if any
    pub fn into_object(self) -> Option<T> {
        self.object
    }

    /// Classify the failure
    pub fn disposition(&self) -> FailureDisposition {
        if self.object.is_none() {
            return FailureDisposition::RetryWithOriginal;
        }

        match &self.api_error {
            Some(error) if error.is_decline() => FailureDisposition::Declined,
            _ => FailureDisposition::InspectObject,
        }
    }
}
