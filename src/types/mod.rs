//! Read-only value objects and enumerated option types
//!
//! Value objects are snapshots of backend state. They are never built by the
//! integrating application: they are decoded from the payment API's JSON
//! representation (via `serde` or the `from_json` helpers) and exposed through
//! read-only accessors. Every nullable wire field is an `Option`, and absence
//! survives a round trip.
//!
//! # Architecture
//!
//! - [`options`] - Enumerated option types with their documented defaults
//! - [`payment_intent`] - PaymentIntent snapshots and their status
//! - [`charge`] - Charges and refunds
//! - [`payment_method`] - Payment method and card details
//! - [`next_action`] - Redirect, QR code and SDK authentication follow-ups
//! - [`qr_code`] - QR code display data
//! - [`api_error`] - Structured backend failure detail
//! - [`collected_data`] - Results of non-payment data collection
//! - [`outcome`] - Failed command outcomes and their disposition
//!
//! # Examples
//!
//! ```
//! use rust_terminal::types::{PaymentIntent, PaymentIntentStatus};
//!
//! # fn main() -> rust_terminal::Result<()> {
//! let intent = PaymentIntent::from_json(
//!     r#"{
//!         "amount": 1000,
//!         "currency": "usd",
//!         "capture_method": "manual",
//!         "created": 1745323800,
//!         "status": "requires_payment_method",
//!         "offline_details": { "stored_at": 1745323800, "requires_upload": true }
//!     }"#,
//! )?;
//!
//! // Created offline: no identifier yet
//! assert_eq!(intent.stripe_id(), None);
//! assert!(intent.requires_upload());
//! assert_eq!(intent.status(), PaymentIntentStatus::RequiresPaymentMethod);
//! # Ok(())
//! # }
//! ```

pub mod api_error;
pub mod charge;
pub mod collected_data;
pub mod next_action;
pub mod options;
pub mod outcome;
pub mod payment_intent;
pub mod payment_method;
pub mod qr_code;


// Re-export commonly used types
pub use api_error::{ApiError, ApiErrorType};
pub use charge::{Charge, ChargeStatus, Refund, RefundStatus};
pub use collected_data::{CollectedData, MagstripeCollectedData, NfcUidCollectedData};
pub use next_action::{
    NextAction, NextActionDetails, RedirectToUrl, UseStripeSdk, WechatPayDisplayQrCode,
};
pub use options::{
    AllowRedisplay, CaptureMethod, CollectDataType, CustomerCancellation, PaymentMethodType,
    PaymentOption, PaymentOptionType, SetupIntentCollectionReason,
};
pub use outcome::{CommandFailure, FailureDisposition};
pub use payment_intent::{AmountDetails, OfflineDetails, PaymentIntent, PaymentIntentStatus, Tip};
pub use payment_method::{CardPresentDetails, GeneratedFrom, PaymentMethod, PaymentMethodDetails};
pub use qr_code::QrCodeDisplayData;
