//! PaymentIntent value object

use super::api_error::ApiError;
use super::charge::Charge;
use super::next_action::NextAction;
use super::options::{CaptureMethod, PaymentMethodType};
use super::payment_method::PaymentMethod;
use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use std::collections::HashMap;

/// The possible statuses for a PaymentIntent.
///
/// `requires_payment_method → requires_confirmation → requires_action →
/// requires_capture → processing → {canceled | succeeded}`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentIntentStatus {
    /// Next step: collect a payment method
    RequiresPaymentMethod,
    /// Next step: confirm the payment
    RequiresConfirmation,
    /// Next step: additional customer action such as 3D Secure
    RequiresAction,
    /// Next step: capture the PaymentIntent on the backend
    RequiresCapture,
    /// In the middle of full EMV processing
    Processing,
    Canceled,
    Succeeded,
}

impl PaymentIntentStatus {
    /// Get the wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            PaymentIntentStatus::RequiresPaymentMethod => "requires_payment_method",
            PaymentIntentStatus::RequiresConfirmation => "requires_confirmation",
            PaymentIntentStatus::RequiresAction => "requires_action",
            PaymentIntentStatus::RequiresCapture => "requires_capture",
            PaymentIntentStatus::Processing => "processing",
            PaymentIntentStatus::Canceled => "canceled",
            PaymentIntentStatus::Succeeded => "succeeded",
        }
    }

    /// Whether no further transition can occur
    pub fn is_terminal(&self) -> bool {
        matches!(
            self,
            PaymentIntentStatus::Canceled | PaymentIntentStatus::Succeeded
        )
    }
}

/// Offline processing metadata for an intent created or confirmed without connectivity
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OfflineDetails {
    #[serde(with = "chrono::serde::ts_seconds")]
    stored_at: DateTime<Utc>,
    #[serde(default)]
    requires_upload: bool,
}

impl OfflineDetails {
    /// When the intent was stored on the device
    pub fn stored_at(&self) -> DateTime<Utc> {
        self.stored_at
    }

    /// Whether the intent still has to be forwarded once the device is online
    pub fn requires_upload(&self) -> bool {
        self.requires_upload
    }
}

/// Tip breakdown
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tip {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount: Option<u64>,
}

impl Tip {
    pub fn amount(&self) -> Option<u64> {
        self.amount
    }
}

/// Details about items included in the amount after confirmation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AmountDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    tip: Option<Tip>,
}

impl AmountDetails {
    pub fn tip(&self) -> Option<&Tip> {
        self.tip.as_ref()
    }
}

/// A PaymentIntent tracks the process of collecting a payment from a customer.
///
/// Instances are snapshots decoded from the backend; every server round trip
/// produces a new snapshot. An intent created while offline has no
/// [`stripe_id`](Self::stripe_id) until it is forwarded.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PaymentIntent {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
    /// Amount in the currency's smallest unit
    amount: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount_capturable: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount_details: Option<AmountDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount_received: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount_requested: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount_surcharge: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    amount_tip: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    application_fee_amount: Option<u64>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    canceled_at: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cancellation_reason: Option<String>,
    capture_method: CaptureMethod,
    #[serde(default)]
    charges: Vec<Charge>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    client_secret: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    confirmation_method: Option<String>,
    #[serde(with = "chrono::serde::ts_seconds")]
    created: DateTime<Utc>,
    currency: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last_payment_error: Option<ApiError>,
    #[serde(default)]
    livemode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    metadata: Option<HashMap<String, String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    next_action: Option<NextAction>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    offline_details: Option<OfflineDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    on_behalf_of: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payment_method: Option<PaymentMethod>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payment_method_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payment_method_options: Option<Value>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payment_method_types: Option<Vec<PaymentMethodType>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    receipt_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    setup_future_usage: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    statement_descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    statement_descriptor_suffix: Option<String>,
    status: PaymentIntentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    transfer_group: Option<String>,
}

impl PaymentIntent {
    /// Decode a PaymentIntent snapshot from its JSON representation
    pub fn from_json(json: &str) -> crate::Result<Self> {
        let intent: PaymentIntent = serde_json::from_str(json)?;
        tracing::debug!(
            id = intent.id.as_deref().unwrap_or("<offline>"),
            status = intent.status.as_str(),
            "Decoded payment intent"
        );
        Ok(intent)
    }

    /// Decode a PaymentIntent snapshot from an already parsed JSON value
    pub fn from_value(value: Value) -> crate::Result<Self> {
        Ok(serde_json::from_value(value)?)
    }

    /// Encode the snapshot back to JSON
    pub fn to_json(&self) -> crate::Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    /// The unique identifier, absent while the intent exists only offline
    pub fn stripe_id(&self) -> Option<&str> {
        self.id.as_deref()
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    /// The amount in major units for a currency with `decimals` minor digits.
    ///
    /// Fails if `decimals` exceeds the 28 digit scale a [`Decimal`] can hold.
    pub fn amount_in_decimal_units(&self, decimals: u32) -> crate::Result<Decimal> {
        Decimal::try_from_i128_with_scale(i128::from(self.amount), decimals).map_err(|e| {
            crate::TerminalError::invalid_field("decimals", e.to_string())
        })
    }

    pub fn amount_capturable(&self) -> Option<u64> {
        self.amount_capturable
    }

    pub fn amount_details(&self) -> Option<&AmountDetails> {
        self.amount_details.as_ref()
    }

    pub fn amount_received(&self) -> Option<u64> {
        self.amount_received
    }

    /// The originally requested amount if the transaction was partially authorized
    pub fn amount_requested(&self) -> Option<u64> {
        self.amount_requested
    }

    pub fn amount_surcharge(&self) -> Option<u64> {
        self.amount_surcharge
    }

    /// Tip the customer intends to add; only present on intents returned from a
    /// collection made with `update_payment_intent`
    pub fn amount_tip(&self) -> Option<u64> {
        self.amount_tip
    }

    pub fn application_fee_amount(&self) -> Option<u64> {
        self.application_fee_amount
    }

    pub fn canceled_at(&self) -> Option<DateTime<Utc>> {
        self.canceled_at
    }

    pub fn cancellation_reason(&self) -> Option<&str> {
        self.cancellation_reason.as_deref()
    }

    pub fn capture_method(&self) -> CaptureMethod {
        self.capture_method
    }

    /// Charges created by this intent, oldest first
    pub fn charges(&self) -> &[Charge] {
        &self.charges
    }

    pub fn client_secret(&self) -> Option<&str> {
        self.client_secret.as_deref()
    }

    pub fn confirmation_method(&self) -> Option<&str> {
        self.confirmation_method.as_deref()
    }

    pub fn created(&self) -> DateTime<Utc> {
        self.created
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn last_payment_error(&self) -> Option<&ApiError> {
        self.last_payment_error.as_ref()
    }

    pub fn livemode(&self) -> bool {
        self.livemode
    }

    pub fn metadata(&self) -> Option<&HashMap<String, String>> {
        self.metadata.as_ref()
    }

    pub fn next_action(&self) -> Option<&NextAction> {
        self.next_action.as_ref()
    }

    pub fn offline_details(&self) -> Option<&OfflineDetails> {
        self.offline_details.as_ref()
    }

    /// Whether the intent was created or processed while offline
    pub fn is_offline(&self) -> bool {
        self.offline_details.is_some() || self.id.is_none()
    }

    /// Whether the intent is waiting to be forwarded to the backend
    pub fn requires_upload(&self) -> bool {
        self.offline_details
            .as_ref()
            .is_some_and(OfflineDetails::requires_upload)
    }

    pub fn on_behalf_of(&self) -> Option<&str> {
        self.on_behalf_of.as_deref()
    }

    pub fn payment_method(&self) -> Option<&PaymentMethod> {
        self.payment_method.as_ref()
    }

    pub fn payment_method_id(&self) -> Option<&str> {
        self.payment_method_id.as_deref()
    }

    pub fn payment_method_options(&self) -> Option<&Value> {
        self.payment_method_options.as_ref()
    }

    pub fn payment_method_types(&self) -> Option<&[PaymentMethodType]> {
        self.payment_method_types.as_deref()
    }

    pub fn receipt_email(&self) -> Option<&str> {
        self.receipt_email.as_deref()
    }

    pub fn setup_future_usage(&self) -> Option<&str> {
        self.setup_future_usage.as_deref()
    }

    pub fn statement_descriptor(&self) -> Option<&str> {
        self.statement_descriptor.as_deref()
    }

    pub fn statement_descriptor_suffix(&self) -> Option<&str> {
        self.statement_descriptor_suffix.as_deref()
    }

    pub fn status(&self) -> PaymentIntentStatus {
        self.status
    }

    pub fn transfer_group(&self) -> Option<&str> {
        self.transfer_group.as_deref()
    }
}
