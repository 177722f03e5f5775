//! Charge and refund value objects

use super::payment_method::{GeneratedFrom, PaymentMethodDetails};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// The possible statuses for a charge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ChargeStatus {
    Succeeded,
    Pending,
    Failed,
}

/// The result of an attempted capture on a PaymentIntent.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Charge {
    /// Amount in the currency's smallest unit
    amount: u64,
    currency: String,
    status: ChargeStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payment_method_details: Option<PaymentMethodDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    description: Option<String>,
    #[serde(default)]
    metadata: HashMap<String, String>,
    id: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    statement_descriptor_suffix: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    calculated_statement_descriptor: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    authorization_code: Option<String>,
    #[serde(default)]
    amount_refunded: u64,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    created: Option<DateTime<Utc>>,
    #[serde(default)]
    captured: bool,
    #[serde(default)]
    paid: bool,
    #[serde(default)]
    refunded: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    customer: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payment_intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    receipt_email: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    receipt_number: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    receipt_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    balance_transaction: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    application_fee: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    application_fee_amount: Option<u64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    on_behalf_of: Option<String>,
    #[serde(default)]
    livemode: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    generated_from: Option<GeneratedFrom>,
}

impl Charge {
    /// Decode a charge from its JSON representation
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The unique identifier for the charge
    pub fn stripe_id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn status(&self) -> ChargeStatus {
        self.status
    }

    pub fn payment_method_details(&self) -> Option<&PaymentMethodDetails> {
        self.payment_method_details.as_ref()
    }

    /// Description displayed in the dashboard and in email receipts
    pub fn description(&self) -> Option<&str> {
        self.description.as_deref()
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    pub fn statement_descriptor_suffix(&self) -> Option<&str> {
        self.statement_descriptor_suffix.as_deref()
    }

    /// The full statement descriptor shown on the customer's statement
    pub fn calculated_statement_descriptor(&self) -> Option<&str> {
        self.calculated_statement_descriptor.as_deref()
    }

    /// 6 digit authorization code
    pub fn authorization_code(&self) -> Option<&str> {
        self.authorization_code.as_deref()
    }

    /// Amount refunded so far, in the currency's smallest unit
    pub fn amount_refunded(&self) -> u64 {
        self.amount_refunded
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn captured(&self) -> bool {
        self.captured
    }

    pub fn paid(&self) -> bool {
        self.paid
    }

    /// Whether the charge has been fully refunded
    pub fn refunded(&self) -> bool {
        self.refunded
    }

    /// Whether some but not all of the amount has been refunded
    pub fn is_partially_refunded(&self) -> bool {
        !self.refunded && self.amount_refunded > 0
    }

    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    pub fn payment_intent_id(&self) -> Option<&str> {
        self.payment_intent.as_deref()
    }

    pub fn receipt_email(&self) -> Option<&str> {
        self.receipt_email.as_deref()
    }

    pub fn receipt_number(&self) -> Option<&str> {
        self.receipt_number.as_deref()
    }

    pub fn receipt_url(&self) -> Option<&str> {
        self.receipt_url.as_deref()
    }

    pub fn balance_transaction(&self) -> Option<&str> {
        self.balance_transaction.as_deref()
    }

    pub fn application_fee(&self) -> Option<&str> {
        self.application_fee.as_deref()
    }

    pub fn application_fee_amount(&self) -> Option<u64> {
        self.application_fee_amount
    }

    pub fn on_behalf_of(&self) -> Option<&str> {
        self.on_behalf_of.as_deref()
    }

    pub fn livemode(&self) -> bool {
        self.livemode
    }

    /// Details of the original payment method that created this charge
    pub fn generated_from(&self) -> Option<&GeneratedFrom> {
        self.generated_from.as_ref()
    }
}

/// The possible statuses for a refund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RefundStatus {
    Succeeded,
    Pending,
    Failed,
    Canceled,
    RequiresAction,
}

/// A refund of a previously created charge.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Refund {
    id: String,
    amount: u64,
    currency: String,
    status: RefundStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    charge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payment_intent: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    reason: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    failure_reason: Option<String>,
    #[serde(default)]
    metadata: HashMap<String, String>,
    #[serde(
        default,
        with = "chrono::serde::ts_seconds_option",
        skip_serializing_if = "Option::is_none"
    )]
    created: Option<DateTime<Utc>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payment_method_details: Option<PaymentMethodDetails>,
}

impl Refund {
    /// Decode a refund from its JSON representation
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn stripe_id(&self) -> &str {
        &self.id
    }

    pub fn amount(&self) -> u64 {
        self.amount
    }

    pub fn currency(&self) -> &str {
        &self.currency
    }

    pub fn status(&self) -> RefundStatus {
        self.status
    }

    pub fn charge(&self) -> Option<&str> {
        self.charge.as_deref()
    }

    pub fn payment_intent_id(&self) -> Option<&str> {
        self.payment_intent.as_deref()
    }

    pub fn reason(&self) -> Option<&str> {
        self.reason.as_deref()
    }

    /// Set when the refund was declined
    pub fn failure_reason(&self) -> Option<&str> {
        self.failure_reason.as_deref()
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    pub fn created(&self) -> Option<DateTime<Utc>> {
        self.created
    }

    pub fn payment_method_details(&self) -> Option<&PaymentMethodDetails> {
        self.payment_method_details.as_ref()
    }
}
