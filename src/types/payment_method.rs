//! Payment method types referenced by intents and charges

use super::options::PaymentMethodType;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Card details read from a physical card
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardPresentDetails {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    brand: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    last4: Option<String>,
    exp_month: u8,
    exp_year: u16,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    funding: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    cardholder_name: Option<String>,
}

impl CardPresentDetails {
    pub fn brand(&self) -> Option<&str> {
        self.brand.as_deref()
    }

    pub fn last4(&self) -> Option<&str> {
        self.last4.as_deref()
    }

    pub fn exp_month(&self) -> u8 {
        self.exp_month
    }

    pub fn exp_year(&self) -> u16 {
        self.exp_year
    }

    /// Card funding type, e.g. "credit" or "debit"
    pub fn funding(&self) -> Option<&str> {
        self.funding.as_deref()
    }

    pub fn cardholder_name(&self) -> Option<&str> {
        self.cardholder_name.as_deref()
    }
}

/// Transaction-specific details of the payment method used in a payment
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethodDetails {
    #[serde(rename = "type")]
    method_type: PaymentMethodType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    card_present: Option<CardPresentDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interac_present: Option<CardPresentDetails>,
}

impl PaymentMethodDetails {
    pub fn method_type(&self) -> &PaymentMethodType {
        &self.method_type
    }

    pub fn card_present(&self) -> Option<&CardPresentDetails> {
        self.card_present.as_ref()
    }

    pub fn interac_present(&self) -> Option<&CardPresentDetails> {
        self.interac_present.as_ref()
    }
}

/// A payment method attached to a PaymentIntent
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaymentMethod {
    id: String,
    #[serde(rename = "type")]
    method_type: PaymentMethodType,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    customer: Option<String>,
    #[serde(default)]
    livemode: bool,
    #[serde(default)]
    metadata: HashMap<String, String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    card_present: Option<CardPresentDetails>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    interac_present: Option<CardPresentDetails>,
}

impl PaymentMethod {
    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn method_type(&self) -> &PaymentMethodType {
        &self.method_type
    }

    pub fn customer(&self) -> Option<&str> {
        self.customer.as_deref()
    }

    pub fn livemode(&self) -> bool {
        self.livemode
    }

    pub fn metadata(&self) -> &HashMap<String, String> {
        &self.metadata
    }

    pub fn card_present(&self) -> Option<&CardPresentDetails> {
        self.card_present.as_ref()
    }

    pub fn interac_present(&self) -> Option<&CardPresentDetails> {
        self.interac_present.as_ref()
    }
}

/// Details of the original payment method that created a charge
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GeneratedFrom {
    /// The charge that created this object
    #[serde(default, skip_serializing_if = "Option::is_none")]
    charge: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    payment_method_details: Option<PaymentMethodDetails>,
    /// The SetupAttempt that generated this payment method, if any
    #[serde(default, skip_serializing_if = "Option::is_none")]
    setup_attempt: Option<String>,
}

impl GeneratedFrom {
    pub fn charge(&self) -> Option<&str> {
        self.charge.as_deref()
    }

    pub fn payment_method_details(&self) -> Option<&PaymentMethodDetails> {
        self.payment_method_details.as_ref()
    }

    pub fn setup_attempt(&self) -> Option<&str> {
        self.setup_attempt.as_deref()
    }
}
