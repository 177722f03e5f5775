//! Enumerated option types shared by configurations and value objects

use serde::{Deserialize, Serialize};
use std::fmt;

/// Controls whether customer-initiated cancellation is enabled during collection.
///
/// Android based internet readers support enabling and disabling customer
/// cancellation. WisePad 3 and Tap to Pay always show it. Stripe M2 and
/// Chipper 2X do not support it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CustomerCancellation {
    /// Enable customer cancellation if the reader supports it
    #[default]
    EnableIfAvailable,
    /// Disable customer cancellation if the reader supports disabling it
    DisableIfAvailable,
}

impl CustomerCancellation {
    /// Get the wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            CustomerCancellation::EnableIfAvailable => "enable_if_available",
            CustomerCancellation::DisableIfAvailable => "disable_if_available",
        }
    }
}

/// Whether a saved payment method may be shown again to its customer in a checkout flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AllowRedisplay {
    #[default]
    Unspecified,
    Limited,
    Always,
}

impl AllowRedisplay {
    /// Get the wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            AllowRedisplay::Unspecified => "unspecified",
            AllowRedisplay::Limited => "limited",
            AllowRedisplay::Always => "always",
        }
    }
}

/// Why a SetupIntent is being collected. Only applicable on Tap to Pay devices.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SetupIntentCollectionReason {
    #[default]
    SaveCard,
    Verify,
}

impl SetupIntentCollectionReason {
    /// Get the wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            SetupIntentCollectionReason::SaveCard => "save_card",
            SetupIntentCollectionReason::Verify => "verify",
        }
    }
}

/// Controls when the funds will be captured from the customer's account.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CaptureMethod {
    Automatic,
    AutomaticAsync,
    Manual,
}

impl CaptureMethod {
    /// Get the wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            CaptureMethod::Automatic => "automatic",
            CaptureMethod::AutomaticAsync => "automatic_async",
            CaptureMethod::Manual => "manual",
        }
    }
}

/// Which non-payment data a collect-data call reads.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum CollectDataType {
    Magstripe,
    NfcUid,
}

impl CollectDataType {
    /// Get the wire identifier
    pub fn as_str(&self) -> &'static str {
        match self {
            CollectDataType::Magstripe => "magstripe",
            CollectDataType::NfcUid => "nfc_uid",
        }
    }
}

/// Type of payment option offered during collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaymentOptionType {
    /// Any card-based payment method
    Card,
    /// Non-card payment method, e.g. QR code based payments
    NonCard,
}

/// Payment method types reported by the backend.
///
/// Types this crate does not know about decode as
/// [`PaymentMethodType::Unknown`], which keeps the wire string so the value
/// encodes back unchanged.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum PaymentMethodType {
    Card,
    CardPresent,
    InteracPresent,
    WechatPay,
    Affirm,
    Paynow,
    Paypay,
    Klarna,
    Unknown(String),
}

impl PaymentMethodType {
    /// Get the wire identifier
    pub fn as_str(&self) -> &str {
        match self {
            PaymentMethodType::Card => "card",
            PaymentMethodType::CardPresent => "card_present",
            PaymentMethodType::InteracPresent => "interac_present",
            PaymentMethodType::WechatPay => "wechat_pay",
            PaymentMethodType::Affirm => "affirm",
            PaymentMethodType::Paynow => "paynow",
            PaymentMethodType::Paypay => "paypay",
            PaymentMethodType::Klarna => "klarna",
            PaymentMethodType::Unknown(raw) => raw.as_str(),
        }
    }

    /// Whether this type belongs to the card family
    pub fn is_card(&self) -> bool {
        matches!(
            self,
            PaymentMethodType::Card
                | PaymentMethodType::CardPresent
                | PaymentMethodType::InteracPresent
        )
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, PaymentMethodType::Unknown(_))
    }
}

impl From<String> for PaymentMethodType {
    fn from(raw: String) -> Self {
        match raw.as_str() {
            "card" => PaymentMethodType::Card,
            "card_present" => PaymentMethodType::CardPresent,
            "interac_present" => PaymentMethodType::InteracPresent,
            "wechat_pay" => PaymentMethodType::WechatPay,
            "affirm" => PaymentMethodType::Affirm,
            "paynow" => PaymentMethodType::Paynow,
            "paypay" => PaymentMethodType::Paypay,
            "klarna" => PaymentMethodType::Klarna,
            _ => PaymentMethodType::Unknown(raw),
        }
    }
}

impl From<PaymentMethodType> for String {
    fn from(payment_method_type: PaymentMethodType) -> Self {
        match payment_method_type {
            PaymentMethodType::Unknown(raw) => raw,
            known => known.as_str().to_string(),
        }
    }
}

impl fmt::Display for PaymentMethodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A payment option available during payment collection.
///
/// Created through [`PaymentOption::card`] or [`PaymentOption::non_card`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct PaymentOption {
    #[serde(rename = "type")]
    option_type: PaymentOptionType,
    #[serde(skip_serializing_if = "Option::is_none")]
    payment_method_type: Option<PaymentMethodType>,
}

impl PaymentOption {
    /// Create a card payment option
    pub fn card() -> Self {
        Self {
            option_type: PaymentOptionType::Card,
            payment_method_type: None,
        }
    }

    /// Create a non-card payment option for a specific payment method type
    pub fn non_card(payment_method_type: PaymentMethodType) -> crate::Result<Self> {
        if payment_method_type.is_card() {
            return Err(crate::TerminalError::invalid_payment_option(format!(
                "`{}` is a card payment method type",
                payment_method_type
            )));
        }
        if payment_method_type.is_unknown() {
            return Err(crate::TerminalError::invalid_payment_option(
                "payment method type must be known",
            ));
        }

        Ok(Self {
            option_type: PaymentOptionType::NonCard,
            payment_method_type: Some(payment_method_type),
        })
    }

    /// The type of this payment option
    pub fn option_type(&self) -> PaymentOptionType {
        self.option_type
    }

    /// The specific payment method type, set only for non-card options
    pub fn payment_method_type(&self) -> Option<&PaymentMethodType> {
        self.payment_method_type.as_ref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_documented_defaults() {
        assert_eq!(
            CustomerCancellation::default(),
            CustomerCancellation::EnableIfAvailable
        );
        assert_eq!(AllowRedisplay::default(), AllowRedisplay::Unspecified);
        assert_eq!(
            SetupIntentCollectionReason::default(),
            SetupIntentCollectionReason::SaveCard
        );
    }

    #[test]
    fn test_wire_names() {
        assert_eq!(
            serde_json::to_value(CustomerCancellation::DisableIfAvailable).unwrap(),
            "disable_if_available"
        );
        assert_eq!(
            serde_json::to_value(CaptureMethod::AutomaticAsync).unwrap(),
            CaptureMethod::AutomaticAsync.as_str()
        );
        assert_eq!(
            serde_json::to_value(CollectDataType::NfcUid).unwrap(),
            "nfc_uid"
        );
    }

    #[test]
    fn test_unknown_payment_method_type() {
        let decoded: PaymentMethodType = serde_json::from_str("\"sepa_debit\"").unwrap();
        assert_eq!(decoded, PaymentMethodType::Unknown("sepa_debit".to_string()));
        assert_eq!(decoded.as_str(), "sepa_debit");
        assert_eq!(serde_json::to_value(&decoded).unwrap(), "sepa_debit");

        let known: PaymentMethodType = serde_json::from_str("\"wechat_pay\"").unwrap();
        assert_eq!(known, PaymentMethodType::WechatPay);
        assert_eq!(serde_json::to_value(&known).unwrap(), "wechat_pay");
    }

    #[test]
    fn test_payment_option_factories() {
        let card = PaymentOption::card();
        assert_eq!(card.option_type(), PaymentOptionType::Card);
        assert_eq!(card.payment_method_type(), None);

        let wechat = PaymentOption::non_card(PaymentMethodType::WechatPay).unwrap();
        assert_eq!(wechat.option_type(), PaymentOptionType::NonCard);
        assert_eq!(
            wechat.payment_method_type(),
            Some(&PaymentMethodType::WechatPay)
        );

        assert!(PaymentOption::non_card(PaymentMethodType::CardPresent).is_err());
        assert!(PaymentOption::non_card(PaymentMethodType::Unknown("sepa_debit".to_string())).is_err());
    }
}
