//! Confirm PaymentIntent configuration and surcharging options

use super::builder::{non_blank, Builder};
use serde::Serialize;

/// Whether the reader asks the cardholder to consent to a surcharge
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum SurchargeConsentCollection {
    #[default]
    Disabled,
    Enabled,
}

/// Cardholder consent settings for a surcharge
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SurchargeConsent {
    collection: SurchargeConsentCollection,
    #[serde(skip_serializing_if = "Option::is_none")]
    notice: Option<String>,
}

impl SurchargeConsent {
    pub fn builder() -> SurchargeConsentBuilder {
        SurchargeConsentBuilder::new()
    }

    /// Defaults to [`SurchargeConsentCollection::Disabled`]
    pub fn collection(&self) -> SurchargeConsentCollection {
        self.collection
    }

    /// Text shown to the cardholder when asking for consent
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }
}

/// Builder for [`SurchargeConsent`]
#[derive(Debug, Clone, Default)]
pub struct SurchargeConsentBuilder {
    collection: Option<SurchargeConsentCollection>,
    notice: Option<String>,
}

impl SurchargeConsentBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collection(mut self, collection: SurchargeConsentCollection) -> Self {
        self.collection = Some(collection);
        self
    }

    pub fn with_notice(mut self, notice: impl Into<String>) -> Self {
        self.notice = Some(notice.into());
        self
    }
}

impl Builder for SurchargeConsentBuilder {
    type Output = SurchargeConsent;

    fn build(&self) -> crate::Result<SurchargeConsent> {
        Ok(SurchargeConsent {
            collection: self.collection.unwrap_or_default(),
            notice: self
                .notice
                .as_deref()
                .map(|notice| non_blank("notice", notice))
                .transpose()?,
        })
    }
}

/// Surcharge collected during payment confirmation
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct SurchargeConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    amount: Option<u64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    consent: Option<SurchargeConsent>,
}

impl SurchargeConfiguration {
    pub fn builder() -> SurchargeConfigurationBuilder {
        SurchargeConfigurationBuilder::new()
    }

    /// Surcharge amount in the currency's smallest unit
    pub fn amount(&self) -> Option<u64> {
        self.amount
    }

    pub fn consent(&self) -> Option<&SurchargeConsent> {
        self.consent.as_ref()
    }
}

/// Builder for [`SurchargeConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct SurchargeConfigurationBuilder {
    amount: Option<u64>,
    consent: Option<SurchargeConsent>,
}

impl SurchargeConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_amount(mut self, amount: u64) -> Self {
        self.amount = Some(amount);
        self
    }

    pub fn with_consent(mut self, consent: impl Into<Option<SurchargeConsent>>) -> Self {
        self.consent = consent.into();
        self
    }
}

impl Builder for SurchargeConfigurationBuilder {
    type Output = SurchargeConfiguration;

    fn build(&self) -> crate::Result<SurchargeConfiguration> {
        Ok(SurchargeConfiguration {
            amount: self.amount,
            consent: self.consent.clone(),
        })
    }
}

/// Options for confirming a PaymentIntent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ConfirmPaymentIntentConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    return_url: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    surcharge: Option<SurchargeConfiguration>,
}

impl ConfirmPaymentIntentConfiguration {
    pub fn builder() -> ConfirmPaymentIntentConfigurationBuilder {
        ConfirmPaymentIntentConfigurationBuilder::new()
    }

    /// Where the customer returns after authenticating on a redirect-based
    /// payment method. May be an application URI scheme. Defaults to `None`.
    pub fn return_url(&self) -> Option<&str> {
        self.return_url.as_deref()
    }

    /// Defaults to `None`
    pub fn surcharge(&self) -> Option<&SurchargeConfiguration> {
        self.surcharge.as_ref()
    }
}

/// Builder for [`ConfirmPaymentIntentConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct ConfirmPaymentIntentConfigurationBuilder {
    return_url: Option<String>,
    surcharge: Option<SurchargeConfiguration>,
}

impl ConfirmPaymentIntentConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the return URL; it is validated at build time
    pub fn with_return_url(mut self, return_url: impl Into<String>) -> Self {
        self.return_url = Some(return_url.into());
        self
    }

    pub fn with_surcharge_configuration(
        mut self,
        surcharge: impl Into<Option<SurchargeConfiguration>>,
    ) -> Self {
        self.surcharge = surcharge.into();
        self
    }
}

impl Builder for ConfirmPaymentIntentConfigurationBuilder {
    type Output = ConfirmPaymentIntentConfiguration;

    fn build(&self) -> crate::Result<ConfirmPaymentIntentConfiguration> {
        let return_url = match self.return_url.as_deref() {
            Some(raw) => {
                let raw = raw.trim();
                url::Url::parse(raw).map_err(|source| crate::TerminalError::InvalidUrl {
                    field: "return_url",
                    source,
                })?;
                Some(raw.to_string())
            }
            None => None,
        };

        Ok(ConfirmPaymentIntentConfiguration {
            return_url,
            surcharge: self.surcharge.clone(),
        })
    }
}
