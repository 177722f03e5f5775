//! Collect payment method configuration

use super::builder::{non_blank, Builder};
use super::moto::MotoConfiguration;
use crate::types::{AllowRedisplay, CustomerCancellation};
use serde::Serialize;

/// On-reader tipping options for a single collection
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct TippingConfiguration {
    #[serde(skip_serializing_if = "Option::is_none")]
    eligible_amount: Option<u64>,
}

impl TippingConfiguration {
    /// Start building a tipping configuration
    pub fn builder() -> TippingConfigurationBuilder {
        TippingConfigurationBuilder::new()
    }

    /// Portion of the amount tips are calculated on, in the currency's smallest unit.
    /// `None` means the full amount is tip eligible.
    pub fn eligible_amount(&self) -> Option<u64> {
        self.eligible_amount
    }
}

/// Builder for [`TippingConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct TippingConfigurationBuilder {
    eligible_amount: Option<u64>,
}

impl TippingConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the tip eligible amount
    pub fn with_eligible_amount(mut self, eligible_amount: u64) -> Self {
        self.eligible_amount = Some(eligible_amount);
        self
    }
}

impl Builder for TippingConfigurationBuilder {
    type Output = TippingConfiguration;

    fn build(&self) -> crate::Result<TippingConfiguration> {
        Ok(TippingConfiguration {
            eligible_amount: self.eligible_amount,
        })
    }
}

/// Options for collecting a payment method for a PaymentIntent
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CollectPaymentIntentConfiguration {
    skip_tipping: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    tipping_configuration: Option<TippingConfiguration>,
    update_payment_intent: bool,
    customer_cancellation: CustomerCancellation,
    request_dynamic_currency_conversion: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    surcharge_notice: Option<String>,
    allow_redisplay: AllowRedisplay,
    #[serde(skip_serializing_if = "Option::is_none")]
    moto_configuration: Option<MotoConfiguration>,
}

impl CollectPaymentIntentConfiguration {
    /// Start building a collect configuration
    pub fn builder() -> CollectPaymentIntentConfigurationBuilder {
        CollectPaymentIntentConfigurationBuilder::new()
    }

    /// Bypass tipping selection. Defaults to `false`.
    pub fn skip_tipping(&self) -> bool {
        self.skip_tipping
    }

    pub fn tipping_configuration(&self) -> Option<&TippingConfiguration> {
        self.tipping_configuration.as_ref()
    }

    /// Update the PaymentIntent server side during collection. Defaults to `false`.
    ///
    /// Collecting with this enabled for an intent created offline fails in the
    /// command layer.
    pub fn update_payment_intent(&self) -> bool {
        self.update_payment_intent
    }

    /// Defaults to [`CustomerCancellation::EnableIfAvailable`]
    pub fn customer_cancellation(&self) -> CustomerCancellation {
        self.customer_cancellation
    }

    /// Request Dynamic Currency Conversion if available. Defaults to `false`.
    pub fn request_dynamic_currency_conversion(&self) -> bool {
        self.request_dynamic_currency_conversion
    }

    /// Surcharge notice shown on the collection screen. Defaults to `None`.
    pub fn surcharge_notice(&self) -> Option<&str> {
        self.surcharge_notice.as_deref()
    }

    /// Defaults to [`AllowRedisplay::Unspecified`]
    pub fn allow_redisplay(&self) -> AllowRedisplay {
        self.allow_redisplay
    }

    /// MO/TO configuration; presence enables MO/TO
    pub fn moto_configuration(&self) -> Option<&MotoConfiguration> {
        self.moto_configuration.as_ref()
    }

    /// Whether the collection is a Mail Order/Telephone Order
    pub fn is_moto(&self) -> bool {
        self.moto_configuration.is_some()
    }

    /// Whether the DCC request will take effect (requires `update_payment_intent`)
    pub fn dynamic_currency_conversion_effective(&self) -> bool {
        self.request_dynamic_currency_conversion && self.update_payment_intent
    }

    /// Whether the surcharge notice will be shown (requires `update_payment_intent`)
    pub fn surcharge_notice_effective(&self) -> bool {
        self.surcharge_notice.is_some() && self.update_payment_intent
    }
}

/// Builder for [`CollectPaymentIntentConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct CollectPaymentIntentConfigurationBuilder {
    skip_tipping: bool,
    tipping_configuration: Option<TippingConfiguration>,
    update_payment_intent: bool,
    customer_cancellation: Option<CustomerCancellation>,
    request_dynamic_currency_conversion: bool,
    surcharge_notice: Option<String>,
    allow_redisplay: Option<AllowRedisplay>,
    moto_configuration: Option<MotoConfiguration>,
}

impl CollectPaymentIntentConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_skip_tipping(mut self, skip_tipping: bool) -> Self {
        self.skip_tipping = skip_tipping;
        self
    }

    /// Set or clear the tipping configuration
    pub fn with_tipping_configuration(
        mut self,
        tipping_configuration: impl Into<Option<TippingConfiguration>>,
    ) -> Self {
        self.tipping_configuration = tipping_configuration.into();
        self
    }

    pub fn with_update_payment_intent(mut self, update_payment_intent: bool) -> Self {
        self.update_payment_intent = update_payment_intent;
        self
    }

    pub fn with_customer_cancellation(mut self, customer_cancellation: CustomerCancellation) -> Self {
        self.customer_cancellation = Some(customer_cancellation);
        self
    }

    /// Takes effect only together with `update_payment_intent`
    pub fn with_request_dynamic_currency_conversion(mut self, request: bool) -> Self {
        self.request_dynamic_currency_conversion = request;
        self
    }

    /// Takes effect only together with `update_payment_intent`
    pub fn with_surcharge_notice(mut self, surcharge_notice: impl Into<String>) -> Self {
        self.surcharge_notice = Some(surcharge_notice.into());
        self
    }

    /// Remove a previously set surcharge notice
    pub fn clear_surcharge_notice(mut self) -> Self {
        self.surcharge_notice = None;
        self
    }

    pub fn with_allow_redisplay(mut self, allow_redisplay: AllowRedisplay) -> Self {
        self.allow_redisplay = Some(allow_redisplay);
        self
    }

    /// Set or clear the MO/TO configuration
    pub fn with_moto_configuration(
        mut self,
        moto_configuration: impl Into<Option<MotoConfiguration>>,
    ) -> Self {
        self.moto_configuration = moto_configuration.into();
        self
    }
}

impl Builder for CollectPaymentIntentConfigurationBuilder {
    type Output = CollectPaymentIntentConfiguration;

    fn build(&self) -> crate::Result<CollectPaymentIntentConfiguration> {
        let surcharge_notice = self
            .surcharge_notice
            .as_deref()
            .map(|notice| non_blank("surcharge_notice", notice))
            .transpose()?;

        let config = CollectPaymentIntentConfiguration {
            skip_tipping: self.skip_tipping,
            tipping_configuration: self.tipping_configuration,
            update_payment_intent: self.update_payment_intent,
            customer_cancellation: self.customer_cancellation.unwrap_or_default(),
            request_dynamic_currency_conversion: self.request_dynamic_currency_conversion,
            surcharge_notice,
            allow_redisplay: self.allow_redisplay.unwrap_or_default(),
            moto_configuration: self.moto_configuration,
        };

        if config.request_dynamic_currency_conversion && !config.update_payment_intent {
            tracing::debug!(
                "Dynamic currency conversion requested without update_payment_intent; it will not take effect"
            );
        }
        if config.surcharge_notice.is_some() && !config.update_payment_intent {
            tracing::debug!(
                "Surcharge notice set without update_payment_intent; it will not be displayed"
            );
        }

        Ok(config)
    }
}
