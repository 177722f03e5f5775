//! Per-call configuration objects and their builders
//!
//! Configuration objects shape a single collect, confirm, refund, setup or
//! data-collection call. They are immutable and can only be obtained from a
//! builder, which applies documented defaults to every field left unset and
//! validates field formats synchronously in [`Builder::build`].
//!
//! # Architecture
//!
//! - [`builder`] - The [`Builder`] contract
//! - [`collect_payment`] - Collecting a payment method, tipping
//! - [`collect_refund`] - Collecting a refund payment method
//! - [`collect_setup_intent`] - Collecting a payment method for a SetupIntent
//! - [`collect_data`] - Collecting non-payment data
//! - [`confirm_payment`] - Confirming a PaymentIntent, surcharging
//! - [`moto`] - Mail Order/Telephone Order options
//!
//! # Examples
//!
//! ```
//! use rust_terminal::config::{Builder, CollectPaymentIntentConfiguration, MotoConfiguration};
//! use rust_terminal::types::{AllowRedisplay, CustomerCancellation};
//!
//! # fn main() -> rust_terminal::Result<()> {
//! let moto = MotoConfiguration::builder().with_skip_cvc(true).build()?;
//!
//! let config = CollectPaymentIntentConfiguration::builder()
//!     .with_update_payment_intent(true)
//!     .with_allow_redisplay(AllowRedisplay::Always)
//!     .with_moto_configuration(moto)
//!     .build()?;
//!
//! // Unset fields carry their documented defaults
//! assert_eq!(config.customer_cancellation(), CustomerCancellation::EnableIfAvailable);
//! assert!(config.is_moto());
//! # Ok(())
//! # }
//! ```

pub mod builder;
pub mod collect_data;
pub mod collect_payment;
pub mod collect_refund;
pub mod collect_setup_intent;
pub mod confirm_payment;
pub mod moto;

#[cfg(test)]
mod tests;

pub use builder::Builder;
pub use collect_data::{CollectDataConfiguration, CollectDataConfigurationBuilder};
pub use collect_payment::{
    CollectPaymentIntentConfiguration, CollectPaymentIntentConfigurationBuilder,
    TippingConfiguration, TippingConfigurationBuilder,
};
pub use collect_refund::{CollectRefundConfiguration, CollectRefundConfigurationBuilder};
pub use collect_setup_intent::{
    CollectSetupIntentConfiguration, CollectSetupIntentConfigurationBuilder,
};
pub use confirm_payment::{
    ConfirmPaymentIntentConfiguration, ConfirmPaymentIntentConfigurationBuilder,
    SurchargeConfiguration, SurchargeConfigurationBuilder, SurchargeConsent,
    SurchargeConsentBuilder, SurchargeConsentCollection,
};
pub use moto::{MotoConfiguration, MotoConfigurationBuilder};
