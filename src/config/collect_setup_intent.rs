//! Collect setup intent configuration

use super::builder::Builder;
use super::moto::MotoConfiguration;
use crate::types::{CustomerCancellation, SetupIntentCollectionReason};
use serde::Serialize;

/// Options for collecting a payment method for a SetupIntent
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CollectSetupIntentConfiguration {
    customer_cancellation: CustomerCancellation,
    #[serde(skip_serializing_if = "Option::is_none")]
    moto_configuration: Option<MotoConfiguration>,
    collection_reason: SetupIntentCollectionReason,
}

impl CollectSetupIntentConfiguration {
    pub fn builder() -> CollectSetupIntentConfigurationBuilder {
        CollectSetupIntentConfigurationBuilder::new()
    }

    /// Defaults to [`CustomerCancellation::EnableIfAvailable`]
    pub fn customer_cancellation(&self) -> CustomerCancellation {
        self.customer_cancellation
    }

    pub fn moto_configuration(&self) -> Option<&MotoConfiguration> {
        self.moto_configuration.as_ref()
    }

    /// Applicable only on Tap to Pay. Defaults to [`SetupIntentCollectionReason::SaveCard`].
    pub fn collection_reason(&self) -> SetupIntentCollectionReason {
        self.collection_reason
    }
}

/// Builder for [`CollectSetupIntentConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct CollectSetupIntentConfigurationBuilder {
    customer_cancellation: Option<CustomerCancellation>,
    moto_configuration: Option<MotoConfiguration>,
    collection_reason: Option<SetupIntentCollectionReason>,
}

impl CollectSetupIntentConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customer_cancellation(mut self, customer_cancellation: CustomerCancellation) -> Self {
        self.customer_cancellation = Some(customer_cancellation);
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

    pub fn with_collection_reason(mut self, collection_reason: SetupIntentCollectionReason) -> Self {
        self.collection_reason = Some(collection_reason);
        self
    }
}

impl Builder for CollectSetupIntentConfigurationBuilder {
    type Output = CollectSetupIntentConfiguration;

    fn build(&self) -> crate::Result<CollectSetupIntentConfiguration> {
        Ok(CollectSetupIntentConfiguration {
            customer_cancellation: self.customer_cancellation.unwrap_or_default(),
            moto_configuration: self.moto_configuration,
            collection_reason: self.collection_reason.unwrap_or_default(),
        })
    }
}
