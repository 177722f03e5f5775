//! Collect refund configuration

use super::builder::Builder;
use crate::types::CustomerCancellation;
use serde::Serialize;

/// Options for collecting the payment method of an in-person refund
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CollectRefundConfiguration {
    customer_cancellation: CustomerCancellation,
}

impl CollectRefundConfiguration {
    pub fn builder() -> CollectRefundConfigurationBuilder {
        CollectRefundConfigurationBuilder::new()
    }

    /// Defaults to [`CustomerCancellation::EnableIfAvailable`]
    pub fn customer_cancellation(&self) -> CustomerCancellation {
        self.customer_cancellation
    }
}

/// Builder for [`CollectRefundConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct CollectRefundConfigurationBuilder {
    customer_cancellation: Option<CustomerCancellation>,
}

impl CollectRefundConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_customer_cancellation(mut self, customer_cancellation: CustomerCancellation) -> Self {
        self.customer_cancellation = Some(customer_cancellation);
        self
    }
}

impl Builder for CollectRefundConfigurationBuilder {
    type Output = CollectRefundConfiguration;

    fn build(&self) -> crate::Result<CollectRefundConfiguration> {
        Ok(CollectRefundConfiguration {
            customer_cancellation: self.customer_cancellation.unwrap_or_default(),
        })
    }
}
