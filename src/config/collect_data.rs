//! Collect non-payment data configuration

use super::builder::Builder;
use crate::types::{CollectDataType, CustomerCancellation};
use serde::Serialize;

/// Options for collecting non-payment data
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct CollectDataConfiguration {
    collect_data_type: CollectDataType,
    customer_cancellation: CustomerCancellation,
}

impl CollectDataConfiguration {
    pub fn builder() -> CollectDataConfigurationBuilder {
        CollectDataConfigurationBuilder::new()
    }

    /// The non-payment data type to read
    pub fn collect_data_type(&self) -> CollectDataType {
        self.collect_data_type
    }

    /// Defaults to [`CustomerCancellation::EnableIfAvailable`]
    pub fn customer_cancellation(&self) -> CustomerCancellation {
        self.customer_cancellation
    }
}

/// Builder for [`CollectDataConfiguration`].
///
/// The collect data type is required; building without it fails.
#[derive(Debug, Clone, Default)]
pub struct CollectDataConfigurationBuilder {
    collect_data_type: Option<CollectDataType>,
    customer_cancellation: Option<CustomerCancellation>,
}

impl CollectDataConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_collect_data_type(mut self, collect_data_type: CollectDataType) -> Self {
        self.collect_data_type = Some(collect_data_type);
        self
    }

    pub fn with_customer_cancellation(mut self, customer_cancellation: CustomerCancellation) -> Self {
        self.customer_cancellation = Some(customer_cancellation);
        self
    }
}

impl Builder for CollectDataConfigurationBuilder {
    type Output = CollectDataConfiguration;

    fn build(&self) -> crate::Result<CollectDataConfiguration> {
        let collect_data_type = self
            .collect_data_type
            .ok_or_else(|| crate::TerminalError::missing_field("collect_data_type"))?;

        Ok(CollectDataConfiguration {
            collect_data_type,
            customer_cancellation: self.customer_cancellation.unwrap_or_default(),
        })
    }
}
