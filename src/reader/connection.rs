//! Connection configurations per reader family

use super::discovery::ReaderFamily;
use crate::config::builder::non_blank;
use crate::config::Builder;
use std::fmt;

/// Capability of describing how to connect to a reader of one family
pub trait ConnectionConfiguration: fmt::Debug + Send + Sync {
    /// The reader family this configuration connects to
    fn reader_family(&self) -> ReaderFamily;
}

/// Connection options for internet-connected smart readers
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct InternetConnectionConfiguration {
    fail_if_in_use: bool,
    allow_customer_cancel: bool,
}

impl InternetConnectionConfiguration {
    pub fn builder() -> InternetConnectionConfigurationBuilder {
        InternetConnectionConfigurationBuilder::new()
    }

    /// Refuse to connect while another point of sale is using the reader.
    /// Defaults to `false`.
    pub fn fail_if_in_use(&self) -> bool {
        self.fail_if_in_use
    }

    /// Show a cancel button on the reader during collection. Defaults to `false`.
    pub fn allow_customer_cancel(&self) -> bool {
        self.allow_customer_cancel
    }
}

impl ConnectionConfiguration for InternetConnectionConfiguration {
    fn reader_family(&self) -> ReaderFamily {
        ReaderFamily::Internet
    }
}

/// Builder for [`InternetConnectionConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct InternetConnectionConfigurationBuilder {
    fail_if_in_use: bool,
    allow_customer_cancel: bool,
}

impl InternetConnectionConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_fail_if_in_use(mut self, fail_if_in_use: bool) -> Self {
        self.fail_if_in_use = fail_if_in_use;
        self
    }

    pub fn with_allow_customer_cancel(mut self, allow_customer_cancel: bool) -> Self {
        self.allow_customer_cancel = allow_customer_cancel;
        self
    }
}

impl Builder for InternetConnectionConfigurationBuilder {
    type Output = InternetConnectionConfiguration;

    fn build(&self) -> crate::Result<InternetConnectionConfiguration> {
        Ok(InternetConnectionConfiguration {
            fail_if_in_use: self.fail_if_in_use,
            allow_customer_cancel: self.allow_customer_cancel,
        })
    }
}

/// Connection options for Tap to Pay on the local device
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct TapToPayConnectionConfiguration {
    location_id: String,
    merchant_display_name: Option<String>,
    on_behalf_of: Option<String>,
    tos_acceptance_permitted: bool,
    auto_reconnect_on_unexpected_disconnect: bool,
}

impl TapToPayConnectionConfiguration {
    /// Start a builder; Tap to Pay readers must be registered to a location
    pub fn builder(location_id: impl Into<String>) -> TapToPayConnectionConfigurationBuilder {
        TapToPayConnectionConfigurationBuilder::new(location_id)
    }

    pub fn location_id(&self) -> &str {
        &self.location_id
    }

    pub fn merchant_display_name(&self) -> Option<&str> {
        self.merchant_display_name.as_deref()
    }

    /// Connected account the payments are made on behalf of
    pub fn on_behalf_of(&self) -> Option<&str> {
        self.on_behalf_of.as_deref()
    }

    /// Defaults to `true`
    pub fn tos_acceptance_permitted(&self) -> bool {
        self.tos_acceptance_permitted
    }

    /// Defaults to `true`
    pub fn auto_reconnect_on_unexpected_disconnect(&self) -> bool {
        self.auto_reconnect_on_unexpected_disconnect
    }
}

impl ConnectionConfiguration for TapToPayConnectionConfiguration {
    fn reader_family(&self) -> ReaderFamily {
        ReaderFamily::TapToPay
    }
}

/// Builder for [`TapToPayConnectionConfiguration`]
#[derive(Debug, Clone)]
pub struct TapToPayConnectionConfigurationBuilder {
    location_id: String,
    merchant_display_name: Option<String>,
    on_behalf_of: Option<String>,
    tos_acceptance_permitted: bool,
    auto_reconnect_on_unexpected_disconnect: bool,
}

impl TapToPayConnectionConfigurationBuilder {
    pub fn new(location_id: impl Into<String>) -> Self {
        Self {
            location_id: location_id.into(),
            merchant_display_name: None,
            on_behalf_of: None,
            tos_acceptance_permitted: true,
            auto_reconnect_on_unexpected_disconnect: true,
        }
    }

    pub fn with_location_id(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = location_id.into();
        self
    }

    pub fn with_merchant_display_name(
        mut self,
        merchant_display_name: impl Into<Option<String>>,
    ) -> Self {
        self.merchant_display_name = merchant_display_name.into();
        self
    }

    pub fn with_on_behalf_of(mut self, on_behalf_of: impl Into<Option<String>>) -> Self {
        self.on_behalf_of = on_behalf_of.into();
        self
    }

    pub fn with_tos_acceptance_permitted(mut self, tos_acceptance_permitted: bool) -> Self {
        self.tos_acceptance_permitted = tos_acceptance_permitted;
        self
    }

    pub fn with_auto_reconnect_on_unexpected_disconnect(mut self, auto_reconnect: bool) -> Self {
        self.auto_reconnect_on_unexpected_disconnect = auto_reconnect;
        self
    }
}

impl Builder for TapToPayConnectionConfigurationBuilder {
    type Output = TapToPayConnectionConfiguration;

    fn build(&self) -> crate::Result<TapToPayConnectionConfiguration> {
        if self.location_id.is_empty() {
            return Err(crate::TerminalError::missing_field("location_id"));
        }

        Ok(TapToPayConnectionConfiguration {
            location_id: non_blank("location_id", &self.location_id)?,
            merchant_display_name: self.merchant_display_name.clone(),
            on_behalf_of: self
                .on_behalf_of
                .as_deref()
                .map(|account| non_blank("on_behalf_of", account))
                .transpose()?,
            tos_acceptance_permitted: self.tos_acceptance_permitted,
            auto_reconnect_on_unexpected_disconnect: self.auto_reconnect_on_unexpected_disconnect,
        })
    }
}
