//! Discovery configurations per reader family

use super::filter::DiscoveryFilter;
use crate::config::Builder;
use std::fmt;
use std::time::Duration;

/// Longest discovery timeout accepted for internet readers
pub const MAX_DISCOVERY_TIMEOUT: Duration = Duration::from_secs(300);

/// The reader families an easy-connect flow can target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ReaderFamily {
    Internet,
    TapToPay,
}

impl ReaderFamily {
    pub fn as_str(&self) -> &'static str {
        match self {
            ReaderFamily::Internet => "internet",
            ReaderFamily::TapToPay => "tap_to_pay",
        }
    }
}

impl fmt::Display for ReaderFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Capability of producing discovery criteria for one reader family
pub trait DiscoveryConfiguration: fmt::Debug + Send + Sync {
    /// The reader family this configuration discovers
    fn reader_family(&self) -> ReaderFamily;

    /// Whether discovery returns simulated readers
    fn simulated(&self) -> bool;

    /// The filter applied to discovered readers
    fn discovery_filter(&self) -> &DiscoveryFilter;
}

/// Discovery options for internet-connected smart readers
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternetDiscoveryConfiguration {
    location_id: Option<String>,
    simulated: bool,
    timeout: Option<Duration>,
    discovery_filter: DiscoveryFilter,
}

impl InternetDiscoveryConfiguration {
    pub fn builder() -> InternetDiscoveryConfigurationBuilder {
        InternetDiscoveryConfigurationBuilder::new()
    }

    /// Only discover readers registered to this location
    pub fn location_id(&self) -> Option<&str> {
        self.location_id.as_deref()
    }

    /// `None` means discovery runs until canceled
    pub fn timeout(&self) -> Option<Duration> {
        self.timeout
    }
}

impl DiscoveryConfiguration for InternetDiscoveryConfiguration {
    fn reader_family(&self) -> ReaderFamily {
        ReaderFamily::Internet
    }

    fn simulated(&self) -> bool {
        self.simulated
    }

    fn discovery_filter(&self) -> &DiscoveryFilter {
        &self.discovery_filter
    }
}

/// Builder for [`InternetDiscoveryConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct InternetDiscoveryConfigurationBuilder {
    location_id: Option<String>,
    simulated: bool,
    timeout: Option<Duration>,
    discovery_filter: DiscoveryFilter,
}

impl InternetDiscoveryConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_location_id(mut self, location_id: impl Into<String>) -> Self {
        self.location_id = Some(location_id.into());
        self
    }

    pub fn with_simulated(mut self, simulated: bool) -> Self {
        self.simulated = simulated;
        self
    }

    /// A zero timeout disables the timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }

    pub fn with_discovery_filter(mut self, discovery_filter: DiscoveryFilter) -> Self {
        self.discovery_filter = discovery_filter;
        self
    }
}

impl Builder for InternetDiscoveryConfigurationBuilder {
    type Output = InternetDiscoveryConfiguration;

    fn build(&self) -> crate::Result<InternetDiscoveryConfiguration> {
        let timeout = match self.timeout {
            Some(timeout) if timeout > MAX_DISCOVERY_TIMEOUT => {
                return Err(crate::TerminalError::invalid_field(
                    "timeout",
                    format!(
                        "must not exceed {} seconds",
                        MAX_DISCOVERY_TIMEOUT.as_secs()
                    ),
                ));
            }
            Some(timeout) if timeout.is_zero() => None,
            other => other,
        };

        let location_id = self
            .location_id
            .as_deref()
            .map(|id| crate::config::builder::non_blank("location_id", id))
            .transpose()?;

        Ok(InternetDiscoveryConfiguration {
            location_id,
            simulated: self.simulated,
            timeout,
            discovery_filter: self.discovery_filter.clone(),
        })
    }
}

/// Discovery options for Tap to Pay on the local device
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapToPayDiscoveryConfiguration {
    simulated: bool,
    discovery_filter: DiscoveryFilter,
}

impl TapToPayDiscoveryConfiguration {
    pub fn builder() -> TapToPayDiscoveryConfigurationBuilder {
        TapToPayDiscoveryConfigurationBuilder::new()
    }
}

impl DiscoveryConfiguration for TapToPayDiscoveryConfiguration {
    fn reader_family(&self) -> ReaderFamily {
        ReaderFamily::TapToPay
    }

    fn simulated(&self) -> bool {
        self.simulated
    }

    /// The local device is the only candidate, so no filtering applies
    fn discovery_filter(&self) -> &DiscoveryFilter {
        &self.discovery_filter
    }
}

/// Builder for [`TapToPayDiscoveryConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct TapToPayDiscoveryConfigurationBuilder {
    simulated: bool,
}

impl TapToPayDiscoveryConfigurationBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_simulated(mut self, simulated: bool) -> Self {
        self.simulated = simulated;
        self
    }
}

impl Builder for TapToPayDiscoveryConfigurationBuilder {
    type Output = TapToPayDiscoveryConfiguration;

    fn build(&self) -> crate::Result<TapToPayDiscoveryConfiguration> {
        Ok(TapToPayDiscoveryConfiguration {
            simulated: self.simulated,
            discovery_filter: DiscoveryFilter::none(),
        })
    }
}
