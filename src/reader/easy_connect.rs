//! Declarative "discover then connect" bundles

use super::connection::{
    ConnectionConfiguration, InternetConnectionConfiguration, TapToPayConnectionConfiguration,
};
use super::discovery::{
    DiscoveryConfiguration, InternetDiscoveryConfiguration, ReaderFamily,
    TapToPayDiscoveryConfiguration,
};
use super::filter::ReaderIdentity;
use crate::{Result, TerminalError};

/// Discover and connect to an internet reader in one step.
///
/// The discovery configuration should carry a [`DiscoveryFilter`] that
/// narrows discovery to exactly one reader. This is not checked here; a
/// filter matching several readers fails in
/// [`EasyConnectConfiguration::select_reader`].
///
/// [`DiscoveryFilter`]: super::DiscoveryFilter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InternetEasyConnectConfiguration {
    discovery: InternetDiscoveryConfiguration,
    connection: InternetConnectionConfiguration,
}

impl InternetEasyConnectConfiguration {
    pub fn new(
        discovery: InternetDiscoveryConfiguration,
        connection: InternetConnectionConfiguration,
    ) -> Self {
        Self {
            discovery,
            connection,
        }
    }

    pub fn discovery(&self) -> &InternetDiscoveryConfiguration {
        &self.discovery
    }

    pub fn connection(&self) -> &InternetConnectionConfiguration {
        &self.connection
    }
}

/// Discover and connect to the local Tap to Pay reader in one step
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TapToPayEasyConnectConfiguration {
    discovery: TapToPayDiscoveryConfiguration,
    connection: TapToPayConnectionConfiguration,
}

impl TapToPayEasyConnectConfiguration {
    pub fn new(
        discovery: TapToPayDiscoveryConfiguration,
        connection: TapToPayConnectionConfiguration,
    ) -> Self {
        Self {
            discovery,
            connection,
        }
    }

    pub fn discovery(&self) -> &TapToPayDiscoveryConfiguration {
        &self.discovery
    }

    pub fn connection(&self) -> &TapToPayConnectionConfiguration {
        &self.connection
    }
}

/// A discovery configuration paired with a connection configuration for the
/// same reader family
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EasyConnectConfiguration {
    Internet(InternetEasyConnectConfiguration),
    TapToPay(TapToPayEasyConnectConfiguration),
}

impl EasyConnectConfiguration {
    pub fn reader_family(&self) -> ReaderFamily {
        match self {
            EasyConnectConfiguration::Internet(_) => ReaderFamily::Internet,
            EasyConnectConfiguration::TapToPay(_) => ReaderFamily::TapToPay,
        }
    }

    pub fn discovery_configuration(&self) -> &dyn DiscoveryConfiguration {
        match self {
            EasyConnectConfiguration::Internet(config) => &config.discovery,
            EasyConnectConfiguration::TapToPay(config) => &config.discovery,
        }
    }

    pub fn connection_configuration(&self) -> &dyn ConnectionConfiguration {
        match self {
            EasyConnectConfiguration::Internet(config) => &config.connection,
            EasyConnectConfiguration::TapToPay(config) => &config.connection,
        }
    }

    /// Whether discovery can only ever yield a single reader.
    ///
    /// Tap to Pay always targets the local device. Internet discovery does so
    /// only when a specific filter is set.
    pub fn targets_single_reader(&self) -> bool {
        match self {
            EasyConnectConfiguration::Internet(config) => {
                !config.discovery.discovery_filter().is_unrestricted()
            }
            EasyConnectConfiguration::TapToPay(_) => true,
        }
    }

    /// Pick the reader to connect to from the readers discovery reported.
    ///
    /// # Errors
    ///
    /// Returns [`TerminalError::NoReaderFound`] if no reader passes the
    /// discovery filter and [`TerminalError::MultipleReadersFound`] if the
    /// choice is ambiguous.
    ///
    /// Tap to Pay discovery only ever reports the local device, so the first
    /// reported reader is selected and ambiguity cannot arise.
    pub fn select_reader<'a, R: ReaderIdentity>(&self, discovered: &'a [R]) -> Result<&'a R> {
        if let EasyConnectConfiguration::TapToPay(_) = self {
            let local = discovered.first().ok_or(TerminalError::NoReaderFound)?;
            tracing::debug!(
                family = %self.reader_family(),
                serial_number = local.serial_number(),
                "Selected local reader"
            );
            return Ok(local);
        }

        let filter = self.discovery_configuration().discovery_filter();
        let mut candidates = discovered.iter().filter(|reader| filter.matches(*reader));

        let selected = candidates.next().ok_or(TerminalError::NoReaderFound)?;
        let others = candidates.count();
        if others > 0 {
            tracing::warn!(
                family = %self.reader_family(),
                filter = %filter,
                count = others + 1,
                "Discovery filter matched more than one reader"
            );
            return Err(TerminalError::MultipleReadersFound { count: others + 1 });
        }

        tracing::debug!(
            family = %self.reader_family(),
            serial_number = selected.serial_number(),
            "Selected reader"
        );
        Ok(selected)
    }
}

impl From<InternetEasyConnectConfiguration> for EasyConnectConfiguration {
    fn from(config: InternetEasyConnectConfiguration) -> Self {
        EasyConnectConfiguration::Internet(config)
    }
}

impl From<TapToPayEasyConnectConfiguration> for EasyConnectConfiguration {
    fn from(config: TapToPayEasyConnectConfiguration) -> Self {
        EasyConnectConfiguration::TapToPay(config)
    }
}
