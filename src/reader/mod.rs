//! Reader discovery and connection configurations
//!
//! An [`EasyConnectConfiguration`] bundles what is needed to find a reader
//! and connect to it in a single step. Discovery and connection options are
//! specific to a [`ReaderFamily`]; the shared behavior is exposed through the
//! [`DiscoveryConfiguration`] and [`ConnectionConfiguration`] traits.
//!
//! # Examples
//!
//! ```
//! use rust_terminal::config::Builder;
//! use rust_terminal::reader::{
//!     DiscoveryFilter, EasyConnectConfiguration, InternetConnectionConfiguration,
//!     InternetDiscoveryConfiguration, InternetEasyConnectConfiguration,
//! };
//!
//! # fn main() -> rust_terminal::Result<()> {
//! let filter = DiscoveryFilter::by_reader_id("tmr_FDOt2wlRZEdpd7").unwrap_or_default();
//! let discovery = InternetDiscoveryConfiguration::builder()
//!     .with_location_id("tml_1234")
//!     .with_discovery_filter(filter)
//!     .build()?;
//! let connection = InternetConnectionConfiguration::builder()
//!     .with_fail_if_in_use(true)
//!     .build()?;
//!
//! let easy_connect: EasyConnectConfiguration =
//!     InternetEasyConnectConfiguration::new(discovery, connection).into();
//! assert!(easy_connect.targets_single_reader());
//! # Ok(())
//! # }
//! ```

pub mod connection;
pub mod discovery;
pub mod easy_connect;
pub mod filter;


pub use connection::{
    ConnectionConfiguration, InternetConnectionConfiguration,
    InternetConnectionConfigurationBuilder, TapToPayConnectionConfiguration,
    TapToPayConnectionConfigurationBuilder,
};
pub use discovery::{
    DiscoveryConfiguration, InternetDiscoveryConfiguration,
    InternetDiscoveryConfigurationBuilder, ReaderFamily, TapToPayDiscoveryConfiguration,
    TapToPayDiscoveryConfigurationBuilder, MAX_DISCOVERY_TIMEOUT,
};
pub use easy_connect::{
    EasyConnectConfiguration, InternetEasyConnectConfiguration, TapToPayEasyConnectConfiguration,
};
pub use filter::{DiscoveryFilter, ReaderId, ReaderIdentity, SerialNumber, READER_ID_PREFIX};
