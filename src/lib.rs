//! # Terminal Configuration and Payment Models
//!
//! A **type-safe** model layer for in-person payment terminals: the
//! configuration objects that shape every collect, confirm, refund and
//! connect call, and the immutable value objects decoded from the payment
//! backend.
//!
//! ## Features
//!
//! - **Builders with documented defaults**: every configuration object is
//!   obtained from a builder that fills unset fields and validates input
//! - **Validated factories**: discovery filters can only be created from
//!   well-formed serial numbers and reader identifiers
//! - **Wire-compatible value objects**: PaymentIntents, Charges, Refunds and
//!   next actions decode from the backend's snake_case JSON via serde
//! - **Offline aware**: PaymentIntents created while offline keep an absent
//!   identifier through every round trip
//! - **Thread safe**: built objects are immutable and `Send + Sync`
//!
//! ## Quick Start
//!
//! ```rust
//! use rust_terminal::config::{Builder, CollectPaymentIntentConfiguration};
//! use rust_terminal::types::{CustomerCancellation, PaymentIntent, PaymentIntentStatus};
//!
//! # fn main() -> rust_terminal::Result<()> {
//! let config = CollectPaymentIntentConfiguration::builder()
//!     .with_skip_tipping(true)
//!     .with_customer_cancellation(CustomerCancellation::DisableIfAvailable)
//!     .build()?;
//! assert!(config.skip_tipping());
//!
//! let intent = PaymentIntent::from_json(
//!     r#"{
//!         "id": "pi_3MtwBwLkdIwHu7ix28a3tqPa",
//!         "amount": 2000,
//!         "currency": "usd",
//!         "capture_method": "automatic",
//!         "status": "requires_payment_method",
//!         "created": 1680800504
//!     }"#,
//! )?;
//! assert_eq!(intent.status(), PaymentIntentStatus::RequiresPaymentMethod);
//! # Ok(())
//! # }
//! ```
//!
//! ## Architecture
//!
//! - **`config`**: Per-call configuration objects and the [`config::Builder`] contract
//! - **`reader`**: Discovery filters, discovery and connection configurations, easy connect
//! - **`types`**: Enumerations and value objects decoded from the payment backend
//! - **`error`**: Build and decode errors

pub mod config;
pub mod error;
pub mod reader;
pub mod types;

// Re-exports for convenience
pub use config::Builder;
pub use error::{Result, TerminalError};
pub use reader::{DiscoveryFilter, EasyConnectConfiguration};
pub use types::*;

/// Current version of the library
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_version_constant() {
        assert!(!VERSION.is_empty());
    }

    #[test]
    fn test_root_re_exports() {
        let filter = DiscoveryFilter::by_serial_number("WSC513105011295");
        assert!(filter.is_some());

        let status: PaymentIntentStatus = serde_json::from_str("\"succeeded\"").unwrap();
        assert!(status.is_terminal());

        let err: Result<()> = Err(TerminalError::NoReaderFound);
        assert!(err.is_err());
    }

    #[test]
    fn test_builder_trait_in_scope_from_root() {
        let moto = config::MotoConfiguration::builder()
            .with_skip_cvc(true)
            .build()
            .unwrap();
        assert!(moto.skip_cvc());
    }
}
