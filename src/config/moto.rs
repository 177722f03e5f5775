//! Mail Order/Telephone Order configuration

use super::builder::Builder;
use serde::Serialize;

/// Enables MO/TO processing when attached to a collect configuration.
///
/// Presence alone enables MO/TO; the fields only tune it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub struct MotoConfiguration {
    skip_cvc: bool,
}

impl MotoConfiguration {
    /// Start building a MO/TO configuration
    pub fn builder() -> MotoConfigurationBuilder {
        MotoConfigurationBuilder::new()
    }

    /// Skip collecting the CVC on this MO/TO transaction
    pub fn skip_cvc(&self) -> bool {
        self.skip_cvc
    }
}

/// Builder for [`MotoConfiguration`]
#[derive(Debug, Clone, Default)]
pub struct MotoConfigurationBuilder {
    skip_cvc: bool,
}

impl MotoConfigurationBuilder {
    /// Create a new builder with every field at its default
    pub fn new() -> Self {
        Self::default()
    }

    /// Set whether to skip CVC collection
    pub fn with_skip_cvc(mut self, skip_cvc: bool) -> Self {
        self.skip_cvc = skip_cvc;
        self
    }
}

impl Builder for MotoConfigurationBuilder {
    type Output = MotoConfiguration;

    fn build(&self) -> crate::Result<MotoConfiguration> {
        Ok(MotoConfiguration {
            skip_cvc: self.skip_cvc,
        })
    }
}
