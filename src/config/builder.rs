//! The builder contract shared by every configuration object

/// Accumulates field values and produces an immutable configuration.
///
/// Setters are chained `with_*` methods that take and return the builder.
/// [`Builder::build`] borrows the builder, so the same builder can be built
/// again after further setter calls. Every call returns an independent object
/// frozen with the field values at that moment; later setter calls never reach
/// an object that was already built.
///
/// A builder has a single owner. It performs no internal synchronization, and
/// sharing one builder between threads while setting fields is a misuse.
pub trait Builder {
    /// The configuration this builder produces
    type Output;

    /// Apply defaults, validate, and produce a new configuration
    fn build(&self) -> crate::Result<Self::Output>;
}

/// Trim a free-form text field, rejecting values that are blank after trimming
pub(crate) fn non_blank(field: &'static str, value: &str) -> crate::Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(crate::TerminalError::invalid_field(
            field,
            "must not be empty",
        ));
    }
    Ok(trimmed.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_non_blank() {
        assert_eq!(non_blank("notice", "  Fee applies ").unwrap(), "Fee applies");
        assert!(non_blank("notice", "   ").is_err());
        assert!(non_blank("notice", "").is_err());
    }
}
