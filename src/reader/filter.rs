//! Discovery filters that single out one reader

use std::fmt;

/// Prefix every reader identifier carries
pub const READER_ID_PREFIX: &str = "tmr_";

/// Identity of a discovered reader, as reported by the discovery layer
pub trait ReaderIdentity {
    /// The reader's hardware serial number
    fn serial_number(&self) -> &str;

    /// The reader's backend identifier (`tmr_…`), when registered
    fn reader_id(&self) -> Option<&str>;
}

/// A non-empty reader serial number
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct SerialNumber(String);

impl SerialNumber {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// A reader identifier starting with `tmr_`
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ReaderId(String);

impl ReaderId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// Narrows discovery down to a single reader.
///
/// When a specific filter is used, only the matching reader is reported and
/// discovery completes once it is found. Specific filters can only be created
/// through [`DiscoveryFilter::by_serial_number`] and
/// [`DiscoveryFilter::by_reader_id`], which reject malformed input.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default)]
pub enum DiscoveryFilter {
    /// Accept any discovered reader
    #[default]
    None,
    BySerialNumber(SerialNumber),
    ByReaderId(ReaderId),
}

impl DiscoveryFilter {
    /// Filter by serial number. Returns `None` if `serial_number` is empty.
    pub fn by_serial_number(serial_number: &str) -> Option<Self> {
        if serial_number.is_empty() {
            tracing::debug!("Rejected discovery filter: empty serial number");
            return None;
        }
        Some(Self::BySerialNumber(SerialNumber(serial_number.to_string())))
    }

    /// Filter by reader ID. Returns `None` unless `reader_id` starts with `tmr_`.
    pub fn by_reader_id(reader_id: &str) -> Option<Self> {
        if !reader_id.starts_with(READER_ID_PREFIX) {
            tracing::debug!(reader_id, "Rejected discovery filter: reader id lacks tmr_ prefix");
            return None;
        }
        Some(Self::ByReaderId(ReaderId(reader_id.to_string())))
    }

    /// A filter that does not restrict discovery
    pub fn none() -> Self {
        Self::None
    }

    /// Whether any reader is accepted
    pub fn is_unrestricted(&self) -> bool {
        matches!(self, Self::None)
    }

    pub fn serial_number(&self) -> Option<&str> {
        match self {
            Self::BySerialNumber(serial_number) => Some(serial_number.as_str()),
            _ => None,
        }
    }

    pub fn reader_id(&self) -> Option<&str> {
        match self {
            Self::ByReaderId(reader_id) => Some(reader_id.as_str()),
            _ => None,
        }
    }

    /// Whether a discovered reader passes this filter
    pub fn matches<R: ReaderIdentity + ?Sized>(&self, reader: &R) -> bool {
        match self {
            Self::None => true,
            Self::BySerialNumber(serial_number) => reader.serial_number() == serial_number.as_str(),
            Self::ByReaderId(reader_id) => reader.reader_id() == Some(reader_id.as_str()),
        }
    }
}

impl fmt::Display for DiscoveryFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("none"),
            Self::BySerialNumber(serial_number) => write!(f, "serial_number={}", serial_number.as_str()),
            Self::ByReaderId(reader_id) => write!(f, "reader_id={}", reader_id.as_str()),
        }
    }
}
