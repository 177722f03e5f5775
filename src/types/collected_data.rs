//! Non-payment data read by a collect-data call

use super::options::CollectDataType;
use serde::{Deserialize, Serialize};

/// Data collected through the magstripe interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MagstripeCollectedData {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<String>,
}

impl MagstripeCollectedData {
    /// Unique identifier for the collected object
    pub fn stripe_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

/// Data collected through the NFC interface
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NfcUidCollectedData {
    uid: String,
}

impl NfcUidCollectedData {
    /// The NFC UID of the tapped tag
    pub fn uid(&self) -> &str {
        &self.uid
    }
}

/// Result of a collect-data call, one variant per collect data type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum CollectedData {
    Magstripe(MagstripeCollectedData),
    NfcUid(NfcUidCollectedData),
}

impl CollectedData {
    /// Decode collected data from its JSON representation
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// The collect data type that produced this result
    pub fn collect_data_type(&self) -> CollectDataType {
        match self {
            CollectedData::Magstripe(_) => CollectDataType::Magstripe,
            CollectedData::NfcUid(_) => CollectDataType::NfcUid,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_variants() {
        let magstripe = CollectedData::from_json(r#"{"type": "magstripe", "id": "cd_123"}"#).unwrap();
        assert_eq!(magstripe.collect_data_type(), CollectDataType::Magstripe);
        match &magstripe {
            CollectedData::Magstripe(data) => assert_eq!(data.stripe_id(), Some("cd_123")),
            other => panic!("unexpected variant: {:?}", other),
        }

        let nfc = CollectedData::from_json(r#"{"type": "nfc_uid", "uid": "04A2249A"}"#).unwrap();
        assert_eq!(nfc.collect_data_type(), CollectDataType::NfcUid);
        match &nfc {
            CollectedData::NfcUid(data) => assert_eq!(data.uid(), "04A2249A"),
            other => panic!("unexpected variant: {:?}", other),
        }
    }

    #[test]
    fn test_magstripe_id_optional() {
        let data = CollectedData::from_json(r#"{"type": "magstripe"}"#).unwrap();
        assert_eq!(
            data,
            CollectedData::Magstripe(MagstripeCollectedData { id: None })
        );
    }

    #[test]
    fn test_unknown_type_rejected() {
        assert!(CollectedData::from_json(r#"{"type": "barcode"}"#).is_err());
    }
}
