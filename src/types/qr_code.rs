//! QR code display data for non-card payment methods

use super::options::PaymentMethodType;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Data needed to display a QR code during payment processing
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QrCodeDisplayData {
    payment_method_type: PaymentMethodType,
    qr_code_image_url_png: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    qr_code_image_url_svg: Option<String>,
    /// Milliseconds since the Unix epoch
    expires_at_ms: i64,
}

impl QrCodeDisplayData {
    /// Decode display data from its JSON representation
    pub fn from_json(json: &str) -> crate::Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn payment_method_type(&self) -> &PaymentMethodType {
        &self.payment_method_type
    }

    pub fn qr_code_image_url_png(&self) -> &str {
        &self.qr_code_image_url_png
    }

    pub fn qr_code_image_url_svg(&self) -> Option<&str> {
        self.qr_code_image_url_svg.as_deref()
    }

    pub fn expires_at_ms(&self) -> i64 {
        self.expires_at_ms
    }

    /// Expiration as a timestamp, `None` if out of the representable range
    pub fn expires_at(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp_millis(self.expires_at_ms)
    }

    /// Whether the QR code has expired at `now`
    pub fn is_expired_at(&self, now: DateTime<Utc>) -> bool {
        now.timestamp_millis() >= self.expires_at_ms
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> QrCodeDisplayData {
        QrCodeDisplayData::from_json(
            r#"{
                "payment_method_type": "paynow",
                "qr_code_image_url_png": "https://qr.example.com/code.png",
                "expires_at_ms": 1745323985000
            }"#,
        )
        .unwrap()
    }

    #[test]
    fn test_optional_svg() {
        let data = sample();
        assert_eq!(data.payment_method_type(), &PaymentMethodType::Paynow);
        assert_eq!(data.qr_code_image_url_svg(), None);
        assert!(!serde_json::to_string(&data)
            .unwrap()
            .contains("qr_code_image_url_svg"));
    }

    #[test]
    fn test_expiry() {
        let data = sample();
        let expires_at = data.expires_at().unwrap();
        assert_eq!(expires_at.timestamp(), 1745323985);

        assert!(!data.is_expired_at(expires_at - chrono::Duration::seconds(1)));
        assert!(data.is_expired_at(expires_at));
    }

    #[test]
    fn test_png_url_required() {
        let result = QrCodeDisplayData::from_json(
            r#"{"payment_method_type": "paynow", "expires_at_ms": 0}"#,
        );
        assert!(result.is_err());
    }
}
