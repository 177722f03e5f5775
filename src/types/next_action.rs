//! Next-action descriptors for redirect, QR code and SDK authentication flows

use serde::{Deserialize, Serialize};

/// Wire name of the redirect next action
pub const REDIRECT_TO_URL: &str = "redirect_to_url";
/// Wire name of the WeChat Pay QR code next action
pub const WECHAT_PAY_DISPLAY_QR_CODE: &str = "wechat_pay_display_qr_code";
/// Wire name of the SDK authentication next action
pub const USE_STRIPE_SDK: &str = "use_stripe_sdk";

/// Instructions for redirecting the customer to another URL
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RedirectToUrl {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    return_url: Option<String>,
}

impl RedirectToUrl {
    /// The URL the customer must be redirected to in order to authenticate the payment
    pub fn url(&self) -> Option<&str> {
        self.url.as_deref()
    }

    /// Where the customer lands after completing authentication
    pub fn return_url(&self) -> Option<&str> {
        self.return_url.as_deref()
    }
}

/// Information for SDK driven authentication flows
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UseStripeSdk {
    #[serde(rename = "type", default, skip_serializing_if = "Option::is_none")]
    flow_type: Option<String>,
}

impl UseStripeSdk {
    /// The type of authentication flow to perform
    pub fn flow_type(&self) -> Option<&str> {
        self.flow_type.as_deref()
    }
}

/// Instructions for displaying a QR code for WeChat Pay payments
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WechatPayDisplayQrCode {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    data: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    hosted_instructions_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_data_url: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url_png: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    image_url_svg: Option<String>,
}

impl WechatPayDisplayQrCode {
    /// The QR code data string to display to the customer
    pub fn data(&self) -> Option<&str> {
        self.data.as_deref()
    }

    pub fn hosted_instructions_url(&self) -> Option<&str> {
        self.hosted_instructions_url.as_deref()
    }

    /// A `data:` URL containing the QR code image
    pub fn image_data_url(&self) -> Option<&str> {
        self.image_data_url.as_deref()
    }

    pub fn image_url_png(&self) -> Option<&str> {
        self.image_url_png.as_deref()
    }

    pub fn image_url_svg(&self) -> Option<&str> {
        self.image_url_svg.as_deref()
    }

    /// Decode the image bytes embedded in [`Self::image_data_url`].
    ///
    /// Returns `Ok(None)` when no data URL was provided.
    pub fn decode_image_data(&self) -> crate::Result<Option<Vec<u8>>> {
        use base64::{engine::general_purpose, Engine as _};

        let Some(data_url) = self.image_data_url.as_deref() else {
            return Ok(None);
        };

        let (header, payload) = data_url
            .strip_prefix("data:")
            .and_then(|rest| rest.split_once(','))
            .ok_or_else(|| {
                crate::TerminalError::invalid_field("image_data_url", "not a data URL")
            })?;

        if !header.ends_with(";base64") {
            return Err(crate::TerminalError::invalid_field(
                "image_data_url",
                "data URL is not base64 encoded",
            ));
        }

        Ok(Some(general_purpose::STANDARD.decode(payload)?))
    }
}

/// Borrowed view of the populated next action payload
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NextActionDetails<'a> {
    RedirectToUrl(&'a RedirectToUrl),
    WechatPayDisplayQrCode(&'a WechatPayDisplayQrCode),
    UseStripeSdk(&'a UseStripeSdk),
}

/// The follow-up step a PaymentIntent requires.
///
/// At most one payload is populated, and when one is, it matches
/// [`NextAction::action_type`]. Payloads that disagree are rejected while
/// decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "NextActionWire")]
pub struct NextAction {
    #[serde(rename = "type", skip_serializing_if = "Option::is_none")]
    action_type: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    redirect_to_url: Option<RedirectToUrl>,
    #[serde(skip_serializing_if = "Option::is_none")]
    wechat_pay_display_qr_code: Option<WechatPayDisplayQrCode>,
    #[serde(skip_serializing_if = "Option::is_none")]
    use_stripe_sdk: Option<UseStripeSdk>,
}

#[derive(Deserialize)]
struct NextActionWire {
    #[serde(rename = "type", default)]
    action_type: Option<String>,
    #[serde(default)]
    redirect_to_url: Option<RedirectToUrl>,
    #[serde(default)]
    wechat_pay_display_qr_code: Option<WechatPayDisplayQrCode>,
    #[serde(default)]
    use_stripe_sdk: Option<UseStripeSdk>,
}

impl TryFrom<NextActionWire> for NextAction {
    type Error = crate::TerminalError;

    fn try_from(wire: NextActionWire) -> Result<Self, Self::Error> {
        let populated: Vec<&str> = [
            wire.redirect_to_url.as_ref().map(|_| REDIRECT_TO_URL),
            wire.wechat_pay_display_qr_code
                .as_ref()
                .map(|_| WECHAT_PAY_DISPLAY_QR_CODE),
            wire.use_stripe_sdk.as_ref().map(|_| USE_STRIPE_SDK),
        ]
        .into_iter()
        .flatten()
        .collect();

        match (wire.action_type.as_deref(), populated.as_slice()) {
            (_, [_, _, ..]) => {
                return Err(crate::TerminalError::inconsistent_next_action(format!(
                    "multiple payloads populated: {}",
                    populated.join(", ")
                )));
            }
            (Some(declared), [payload]) if declared != *payload => {
                return Err(crate::TerminalError::inconsistent_next_action(format!(
                    "type `{}` carries a `{}` payload",
                    declared, payload
                )));
            }
            (None, [payload]) => {
                return Err(crate::TerminalError::inconsistent_next_action(format!(
                    "`{}` payload without a type",
                    payload
                )));
            }
            (Some(declared), [])
                if matches!(
                    declared,
                    REDIRECT_TO_URL | WECHAT_PAY_DISPLAY_QR_CODE | USE_STRIPE_SDK
                ) =>
            {
                return Err(crate::TerminalError::inconsistent_next_action(format!(
                    "type `{}` is missing its payload",
                    declared
                )));
            }
            _ => {}
        }

        Ok(Self {
            action_type: wire.action_type,
            redirect_to_url: wire.redirect_to_url,
            wechat_pay_display_qr_code: wire.wechat_pay_display_qr_code,
            use_stripe_sdk: wire.use_stripe_sdk,
        })
    }
}

impl NextAction {
    /// The raw next action type
    pub fn action_type(&self) -> Option<&str> {
        self.action_type.as_deref()
    }

    pub fn redirect_to_url(&self) -> Option<&RedirectToUrl> {
        self.redirect_to_url.as_ref()
    }

    pub fn wechat_pay_display_qr_code(&self) -> Option<&WechatPayDisplayQrCode> {
        self.wechat_pay_display_qr_code.as_ref()
    }

    pub fn use_stripe_sdk(&self) -> Option<&UseStripeSdk> {
        self.use_stripe_sdk.as_ref()
    }

    /// The populated payload, or `None` for action types this crate does not model
    pub fn details(&self) -> Option<NextActionDetails<'_>> {
        if let Some(redirect) = &self.redirect_to_url {
            return Some(NextActionDetails::RedirectToUrl(redirect));
        }
        if let Some(qr_code) = &self.wechat_pay_display_qr_code {
            return Some(NextActionDetails::WechatPayDisplayQrCode(qr_code));
        }
        self.use_stripe_sdk
            .as_ref()
            .map(NextActionDetails::UseStripeSdk)
    }
}
