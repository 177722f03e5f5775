//! End-to-end flows: configure, connect, collect, confirm

use rust_terminal::config::{
    Builder, CollectPaymentIntentConfiguration, ConfirmPaymentIntentConfiguration,
    MotoConfiguration, SurchargeConfiguration, SurchargeConsent, SurchargeConsentCollection,
};
use rust_terminal::reader::{
    DiscoveryFilter, EasyConnectConfiguration, InternetConnectionConfiguration,
    InternetDiscoveryConfiguration, InternetEasyConnectConfiguration, ReaderIdentity,
};
use rust_terminal::types::{
    CommandFailure, FailureDisposition, NextActionDetails, PaymentIntent, PaymentIntentStatus,
};
use rust_terminal::TerminalError;
use std::time::Duration;

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_max_level(tracing::Level::DEBUG)
        .with_test_writer()
        .try_init();
}

#[derive(Debug)]
struct DiscoveredReader {
    serial_number: String,
    id: Option<String>,
}

impl ReaderIdentity for DiscoveredReader {
    fn serial_number(&self) -> &str {
        &self.serial_number
    }

    fn reader_id(&self) -> Option<&str> {
        self.id.as_deref()
    }
}

const REQUIRES_CAPTURE: &str = r#"{
    "id": "pi_3MtwBwLkdIwHu7ix28a3tqPa",
    "amount": 2000,
    "amount_capturable": 2000,
    "capture_method": "manual",
    "created": 1680800504,
    "currency": "usd",
    "livemode": false,
    "status": "requires_capture",
    "payment_method_types": ["card_present"],
    "charges": [
        {
            "id": "ch_3MtwBwLkdIwHu7ix28a3tqPa",
            "amount": 2000,
            "currency": "usd",
            "status": "succeeded",
            "captured": false,
            "paid": true,
            "payment_intent": "pi_3MtwBwLkdIwHu7ix28a3tqPa",
            "payment_method_details": {
                "type": "card_present",
                "card_present": {
                    "brand": "visa",
                    "last4": "4242",
                    "exp_month": 12,
                    "exp_year": 2030,
                    "funding": "credit"
                }
            }
        }
    ]
}"#;

#[test]
fn test_easy_connect_then_collect_and_confirm() {
    init_tracing();

    let discovery = InternetDiscoveryConfiguration::builder()
        .with_location_id("tml_FDOt2wlRZEdpd7")
        .with_timeout(Duration::from_secs(60))
        .with_discovery_filter(DiscoveryFilter::by_serial_number("WSC513105011295").unwrap())
        .build()
        .unwrap();
    let connection = InternetConnectionConfiguration::builder()
        .with_fail_if_in_use(true)
        .with_allow_customer_cancel(true)
        .build()
        .unwrap();
    let easy_connect = EasyConnectConfiguration::from(InternetEasyConnectConfiguration::new(
        discovery, connection,
    ));
    assert!(easy_connect.targets_single_reader());

    let discovered = vec![
        DiscoveredReader {
            serial_number: "WSC513105011294".to_string(),
            id: Some("tmr_A".to_string()),
        },
        DiscoveredReader {
            serial_number: "WSC513105011295".to_string(),
            id: Some("tmr_B".to_string()),
        },
    ];
    let reader = easy_connect.select_reader(&discovered).unwrap();
    assert_eq!(reader.reader_id(), Some("tmr_B"));

    let collect = CollectPaymentIntentConfiguration::builder()
        .with_skip_tipping(true)
        .with_update_payment_intent(true)
        .with_surcharge_notice("Credit card payments incur a 3% surcharge")
        .build()
        .unwrap();
    assert!(collect.surcharge_notice_effective());

    let confirm = ConfirmPaymentIntentConfiguration::builder()
        .with_return_url("https://shop.example.com/checkout/complete")
        .with_surcharge_configuration(
            SurchargeConfiguration::builder()
                .with_amount(60)
                .with_consent(
                    SurchargeConsent::builder()
                        .with_collection(SurchargeConsentCollection::Enabled)
                        .build()
                        .unwrap(),
                )
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    assert_eq!(confirm.surcharge().and_then(|s| s.amount()), Some(60));

    let intent = PaymentIntent::from_json(REQUIRES_CAPTURE).unwrap();
    assert_eq!(intent.status(), PaymentIntentStatus::RequiresCapture);
    assert_eq!(intent.charges().len(), 1);
    let charge = &intent.charges()[0];
    assert_eq!(charge.payment_intent_id(), intent.stripe_id());
    assert_eq!(
        charge
            .payment_method_details()
            .and_then(|d| d.card_present())
            .and_then(|c| c.last4()),
        Some("4242")
    );
}

#[test]
fn test_ambiguous_discovery_is_reported() {
    init_tracing();

    let discovery = InternetDiscoveryConfiguration::builder()
        .with_simulated(true)
        .build()
        .unwrap();
    let connection = InternetConnectionConfiguration::builder().build().unwrap();
    let easy_connect: EasyConnectConfiguration =
        InternetEasyConnectConfiguration::new(discovery, connection).into();
    assert!(!easy_connect.targets_single_reader());

    let discovered: Vec<DiscoveredReader> = (0..4)
        .map(|n| DiscoveredReader {
            serial_number: format!("SIMULATOR-{n}"),
            id: None,
        })
        .collect();

    let err = easy_connect.select_reader(&discovered).unwrap_err();
    assert!(matches!(err, TerminalError::MultipleReadersFound { count: 4 }));
    assert!(!err.is_validation_error());
}

#[test]
fn test_moto_collection_with_redirect_follow_up() {
    init_tracing();

    let collect = CollectPaymentIntentConfiguration::builder()
        .with_moto_configuration(MotoConfiguration::builder().with_skip_cvc(true).build().unwrap())
        .build()
        .unwrap();
    assert!(collect.is_moto());

    let intent = PaymentIntent::from_json(
        r#"{
            "id": "pi_redirect",
            "amount": 1500,
            "capture_method": "automatic",
            "created": 1680800504,
            "currency": "eur",
            "status": "requires_action",
            "next_action": {
                "type": "redirect_to_url",
                "redirect_to_url": {
                    "url": "https://hooks.stripe.com/redirect/authenticate/src_1",
                    "return_url": "myapp://payments/complete"
                }
            }
        }"#,
    )
    .unwrap();

    match intent.next_action().and_then(|action| action.details()) {
        Some(NextActionDetails::RedirectToUrl(redirect)) => {
            assert_eq!(redirect.return_url(), Some("myapp://payments/complete"));
        }
        other => panic!("unexpected next action: {other:?}"),
    }
}

#[test]
fn test_failed_confirmation_dispositions() {
    let declined_intent = PaymentIntent::from_json(
        r#"{
            "id": "pi_declined",
            "amount": 500,
            "capture_method": "automatic",
            "created": 1680800504,
            "currency": "usd",
            "status": "requires_payment_method",
            "last_payment_error": {
                "type": "card_error",
                "code": "card_declined",
                "decline_code": "insufficient_funds",
                "message": "Your card has insufficient funds."
            }
        }"#,
    )
    .unwrap();
    let api_error = declined_intent.last_payment_error().cloned();

    let declined = CommandFailure::new(Some(declined_intent), api_error);
    assert_eq!(declined.disposition(), FailureDisposition::Declined);

    let unknown: CommandFailure<PaymentIntent> = CommandFailure::new(None, None);
    assert_eq!(unknown.disposition(), FailureDisposition::RetryWithOriginal);
}

#[test]
fn test_offline_intent_round_trip() {
    let intent = PaymentIntent::from_json(
        r#"{
            "amount": 1000,
            "capture_method": "automatic",
            "created": 1745323800,
            "currency": "usd",
            "status": "requires_capture",
            "offline_details": { "stored_at": 1745323800, "requires_upload": true }
        }"#,
    )
    .unwrap();

    let restored = PaymentIntent::from_json(&intent.to_json().unwrap()).unwrap();
    assert_eq!(restored, intent);
    assert_eq!(restored.stripe_id(), None);
    assert!(restored.is_offline());
    assert_eq!(restored.status(), PaymentIntentStatus::RequiresCapture);
}
