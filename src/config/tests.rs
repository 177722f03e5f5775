//! Tests for configuration builders

use super::*;
use crate::types::{
    AllowRedisplay, CollectDataType, CustomerCancellation, SetupIntentCollectionReason,
};
use crate::TerminalError;
use serde_json::json;

#[test]
fn test_collect_payment_defaults() {
    let config = CollectPaymentIntentConfiguration::builder().build().unwrap();

    assert!(!config.skip_tipping());
    assert_eq!(config.tipping_configuration(), None);
    assert!(!config.update_payment_intent());
    assert_eq!(
        config.customer_cancellation(),
        CustomerCancellation::EnableIfAvailable
    );
    assert!(!config.request_dynamic_currency_conversion());
    assert_eq!(config.surcharge_notice(), None);
    assert_eq!(config.allow_redisplay(), AllowRedisplay::Unspecified);
    assert_eq!(config.moto_configuration(), None);
    assert!(!config.is_moto());
}

#[test]
fn test_other_configuration_defaults() {
    let refund = CollectRefundConfiguration::builder().build().unwrap();
    assert_eq!(
        refund.customer_cancellation(),
        CustomerCancellation::EnableIfAvailable
    );

    let setup = CollectSetupIntentConfiguration::builder().build().unwrap();
    assert_eq!(
        setup.customer_cancellation(),
        CustomerCancellation::EnableIfAvailable
    );
    assert_eq!(setup.collection_reason(), SetupIntentCollectionReason::SaveCard);
    assert_eq!(setup.moto_configuration(), None);

    let data = CollectDataConfiguration::builder()
        .with_collect_data_type(CollectDataType::Magstripe)
        .build()
        .unwrap();
    assert_eq!(
        data.customer_cancellation(),
        CustomerCancellation::EnableIfAvailable
    );

    let confirm = ConfirmPaymentIntentConfiguration::builder().build().unwrap();
    assert_eq!(confirm.return_url(), None);
    assert_eq!(confirm.surcharge(), None);

    let moto = MotoConfiguration::builder().build().unwrap();
    assert!(!moto.skip_cvc());

    let consent = SurchargeConsent::builder().build().unwrap();
    assert_eq!(consent.collection(), SurchargeConsentCollection::Disabled);
    assert_eq!(consent.notice(), None);
}

#[test]
fn test_last_setter_wins() {
    let config = CollectPaymentIntentConfiguration::builder()
        .with_customer_cancellation(CustomerCancellation::DisableIfAvailable)
        .with_customer_cancellation(CustomerCancellation::EnableIfAvailable)
        .with_allow_redisplay(AllowRedisplay::Always)
        .with_allow_redisplay(AllowRedisplay::Limited)
        .with_surcharge_notice("First notice")
        .with_surcharge_notice("Second notice")
        .build()
        .unwrap();

    assert_eq!(
        config.customer_cancellation(),
        CustomerCancellation::EnableIfAvailable
    );
    assert_eq!(config.allow_redisplay(), AllowRedisplay::Limited);
    assert_eq!(config.surcharge_notice(), Some("Second notice"));

    let setup = CollectSetupIntentConfiguration::builder()
        .with_collection_reason(SetupIntentCollectionReason::Verify)
        .with_collection_reason(SetupIntentCollectionReason::SaveCard)
        .build()
        .unwrap();
    assert_eq!(setup.collection_reason(), SetupIntentCollectionReason::SaveCard);
}

#[test]
fn test_explicit_default_value_is_kept() {
    // Setting the default explicitly is indistinguishable from leaving it unset
    let explicit = CollectRefundConfiguration::builder()
        .with_customer_cancellation(CustomerCancellation::EnableIfAvailable)
        .build()
        .unwrap();
    let implicit = CollectRefundConfiguration::builder().build().unwrap();
    assert_eq!(explicit, implicit);
}

#[test]
fn test_build_does_not_alias_builder() {
    let builder = CollectPaymentIntentConfiguration::builder()
        .with_skip_tipping(true)
        .with_allow_redisplay(AllowRedisplay::Always);

    let first = builder.build().unwrap();
    let second = builder.build().unwrap();
    assert_eq!(first, second);

    let builder = builder
        .with_skip_tipping(false)
        .with_allow_redisplay(AllowRedisplay::Limited)
        .with_moto_configuration(MotoConfiguration::builder().with_skip_cvc(true).build().unwrap());
    let third = builder.build().unwrap();

    assert!(first.skip_tipping());
    assert_eq!(first.allow_redisplay(), AllowRedisplay::Always);
    assert_eq!(first.moto_configuration(), None);

    assert!(!third.skip_tipping());
    assert_eq!(third.allow_redisplay(), AllowRedisplay::Limited);
    assert!(third.is_moto());
}

#[test]
fn test_clear_nullable_fields() {
    let moto = MotoConfiguration::builder().build().unwrap();
    let config = CollectPaymentIntentConfiguration::builder()
        .with_moto_configuration(moto)
        .with_moto_configuration(None)
        .with_surcharge_notice("Fee applies")
        .clear_surcharge_notice()
        .build()
        .unwrap();

    assert_eq!(config.moto_configuration(), None);
    assert_eq!(config.surcharge_notice(), None);
}

#[test]
fn test_ineffective_combinations_still_build() {
    let config = CollectPaymentIntentConfiguration::builder()
        .with_request_dynamic_currency_conversion(true)
        .with_surcharge_notice("A 3% surcharge applies")
        .build()
        .unwrap();

    assert!(config.request_dynamic_currency_conversion());
    assert!(!config.dynamic_currency_conversion_effective());
    assert!(!config.surcharge_notice_effective());

    let config = CollectPaymentIntentConfiguration::builder()
        .with_update_payment_intent(true)
        .with_request_dynamic_currency_conversion(true)
        .with_surcharge_notice("A 3% surcharge applies")
        .build()
        .unwrap();

    assert!(config.dynamic_currency_conversion_effective());
    assert!(config.surcharge_notice_effective());
}

#[test]
fn test_blank_surcharge_notice_rejected() {
    let result = CollectPaymentIntentConfiguration::builder()
        .with_surcharge_notice("   ")
        .build();

    assert!(matches!(
        result,
        Err(TerminalError::InvalidField {
            field: "surcharge_notice",
            ..
        })
    ));
}

#[test]
fn test_collect_data_type_required() {
    let result = CollectDataConfiguration::builder()
        .with_customer_cancellation(CustomerCancellation::DisableIfAvailable)
        .build();

    assert!(matches!(
        result,
        Err(TerminalError::MissingField {
            field: "collect_data_type"
        })
    ));

    let config = CollectDataConfiguration::builder()
        .with_collect_data_type(CollectDataType::NfcUid)
        .build()
        .unwrap();
    assert_eq!(config.collect_data_type(), CollectDataType::NfcUid);
}

#[test]
fn test_confirm_return_url_validation() {
    let config = ConfirmPaymentIntentConfiguration::builder()
        .with_return_url("https://shop.example.com/return")
        .build()
        .unwrap();
    assert_eq!(config.return_url(), Some("https://shop.example.com/return"));

    let app_scheme = ConfirmPaymentIntentConfiguration::builder()
        .with_return_url("myapp://payments/complete")
        .build()
        .unwrap();
    assert_eq!(app_scheme.return_url(), Some("myapp://payments/complete"));

    let result = ConfirmPaymentIntentConfiguration::builder()
        .with_return_url("not a url")
        .build();
    let err = result.unwrap_err();
    assert!(matches!(
        err,
        TerminalError::InvalidUrl {
            field: "return_url",
            ..
        }
    ));
    assert!(err.is_validation_error());
}

#[test]
fn test_surcharge_configuration() {
    let consent = SurchargeConsent::builder()
        .with_collection(SurchargeConsentCollection::Enabled)
        .with_notice("Credit card payments incur a 3% surcharge")
        .build()
        .unwrap();
    let surcharge = SurchargeConfiguration::builder()
        .with_amount(30)
        .with_consent(consent.clone())
        .build()
        .unwrap();
    let config = ConfirmPaymentIntentConfiguration::builder()
        .with_surcharge_configuration(surcharge)
        .build()
        .unwrap();

    let surcharge = config.surcharge().unwrap();
    assert_eq!(surcharge.amount(), Some(30));
    assert_eq!(surcharge.consent(), Some(&consent));

    assert!(SurchargeConsent::builder().with_notice("").build().is_err());
}

#[test]
fn test_tipping_configuration() {
    let tipping = TippingConfiguration::builder()
        .with_eligible_amount(800)
        .build()
        .unwrap();
    let config = CollectPaymentIntentConfiguration::builder()
        .with_tipping_configuration(tipping)
        .build()
        .unwrap();

    assert_eq!(
        config.tipping_configuration().and_then(|t| t.eligible_amount()),
        Some(800)
    );
    assert_eq!(
        TippingConfiguration::builder().build().unwrap().eligible_amount(),
        None
    );
}

#[test]
fn test_nested_clone_is_independent() {
    let original = CollectSetupIntentConfiguration::builder()
        .with_moto_configuration(MotoConfiguration::builder().with_skip_cvc(true).build().unwrap())
        .build()
        .unwrap();
    let copy = original;
    assert_eq!(copy, original);

    let confirm = ConfirmPaymentIntentConfiguration::builder()
        .with_return_url("https://shop.example.com/return")
        .with_surcharge_configuration(
            SurchargeConfiguration::builder()
                .with_consent(SurchargeConsent::builder().with_notice("Fee").build().unwrap())
                .build()
                .unwrap(),
        )
        .build()
        .unwrap();
    let cloned = confirm.clone();
    drop(confirm);
    assert_eq!(
        cloned
            .surcharge()
            .and_then(|s| s.consent())
            .and_then(|c| c.notice()),
        Some("Fee")
    );
}

#[test]
fn test_serialized_request_shape() {
    let config = CollectPaymentIntentConfiguration::builder()
        .with_update_payment_intent(true)
        .with_customer_cancellation(CustomerCancellation::DisableIfAvailable)
        .with_moto_configuration(MotoConfiguration::builder().with_skip_cvc(true).build().unwrap())
        .build()
        .unwrap();

    assert_eq!(
        serde_json::to_value(&config).unwrap(),
        json!({
            "skip_tipping": false,
            "update_payment_intent": true,
            "customer_cancellation": "disable_if_available",
            "request_dynamic_currency_conversion": false,
            "allow_redisplay": "unspecified",
            "moto_configuration": { "skip_cvc": true }
        })
    );
}

#[test]
fn test_configurations_are_thread_safe() {
    fn assert_send_sync<T: Send + Sync>() {}
    fn assert_send<T: Send>() {}

    assert_send_sync::<CollectPaymentIntentConfiguration>();
    assert_send_sync::<CollectRefundConfiguration>();
    assert_send_sync::<CollectSetupIntentConfiguration>();
    assert_send_sync::<CollectDataConfiguration>();
    assert_send_sync::<ConfirmPaymentIntentConfiguration>();
    assert_send_sync::<MotoConfiguration>();
    assert_send::<CollectPaymentIntentConfigurationBuilder>();
}
