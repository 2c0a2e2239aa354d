//! End-to-end tests for the QRIS payload service
//!
//! Real-shaped payloads go through parse, validate, convert and re-encode.

use codec::{
    compute_checksum, verify_payload_checksum, ConvertError, DynamicRequest, FeeCategory,
    PaymentRecord, ProtocolError, Qris, TlvFault,
};
use pretty_assertions::assert_eq;

const STATIC: &str = "00020101021126690017ID.CO.EXAMPLE.WWW01189360001400000000010215ID10243620012340303UMI51440014ID.CO.QRIS.WWW0215ID10243620012340303UMI5204581253033605802ID5921Sate Klathak Pak Pong6015Kota Yogyakarta61055500062070703A016304DCA8";

const DYNAMIC_FIXED_FEE: &str = "00020101021226690017ID.CO.EXAMPLE.WWW01189360001400000000010215ID10243620012340303UMI51440014ID.CO.QRIS.WWW0215ID10243620012340303UMI5204581253033605404133755020256036665802ID5921Sate Klathak Pak Pong6015Kota Yogyakarta61055500062070703A0163043D16";

const DYNAMIC_NEW_CITY: &str = "00020101021226690017ID.CO.EXAMPLE.WWW01189360001400000000010215ID10243620012340303UMI51440014ID.CO.QRIS.WWW0215ID10243620012340303UMI5204581253033605405500005802ID5921Sate Klathak Pak Pong6012Kota Bandung61054011162070703A0163043D01";

const DYNAMIC_PERCENT_FEE: &str = "00020101021226690017ID.CO.EXAMPLE.WWW01189360001400000000010215ID10243620012340303UMI51440014ID.CO.QRIS.WWW0215ID10243620012340303UMI520458125303360540525000550203570155802ID5921Sate Klathak Pak Pong6015Kota Yogyakarta61055500062070703A0163040271";

const BANK_TRANSFER: &str = "00020101021140690017ID.CO.EXAMPLE.WWW01189360001400000000010215ID10243620012340303UMI5204581253033605802ID5913Toko Bangunan6007Jakarta6105101106304B835";

const WITH_UNKNOWN_TAG: &str = "00020101021126690017ID.CO.EXAMPLE.WWW01189360001400000000010215ID10243620012340303UMI27140010A00000067751440014ID.CO.QRIS.WWW0215ID10243620012340303UMI5204581253033605802ID5921Sate Klathak Pak Pong6015Kota Yogyakarta6105550006304E60A";

#[test]
fn test_static_to_dynamic_with_fixed_fee() {
    let qris = Qris::default();
    let parsed = qris.parse(STATIC).expect("static payload should decode");
    assert!(parsed.is_valid(), "{:?}", parsed.violations);

    let dynamic = qris
        .to_dynamic(&parsed.record, "", "", 1337, "FIXED", 666)
        .expect("conversion should succeed");

    assert_eq!(dynamic.category.content(), "12");
    assert_eq!(dynamic.payment_amount.raw(), "54041337");
    assert_eq!(dynamic.payment_fee_category.raw(), "550202");
    assert_eq!(dynamic.payment_fee.raw(), "5603666");
    assert_eq!(qris.to_payload_string(&dynamic), DYNAMIC_FIXED_FEE);
}

#[test]
fn test_dynamic_payload_parses_back_valid() {
    let qris = Qris::default();
    for payload in [DYNAMIC_FIXED_FEE, DYNAMIC_NEW_CITY, DYNAMIC_PERCENT_FEE] {
        let parsed = qris.parse(payload).unwrap();
        assert!(parsed.is_valid(), "{payload}: {:?}", parsed.violations);
        assert!(verify_payload_checksum(payload).unwrap().is_valid());
    }
}

#[test]
fn test_city_and_postal_override_without_fee() {
    let qris = Qris::default();
    let parsed = qris.parse(STATIC).unwrap();
    let dynamic = qris
        .to_dynamic(&parsed.record, "Kota Bandung", "40111", 50000, "", 0)
        .unwrap();
    assert_eq!(qris.to_payload_string(&dynamic), DYNAMIC_NEW_CITY);
}

#[test]
fn test_percent_fee_through_request() {
    let qris = Qris::default();
    let request = DynamicRequest::new(25000).with_fee(FeeCategory::Percent, 5);
    let converted = qris.convert(STATIC, &request).unwrap();
    assert_eq!(converted, DYNAMIC_PERCENT_FEE);
}

#[test]
fn test_untouched_fields_are_byte_identical() {
    let qris = Qris::default();
    let source = qris.parse(STATIC).unwrap().record;
    let dynamic = qris.to_dynamic(&source, "", "", 1, "PERCENT", 0).unwrap();

    assert_eq!(dynamic.version, source.version);
    assert_eq!(dynamic.acquirer, source.acquirer);
    assert_eq!(dynamic.switching, source.switching);
    assert_eq!(dynamic.merchant_name, source.merchant_name);
    assert_eq!(dynamic.merchant_city, source.merchant_city);
    assert_eq!(dynamic.additional_information, source.additional_information);
    assert!(!dynamic.payment_fee.is_set());
}

#[test]
fn test_trailing_checksum_matches_body() {
    let qris = Qris::default();
    let source = qris.parse(STATIC).unwrap().record;
    let payload = qris
        .to_payload_string(&qris.to_dynamic(&source, "", "", 99, "FIXED", 1).unwrap());
    let (body, crc) = payload.split_at(payload.len() - 4);
    assert!(body.ends_with("6304"));
    assert_eq!(crc, compute_checksum(body));
}

#[test]
fn test_bank_transfer_payload_is_valid() {
    let parsed = Qris::default().parse(BANK_TRANSFER).unwrap();
    assert!(parsed.is_valid(), "{:?}", parsed.violations);
    assert_eq!(parsed.record.acquirer.tag(), "40");
    assert!(!parsed.record.switching.is_set());
}

#[test]
fn test_unknown_tag_is_covered_by_checksum() {
    let qris = Qris::default();
    let parsed = qris.parse(WITH_UNKNOWN_TAG).unwrap();
    assert!(parsed.is_valid(), "{:?}", parsed.violations);

    // The record drops tag 27, so its own re-serialization no longer matches
    assert!(!qris.verify_checksum(&parsed.record).is_valid());
    assert!(!qris.to_payload_string(&parsed.record).contains("2714"));
}

#[test]
fn test_malformed_composite_reports_outer_tag() {
    let err = Qris::default().parse("00020151080014ID.C").unwrap_err();
    match &err {
        ProtocolError::CompositeParse { tag, content, .. } => {
            assert_eq!(tag, "51");
            assert_eq!(content, "0014ID.C");
        }
        other => panic!("expected composite error, got {other:?}"),
    }
    assert_eq!(
        err.fault(),
        Some(&TlvFault::LengthExceedsInput {
            declared: 14,
            available: 4
        })
    );
}

#[test]
fn test_truncated_payload_fails() {
    let truncated = &STATIC[..STATIC.len() - 2];
    let err = Qris::default().parse(truncated).unwrap_err();
    assert!(matches!(
        err.fault(),
        Some(TlvFault::LengthExceedsInput { declared: 4, available: 2 })
    ));
}

#[test]
fn test_convert_surfaces_decode_errors() {
    let err = Qris::default()
        .convert("00AB01", &DynamicRequest::new(1))
        .unwrap_err();
    assert!(matches!(err, ConvertError::Protocol(ProtocolError::MalformedTlv { .. })));
}

#[test]
fn test_parsed_payment_json_view() {
    let parsed = Qris::default().parse(BANK_TRANSFER).unwrap();
    let json = serde_json::to_value(&parsed).unwrap();
    assert_eq!(json["violations"], serde_json::json!([]));
    assert!(json["record"]["merchant_name"].is_object());
}

#[test]
fn test_record_from_json_is_rebuilt_by_reparsing() {
    let qris = Qris::default();
    let parsed = qris.parse(STATIC).unwrap();
    let json = serde_json::to_string(&parsed.record).unwrap();

    let restored: PaymentRecord = serde_json::from_str(&json).unwrap();
    assert_eq!(restored.acquirer.field, parsed.record.acquirer.field);
    assert!(!restored.acquirer.detail.site.is_set());
    assert_eq!(qris.to_payload_string(&restored), STATIC);

    let reparsed = qris.parse(&qris.to_payload_string(&restored)).unwrap();
    assert_eq!(reparsed.record, parsed.record);
}
