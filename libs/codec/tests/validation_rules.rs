//! Validation rules applied to decoded payloads
//!
//! Each case removes or alters one part of a known-good payload and checks
//! the exact violation list, including the checksum mismatch that follows
//! any edit of the payload text.

use codec::{Qris, RecordValidator, Registry};
use pretty_assertions::assert_eq;

const STATIC: &str = "00020101021126690017ID.CO.EXAMPLE.WWW01189360001400000000010215ID10243620012340303UMI51440014ID.CO.QRIS.WWW0215ID10243620012340303UMI5204581253033605802ID5921Sate Klathak Pak Pong6015Kota Yogyakarta61055500062070703A016304DCA8";

fn violations_of(payload: &str) -> Vec<String> {
    Qris::default()
        .parse(payload)
        .expect("payload should decode")
        .violations
}

#[test]
fn test_missing_postal_code() {
    let payload = STATIC.replace("610555000", "");
    assert_eq!(
        violations_of(&payload),
        vec!["merchant postal code tag is missing", "crc code mismatch"]
    );
}

#[test]
fn test_undefined_category_content() {
    let payload = STATIC.replace("010211", "010213");
    assert_eq!(
        violations_of(&payload),
        vec!["category content undefined", "crc code mismatch"]
    );
}

#[test]
fn test_missing_switching_for_plain_acquirer() {
    let payload = STATIC.replace("51440014ID.CO.QRIS.WWW0215ID10243620012340303UMI", "");
    assert_eq!(
        violations_of(&payload),
        vec!["switching tag is missing", "crc code mismatch"]
    );
}

#[test]
fn test_incomplete_acquirer_detail() {
    // Acquirer without terminal id and category
    let payload = STATIC.replace(
        "26690017ID.CO.EXAMPLE.WWW01189360001400000000010215ID10243620012340303UMI",
        "26430017ID.CO.EXAMPLE.WWW0118936000140000000001",
    );
    assert_eq!(
        violations_of(&payload),
        vec![
            "acquirer terminal id tag is missing",
            "acquirer category tag is missing",
            "crc code mismatch",
        ]
    );
}

#[test]
fn test_only_version_and_category() {
    assert_eq!(
        violations_of("000201010212"),
        vec![
            "merchant category code tag is missing",
            "currency code tag is missing",
            "country code tag is missing",
            "merchant name tag is missing",
            "merchant city tag is missing",
            "merchant postal code tag is missing",
            "crc code tag is missing",
            "acquirer tag is missing",
        ]
    );
}

#[test]
fn test_empty_payload_decodes_to_empty_record() {
    let parsed = Qris::default().parse("").unwrap();
    assert_eq!(parsed.violations.len(), 11);
    assert_eq!(parsed.violations[9], "category content undefined");
}

#[test]
fn test_validate_matches_parse_without_checksum() {
    let payload = STATIC.replace("5802ID", "");
    let qris = Qris::default();
    let parsed = qris.parse(&payload).unwrap();
    let registry = Registry::default();

    assert_eq!(
        RecordValidator::new(&registry).validate(&parsed.record),
        vec!["country code tag is missing"]
    );
    assert_eq!(qris.validate(&parsed.record), vec!["country code tag is missing"]);
}
