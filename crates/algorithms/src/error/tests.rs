use super::*;
use montcrypt_api::error::ErrorKind;

#[test]
fn test_validate_helpers() {
    assert!(validate::parameter(true, "x", "never").is_ok());
    assert_eq!(
        validate::parameter(false, "window", "must be positive"),
        Err(Error::param("window", "must be positive"))
    );
    assert!(validate::length("scalar", 32, 32).is_ok());
    assert!(matches!(
        validate::length("scalar", 31, 32),
        Err(Error::Length { expected: 32, actual: 31, .. })
    ));
    assert!(validate::max_length("block", 31, 31).is_ok());
    assert!(validate::max_length("block", 32, 31).is_err());
    assert!(matches!(
        validate::authentication(false, "HMAC-SHA256"),
        Err(Error::Authentication { algorithm: "HMAC-SHA256" })
    ));
}

#[test]
fn test_taxonomy_maps_to_api_kinds() {
    let cases = [
        (Error::NoInverse { context: "invert" }, ErrorKind::NoInverse),
        (Error::EncodingExhausted { attempts: 100 }, ErrorKind::EncodingExhausted),
        (Error::EntropyUnavailable { context: "keygen" }, ErrorKind::EntropyUnavailable),
        (Error::InvalidPoint { context: "lift_x" }, ErrorKind::InvalidPoint),
        (Error::DecryptionMismatch { context: "tag" }, ErrorKind::DecryptionMismatch),
        (Error::Authentication { algorithm: "HMAC" }, ErrorKind::DecryptionMismatch),
        (Error::param("k", "zero"), ErrorKind::InvalidParameter),
    ];
    for (err, kind) in cases {
        assert_eq!(CoreError::from(err).kind(), kind);
    }
}

#[test]
fn test_display() {
    assert_eq!(
        Error::EncodingExhausted { attempts: 7 }.to_string(),
        "No curve point found after 7 encoding attempts"
    );
    assert_eq!(
        Error::param("FieldElement", "value ≥ modulus").to_string(),
        "Invalid parameter 'FieldElement': value ≥ modulus"
    );
}
