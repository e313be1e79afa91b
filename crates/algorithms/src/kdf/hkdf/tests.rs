use super::*;

// RFC 5869, test case 1
#[test]
fn test_hkdf_sha256_rfc5869_case1() {
    let ikm = [0x0bu8; 22];
    let salt = hex::decode("000102030405060708090a0b0c").unwrap();
    let info = hex::decode("f0f1f2f3f4f5f6f7f8f9").unwrap();
    let expected = hex::decode(
        "3cb25f25faacd57a90434f64d0362f2a2d2d0a90cf1a5a4c5db02d56ecc4c5bf34007208d5b887185865",
    )
    .unwrap();

    let okm = HkdfSha256::new()
        .derive_key(&ikm, Some(&salt), Some(&info), 42)
        .unwrap();
    assert_eq!(okm.as_slice(), expected.as_slice());
}

#[test]
fn test_derive_array_matches_derive_key() {
    let kdf = HkdfSha256::new();
    let a = kdf.derive_key(b"ikm", Some(b"salt"), Some(b"info"), 64).unwrap();
    let b: Zeroizing<[u8; 64]> = kdf.derive_array(b"ikm", Some(b"salt"), Some(b"info")).unwrap();
    assert_eq!(a.as_slice(), b.as_slice());
}

#[test]
fn test_output_length_bounds() {
    let kdf = HkdfSha256::new();
    assert!(kdf.derive_key(b"ikm", None, None, 0).is_err());
    assert!(kdf.derive_key(b"ikm", None, None, 255 * 32).is_ok());
    assert!(matches!(
        kdf.derive_key(b"ikm", None, None, 255 * 32 + 1),
        Err(Error::Length { .. })
    ));
}
