//! Tests for ECDH KEM Curve25519

use super::*;
use montcrypt_api::error::ErrorKind;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_ecdh_curve25519_keypair_generation() {
    let mut rng = OsRng;
    let (pk, sk) = EcdhCurve25519::keypair(&mut rng).expect("Keypair generation failed");
    assert_eq!(pk.to_bytes().len(), ec::CURVE25519_FIELD_ELEMENT_SIZE);
    assert_eq!(sk.to_bytes_zeroizing().len(), ec::CURVE25519_SCALAR_SIZE);

    // the public key is x(d·G)
    let curve = ec::CurveParams::curve25519();
    let scalar = ec::Scalar::deserialize(&curve, &sk.to_bytes_zeroizing()).unwrap();
    assert_eq!(
        ec::scalar_mul_base_x(&curve, &scalar).unwrap().to_bytes().to_vec(),
        pk.to_bytes()
    );
}

#[test]
fn test_ecdh_curve25519_kem_roundtrip() {
    let mut rng = OsRng;
    let (public_key, secret_key) = EcdhCurve25519::keypair(&mut rng).unwrap();

    let (ciphertext, shared_secret_sender) =
        EcdhCurve25519::encapsulate(&mut rng, &public_key).expect("Encapsulation failed");
    assert_eq!(ciphertext.to_bytes().len(), ec::CURVE25519_FIELD_ELEMENT_SIZE);
    assert_eq!(
        shared_secret_sender.to_bytes_zeroizing().len(),
        ECDH_KEM_SHARED_SECRET_SIZE
    );

    let shared_secret_recipient =
        EcdhCurve25519::decapsulate(&secret_key, &ciphertext).expect("Decapsulation failed");
    assert_eq!(shared_secret_sender, shared_secret_recipient);
}

#[test]
fn test_ecdh_curve25519_deterministic_with_seeded_rng() {
    let (pk1, _) = EcdhCurve25519::keypair(&mut ChaCha20Rng::seed_from_u64(11)).unwrap();
    let (pk2, _) = EcdhCurve25519::keypair(&mut ChaCha20Rng::seed_from_u64(11)).unwrap();
    assert_eq!(pk1, pk2);
}

#[test]
fn test_ecdh_curve25519_wrong_key_gives_different_secret() {
    let mut rng = ChaCha20Rng::seed_from_u64(5);
    let (pk, _) = EcdhCurve25519::keypair(&mut rng).unwrap();
    let (_, other_sk) = EcdhCurve25519::keypair(&mut rng).unwrap();

    let (ct, ss) = EcdhCurve25519::encapsulate(&mut rng, &pk).unwrap();
    let wrong = EcdhCurve25519::decapsulate(&other_sk, &ct).unwrap();
    assert_ne!(ss, wrong);
}

#[test]
fn test_ecdh_curve25519_serialization_roundtrip() {
    let mut rng = ChaCha20Rng::seed_from_u64(99);
    let (pk, sk) = EcdhCurve25519::keypair(&mut rng).unwrap();

    let pk2 = EcdhCurve25519PublicKey::from_bytes(&pk.to_bytes()).unwrap();
    assert_eq!(pk, pk2);

    let sk2 = EcdhCurve25519SecretKey::from_bytes(&sk.to_bytes_zeroizing()).unwrap();
    let (ct, ss) = EcdhCurve25519::encapsulate(&mut rng, &pk2).unwrap();
    let ct2 = EcdhCurve25519Ciphertext::from_bytes(&ct.to_bytes()).unwrap();
    assert_eq!(EcdhCurve25519::decapsulate(&sk2, &ct2).unwrap(), ss);
}

#[test]
fn test_ecdh_curve25519_rejects_invalid_public_keys() {
    // wrong length
    let err = EcdhCurve25519PublicKey::from_bytes(&[9u8; 31]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);

    // x = 2 is not on the curve
    let mut two = [0u8; 32];
    two[0] = 2;
    let err = EcdhCurve25519PublicKey::from_bytes(&two).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidPoint);

    // order-2 point
    let err = EcdhCurve25519PublicKey::from_bytes(&[0u8; 32]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidKey);

    // non-canonical encoding of x ≥ p
    assert!(EcdhCurve25519PublicKey::from_bytes(&[0xff; 32]).is_err());
}

#[test]
fn test_ecdh_curve25519_encapsulate_rejects_tampered_key() {
    let mut rng = OsRng;
    let mut two = [0u8; 32];
    two[0] = 2;
    let bad = EcdhCurve25519PublicKey(two);
    assert!(EcdhCurve25519::encapsulate(&mut rng, &bad).is_err());
}

#[test]
fn test_ecdh_curve25519_rejects_invalid_secret_keys() {
    assert!(EcdhCurve25519SecretKey::from_bytes(&[0u8; 32]).is_err());
    assert!(EcdhCurve25519SecretKey::from_bytes(&[0xff; 32]).is_err());
    assert!(EcdhCurve25519SecretKey::from_bytes(&[1u8; 16]).is_err());

    let Err(err) = EcdhCurve25519SecretKey::from_bytes(&[0u8; 32]) else {
        panic!("zero secret key accepted");
    };
    assert_eq!(err.kind(), ErrorKind::InvalidParameter);
    assert_eq!(err.context(), "ECDH-Curve25519 secret key");

    let Err(err) = EcdhCurve25519SecretKey::from_bytes(&[1u8; 16]) else {
        panic!("short secret key accepted");
    };
    assert_eq!(err.kind(), ErrorKind::InvalidLength);
    assert_eq!(err.context(), "ECDH-Curve25519 secret key");
}

#[test]
fn test_shared_secret_length_is_checked() {
    assert!(EcdhCurve25519SharedSecret::from_bytes(&[0u8; 32]).is_ok());
    let err = EcdhCurve25519SharedSecret::from_bytes(&[0u8; 16]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::InvalidLength);
}

// Recipient d = 0x0f1f1e…0201 (little-endian 01 02 … 1f 0f), sender e = 0x123456789abcdef0.
// Expected values computed independently with the RFC 7748 ladder and RFC 5869 HKDF.
const KAT_SECRET: &str = "0102030405060708090a0b0c0d0e0f101112131415161718191a1b1c1d1e1f0f";
const KAT_PUBLIC: &str = "64765c822de3fe9028fb117654b439a1f35f07d0a7b05520afee8b225acd3e47";
const KAT_EPHEMERAL: &str = "0e3d913100dbf478f6331deda05950483356e8ceef4f0dde109585be438b1751";
const KAT_SHARED: &str = "b8f5a1102bce90ec92e1af96124e0afea5f068a9cac24a2cd411ccb279c8c142";

#[test]
fn test_ecdh_curve25519_known_answer() {
    let curve = ec::CurveParams::curve25519();
    let sk = EcdhCurve25519SecretKey::from_bytes(&hex::decode(KAT_SECRET).unwrap()).unwrap();

    let d = ec::Scalar::deserialize(&curve, &hex::decode(KAT_SECRET).unwrap()).unwrap();
    let public = ec::scalar_mul_base_x(&curve, &d).unwrap();
    assert_eq!(hex::encode(public.to_bytes()), KAT_PUBLIC);

    let e = ec::Scalar::from_u64(&curve, 0x1234_5678_9abc_def0).unwrap();
    let ephemeral = ec::scalar_mul_base_x(&curve, &e).unwrap();
    assert_eq!(hex::encode(ephemeral.to_bytes()), KAT_EPHEMERAL);

    let ct = EcdhCurve25519Ciphertext::from_bytes(&hex::decode(KAT_EPHEMERAL).unwrap()).unwrap();
    let shared = EcdhCurve25519::decapsulate(&sk, &ct).unwrap();
    assert_eq!(hex::encode(shared.to_bytes_zeroizing().as_slice()), KAT_SHARED);
}
