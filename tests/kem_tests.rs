//! Integration tests for the ECDH key exchange

use montcrypt::prelude::*;
use rand::rngs::OsRng;

#[test]
fn test_ecdh_curve25519_kem() {
    let mut rng = OsRng;

    // Generate keypair
    let (public_key, secret_key) = EcdhCurve25519::keypair(&mut rng).unwrap();

    // Encapsulate
    let (ciphertext, shared_secret_sender) =
        EcdhCurve25519::encapsulate(&mut rng, &public_key).unwrap();

    // Decapsulate
    let shared_secret_recipient = EcdhCurve25519::decapsulate(&secret_key, &ciphertext).unwrap();

    // Verify shared secrets match
    assert_eq!(
        shared_secret_sender.as_ref(),
        shared_secret_recipient.as_ref()
    );
}

#[test]
fn test_ecdh_curve25519_serialized_keys() {
    let mut rng = OsRng;
    let (public_key, secret_key) = EcdhCurve25519::keypair(&mut rng).unwrap();

    let pk_bytes = public_key.to_bytes();
    let sk_bytes = secret_key.to_bytes_zeroizing();
    let public_key = <EcdhCurve25519 as Kem>::PublicKey::from_bytes(&pk_bytes).unwrap();
    let secret_key = <EcdhCurve25519 as Kem>::SecretKey::from_bytes(&sk_bytes).unwrap();

    let (ciphertext, sent) = EcdhCurve25519::encapsulate(&mut rng, &public_key).unwrap();
    let received = EcdhCurve25519::decapsulate(&secret_key, &ciphertext).unwrap();
    assert_eq!(sent.as_ref(), received.as_ref());
}
