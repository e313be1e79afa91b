//! End-to-end properties of the Curve25519 engine

use montcrypt::algorithms::curve25519::{self as ec, mul_x, AffinePoint, CurveParams, Scalar};
use montcrypt::prelude::{FieldElement, KeyPair};
use proptest::prelude::*;
use rand::rngs::OsRng;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

#[test]
fn test_ecdh_commutativity() {
    let curve = CurveParams::curve25519();
    let mut rng = OsRng;
    let alice = ec::generate_keypair(&curve, &mut rng).unwrap();
    let bob = ec::generate_keypair(&curve, &mut rng).unwrap();

    let ab = ec::diffie_hellman(&curve, &alice.secret, &bob.public.x()).unwrap();
    let ba = ec::diffie_hellman(&curve, &bob.secret, &alice.public.x()).unwrap();
    assert_eq!(ab, ba);

    // the full points agree as well
    let ab_point = ec::scalar_mul_point(&curve, &alice.secret, &bob.public).unwrap();
    let ba_point = ec::scalar_mul_point(&curve, &bob.secret, &alice.public).unwrap();
    assert_eq!(ab_point, ba_point);
    assert_eq!(ab_point.x(), ab);
}

#[test]
fn test_zero_scalar_gives_identity() {
    let curve = CurveParams::curve25519();
    let output = mul_x(&curve, &[0u8; 32], curve.base_x(), curve.ladder_bits()).unwrap();
    assert!(output.result.is_identity());
    assert_eq!(output.result.to_affine_x(), None);
    assert!(Scalar::new(&curve, [0u8; 32]).is_err());
}

#[test]
fn test_ladder_length_is_independent_of_weight() {
    let curve = CurveParams::curve25519();
    let mut low = [0u8; 32];
    low[0] = 1;
    let high = [0xffu8; 32];
    for bits in [1usize, 8, 253, 256] {
        let a = mul_x(&curve, &low, curve.base_x(), bits).unwrap();
        let b = mul_x(&curve, &high, curve.base_x(), bits).unwrap();
        assert_eq!(a.iterations, bits);
        assert_eq!(b.iterations, bits);
    }
}

#[test]
fn test_keypair_public_is_on_curve() {
    let curve = CurveParams::curve25519();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    for _ in 0..4 {
        let KeyPair { secret, public } = ec::generate_keypair(&curve, &mut rng).unwrap();
        assert!(!secret.is_zero());
        assert!(public.is_on_curve(&curve));
        assert!(!public.is_identity());
        assert_eq!(public.x(), ec::scalar_mul_base_x(&curve, &secret).unwrap());
    }
}

#[test]
fn test_identity_is_not_the_order_two_point() {
    let curve = CurveParams::curve25519();
    let torsion = AffinePoint::new(&curve, FieldElement::zero(), FieldElement::zero()).unwrap();
    assert!(!torsion.is_identity());
    assert_ne!(torsion, AffinePoint::identity());
    assert!(torsion.double(&curve).unwrap().is_identity());
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(8))]

    #[test]
    fn prop_homomorphism_matches_repeated_addition(k1 in 1u64..40, k2 in 1u64..40) {
        let curve = CurveParams::curve25519();
        let g = curve.base_point();
        let s1 = Scalar::from_u64(&curve, k1).unwrap();
        let s2 = Scalar::from_u64(&curve, k2).unwrap();

        let inner = ec::scalar_mul_point(&curve, &s2, &g).unwrap();
        let nested = ec::scalar_mul_point(&curve, &s1, &inner).unwrap();
        let product = ec::scalar_mul_point(&curve, &s1.mul_mod_n(&curve, &s2).unwrap(), &g).unwrap();
        prop_assert_eq!(nested, product);

        let mut naive = AffinePoint::identity();
        for _ in 0..(k1 * k2) {
            naive = naive.add(&curve, &g).unwrap();
        }
        prop_assert_eq!(product, naive);
    }
}
