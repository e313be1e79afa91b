//! Benchmarks for Curve25519 field arithmetic, the Montgomery ladder and key generation.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use montcrypt_algorithms::curve25519::{
    self, mul_x, AffinePoint, CurveParams, FieldElement, Scalar,
};
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

/// Ladder lengths to benchmark; the run time must not depend on the scalar
const LADDER_BITS: &[usize] = &[64, 128, 253, 256];

fn bench_field(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve25519_field");
    let x = FieldElement::from_u32(9);
    let y = FieldElement::from_u32(121666).negate();

    group.bench_function("mul", |b| b.iter(|| black_box(x.mul(black_box(&y)))));
    group.bench_function("invert", |b| b.iter(|| black_box(y.invert().unwrap())));
    group.bench_function("sqrt", |b| {
        let sq = y.square();
        b.iter(|| black_box(sq.sqrt()))
    });

    group.finish();
}

fn bench_ladder(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve25519_ladder");
    let curve = CurveParams::curve25519();
    let base_x = *curve.base_x();

    for bits in LADDER_BITS {
        group.bench_with_input(BenchmarkId::new("low_weight", bits), bits, |b, &bits| {
            let mut k = [0u8; 32];
            k[0] = 1;
            b.iter(|| black_box(mul_x(&curve, &k, &base_x, bits).unwrap()));
        });
        group.bench_with_input(BenchmarkId::new("high_weight", bits), bits, |b, &bits| {
            let k = [0xffu8; 32];
            b.iter(|| black_box(mul_x(&curve, &k, &base_x, bits).unwrap()));
        });
    }

    group.finish();
}

fn bench_keys(c: &mut Criterion) {
    let mut group = c.benchmark_group("curve25519_keys");
    let curve = CurveParams::curve25519();
    let mut rng = ChaCha20Rng::from_seed([42u8; 32]);

    group.bench_function("generate_keypair", |b| {
        b.iter(|| black_box(curve25519::generate_keypair(&curve, &mut rng).unwrap()));
    });

    let alice = curve25519::generate_keypair(&curve, &mut rng).unwrap();
    let bob = curve25519::generate_keypair(&curve, &mut rng).unwrap();
    group.bench_function("diffie_hellman", |b| {
        b.iter(|| {
            black_box(curve25519::diffie_hellman(&curve, &alice.secret, &bob.public.x()).unwrap())
        });
    });

    let k = Scalar::from_u64(&curve, 0x1234_5678_9abc_def0).unwrap();
    let g: AffinePoint = curve25519::base_point(&curve);
    group.bench_function("scalar_mul_point", |b| {
        b.iter(|| black_box(curve25519::scalar_mul_point(&curve, &k, &g).unwrap()));
    });

    group.finish();
}

criterion_group!(benches, bench_field, bench_ladder, bench_keys);
criterion_main!(benches);
