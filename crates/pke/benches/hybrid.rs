//! Benchmarks for the message codec and both hybrid cipher variants.

use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion, Throughput};
use montcrypt_algorithms::curve25519::{self, CurveParams};
use montcrypt_api::Pke;
use montcrypt_pke::codec::{self, CodecConfig};
use montcrypt_pke::hybrid::{additive, xor};
use montcrypt_pke::XorHybrid;
use rand::SeedableRng;
use rand_chacha::ChaCha20Rng;

const MESSAGE_SIZES: &[usize] = &[2, 31, 256];

fn message(len: usize) -> Vec<u8> {
    (0..len).map(|i| (i % 251) as u8 + 1).collect()
}

fn bench_codec(c: &mut Criterion) {
    let mut group = c.benchmark_group("codec");
    let curve = CurveParams::curve25519();
    let config = CodecConfig::default();

    for &len in MESSAGE_SIZES {
        let msg = message(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::new("encode_message", len), &msg, |b, msg| {
            b.iter(|| black_box(codec::encode_message(&curve, &config, msg).unwrap()));
        });
    }

    group.finish();
}

fn bench_variants(c: &mut Criterion) {
    let mut group = c.benchmark_group("hybrid_block");
    let curve = CurveParams::curve25519();
    let mut rng = ChaCha20Rng::seed_from_u64(7);
    let keys = curve25519::generate_keypair(&curve, &mut rng).unwrap();
    let point = codec::encode(&curve, &CodecConfig::default(), b"HI").unwrap();

    let xor_ct = xor::encrypt(&curve, &keys.public.x(), &point.x(), b"", &mut rng).unwrap();
    group.bench_function("xor_encrypt", |b| {
        b.iter(|| black_box(xor::encrypt(&curve, &keys.public.x(), &point.x(), b"", &mut rng).unwrap()));
    });
    group.bench_function("xor_decrypt", |b| {
        b.iter(|| black_box(xor::decrypt(&curve, &keys.secret, &xor_ct, b"").unwrap()));
    });

    let additive_ct = additive::encrypt(&curve, &keys.public, &point, &mut rng).unwrap();
    group.bench_function("additive_encrypt", |b| {
        b.iter(|| black_box(additive::encrypt(&curve, &keys.public, &point, &mut rng).unwrap()));
    });
    group.bench_function("additive_decrypt", |b| {
        b.iter(|| black_box(additive::decrypt(&curve, &keys.secret, &additive_ct).unwrap()));
    });

    group.finish();
}

fn bench_roundtrip(c: &mut Criterion) {
    let mut group = c.benchmark_group("xor_hybrid_roundtrip");
    let mut rng = ChaCha20Rng::seed_from_u64(8);
    let (pk, sk) = XorHybrid::keypair(&mut rng).unwrap();

    for &len in MESSAGE_SIZES {
        let msg = message(len);
        group.throughput(Throughput::Bytes(len as u64));
        group.bench_with_input(BenchmarkId::from_parameter(len), &msg, |b, msg| {
            b.iter(|| {
                let ct = XorHybrid::encrypt(&pk, msg, None, &mut rng).unwrap();
                black_box(XorHybrid::decrypt(&sk, &ct, None).unwrap())
            });
        });
    }

    group.finish();
}

criterion_group!(benches, bench_codec, bench_variants, bench_roundtrip);
criterion_main!(benches);
