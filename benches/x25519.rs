use curve25519::{convert_public, convert_secret, derive, exchange, generate};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_x25519(c: &mut Criterion) {
    let secret = [0x42u8; 32];
    let peer = derive(&[0x24u8; 32]);
    let ed_public = generate(&secret);

    c.bench_function("x25519 derive", |b| b.iter(|| derive(black_box(&secret))));

    c.bench_function("x25519 exchange", |b| {
        b.iter(|| exchange(black_box(&secret), black_box(&peer)))
    });

    c.bench_function("convert_public", |b| {
        b.iter(|| convert_public(black_box(&ed_public)))
    });

    c.bench_function("convert_secret", |b| {
        b.iter(|| convert_secret(black_box(&secret)))
    });
}

criterion_group!(benches, bench_x25519);
criterion_main!(benches);
