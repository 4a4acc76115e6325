use curve25519::{generate, sign, verify};

use criterion::{Criterion, criterion_group, criterion_main};
use std::hint::black_box;

pub fn bench_ed25519(c: &mut Criterion) {
    let secret = [0x42u8; 32];
    let public = generate(&secret);
    let message = [0u8; 64];
    let signature = sign(&secret, &message);

    c.bench_function("ed25519 generate", |b| {
        b.iter(|| generate(black_box(&secret)))
    });

    c.bench_function("ed25519 sign 64 bytes", |b| {
        b.iter(|| sign(black_box(&secret), black_box(&message)))
    });

    c.bench_function("ed25519 verify 64 bytes", |b| {
        b.iter(|| verify(black_box(&public), black_box(&message), black_box(&signature)))
    });
}

criterion_group!(benches, bench_ed25519);
criterion_main!(benches);
