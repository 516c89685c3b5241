//! Benchmarks for the digest primitive and the stretch step

use criterion::{Criterion, black_box, criterion_group, criterion_main};
use credhash_core::{Case, STRETCH_ITERATIONS, digest, stretch};

fn bench_digest(c: &mut Criterion) {
    let input = "benchmark input data for the legacy digest primitive";

    c.bench_function("digest_single", |b| {
        b.iter(|| digest(black_box(input), true, Case::Upper))
    });
}

fn bench_stretch(c: &mut Criterion) {
    c.bench_function("stretch_seven_rounds", |b| {
        b.iter(|| {
            stretch(
                black_box("pass1234"),
                black_box("5unf15hdemoD4740N"),
                STRETCH_ITERATIONS,
            )
        })
    });
}

criterion_group!(benches, bench_digest, bench_stretch);
criterion_main!(benches);
