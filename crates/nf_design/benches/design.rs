use criterion::Criterion;
use criterion::criterion_group;
use criterion::criterion_main;

use rand::SeedableRng;
use rand::rngs::StdRng;

use nf_design::PairingPolicy;
use nf_design::design_from_notation;
use nf_structure::analyze;
use nf_structure::validate;

pub fn structure_design(c: &mut Criterion) {
    let mut group = c.benchmark_group("Design");

    // 120 stem-loops, 1200 positions.
    let raw = "((((....))))".repeat(120);
    let policy = PairingPolicy::default();

    group.bench_function("Validate and analyze a long notation.", |b| {
        b.iter(|| {
            let pairs = validate(&raw).unwrap();
            let _ = analyze(&raw, &pairs);
        });
    });

    group.bench_function("Design a sequence for a long notation.", |b| {
        let mut rng = StdRng::seed_from_u64(42);
        b.iter(|| {
            let _ = design_from_notation(&raw, None, &policy, &mut rng).unwrap();
        });
    });
}

criterion_group!(benches, structure_design);
criterion_main!(benches);
