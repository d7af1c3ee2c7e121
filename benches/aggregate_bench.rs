//! Aggregation sweep benchmark at realistic acquisition rates
//!
//! 20 kHz trigger against a 200 kS/s, 4-channel measurement over one second:
//! ~20k intervals and 200k samples per run, matching the data sizes the
//! original acquisition produced.

use criterion::{black_box, criterion_group, criterion_main, Criterion};
use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use trigsync::synth::{generate_measurement, generate_trigger, MeasurementMode, TriggerProfile};
use trigsync::{aggregate_intervals, detect_rising_edges};

fn bench_aggregate(c: &mut Criterion) {
    let mut rng = ChaCha8Rng::seed_from_u64(0xfeed);
    let trigger = generate_trigger(
        TriggerProfile::Uniform {
            frequency: 20_000.0,
        },
        1.0,
        &mut rng,
    );
    let edges = detect_rising_edges(&trigger).unwrap();
    let measurement =
        generate_measurement(&edges, 200_000.0, 4, MeasurementMode::Noise, &mut rng);

    let mut group = c.benchmark_group("aggregate");
    group.sample_size(20);
    group.bench_function("sweep_200k_samples_20k_intervals", |b| {
        b.iter(|| aggregate_intervals(black_box(&measurement), black_box(&edges)).unwrap())
    });
    group.finish();
}

criterion_group!(benches, bench_aggregate);
criterion_main!(benches);
