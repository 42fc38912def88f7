use criterion::{black_box, criterion_group, criterion_main, BenchmarkId, Criterion};
use vizij_curves_core::{
    build_cubic_sampler, build_sampler, CubicKey, Keyframe, KeyframeSequence, Sampler,
    SamplerConfig,
};

/// Ten keys per second over `seconds` seconds.
fn dense_keys(seconds: usize) -> KeyframeSequence<f32> {
    (0..seconds * 10)
        .map(|i| {
            let t = i as f32 * 0.1;
            Keyframe::new(t, t.sin())
        })
        .collect()
}

fn dense_cubic_keys(seconds: usize) -> KeyframeSequence<CubicKey<f32>> {
    (0..seconds * 10)
        .map(|i| {
            let t = i as f32 * 0.1;
            Keyframe::new(t, CubicKey::new(t.cos(), t.sin(), t.cos()))
        })
        .collect()
}

fn bench_linear(c: &mut Criterion) {
    let mut group = c.benchmark_group("linear_get_point");
    for seconds in [10usize, 60, 600] {
        let keys = dense_keys(seconds);
        let end = seconds as f32;
        for (label, config) in [
            ("chunked", SamplerConfig::default()),
            ("flat", SamplerConfig::default().with_chunking(false)),
        ] {
            let sampler = build_sampler(keys.clone(), true, &config)
                .unwrap()
                .unwrap();
            group.bench_with_input(BenchmarkId::new(label, seconds), &sampler, |b, s| {
                let mut t = 0.0f32;
                b.iter(|| {
                    t = (t + 0.016_7) % end;
                    black_box(s.get_point(black_box(t)))
                })
            });
        }
    }
    group.finish();
}

fn bench_cubic(c: &mut Criterion) {
    let mut group = c.benchmark_group("cubic_get_point");
    let seconds = 120usize;
    let keys = dense_cubic_keys(seconds);
    for (label, config) in [
        ("chunked", SamplerConfig::default()),
        ("flat", SamplerConfig::default().with_chunking(false)),
    ] {
        let sampler = build_cubic_sampler(keys.clone(), &config).unwrap().unwrap();
        group.bench_function(label, |b| {
            let mut t = 0.0f32;
            b.iter(|| {
                t = (t + 0.016_7) % seconds as f32;
                black_box(sampler.get_point(black_box(t)))
            })
        });
    }
    group.finish();
}

criterion_group!(benches, bench_linear, bench_cubic);
criterion_main!(benches);
