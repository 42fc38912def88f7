//! Chunked samplers must agree with the plain sampler over the same keys.

use vizij_curves_core::{
    build_cubic_sampler, build_sampler, ChunkedSampler, CubicKey, CurveError, CurveSampler,
    Degree, KeyframeSequence, Quat, Sampler, SamplerConfig, Vector2, MAX_BUCKETS,
};

fn approx(a: f32, b: f32, eps: f32) {
    assert!(
        (a - b).abs() <= eps,
        "approx failed: left={a} right={b} eps={eps}"
    );
}

fn sample_times(end: f32) -> Vec<f32> {
    let mut times: Vec<f32> = (0..=((end + 1.0) * 40.0) as usize)
        .map(|i| i as f32 * 0.025)
        .collect();
    // Bucket boundaries and just either side of them.
    for k in 0..=(end as usize + 1) {
        let b = k as f32;
        times.extend([b - 1e-3, b, b + 1e-3]);
    }
    times
}

fn five_key_cubic() -> KeyframeSequence<CubicKey<f32>> {
    KeyframeSequence::from_pairs([
        (0.0, CubicKey::new(0.0, 0.0, 1.5)),
        (1.0, CubicKey::new(0.5, 2.0, -0.5)),
        (2.0, CubicKey::new(-1.0, 1.0, 1.0)),
        (3.0, CubicKey::new(2.0, 3.0, -2.0)),
        (4.0, CubicKey::new(-1.5, 0.0, 0.0)),
    ])
}

fn irregular_scalar() -> KeyframeSequence<f32> {
    KeyframeSequence::from_pairs([
        (0.1, 1.0),
        (0.25, 2.0),
        (0.8, -3.0),
        (1.0, 4.0),
        (2.6, 5.0),
        (4.1, 6.0),
        (4.2, -7.0),
        (7.0, 8.0),
    ])
}

fn pair(
    config: &SamplerConfig,
    f: impl Fn(&SamplerConfig) -> CurveSampler<f32>,
) -> (CurveSampler<f32>, CurveSampler<f32>) {
    let chunked = f(config);
    let plain = f(&config.clone().with_chunking(false));
    assert!(chunked.is_chunked());
    assert!(!plain.is_chunked());
    (chunked, plain)
}

#[test]
fn five_key_cubic_agrees_around_first_boundary() {
    let (chunked, plain) = pair(&SamplerConfig::default(), |c| {
        build_cubic_sampler(five_key_cubic(), c).unwrap().unwrap()
    });
    assert_eq!(chunked.bucket_count(), Some(5));
    for t in [0.99, 1.0, 1.01] {
        approx(chunked.get_point(t), plain.get_point(t), 1e-5);
    }
}

#[test]
fn cubic_agrees_everywhere() {
    let (chunked, plain) = pair(&SamplerConfig::default(), |c| {
        build_cubic_sampler(five_key_cubic(), c).unwrap().unwrap()
    });
    for t in sample_times(4.0) {
        approx(chunked.get_point(t), plain.get_point(t), 1e-5);
    }
}

#[test]
fn step_and_linear_agree_on_irregular_keys() {
    for is_linear in [false, true] {
        let (chunked, plain) = pair(&SamplerConfig::default(), |c| {
            build_sampler(irregular_scalar(), is_linear, c)
                .unwrap()
                .unwrap()
        });
        assert_eq!(chunked.bucket_count(), Some(8));
        for t in sample_times(7.0) {
            approx(chunked.get_point(t), plain.get_point(t), 1e-5);
        }
    }
}

#[test]
fn leading_gap_buckets_clamp_to_first_key() {
    let keys = KeyframeSequence::from_pairs([
        (2.5, [1.0f32, 2.0]),
        (3.0, [3.0, 4.0]),
        (3.5, [5.0, 6.0]),
    ]);
    let chunked = build_sampler(keys.clone(), true, &SamplerConfig::default())
        .unwrap()
        .unwrap();
    let plain = build_sampler(keys, true, &SamplerConfig::default().with_chunking(false))
        .unwrap()
        .unwrap();
    assert_eq!(chunked.bucket_count(), Some(4));
    for t in [0.0, 0.5, 1.0, 1.99, 2.0, 2.5, 2.75, 3.0, 3.25, 3.5, 3.99, 4.0, 10.0] {
        let a: Vector2 = chunked.get_point(t);
        let b: Vector2 = plain.get_point(t);
        approx(a[0], b[0], 1e-6);
        approx(a[1], b[1], 1e-6);
    }
}

#[test]
fn quaternion_linear_agrees() {
    let keys = KeyframeSequence::from_pairs([
        (0.0, Quat::IDENTITY),
        (0.7, Quat::new(0.0, 0.0, 0.3826834, 0.9238795)),
        (1.3, Quat::new(0.0, 0.7071068, 0.0, 0.7071068)),
        (2.0, Quat::new(0.5, 0.5, 0.5, 0.5)),
    ]);
    let chunked = build_sampler(keys.clone(), true, &SamplerConfig::default())
        .unwrap()
        .unwrap();
    let plain = build_sampler(keys, true, &SamplerConfig::default().with_chunking(false))
        .unwrap()
        .unwrap();
    for t in sample_times(2.0) {
        let a = chunked.get_point(t);
        let b = plain.get_point(t);
        for i in 0..4 {
            approx(a.0[i], b.0[i], 1e-5);
        }
    }
}

#[test]
fn below_threshold_is_not_chunked() {
    let keys = KeyframeSequence::from_pairs([(0.0, 0.0f32), (5.0, 1.0)]);
    let s = build_sampler(keys, true, &SamplerConfig::default())
        .unwrap()
        .unwrap();
    assert!(!s.is_chunked());
    assert_eq!(s.bucket_count(), None);

    let keys = KeyframeSequence::from_pairs([(0.0, 0.0f32), (1.0, 1.0), (5.0, 2.0)]);
    let config = SamplerConfig::default().with_chunk_threshold(4);
    assert!(!build_sampler(keys, true, &config).unwrap().unwrap().is_chunked());
}

#[test]
fn curves_keyed_before_zero_stay_unchunked() {
    let keys = KeyframeSequence::from_pairs([(-1.0, 0.0f32), (0.5, 3.0), (2.0, 6.0), (3.0, 0.0)]);
    let s = build_sampler(keys, true, &SamplerConfig::default())
        .unwrap()
        .unwrap();
    assert!(!s.is_chunked());
    approx(s.get_point(-0.5), 1.0, 1e-6);
}

#[test]
fn long_spans_with_few_keys_stay_unchunked() {
    let keys = KeyframeSequence::from_pairs([(0.0, 0.0f32), (1.0, 1.0), (1e20, 2.0)]);
    let s = build_sampler(keys, true, &SamplerConfig::default())
        .unwrap()
        .unwrap();
    assert!(!s.is_chunked());
    assert_eq!(s.get_point(0.5), 0.5);
    assert_eq!(s.get_point(1e20), 2.0);
    assert_eq!(s.get_point(f32::INFINITY), 2.0);

    // 5001 buckets for 3 keys is over the default budget of 16 per key.
    let keys = KeyframeSequence::from_pairs([(0.0, 0.0f32), (1.0, 1.0), (5000.0, 2.0)]);
    let config = SamplerConfig::default();
    assert!(!build_sampler(keys.clone(), false, &config).unwrap().unwrap().is_chunked());
    let roomy = config.with_max_buckets_per_key(2000);
    let s = build_sampler(keys, false, &roomy).unwrap().unwrap();
    assert_eq!(s.bucket_count(), Some(5001));
    assert_eq!(s.get_point(4999.5), 1.0);
}

#[test]
fn chunked_constructor_rejects_unbounded_spans() {
    let keys = KeyframeSequence::from_pairs([(0.0, 0.0f32), (1.0, 1.0), (1e20, 2.0)]);
    let err = ChunkedSampler::from_keys(&keys, Degree::Step, |bucket| {
        CurveSampler::unchunked(bucket, Degree::Step)
    })
    .unwrap_err();
    assert!(matches!(
        err,
        CurveError::SpanTooLong {
            max_buckets: MAX_BUCKETS,
            ..
        }
    ));
    assert_eq!(err.category(), "validation");
}

#[test]
fn chunked_constructor_checks_value_lengths() {
    let keys = KeyframeSequence::from_pairs([
        (0.0, vec![0.0f32, 1.0]),
        (1.0, vec![1.0]),
        (2.0, vec![2.0, 3.0]),
    ]);
    let err = ChunkedSampler::from_keys(&keys, Degree::Linear, |bucket| {
        CurveSampler::unchunked(bucket, Degree::Linear)
    })
    .unwrap_err();
    assert_eq!(
        err,
        CurveError::LengthMismatch {
            expected: 2,
            actual: 1
        }
    );
}

#[test]
fn custom_chunk_factory_is_used_per_bucket() {
    let keys = KeyframeSequence::from_pairs([(0.0, 0.0f32), (1.0, 1.0), (2.0, 4.0), (3.0, 9.0)]);
    let mut built = Vec::new();
    let chunked = ChunkedSampler::from_keys(&keys, Degree::Step, |bucket| {
        built.push(bucket.len());
        CurveSampler::unchunked(bucket, Degree::Step)
    })
    .unwrap();
    assert_eq!(built, vec![2, 2, 2, 1]);
    assert_eq!(chunked.bucket_count(), 4);
    assert_eq!(chunked.key_count(), 4);
    assert_eq!(chunked.get_point(2.5), 4.0);
    assert_eq!(chunked.get_point(-3.0), 0.0);
    assert_eq!(chunked.get_point(99.0), 9.0);
}

#[test]
fn chunk_factory_degree_must_match() {
    let keys = KeyframeSequence::from_pairs([(0.0, 0.0f32), (1.0, 1.0), (2.0, 4.0)]);
    let err = ChunkedSampler::from_keys(&keys, Degree::Linear, |bucket| {
        CurveSampler::unchunked(bucket, Degree::Step)
    })
    .unwrap_err();
    assert_eq!(
        err,
        CurveError::BucketDegreeMismatch {
            expected: Degree::Linear,
            actual: Degree::Step
        }
    );
}

#[test]
fn chunk_factory_errors_propagate() {
    let keys = KeyframeSequence::from_pairs([(0.0, 0.0f32), (1.0, 1.0), (2.0, 4.0)]);
    let err = ChunkedSampler::from_keys(&keys, Degree::Cubic, |bucket| {
        CurveSampler::unchunked(bucket, Degree::Cubic)
    })
    .unwrap_err();
    assert_eq!(err, CurveError::MissingTangents);

    let empty = KeyframeSequence::<f32>::default();
    let err = ChunkedSampler::from_keys(&empty, Degree::Step, |bucket| {
        CurveSampler::unchunked(bucket, Degree::Step)
    })
    .unwrap_err();
    assert_eq!(err, CurveError::EmptySequence);
}
