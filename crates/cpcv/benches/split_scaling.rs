use chrono::{Duration, NaiveDateTime};
use cpcv::combinatorial::{CombinatorialPurgedKFold, CpcvConfig};
use cpcv::purged_kfold::PurgedKFold;
use cpcv::timeline::Timeline;
use criterion::{criterion_group, criterion_main, Criterion};

fn fixture_timeline(n: usize) -> Timeline {
    let start = NaiveDateTime::parse_from_str("2024-01-02 09:30:00", "%Y-%m-%d %H:%M:%S")
        .expect("valid start timestamp");
    let windows: Vec<_> = (0..n)
        .map(|i| {
            let t0 = start + Duration::minutes(i as i64);
            // 5-minute label horizon keeps the purge non-trivial.
            (t0, t0 + Duration::minutes(5))
        })
        .collect();
    Timeline::from_windows(windows).expect("valid fixture timeline")
}

fn fixture_features(n: usize) -> Vec<Vec<f64>> {
    (0..n).map(|i| vec![(i as f64 / 7.0).sin()]).collect()
}

fn bench_purged_kfold_drain(c: &mut Criterion) {
    let timeline = fixture_timeline(2_000);
    let x = fixture_features(2_000);
    let pkf = PurgedKFold::new(timeline, 10, 0.01).expect("valid parameters");

    c.bench_function("purged_kfold/drain_2000x10", |b| {
        b.iter(|| {
            let drained = pkf.split(&x, None, None).expect("valid feature table").count();
            assert_eq!(drained, 10);
        });
    });
}

fn bench_combinatorial_drain(c: &mut Criterion) {
    let timeline = fixture_timeline(1_200);
    let x = fixture_features(1_200);
    let config = CpcvConfig { n_folds: 8, n_test_folds: 2, pct_embargo: 0.01 };
    let mut splitter = CombinatorialPurgedKFold::new(timeline, config).expect("valid parameters");

    c.bench_function("combinatorial/drain_1200x8c2", |b| {
        b.iter(|| {
            let drained = splitter.split(&x, None, None).expect("valid feature table").count();
            assert_eq!(drained, 28);
        });
    });
}

criterion_group!(benches, bench_purged_kfold_drain, bench_combinatorial_drain);
criterion_main!(benches);
