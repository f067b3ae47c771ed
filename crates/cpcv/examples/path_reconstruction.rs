use chrono::{Duration, NaiveDateTime};
use cpcv::combinatorial::{CombinatorialPurgedKFold, CpcvConfig};
use cpcv::timeline::Timeline;

fn main() {
    let start = NaiveDateTime::parse_from_str("2024-01-02 09:30:00", "%Y-%m-%d %H:%M:%S")
        .expect("valid start timestamp");
    let windows: Vec<_> = (0..60)
        .map(|i| {
            let t0 = start + Duration::minutes(i * 10);
            (t0, t0 + Duration::minutes(25))
        })
        .collect();
    let timeline = Timeline::from_windows(windows).expect("valid timeline");
    let x: Vec<Vec<f64>> = (0..60).map(|i| vec![i as f64]).collect();

    let config = CpcvConfig { n_folds: 6, n_test_folds: 2, pct_embargo: 0.02 };
    let mut splitter = CombinatorialPurgedKFold::new(timeline, config).expect("valid parameters");
    println!(
        "{} splits -> {} backtest paths",
        splitter.n_splits(),
        splitter.n_backtest_paths()
    );

    for (split_id, (train, test)) in
        splitter.split(&x, None, None).expect("valid feature table").enumerate()
    {
        println!("split {split_id:2}: {:3} train / {:2} test samples", train.len(), test.len());
    }

    assert!(splitter.paths_populated());
    for (path_id, path) in splitter.backtest_paths().iter().enumerate() {
        let segments: Vec<String> = path
            .segments()
            .iter()
            .map(|s| format!("fold {} <- split {}", s.fold_id, s.split_id))
            .collect();
        println!("path {path_id}: {}", segments.join(", "));
    }

    println!("path reconstruction: ok");
}
