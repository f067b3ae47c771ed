//! Combinatorial purged cross-validation with backtest path reconstruction.
//!
//! Every `n_test_folds`-sized combination of folds serves once as the test
//! set, purged jointly against the union of its test windows. As splits are
//! enumerated, their test segments are packed first-fit into complete
//! backtest paths, each usable to stitch one full out-of-sample equity curve.
//!
//! López de Prado, M. (2018). Advances in Financial Machine Learning,
//! Chapter 12. Wiley.

use chrono::NaiveDateTime;
use itertools::Itertools;
use log::{debug, trace};

use crate::backtest_paths::{BacktestPath, PathRegistry, PathSegment};
use crate::error::CrossValidationError;
use crate::partition::fold_bounds;
use crate::purge::{embargo_stop, purge_train_set, validate_embargo, TestBound};
use crate::timeline::Timeline;

/// Parameters of the combinatorial splitter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CpcvConfig {
    pub n_folds: usize,
    pub n_test_folds: usize,
    pub pct_embargo: f64,
}

impl Default for CpcvConfig {
    fn default() -> Self {
        Self { n_folds: 6, n_test_folds: 2, pct_embargo: 0.0 }
    }
}

#[derive(Debug, Clone)]
pub struct CombinatorialPurgedKFold {
    timeline: Timeline,
    config: CpcvConfig,
    n_splits: usize,
    n_backtest_paths: usize,
    paths: PathRegistry,
}

impl CombinatorialPurgedKFold {
    /// Build a splitter over `timeline` with the given parameters.
    ///
    /// Rejects `n_folds < 2`, `n_test_folds` outside `(1, n_folds)`, fold
    /// counts exceeding the sample count, embargo fractions outside `[0, 1)`,
    /// and `(n_folds, n_test_folds)` pairs whose backtest path count
    /// `C(n_folds, n_test_folds) * n_test_folds / n_folds` is not an integer.
    pub fn new(timeline: Timeline, config: CpcvConfig) -> Result<Self, CrossValidationError> {
        let CpcvConfig { n_folds, n_test_folds, pct_embargo } = config;
        validate_embargo(pct_embargo)?;
        if n_test_folds <= 1 {
            return Err(CrossValidationError::InvalidInput(
                "n_test_folds must be greater than 1",
            ));
        }
        if n_test_folds >= n_folds {
            return Err(CrossValidationError::InvalidInput(
                "n_test_folds must be less than n_folds",
            ));
        }
        fold_bounds(timeline.len(), n_folds)?;

        let n_splits = n_choose_k(n_folds, n_test_folds)?;
        if n_splits * n_test_folds % n_folds != 0 {
            return Err(CrossValidationError::NonIntegerPathCount { n_folds, n_test_folds });
        }
        let n_backtest_paths = n_splits * n_test_folds / n_folds;
        debug!(
            "combinatorial splitter over {} samples: {n_splits} splits, \
             {n_backtest_paths} backtest paths",
            timeline.len()
        );

        Ok(Self {
            paths: PathRegistry::new(n_folds, n_backtest_paths),
            timeline,
            config,
            n_splits,
            n_backtest_paths,
        })
    }

    /// Number of splits, `C(n_folds, n_test_folds)`.
    pub fn n_splits(&self) -> usize {
        self.n_splits
    }

    /// Number of reconstructable backtest paths.
    pub fn n_backtest_paths(&self) -> usize {
        self.n_backtest_paths
    }

    /// Whether the path registry holds every path, each spanning all folds.
    ///
    /// Meaningful once the most recent [`split`](Self::split) iterator has
    /// been drained.
    pub fn paths_populated(&self) -> bool {
        self.paths.populated()
    }

    /// The reconstructed backtest paths, in creation order.
    pub fn backtest_paths(&self) -> &[BacktestPath] {
        self.paths.paths()
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Lazily yield `(train_indices, test_indices)` pairs, one per fold
    /// combination in lexicographic order.
    ///
    /// `y` and `groups` are accepted for interface compatibility with
    /// supervised-learning callers and always ignored. Fails if the feature
    /// table's row count differs from the timeline length.
    ///
    /// The path registry is rebuilt at the start of every call, so repeated
    /// passes over the same instance reproduce the same assignment. The
    /// returned iterator holds the mutable borrow; read
    /// [`backtest_paths`](Self::backtest_paths) after dropping it.
    pub fn split(
        &mut self,
        x: &[Vec<f64>],
        y: Option<&[f64]>,
        groups: Option<&[usize]>,
    ) -> Result<CombinatorialSplits<'_>, CrossValidationError> {
        let _ = (y, groups);
        if x.len() != self.timeline.len() {
            return Err(CrossValidationError::LengthMismatch {
                expected: self.timeline.len(),
                found: x.len(),
            });
        }
        let folds = fold_bounds(self.timeline.len(), self.config.n_folds)?;
        let combinations: Vec<Vec<usize>> =
            (0..self.config.n_folds).combinations(self.config.n_test_folds).collect();
        self.paths = PathRegistry::new(self.config.n_folds, self.n_backtest_paths);
        Ok(CombinatorialSplits { splitter: self, folds, combinations, cursor: 0 })
    }
}

/// Lazy walk over the fold combinations; each split is purged on demand and
/// feeds the owning splitter's path registry as it is drawn.
#[derive(Debug)]
pub struct CombinatorialSplits<'a> {
    splitter: &'a mut CombinatorialPurgedKFold,
    folds: Vec<(usize, usize)>,
    combinations: Vec<Vec<usize>>,
    cursor: usize,
}

impl Iterator for CombinatorialSplits<'_> {
    type Item = (Vec<usize>, Vec<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let combination = self.combinations.get(self.cursor)?;
        let split_id = self.cursor;
        self.cursor += 1;

        let n_samples = self.splitter.timeline.len();
        let mut test_indices = Vec::new();
        let mut test_bounds = Vec::with_capacity(combination.len());

        for &fold_id in combination {
            let (start, stop) = self.folds[fold_id];
            test_indices.extend(start..stop);
            self.splitter.paths.assign(PathSegment {
                split_id,
                fold_id,
                start_idx: start,
                end_idx: stop,
            });

            let bounded_stop = embargo_stop(stop, n_samples, self.splitter.config.pct_embargo);
            test_bounds.push(TestBound {
                start_time: self.splitter.timeline.start_time(start),
                end_time: self.splitter.timeline.end_time(bounded_stop - 1),
            });
        }

        let train_windows = purge_train_set(&self.splitter.timeline, &test_bounds);
        let train_keys: Vec<NaiveDateTime> =
            train_windows.iter().map(|(start_time, _)| *start_time).collect();
        let train_indices = self.splitter.timeline.indexer(&train_keys);

        trace!(
            "split {split_id} (folds {combination:?}): {} train / {} test samples",
            train_indices.len(),
            test_indices.len()
        );
        Some((train_indices, test_indices))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.combinations.len() - self.cursor;
        (remaining, Some(remaining))
    }
}

fn n_choose_k(n: usize, k: usize) -> Result<usize, CrossValidationError> {
    let k_eff = k.min(n - k);
    let mut numerator: u128 = 1;
    let mut denominator: u128 = 1;
    for i in 0..k_eff {
        numerator *= (n - i) as u128;
        denominator *= (i + 1) as u128;
    }
    usize::try_from(numerator / denominator)
        .map_err(|_| CrossValidationError::InvalidInput("combination count overflows usize"))
}
