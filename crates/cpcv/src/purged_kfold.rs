//! Walk-forward purged k-fold splitter.
//!
//! Folds are visited in order, each serving once as the test block while the
//! purged remainder trains. An optional embargo widens the purge window past
//! the end of each interior test block.
//!
//! López de Prado, M. (2018). Advances in Financial Machine Learning,
//! Chapter 7. Wiley.

use log::{debug, trace};

use crate::error::CrossValidationError;
use crate::partition::fold_bounds;
use crate::purge::{embargo_stop, purge_train_set, validate_embargo, TestBound};
use crate::timeline::Timeline;

#[derive(Debug, Clone)]
pub struct PurgedKFold {
    timeline: Timeline,
    n_folds: usize,
    pct_embargo: f64,
}

impl PurgedKFold {
    /// Build a splitter over `timeline` with `n_folds` sequential folds.
    pub fn new(
        timeline: Timeline,
        n_folds: usize,
        pct_embargo: f64,
    ) -> Result<Self, CrossValidationError> {
        validate_embargo(pct_embargo)?;
        fold_bounds(timeline.len(), n_folds)?;
        debug!("purged k-fold over {} samples, {n_folds} folds", timeline.len());
        Ok(Self { timeline, n_folds, pct_embargo })
    }

    pub fn n_splits(&self) -> usize {
        self.n_folds
    }

    pub fn timeline(&self) -> &Timeline {
        &self.timeline
    }

    /// Lazily yield `(train_indices, test_indices)` pairs, one per fold.
    ///
    /// `y` and `groups` are accepted for interface compatibility with
    /// supervised-learning callers and always ignored. Fails if the feature
    /// table's row count differs from the timeline length.
    pub fn split(
        &self,
        x: &[Vec<f64>],
        y: Option<&[f64]>,
        groups: Option<&[usize]>,
    ) -> Result<PurgedKFoldSplits<'_>, CrossValidationError> {
        let _ = (y, groups);
        if x.len() != self.timeline.len() {
            return Err(CrossValidationError::LengthMismatch {
                expected: self.timeline.len(),
                found: x.len(),
            });
        }
        let folds = fold_bounds(self.timeline.len(), self.n_folds)?;
        Ok(PurgedKFoldSplits { splitter: self, folds, cursor: 0 })
    }
}

/// Lazy walk over the folds; each split is purged on demand.
#[derive(Debug)]
pub struct PurgedKFoldSplits<'a> {
    splitter: &'a PurgedKFold,
    folds: Vec<(usize, usize)>,
    cursor: usize,
}

impl Iterator for PurgedKFoldSplits<'_> {
    type Item = (Vec<usize>, Vec<usize>);

    fn next(&mut self) -> Option<Self::Item> {
        let (start, stop) = *self.folds.get(self.cursor)?;
        let split_id = self.cursor;
        self.cursor += 1;

        let timeline = &self.splitter.timeline;
        let n_samples = timeline.len();
        let test_indices: Vec<usize> = (start..stop).collect();

        let bounded_stop = embargo_stop(stop, n_samples, self.splitter.pct_embargo);
        let test_bound = TestBound {
            start_time: timeline.start_time(start),
            end_time: timeline.end_time(bounded_stop - 1),
        };

        let train_windows = purge_train_set(timeline, &[test_bound]);
        let train_keys: Vec<_> = train_windows.iter().map(|(start_time, _)| *start_time).collect();
        let train_indices = timeline.indexer(&train_keys);

        trace!(
            "split {split_id}: {} train / {} test samples",
            train_indices.len(),
            test_indices.len()
        );
        Some((train_indices, test_indices))
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.folds.len() - self.cursor;
        (remaining, Some(remaining))
    }
}
