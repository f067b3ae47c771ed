//! Purging of training samples whose information windows overlap a test set.
//!
//! A training sample that starts within a test window, ends within it, or
//! envelops it has seen part of the test outcome and must be dropped.
//!
//! López de Prado, M. (2018). Advances in Financial Machine Learning,
//! Snippet 7.1, p.106. Wiley.

use chrono::NaiveDateTime;

use crate::error::CrossValidationError;
use crate::timeline::Timeline;

/// The information window covered by one contiguous test block.
///
/// Used only for purge comparison; never handed back to callers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TestBound {
    pub start_time: NaiveDateTime,
    pub end_time: NaiveDateTime,
}

impl TestBound {
    /// Closed-interval overlap: adjacency counts as overlap.
    pub fn overlaps(&self, start: NaiveDateTime, end: NaiveDateTime) -> bool {
        start <= self.end_time && end >= self.start_time
    }
}

/// Return the sample windows that overlap none of the test bounds.
///
/// A sample is dropped as soon as it overlaps any bound; survivors keep
/// their original order. Pure, O(samples x bounds).
pub fn purge_train_set(
    timeline: &Timeline,
    test_bounds: &[TestBound],
) -> Vec<(NaiveDateTime, NaiveDateTime)> {
    timeline
        .iter()
        .filter(|(start, end)| !test_bounds.iter().any(|bound| bound.overlaps(*start, *end)))
        .collect()
}

/// Count surviving train samples whose window still overlaps a test window.
///
/// A correctly purged split always reports zero; anything else means the
/// purge missed a leak.
pub fn count_train_test_overlaps(
    timeline: &Timeline,
    train_indices: &[usize],
    test_indices: &[usize],
) -> usize {
    train_indices
        .iter()
        .filter(|train_idx| {
            let (train_start, train_end) = timeline.window(**train_idx);
            test_indices.iter().any(|test_idx| {
                let (test_start, test_end) = timeline.window(*test_idx);
                train_start <= test_end && test_start <= train_end
            })
        })
        .count()
}

/// Push a fold's end index past the test block by `floor(n_samples * pct)`.
///
/// The last fold has nothing after it, so only interior folds are extended;
/// the result never runs past `n_samples`.
pub(crate) fn embargo_stop(stop: usize, n_samples: usize, pct_embargo: f64) -> usize {
    if stop < n_samples {
        (stop + (n_samples as f64 * pct_embargo) as usize).min(n_samples)
    } else {
        stop
    }
}

pub(crate) fn validate_embargo(pct_embargo: f64) -> Result<(), CrossValidationError> {
    if !(0.0..1.0).contains(&pct_embargo) {
        return Err(CrossValidationError::InvalidInput("pct_embargo must be in [0, 1)"));
    }
    Ok(())
}
