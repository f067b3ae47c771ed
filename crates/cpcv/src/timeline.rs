//! Time-ordered sample windows stored as parallel start/end arrays.
//!
//! Each sample is a prediction made at `start_time` whose label becomes
//! observable at `end_time` (its vertical barrier). Positions in the sorted
//! start-time order are the integer indices used for all split I/O.

use chrono::NaiveDateTime;

use crate::error::CrossValidationError;

/// The full ordered set of sample windows for one dataset.
///
/// Stored as two parallel arrays indexed by position so that overlap checks
/// stay tight loops over contiguous memory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Timeline {
    start_times: Vec<NaiveDateTime>,
    end_times: Vec<NaiveDateTime>,
}

impl Timeline {
    /// Build a timeline from parallel start/end arrays.
    ///
    /// Start times must be strictly increasing (hence unique and sorted) and
    /// every end time must be at or after its start time.
    pub fn new(
        start_times: Vec<NaiveDateTime>,
        end_times: Vec<NaiveDateTime>,
    ) -> Result<Self, CrossValidationError> {
        if start_times.len() != end_times.len() {
            return Err(CrossValidationError::LengthMismatch {
                expected: start_times.len(),
                found: end_times.len(),
            });
        }
        if start_times.is_empty() {
            return Err(CrossValidationError::InvalidInput("timeline cannot be empty"));
        }
        if start_times.windows(2).any(|pair| pair[1] <= pair[0]) {
            return Err(CrossValidationError::InvalidInput(
                "start times must be strictly increasing",
            ));
        }
        if start_times.iter().zip(end_times.iter()).any(|(start, end)| end < start) {
            return Err(CrossValidationError::InvalidInput(
                "vertical barrier must not precede its start time",
            ));
        }
        Ok(Self { start_times, end_times })
    }

    /// Build a timeline from `(start_time, end_time)` pairs.
    pub fn from_windows(
        windows: Vec<(NaiveDateTime, NaiveDateTime)>,
    ) -> Result<Self, CrossValidationError> {
        let (start_times, end_times) = windows.into_iter().unzip();
        Self::new(start_times, end_times)
    }

    pub fn len(&self) -> usize {
        self.start_times.len()
    }

    pub fn is_empty(&self) -> bool {
        self.start_times.is_empty()
    }

    pub fn start_time(&self, index: usize) -> NaiveDateTime {
        self.start_times[index]
    }

    pub fn end_time(&self, index: usize) -> NaiveDateTime {
        self.end_times[index]
    }

    /// The information window of the sample at `index`.
    pub fn window(&self, index: usize) -> (NaiveDateTime, NaiveDateTime) {
        (self.start_times[index], self.end_times[index])
    }

    pub fn start_times(&self) -> &[NaiveDateTime] {
        &self.start_times
    }

    pub fn end_times(&self) -> &[NaiveDateTime] {
        &self.end_times
    }

    /// Iterate windows in position order.
    pub fn iter(&self) -> impl Iterator<Item = (NaiveDateTime, NaiveDateTime)> + '_ {
        self.start_times.iter().copied().zip(self.end_times.iter().copied())
    }

    /// Map start-time keys back to their positions in this timeline.
    ///
    /// Keys are resolved by binary search over the sorted start-time array;
    /// keys that are not present are skipped. Output order follows key order,
    /// so passing keys in ascending order yields ascending positions.
    pub fn indexer(&self, keys: &[NaiveDateTime]) -> Vec<usize> {
        keys.iter().filter_map(|key| self.start_times.binary_search(key).ok()).collect()
    }
}
