//! Greedy assembly of test-fold segments into full-length backtest paths.
//!
//! Every combinatorial split tests `n_test_folds` fold segments; across all
//! splits each fold is tested the same number of times, so the segments can
//! be stitched into several complete out-of-sample paths, each covering
//! every fold exactly once.

/// One fold-sized test segment assigned to a reconstructed path.
///
/// `start_idx..end_idx` is the fold's half-open index range; `split_id`
/// names the split whose model produced the segment's predictions.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PathSegment {
    pub split_id: usize,
    pub fold_id: usize,
    pub start_idx: usize,
    pub end_idx: usize,
}

/// A fold-disjoint sequence of test segments spanning all folds once.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BacktestPath {
    segments: Vec<PathSegment>,
}

impl BacktestPath {
    /// Segments in assignment order; fold ids ascend once the path is full.
    pub fn segments(&self) -> &[PathSegment] {
        &self.segments
    }

    pub fn contains_fold(&self, fold_id: usize) -> bool {
        self.segments.iter().any(|segment| segment.fold_id == fold_id)
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }
}

/// Ordered list of path records filled by first-fit assignment.
///
/// An explicit `Vec` keeps creation order deterministic; nothing relies on
/// map iteration order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathRegistry {
    paths: Vec<BacktestPath>,
    n_folds: usize,
    n_paths: usize,
}

impl PathRegistry {
    /// A fresh registry holding one empty path.
    pub fn new(n_folds: usize, n_paths: usize) -> Self {
        Self { paths: vec![BacktestPath::default()], n_folds, n_paths }
    }

    /// Assign `segment` to the first path (in creation order) that does not
    /// yet contain its fold, creating a new path when every existing one
    /// does. Ignored once the registry is fully populated.
    pub fn assign(&mut self, segment: PathSegment) {
        if self.populated() {
            return;
        }
        match self.paths.iter_mut().find(|path| !path.contains_fold(segment.fold_id)) {
            Some(path) => path.segments.push(segment),
            None => self.paths.push(BacktestPath { segments: vec![segment] }),
        }
    }

    /// Whether every expected path exists and holds one segment per fold.
    pub fn populated(&self) -> bool {
        self.paths.len() == self.n_paths
            && self.paths.iter().all(|path| path.len() == self.n_folds)
    }

    pub fn paths(&self) -> &[BacktestPath] {
        &self.paths
    }

    pub fn len(&self) -> usize {
        self.paths.len()
    }

    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }
}
