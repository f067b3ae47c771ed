//! Leakage-aware cross-validation for time-ordered samples.
//!
//! Financial labels are typically resolved at a later "vertical barrier", so
//! every sample owns an information window `[start_time, end_time]` rather
//! than a point in time. Naive k-fold splits leak: a training sample whose
//! window overlaps a test window has seen part of the test outcome. This
//! crate produces train/test index partitions that purge such overlaps and
//! optionally embargo the stretch just after each test block.
//!
//! Two splitters are provided on top of the shared [`timeline::Timeline`]
//! data model: [`purged_kfold::PurgedKFold`], a sequential walk over
//! contiguous folds, and [`combinatorial::CombinatorialPurgedKFold`], which
//! tests every combination of folds and reconstructs full-length backtest
//! paths from the pieces (CPCV).
//!
//! López de Prado, M. (2018). Advances in Financial Machine Learning,
//! Chapters 7 and 12. Wiley.

pub mod backtest_paths;
pub mod combinatorial;
pub mod error;
pub mod partition;
pub mod purge;
pub mod purged_kfold;
pub mod timeline;
