use cpcv::backtest_paths::{PathRegistry, PathSegment};

fn segment(split_id: usize, fold_id: usize) -> PathSegment {
    PathSegment { split_id, fold_id, start_idx: fold_id * 10, end_idx: fold_id * 10 + 10 }
}

#[test]
fn test_starts_with_one_empty_path() {
    let registry = PathRegistry::new(4, 3);
    assert_eq!(registry.len(), 1);
    assert!(registry.paths()[0].is_empty());
    assert!(!registry.populated());
}

#[test]
fn test_first_fit_assignment() {
    let mut registry = PathRegistry::new(4, 3);

    registry.assign(segment(0, 0));
    registry.assign(segment(0, 1));
    assert_eq!(registry.len(), 1);
    assert_eq!(registry.paths()[0].len(), 2);

    // Fold 0 is taken in the only path, so a second path is created.
    registry.assign(segment(1, 0));
    assert_eq!(registry.len(), 2);
    assert_eq!(registry.paths()[1].segments(), &[segment(1, 0)]);

    // Fold 2 still fits the first path.
    registry.assign(segment(1, 2));
    assert_eq!(registry.paths()[0].len(), 3);
}

#[test]
fn test_contains_fold() {
    let mut registry = PathRegistry::new(3, 1);
    registry.assign(segment(0, 1));

    let path = &registry.paths()[0];
    assert!(path.contains_fold(1));
    assert!(!path.contains_fold(0));
}

#[test]
fn test_populated_requires_full_paths_and_exact_count() {
    let mut registry = PathRegistry::new(2, 1);
    registry.assign(segment(0, 0));
    assert!(!registry.populated());

    registry.assign(segment(0, 1));
    assert!(registry.populated());
}

#[test]
fn test_assign_is_ignored_once_populated() {
    let mut registry = PathRegistry::new(2, 1);
    registry.assign(segment(0, 0));
    registry.assign(segment(0, 1));
    assert!(registry.populated());

    let before = registry.clone();
    registry.assign(segment(1, 0));
    assert_eq!(registry, before);
}

#[test]
fn test_segment_ranges_are_preserved() {
    let mut registry = PathRegistry::new(3, 2);
    registry.assign(PathSegment { split_id: 4, fold_id: 2, start_idx: 20, end_idx: 30 });

    let stored = registry.paths()[0].segments()[0];
    assert_eq!(stored.split_id, 4);
    assert_eq!(stored.fold_id, 2);
    assert_eq!(stored.start_idx, 20);
    assert_eq!(stored.end_idx, 30);
}
