// tests/integration/metric_export.rs
use dir_count::{DirCountError, METRIC_KEY, WalkOptions, export, export_with, metrics};

use crate::common::sample_tree;

#[test]
fn exports_registered_key() {
    let tree = sample_tree();
    assert_eq!(export(METRIC_KEY, &[tree.root()]).unwrap(), 4);
    assert_eq!(
        export_with("vfs.dir.count", &[tree.root()], &WalkOptions::default()).unwrap(),
        4
    );
}

#[test]
fn other_keys_are_unsupported() {
    let tree = sample_tree();
    let err = export("vfs.dir.size", &[tree.root()]).unwrap_err();
    assert!(matches!(err, DirCountError::UnsupportedMetric(ref key) if key == "vfs.dir.size"));
}

#[test]
fn metric_list_names_the_key() {
    assert!(metrics().iter().any(|(key, _)| *key == METRIC_KEY));
}
