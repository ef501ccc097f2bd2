// tests/integration/errors.rs
use std::io;

use dir_count::{DirCountError, ParamSlot, count};

use crate::common::sample_tree;

#[test]
fn no_parameters_is_too_few() {
    let empty: [&str; 0] = [];
    let err = count(&empty).unwrap_err();
    assert!(matches!(err, DirCountError::TooFewParameters));
    assert_eq!(err.to_string(), "Too few parameters.");
}

#[test]
fn twelve_parameters_is_too_many() {
    let tree = sample_tree();
    let mut params = vec![tree.root()];
    params.extend(std::iter::repeat_n(String::new(), 11));
    let err = count(&params).unwrap_err();
    assert_eq!(err.to_string(), "Too many parameters.");
}

#[test]
fn eleven_empty_slots_are_accepted() {
    let tree = sample_tree();
    let mut params = vec![tree.root()];
    params.extend(std::iter::repeat_n(String::new(), 10));
    assert_eq!(count(&params).unwrap(), 4);
}

#[test]
fn non_numeric_depth_names_sixth_parameter() {
    let tree = sample_tree();
    let root = tree.root();
    let err = count(&[root.as_str(), "", "", "", "", "abc"]).unwrap_err();
    assert_eq!(err.slot(), Some(ParamSlot::MaxDepth));
    assert!(err.to_string().starts_with("Invalid sixth parameter"));
}

#[test]
fn bad_regex_and_type_are_rejected() {
    let tree = sample_tree();
    let root = tree.root();
    let err = count(&[root.as_str(), "[unclosed"]).unwrap_err();
    assert_eq!(err.slot(), Some(ParamSlot::IncludeName));

    let err = count(&[root.as_str(), "", "", "file,link"]).unwrap_err();
    assert_eq!(err.slot(), Some(ParamSlot::IncludeTypes));
    assert!(err.to_string().contains("link"));
}

#[test]
fn bad_suffixes_are_rejected() {
    let tree = sample_tree();
    let root = tree.root();
    let err = count(&[root.as_str(), "", "", "", "", "", "10k"]).unwrap_err();
    assert_eq!(err.slot(), Some(ParamSlot::MinSize));

    let err = count(&[root.as_str(), "", "", "", "", "", "", "", "", "3y"]).unwrap_err();
    assert_eq!(err.slot(), Some(ParamSlot::MaxAge));
}

#[test]
fn missing_root_is_a_traversal_failure() {
    let tree = sample_tree();
    let missing = tree.join("absent");
    let err = count(&[missing.to_string_lossy()]).unwrap_err();
    match &err {
        DirCountError::TraversalFailed { source, .. } => {
            assert_eq!(source.kind(), io::ErrorKind::NotFound);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("Cannot parse result"));
}

#[test]
fn parameters_are_validated_before_the_walk() {
    let tree = sample_tree();
    let missing = tree.join("absent").to_string_lossy().into_owned();
    let err = count(&[missing.as_str(), "", "", "bogus"]).unwrap_err();
    assert_eq!(err.slot(), Some(ParamSlot::IncludeTypes));
}

/// Makes `sub/locked` unreadable; `None` when permissions are not enforced
/// (running as root).
#[cfg(unix)]
fn lock_subdirectory(tree: &crate::common::Tree) -> Option<std::path::PathBuf> {
    use std::{fs, os::unix::fs::PermissionsExt};

    let locked = tree.join("sub/locked");
    fs::set_permissions(&locked, fs::Permissions::from_mode(0o000)).unwrap();
    if fs::read_dir(&locked).is_ok() {
        unlock(&locked);
        return None;
    }
    Some(locked)
}

#[cfg(unix)]
fn unlock(path: &std::path::Path) {
    use std::{fs, os::unix::fs::PermissionsExt};

    fs::set_permissions(path, fs::Permissions::from_mode(0o755)).unwrap();
}

#[cfg(unix)]
#[test]
fn unreadable_subdirectory_fails_without_partial_count() {
    let tree = sample_tree().file("sub/locked/secret", "s");
    let Some(locked) = lock_subdirectory(&tree) else {
        return;
    };

    let result = count(&[tree.root()]);
    unlock(&locked);
    let err = result.unwrap_err();
    match &err {
        DirCountError::TraversalFailed { path, source } => {
            assert_eq!(path, &locked);
            assert_eq!(source.kind(), io::ErrorKind::PermissionDenied);
        }
        other => panic!("unexpected error: {other:?}"),
    }
    assert!(err.to_string().starts_with("Cannot parse result"));
}

#[cfg(unix)]
#[test]
fn excluded_unreadable_subdirectory_is_not_read() {
    let tree = sample_tree().file("sub/locked/secret", "s");
    let Some(locked) = lock_subdirectory(&tree) else {
        return;
    };
    let root = tree.root();

    let excluded = count(&[root.as_str(), "", "", "", "", "", "", "", "", "", "^locked$"]);
    let shallow = count(&[root.as_str(), "", "", "", "", "1"]);
    unlock(&locked);

    // f1.txt, f2.log, sub, sub/f3.txt
    assert_eq!(excluded.unwrap(), 4);
    // f1.txt, f2.log, sub
    assert_eq!(shallow.unwrap(), 3);
}
