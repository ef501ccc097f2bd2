// tests/integration/end_to_end.rs
use std::path::MAIN_SEPARATOR;

use dir_count::{WalkOptions, count, count_with};

use crate::common::{DAY, Tree, sample_tree};

fn params(root: &str, rest: &[&str]) -> Vec<String> {
    std::iter::once(root)
        .chain(rest.iter().copied())
        .map(str::to_string)
        .collect()
}

#[test]
fn path_only_counts_every_entry_below_root() {
    let tree = sample_tree();
    assert_eq!(count(&[tree.root()]).unwrap(), 4);
}

#[test]
fn include_pattern_counts_matching_names() {
    let tree = sample_tree();
    assert_eq!(count(&params(&tree.root(), &[r"\.txt$"])).unwrap(), 2);
}

#[test]
fn trailing_separator_changes_nothing() {
    let tree = sample_tree();
    let with_sep = format!("{}{MAIN_SEPARATOR}", tree.root());
    assert_eq!(count(&[with_sep]).unwrap(), 4);
}

#[test]
fn empty_directory_counts_zero() {
    let tree = Tree::new();
    assert_eq!(count(&[tree.root()]).unwrap(), 0);
}

#[test]
fn repeated_counts_are_identical() {
    let tree = sample_tree();
    let p = params(&tree.root(), &["", r"\.log$"]);
    let first = count(&p).unwrap();
    let second = count(&p).unwrap();
    assert_eq!(first, second);
    assert_eq!(first, 3);
}

#[test]
fn max_depth_one_counts_direct_children_only() {
    let tree = Tree::new().dir("a/b/c");
    assert_eq!(count(&params(&tree.root(), &["", "", "", "", "1"])).unwrap(), 1);
    assert_eq!(count(&params(&tree.root(), &["", "", "", "", "2"])).unwrap(), 2);
    assert_eq!(count(&params(&tree.root(), &["", "", "", "", "-1"])).unwrap(), 3);
    assert_eq!(count(&params(&tree.root(), &["", "", "", "", "0"])).unwrap(), 0);
}

#[test]
fn dir_exclude_removes_whole_subtree() {
    let tree = Tree::new()
        .file("d/inner.txt", "i")
        .file("d/deeper/x.txt", "x")
        .file("keep.txt", "k");
    let excluded = params(&tree.root(), &["", "", "", "", "", "", "", "", "", "^d$"]);
    assert_eq!(count(&excluded).unwrap(), 1);
}

#[test]
fn exclude_name_removes_only_the_entry() {
    let tree = Tree::new()
        .file("d/inner.txt", "i")
        .file("d/deeper/x.txt", "x")
        .file("keep.txt", "k");
    assert_eq!(count(&params(&tree.root(), &["", "^d$"])).unwrap(), 4);
    assert_eq!(count(&params(&tree.root(), &["", "^keep"])).unwrap(), 4);
}

#[test]
fn dir_exclude_ignores_files_with_matching_name() {
    let tree = Tree::new().file("cache", "not a dir").file("sub/cache/x", "x");
    let excluded = params(&tree.root(), &["", "", "", "", "", "", "", "", "", "^cache$"]);
    // `cache` (file) and `sub` survive; `sub/cache` is pruned with its child
    assert_eq!(count(&excluded).unwrap(), 2);
}

#[test]
fn type_filters() {
    let tree = sample_tree();
    assert_eq!(count(&params(&tree.root(), &["", "", "file"])).unwrap(), 3);
    assert_eq!(count(&params(&tree.root(), &["", "", "dir"])).unwrap(), 1);
    assert_eq!(count(&params(&tree.root(), &["", "", "", "dir"])).unwrap(), 3);
    assert_eq!(count(&params(&tree.root(), &["", "", "file,all"])).unwrap(), 4);
    assert_eq!(count(&params(&tree.root(), &["", "", "dev,fifo,sock"])).unwrap(), 0);
}

#[test]
fn size_bounds_use_decimal_suffixes() {
    let tree = Tree::new().sized("small", 10).sized("large", 2000);
    assert_eq!(count(&params(&tree.root(), &["", "", "file", "", "", "1K"])).unwrap(), 1);
    assert_eq!(count(&params(&tree.root(), &["", "", "file", "", "", "", "1K"])).unwrap(), 1);
    assert_eq!(count(&params(&tree.root(), &["", "", "file", "", "", "10", "2000"])).unwrap(), 2);
    assert_eq!(count(&params(&tree.root(), &["", "", "file", "", "", "11", "1999"])).unwrap(), 0);
}

#[test]
fn age_bounds() {
    let tree = Tree::new()
        .file("old.txt", "o")
        .aged("old.txt", DAY * 3)
        .file("new.txt", "n");
    let min_age = params(&tree.root(), &["", "", "file", "", "", "", "", "1d"]);
    assert_eq!(count(&min_age).unwrap(), 1);

    let max_age = params(&tree.root(), &["", "", "file", "", "", "", "", "", "1d"]);
    assert_eq!(count(&max_age).unwrap(), 1);

    let window = params(&tree.root(), &["", "", "file", "", "", "", "", "2d", "1w"]);
    assert_eq!(count(&window).unwrap(), 1);
}

#[cfg(unix)]
#[test]
fn symlinks_are_counted_not_followed() {
    let tree = sample_tree().symlink("sub", "link");
    assert_eq!(count(&[tree.root()]).unwrap(), 5);
    assert_eq!(count(&params(&tree.root(), &["", "", "sym"])).unwrap(), 1);
}

#[cfg(unix)]
#[test]
fn follow_links_walks_link_targets() {
    let tree = sample_tree().symlink("sub", "link");
    let options = WalkOptions {
        follow_links: true,
        same_file_system: false,
    };
    // link resolves to a dir holding a second copy of f3.txt
    assert_eq!(count_with(&[tree.root()], &options).unwrap(), 6);
    assert_eq!(
        count_with(&params(&tree.root(), &["", "", "sym"]), &options).unwrap(),
        0
    );
}
