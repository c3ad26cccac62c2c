use std::fs;
use std::path::PathBuf;

use covpods::{collect, collect_pods_from_files};
use tracing_test::traced_test;

const M1: &str = "ae7be26cdaa742ca148068d5ac90eaca";
const ORPHAN: &str = "0123456789abcdef0123456789abcdef";

const ORPHAN_WARNING: &str = "skipping orphaned counter file";

/// One origin with a pod for M1 and a counter file for a tag with no meta file.
fn setup_orphan_dir() -> (tempfile::TempDir, PathBuf) {
    let tmp = tempfile::tempdir().unwrap();
    let dir = tmp.path().to_path_buf();

    fs::write(dir.join(format!("covmeta.{M1}")), "foo").unwrap();
    fs::write(dir.join(format!("covcounters.{M1}.42.1")), "foo").unwrap();
    fs::write(dir.join(format!("covcounters.{ORPHAN}.42.9")), "foo").unwrap();

    (tmp, dir)
}

#[test]
#[traced_test]
fn warns_about_orphans_when_enabled() {
    let (_tmp, dir) = setup_orphan_dir();

    let collection = collect().origin(&dir).warn_orphans(true).run().unwrap();

    assert_eq!(collection.pods.len(), 1);
    assert!(logs_contain(ORPHAN_WARNING));
    assert!(logs_contain(&format!("covcounters.{ORPHAN}.42.9")));
    assert!(logs_contain(ORPHAN));
}

#[test]
#[traced_test]
fn silent_about_orphans_by_default() {
    let (_tmp, dir) = setup_orphan_dir();

    let collection = collect().origin(&dir).collect_orphans(true).run().unwrap();

    assert_eq!(collection.orphans.len(), 1, "orphan is still dropped from pods");
    assert!(!logs_contain(ORPHAN_WARNING));
}

#[test]
#[traced_test]
fn no_warning_without_orphans() {
    let (_tmp, dir) = setup_orphan_dir();
    fs::remove_file(dir.join(format!("covcounters.{ORPHAN}.42.9"))).unwrap();

    collect().origin(&dir).warn_orphans(true).run().unwrap();

    assert!(!logs_contain(ORPHAN_WARNING));
}

#[test]
#[traced_test]
fn file_list_warns_about_orphans() {
    let files = [
        format!("r1/covmeta.{M1}"),
        format!("r1/covcounters.{ORPHAN}.7.3"),
    ];

    let pods = collect_pods_from_files(files, true).unwrap();

    assert_eq!(pods.len(), 1);
    assert!(pods[0].counter_data_files.is_empty());
    assert!(logs_contain(ORPHAN_WARNING));
    assert!(logs_contain(&format!("covcounters.{ORPHAN}.7.3")));
}

#[test]
#[traced_test]
fn file_list_silent_when_not_warning() {
    let files = [format!("r1/covcounters.{ORPHAN}.7.3")];

    let pods = collect_pods_from_files(files, false).unwrap();

    assert!(pods.is_empty());
    assert!(!logs_contain(ORPHAN_WARNING));
}
