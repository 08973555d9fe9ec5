// codesweep - tests/e2e_cleanup.rs
//
// End-to-end tests for the discovery and clean-up pipeline.
//
// These tests exercise the real filesystem, real walkdir traversal and real
// chrono date parsing. The evaluation date is pinned so results never depend
// on when the suite runs.

use chrono::NaiveDate;
use codesweep::app::cleanup::{remove_expired_blocks, run_cleanup, CleanupConfig};
use codesweep::core::discovery::{discover_files, DiscoveryConfig};
use codesweep::core::marker::{ExpiryPolicy, MarkerSet, Sweeper};
use codesweep::util::error::{CleanupError, DiscoveryError, MarkerError};
use std::fs;
use std::path::Path;

// =============================================================================
// Helpers
// =============================================================================

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 6, 15).unwrap()
}

fn lines(list: &[&str]) -> String {
    let mut s = list.join("\n");
    s.push('\n');
    s
}

fn config_for(root: &Path) -> CleanupConfig {
    CleanupConfig {
        root: root.to_path_buf(),
        today: today(),
        ..Default::default()
    }
}

/// A small Go repository:
///
/// root/
///   .git/objects/stale.go        (expired block, must not be touched)
///   .github/workflows/scripts/cleanup.go
///   child_dir/child_go_file.go   (expired block)
///   with_end_only.go
///   with_start_and_end.go        (expired block)
///   with_start_only.go
///   README.md                    (expired block, not a .go file)
fn make_repo(root: &Path) {
    let expired = lines(&[
        "package main",
        "// > Start clean up at 2000-01-01",
        "func legacy() {}",
        "// > End clean up",
        "func main() {}",
    ]);

    fs::create_dir_all(root.join(".git").join("objects")).unwrap();
    fs::write(root.join(".git").join("objects").join("stale.go"), &expired).unwrap();

    let ci = root.join(".github").join("workflows").join("scripts");
    fs::create_dir_all(&ci).unwrap();
    fs::write(ci.join("cleanup.go"), &expired).unwrap();

    fs::create_dir(root.join("child_dir")).unwrap();
    fs::write(root.join("child_dir").join("child_go_file.go"), &expired).unwrap();

    fs::write(
        root.join("with_end_only.go"),
        lines(&["package main", "// > End clean up", "func main() {}"]),
    )
    .unwrap();
    fs::write(root.join("with_start_and_end.go"), &expired).unwrap();
    fs::write(
        root.join("with_start_only.go"),
        lines(&[
            "package main",
            "// > Start clean up at 2000-01-01",
            "func main() {}",
        ]),
    )
    .unwrap();
    fs::write(root.join("README.md"), &expired).unwrap();
}

// =============================================================================
// Discovery E2E
// =============================================================================

#[test]
fn e2e_discovery_order_matches_sorted_walk() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    make_repo(root);

    let files = discover_files(root, &DiscoveryConfig::default()).unwrap();
    assert_eq!(
        files,
        vec![
            root.join("child_dir").join("child_go_file.go"),
            root.join("with_end_only.go"),
            root.join("with_start_and_end.go"),
            root.join("with_start_only.go"),
        ]
    );
}

#[test]
fn e2e_discovery_nonexistent_root_returns_error() {
    let dir = tempfile::tempdir().unwrap();
    let result = discover_files(
        &dir.path().join("invalidPath"),
        &DiscoveryConfig::default(),
    );
    assert!(
        matches!(result, Err(DiscoveryError::RootNotFound { .. })),
        "expected RootNotFound, got {result:?}"
    );
}

// =============================================================================
// Clean-up E2E
// =============================================================================

#[test]
fn e2e_cleanup_rewrites_only_complete_expired_blocks() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    make_repo(root);

    let end_only_before = fs::read_to_string(root.join("with_end_only.go")).unwrap();
    let start_only_before = fs::read_to_string(root.join("with_start_only.go")).unwrap();
    let readme_before = fs::read_to_string(root.join("README.md")).unwrap();

    let summary = run_cleanup(&config_for(root), |_| {}).unwrap();

    assert_eq!(summary.files_scanned, 4);
    assert_eq!(
        summary.files_cleaned,
        vec![
            root.join("child_dir").join("child_go_file.go"),
            root.join("with_start_and_end.go"),
        ]
    );

    let cleaned = lines(&["package main", "func main() {}"]);
    assert_eq!(
        fs::read_to_string(root.join("with_start_and_end.go")).unwrap(),
        cleaned
    );
    assert_eq!(
        fs::read_to_string(root.join("child_dir").join("child_go_file.go")).unwrap(),
        cleaned
    );

    // Orphans and non-matching files are byte-for-byte untouched.
    assert_eq!(
        fs::read_to_string(root.join("with_end_only.go")).unwrap(),
        end_only_before
    );
    assert_eq!(
        fs::read_to_string(root.join("with_start_only.go")).unwrap(),
        start_only_before
    );
    assert_eq!(fs::read_to_string(root.join("README.md")).unwrap(), readme_before);

    // Metadata directories are never visited.
    assert_ne!(
        fs::read_to_string(root.join(".git").join("objects").join("stale.go")).unwrap(),
        cleaned
    );
    assert_ne!(
        fs::read_to_string(
            root.join(".github")
                .join("workflows")
                .join("scripts")
                .join("cleanup.go")
        )
        .unwrap(),
        cleaned
    );
}

#[test]
fn e2e_second_run_is_a_no_op() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    make_repo(root);

    run_cleanup(&config_for(root), |_| {}).unwrap();
    let summary = run_cleanup(&config_for(root), |_| {}).unwrap();
    assert!(summary.files_cleaned.is_empty());
    assert_eq!(summary.blocks_removed, 0);
}

#[test]
fn e2e_future_block_loses_only_its_markers() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("flag.go");
    fs::write(
        &path,
        lines(&[
            "keep1",
            "// > Start clean up at 2999-01-01",
            "keepguarded",
            "// > End clean up",
            "keep2",
        ]),
    )
    .unwrap();

    let sweeper = Sweeper::new(MarkerSet::default(), ExpiryPolicy::Dated, today());
    let outcome = remove_expired_blocks(&path, &sweeper).unwrap();

    assert!(outcome.rewritten);
    assert_eq!(outcome.blocks_removed, 0);
    assert_eq!(
        fs::read_to_string(&path).unwrap(),
        lines(&["keep1", "keepguarded", "keep2"])
    );
}

#[test]
fn e2e_unconditional_policy_removes_every_block() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    fs::write(
        root.join("a.go"),
        lines(&["a", "> Start clean up", "b", "> End clean up", "c"]),
    )
    .unwrap();

    let config = CleanupConfig {
        policy: ExpiryPolicy::Unconditional,
        ..config_for(root)
    };
    let summary = run_cleanup(&config, |_| {}).unwrap();

    assert_eq!(summary.blocks_removed, 1);
    assert_eq!(
        fs::read_to_string(root.join("a.go")).unwrap(),
        lines(&["a", "c"])
    );
}

#[test]
fn e2e_extension_list_selects_markdown() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    make_repo(root);

    let config = CleanupConfig {
        discovery: DiscoveryConfig {
            extensions: vec![".md".to_string()],
            ..Default::default()
        },
        ..config_for(root)
    };
    let summary = run_cleanup(&config, |_| {}).unwrap();

    assert_eq!(summary.files_cleaned, vec![root.join("README.md")]);
}

#[test]
fn e2e_missing_preposition_aborts_without_modifying() {
    let dir = tempfile::tempdir().unwrap();
    let root = dir.path();
    let bad = lines(&["a", "// > Start clean up 2000-01-01", "b", "// > End clean up"]);
    fs::write(root.join("bad.go"), &bad).unwrap();

    let err = run_cleanup(&config_for(root), |_| {}).unwrap_err();
    match &err {
        CleanupError::Marker {
            line_number,
            source: MarkerError::MissingPreposition { .. },
            ..
        } => assert_eq!(*line_number, 2),
        other => panic!("expected MissingPreposition, got {other:?}"),
    }
    assert!(err.to_string().contains("\"at\" or \"on\""));
    assert_eq!(fs::read_to_string(root.join("bad.go")).unwrap(), bad);
}
