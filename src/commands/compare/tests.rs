//! Tests for compare report shaping.

use super::report::*;
use crate::github::{ChangedFile, Comparison};

fn changed_file(filename: &str, patch: Option<&str>) -> ChangedFile {
    ChangedFile {
        filename: filename.to_string(),
        status: "modified".to_string(),
        additions: 1,
        deletions: 1,
        changes: 2,
        patch: patch.map(str::to_string),
    }
}

fn comparison(files: Vec<ChangedFile>) -> Comparison {
    Comparison {
        status: "ahead".to_string(),
        ahead_by: 2,
        behind_by: 0,
        total_commits: 2,
        files,
    }
}

#[test]
fn summary_carries_the_upstream_fields() {
    let report = build_report(comparison(vec![]), None);
    assert_eq!(report.summary.status, "ahead");
    assert_eq!(report.summary.ahead_by, 2);
    assert_eq!(report.summary.behind_by, 0);
    assert_eq!(report.summary.total_commits, 2);
    assert!(report.files.is_empty());
}

#[test]
fn patches_are_parsed_and_metadata_is_merged() {
    let cmp = comparison(vec![changed_file(
        "src/lib.rs",
        Some("@@ -1,2 +1,2 @@\n a\n-b\n+c"),
    )]);

    let report = build_report(cmp, None);
    assert_eq!(report.files.len(), 1);

    let file = &report.files[0];
    assert_eq!(file.filename, "src/lib.rs");
    assert_eq!(file.status, "modified");
    assert_eq!(file.changes, 2);
    // The raw fragment is relayed untouched.
    assert_eq!(file.patch.as_deref(), Some("@@ -1,2 +1,2 @@\n a\n-b\n+c"));

    // The parser saw the synthesized header, so the single parsed entry
    // carries this file's name.
    assert_eq!(file.parsed_patch.len(), 1);
    assert_eq!(file.parsed_patch[0].filename, "src/lib.rs");
    assert_eq!(file.parsed_patch[0].hunks.len(), 1);
    assert_eq!(
        file.parsed_patch[0].hunks[0].lines,
        vec![" a", "-b", "+c"]
    );
}

/// Binary and oversized files have no patch; they stay in the report with
/// an empty parsed list rather than being dropped.
#[test]
fn null_patch_files_are_kept_with_empty_parse() {
    let cmp = comparison(vec![
        changed_file("assets/logo.png", None),
        changed_file("src/lib.rs", Some("@@ -1 +1 @@\n-a\n+b")),
    ]);

    let report = build_report(cmp, None);
    assert_eq!(report.files.len(), 2);
    assert_eq!(report.files[0].filename, "assets/logo.png");
    assert_eq!(report.files[0].patch, None);
    assert!(report.files[0].parsed_patch.is_empty());
}

#[test]
fn file_order_matches_upstream_order() {
    let cmp = comparison(vec![
        changed_file("zz.rs", None),
        changed_file("aa.rs", None),
        changed_file("mm.rs", None),
    ]);

    let report = build_report(cmp, None);
    let names: Vec<_> = report.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["zz.rs", "aa.rs", "mm.rs"]);
}

#[test]
fn raw_body_is_included_only_on_request() {
    let raw = serde_json::json!({"status": "ahead", "html_url": "..."});
    let with_raw = build_report(comparison(vec![]), Some(raw.clone()));
    assert_eq!(with_raw.raw, Some(raw));

    let without = build_report(comparison(vec![]), None);
    assert_eq!(without.raw, None);

    // And the field disappears entirely from the serialized report.
    let value = serde_json::to_value(&without).unwrap();
    assert!(value.get("raw").is_none());
}

#[test]
fn report_serializes_with_the_camel_case_parsed_field() {
    let cmp = comparison(vec![changed_file("f.rs", Some("@@ -1 +1 @@\n-a\n+b"))]);
    let value = serde_json::to_value(build_report(cmp, None)).unwrap();

    let file = &value["files"][0];
    assert!(file.get("parsedPatch").is_some());
    assert!(file.get("parsed_patch").is_none());
    assert_eq!(file["parsedPatch"][0]["hunks"][0]["oldStart"], 1);
}

#[test]
fn path_filter_keeps_only_matching_files() {
    let filter = build_path_filter(&["src/**".to_string()]).unwrap().unwrap();
    let cmp = filter_files(
        comparison(vec![
            changed_file("src/lib.rs", None),
            changed_file("docs/guide.md", None),
            changed_file("src/patch/parser.rs", None),
        ]),
        &filter,
    );

    let names: Vec<_> = cmp.files.iter().map(|f| f.filename.as_str()).collect();
    assert_eq!(names, vec!["src/lib.rs", "src/patch/parser.rs"]);
}

#[test]
fn no_patterns_means_no_filter() {
    assert!(build_path_filter(&[]).unwrap().is_none());
}

#[test]
fn invalid_glob_is_a_user_error() {
    let err = build_path_filter(&["src/{**".to_string()]).unwrap_err();
    assert!(err.to_string().contains("invalid glob pattern"));
}
