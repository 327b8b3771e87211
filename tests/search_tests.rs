//! End-to-end search over small source trees

mod common;

use common::TestRepo;
use sigsearch::{
    search, CapabilityRegistry, MatchMode, SearchOptions, SigSearchError, TruncationPolicy,
};

const DRIVE_GO: &str = r#"package drive

type Path string
type DrivePath struct{}

func Foo(a int, b string) (bool, error) {
	return true, nil
}

func Resolve(p Path) (*DrivePath, error) {
	return nil, nil
}

func Open(name string) (*File, error) {
	return nil, nil
}

func Count(items []byte) int {
	return len(items)
}
"#;

fn registry() -> CapabilityRegistry {
    CapabilityRegistry::with_defaults().unwrap()
}

fn names(report: &sigsearch::SearchReport) -> Vec<&str> {
    report.results.iter().map(|r| r.record.name.as_str()).collect()
}

#[test]
fn test_exact_signature_ranks_first_with_zero_distance() {
    let repo = TestRepo::new().with_file("drive.go", DRIVE_GO);

    let report = search(
        "(int, string) -> (bool, error)",
        repo.path(),
        &SearchOptions::default(),
        &registry(),
        None,
    )
    .unwrap();

    let first = &report.results[0];
    assert_eq!(first.record.name, "Foo");
    assert_eq!(first.distance, 0);
    assert_eq!(first.record.args, vec!["int", "string"]);
    assert_eq!(first.record.rets, vec!["bool", "error"]);
    assert_eq!(report.functions_extracted, 4);
}

#[test]
fn test_includes_mode_matches_substring_types() {
    let repo = TestRepo::new().with_file("drive.go", DRIVE_GO);
    let options = SearchOptions {
        mode: MatchMode::Includes,
        ..SearchOptions::default()
    };

    let report = search("(Path) -> (Path)", repo.path(), &options, &registry(), None).unwrap();
    assert_eq!(names(&report), vec!["Resolve"]);
    assert_eq!(report.results[0].record.rets, vec!["*DrivePath", "error"]);
}

#[test]
fn test_includes_mode_treats_brackets_literally() {
    let repo = TestRepo::new().with_file("drive.go", DRIVE_GO);
    let options = SearchOptions {
        mode: MatchMode::Includes,
        ..SearchOptions::default()
    };

    let report = search("([]byte) -> (int)", repo.path(), &options, &registry(), None).unwrap();
    assert_eq!(names(&report), vec!["Count"]);
}

#[test]
fn test_invalid_query_is_fatal() {
    let repo = TestRepo::new().with_file("drive.go", DRIVE_GO);
    let err = search(
        "(int) (bool)",
        repo.path(),
        &SearchOptions::default(),
        &registry(),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, SigSearchError::InvalidQuery { .. }));
}

#[test]
fn test_ties_follow_file_discovery_order() {
    let same = "package p\nfunc Same(x int) error { return nil }\n";
    let repo = TestRepo::new()
        .with_file("c.go", same)
        .with_file("a.go", same)
        .with_file("b/b.go", same);

    let options = SearchOptions {
        jobs: 3,
        ..SearchOptions::default()
    };
    let report = search("(int) -> (error)", repo.path(), &options, &registry(), None).unwrap();

    let paths: Vec<String> = report
        .results
        .iter()
        .map(|r| r.record.path.replace('\\', "/"))
        .collect();
    assert_eq!(paths.len(), 3);
    assert!(paths[0].ends_with("/a.go"));
    assert!(paths[1].ends_with("/b/b.go"));
    assert!(paths[2].ends_with("/c.go"));
}

#[test]
fn test_unregistered_language_is_skipped_not_fatal() {
    let repo = TestRepo::new()
        .with_file("lib.rs", "fn parse(input: &str) -> bool { true }\n")
        .with_file("main.go", "package main\nfunc Parse(input string) bool { return true }\n");

    let mut go_only = CapabilityRegistry::new();
    go_only.register(Box::new(
        sigsearch::QueryCapability::for_lang(sigsearch::Lang::Go).unwrap(),
    ));

    let report = search(
        "(string) -> (bool)",
        repo.path(),
        &SearchOptions::default(),
        &go_only,
        None,
    )
    .unwrap();

    assert_eq!(names(&report), vec!["Parse"]);
    assert_eq!(report.failures.len(), 1);
    assert!(matches!(
        report.failures[0].error,
        SigSearchError::UnsupportedLanguage { .. }
    ));
}

#[test]
fn test_mixed_languages_are_ranked_together() {
    let repo = TestRepo::new()
        .with_file("a.go", "package p\nfunc GoLen(s string) int { return 0 }\n")
        .with_file("b.rs", "fn rs_len(s: String) -> usize { 0 }\n")
        .with_file("c.py", "def py_len(s: str) -> int:\n    return 0\n");

    let report = search(
        "(string) -> (int)",
        repo.path(),
        &SearchOptions::default(),
        &registry(),
        None,
    )
    .unwrap();

    assert_eq!(report.files_scanned, 3);
    assert_eq!(report.results[0].record.name, "GoLen");
    assert_eq!(report.results[0].distance, 0);
    assert_eq!(report.results.len(), 3);
}

#[test]
fn test_truncation_applies_across_a_large_tree() {
    let mut repo = TestRepo::new();
    for i in 0..20 {
        let body = format!(
            "package p\nfunc Far{i}(a map[string]interface{{}}, b chan struct{{}}, c func()) (uintptr, complex128, rune) {{ return 0, 0, 0 }}\n"
        );
        repo = repo.with_file(&format!("f{i:02}.go"), &body);
    }

    let report = search(
        "(int) -> (bool)",
        repo.path(),
        &SearchOptions::default(),
        &registry(),
        None,
    )
    .unwrap();
    assert!(report.results.iter().all(|r| r.distance > 30));
    assert_eq!(report.results.len(), 12);

    let unbounded = SearchOptions {
        truncation: TruncationPolicy::unbounded(),
        ..SearchOptions::default()
    };
    let report = search("(int) -> (bool)", repo.path(), &unbounded, &registry(), None).unwrap();
    assert_eq!(report.results.len(), 20);
}

#[test]
fn test_missing_root_reports_file_not_found() {
    let repo = TestRepo::new();
    let err = search(
        "(int) -> (bool)",
        &repo.join("nope"),
        &SearchOptions::default(),
        &registry(),
        None,
    )
    .unwrap_err();
    assert!(matches!(err, SigSearchError::FileNotFound { .. }));
}
