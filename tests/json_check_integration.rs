use implus_tools::{check_json_files, JsonCheckConfig, JsonIssue};

#[path = "integration/mod.rs"]
mod test_utils;
use test_utils::TestFixture;

/// A tree of valid layout files passes
#[tokio::test]
async fn test_check_valid_tree() {
    let fixture = TestFixture::new();
    fixture.create_file("app/src/main/assets/layouts/qwerty.json", br#"{"rows": [["q", "w"]]}"#);
    fixture.create_file("app/src/main/assets/languages/en/config.json", br#"{"id": "en"}"#);

    let summary = check_json_files(&fixture.root_path, JsonCheckConfig::default())
        .await
        .expect("Check should succeed");

    assert_eq!(summary.files_checked, 2);
    assert!(!summary.has_errors());
}

/// A broken file is reported with its line number
#[tokio::test]
async fn test_check_reports_syntax_error_line() {
    let fixture = TestFixture::new();
    let broken = fixture.create_file("layouts/broken.json", b"{\n  \"a\": 1,\n  \"b\": [1, 2,]\n}\n");

    let summary = check_json_files(&fixture.root_path, JsonCheckConfig::default())
        .await
        .expect("Check should succeed");

    assert_eq!(summary.issues.len(), 1);
    match &summary.issues[0] {
        JsonIssue::Syntax { path, line, .. } => {
            assert_eq!(path, &broken);
            assert_eq!(*line, 3);
        }
        other => panic!("expected syntax issue, got {other:?}"),
    }
}

/// Build output and VCS directories are never inspected
#[tokio::test]
async fn test_check_skips_build_directories() {
    let fixture = TestFixture::new();
    fixture.create_file("app/build/intermediates/bad.json", b"{");
    fixture.create_file(".git/info.json", b"{");
    fixture.create_file(".gradle_data/x.json", b"{");
    fixture.create_file("ok.json", b"[]");

    let summary = check_json_files(&fixture.root_path, JsonCheckConfig::default())
        .await
        .expect("Check should succeed");

    assert_eq!(summary.files_checked, 1);
    assert!(!summary.has_errors());
}

/// Extra skip directories are honoured
#[tokio::test]
async fn test_check_custom_skip_dirs() {
    let fixture = TestFixture::new();
    fixture.create_file("vendor/bad.json", b"{");

    let mut config = JsonCheckConfig::default();
    config.skip_dirs.push("vendor".to_string());

    let summary = check_json_files(&fixture.root_path, config)
        .await
        .expect("Check should succeed");

    assert_eq!(summary.files_checked, 0);
}

/// Root path pointing at a file is rejected
#[tokio::test]
async fn test_check_root_is_file() {
    let fixture = TestFixture::new();
    let file = fixture.create_file("single.json", b"{}");

    let result = check_json_files(&file, JsonCheckConfig::default()).await;
    assert!(result.is_err());
}
