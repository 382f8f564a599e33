use assert_cmd::Command;
use predicates::prelude::*;
use tempfile::TempDir;

fn cardstock() -> Command {
    Command::cargo_bin("cardstock").expect("cardstock binary")
}

fn write_fixture(dir: &TempDir, json: &str) -> std::path::PathBuf {
    let path = dir.path().join("content.json");
    std::fs::write(&path, json).expect("write fixture");
    path
}

const VALID_DOCUMENT: &str = r##"{
    "title": "Week 12 trading recap",
    "slides": [
        {"heading": "Open", "content": "SPY +1.1% into the close"},
        {"heading": "Middle", "content": "TSLA -4.5% after earnings"},
        {"heading": "Close", "content": "flat week overall"}
    ],
    "tags": ["#trading", "#journal"],
    "caption": "Week 12, in three cards."
}"##;

#[test]
fn no_arguments_prints_usage_and_exits_nonzero() {
    cardstock()
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn single_argument_is_rejected() {
    cardstock()
        .arg("content.json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Usage"));
}

#[test]
fn missing_document_exits_nonzero_with_context() {
    let out = TempDir::new().unwrap();
    cardstock()
        .arg("does-not-exist.json")
        .arg(out.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to load content document"));
}

#[test]
fn document_without_slides_exits_nonzero() {
    let dir = TempDir::new().unwrap();
    let content = write_fixture(
        &dir,
        r#"{"title": "t", "slides": [], "tags": [], "caption": "c"}"#,
    );
    let out = dir.path().join("out");
    cardstock()
        .arg(&content)
        .arg(&out)
        .assert()
        .failure()
        .stderr(predicate::str::contains("no slides"));
}

#[test]
fn full_pipeline_writes_artifacts_and_summary() {
    let dir = TempDir::new().unwrap();
    let content = write_fixture(&dir, VALID_DOCUMENT);
    let out = dir.path().join("2024-03-15-week-12");

    cardstock()
        .arg(&content)
        .arg(&out)
        .assert()
        .success()
        .stdout(predicate::str::contains("Rendering 3 slides"))
        .stdout(predicate::str::contains("Week 12 trading recap"))
        .stdout(predicate::str::contains("slide_3.png"))
        .stdout(predicate::str::contains("#trading #journal"));

    for page in 1..=3 {
        assert!(out.join(format!("slide_{page}.png")).exists(), "slide_{page}.png missing");
    }

    let raw = std::fs::read_to_string(out.join("metadata.json")).expect("manifest");
    let manifest: serde_json::Value = serde_json::from_str(&raw).expect("parse manifest");
    assert_eq!(manifest["slides_count"], 3);
    assert_eq!(
        manifest["images"],
        serde_json::json!(["slide_1.png", "slide_2.png", "slide_3.png"])
    );
}
