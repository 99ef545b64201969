//! CLI integration tests
use predicates::prelude::*;
use tempfile::TempDir;

const NEURIPS_SNIPPET: &str = "Recent work has demonstrated substantial gains on many NLP tasks and benchmarks";

fn cmd() -> assert_cmd::Command {
    assert_cmd::cargo::cargo_bin_cmd!("readabs")
}

fn get_fixture_path(name: &str) -> String {
    format!("../../tests/fixtures/{}", name)
}

#[test]
fn test_cli_file_input() {
    cmd()
        .arg(get_fixture_path("acm_selector.html"))
        .assert()
        .success()
        .stdout(predicate::str::starts_with("With the advent of deep learning"));
}

#[test]
fn test_cli_stdin_input() {
    let html = std::fs::read_to_string(get_fixture_path("metadata_abstract.html")).unwrap();
    cmd()
        .arg("-")
        .write_stdin(html)
        .assert()
        .success()
        .stdout(predicate::str::contains("the Transformer, based solely on attention mechanisms"));
}

#[test]
fn test_cli_snippet_correlation() {
    cmd()
        .args(["--snippet", NEURIPS_SNIPPET, "--show-source", &get_fixture_path("neurips_dynamic.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("from simple instructions."))
        .stdout(predicate::str::contains("(found via heading paragraph)"));
}

#[test]
fn test_cli_snippet_fallback() {
    cmd()
        .args(["-s", "Only the snippet survives.", &get_fixture_path("no_abstract.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("Here is the snippet:"))
        .stdout(predicate::str::contains("Only the snippet survives."));
}

#[test]
fn test_cli_no_snippet() {
    cmd()
        .arg(get_fixture_path("no_abstract.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("No abstract available."));
}

#[test]
fn test_cli_blocked_page() {
    cmd()
        .arg(get_fixture_path("security_check.html"))
        .assert()
        .success()
        .stdout(predicate::str::contains("Security Check/CAPTCHA"));
}

#[test]
fn test_cli_json_format() {
    let output = cmd()
        .args(["-f", "json", &get_fixture_path("acm_selector.html")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["kind"], "extracted");
    assert_eq!(value["outcome"]["status"], "found");
    assert_eq!(value["outcome"]["source"], "dom_selector");
    assert_eq!(value["metadata"]["doi"], "10.1145/3292500.3330701");
    assert!(value["message"].as_str().unwrap().starts_with("With the advent"));
}

#[test]
fn test_cli_pretty_json() {
    cmd()
        .args(["-f", "json", "--pretty", &get_fixture_path("security_check.html")])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"status\": \"blocked\""));
}

#[test]
fn test_cli_header() {
    cmd()
        .args(["--header", &get_fixture_path("metadata_abstract.html")])
        .assert()
        .success()
        .stdout(predicate::str::starts_with("Attention Is All You Need\n"))
        .stdout(predicate::str::contains("In: Advances in Neural Information Processing Systems"));
}

#[test]
fn test_cli_width() {
    let output = cmd()
        .args(["--width", "40", &get_fixture_path("metadata_abstract.html")])
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    assert!(stdout.lines().count() > 1);
    assert!(stdout.lines().all(|line| line.chars().count() <= 40));
}

#[test]
fn test_cli_output_file() {
    let tmp = TempDir::new().unwrap();
    let output = tmp.path().join("abstract.txt");

    cmd()
        .args(["-o", output.to_str().unwrap()])
        .arg(get_fixture_path("acm_selector.html"))
        .assert()
        .success();

    let content = std::fs::read_to_string(&output).unwrap();
    assert!(content.starts_with("With the advent of deep learning"));
}

#[test]
fn test_cli_invalid_file() {
    cmd()
        .arg("nonexistent.html")
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to read file"));
}

#[test]
fn test_cli_empty_document() {
    cmd()
        .arg(get_fixture_path("empty.html"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Document is empty"));
}

#[test]
fn test_cli_invalid_format() {
    cmd()
        .args(["-f", "markdown", &get_fixture_path("acm_selector.html")])
        .assert()
        .failure();
}

#[test]
fn test_cli_skip_dynamic_hosts() {
    cmd()
        .args([
            "--skip-dynamic-hosts",
            "-s",
            NEURIPS_SNIPPET,
            "https://proceedings.neurips.cc/paper/2020/hash/1457c0d6bfcb4967418bfb8ac142f64a-Abstract.html",
        ])
        .assert()
        .success()
        .stdout(predicate::str::contains("loaded dynamically"))
        .stdout(predicate::str::contains(NEURIPS_SNIPPET));
}

#[test]
fn test_cli_verbose() {
    cmd()
        .args(["-v", &get_fixture_path("acm_selector.html")])
        .assert()
        .success()
        .stderr(predicate::str::contains("Readabs"))
        .stderr(predicate::str::contains("Abstract found via dom selector"));
}

#[test]
fn test_cli_completions() {
    cmd()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("readabs"))
        .stdout(predicate::str::contains("--show-source"))
        .stdout(predicate::str::contains("--skip-dynamic-hosts"))
        .stdout(predicate::str::contains("--show_source").not())
        .stdout(predicate::str::contains("--user_agent").not());
}
