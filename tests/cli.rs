use assert_cmd::Command;
use predicates::prelude::*;

const FIXTURE: &str = concat!(env!("CARGO_MANIFEST_DIR"), "/tests/fixtures/records.json");

fn hade() -> Command {
    let mut cmd = Command::cargo_bin("hade").unwrap();
    cmd.env("HADE_DATA", FIXTURE).env_remove("RUST_LOG");
    cmd
}

#[test]
fn no_arguments_prints_help() {
    hade()
        .assert()
        .success()
        .stdout(predicate::str::contains("HTTPArchive DOM Explorer"))
        .stdout(predicate::str::contains("crawl of 3,000 websites"));
}

#[test]
fn help_flag_skips_pipeline() {
    hade()
        .args(["(body", "--help"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Matching types available:"));
}

#[test]
fn exact_body_both_clients_most_used_first() {
    hade()
        .args(["body", "-t", "exact"])
        .assert()
        .success()
        .stdout("<body> [mobile] 99.25% (1985/2000)\n<body> [desktop] 99.00% (990/1000)\n");
}

#[test]
fn starts_with_alphabetical_csv() {
    hade()
        .args(["modal-", "-t", "startsWith", "-s", "alphabetical", "-o", "csv"])
        .assert()
        .success()
        .stdout(
            "Tag Name, Data set, Percentage, Pages Seen, Pages Crawled\n\
             \"modal-header\",\"desktop\",\"1.20\",\"12\",\"1000\"\n",
        );
}

#[test]
fn csv_escapes_quotes() {
    hade()
        .args(["a\"b", "-t", "exact", "-o", "csv"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""a""b","desktop""#));
}

#[test]
fn json_output_parses_back() {
    let output = hade()
        .args(["body", "-t", "exact", "-d", "-o", "json"])
        .output()
        .unwrap();
    assert!(output.status.success());
    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(
        value,
        serde_json::json!([{
            "element": "body",
            "client": "mobile",
            "pages": "1985",
            "totalPages": "2000",
            "pct": "99.25"
        }])
    );
}

#[test]
fn no_match_prints_nothing() {
    hade()
        .args(["marquee", "-o", "json"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn invalid_option_values_fall_back_silently() {
    hade()
        .args(["div", "-t", "fuzzy", "-o", "xml", "-s", "random"])
        .assert()
        .success()
        .stdout("<div> [mobile] 95.00% (1900/2000)\n")
        .stderr("");
}

#[test]
fn malformed_pattern_fails() {
    hade()
        .arg("(body")
        .assert()
        .code(2)
        .stdout("")
        .stderr(predicate::str::starts_with("Error: Invalid regular expression /(body/"));
}

#[test]
fn malformed_pattern_json_envelope() {
    hade()
        .args(["div/q", "-o", "json"])
        .assert()
        .code(2)
        .stderr(predicate::str::contains("\"code\": \"malformed_pattern\""));
}

#[test]
fn missing_dataset_fails() {
    hade()
        .env("HADE_DATA", "/nonexistent/hade.json")
        .arg("body")
        .assert()
        .code(1)
        .stderr(predicate::str::contains("Cannot read dataset"));
}
