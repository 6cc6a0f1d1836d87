use std::{
    fs,
    path::{Path, PathBuf},
    process::{Command, Output},
};

use serde_json::Value;

const BIN: &str = env!("CARGO_BIN_EXE_card-transaction-validator");

fn input_dir() -> PathBuf {
    PathBuf::from("./resources/test-examples/inputs")
}

fn expected_dir() -> PathBuf {
    PathBuf::from("./resources/test-examples/expected")
}

fn run(input: &Path, output_dir: &Path) -> Output {
    Command::new(BIN)
        .arg(input)
        .arg(output_dir)
        .env_remove("GREEN_ZONE_DIR")
        .output()
        .unwrap()
}

fn read_lines(path: &Path) -> Vec<Value> {
    fs::read_to_string(path)
        .unwrap()
        .lines()
        .map(|line| serde_json::from_str(line).unwrap())
        .collect()
}

fn error_fields(record: &Value) -> Vec<String> {
    record["errors"]
        .as_array()
        .unwrap()
        .iter()
        .map(|e| e["field"].as_str().unwrap().to_string())
        .collect()
}

#[test]
fn example_files() {
    let mut entries: Vec<PathBuf> = fs::read_dir(input_dir())
        .unwrap()
        .map(|entry| entry.unwrap().path())
        .collect();
    entries.sort();

    for input_file in entries {
        let stem = input_file.file_stem().unwrap().to_str().unwrap().to_string();
        let expected_file = expected_dir().join(format!("{stem}_valid.jsonl"));

        println!("Testing input: {input_file:?}");
        println!("Expected: {expected_file:?}");

        let output_dir = tempfile::tempdir().unwrap();
        let output = run(&input_file, output_dir.path());

        println!("{}", String::from_utf8(output.stderr).unwrap());
        assert!(output.status.success());

        let actual = fs::read_to_string(output_dir.path().join(format!("{stem}_valid.jsonl"))).unwrap();
        let expected = fs::read_to_string(expected_file).unwrap();

        assert_eq!(actual, expected);
    }
}

#[test]
fn three_row_file_is_partitioned() {
    let output_dir = tempfile::tempdir().unwrap();
    let output = run(&input_dir().join("card_transaction_2025-11-10.csv"), output_dir.path());

    assert!(output.status.success());

    let summary: Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(summary["valid_count"], 1);
    assert_eq!(summary["invalid_count"], 2);
    assert_eq!(summary["date"], "2025-11-10");

    let valid = read_lines(&output_dir.path().join("card_transaction_2025-11-10_valid.jsonl"));
    let invalid = read_lines(&output_dir.path().join("card_transaction_2025-11-10_invalid.jsonl"));

    assert_eq!(valid.len(), 1);
    assert_eq!(valid[0]["id"], "tx-1");
    assert_eq!(valid[0]["amount"], 100);

    assert_eq!(invalid.len(), 2);
    assert_eq!(invalid[0]["id"], "");
    assert_eq!(error_fields(&invalid[0]), vec!["id", "amount"]);
    assert_eq!(invalid[1]["id"], "tx-3");
    assert_eq!(error_fields(&invalid[1]), vec!["currency"]);
}

#[test]
fn every_rule_reported() {
    let output_dir = tempfile::tempdir().unwrap();
    let output = run(&input_dir().join("card_transaction_2025-11-11.csv"), output_dir.path());

    assert!(output.status.success());

    let invalid = read_lines(&output_dir.path().join("card_transaction_2025-11-11_invalid.jsonl"));

    let ids: Vec<&str> = invalid.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["tx-11", "tx-12", "tx-13", "tx-14", "tx-15"]);

    let messages: Vec<&str> = invalid
        .iter()
        .map(|r| r["errors"][0]["message"].as_str().unwrap())
        .collect();

    assert!(messages[0].starts_with("EnumError"));
    assert!(messages[1].starts_with("TypeError"));
    assert!(messages[2].starts_with("TimezoneError"));
    assert!(messages[3].starts_with("FormatError"));
    assert!(messages[4].starts_with("MissingField"));

    assert_eq!(
        error_fields(&invalid[4]),
        vec!["organization_id", "status", "created_at"]
    );
    // raw cells are carried through untouched
    assert_eq!(invalid[1]["amount"], "abc");
    assert_eq!(invalid[4]["organization_id"], " ");
}

#[test]
fn iso8601_forms_and_large_amounts_are_valid() {
    let output_dir = tempfile::tempdir().unwrap();
    let output = run(&input_dir().join("card_transaction_2025-11-11.csv"), output_dir.path());

    assert!(output.status.success());

    let valid = read_lines(&output_dir.path().join("card_transaction_2025-11-11_valid.jsonl"));

    let ids: Vec<&str> = valid.iter().map(|r| r["id"].as_str().unwrap()).collect();
    assert_eq!(ids, vec!["tx-10", "tx-16", "tx-17", "tx-18"]);

    assert_eq!(valid[2]["created_at"], "2025-11-11T12:30:00Z");
    assert_eq!(valid[3]["created_at"], "2025-11-11T12:30:00Z");
    assert_eq!(valid[3]["amount"], 10_000_000_000_000_000_000u64);
}

#[test]
fn reruns_are_identical() {
    let input_file = input_dir().join("card_transaction_2025-11-11.csv");

    let first = tempfile::tempdir().unwrap();
    let second = tempfile::tempdir().unwrap();

    assert!(run(&input_file, first.path()).status.success());
    assert!(run(&input_file, second.path()).status.success());

    for name in [
        "card_transaction_2025-11-11_valid.jsonl",
        "card_transaction_2025-11-11_invalid.jsonl",
    ] {
        assert_eq!(
            fs::read(first.path().join(name)).unwrap(),
            fs::read(second.path().join(name)).unwrap()
        );
    }
}

#[test]
fn output_dir_from_environment() {
    let input_file = input_dir().join("card_transaction_2025-11-10.csv");
    let output_dir = tempfile::tempdir().unwrap();

    let output = Command::new(BIN)
        .arg(&input_file)
        .env("GREEN_ZONE_DIR", output_dir.path())
        .output()
        .unwrap();

    assert!(output.status.success());
    assert!(output_dir
        .path()
        .join("card_transaction_2025-11-10_valid.jsonl")
        .exists());
    assert!(output_dir
        .path()
        .join("card_transaction_2025-11-10_invalid.jsonl")
        .exists());
}

#[test]
fn missing_input_fails() {
    let output_dir = tempfile::tempdir().unwrap();
    let output = run(Path::new("./resources/nope/card_transaction_2025-01-01.csv"), output_dir.path());

    assert!(!output.status.success());
    assert!(fs::read_dir(output_dir.path()).unwrap().next().is_none());
}

#[test]
fn missing_columns_fail() {
    let input_dir = tempfile::tempdir().unwrap();
    let input_file = input_dir.path().join("card_transaction_2025-11-12.csv");
    fs::write(&input_file, "id,amount\ntx,1\n").unwrap();

    let output_dir = tempfile::tempdir().unwrap();
    let output = run(&input_file, output_dir.path());

    assert!(!output.status.success());

    let stderr = String::from_utf8(output.stderr).unwrap();
    assert!(stderr.contains("missing required columns"));
}
