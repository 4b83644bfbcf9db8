use std::fs;

use predicates::prelude::*;
use serde_json::Value;
use tempfile::TempDir;

use super::common::{ONE_TO_SIX_CONSECUTIVE_EVEN, combo_filter};

const ONE_TO_SIX: [&str; 6] = ["--start", "1", "--end", "6", "-f", "three-consecutive,all-even"];

#[test]
fn save_writes_the_download_name_into_the_working_directory() {
    let dir = TempDir::new().unwrap();
    combo_filter()
        .current_dir(dir.path())
        .args(ONE_TO_SIX)
        .arg("--save")
        .assert()
        .success()
        .stdout("");
    let written = fs::read_to_string(dir.path().join("filtered_combinations.csv")).unwrap();
    assert_eq!(written, ONE_TO_SIX_CONSECUTIVE_EVEN);
}

#[test]
fn tsv_uses_tabs() {
    combo_filter()
        .args(["--start", "1", "--end", "4", "--format", "tsv"])
        .assert()
        .success()
        .stdout("1\t2\t3\n1\t2\t4\n1\t3\t4\n2\t3\t4\n");
}

#[test]
fn json_document_to_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.json");
    combo_filter()
        .args(ONE_TO_SIX)
        .args(["--format", "json", "-o"])
        .arg(&path)
        .assert()
        .success();

    let value: Value = serde_json::from_str(&fs::read_to_string(&path).unwrap()).unwrap();
    assert_eq!(value["parameters"]["start"], 1);
    assert_eq!(value["parameters"]["end"], 6);
    assert_eq!(value["parameters"]["filters"]["excludeAllEvenNumbers"], true);
    let combinations = value["combinations"].as_array().unwrap();
    assert_eq!(combinations.len(), 15);
    assert_eq!(combinations[0], serde_json::json!([1, 2, 4]));
    assert_eq!(value["summary"]["generated"], 20);
    assert_eq!(value["summary"]["kept"], 15);
}

#[test]
fn jsonl_is_one_array_per_line() {
    combo_filter()
        .args(["--start", "1", "--end", "4", "--format", "jsonl"])
        .assert()
        .success()
        .stdout("[1,2,3]\n[1,2,4]\n[1,3,4]\n[2,3,4]\n");
}

#[test]
fn markdown_and_table_render() {
    combo_filter()
        .args(["--start", "1", "--end", "4", "--format", "md"])
        .assert()
        .success()
        .stdout(predicate::str::contains("#1"))
        .stdout(predicate::str::contains("| 2 | 3 | 4 |"));
    combo_filter()
        .args(["--start", "1", "--end", "4", "--format", "table"])
        .assert()
        .success()
        .stdout(predicate::str::contains("4 combinations"));
}

#[test]
fn xlsx_needs_a_file() {
    combo_filter()
        .args(["--format", "xlsx"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--output or --save"));
}

#[cfg(feature = "xlsx")]
#[test]
fn xlsx_workbook_holds_the_rows() {
    use super::common::{cell_value, read_xlsx_part};

    let dir = TempDir::new().unwrap();
    combo_filter()
        .current_dir(dir.path())
        .args(ONE_TO_SIX)
        .args(["--format", "xlsx", "--save"])
        .assert()
        .success();
    let bytes = fs::read(dir.path().join("filtered_combinations.xlsx")).unwrap();

    let workbook = read_xlsx_part(&bytes, "xl/workbook.xml");
    assert_eq!(workbook.matches("<sheet ").count(), 1);
    assert!(workbook.contains("name=\"Combinations\""));

    let sheet = read_xlsx_part(&bytes, "xl/worksheets/sheet1.xml");
    assert_eq!(cell_value(&sheet, "A1"), Some("1"));
    assert_eq!(cell_value(&sheet, "B1"), Some("2"));
    assert_eq!(cell_value(&sheet, "C1"), Some("4"));
    assert_eq!(cell_value(&sheet, "C15"), Some("6"));
    assert_eq!(cell_value(&sheet, "A16"), None);
}

#[cfg(not(feature = "xlsx"))]
#[test]
fn unavailable_format_creates_no_file() {
    let dir = TempDir::new().unwrap();
    combo_filter()
        .current_dir(dir.path())
        .args(ONE_TO_SIX)
        .args(["--format", "xlsx", "--save"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("`xlsx` feature"));
    assert!(!dir.path().join("filtered_combinations.xlsx").exists());
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 0);
}

#[cfg(not(feature = "xlsx"))]
#[test]
fn unavailable_format_keeps_an_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("filtered_combinations.xlsx");
    fs::write(&path, b"earlier export").unwrap();
    combo_filter()
        .current_dir(dir.path())
        .args(["--format", "xlsx", "--save"])
        .assert()
        .failure();
    assert_eq!(fs::read(&path).unwrap(), b"earlier export");
}

#[test]
fn refused_run_keeps_an_existing_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("out.csv");
    fs::write(&path, "1,2,3\n").unwrap();
    combo_filter()
        .args(["--end", "49", "--size", "6", "--max-combinations", "10", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing"));
    assert_eq!(fs::read_to_string(&path).unwrap(), "1,2,3\n");
    assert_eq!(fs::read_dir(dir.path()).unwrap().count(), 1);
}

#[test]
fn output_to_missing_directory_fails_with_path() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.csv");
    combo_filter()
        .arg("-o")
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"))
        .stderr(predicate::str::contains("out.csv"));
}

#[test]
fn unwritable_output_is_reported_before_enumerating() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("missing").join("out.csv");
    // the size guard would refuse this run, so the error proves the order
    combo_filter()
        .args(["--end", "49", "--size", "6", "--max-combinations", "10", "-o"])
        .arg(&path)
        .assert()
        .failure()
        .stderr(predicate::str::contains("failed to open"))
        .stderr(predicate::str::contains("Refusing").not());
}
