use predicates::prelude::*;
use tempfile::TempDir;

use super::common::{ONE_TO_SIX_CONSECUTIVE_EVEN, combo_filter, write_file};

#[test]
fn json_profile_drives_the_run() {
    let dir = TempDir::new().unwrap();
    let profile = write_file(
        dir.path(),
        "form.json",
        r#"{
            "start": 1,
            "end": 6,
            "combinationSize": 3,
            "excludedNumber": "",
            "filters": {
                "excludeThreeConsecutiveNumbers": true,
                "excludeAllEvenNumbers": true,
                "excludeAllOddNumbers": false
            }
        }"#,
    );
    combo_filter()
        .arg("--profile")
        .arg(&profile)
        .assert()
        .success()
        .stdout(ONE_TO_SIX_CONSECUTIVE_EVEN);
}

#[test]
fn flags_override_the_profile() {
    let dir = TempDir::new().unwrap();
    let profile = write_file(
        dir.path(),
        "form.json",
        r#"{ "start": 1, "end": 6, "size": 3, "excludedNumber": 4 }"#,
    );
    combo_filter()
        .arg("--profile")
        .arg(&profile)
        .args(["--end", "4", "-x", "1"])
        .assert()
        .success()
        .stdout("2,3,4\n");
}

#[test]
fn unknown_profile_fields_are_rejected() {
    let dir = TempDir::new().unwrap();
    let profile = write_file(dir.path(), "form.json", r#"{ "stat": 1 }"#);
    combo_filter()
        .arg("--profile")
        .arg(&profile)
        .assert()
        .failure()
        .stderr(predicate::str::contains("form.json"));
}

#[test]
fn missing_profile_fails() {
    let dir = TempDir::new().unwrap();
    combo_filter()
        .arg("--profile")
        .arg(dir.path().join("absent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("absent.json"));
}

#[cfg(feature = "yaml")]
#[test]
fn yaml_profile_drives_the_run() {
    let dir = TempDir::new().unwrap();
    let profile = write_file(
        dir.path(),
        "form.yaml",
        "start: 1\nend: 6\nsize: 3\nfilters:\n  excludeThreeConsecutiveNumbers: true\n  excludeAllEvenNumbers: true\n",
    );
    combo_filter()
        .arg("--profile")
        .arg(&profile)
        .assert()
        .success()
        .stdout(ONE_TO_SIX_CONSECUTIVE_EVEN);
}
