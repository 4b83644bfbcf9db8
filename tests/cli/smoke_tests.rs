use predicates::prelude::*;

use super::common::{ONE_TO_SIX_CONSECUTIVE_EVEN, combo_filter};

#[test]
fn shows_help() {
    combo_filter()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("combo_filter"))
        .stdout(predicate::str::contains("--exclude-number"));
}

#[test]
fn default_run_lists_all_of_twenty_choose_three() {
    let output = combo_filter().assert().success().get_output().stdout.clone();
    let text = String::from_utf8(output).unwrap();
    assert_eq!(text.lines().count(), 1140);
    assert_eq!(text.lines().next(), Some("1,2,3"));
    assert_eq!(text.lines().last(), Some("18,19,20"));
}

#[test]
fn consecutive_and_even_in_one_to_six() {
    combo_filter()
        .args(["--start", "1", "--end", "6", "--size", "3"])
        .args(["-f", "three-consecutive,all-even"])
        .assert()
        .success()
        .stdout(ONE_TO_SIX_CONSECUTIVE_EVEN);
}

#[test]
fn adding_all_odd_leaves_nothing() {
    combo_filter()
        .args(["--start", "1", "--end", "6", "--size", "3"])
        .args(["-f", "excludeThreeConsecutiveNumbers", "-f", "all-even", "-f", "all-odd"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn excluded_number_applies_without_filters() {
    combo_filter()
        .args(["--start", "1", "--end", "3", "--size", "3", "-x", "2"])
        .assert()
        .success()
        .stdout("");
    combo_filter()
        .args(["--start", "1", "--end", "4", "--size", "3", "-x", "2"])
        .assert()
        .success()
        .stdout("1,3,4\n");
}

#[test]
fn size_zero_is_one_empty_row() {
    combo_filter()
        .args(["--start", "1", "--end", "5", "--size", "0"])
        .assert()
        .success()
        .stdout("\n");
}

#[test]
fn inverted_range_is_empty() {
    combo_filter()
        .args(["--start", "9", "--end", "1"])
        .assert()
        .success()
        .stdout("");
}

#[test]
fn negative_ranges() {
    combo_filter()
        .args(["--start", "-2", "--end", "0", "--size", "2"])
        .assert()
        .success()
        .stdout("-2,-1\n-2,0\n-1,0\n");
}

#[test]
fn lists_filters() {
    combo_filter()
        .arg("--list-filters")
        .assert()
        .success()
        .stdout(predicate::str::contains("excludeThreenumbersInRangeBetween10to19"))
        .stdout(predicate::str::contains("three-in-range-of-five"));
}

#[test]
fn unknown_filter_is_rejected() {
    combo_filter()
        .args(["-f", "exclude-everything"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("--list-filters"));
}

#[test]
fn size_guard_refuses_huge_runs() {
    combo_filter()
        .args(["--end", "49", "--size", "6", "--max-combinations", "1_000"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Refusing to enumerate 13983816"));
}

#[test]
fn summary_goes_to_stderr() {
    combo_filter()
        .args(["--start", "1", "--end", "6", "-f", "all-even,three-consecutive", "--summary"])
        .assert()
        .success()
        .stdout(ONE_TO_SIX_CONSECUTIVE_EVEN)
        .stderr(predicate::str::contains("20  generated"))
        .stderr(predicate::str::contains("1  rejected by excludeAllEvenNumbers"))
        .stderr(predicate::str::contains("4  rejected by excludeThreeConsecutiveNumbers"))
        .stderr(predicate::str::contains("15  kept"));
}

#[test]
fn verbose_logs_do_not_pollute_stdout() {
    combo_filter()
        .args(["--start", "1", "--end", "6", "-f", "all-even,three-consecutive", "-vv"])
        .assert()
        .success()
        .stdout(ONE_TO_SIX_CONSECUTIVE_EVEN)
        .stderr(predicate::str::contains("kept 15 of 20"));
}
