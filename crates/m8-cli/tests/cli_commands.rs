//! Integration tests for the `m8` command-line interface.
#![allow(deprecated)] // Command::cargo_bin – macro replacement not yet stable

use assert_cmd::Command;
use m8_oracle::{AnswerCatalog, Category};
use predicates::prelude::*;

fn m8() -> Command {
    Command::cargo_bin("m8").unwrap()
}

/// Interactive session with no shake delay.
fn quick_play() -> Command {
    let mut cmd = m8();
    cmd.args(["play", "--seed", "7", "--shake-ms", "0", "--reveal-ms", "0"]);
    cmd
}

// ---------------------------------------------------------------------------
// ask
// ---------------------------------------------------------------------------

#[test]
fn ask_prints_normalized_question() {
    m8().args(["ask", "WILL", "IT", "RAIN?", "--seed", "1"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Will it rain?"));
}

#[test]
fn ask_json_answer_matches_category() {
    let output = m8()
        .args(["ask", "is this json?", "--seed", "3", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let v: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(v["question"], "Is this json?");
    let category: Category = serde_json::from_value(v["category"].clone()).unwrap();
    let answer = v["answer"].as_str().unwrap();
    assert!(AnswerCatalog::classic().answers(category).contains(&answer));
}

#[test]
fn ask_same_seed_same_answer() {
    let run = || {
        m8().args(["ask", "same answer?", "--seed", "99", "--json"])
            .output()
            .unwrap()
            .stdout
    };
    assert_eq!(run(), run());
}

#[test]
fn ask_blank_question_fails() {
    m8().args(["ask", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please ask a question first!"));
}

#[test]
fn ask_short_question_fails() {
    m8().args(["ask", "hi"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Please ask a longer question!"));
}

// ---------------------------------------------------------------------------
// play
// ---------------------------------------------------------------------------

#[test]
fn play_answers_and_counts() {
    quick_play()
        .write_stdin("will it work?\nstats\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Asked: 1")
                .and(predicate::str::contains("total"))
                .and(predicate::str::contains("Goodbye!")),
        );
}

#[test]
fn play_history_newest_first() {
    let output = quick_play()
        .write_stdin("first question\nsecond question\nhistory\nquit\n")
        .output()
        .unwrap();
    let stdout = String::from_utf8(output.stdout).unwrap();
    let second = stdout.rfind("Second question").unwrap();
    let first = stdout.rfind("First question").unwrap();
    assert!(second < first, "history not newest first:\n{stdout}");
}

#[test]
fn play_invalid_question_not_counted() {
    quick_play()
        .write_stdin("hm\nstats\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Please ask a longer question!")
                .and(predicate::str::contains("Asked:").not()),
        );
}

#[test]
fn play_rejects_question_while_settling() {
    m8().args(["play", "--seed", "1", "--shake-ms", "5000", "--reveal-ms", "0"])
        .write_stdin("first question\nsecond question\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("still settling")
                .and(predicate::str::contains("Asked: 1")),
        );
}

#[test]
fn play_export_markdown() {
    quick_play()
        .write_stdin("am i exported?\nexport markdown\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("# Magic 8-Ball History")
                .and(predicate::str::contains("**Q**: Am i exported?")),
        );
}

#[test]
fn play_export_question_is_asked() {
    quick_play()
        .write_stdin("export my photos to the cloud?\nhistory\nquit\n")
        .assert()
        .success()
        .stdout(
            predicate::str::contains("Asked: 1")
                .and(predicate::str::contains("Export my photos to the cloud?")),
        );
}

#[test]
fn play_help() {
    quick_play()
        .write_stdin("help\nquit\n")
        .assert()
        .success()
        .stdout(predicate::str::contains("Magic 8-Ball Commands"));
}

#[test]
fn play_rejects_reveal_after_settle() {
    m8().args(["play", "--shake-ms", "100", "--reveal-ms", "500"])
        .write_stdin("quit\n")
        .assert()
        .failure()
        .stderr(predicate::str::contains("invalid configuration"));
}

// ---------------------------------------------------------------------------
// sample
// ---------------------------------------------------------------------------

#[test]
fn sample_reports_split() {
    m8().args(["sample", "--draws", "20000", "--seed", "5"])
        .assert()
        .success()
        .stdout(
            predicate::str::contains("positive")
                .and(predicate::str::contains("negative"))
                .and(predicate::str::contains("neutral"))
                .and(predicate::str::contains("40.00%"))
                .and(predicate::str::contains("20000 draws")),
        );
}

#[test]
fn sample_zero_draws_fails() {
    m8().args(["sample", "--draws", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("at least 1"));
}
