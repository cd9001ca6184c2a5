//! Tests del binario con assert_cmd.
//!
//! Ejecutar solo estos tests:  cargo test --test cli

use assert_cmd::Command;
use predicates::prelude::*;

fn conjugueur() -> Command {
    #[allow(deprecated)]
    Command::cargo_bin("conjugueur").unwrap()
}

#[test]
fn test_default_tense_is_present() {
    conjugueur()
        .arg("aimer")
        .assert()
        .success()
        .stdout(predicate::str::contains("aimer (Présent)"))
        .stdout(predicate::str::contains("J\u{2019}aime"))
        .stdout(predicate::str::contains("Nous aimons"));
}

#[test]
fn test_several_tenses() {
    conjugueur()
        .args(["manger", "-t", "imparfait", "-t", "futur"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Je mangeais"))
        .stdout(predicate::str::contains("Nous mangerons"));
}

#[test]
fn test_chart_format() {
    conjugueur()
        .args(["finir", "--format", "chart"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Singulier"))
        .stdout(predicate::str::contains("Pluriel"))
        .stdout(predicate::str::contains("Ils / Elles finissent"));
}

#[test]
fn test_json_format() {
    conjugueur()
        .args(["être", "-t", "passe_compose", "--format", "json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"surface_form\": \"ai été\""));
}

#[test]
fn test_single_person_with_description() {
    conjugueur()
        .args(["acheter", "-p", "0"])
        .assert()
        .success()
        .stdout(predicate::str::contains("J\u{2019}achète"))
        .stdout(predicate::str::contains("achèt[e]"))
        .stdout(predicate::str::contains("Used for actions happening right now."));
}

#[test]
fn test_unknown_verb_fails_with_hint() {
    conjugueur()
        .arg("xyzzy")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("-er, -ir o -re"))
        .stderr(predicate::str::contains("être"));
}

#[test]
fn test_unknown_tense_is_rejected() {
    conjugueur()
        .args(["aimer", "-t", "aoriste"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("aoriste"));
}
