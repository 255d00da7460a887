use assert_cmd::Command;
use predicates::str::contains;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

struct Fixture {
    _tmp: TempDir,
    source: PathBuf,
    train: PathBuf,
    test: PathBuf,
}

impl Fixture {
    fn new() -> Self {
        let tmp = TempDir::new().expect("create temp dir");
        let source = tmp.path().join("yalefaces");
        fs::create_dir(&source).expect("create source dir");
        Self {
            train: tmp.path().join("yalefaces_train"),
            test: tmp.path().join("yalefaces_test"),
            source,
            _tmp: tmp,
        }
    }

    fn seed(&self, names: &[&str]) {
        for name in names {
            fs::write(self.source.join(name), name).expect("write sample");
        }
    }

    fn split(&self) -> Command {
        let mut cmd = Command::cargo_bin("subject-split").unwrap();
        cmd.arg("split")
            .arg("--source-dir")
            .arg(&self.source)
            .arg("--train-dir")
            .arg(&self.train)
            .arg("--test-dir")
            .arg(&self.test);
        cmd
    }
}

fn listing(dir: &Path) -> Vec<String> {
    let mut names: Vec<String> = fs::read_dir(dir)
        .expect("read dir")
        .map(|e| e.unwrap().file_name().into_string().unwrap())
        .collect();
    names.sort();
    names
}

#[test]
fn split_prints_summary() {
    let fx = Fixture::new();
    let names: Vec<String> = (1..=11).map(|i| format!("subject01.{i}.pgm")).collect();
    let refs: Vec<&str> = names.iter().map(String::as_str).collect();
    fx.seed(&refs);
    fx.seed(&["subject01.gif", "Readme.txt"]);

    fx.split()
        .assert()
        .success()
        .stdout(contains("Split 1 subjects: 5 files"));

    assert_eq!(
        listing(&fx.train),
        vec![
            "subject01.1.pgm",
            "subject01.10.pgm",
            "subject01.11.pgm",
            "subject01.2.pgm",
            "subject01.3.pgm",
        ]
    );
    assert_eq!(listing(&fx.test).len(), 6);
}

#[test]
fn split_json_report() {
    let fx = Fixture::new();
    fx.seed(&["a.1.pgm", "a.2.pgm", "a.3.pgm", "b.1.pgm"]);

    let out = fx
        .split()
        .args(["--train-count", "2", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();
    let report: Value = serde_json::from_slice(&out).expect("valid json output");

    assert_eq!(report["train_count"], 2);
    assert_eq!(report["train_files"], 3);
    assert_eq!(report["test_files"], 1);
    assert_eq!(report["subjects"][0]["subject"], "a");
    assert_eq!(report["subjects"][1]["test"], 0);
}

#[test]
fn dry_run_leaves_destinations_absent() {
    let fx = Fixture::new();
    fx.seed(&["a.1.pgm", "a.2.pgm"]);

    fx.split()
        .arg("--dry-run")
        .assert()
        .success()
        .stdout(contains("Would split 1 subjects"));

    assert!(!fx.train.exists());
    assert!(!fx.test.exists());
}

#[test]
fn empty_source_still_succeeds() {
    let fx = Fixture::new();

    fx.split().assert().success().stdout(contains("Split 0 subjects"));

    assert!(listing(&fx.train).is_empty());
    assert!(listing(&fx.test).is_empty());
}

#[test]
fn missing_source_fails() {
    let fx = Fixture::new();
    fs::remove_dir(&fx.source).unwrap();

    fx.split()
        .assert()
        .failure()
        .stdout("")
        .stderr(contains("does not exist"));
}

#[test]
fn zero_train_count_rejected() {
    let fx = Fixture::new();
    fx.split().args(["--train-count", "0"]).assert().failure();
}
