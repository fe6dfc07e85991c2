use assert_cmd::Command;
use predicates::str::is_match;

#[test]
fn prints_an_estimate() {
    Command::cargo_bin("mcpool")
        .unwrap()
        .args(["--samples", "2000", "--tasks", "2", "--threads", "2", "--seed", "7"])
        .assert()
        .success()
        .stdout(is_match(r"Estimated pi: \d+(\.\d+)? \(2 tasks x 2000 samples\)").unwrap());
}

#[test]
fn json_output_is_parseable() {
    let output = Command::cargo_bin("mcpool")
        .unwrap()
        .args(["--samples", "1000", "--tasks", "1", "--threads", "1", "--json"])
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let summary: serde_json::Value = serde_json::from_slice(&output).unwrap();
    assert_eq!(summary["tasks"], 1);
    assert_eq!(summary["samples_per_task"], 1000);
    assert!(summary["estimate"].as_f64().unwrap() > 0.0);
}

#[test]
fn same_seed_is_reproducible_across_runs() {
    let run = || {
        Command::cargo_bin("mcpool")
            .unwrap()
            .args(["--samples", "1000", "--tasks", "2", "--threads", "4", "--seed", "42"])
            .assert()
            .success()
            .get_output()
            .stdout
            .clone()
    };

    assert_eq!(run(), run());
}
