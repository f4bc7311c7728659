use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::io::Write;

const LIST: &str = r#"[
    {"name": "The Matrix", "total_length": 700, "remaining_length": 100, "needed_length": 100, "download_rate": 10},
    {"name": "Alien", "total_length": 900},
    {"name": "Brazil", "total_length": 700, "stopped": true, "remaining_length": 50},
    {"name": "debian-12.iso", "has_storage": false, "remaining_length": -1}
]"#;

fn list_file() -> tempfile::NamedTempFile {
    let mut file = tempfile::Builder::new()
        .suffix(".json")
        .tempfile()
        .unwrap();
    file.write_all(LIST.as_bytes()).unwrap();
    file
}

fn snarkctl() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("snarkctl");
    cmd.env_remove("SNARK_SORT_CONFIG_PATH")
        .env_remove("SNARK_SORT_CONFIG_JSON")
        .env("LC_ALL", "C");
    cmd
}

#[test]
fn sorts_by_name_by_default() {
    let file = list_file();
    snarkctl()
        .args(["sort", "--format", "names", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("debian-12.iso\nAlien\nBrazil\nThe Matrix\n");
}

#[test]
fn negative_selector_reverses_size_with_ascending_ties() {
    let file = list_file();
    snarkctl()
        .args(["sort", "--column", "-5", "--format", "names", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .stdout("Alien\nBrazil\nThe Matrix\ndebian-12.iso\n");
}

#[test]
fn reads_stdin_and_sorts_by_status() {
    snarkctl()
        .args(["sort", "-c", "2", "--format", "names"])
        .write_stdin(LIST)
        .assert()
        .success()
        .stdout("Brazil\ndebian-12.iso\nThe Matrix\nAlien\n");
}

#[test]
fn json_output_round_trips_fields() {
    let file = list_file();
    let output = snarkctl()
        .args(["sort", "--column", "4", "--locale", "en", "--input"])
        .arg(file.path())
        .assert()
        .success()
        .get_output()
        .stdout
        .clone();

    let sorted: serde_json::Value = serde_json::from_slice(&output).unwrap();
    let names: Vec<&str> = sorted
        .as_array()
        .unwrap()
        .iter()
        .map(|t| t["base_name"].as_str().unwrap())
        .collect();
    // Unknown ETAs tie and fall back to name order, storage-less first.
    assert_eq!(names, vec!["debian-12.iso", "Alien", "Brazil", "The Matrix"]);
    assert_eq!(sorted[3]["download_rate"], 10);
    assert_eq!(sorted[2]["stopped"], true);
}

#[test]
fn config_file_sets_locale() {
    let file = list_file();
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "locale = \"de-DE\"\nstrength = \"primary\"").unwrap();

    snarkctl()
        .args(["sort", "--format", "names", "--config"])
        .arg(config.path())
        .arg("--input")
        .arg(file.path())
        .assert()
        .success()
        .stdout(predicate::str::starts_with("debian-12.iso\n"));
}

#[test]
fn rejects_non_numeric_selector() {
    snarkctl()
        .args(["sort", "--column", "size"])
        .write_stdin(LIST)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Invalid column selector"));
}

#[test]
fn rejects_malformed_input() {
    snarkctl()
        .args(["sort"])
        .write_stdin("{not json")
        .assert()
        .failure()
        .stderr(predicate::str::contains("not a JSON array of torrents"));
}

#[test]
fn lists_columns() {
    snarkctl()
        .arg("columns")
        .assert()
        .success()
        .stdout(predicate::str::contains(" 4  eta"))
        .stdout(predicate::str::contains("10  remaining"));
}

const NORDIC: &str = r#"[{"name": "Zebra"}, {"name": "Öl"}, {"name": "Apple"}]"#;
const ROOT_ORDER: &str = "Apple\nÖl\nZebra\n";
const SWEDISH_ORDER: &str = "Apple\nZebra\nÖl\n";

/// No pinned locale: collation follows whatever the test sets.
fn snarkctl_from_env() -> assert_cmd::Command {
    let mut cmd = cargo_bin_cmd!("snarkctl");
    cmd.env_remove("SNARK_SORT_CONFIG_PATH")
        .env_remove("SNARK_SORT_CONFIG_JSON")
        .env_remove("LC_ALL")
        .env_remove("LC_COLLATE")
        .env_remove("LANG")
        .env_remove("RUST_LOG")
        .args(["sort", "--format", "names"])
        .write_stdin(NORDIC);
    cmd
}

#[test]
fn lang_selects_collation_locale() {
    snarkctl_from_env()
        .env("LANG", "sv_SE.UTF-8")
        .assert()
        .success()
        .stdout(SWEDISH_ORDER);
}

#[test]
fn lc_all_c_overrides_lang_with_root_order() {
    snarkctl_from_env()
        .env("LC_ALL", "C")
        .env("LANG", "sv_SE.UTF-8")
        .assert()
        .success()
        .stdout(ROOT_ORDER);
}

#[test]
fn unusable_env_locale_falls_back_to_root() {
    snarkctl_from_env()
        .env("LC_ALL", "!!bad")
        .assert()
        .success()
        .stdout(ROOT_ORDER)
        .stderr(predicate::str::contains(
            "ignoring unusable environment locale",
        ));
}

#[test]
fn config_json_env_beats_process_locale() {
    snarkctl_from_env()
        .env("LC_ALL", "C")
        .env("SNARK_SORT_CONFIG_JSON", r#"{"locale": "sv-SE"}"#)
        .assert()
        .success()
        .stdout(SWEDISH_ORDER);
}

#[test]
fn config_path_env_beats_config_json_env() {
    let mut config = tempfile::Builder::new().suffix(".toml").tempfile().unwrap();
    writeln!(config, "locale = \"en\"").unwrap();

    snarkctl_from_env()
        .env("LC_ALL", "C")
        .env("SNARK_SORT_CONFIG_PATH", config.path())
        .env("SNARK_SORT_CONFIG_JSON", r#"{"locale": "sv-SE"}"#)
        .assert()
        .success()
        .stdout(ROOT_ORDER);
}

#[test]
fn malformed_config_json_env_is_rejected() {
    snarkctl_from_env()
        .env("SNARK_SORT_CONFIG_JSON", r#"{"locale": "sv-"#)
        .assert()
        .failure()
        .stderr(predicate::str::contains("Failed to parse ordering config"));
}
