// SPDX-License-Identifier: MIT OR Apache-2.0

use assert_cmd::Command;
use predicates::prelude::*;
use serde_json::{json, Value};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn data_file(dir: &TempDir) -> PathBuf {
    dir.path().join("snippets.json")
}

fn linippet(dir: &TempDir) -> Command {
    let mut cmd = Command::new(assert_cmd::cargo::cargo_bin!("linippet"));
    cmd.env("HOME", dir.path())
        .env("LINIPPET_DATA", data_file(dir))
        .env("LINIPPET_CONFIG", dir.path().join("config.toml"))
        .env("NO_COLOR", "1")
        .env_remove("RUST_LOG");
    cmd
}

fn seed(path: &Path, snippets: &[(&str, &str)]) {
    let items: Vec<Value> = snippets
        .iter()
        .map(|(id, text)| json!({ "id": id, "snippet": text }))
        .collect();
    fs::write(path, serde_json::to_string_pretty(&items).expect("serialize")).expect("seed");
}

fn stored(path: &Path) -> Vec<Value> {
    let raw = fs::read_to_string(path).expect("read store");
    serde_json::from_str::<Value>(&raw)
        .expect("store json")
        .as_array()
        .expect("store array")
        .clone()
}

fn stdout_json(assert: &assert_cmd::assert::Assert) -> Value {
    let stdout = String::from_utf8(assert.get_output().stdout.clone()).expect("utf8");
    serde_json::from_str(&stdout).expect("stdout json")
}

#[test]
fn add_then_list_round_trips_through_the_file() {
    let dir = TempDir::new().expect("tempdir");

    linippet(&dir)
        .args(["add", "git log --oneline -n ${{count:10}}"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Saved snippet"))
        .stdout(predicate::str::contains("placeholders: count"));

    let items = stored(&data_file(&dir));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["snippet"], "git log --oneline -n ${{count:10}}");
    assert_eq!(items[0]["id"].as_str().expect("id").len(), 36);

    let assert = linippet(&dir)
        .args(["--format", "json", "list"])
        .assert()
        .success();
    let listed = stdout_json(&assert);
    assert_eq!(listed.as_array().expect("array").len(), 1);
    assert_eq!(listed[0]["snippet"], "git log --oneline -n ${{count:10}}");
}

#[test]
fn add_reads_text_from_stdin_when_omitted() {
    let dir = TempDir::new().expect("tempdir");

    linippet(&dir)
        .arg("add")
        .write_stdin("kubectl get pods -n ${{ns}}\n")
        .assert()
        .success()
        .stderr(predicate::str::contains("What is CommandLine?"));

    let items = stored(&data_file(&dir));
    assert_eq!(items[0]["snippet"], "kubectl get pods -n ${{ns}}");
}

#[test]
fn add_rejects_blank_text_and_leaves_file_alone() {
    let dir = TempDir::new().expect("tempdir");

    linippet(&dir)
        .args(["add", "   "])
        .assert()
        .failure()
        .stderr(predicate::str::contains("blank snippet"));
    assert!(!data_file(&dir).exists());
}

#[test]
fn list_on_empty_store_suggests_adding() {
    let dir = TempDir::new().expect("tempdir");

    linippet(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("There are no snippets"))
        .stderr(predicate::str::contains("linippet add"));
}

#[test]
fn list_text_shows_short_ids_in_stored_order() {
    let dir = TempDir::new().expect("tempdir");
    seed(
        &data_file(&dir),
        &[
            ("aaaaaaaa-1111-4111-8111-111111111111", "ls -la"),
            ("bbbbbbbb-2222-4222-8222-222222222222", "df -h"),
        ],
    );

    linippet(&dir)
        .arg("ls")
        .assert()
        .success()
        .stdout("aaaaaaaa  ls -la\nbbbbbbbb  df -h\n");
}

#[test]
fn pick_first_fills_args_and_prompts_for_the_rest() {
    let dir = TempDir::new().expect("tempdir");
    seed(
        &data_file(&dir),
        &[
            ("1", "git rebase -i ${{branch}}"),
            ("2", "docker run -d -p ${{port:8080}}:80 ${{image}}"),
        ],
    );

    linippet(&dir)
        .args(["pick", "docker", "--first", "--arg", "image=nginx"])
        .write_stdin("\n")
        .assert()
        .success()
        .stdout("docker run -d -p 8080:80 nginx\n")
        .stderr(predicate::str::contains("port [8080]: "));
}

#[test]
fn pick_first_uses_typed_value_over_default() {
    let dir = TempDir::new().expect("tempdir");
    seed(&data_file(&dir), &[("1", "ssh -p ${{port:22}} ${{host}} ${{host}}")]);

    linippet(&dir)
        .args(["p", "ssh", "-f"])
        .write_stdin("2222\nbox\n")
        .assert()
        .success()
        .stdout("ssh -p 2222 box box\n");
}

#[test]
fn pick_with_blank_query_takes_first_stored() {
    let dir = TempDir::new().expect("tempdir");
    seed(&data_file(&dir), &[("1", "uptime"), ("2", "whoami")]);

    linippet(&dir)
        .args(["pick", "  ", "--first"])
        .assert()
        .success()
        .stdout("uptime\n");
}

#[test]
fn pick_without_match_fails_with_suggestion() {
    let dir = TempDir::new().expect("tempdir");
    seed(&data_file(&dir), &[("1", "uptime")]);

    linippet(&dir)
        .args(["pick", "docker", "--first"])
        .assert()
        .failure()
        .stdout("")
        .stderr(predicate::str::contains("No snippet matches 'docker'"));
}

#[test]
fn edit_and_remove_accept_unique_id_prefix() {
    let dir = TempDir::new().expect("tempdir");
    seed(
        &data_file(&dir),
        &[
            ("abcd1234-0000-4000-8000-000000000000", "ls"),
            ("abff5678-0000-4000-8000-000000000000", "pwd"),
        ],
    );

    linippet(&dir)
        .args(["edit", "abcd", "ls -la"])
        .assert()
        .success()
        .stdout(predicate::str::contains("Updated snippet abcd1234"));
    assert_eq!(stored(&data_file(&dir))[0]["snippet"], "ls -la");

    linippet(&dir)
        .args(["rm", "ab"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("matches 2 snippets"));

    let assert = linippet(&dir)
        .args(["--format", "json", "remove", "abff"])
        .assert()
        .success();
    assert_eq!(stdout_json(&assert)["snippet"], "pwd");

    let items = stored(&data_file(&dir));
    assert_eq!(items.len(), 1);
    assert_eq!(items[0]["id"], "abcd1234-0000-4000-8000-000000000000");
}

#[test]
fn edit_unknown_id_fails() {
    let dir = TempDir::new().expect("tempdir");
    seed(&data_file(&dir), &[("1", "ls")]);

    linippet(&dir)
        .args(["edit", "zzz", "pwd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("'zzz' is not found"));
}

#[test]
fn edit_rejects_multi_line_text() {
    let dir = TempDir::new().expect("tempdir");
    seed(&data_file(&dir), &[("1", "ls")]);

    linippet(&dir)
        .args(["edit", "1", "ls\npwd"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("single line"));
    assert_eq!(stored(&data_file(&dir))[0]["snippet"], "ls");
}

#[test]
fn corrupt_store_reports_path() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(data_file(&dir), "{not json").expect("write");

    linippet(&dir)
        .arg("list")
        .assert()
        .failure()
        .stderr(predicate::str::contains("is not valid JSON"))
        .stderr(predicate::str::contains("snippets.json"));
}

#[test]
fn data_flag_overrides_env() {
    let dir = TempDir::new().expect("tempdir");
    let other = dir.path().join("nested/other.json");

    linippet(&dir)
        .args(["--data", other.to_str().expect("path"), "add", "echo hi"])
        .assert()
        .success();

    assert!(other.exists());
    assert!(!data_file(&dir).exists());
}

#[test]
fn config_file_sets_data_path_and_format() {
    let dir = TempDir::new().expect("tempdir");
    fs::write(
        dir.path().join("config.toml"),
        "data_path = \"~/from-config.json\"\ndefault_format = \"json\"\n",
    )
    .expect("config");
    seed(&dir.path().join("from-config.json"), &[("1", "echo config")]);

    let assert = linippet(&dir)
        .env_remove("LINIPPET_DATA")
        .arg("list")
        .assert()
        .success();
    assert_eq!(stdout_json(&assert)[0]["snippet"], "echo config");
}

#[test]
fn init_prints_shell_widgets() {
    let dir = TempDir::new().expect("tempdir");

    linippet(&dir)
        .args(["init", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("bind -x"))
        .stdout(predicate::str::contains("linippet pick"));

    linippet(&dir)
        .args(["init", "zsh"])
        .assert()
        .success()
        .stdout(predicate::str::contains("zle -N"));
}

#[test]
fn completions_mention_subcommands() {
    let dir = TempDir::new().expect("tempdir");

    linippet(&dir)
        .args(["completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("linippet"))
        .stdout(predicate::str::contains("pick"));
}
