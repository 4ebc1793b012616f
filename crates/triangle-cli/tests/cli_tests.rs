use assert_cmd::Command;
use indoc::indoc;
use predicates::prelude::*;
use std::fs;
use tempfile::TempDir;
use triangle_test_helpers::fixtures;

fn triangle_cmd() -> Command {
    Command::new(assert_cmd::cargo::cargo_bin!("triangle-opt"))
}

fn write_fixture(dir: &TempDir, name: &str, contents: &str) -> std::path::PathBuf {
    let path = dir.path().join(name);
    fs::write(&path, contents).unwrap();
    path
}

// ============================================================================
// PROJECT INITIALIZATION TESTS
// ============================================================================

#[test]
fn test_init_writes_default_config() {
    let temp_dir = TempDir::new().unwrap();

    triangle_cmd()
        .current_dir(&temp_dir)
        .arg("--init")
        .assert()
        .success()
        .stdout(predicate::str::contains("triangle.yaml"));

    let config = fs::read_to_string(temp_dir.path().join("triangle.yaml")).unwrap();
    assert!(config.contains("optimizationLevel: O1"));
    assert!(config.contains("hoistLoopInvariants: true"));
}

// ============================================================================
// OPTIMISATION TESTS
// ============================================================================

#[test]
fn test_hoists_json_program() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "loop.json", fixtures::invariant_loop_json());

    triangle_cmd()
        .current_dir(&temp_dir)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::eq(
            "let const $h1 ~ a + 1 in while i < n do begin b := $h1; c := c + 1 end\n",
        ));
}

#[test]
fn test_yaml_program_without_invariants_is_printed_unchanged() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "loop.yaml", fixtures::variant_loop_yaml());

    triangle_cmd()
        .current_dir(&temp_dir)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains(
            "while i < n do begin b := a + 1; a := a + 1 end",
        ));
}

#[test]
fn test_no_hoist_flag_disables_pass() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "loop.json", fixtures::invariant_loop_json());

    triangle_cmd()
        .current_dir(&temp_dir)
        .arg("--no-hoist")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("$h1").not());
}

#[test]
fn test_opt_level_zero_disables_pass() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "loop.json", fixtures::invariant_loop_json());

    triangle_cmd()
        .current_dir(&temp_dir)
        .args(["-O", "O0"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::starts_with("while i < n do"));
}

#[test]
fn test_config_file_is_honoured() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "loop.json", fixtures::invariant_loop_json());
    let config = write_fixture(
        &temp_dir,
        "custom.yaml",
        indoc! {"
            optimizationLevel: O0
        "},
    );

    triangle_cmd()
        .current_dir(&temp_dir)
        .arg("--config")
        .arg(&config)
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("$h1").not());
}

#[test]
fn test_cli_level_overrides_config_file() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "loop.json", fixtures::invariant_loop_json());
    write_fixture(&temp_dir, "triangle.yaml", "optimizationLevel: O0\n");

    triangle_cmd()
        .current_dir(&temp_dir)
        .args(["-O", "O1"])
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("let const $h1"));
}

#[test]
fn test_stats_reports_literals_and_pass_summary() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "loop.json", fixtures::invariant_loop_json());

    triangle_cmd()
        .current_dir(&temp_dir)
        .arg("--stats")
        .arg(&input)
        .assert()
        .success()
        .stdout(predicate::str::contains("\"integerExpressions\":2"))
        .stdout(predicate::str::contains("loop-hoisting"));
}

#[test]
fn test_multiple_files_keep_command_line_order() {
    let temp_dir = TempDir::new().unwrap();
    let first = write_fixture(&temp_dir, "first.json", fixtures::invariant_loop_json());
    let second = write_fixture(&temp_dir, "second.yaml", fixtures::variant_loop_yaml());

    let output = triangle_cmd()
        .current_dir(&temp_dir)
        .arg(&first)
        .arg(&second)
        .output()
        .unwrap();
    assert!(output.status.success());

    let stdout = String::from_utf8(output.stdout).unwrap();
    let first_at = stdout.find("first.json").unwrap();
    let second_at = stdout.find("second.yaml").unwrap();
    assert!(first_at < second_at);
}

// ============================================================================
// ERROR TESTS
// ============================================================================

#[test]
fn test_no_input_files_fails() {
    let temp_dir = TempDir::new().unwrap();

    triangle_cmd()
        .current_dir(&temp_dir)
        .assert()
        .failure()
        .stderr(predicate::str::contains("No input files"));
}

#[test]
fn test_malformed_file_fails_and_names_it() {
    let temp_dir = TempDir::new().unwrap();
    let input = write_fixture(&temp_dir, "broken.json", r#"{ "command": { "kind": "goto" } }"#);

    triangle_cmd()
        .current_dir(&temp_dir)
        .arg(&input)
        .assert()
        .failure()
        .stderr(predicate::str::contains("broken.json"));
}

#[test]
fn test_unknown_level_is_rejected() {
    triangle_cmd()
        .args(["-O", "O5", "whatever.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("O5"));
}
