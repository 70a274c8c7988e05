//! Black-box tests of the `regen` binary.

use assert_cmd::Command;
use predicates::prelude::*;
use regen_test_utils::TestProject;
use regen_test_utils::fixtures::{self, SOURCE_PATH};

fn regen(project: &TestProject) -> Command {
    let mut cmd = Command::cargo_bin("regen").unwrap();
    cmd.current_dir(project.root()).env_remove("REGEN_CONFIG");
    cmd
}

fn stale_project() -> TestProject {
    let project = TestProject::new();
    project.write_container(&["A", "B", "C"], "");
    project.write_manifest();
    project
}

#[test]
fn no_command_prints_hint() {
    let project = TestProject::new();
    regen(&project)
        .assert()
        .success()
        .stdout(predicate::str::contains("regen --help"));
}

#[test]
fn check_on_stale_file_exits_1_without_writing() {
    let project = stale_project();
    let before = project.read(SOURCE_PATH);

    regen(&project)
        .arg("check")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("STALE"));

    project.assert_content(SOURCE_PATH, &before);
}

#[test]
fn sync_regenerates_then_second_run_is_clean() {
    let project = stale_project();

    regen(&project)
        .arg("sync")
        .assert()
        .code(1)
        .stdout(predicate::str::contains("Re-run to confirm"));
    project.assert_content(SOURCE_PATH, &fixtures::in_sync_source(&["A", "B", "C"]));

    regen(&project)
        .arg("sync")
        .assert()
        .success()
        .stdout(predicate::str::contains("Already synchronized"));
    regen(&project).arg("check").assert().success();
}

#[test]
fn sync_json_reports_outcome() {
    let project = stale_project();

    regen(&project)
        .args(["sync", "--json"])
        .assert()
        .code(1)
        .stdout(predicate::str::contains(r#""status": "regenerated""#))
        .stdout(predicate::str::contains(r#""outcome": "regenerated""#))
        .stdout(predicate::str::contains(r#""variants": 3"#));
}

#[test]
fn diff_shows_added_lines() {
    let project = stale_project();

    regen(&project)
        .arg("diff")
        .assert()
        .success()
        .stdout(predicate::str::contains("+        2 => Some(Container::C),"));
}

#[test]
fn missing_marker_exits_2_and_names_marker() {
    let project = TestProject::new();
    let broken = fixtures::container_source(&["A"], "").replace(fixtures::REGION_END, "");
    project.write(SOURCE_PATH, &broken);
    project.write_manifest();

    regen(&project)
        .arg("sync")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("end_marker not found"));

    project.assert_content(SOURCE_PATH, &broken);
}

#[test]
fn missing_manifest_exits_2() {
    let project = TestProject::new();
    regen(&project)
        .arg("check")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("error"));
}

#[test]
fn variants_lists_in_declaration_order() {
    let project = stale_project();

    regen(&project)
        .args(["variants", "container", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains(r#""name": "A""#))
        .stdout(predicate::str::contains(r#""index": 2"#));
}

#[test]
fn config_flag_selects_manifest() {
    let project = TestProject::new();
    project.write_container(&["A"], "");
    project.write("tools/regen.toml", &fixtures::manifest("../src/container.rs"));

    regen(&project)
        .args(["list", "--config", "tools/regen.toml"])
        .assert()
        .success()
        .stdout(predicate::str::contains("container"));
}

#[test]
fn sync_accepts_robustness_flags() {
    let project = stale_project();

    regen(&project)
        .args(["sync", "--lock-timeout", "1", "--no-fsync"])
        .assert()
        .code(1);
    project.assert_content(SOURCE_PATH, &fixtures::in_sync_source(&["A", "B", "C"]));
    assert!(!project.path("src/container.rs.lock").exists());
}

#[test]
fn sync_rejects_rendering_that_collides_with_markers() {
    let project = TestProject::new();
    project.write_container(&["A"], "");
    project.write(
        "regen.toml",
        &fixtures::default_manifest().replace(
            "template = \"        {index} => Some(Container::{name}),\\n\"",
            "template = \"        // regen:end {name}\\n\"",
        ),
    );
    let before = project.read(SOURCE_PATH);

    regen(&project)
        .arg("sync")
        .assert()
        .code(2)
        .stderr(predicate::str::contains("would not read back"));
    project.assert_content(SOURCE_PATH, &before);
}
