//! End-to-end tests over the checked-in fixture projects
//!
//! Each test copies a project from `test-fixtures/projects/` into a temp
//! directory and drives it through manifest loading, check and sync.

use std::fs;
use std::path::{Path, PathBuf};

use pretty_assertions::assert_eq;
use regen_core::{ErrorKind, Manifest, Mode, Outcome, Regenerator};
use regen_fs::NormalizedPath;
use regen_test_utils::TestProject;
use tempfile::TempDir;

fn fixture_root(name: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("../../test-fixtures/projects")
        .join(name)
}

fn copy_dir(from: &Path, to: &Path) {
    fs::create_dir_all(to).unwrap();
    for entry in fs::read_dir(from).unwrap() {
        let entry = entry.unwrap();
        let dest = to.join(entry.file_name());
        if entry.file_type().unwrap().is_dir() {
            copy_dir(&entry.path(), &dest);
        } else {
            fs::copy(entry.path(), &dest).unwrap();
        }
    }
}

/// Copy a fixture project into a fresh temp directory.
fn fixture(name: &str) -> TempDir {
    let temp = TempDir::new().unwrap();
    copy_dir(&fixture_root(name), temp.path());
    temp
}

fn load(dir: &Path, manifest: &str) -> Manifest {
    Manifest::load(&NormalizedPath::new(dir.join(manifest))).unwrap()
}

#[test]
fn test_yaml_manifest_two_regions_one_file() {
    let temp = fixture("http-status");
    let manifest = load(temp.path(), "regen.yaml");
    let targets = manifest.targets(None).unwrap();

    // codes are current, names have never been generated
    let checked = Regenerator::new(Mode::Check).run_all(&targets).unwrap();
    let outcomes: Vec<Outcome> = checked.iter().map(|r| r.outcome).collect();
    assert_eq!(outcomes, vec![Outcome::Unchanged, Outcome::Stale]);
    assert!(checked.iter().all(|r| r.variants == 4));

    let synced = Regenerator::new(Mode::Apply).run_all(&targets).unwrap();
    assert_eq!(synced[1].outcome, Outcome::Regenerated);

    let content = fs::read_to_string(temp.path().join("src/status.rs")).unwrap();
    assert!(content.contains(
        "            // regen:begin names\n\
         \x20           0 => Some(\"ok\"),\n\
         \x20           1 => Some(\"not_found\"),\n\
         \x20           2 => Some(\"forbidden\"),\n\
         \x20           3 => Some(\"internal_error\"),\n\
         \x20           // regen:end names\n"
    ));
    assert!(content.contains("    // Client errors\n"));

    let again = Regenerator::new(Mode::Check).run_all(&targets).unwrap();
    assert!(again.iter().all(|r| r.outcome == Outcome::Unchanged));
}

#[test]
fn test_json_manifest_with_separate_declaration() {
    let temp = fixture("split-declaration");
    let manifest = load(temp.path(), "regen.json");
    let targets = manifest.targets(None).unwrap();
    let declaration_before = fs::read_to_string(temp.path().join("src/colors.rs")).unwrap();

    let err = regen_core::ensure(&targets[0]).unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Regenerated);

    assert_eq!(
        fs::read_to_string(temp.path().join("src/table.rs")).unwrap(),
        "pub const COLORS: &[(&str, u32)] = &[\n\
         // regen:begin\n\
         \x20   (\"red\", 0),\n\
         \x20   (\"green\", 1),\n\
         \x20   (\"blue\", 2),\n\
         // regen:end\n\
         ];\n"
    );
    assert_eq!(
        fs::read_to_string(temp.path().join("src/colors.rs")).unwrap(),
        declaration_before
    );
    regen_core::ensure(&targets[0]).unwrap();
}

#[test]
fn test_fixture_sources_are_untouched_by_check() {
    let temp = fixture("http-status");
    let before = fs::read_to_string(temp.path().join("src/status.rs")).unwrap();

    let manifest = load(temp.path(), "regen.yaml");
    for target in manifest.targets(None).unwrap() {
        regen_core::check(&target).unwrap();
    }

    assert_eq!(
        fs::read_to_string(temp.path().join("src/status.rs")).unwrap(),
        before
    );
}

#[test]
fn test_toml_manifest_flow_with_test_project() {
    let project = TestProject::new();
    project.write_container(&["Alpha", "Beta"], "");
    project.write_manifest();

    let manifest = load(project.root(), "regen.toml");
    let targets = manifest.targets(Some("container")).unwrap();

    let report = &Regenerator::new(Mode::Apply).run_all(&targets).unwrap()[0];
    assert_eq!(report.outcome, Outcome::Regenerated);

    let json = serde_json::to_value(report).unwrap();
    assert_eq!(json["outcome"], "regenerated");
    assert_eq!(json["variants"], 2);
    assert!(json["checksum_after"].as_str().unwrap().starts_with("sha256:"));

    // A declaration edit makes the region stale again.
    let source = project.read("src/container.rs");
    project.write(
        "src/container.rs",
        &source.replace("    Beta,\n", "    Beta,\n    Gamma,\n"),
    );
    let report = regen_core::check(&targets[0]).unwrap();
    assert_eq!(report.outcome, Outcome::Stale);
    assert_eq!(report.variants, 3);
}

#[test]
fn test_duplicate_in_rejecting_target_aborts_whole_run() {
    let temp = fixture("http-status");
    let status = temp.path().join("src/status.rs");
    let original = fs::read_to_string(&status).unwrap();
    fs::write(&status, original.replace("    Forbidden,\n", "    Forbidden,\n    Ok,\n")).unwrap();
    let edited = fs::read_to_string(&status).unwrap();

    let manifest = load(temp.path(), "regen.yaml");
    let err = Regenerator::new(Mode::Apply)
        .run_all(&manifest.targets(None).unwrap())
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::MalformedBlock);
    assert_eq!(fs::read_to_string(&status).unwrap(), edited);
}
