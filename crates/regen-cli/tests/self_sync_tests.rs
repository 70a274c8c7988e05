//! The exit-code tables in `src/exit.rs` are generated from the `ExitKind`
//! enum. This test regenerates them: if the enum changed, the first run
//! rewrites the file and fails, and the next run passes.

use std::path::Path;

use regen_core::Manifest;
use regen_fs::NormalizedPath;

fn workspace_manifest() -> Manifest {
    let path = Path::new(env!("CARGO_MANIFEST_DIR")).join("../../regen.toml");
    Manifest::load(&NormalizedPath::new(path)).unwrap()
}

#[test]
fn exit_code_tables_are_in_sync() {
    let manifest = workspace_manifest();
    for target in manifest.targets(None).unwrap() {
        if let Err(e) = regen_core::ensure(&target) {
            panic!("{}: {}", target.name(), e);
        }
    }
}

#[test]
fn manifest_targets_point_at_exit_rs() {
    let manifest = workspace_manifest();
    let names: Vec<&str> = manifest.names().collect();
    assert_eq!(names, vec!["exit-codes", "exit-labels"]);
    for target in manifest.targets(None).unwrap() {
        assert!(target.path().as_str().ends_with("crates/regen-cli/src/exit.rs"));
    }
}
