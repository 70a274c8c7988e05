use std::collections::BTreeMap;

use assert_fs::prelude::*;
use pretty_assertions::assert_eq;
use regen_fs::{ConfigStore, Error, NormalizedPath};
use rstest::rstest;
use serde::Deserialize;

#[derive(Debug, Deserialize, PartialEq)]
struct Marker {
    start: String,
    end: String,
}

#[rstest]
#[case("regen.toml", "start = \"// begin\"\nend = \"// end\"\n")]
#[case("regen.json", r#"{"start": "// begin", "end": "// end"}"#)]
#[case("regen.yaml", "start: \"// begin\"\nend: \"// end\"\n")]
#[case("regen.yml", "start: \"// begin\"\nend: \"// end\"\n")]
fn loads_every_supported_format(#[case] name: &str, #[case] content: &str) {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child(name);
    file.write_str(content).unwrap();

    let loaded: Marker = ConfigStore::new()
        .load(&NormalizedPath::new(file.path()))
        .unwrap();

    assert_eq!(
        loaded,
        Marker {
            start: "// begin".into(),
            end: "// end".into(),
        }
    );
}

#[test]
fn unsupported_extension_is_rejected() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("regen.ini");
    file.write_str("start=x").unwrap();

    let result: Result<BTreeMap<String, String>, _> =
        ConfigStore::new().load(&NormalizedPath::new(file.path()));

    assert!(matches!(result, Err(Error::UnsupportedFormat { extension }) if extension == "ini"));
}

#[test]
fn malformed_toml_names_format_and_path() {
    let temp = assert_fs::TempDir::new().unwrap();
    let file = temp.child("regen.toml");
    file.write_str("start = ").unwrap();

    let result: Result<Marker, _> = ConfigStore::new().load(&NormalizedPath::new(file.path()));

    match result {
        Err(Error::ConfigParse { format, path, .. }) => {
            assert_eq!(format, "TOML");
            assert_eq!(path, file.path());
        }
        other => panic!("expected ConfigParse, got {:?}", other),
    }
}

#[test]
fn missing_file_is_io_error() {
    let temp = assert_fs::TempDir::new().unwrap();
    let result: Result<Marker, _> =
        ConfigStore::new().load(&NormalizedPath::new(temp.path().join("regen.toml")));
    assert!(matches!(result, Err(Error::Io { .. })));
}
