//! [`TestProject`] builder for regen test scenarios.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::SystemTime;

use tempfile::TempDir;

use crate::fixtures;

/// A temporary project directory with helpers for writing sources and
/// asserting on their content.
///
/// # Example
///
/// ```rust,no_run
/// use regen_test_utils::TestProject;
///
/// let project = TestProject::new();
/// project.write_container(&["A", "B"], "");
/// project.write_manifest();
/// project.assert_file_exists("regen.toml");
/// ```
pub struct TestProject {
    temp_dir: TempDir,
}

impl Default for TestProject {
    fn default() -> Self {
        Self::new()
    }
}

impl TestProject {
    /// Create an empty temporary directory.
    pub fn new() -> Self {
        Self {
            temp_dir: TempDir::new().unwrap(),
        }
    }

    /// Return the root path of the temporary directory.
    pub fn root(&self) -> &Path {
        self.temp_dir.path()
    }

    /// Absolute path of `rel` inside the project.
    pub fn path(&self, rel: &str) -> PathBuf {
        self.root().join(rel)
    }

    /// Write `content` to `rel`, creating parent directories.
    pub fn write(&self, rel: &str, content: &str) -> PathBuf {
        let path = self.path(rel);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).unwrap();
        }
        fs::write(&path, content).unwrap();
        path
    }

    /// Read `rel` as a string.
    pub fn read(&self, rel: &str) -> String {
        fs::read_to_string(self.path(rel))
            .unwrap_or_else(|e| panic!("TestProject::read: {rel}: {e}"))
    }

    /// Write [`fixtures::container_source`] to [`fixtures::SOURCE_PATH`].
    pub fn write_container(&self, variants: &[&str], region: &str) -> PathBuf {
        self.write(
            fixtures::SOURCE_PATH,
            &fixtures::container_source(variants, region),
        )
    }

    /// Write the default `regen.toml` pointing at the container source.
    pub fn write_manifest(&self) -> PathBuf {
        self.write("regen.toml", &fixtures::default_manifest())
    }

    /// Modification time of `rel`.
    pub fn modified(&self, rel: &str) -> SystemTime {
        fs::metadata(self.path(rel)).unwrap().modified().unwrap()
    }

    /// Assert that `rel` exists.
    pub fn assert_file_exists(&self, rel: &str) {
        assert!(self.path(rel).exists(), "expected {rel} to exist");
    }

    /// Assert that `rel` holds exactly `expected`.
    pub fn assert_content(&self, rel: &str, expected: &str) {
        let actual = self.read(rel);
        assert_eq!(actual, expected, "content mismatch in {rel}");
    }
}
