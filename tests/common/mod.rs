#![allow(dead_code)]

use std::fs;
use std::path::Path;

use tempfile::TempDir;

/// Creates an `assert_cmd` Command for the sm-chart binary.
#[macro_export]
macro_rules! sm_chart {
    () => {
        assert_cmd::Command::new(assert_cmd::cargo::cargo_bin!("sm-chart"))
    };
}

/// Three subjects over three quarters, tab separated.
pub const SALES_RECORDS: &str = "\
north\tq1\t10
north\tq2\t20
south\tq1\t5
south\tq3\t7
east\tq2\t40
";

/// Creates a temporary directory with test fixtures for integration tests.
pub struct TestFixture {
    pub dir: TempDir,
}

impl TestFixture {
    /// Creates a new test fixture with an empty temp directory.
    pub fn new() -> Self {
        Self {
            dir: TempDir::new().expect("Failed to create temp directory"),
        }
    }

    /// Creates a file with the given content in the temp directory.
    pub fn create_file(&self, relative_path: &str, content: &str) {
        let path = self.dir.path().join(relative_path);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent directories");
        }
        fs::write(&path, content).expect("Failed to write file");
    }

    /// Returns the path to the temp directory.
    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Creates the local sm-chart config file.
    pub fn create_config(&self, content: &str) {
        self.create_file(".sm-chart.toml", content);
    }

    /// Creates `records.tsv` with the given content.
    pub fn create_records(&self, content: &str) {
        self.create_file("records.tsv", content);
    }

    /// Reads a file from the temp directory.
    pub fn read_file(&self, relative_path: &str) -> String {
        fs::read_to_string(self.dir.path().join(relative_path)).expect("Failed to read file")
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}
