//! Config file discovery: explicit path, current dir, user config, fallback.

use std::path::{Path, PathBuf};

use crate::config::{Config, ConfigLoader, FileConfigLoader};
use crate::error::ChartError;

use super::mock_fs::MockFileSystem;

#[test]
fn returns_default_when_no_config_found() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let config = loader.load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn loads_local_config_from_current_directory() {
    let fs = MockFileSystem::new()
        .with_current_dir("/my/project")
        .with_file("/my/project/.sm-chart.toml", "[chart]\nbar_spacing = 0.3\n");

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.chart.bar_spacing, Some(0.3));
}

#[test]
fn loads_user_config_as_fallback() {
    let fs = MockFileSystem::new()
        .with_config_dir(Some(PathBuf::from("/home/tester/.config/sm-chart")))
        .with_file(
            "/home/tester/.config/sm-chart/config.toml",
            "[multiples]\ntop = 4\n",
        );

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.multiples.top, Some(4));
}

#[test]
fn local_config_takes_priority_over_user_config() {
    let fs = MockFileSystem::new()
        .with_file("/project/.sm-chart.toml", "[multiples]\ntop = 1\n")
        .with_file("/home/user/.config/sm-chart/config.toml", "[multiples]\ntop = 9\n");

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config.multiples.top, Some(1));
}

#[test]
fn missing_user_config_dir_falls_back_to_default() {
    let fs = MockFileSystem::new().with_config_dir(None);

    let config = FileConfigLoader::with_fs(fs).load().unwrap();
    assert_eq!(config, Config::default());
}

#[test]
fn load_from_explicit_path() {
    let fs = MockFileSystem::new().with_file("/etc/charts.toml", "[svg]\nscale = 2.0\n");

    let config = FileConfigLoader::with_fs(fs)
        .load_from_path(Path::new("/etc/charts.toml"))
        .unwrap();
    assert_eq!(config.svg.scale, Some(2.0));
}

#[test]
fn load_from_missing_path_is_file_access_error() {
    let loader = FileConfigLoader::with_fs(MockFileSystem::new());

    let err = loader
        .load_from_path(Path::new("/nowhere/config.toml"))
        .unwrap_err();
    assert!(matches!(err, ChartError::FileAccess { .. }));
}
