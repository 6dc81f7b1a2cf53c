//! Integration tests for configuration loading
//!
//! Tests that verify config loading from files and environment variables.

use std::fs;
use std::path::PathBuf;

use serial_test::serial;
use tess4d::config::AppConfig;
use tess4d_core::{Projection, RotationPlane};

/// Fresh directory under the system temp dir
fn scratch_dir(name: &str) -> PathBuf {
    let dir = std::env::temp_dir().join(format!("tess4d_config_{}_{}", name, std::process::id()));
    let _ = fs::remove_dir_all(&dir);
    fs::create_dir_all(&dir).unwrap();
    dir
}

#[test]
#[serial]
fn test_default_file_matches_defaults() {
    let config = AppConfig::load().unwrap();
    let defaults = AppConfig::default();
    assert_eq!(config.tesseract.half_extent, defaults.tesseract.half_extent);
    assert_eq!(config.tesseract.light_distance, defaults.tesseract.light_distance);
    assert_eq!(config.tesseract.angular_rate, defaults.tesseract.angular_rate);
    assert_eq!(config.tesseract.initial_plane, RotationPlane::None);
    assert_eq!(config.view.distance, defaults.view.distance);
}

#[test]
#[serial]
fn test_env_override() {
    std::env::set_var("T4D_WINDOW__TITLE", "Test From Env");
    std::env::set_var("T4D_TESSERACT__INITIAL_PLANE", "XW");
    std::env::set_var("T4D_TESSERACT__ANGULAR_RATE", "90");
    let config = AppConfig::load();
    std::env::remove_var("T4D_WINDOW__TITLE");
    std::env::remove_var("T4D_TESSERACT__INITIAL_PLANE");
    std::env::remove_var("T4D_TESSERACT__ANGULAR_RATE");

    let config = config.unwrap();
    assert_eq!(config.window.title, "Test From Env");
    assert_eq!(config.tesseract.initial_plane, RotationPlane::XW);
    assert_eq!(config.tesseract.angular_rate, 90.0);
}

#[test]
#[serial]
fn test_user_file_overrides_default_file() {
    let dir = scratch_dir("user");
    fs::write(
        dir.join("default.toml"),
        "[tesseract]\nprojection = \"Stereographic\"\nangular_rate = 30.0\n",
    )
    .unwrap();
    fs::write(dir.join("user.toml"), "[tesseract]\nprojection = \"Orthographic\"\n").unwrap();

    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.tesseract.projection, Projection::Orthographic);
    assert_eq!(config.tesseract.angular_rate, 30.0);

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_missing_directory_uses_defaults() {
    let dir = scratch_dir("missing").join("does_not_exist");
    let config = AppConfig::load_from(&dir).unwrap();
    assert_eq!(config.window.width, AppConfig::default().window.width);
}

#[test]
#[serial]
fn test_unknown_plane_is_an_error() {
    let dir = scratch_dir("bad_plane");
    fs::write(dir.join("default.toml"), "[tesseract]\ninitial_plane = \"XQ\"\n").unwrap();

    let err = AppConfig::load_from(&dir).unwrap_err();
    assert!(format!("{}", err).starts_with("Configuration error"));

    let _ = fs::remove_dir_all(&dir);
}

#[test]
#[serial]
fn test_loaded_config_builds_mesh() {
    let config = AppConfig::load().unwrap();
    let mesh = config.tesseract.build_mesh().unwrap();
    assert_eq!(mesh.vertex_count(), 192);
    assert_eq!(mesh.projection(), config.tesseract.projection);
}
