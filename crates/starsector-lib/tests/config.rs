use std::fs;

use starsector_lib::{Error, Galaxy, GalaxyConfig};
use tempfile::tempdir;

#[test]
fn loads_partial_config_from_json_file() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("galaxy.json");
    fs::write(&path, r#"{ "sector_size": 10.0, "universe_seed": 77 }"#).expect("write config");

    let config = GalaxyConfig::from_path(&path).expect("config loads");
    assert_eq!(config.sector_size, 10.0);
    assert_eq!(config.universe_seed, 77);
    assert_eq!(
        config.stars_per_sector,
        GalaxyConfig::default().stars_per_sector
    );

    let galaxy = Galaxy::new(config).expect("valid config");
    assert_eq!(galaxy.sector_size(), 10.0);
}

#[test]
fn malformed_json_reports_path() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("broken.json");
    fs::write(&path, "{ sector_size: ").expect("write config");

    let error = GalaxyConfig::from_path(&path).expect_err("malformed");
    match error {
        Error::ConfigLoad { path: reported, .. } => assert_eq!(reported, path),
        other => panic!("unexpected error {other}"),
    }
}

#[test]
fn missing_file_is_a_config_error() {
    let dir = tempdir().expect("create temp dir");
    let error = GalaxyConfig::from_path(&dir.path().join("absent.json")).expect_err("missing");
    assert!(matches!(error, Error::ConfigLoad { .. }));
}

#[test]
fn invalid_values_are_rejected_on_load() {
    let dir = tempdir().expect("create temp dir");
    let path = dir.path().join("invalid.json");
    fs::write(&path, r#"{ "sector_size": -5.0 }"#).expect("write config");

    let error = GalaxyConfig::from_path(&path).expect_err("negative size");
    assert!(matches!(error, Error::InvalidConfig { .. }));
}

#[test]
fn environment_overrides_apply_and_validate() {
    std::env::set_var("STARSECTOR_UNIVERSE_SEED", "9001");
    std::env::set_var("STARSECTOR_SECTOR_SIZE", "12.5");
    let config = GalaxyConfig::default()
        .with_env_overrides()
        .expect("overrides apply");
    assert_eq!(config.universe_seed, 9001);
    assert_eq!(config.sector_size, 12.5);

    std::env::set_var("STARSECTOR_SECTOR_SIZE", "wide");
    let error = GalaxyConfig::default()
        .with_env_overrides()
        .expect_err("unparsable override");
    assert!(format!("{error}").contains("STARSECTOR_SECTOR_SIZE"));

    std::env::remove_var("STARSECTOR_UNIVERSE_SEED");
    std::env::remove_var("STARSECTOR_SECTOR_SIZE");
}
