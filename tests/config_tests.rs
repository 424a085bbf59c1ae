//! Configuration loading tests

use artifactory_namespaces::config::{
    ConfigOverrides, OutputFormat, OverrideKey, load_config, load_config_from_str,
};
use std::fs;
use tempfile::tempdir;

const FULL_CONFIG: &str = r#"
repos:
  internal:
    - libs-release-local
    - libs-snapshot-local
  thirdparty: maven-remote,npm-remote
users:
  public: [anonymous]
  internal: [deployer]
groups:
  public: readers
  internal: [developers, qa]
output_dir: generated/permissions
output_format: yaml
"#;

#[test]
fn test_full_config() {
    let config = load_config_from_str(FULL_CONFIG, &ConfigOverrides::new()).unwrap();

    assert_eq!(
        config.internal_repos(),
        ["libs-release-local", "libs-snapshot-local"]
    );
    assert_eq!(config.thirdparty_repos(), ["maven-remote", "npm-remote"]);
    assert_eq!(config.public_users(), ["anonymous"]);
    assert_eq!(config.internal_users(), ["deployer"]);
    assert_eq!(config.public_groups(), ["readers"]);
    assert_eq!(config.internal_groups(), ["developers", "qa"]);
    assert_eq!(config.output_dir, "generated/permissions/");
    assert_eq!(config.output_format, OutputFormat::Yaml);
}

#[test]
fn test_config_defaults() {
    let config = load_config_from_str(
        r#"
repos:
  internal: repo1
"#,
        &ConfigOverrides::new(),
    )
    .unwrap();

    assert_eq!(config.internal_repos(), ["repo1"]);
    assert!(config.thirdparty_repos().is_empty());
    assert!(config.public_users().is_empty());
    assert!(config.internal_groups().is_empty());
    assert_eq!(config.output_dir, "out/");
    assert_eq!(config.output_format, OutputFormat::Json);
}

#[test]
fn test_null_lists_are_empty() {
    let config = load_config_from_str(
        r#"
repos:
  internal:
  thirdparty:
users:
  public:
"#,
        &ConfigOverrides::new(),
    )
    .unwrap();

    assert!(config.internal_repos().is_empty());
    assert!(config.thirdparty_repos().is_empty());
    assert!(config.public_users().is_empty());
}

#[test]
fn test_unknown_keys_are_ignored() {
    let config = load_config_from_str(
        r#"
namespaces_file: should-not-matter.yaml
loglevel: 10
output_dir: out
"#,
        &ConfigOverrides::new(),
    )
    .unwrap();
    assert_eq!(config.output_dir, "out/");
}

#[test]
#[serial_test::serial]
fn test_load_config_from_file_with_overrides() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    let overrides = ConfigOverrides::new()
        .set(OverrideKey::OutputDir, "cli-out")
        .set(OverrideKey::OutputFormat, "json");

    let config = load_config(&config_path, &overrides).unwrap();

    assert_eq!(config.output_dir, "cli-out/");
    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.public_groups(), ["readers"]);
}

#[test]
#[serial_test::serial]
fn test_malformed_file_is_error() {
    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, "repos: [unclosed").unwrap();

    assert!(load_config(&config_path, &ConfigOverrides::new()).is_err());
}

#[test]
#[serial_test::serial]
fn test_env_var_overrides_file() {
    use std::env;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    unsafe {
        env::set_var("ARTIFACTORY_NAMESPACES__OUTPUT_FORMAT", "json");
        env::set_var("ARTIFACTORY_NAMESPACES__REPOS__INTERNAL", "env-repo-a,env-repo-b");
    }

    let config = load_config(&config_path, &ConfigOverrides::new()).unwrap();

    assert_eq!(config.output_format, OutputFormat::Json);
    assert_eq!(config.internal_repos(), ["env-repo-a", "env-repo-b"]);

    unsafe {
        env::remove_var("ARTIFACTORY_NAMESPACES__OUTPUT_FORMAT");
        env::remove_var("ARTIFACTORY_NAMESPACES__REPOS__INTERNAL");
    }
}

#[test]
#[serial_test::serial]
fn test_cli_override_beats_env_var() {
    use std::env;

    let dir = tempdir().unwrap();
    let config_path = dir.path().join("config.yaml");
    fs::write(&config_path, FULL_CONFIG).unwrap();

    unsafe {
        env::set_var("ARTIFACTORY_NAMESPACES__OUTPUT_DIR", "env-out");
    }

    let overrides = ConfigOverrides::new().set(OverrideKey::OutputDir, "cli-out/");
    let config = load_config(&config_path, &overrides).unwrap();
    assert_eq!(config.output_dir, "cli-out/");

    unsafe {
        env::remove_var("ARTIFACTORY_NAMESPACES__OUTPUT_DIR");
    }
}
