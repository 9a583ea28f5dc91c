/// End-to-end tests for config file loading and CLI option merging.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

const CONFIG_FILENAME: &str = "req2pyproject.config.yml";

fn write_requirements(dir: &Path) {
    fs::write(dir.join("requirements.txt"), "requests==2.31.0\n").unwrap();
}

fn read_manifest(dir: &Path) -> toml::Table {
    fs::read_to_string(dir.join("pyproject.toml"))
        .unwrap()
        .parse()
        .unwrap()
}

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_discovered_config_sets_header() {
        let dir = TempDir::new().unwrap();
        write_requirements(dir.path());
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            r#"
project:
  name: discovered-app
  version: "3.1.0"
  description: Discovered from config
  authors:
    - Jane Doe <jane@example.com>
    - John Roe <john@example.com>
  python: "^3.12"
"#,
        )
        .unwrap();

        cargo_bin_cmd!("req2pyproject")
            .current_dir(dir.path())
            .assert()
            .success();

        let table = read_manifest(dir.path());
        let poetry = &table["tool"]["poetry"];
        assert_eq!(poetry["name"].as_str(), Some("discovered-app"));
        assert_eq!(poetry["version"].as_str(), Some("3.1.0"));
        assert_eq!(poetry["description"].as_str(), Some("Discovered from config"));
        assert_eq!(poetry["authors"].as_array().unwrap().len(), 2);
        assert_eq!(poetry["dependencies"]["python"].as_str(), Some("^3.12"));
        assert_eq!(
            poetry["dependencies"]["requests"].as_str(),
            Some("==2.31.0")
        );
    }

    #[test]
    fn test_unknown_field_warns() {
        let dir = TempDir::new().unwrap();
        write_requirements(dir.path());
        fs::write(dir.path().join(CONFIG_FILENAME), "colour: blue\n").unwrap();

        cargo_bin_cmd!("req2pyproject")
            .current_dir(dir.path())
            .assert()
            .success()
            .stderr(predicate::str::contains(
                "Unknown config field 'colour' will be ignored",
            ));
    }

    #[test]
    fn test_invalid_config_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_requirements(dir.path());
        fs::write(dir.path().join(CONFIG_FILENAME), "project:\n  python: \"\"\n").unwrap();

        cargo_bin_cmd!("req2pyproject")
            .current_dir(dir.path())
            .assert()
            .code(1)
            .stderr(predicate::str::contains("project.python must not be empty"));

        assert!(!dir.path().join("pyproject.toml").exists());
    }
}

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        write_requirements(dir.path());
        fs::write(dir.path().join("custom.yml"), "project:\n  name: explicit\n").unwrap();

        cargo_bin_cmd!("req2pyproject")
            .current_dir(dir.path())
            .args(["--config", "custom.yml"])
            .assert()
            .success();

        let table = read_manifest(dir.path());
        assert_eq!(table["tool"]["poetry"]["name"].as_str(), Some("explicit"));
    }

    #[test]
    fn test_explicit_config_missing_is_fatal() {
        let dir = TempDir::new().unwrap();
        write_requirements(dir.path());

        cargo_bin_cmd!("req2pyproject")
            .current_dir(dir.path())
            .args(["-c", "nope.yml"])
            .assert()
            .code(1)
            .stderr(predicate::str::contains("Failed to read config file"));
    }

    #[test]
    fn test_cli_project_name_overrides_config() {
        let dir = TempDir::new().unwrap();
        write_requirements(dir.path());
        fs::write(
            dir.path().join(CONFIG_FILENAME),
            "project:\n  name: from-config\n  version: \"9.9.9\"\n",
        )
        .unwrap();

        cargo_bin_cmd!("req2pyproject")
            .current_dir(dir.path())
            .args(["--project-name", "from-cli"])
            .assert()
            .success();

        let table = read_manifest(dir.path());
        assert_eq!(table["tool"]["poetry"]["name"].as_str(), Some("from-cli"));
        assert_eq!(table["tool"]["poetry"]["version"].as_str(), Some("9.9.9"));
    }
}
