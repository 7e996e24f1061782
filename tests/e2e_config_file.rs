/// End-to-end tests for config file loading and CLI option merging.
///
/// These tests exercise the full flow from config file on disk through CLI invocation
/// to correct output, using `assert_cmd` and `tempfile` for isolated test environments.
use assert_cmd::cargo::cargo_bin_cmd;
use predicates::prelude::*;
use serde_json::Value;
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

// ============================================================================
// Helper Functions
// ============================================================================

fn fixtures_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures")
}

/// Copy the sample build model into `dir` so a config file can sit next to it.
fn create_test_project(dir: &Path) -> PathBuf {
    let build_model = dir.join("build-model.json");
    fs::copy(
        fixtures_path().join("sample-app/build-model.json"),
        &build_model,
    )
    .unwrap();
    build_model
}

/// Write a config file at the specified path.
fn write_config(path: &Path, content: &str) {
    fs::write(path, content).unwrap();
}

/// Config pointing at the fixture repository, plus `extra` YAML lines.
fn offline_config(extra: &str) -> String {
    format!(
        "local_repository: {}\noffline: true\n{}",
        fixtures_path().join("repository").display(),
        extra
    )
}

fn app_direct_ids(stdout: &[u8]) -> Vec<String> {
    let report: Value = serde_json::from_slice(stdout).unwrap();
    report["application"]["direct_dependencies"]
        .as_array()
        .unwrap()
        .iter()
        .map(|d| d["artifact_id"].as_str().unwrap().to_string())
        .collect()
}

// ============================================================================
// Config File Auto-Discovery Tests
// ============================================================================

mod auto_discovery_tests {
    use super::*;

    #[test]
    fn test_auto_discovery_applies_format() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());
        write_config(
            &dir.path().join("depinfo.config.yml"),
            &offline_config("format: markdown\n"),
        );

        cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .arg("--quiet")
            .assert()
            .success()
            .stdout(predicate::str::contains("# Application Model: com.example:shop"));
    }

    #[test]
    fn test_auto_discovery_applies_configuration_table() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());
        write_config(
            &dir.path().join("depinfo.config.yml"),
            &offline_config(
                r#"configurations:
  - configuration: implementation
    scope: compile
  - configuration: runtimeOnly
    scope: ignored
"#,
            ),
        );

        let output = cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .arg("--quiet")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(app_direct_ids(&output.stdout), vec!["web-core", "shop-model"]);
    }

    #[test]
    fn test_auto_discovery_applies_launch_mode() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());
        write_config(
            &dir.path().join("depinfo.config.yml"),
            &offline_config("launch_mode: test\n"),
        );

        let output = cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .arg("--quiet")
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(app_direct_ids(&output.stdout).contains(&"junit".to_string()));
    }

    #[test]
    fn test_no_config_file_uses_defaults() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());

        let output = cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .arg("--local-repository")
            .arg(fixtures_path().join("repository"))
            .args(["--offline", "--quiet"])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(
            app_direct_ids(&output.stdout),
            vec!["web-core", "shop-model", "db-driver"]
        );
    }
}

// ============================================================================
// Explicit Config Path Tests
// ============================================================================

mod explicit_config_tests {
    use super::*;

    #[test]
    fn test_explicit_config_path() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());
        let config_path = dir.path().join("custom.yml");
        write_config(&config_path, &offline_config("format: md\n"));

        cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .arg("--config")
            .arg(&config_path)
            .arg("--quiet")
            .assert()
            .success()
            .stdout(predicate::str::contains("## Application Direct Dependencies"));
    }

    #[test]
    fn test_explicit_config_missing_file() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());

        cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .arg("--config")
            .arg(dir.path().join("absent.yml"))
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to read config file"));
    }
}

// ============================================================================
// CLI Merge Tests
// ============================================================================

mod cli_merge_tests {
    use super::*;

    #[test]
    fn test_cli_format_overrides_config() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());
        write_config(
            &dir.path().join("depinfo.config.yml"),
            &offline_config("format: markdown\n"),
        );

        let output = cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .args(["-f", "json", "--quiet"])
            .output()
            .unwrap();

        assert!(output.status.success());
        let report: Value = serde_json::from_slice(&output.stdout).unwrap();
        assert_eq!(report["application"]["artifact_id"], "shop");
    }

    #[test]
    fn test_cli_scope_policy_overrides_config_table() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());
        write_config(
            &dir.path().join("depinfo.config.yml"),
            &offline_config(
                r#"configurations:
  - configuration: implementation
    scope: compile
"#,
            ),
        );

        let output = cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .args(["--scope-policy", "compile-classpath", "--quiet"])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert_eq!(
            app_direct_ids(&output.stdout),
            vec!["web-core", "shop-model", "db-driver"]
        );
    }

    #[test]
    fn test_cli_mode_overrides_config() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());
        write_config(
            &dir.path().join("depinfo.config.yml"),
            &offline_config("launch_mode: test\n"),
        );

        let output = cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .args(["-m", "normal", "--quiet"])
            .output()
            .unwrap();

        assert!(output.status.success());
        assert!(!app_direct_ids(&output.stdout).contains(&"junit".to_string()));
    }
}

// ============================================================================
// Validation Tests
// ============================================================================

mod validation_tests {
    use super::*;

    #[test]
    fn test_invalid_yaml_fails() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());
        write_config(
            &dir.path().join("depinfo.config.yml"),
            "invalid: yaml: [[[broken",
        );

        cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Failed to parse config file"));
    }

    #[test]
    fn test_non_http_repository_fails() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());
        write_config(
            &dir.path().join("depinfo.config.yml"),
            "remote_repositories:\n  - ftp://repo.example.com\n",
        );

        cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("Invalid config file"))
            .stderr(predicate::str::contains("remote_repositories[0]"));
    }

    #[test]
    fn test_duplicate_configuration_fails() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());
        write_config(
            &dir.path().join("depinfo.config.yml"),
            r#"configurations:
  - configuration: api
    scope: compile
  - configuration: api
    scope: runtime
"#,
        );

        cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .assert()
            .code(3)
            .stderr(predicate::str::contains("mapped more than once"));
    }

    #[test]
    fn test_unknown_field_warns_but_succeeds() {
        let dir = TempDir::new().unwrap();
        let build_model = create_test_project(dir.path());
        write_config(
            &dir.path().join("depinfo.config.yml"),
            &offline_config("colour: blue\n"),
        );

        cargo_bin_cmd!("depinfo")
            .arg("--build-model")
            .arg(&build_model)
            .arg("--quiet")
            .assert()
            .success()
            .stderr(predicate::str::contains("Unknown config field 'colour'"));
    }
}
