use crate::dependency_info::domain::BuildModel;
use crate::ports::outbound::BuildModelReader;
use crate::shared::error::DepInfoError;
use crate::shared::security::{safe_read_to_string, MAX_FILE_SIZE};
use crate::shared::Result;
use std::path::Path;
use tracing::debug;

/// JsonBuildModelReader adapter loading the build model document from disk
///
/// The file is read with the shared safe-read checks: symbolic links are
/// rejected and the size is capped.
pub struct JsonBuildModelReader;

impl JsonBuildModelReader {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonBuildModelReader {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildModelReader for JsonBuildModelReader {
    fn read_build_model(&self, path: &Path) -> Result<BuildModel> {
        if !path.exists() {
            return Err(DepInfoError::BuildModelNotFound {
                path: path.to_path_buf(),
                suggestion: "Export the build model with the build plugin first, or pass the correct file with --build-model.".to_string(),
            }
            .into());
        }

        let content = safe_read_to_string(path, "build model", MAX_FILE_SIZE).map_err(|e| {
            DepInfoError::FileReadError {
                path: path.to_path_buf(),
                details: e.to_string(),
            }
        })?;

        let model: BuildModel =
            serde_json::from_str(&content).map_err(|e| DepInfoError::BuildModelParseError {
                path: path.to_path_buf(),
                details: e.to_string(),
            })?;

        debug!(
            "Read build model with {} root project(s), {} included build(s), {} resolved node(s)",
            model.workspace.root.projects.len(),
            model.workspace.included_builds.len(),
            model.resolved.len()
        );
        Ok(model)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    const MINIMAL: &str = r#"{
        "application": { "project_path": ":" },
        "root": { "projects": [
            { "path": ":", "group": "com.acme", "name": "app", "version": "1.0" }
        ] }
    }"#;

    #[test]
    fn test_read_minimal_model() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build-model.json");
        fs::write(&path, MINIMAL).unwrap();

        let model = JsonBuildModelReader::new().read_build_model(&path).unwrap();
        assert_eq!(model.application.build_path, ":");
        assert_eq!(model.workspace.root.projects[0].name, "app");
        assert!(model.workspace.included_builds.is_empty());
        assert!(model.resolved.is_empty());
        assert!(model.launch_mode.is_none());
    }

    #[test]
    fn test_missing_file() {
        let temp_dir = TempDir::new().unwrap();
        let err = JsonBuildModelReader::new()
            .read_build_model(&temp_dir.path().join("nope.json"))
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepInfoError>(),
            Some(DepInfoError::BuildModelNotFound { .. })
        ));
    }

    #[test]
    fn test_malformed_file() {
        let temp_dir = TempDir::new().unwrap();
        let path = temp_dir.path().join("build-model.json");
        fs::write(&path, "{ not json").unwrap();

        let err = JsonBuildModelReader::new().read_build_model(&path).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepInfoError>(),
            Some(DepInfoError::BuildModelParseError { .. })
        ));
    }

    #[test]
    fn test_directory_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let err = JsonBuildModelReader::new()
            .read_build_model(temp_dir.path())
            .unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepInfoError>(),
            Some(DepInfoError::FileReadError { .. })
        ));
    }

    #[cfg(unix)]
    #[test]
    fn test_symlink_is_rejected() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        fs::write(&target, MINIMAL).unwrap();
        let link = temp_dir.path().join("link.json");
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let err = JsonBuildModelReader::new().read_build_model(&link).unwrap_err();
        assert!(err.to_string().contains("symbolic link"));
    }
}
