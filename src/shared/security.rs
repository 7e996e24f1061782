use crate::shared::Result;
use std::fs;
use std::path::Path;

/// Maximum size of a build model document (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Maximum size of a single POM file (10 MB)
pub const MAX_POM_SIZE: u64 = 10 * 1024 * 1024;

/// Validates that a path exists and is a regular file (not a directory or symlink)
///
/// # Security
/// Uses `symlink_metadata()` so the link itself is inspected, not its target.
///
/// # Errors
/// Returns an error if:
/// - The path doesn't exist
/// - The path is a symbolic link
/// - The path is not a regular file
pub fn validate_regular_file(path: &Path, file_description: &str) -> Result<u64> {
    let metadata = fs::symlink_metadata(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {} metadata: {}", file_description, e))?;

    if metadata.is_symlink() {
        anyhow::bail!(
            "Security: {} is a symbolic link. For security reasons, symbolic links are not allowed.",
            path.display()
        );
    }

    if !metadata.is_file() {
        anyhow::bail!("{} is not a regular file", path.display());
    }

    Ok(metadata.len())
}

/// Validates file size is within acceptable limits
pub fn validate_file_size(file_size: u64, path: &Path, max_size: u64) -> Result<()> {
    if file_size > max_size {
        anyhow::bail!(
            "Security: {} is too large ({} bytes). Maximum allowed size is {} bytes.",
            path.display(),
            file_size,
            max_size
        );
    }
    Ok(())
}

/// Reads a file after the regular-file and size checks pass.
pub fn safe_read_to_string(path: &Path, file_description: &str, max_size: u64) -> Result<String> {
    let size = validate_regular_file(path, file_description)?;
    validate_file_size(size, path, max_size)?;
    fs::read_to_string(path)
        .map_err(|e| anyhow::anyhow!("Failed to read {}: {}", file_description, e))
}

/// Validates a single coordinate component (group, artifact or version)
/// before it is turned into a repository path or URL segment.
pub fn validate_coordinate_component(component: &str, component_type: &str) -> Result<()> {
    if component.trim().is_empty() {
        anyhow::bail!("{} must not be empty", component_type);
    }

    if component.contains('/') || component.contains('\\') {
        anyhow::bail!(
            "Security: {} contains path separators which are not allowed",
            component_type
        );
    }

    if component.contains("..") {
        anyhow::bail!(
            "Security: {} contains '..' which is not allowed",
            component_type
        );
    }

    if component.contains('#') || component.contains('?') || component.contains('@') {
        anyhow::bail!("Security: {} contains URL-unsafe characters", component_type);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_validate_regular_file_success() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("test.txt");
        fs::write(&file_path, "test").unwrap();

        let size = validate_regular_file(&file_path, "test file").unwrap();
        assert_eq!(size, 4);
    }

    #[test]
    fn test_validate_regular_file_is_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = validate_regular_file(temp_dir.path(), "test directory");
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("not a regular file"));
    }

    #[test]
    fn test_validate_file_size_exceeds_limit() {
        let path = PathBuf::from("/test/file.txt");
        let result = validate_file_size(MAX_POM_SIZE + 1, &path, MAX_POM_SIZE);
        assert!(result.is_err());
        assert!(result.unwrap_err().to_string().contains("too large"));
    }

    #[test]
    fn test_safe_read_to_string() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("a.pom");
        fs::write(&file_path, "<project/>").unwrap();

        let content = safe_read_to_string(&file_path, "POM", MAX_POM_SIZE).unwrap();
        assert_eq!(content, "<project/>");
    }

    #[cfg(unix)]
    #[test]
    fn test_safe_read_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("target.pom");
        let link = temp_dir.path().join("link.pom");
        fs::write(&target, "<project/>").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = safe_read_to_string(&link, "POM", MAX_POM_SIZE);
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_validate_coordinate_component() {
        assert!(validate_coordinate_component("commons-io", "Artifact").is_ok());
        assert!(validate_coordinate_component("2.11.0", "Version").is_ok());
        assert!(validate_coordinate_component("", "Artifact").is_err());
        assert!(validate_coordinate_component("a/b", "Artifact").is_err());
        assert!(validate_coordinate_component("..", "Version").is_err());
        assert!(validate_coordinate_component("1.0?x", "Version").is_err());
    }
}
