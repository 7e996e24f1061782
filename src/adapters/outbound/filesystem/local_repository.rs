use crate::dependency_info::domain::Gav;
use crate::ports::outbound::{PomLocator, PomSource};
use crate::shared::security::{safe_read_to_string, validate_coordinate_component, MAX_POM_SIZE};
use crate::shared::Result;
use std::path::{Path, PathBuf};

/// LocalRepositoryLocator adapter reading POMs from a Maven local repository
/// (`~/.m2/repository` layout)
pub struct LocalRepositoryLocator {
    root: PathBuf,
}

impl LocalRepositoryLocator {
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// The user's default local repository, if a home directory is known
    pub fn default_root() -> Option<PathBuf> {
        std::env::var_os("HOME")
            .or_else(|| std::env::var_os("USERPROFILE"))
            .map(|home| Path::new(&home).join(".m2").join("repository"))
    }

    pub fn root(&self) -> &Path {
        &self.root
    }

    /// `<root>/<group as dirs>/<artifact>/<version>/<artifact>-<version>.pom`
    pub fn pom_path(&self, gav: &Gav) -> Result<PathBuf> {
        validate_coordinate_component(&gav.group_id, "Group id")?;
        validate_coordinate_component(&gav.artifact_id, "Artifact id")?;
        validate_coordinate_component(&gav.version, "Version")?;

        let mut path = self.root.clone();
        for segment in gav.group_id.split('.') {
            path.push(segment);
        }
        path.push(&gav.artifact_id);
        path.push(&gav.version);
        path.push(format!("{}-{}.pom", gav.artifact_id, gav.version));
        Ok(path)
    }
}

impl PomLocator for LocalRepositoryLocator {
    fn locate(&self, gav: &Gav) -> Result<PomSource> {
        let path = self.pom_path(gav)?;
        if !path.exists() {
            anyhow::bail!("{} not found in local repository {}", gav, self.root.display());
        }
        let content = safe_read_to_string(&path, "POM", MAX_POM_SIZE)?;
        Ok(PomSource::new(path.display().to_string(), content))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn test_pom_path_layout() {
        let locator = LocalRepositoryLocator::new(PathBuf::from("/repo"));
        let path = locator
            .pom_path(&Gav::new("org.acme.tools", "lib", "1.2"))
            .unwrap();
        assert_eq!(
            path,
            PathBuf::from("/repo/org/acme/tools/lib/1.2/lib-1.2.pom")
        );
    }

    #[test]
    fn test_locate_reads_pom() {
        let temp_dir = TempDir::new().unwrap();
        let dir = temp_dir.path().join("g/lib/1.0");
        fs::create_dir_all(&dir).unwrap();
        fs::write(dir.join("lib-1.0.pom"), "<project/>").unwrap();

        let locator = LocalRepositoryLocator::new(temp_dir.path().to_path_buf());
        let source = locator.locate(&Gav::new("g", "lib", "1.0")).unwrap();
        assert_eq!(source.content, "<project/>");
        assert!(source.location.ends_with("lib-1.0.pom"));
    }

    #[test]
    fn test_locate_missing_pom() {
        let temp_dir = TempDir::new().unwrap();
        let locator = LocalRepositoryLocator::new(temp_dir.path().to_path_buf());
        let err = locator.locate(&Gav::new("g", "lib", "1.0")).unwrap_err();
        assert!(err.to_string().contains("not found in local repository"));
    }

    #[test]
    fn test_traversal_is_rejected() {
        let locator = LocalRepositoryLocator::new(PathBuf::from("/repo"));
        assert!(locator.pom_path(&Gav::new("g", "../etc", "1.0")).is_err());
        assert!(locator.pom_path(&Gav::new("g", "lib", "1/0")).is_err());
        assert!(locator.pom_path(&Gav::new("", "lib", "1.0")).is_err());
    }
}
