use super::artifact::{ArtifactCoords, ArtifactKey, DEFAULT_CLASSIFIER, TYPE_JAR};
use super::declared_dependency::SCOPE_COMPILE;
use super::flags::DependencyFlags;
use serde::Serialize;

/// Immutable direct-dependency record attached to a resolved artifact
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Dependency {
    group_id: String,
    artifact_id: String,
    classifier: String,
    #[serde(rename = "type")]
    artifact_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    version: Option<String>,
    scope: String,
    optional: bool,
    flags: DependencyFlags,
}

impl Dependency {
    pub fn builder() -> DependencyBuilder {
        DependencyBuilder::default()
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn classifier(&self) -> &str {
        &self.classifier
    }

    pub fn artifact_type(&self) -> &str {
        &self.artifact_type
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn scope(&self) -> &str {
        &self.scope
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn flags(&self) -> DependencyFlags {
        self.flags
    }

    pub fn is_flag_set(&self, flag: DependencyFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn key(&self) -> ArtifactKey {
        ArtifactKey::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.classifier.clone(),
            self.artifact_type.clone(),
        )
    }

    /// Plain coordinates without scope or flags, `None` while unversioned
    pub fn to_plain_coords(&self) -> Option<ArtifactCoords> {
        self.version
            .as_ref()
            .map(|v| ArtifactCoords::new(self.key(), v.clone()))
    }
}

/// Mutable builder for [`Dependency`].
///
/// `set_flags` is additive, mirroring how flags accumulate while an
/// artifact moves through the model building stages.
#[derive(Debug, Clone)]
pub struct DependencyBuilder {
    group_id: String,
    artifact_id: String,
    classifier: String,
    artifact_type: String,
    version: Option<String>,
    scope: String,
    flags: DependencyFlags,
}

impl Default for DependencyBuilder {
    fn default() -> Self {
        Self {
            group_id: String::new(),
            artifact_id: String::new(),
            classifier: DEFAULT_CLASSIFIER.to_string(),
            artifact_type: TYPE_JAR.to_string(),
            version: None,
            scope: SCOPE_COMPILE.to_string(),
            flags: DependencyFlags::NONE,
        }
    }
}

impl DependencyBuilder {
    pub fn group_id(mut self, group_id: impl Into<String>) -> Self {
        self.group_id = group_id.into();
        self
    }

    pub fn artifact_id(mut self, artifact_id: impl Into<String>) -> Self {
        self.artifact_id = artifact_id.into();
        self
    }

    pub fn classifier(mut self, classifier: impl Into<String>) -> Self {
        self.classifier = classifier.into();
        self
    }

    pub fn artifact_type(mut self, artifact_type: impl Into<String>) -> Self {
        self.artifact_type = artifact_type.into();
        self
    }

    pub fn version(mut self, version: Option<String>) -> Self {
        self.version = version;
        self
    }

    pub fn scope(mut self, scope: impl Into<String>) -> Self {
        self.scope = scope.into();
        self
    }

    pub fn set_flags(mut self, flags: DependencyFlags) -> Self {
        self.flags.insert(flags);
        self
    }

    pub fn optional(mut self, optional: bool) -> Self {
        if optional {
            self.flags.insert(DependencyFlags::OPTIONAL);
        } else {
            self.flags.remove(DependencyFlags::OPTIONAL);
        }
        self
    }

    pub fn key(&self) -> ArtifactKey {
        ArtifactKey::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.classifier.clone(),
            self.artifact_type.clone(),
        )
    }

    pub fn build(self) -> Dependency {
        Dependency {
            optional: self.flags.contains(DependencyFlags::OPTIONAL),
            group_id: self.group_id,
            artifact_id: self.artifact_id,
            classifier: self.classifier,
            artifact_type: self.artifact_type,
            version: self.version,
            scope: self.scope,
            flags: self.flags,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_builder_defaults() {
        let dep = Dependency::builder().group_id("g").artifact_id("a").build();
        assert_eq!(dep.classifier(), "");
        assert_eq!(dep.artifact_type(), "jar");
        assert_eq!(dep.scope(), "compile");
        assert_eq!(dep.version(), None);
        assert!(dep.flags().is_empty());
    }

    #[test]
    fn test_set_flags_accumulates() {
        let dep = Dependency::builder()
            .group_id("g")
            .artifact_id("a")
            .set_flags(DependencyFlags::RUNTIME_CP)
            .set_flags(DependencyFlags::DIRECT)
            .build();
        assert!(dep.is_flag_set(DependencyFlags::RUNTIME_CP));
        assert!(dep.is_flag_set(DependencyFlags::DIRECT));
    }

    #[test]
    fn test_optional_tracks_flag() {
        let dep = Dependency::builder()
            .group_id("g")
            .artifact_id("a")
            .set_flags(DependencyFlags::OPTIONAL)
            .optional(false)
            .build();
        assert!(!dep.is_optional());
        assert!(!dep.is_flag_set(DependencyFlags::OPTIONAL));

        let dep = Dependency::builder().optional(true).build();
        assert!(dep.is_optional());
        assert!(dep.is_flag_set(DependencyFlags::OPTIONAL));
    }

    #[test]
    fn test_plain_coords_requires_version() {
        let unversioned = Dependency::builder().group_id("g").artifact_id("a").build();
        assert!(unversioned.to_plain_coords().is_none());

        let versioned = Dependency::builder()
            .group_id("g")
            .artifact_id("a")
            .version(Some("1.0".to_string()))
            .set_flags(DependencyFlags::DIRECT)
            .build();
        assert_eq!(
            versioned.to_plain_coords(),
            Some(ArtifactCoords::jar("g", "a", "1.0"))
        );
    }
}
