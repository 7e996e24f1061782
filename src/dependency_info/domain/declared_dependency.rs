use super::artifact::{ArtifactKey, DEFAULT_CLASSIFIER, TYPE_JAR};
use super::maven_model::ModelDependency;
use std::collections::HashSet;

pub const SCOPE_COMPILE: &str = "compile";
pub const SCOPE_RUNTIME: &str = "runtime";
pub const SCOPE_TEST: &str = "test";

/// Build scripts do not expose whether a declaration is optional, so every
/// build-script declaration is recorded as non-optional. Likewise classifier
/// and type stay unset and are defaulted during reconciliation.
pub const BUILD_SCRIPT_OPTIONALITY_UNKNOWN: bool = false;

/// A dependency as authored in a build script or POM, before version
/// arbitration by the build tool.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct DeclaredDependency {
    group_id: String,
    artifact_id: String,
    version: Option<String>,
    classifier: Option<String>,
    artifact_type: Option<String>,
    scope: Option<String>,
    optional: bool,
}

impl DeclaredDependency {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<String>,
        classifier: Option<String>,
        artifact_type: Option<String>,
        scope: Option<String>,
        optional: bool,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version,
            classifier,
            artifact_type,
            scope,
            optional,
        }
    }

    /// Declaration coming from a build script configuration
    pub fn from_build_script(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: Option<String>,
        scope: &str,
    ) -> Self {
        Self::new(
            group_id,
            artifact_id,
            version,
            None,
            None,
            Some(scope.to_string()),
            BUILD_SCRIPT_OPTIONALITY_UNKNOWN,
        )
    }

    pub fn group_id(&self) -> &str {
        &self.group_id
    }

    pub fn artifact_id(&self) -> &str {
        &self.artifact_id
    }

    pub fn version(&self) -> Option<&str> {
        self.version.as_deref()
    }

    pub fn classifier(&self) -> Option<&str> {
        self.classifier.as_deref()
    }

    pub fn artifact_type(&self) -> Option<&str> {
        self.artifact_type.as_deref()
    }

    pub fn scope(&self) -> Option<&str> {
        self.scope.as_deref()
    }

    pub fn is_optional(&self) -> bool {
        self.optional
    }

    pub fn is_test_scoped(&self) -> bool {
        self.scope.as_deref() == Some(SCOPE_TEST)
    }

    /// Application-model key, with classifier and type defaulted
    pub fn key(&self) -> ArtifactKey {
        ArtifactKey::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.classifier.as_deref().unwrap_or(DEFAULT_CLASSIFIER),
            self.artifact_type.as_deref().unwrap_or(TYPE_JAR),
        )
    }
}

impl From<&ModelDependency> for DeclaredDependency {
    fn from(dep: &ModelDependency) -> Self {
        Self {
            group_id: dep.group_id.clone(),
            artifact_id: dep.artifact_id.clone(),
            version: dep.version.clone(),
            classifier: Some(
                dep.classifier
                    .clone()
                    .unwrap_or_else(|| DEFAULT_CLASSIFIER.to_string()),
            ),
            artifact_type: Some(
                dep.artifact_type
                    .clone()
                    .unwrap_or_else(|| TYPE_JAR.to_string()),
            ),
            scope: Some(
                dep.scope
                    .clone()
                    .unwrap_or_else(|| SCOPE_COMPILE.to_string()),
            ),
            optional: dep.is_optional(),
        }
    }
}

/// Removes entries that repeat the full declaration tuple, keeping the first
/// occurrence and the original order.
pub fn deduplicate(declared: Vec<DeclaredDependency>) -> Vec<DeclaredDependency> {
    let mut seen = HashSet::with_capacity(declared.len());
    declared
        .into_iter()
        .filter(|dep| seen.insert(dep.clone()))
        .collect()
}
