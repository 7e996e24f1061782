use super::artifact::{ArtifactKey, Gav, DEFAULT_CLASSIFIER, TYPE_JAR};
use std::collections::BTreeMap;

/// A `<dependency>` entry of an effective Maven model
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ModelDependency {
    pub group_id: String,
    pub artifact_id: String,
    pub version: Option<String>,
    pub classifier: Option<String>,
    pub artifact_type: Option<String>,
    pub scope: Option<String>,
    pub optional: Option<String>,
}

impl ModelDependency {
    /// Matches Maven's `Boolean.parseBoolean` on the raw `<optional>` text
    pub fn is_optional(&self) -> bool {
        self.optional
            .as_deref()
            .map(|s| s.trim().eq_ignore_ascii_case("true"))
            .unwrap_or(false)
    }

    /// Key used to match an entry against dependency management
    pub fn management_key(&self) -> ArtifactKey {
        ArtifactKey::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.classifier.as_deref().unwrap_or(DEFAULT_CLASSIFIER),
            self.artifact_type.as_deref().unwrap_or(TYPE_JAR),
        )
    }
}

/// The effective model of a POM: parents merged, properties interpolated and
/// dependency management applied.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct EffectiveModel {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub packaging: String,
    pub properties: BTreeMap<String, String>,
    pub dependencies: Vec<ModelDependency>,
    pub dependency_management: Vec<ModelDependency>,
}

impl EffectiveModel {
    pub fn gav(&self) -> Gav {
        Gav::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.version.clone(),
        )
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ValidationLevel {
    /// Only the coordinates needed to identify the model are checked
    #[default]
    Minimal,
    /// Every dependency must also carry a resolvable version
    Strict,
}

/// Input for building an effective model
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModelBuildingRequest {
    pub gav: Gav,
    pub system_properties: BTreeMap<String, String>,
    pub validation_level: ValidationLevel,
}

impl ModelBuildingRequest {
    pub fn new(gav: Gav) -> Self {
        Self {
            gav,
            system_properties: BTreeMap::new(),
            validation_level: ValidationLevel::Minimal,
        }
    }

    pub fn with_system_properties(mut self, properties: BTreeMap<String, String>) -> Self {
        self.system_properties = properties;
        self
    }

    pub fn with_validation_level(mut self, level: ValidationLevel) -> Self {
        self.validation_level = level;
        self
    }
}
