use serde::{Deserialize, Serialize};
use std::fmt;

/// Classifier used when a declaration does not name one
pub const DEFAULT_CLASSIFIER: &str = "";

/// Packaging type used when a declaration does not name one
pub const TYPE_JAR: &str = "jar";

/// Identity of an artifact irrespective of its version
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct ArtifactKey {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default)]
    pub classifier: String,
    #[serde(rename = "type", default = "default_type")]
    pub artifact_type: String,
}

fn default_type() -> String {
    TYPE_JAR.to_string()
}

impl ArtifactKey {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        classifier: impl Into<String>,
        artifact_type: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            classifier: classifier.into(),
            artifact_type: artifact_type.into(),
        }
    }

    /// Key with the default classifier and `jar` type
    pub fn jar(group_id: impl Into<String>, artifact_id: impl Into<String>) -> Self {
        Self::new(group_id, artifact_id, DEFAULT_CLASSIFIER, TYPE_JAR)
    }
}

impl fmt::Display for ArtifactKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.classifier.is_empty() {
            write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.artifact_type)
        } else {
            write!(
                f,
                "{}:{}:{}:{}",
                self.group_id, self.artifact_id, self.classifier, self.artifact_type
            )
        }
    }
}

/// Plain artifact coordinates, without scope or flags
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ArtifactCoords {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(default)]
    pub classifier: String,
    #[serde(rename = "type", default = "default_type")]
    pub artifact_type: String,
    pub version: String,
}

impl ArtifactCoords {
    pub fn new(key: ArtifactKey, version: impl Into<String>) -> Self {
        Self {
            group_id: key.group_id,
            artifact_id: key.artifact_id,
            classifier: key.classifier,
            artifact_type: key.artifact_type,
            version: version.into(),
        }
    }

    pub fn jar(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self::new(ArtifactKey::jar(group_id, artifact_id), version)
    }

    pub fn key(&self) -> ArtifactKey {
        ArtifactKey::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.classifier.clone(),
            self.artifact_type.clone(),
        )
    }

    pub fn gav(&self) -> Gav {
        Gav::new(
            self.group_id.clone(),
            self.artifact_id.clone(),
            self.version.clone(),
        )
    }

    /// `group:artifact:classifier:type:version`, classifier left empty when unset
    pub fn to_gactv_string(&self) -> String {
        format!(
            "{}:{}:{}:{}:{}",
            self.group_id, self.artifact_id, self.classifier, self.artifact_type, self.version
        )
    }
}

impl fmt::Display for ArtifactCoords {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_gactv_string())
    }
}

/// Group/artifact/version triple used to locate a POM
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Gav {
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
}

impl Gav {
    pub fn new(
        group_id: impl Into<String>,
        artifact_id: impl Into<String>,
        version: impl Into<String>,
    ) -> Self {
        Self {
            group_id: group_id.into(),
            artifact_id: artifact_id.into(),
            version: version.into(),
        }
    }
}

impl fmt::Display for Gav {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}:{}:{}", self.group_id, self.artifact_id, self.version)
    }
}
