//! Flattened views of artifacts and their direct dependencies

use serde::Serialize;

/// View of one node of the application graph
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ArtifactView {
    /// `group:artifact:classifier:type:version`
    pub coords: String,
    pub group_id: String,
    pub artifact_id: String,
    pub version: String,
    pub flags: Vec<String>,
    /// Transitive coordinates in GACTV form
    pub dependencies: Vec<String>,
    pub direct_dependencies: Vec<DirectDependencyView>,
}

/// View of one direct dependency record
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DirectDependencyView {
    pub group_id: String,
    pub artifact_id: String,
    #[serde(skip_serializing_if = "String::is_empty")]
    pub classifier: String,
    #[serde(rename = "type")]
    pub artifact_type: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub version: Option<String>,
    pub scope: String,
    pub optional: bool,
    pub flags: Vec<String>,
}

impl ArtifactView {
    pub fn is_flagged(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }
}

impl DirectDependencyView {
    pub fn is_flagged(&self, flag: &str) -> bool {
        self.flags.iter().any(|f| f == flag)
    }
}
