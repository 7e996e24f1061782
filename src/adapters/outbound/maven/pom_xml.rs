//! Serde mapping of the subset of the POM schema the model builder reads.
//! Elements outside this subset (build, profiles, reporting, ...) are ignored.

use crate::dependency_info::domain::{Gav, ModelDependency};
use crate::shared::Result;
use serde::Deserialize;
use std::collections::BTreeMap;

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawPom {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub packaging: Option<String>,
    #[serde(default)]
    pub parent: Option<RawParent>,
    #[serde(default)]
    pub properties: Option<BTreeMap<String, String>>,
    #[serde(default)]
    pub dependencies: Option<RawDependencies>,
    #[serde(default)]
    pub dependency_management: Option<RawDependencyManagement>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawParent {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDependencies {
    #[serde(default)]
    pub dependency: Vec<RawDependency>,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawDependencyManagement {
    #[serde(default)]
    pub dependencies: Option<RawDependencies>,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawDependency {
    #[serde(default)]
    pub group_id: Option<String>,
    #[serde(default)]
    pub artifact_id: Option<String>,
    #[serde(default)]
    pub version: Option<String>,
    #[serde(default)]
    pub classifier: Option<String>,
    #[serde(default, rename = "type")]
    pub artifact_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
    #[serde(default)]
    pub optional: Option<String>,
}

impl RawPom {
    /// Parses POM text
    ///
    /// # Errors
    /// Returns an error if the text is not well-formed XML
    pub fn parse(content: &str, location: &str) -> Result<Self> {
        quick_xml::de::from_str(content)
            .map_err(|e| anyhow::anyhow!("Failed to parse POM {}: {}", location, e))
    }

    pub fn properties(&self) -> BTreeMap<String, String> {
        self.properties.clone().unwrap_or_default()
    }

    pub fn dependencies(&self) -> Vec<ModelDependency> {
        to_model(self.dependencies.as_ref())
    }

    pub fn managed_dependencies(&self) -> Vec<ModelDependency> {
        to_model(
            self.dependency_management
                .as_ref()
                .and_then(|dm| dm.dependencies.as_ref()),
        )
    }
}

impl RawParent {
    /// Parent coordinates; `None` when any of the three is missing
    pub fn gav(&self) -> Option<Gav> {
        Some(Gav::new(
            non_blank(self.group_id.as_deref())?,
            non_blank(self.artifact_id.as_deref())?,
            non_blank(self.version.as_deref())?,
        ))
    }
}

fn to_model(dependencies: Option<&RawDependencies>) -> Vec<ModelDependency> {
    dependencies
        .map(|deps| deps.dependency.iter().map(RawDependency::to_model).collect())
        .unwrap_or_default()
}

impl RawDependency {
    fn to_model(&self) -> ModelDependency {
        ModelDependency {
            group_id: trimmed(self.group_id.as_deref()).unwrap_or_default(),
            artifact_id: trimmed(self.artifact_id.as_deref()).unwrap_or_default(),
            version: trimmed(self.version.as_deref()),
            classifier: trimmed(self.classifier.as_deref()),
            artifact_type: trimmed(self.artifact_type.as_deref()),
            scope: trimmed(self.scope.as_deref()),
            optional: trimmed(self.optional.as_deref()),
        }
    }
}

pub fn trimmed(value: Option<&str>) -> Option<String> {
    non_blank(value).map(str::to_string)
}

fn non_blank(value: Option<&str>) -> Option<&str> {
    value.map(str::trim).filter(|v| !v.is_empty())
}
