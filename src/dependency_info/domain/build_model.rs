use super::artifact::{ArtifactCoords, ArtifactKey, Gav};
use super::flags::DependencyFlags;
use super::launch_mode::LaunchMode;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Path of the root build and of the root project inside any build
pub const ROOT_PATH: &str = ":";

/// A single line of a configuration's dependency block
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DependencyDeclaration {
    External(ExternalReference),
    Project(ProjectReference),
}

/// `group:name:version` reference to a module resolved from a repository
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ExternalReference {
    #[serde(default)]
    pub group: String,
    pub name: String,
    #[serde(default)]
    pub version: Option<String>,
}

/// `project(":path")` reference to a sibling project of the same build
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ProjectReference {
    pub path: String,
}

/// A project of a build, with its dependency declarations grouped by
/// configuration name
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildProject {
    pub path: String,
    pub group: String,
    pub name: String,
    pub version: String,
    #[serde(default)]
    pub configurations: BTreeMap<String, Vec<DependencyDeclaration>>,
}

impl BuildProject {
    pub fn configuration(&self, name: &str) -> Option<&[DependencyDeclaration]> {
        self.configurations.get(name).map(Vec::as_slice)
    }

    /// Turns a project path as written in this project's build script into an
    /// absolute one. Paths without a leading `:` are relative to this project.
    pub fn absolute_path(&self, path: &str) -> String {
        if path.starts_with(ROOT_PATH) {
            path.to_string()
        } else if self.path == ROOT_PATH {
            format!(":{}", path)
        } else {
            format!("{}:{}", self.path, path)
        }
    }

    pub fn coords(&self) -> ArtifactCoords {
        ArtifactCoords::jar(self.group.clone(), self.name.clone(), self.version.clone())
    }
}

/// One build of a (possibly composite) build: the root build or an included one
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildTree {
    #[serde(default = "root_path")]
    pub build_path: String,
    #[serde(default)]
    pub projects: Vec<BuildProject>,
}

fn root_path() -> String {
    ROOT_PATH.to_string()
}

impl BuildTree {
    pub fn find_project(&self, path: &str) -> Option<&BuildProject> {
        self.projects.iter().find(|p| p.path == path)
    }
}

/// The root build together with the builds it includes
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildWorkspace {
    pub root: BuildTree,
    #[serde(default)]
    pub included_builds: Vec<BuildTree>,
}

impl BuildWorkspace {
    pub fn included_build(&self, build_path: &str) -> Option<&BuildTree> {
        self.included_builds
            .iter()
            .find(|b| b.build_path == build_path)
    }
}

/// Identifies a project inside a build
#[derive(Debug, Clone, PartialEq, Eq, Hash, Deserialize)]
pub struct ProjectComponent {
    #[serde(default = "root_path")]
    pub build_path: String,
    pub project_path: String,
}

/// Origin of a node in the resolved graph
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ComponentId {
    Project(ProjectComponent),
    Module(Gav),
}

impl ComponentId {
    pub fn display_name(&self) -> String {
        match self {
            ComponentId::Project(p) if p.build_path == ROOT_PATH => {
                format!("project {}", p.project_path)
            }
            ComponentId::Project(p) => format!("project {}{}", p.build_path, p.project_path),
            ComponentId::Module(gav) => gav.to_string(),
        }
    }
}

/// A node of the resolved graph as exported by the build tool
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct ResolvedNode {
    pub component: ComponentId,
    pub coords: ArtifactCoords,
    #[serde(default)]
    pub flags: DependencyFlags,
    #[serde(default)]
    pub dependencies: Vec<ArtifactCoords>,
}

/// Everything the build tool exports for one build invocation
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct BuildModel {
    /// The project the application is built from
    pub application: ProjectComponent,
    #[serde(default)]
    pub launch_mode: Option<LaunchMode>,
    #[serde(flatten)]
    pub workspace: BuildWorkspace,
    #[serde(default)]
    pub resolved: Vec<ResolvedNode>,
    /// Keys the root declares directly; derived from the application
    /// project's declarations when absent
    #[serde(default)]
    pub application_dependencies: Option<Vec<ArtifactKey>>,
}
