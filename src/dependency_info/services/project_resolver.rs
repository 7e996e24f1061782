use crate::dependency_info::domain::{BuildProject, BuildTree, BuildWorkspace, ProjectComponent};
use crate::shared::error::DepInfoError;
use crate::shared::Result;

/// Maps a project component of the resolved graph back to the live project
/// it was built from, looking through included builds when needed.
pub struct ProjectComponentResolver;

impl ProjectComponentResolver {
    /// Resolves `component` to its project and the build that owns it
    ///
    /// The direct lookup by project path in the root build is only tried for
    /// components whose build path is the root build's. This deliberately
    /// narrows the usual "current build first, for any component" rule:
    /// project paths are relative to their own build, so an included build's
    /// `:` project would otherwise resolve to the application. Every other
    /// component is searched in the included build named by its build path.
    ///
    /// # Errors
    /// Returns `DepInfoError::ProjectComponentUnresolved` when neither search
    /// finds the project
    pub fn resolve<'a>(
        workspace: &'a BuildWorkspace,
        component: &ProjectComponent,
    ) -> Result<(&'a BuildTree, &'a BuildProject)> {
        if component.build_path == workspace.root.build_path {
            if let Some(project) = workspace.root.find_project(&component.project_path) {
                return Ok((&workspace.root, project));
            }
        }

        if let Some(included) = workspace.included_build(&component.build_path) {
            if let Some(project) = included.find_project(&component.project_path) {
                return Ok((included, project));
            }
        }

        Err(DepInfoError::ProjectComponentUnresolved {
            build_path: component.build_path.clone(),
            project_path: component.project_path.clone(),
        }
        .into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::BTreeMap;

    fn project(path: &str, name: &str) -> BuildProject {
        BuildProject {
            path: path.to_string(),
            group: "com.x".to_string(),
            name: name.to_string(),
            version: "1.0".to_string(),
            configurations: BTreeMap::new(),
        }
    }

    fn workspace() -> BuildWorkspace {
        BuildWorkspace {
            root: BuildTree {
                build_path: ":".to_string(),
                projects: vec![project(":", "app"), project(":lib", "lib")],
            },
            included_builds: vec![BuildTree {
                build_path: ":plugins".to_string(),
                projects: vec![project(":", "plugins"), project(":gen", "gen")],
            }],
        }
    }

    fn component(build: &str, path: &str) -> ProjectComponent {
        ProjectComponent {
            build_path: build.to_string(),
            project_path: path.to_string(),
        }
    }

    #[test]
    fn test_resolve_in_root_build() {
        let ws = workspace();
        let (build, project) =
            ProjectComponentResolver::resolve(&ws, &component(":", ":lib")).unwrap();
        assert_eq!(build.build_path, ":");
        assert_eq!(project.name, "lib");
    }

    #[test]
    fn test_resolve_in_included_build() {
        let ws = workspace();
        let (build, project) =
            ProjectComponentResolver::resolve(&ws, &component(":plugins", ":gen")).unwrap();
        assert_eq!(build.build_path, ":plugins");
        assert_eq!(project.name, "gen");
    }

    #[test]
    fn test_included_build_root_project_is_not_the_application() {
        let ws = workspace();
        let (build, project) =
            ProjectComponentResolver::resolve(&ws, &component(":plugins", ":")).unwrap();
        assert_eq!(build.build_path, ":plugins");
        assert_eq!(project.name, "plugins");
    }

    #[test]
    fn test_root_build_path_miss_is_fatal() {
        let ws = workspace();
        assert!(ProjectComponentResolver::resolve(&ws, &component(":", ":gen")).is_err());
    }

    #[test]
    fn test_unresolvable_component_is_fatal() {
        let ws = workspace();
        let err =
            ProjectComponentResolver::resolve(&ws, &component(":missing", ":x")).unwrap_err();
        assert!(matches!(
            err.downcast_ref::<DepInfoError>(),
            Some(DepInfoError::ProjectComponentUnresolved { .. })
        ));
    }
}
