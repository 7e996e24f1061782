use crate::dependency_info::domain::{
    deduplicate, BuildProject, BuildTree, DeclaredDependency, DependencyDeclaration,
};
use crate::dependency_info::policies::ScopePolicy;
use crate::shared::error::DepInfoError;
use crate::shared::Result;

/// DeclaredDependencyExtractor reads the dependency blocks of a build project
/// and normalizes them into [`DeclaredDependency`] records.
///
/// Configurations are visited in the order of the scope policy table, so the
/// output follows declaration order within each configuration.
pub struct DeclaredDependencyExtractor;

impl DeclaredDependencyExtractor {
    /// Extracts the declared dependencies of `project`
    ///
    /// # Arguments
    /// * `project` - The project whose build script is read
    /// * `build` - The build the project belongs to, used to resolve sibling projects
    /// * `include_test_scopes` - Whether test configurations are read
    /// * `policy` - Configuration-to-scope table
    ///
    /// # Errors
    /// Returns `DepInfoError::ProjectNotFound` when a project dependency names
    /// a project that is not part of the build
    pub fn extract(
        project: &BuildProject,
        build: &BuildTree,
        include_test_scopes: bool,
        policy: &ScopePolicy,
    ) -> Result<Vec<DeclaredDependency>> {
        let mut declared = Vec::new();

        for (configuration, scope) in policy.mappings(include_test_scopes) {
            let Some(declarations) = project.configuration(configuration) else {
                continue;
            };

            for declaration in declarations {
                declared.push(Self::to_declared(project, build, declaration, scope)?);
            }
        }

        Ok(deduplicate(declared))
    }

    fn to_declared(
        project: &BuildProject,
        build: &BuildTree,
        declaration: &DependencyDeclaration,
        scope: &str,
    ) -> Result<DeclaredDependency> {
        match declaration {
            DependencyDeclaration::External(module) => Ok(DeclaredDependency::from_build_script(
                module.group.clone(),
                module.name.clone(),
                module.version.clone(),
                scope,
            )),
            DependencyDeclaration::Project(reference) => {
                let path = project.absolute_path(&reference.path);
                let sibling =
                    build
                        .find_project(&path)
                        .ok_or_else(|| DepInfoError::ProjectNotFound {
                            path: path.clone(),
                            declared_by: project.path.clone(),
                        })?;

                // the version is taken verbatim, "unspecified" included
                Ok(DeclaredDependency::from_build_script(
                    sibling.group.clone(),
                    sibling.name.clone(),
                    Some(sibling.version.clone()),
                    scope,
                ))
            }
        }
    }
}
