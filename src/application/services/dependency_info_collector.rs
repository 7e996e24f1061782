use super::pom_model_resolver::PomModelResolver;
use crate::dependency_info::domain::{
    ApplicationModelBuilder, ArtifactKey, BuildWorkspace, ComponentId, DeclaredDependency,
    LaunchMode, ProjectComponent,
};
use crate::dependency_info::policies::ScopePolicy;
use crate::dependency_info::services::{
    DeclaredDependencyExtractor, DirectDependencyReconciler, ProjectComponentResolver,
};
use crate::ports::outbound::{ModelBuilder, PomLocator};
use crate::shared::Result;
use std::collections::{HashMap, HashSet};
use tracing::{debug, info};

/// DependencyInfoCollector is the per-invocation session that memoizes the
/// declared dependencies of every artifact of the application graph.
///
/// Each key is collected at most once. Keys whose POM could not be resolved
/// are remembered as well, so a failing lookup is neither retried nor logged
/// twice.
pub struct DependencyInfoCollector<'a, L, M> {
    workspace: &'a BuildWorkspace,
    policy: &'a ScopePolicy,
    launch_mode: LaunchMode,
    pom_resolver: &'a PomModelResolver<L, M>,
    declared_by_key: HashMap<ArtifactKey, Vec<DeclaredDependency>>,
    unresolved: HashSet<ArtifactKey>,
}

impl<'a, L, M> DependencyInfoCollector<'a, L, M>
where
    L: PomLocator,
    M: ModelBuilder,
{
    pub fn new(
        workspace: &'a BuildWorkspace,
        policy: &'a ScopePolicy,
        launch_mode: LaunchMode,
        pom_resolver: &'a PomModelResolver<L, M>,
    ) -> Self {
        Self {
            workspace,
            policy,
            launch_mode,
            pom_resolver,
            declared_by_key: HashMap::new(),
            unresolved: HashSet::new(),
        }
    }

    pub fn launch_mode(&self) -> LaunchMode {
        self.launch_mode
    }

    /// Collects the declared dependencies of the artifact `key` originating
    /// from `component`. Keys seen before are skipped.
    ///
    /// # Errors
    /// Returns an error if a project component cannot be mapped to a project,
    /// or one of its project dependencies names a missing sibling. POM
    /// failures for external modules are not errors.
    pub fn collect(&mut self, component: &ComponentId, key: &ArtifactKey) -> Result<()> {
        if self.is_collected(key) {
            return Ok(());
        }

        match component {
            ComponentId::Project(project) => {
                let declared = self.extract_project(project)?;
                self.declared_by_key.insert(key.clone(), declared);
            }
            ComponentId::Module(gav) => match self.pom_resolver.resolve_declared(gav) {
                Some(declared) => {
                    self.declared_by_key.insert(key.clone(), declared);
                }
                None => {
                    self.unresolved.insert(key.clone());
                }
            },
        }

        Ok(())
    }

    /// Collects the declared dependencies of the application artifact itself
    ///
    /// # Errors
    /// Same conditions as [`Self::collect`] for project components
    pub fn collect_project_artifact(
        &mut self,
        app_key: &ArtifactKey,
        component: &ProjectComponent,
    ) -> Result<()> {
        self.collect(&ComponentId::Project(component.clone()), app_key)
    }

    /// Reconciles the declared dependencies of `key` against `model` and
    /// stores the outcome on the artifact's builder.
    ///
    /// Returns `false` and leaves the builder untouched when nothing was
    /// collected for `key` or the model has no builder for it.
    pub fn set_direct_deps(&self, key: &ArtifactKey, model: &mut ApplicationModelBuilder) -> bool {
        let Some(declared) = self.declared_by_key.get(key) else {
            if self.unresolved.contains(key) {
                debug!("Skipping direct dependencies of {}: POM was not resolved", key);
            } else {
                info!("No declared dependencies collected for {}", key);
            }
            return false;
        };

        let Some(target) = model.builder(key) else {
            debug!("{} is not part of the application model", key);
            return false;
        };

        let retain_test_scopes =
            DirectDependencyReconciler::retains_test_scopes(target, model, self.launch_mode);
        let direct = DirectDependencyReconciler::reconcile(declared, model, retain_test_scopes);

        match model.builder_mut(key) {
            Some(target) => {
                direct.apply_to(target);
                true
            }
            None => false,
        }
    }

    pub fn get(&self, key: &ArtifactKey) -> Option<&[DeclaredDependency]> {
        self.declared_by_key.get(key).map(Vec::as_slice)
    }

    pub fn is_collected(&self, key: &ArtifactKey) -> bool {
        self.declared_by_key.contains_key(key) || self.unresolved.contains(key)
    }

    pub fn collected_count(&self) -> usize {
        self.declared_by_key.len()
    }

    pub fn unresolved_count(&self) -> usize {
        self.unresolved.len()
    }

    fn extract_project(&self, component: &ProjectComponent) -> Result<Vec<DeclaredDependency>> {
        let (build, project) = ProjectComponentResolver::resolve(self.workspace, component)?;
        debug!(
            "Extracting declared dependencies of project {} in build {}",
            project.path, build.build_path
        );
        DeclaredDependencyExtractor::extract(
            project,
            build,
            self.launch_mode.is_test(),
            self.policy,
        )
    }
}
