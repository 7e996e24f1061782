use super::artifact::ArtifactKey;
use super::resolved_dependency::ResolvedDependencyBuilder;
use std::collections::HashMap;

/// Aggregate holding the application artifact and every resolved dependency
/// of the application, in resolution order.
#[derive(Debug, Clone)]
pub struct ApplicationModelBuilder {
    app_artifact: ResolvedDependencyBuilder,
    dependencies: Vec<ResolvedDependencyBuilder>,
    index: HashMap<ArtifactKey, usize>,
}

impl ApplicationModelBuilder {
    pub fn new(app_artifact: ResolvedDependencyBuilder) -> Self {
        Self {
            app_artifact,
            dependencies: Vec::new(),
            index: HashMap::new(),
        }
    }

    pub fn app_artifact(&self) -> &ResolvedDependencyBuilder {
        &self.app_artifact
    }

    pub fn app_artifact_key(&self) -> ArtifactKey {
        self.app_artifact.key()
    }

    pub fn is_app_artifact(&self, key: &ArtifactKey) -> bool {
        self.app_artifact.key() == *key
    }

    /// Adds a resolved dependency. A later entry for a key already present
    /// replaces the earlier one in place.
    pub fn add_dependency(&mut self, dependency: ResolvedDependencyBuilder) {
        let key = dependency.key();
        match self.index.get(&key) {
            Some(&pos) => self.dependencies[pos] = dependency,
            None => {
                self.index.insert(key, self.dependencies.len());
                self.dependencies.push(dependency);
            }
        }
    }

    /// Looks up a resolved dependency by key; the application artifact itself
    /// is not part of this lookup
    pub fn get_dependency(&self, key: &ArtifactKey) -> Option<&ResolvedDependencyBuilder> {
        self.index.get(key).map(|&pos| &self.dependencies[pos])
    }

    /// Mutable access to any builder of the model, the application artifact included
    pub fn builder_mut(&mut self, key: &ArtifactKey) -> Option<&mut ResolvedDependencyBuilder> {
        if self.app_artifact.key() == *key {
            return Some(&mut self.app_artifact);
        }
        match self.index.get(key) {
            Some(&pos) => self.dependencies.get_mut(pos),
            None => None,
        }
    }

    /// Any builder of the model, the application artifact included
    pub fn builder(&self, key: &ArtifactKey) -> Option<&ResolvedDependencyBuilder> {
        if self.app_artifact.key() == *key {
            return Some(&self.app_artifact);
        }
        self.get_dependency(key)
    }

    pub fn dependencies(&self) -> &[ResolvedDependencyBuilder] {
        &self.dependencies
    }

    pub fn dependency_keys(&self) -> Vec<ArtifactKey> {
        self.dependencies.iter().map(|d| d.key()).collect()
    }

    pub fn dependency_count(&self) -> usize {
        self.dependencies.len()
    }
}
