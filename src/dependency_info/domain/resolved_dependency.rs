use super::artifact::{ArtifactCoords, ArtifactKey};
use super::dependency::Dependency;
use super::flags::DependencyFlags;

/// A node of the resolved application graph while the model is being built
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedDependencyBuilder {
    coords: ArtifactCoords,
    flags: DependencyFlags,
    dependencies: Vec<ArtifactCoords>,
    direct_dependencies: Vec<Dependency>,
}

impl ResolvedDependencyBuilder {
    pub fn new(coords: ArtifactCoords) -> Self {
        Self {
            coords,
            flags: DependencyFlags::NONE,
            dependencies: Vec::new(),
            direct_dependencies: Vec::new(),
        }
    }

    pub fn key(&self) -> ArtifactKey {
        self.coords.key()
    }

    pub fn coords(&self) -> &ArtifactCoords {
        &self.coords
    }

    pub fn version(&self) -> &str {
        &self.coords.version
    }

    pub fn flags(&self) -> DependencyFlags {
        self.flags
    }

    pub fn is_flag_set(&self, flag: DependencyFlags) -> bool {
        self.flags.contains(flag)
    }

    pub fn set_flags(&mut self, flags: DependencyFlags) -> &mut Self {
        self.flags.insert(flags);
        self
    }

    pub fn is_direct(&self) -> bool {
        self.flags.contains(DependencyFlags::DIRECT)
    }

    /// Transitive coordinates, as known from the resolver or as rewritten by
    /// reconciliation
    pub fn dependencies(&self) -> &[ArtifactCoords] {
        &self.dependencies
    }

    pub fn set_dependencies(&mut self, dependencies: Vec<ArtifactCoords>) -> &mut Self {
        self.dependencies = dependencies;
        self
    }

    pub fn direct_dependencies(&self) -> &[Dependency] {
        &self.direct_dependencies
    }

    pub fn set_direct_dependencies(&mut self, direct: Vec<Dependency>) -> &mut Self {
        self.direct_dependencies = direct;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setters_chain() {
        let mut builder = ResolvedDependencyBuilder::new(ArtifactCoords::jar("g", "a", "1.0"));
        builder
            .set_flags(DependencyFlags::RUNTIME_CP)
            .set_flags(DependencyFlags::DIRECT)
            .set_dependencies(vec![ArtifactCoords::jar("g", "b", "2.0")]);

        assert!(builder.is_direct());
        assert!(builder.is_flag_set(DependencyFlags::RUNTIME_CP));
        assert_eq!(builder.dependencies().len(), 1);
        assert_eq!(builder.key(), ArtifactKey::jar("g", "a"));
        assert_eq!(builder.version(), "1.0");
    }
}
