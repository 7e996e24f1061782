pub mod application_model;
pub mod artifact;
pub mod build_model;
pub mod declared_dependency;
pub mod dependency;
pub mod flags;
pub mod launch_mode;
pub mod maven_model;
pub mod resolved_dependency;

pub use application_model::ApplicationModelBuilder;
pub use artifact::{ArtifactCoords, ArtifactKey, Gav, DEFAULT_CLASSIFIER, TYPE_JAR};
pub use build_model::{
    BuildModel, BuildProject, BuildTree, BuildWorkspace, ComponentId, DependencyDeclaration,
    ExternalReference, ProjectComponent, ProjectReference, ResolvedNode, ROOT_PATH,
};
pub use declared_dependency::{
    deduplicate, DeclaredDependency, SCOPE_COMPILE, SCOPE_RUNTIME, SCOPE_TEST,
};
pub use dependency::{Dependency, DependencyBuilder};
pub use flags::DependencyFlags;
pub use launch_mode::LaunchMode;
pub use maven_model::{EffectiveModel, ModelBuildingRequest, ModelDependency, ValidationLevel};
pub use resolved_dependency::ResolvedDependencyBuilder;
