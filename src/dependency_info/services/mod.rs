pub mod declared_extractor;
pub mod project_resolver;
pub mod reconciler;

pub use declared_extractor::DeclaredDependencyExtractor;
pub use project_resolver::ProjectComponentResolver;
pub use reconciler::{DirectDependencies, DirectDependencyReconciler};
