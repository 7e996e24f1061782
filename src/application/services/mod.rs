/// Application services wiring domain logic to outbound ports
mod dependency_info_collector;
mod pom_model_resolver;

pub use dependency_info_collector::DependencyInfoCollector;
pub use pom_model_resolver::{system_properties, PomModelResolver};
