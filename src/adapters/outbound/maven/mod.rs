/// Maven adapters: POM parsing, effective model building and locator chaining
mod chained_locator;
mod effective_model_builder;
mod interpolation;
mod pom_xml;

pub use chained_locator::ChainedPomLocator;
pub use effective_model_builder::{EffectiveModelBuilder, MAX_PARENT_DEPTH};
