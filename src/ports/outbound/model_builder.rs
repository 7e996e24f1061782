use super::PomLocator;
use crate::dependency_info::domain::{EffectiveModel, ModelBuildingRequest};
use crate::shared::Result;

/// ModelBuilder port for turning a POM into its effective model
///
/// The builder resolves parents and imported BOMs through the same locator
/// that found the requested POM.
pub trait ModelBuilder {
    /// Builds the effective model for `request.gav`
    ///
    /// # Errors
    /// Returns an error if the POM or one of its parents cannot be located or
    /// parsed, or if the model fails validation at the requested level
    fn build_effective_model(
        &self,
        request: &ModelBuildingRequest,
        locator: &dyn PomLocator,
    ) -> Result<EffectiveModel>;
}
