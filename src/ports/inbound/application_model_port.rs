use crate::application::dto::{ApplicationModelRequest, ApplicationModelResponse};
use crate::shared::Result;

/// ApplicationModelPort - Inbound port for building the reconciled
/// application model of one build invocation
pub trait ApplicationModelPort {
    /// Reads the build model, collects declared dependencies and reconciles
    /// them against the resolved graph
    ///
    /// # Errors
    /// Returns an error if:
    /// - The build model cannot be read or parsed
    /// - The application project, or any project component of the resolved
    ///   graph, cannot be found in the workspace
    /// - A project dependency names a project missing from its build
    fn build_application_model(
        &self,
        request: ApplicationModelRequest,
    ) -> Result<ApplicationModelResponse>;
}
