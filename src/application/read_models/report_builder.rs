//! Builder for constructing the report from the reconciled model

use super::application_model_report::{ApplicationModelReport, ReportMetadata};
use super::artifact_view::{ArtifactView, DirectDependencyView};
use crate::dependency_info::domain::{
    ApplicationModelBuilder, Dependency, DependencyFlags, LaunchMode, ResolvedDependencyBuilder,
};
use chrono::Utc;
use uuid::Uuid;

const TOOL_NAME: &str = env!("CARGO_PKG_NAME");
const TOOL_VERSION: &str = env!("CARGO_PKG_VERSION");

/// Transforms the reconciled [`ApplicationModelBuilder`] into an
/// [`ApplicationModelReport`]
pub struct ApplicationModelReportBuilder;

impl ApplicationModelReportBuilder {
    pub fn build(
        model: &ApplicationModelBuilder,
        launch_mode: LaunchMode,
    ) -> ApplicationModelReport {
        ApplicationModelReport {
            metadata: Self::build_metadata(launch_mode),
            application: Self::build_artifact(model.app_artifact()),
            dependencies: model
                .dependencies()
                .iter()
                .map(Self::build_artifact)
                .collect(),
        }
    }

    fn build_metadata(launch_mode: LaunchMode) -> ReportMetadata {
        ReportMetadata {
            tool_name: TOOL_NAME.to_string(),
            tool_version: TOOL_VERSION.to_string(),
            timestamp: Utc::now().to_rfc3339(),
            serial_number: format!("urn:uuid:{}", Uuid::new_v4()),
            launch_mode: launch_mode.to_string(),
        }
    }

    fn build_artifact(artifact: &ResolvedDependencyBuilder) -> ArtifactView {
        let coords = artifact.coords();
        ArtifactView {
            coords: coords.to_gactv_string(),
            group_id: coords.group_id.clone(),
            artifact_id: coords.artifact_id.clone(),
            version: coords.version.clone(),
            flags: flag_names(artifact.flags()),
            dependencies: artifact
                .dependencies()
                .iter()
                .map(|c| c.to_gactv_string())
                .collect(),
            direct_dependencies: artifact
                .direct_dependencies()
                .iter()
                .map(Self::build_direct)
                .collect(),
        }
    }

    fn build_direct(dep: &Dependency) -> DirectDependencyView {
        DirectDependencyView {
            group_id: dep.group_id().to_string(),
            artifact_id: dep.artifact_id().to_string(),
            classifier: dep.classifier().to_string(),
            artifact_type: dep.artifact_type().to_string(),
            version: dep.version().map(str::to_string),
            scope: dep.scope().to_string(),
            optional: dep.is_optional(),
            flags: flag_names(dep.flags()),
        }
    }
}

fn flag_names(flags: DependencyFlags) -> Vec<String> {
    flags.names().into_iter().map(str::to_string).collect()
}
