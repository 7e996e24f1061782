//! Top-level application model report

use super::artifact_view::ArtifactView;
use serde::Serialize;

/// Report emitted for one build invocation
#[derive(Debug, Clone, Serialize)]
pub struct ApplicationModelReport {
    pub metadata: ReportMetadata,
    /// The application artifact
    pub application: ArtifactView,
    /// Every resolved dependency, in resolution order
    pub dependencies: Vec<ArtifactView>,
}

/// Metadata describing when and how the report was produced
#[derive(Debug, Clone, Serialize)]
pub struct ReportMetadata {
    pub tool_name: String,
    pub tool_version: String,
    /// RFC 3339 creation time
    pub timestamp: String,
    /// `urn:uuid:` identifier unique to this report
    pub serial_number: String,
    pub launch_mode: String,
}

impl ApplicationModelReport {
    /// Number of direct dependency records across all artifacts
    pub fn direct_dependency_count(&self) -> usize {
        std::iter::once(&self.application)
            .chain(self.dependencies.iter())
            .map(|a| a.direct_dependencies.len())
            .sum()
    }
}
