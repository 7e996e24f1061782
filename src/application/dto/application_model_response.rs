use crate::dependency_info::domain::{ApplicationModelBuilder, LaunchMode};

/// Counters describing one collection pass
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CollectionStats {
    /// Artifacts whose declared dependencies were collected
    pub collected: usize,
    /// External modules whose POM could not be resolved
    pub unresolved: usize,
    /// Artifacts whose direct dependencies were set
    pub reconciled: usize,
    /// Direct dependencies flagged as missing from the application
    pub missing_from_application: usize,
}

/// Response DTO carrying the reconciled application model
#[derive(Debug, Clone)]
pub struct ApplicationModelResponse {
    pub model: ApplicationModelBuilder,
    pub launch_mode: LaunchMode,
    pub stats: CollectionStats,
}

impl ApplicationModelResponse {
    pub fn new(
        model: ApplicationModelBuilder,
        launch_mode: LaunchMode,
        stats: CollectionStats,
    ) -> Self {
        Self {
            model,
            launch_mode,
            stats,
        }
    }
}
