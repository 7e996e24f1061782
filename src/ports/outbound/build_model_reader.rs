use crate::dependency_info::domain::BuildModel;
use crate::shared::Result;
use std::path::Path;

/// BuildModelReader port for loading the build model document
///
/// The document is exported by the build-tool plugin and carries the project
/// tree, the included builds and the resolved dependency graph.
pub trait BuildModelReader {
    /// Reads and parses the build model at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The file does not exist or cannot be read
    /// - The content is not a valid build model document
    fn read_build_model(&self, path: &Path) -> Result<BuildModel>;
}
