use crate::dependency_info::domain::LaunchMode;
use std::path::PathBuf;

/// Request DTO for one application model build
#[derive(Debug, Clone)]
pub struct ApplicationModelRequest {
    /// Path to the build model document exported by the build tool
    pub build_model_path: PathBuf,
    /// Overrides the launch mode recorded in the build model
    pub launch_mode: Option<LaunchMode>,
}

impl ApplicationModelRequest {
    pub fn new(build_model_path: PathBuf, launch_mode: Option<LaunchMode>) -> Self {
        Self {
            build_model_path,
            launch_mode,
        }
    }
}
