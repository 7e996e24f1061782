use depinfo::dependency_info::domain::BuildModel;
use depinfo::prelude::*;
use std::path::Path;

/// Mock BuildModelReader serving a build model from an in-memory JSON document
pub struct MockBuildModelReader {
    pub content: String,
    pub should_fail: bool,
}

impl MockBuildModelReader {
    pub fn new(content: impl Into<String>) -> Self {
        Self {
            content: content.into(),
            should_fail: false,
        }
    }

    pub fn with_failure() -> Self {
        Self {
            content: String::new(),
            should_fail: true,
        }
    }
}

impl BuildModelReader for MockBuildModelReader {
    fn read_build_model(&self, _path: &Path) -> Result<BuildModel> {
        if self.should_fail {
            anyhow::bail!("Mock build model read failure");
        }
        Ok(serde_json::from_str(&self.content)?)
    }
}
