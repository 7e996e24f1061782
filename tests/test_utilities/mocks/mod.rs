/// Mock implementations for testing
mod mock_build_model_reader;
mod mock_pom_locator;
mod mock_progress_reporter;

pub use mock_build_model_reader::MockBuildModelReader;
pub use mock_pom_locator::MockPomLocator;
pub use mock_progress_reporter::{MockProgressReporter, ProgressEvent};
