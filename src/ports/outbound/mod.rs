/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (file system, repositories, console, etc.).
pub mod build_model_reader;
pub mod formatter;
pub mod model_builder;
pub mod output_presenter;
pub mod pom_locator;
pub mod progress_reporter;

pub use build_model_reader::BuildModelReader;
pub use formatter::ReportFormatter;
pub use model_builder::ModelBuilder;
pub use output_presenter::OutputPresenter;
pub use pom_locator::{PomLocator, PomSource};
pub use progress_reporter::ProgressReporter;
