/// Filesystem adapters for file I/O operations
mod build_model_reader;
mod file_writer;
mod local_repository;

pub use build_model_reader::JsonBuildModelReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
pub use local_repository::LocalRepositoryLocator;
