/// Data Transfer Objects for the application layer
///
/// DTOs carry data between the CLI, the use case and the formatters.
mod application_model_request;
mod application_model_response;
mod output_format;

pub use application_model_request::ApplicationModelRequest;
pub use application_model_response::{ApplicationModelResponse, CollectionStats};
pub use output_format::OutputFormat;
