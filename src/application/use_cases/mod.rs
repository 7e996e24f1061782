/// Use cases orchestrating the application core
mod build_application_model;

pub use build_application_model::BuildApplicationModelUseCase;
