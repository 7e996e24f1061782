/// Application layer - use cases, services and DTOs
///
/// This layer orchestrates the domain services and reaches infrastructure
/// only through ports.
pub mod dto;
pub mod factories;
pub mod read_models;
pub mod services;
pub mod use_cases;
