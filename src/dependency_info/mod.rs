/// Dependency-info core - domain model, scope policies and the pure
/// reconciliation services. Nothing in here performs I/O.
pub mod domain;
pub mod policies;
pub mod services;
