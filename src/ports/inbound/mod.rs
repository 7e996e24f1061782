/// Inbound ports (driving ports) - use case interfaces
///
/// The CLI drives the application core through these traits.
pub mod application_model_port;

pub use application_model_port::ApplicationModelPort;
