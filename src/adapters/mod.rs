/// Adapters layer - Infrastructure implementations
///
/// Concrete implementations of the outbound ports: filesystem, network,
/// Maven model building, console progress and report formatting.
pub mod outbound;
