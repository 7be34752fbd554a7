/// Adapters layer - Infrastructure implementations
///
/// This layer contains concrete implementations of the ports,
/// providing the actual integration with the file system, installed
/// package metadata, the template engine and the console.
pub mod outbound;
