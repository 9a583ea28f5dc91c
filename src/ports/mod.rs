/// Ports module defining interfaces for hexagonal architecture
///
/// Outbound ports are the interfaces the conversion core uses to reach the
/// file system, the console and the output destination.
pub mod outbound;
