/// Ports module defining interfaces for hexagonal architecture
///
/// This module contains the outbound ports (driven ports - infrastructure
/// interfaces) the scoring use case depends on.
pub mod outbound;
