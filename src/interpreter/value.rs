/// Core value representation.
///
/// Defines the `Value` enum with its three variants (number, array,
/// generator), the closed `TypeTag` set used to build dispatch signatures,
/// and the display rendering used by the REPL.
pub mod core;

/// Lazy generator values.
///
/// Defines the `Generator` state machine: a current value, a primary step
/// closure, and an ordered list of fused transformation steps.
pub mod generator;
