//! Command implementations for the `envbridge` binary.

pub mod check;
pub mod render;
pub mod serve;
