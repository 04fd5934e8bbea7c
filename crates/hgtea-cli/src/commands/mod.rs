//! CLI subcommand implementations.

pub mod log;
pub mod tea;
pub mod teas;
