//! hgtea CLI library.
//!
//! This crate provides the command-line interface for the tea journal.

mod cli;
pub mod commands;
mod config;
pub mod load;

pub use cli::{Cli, Commands, FilterArgs};
pub use config::Config;
