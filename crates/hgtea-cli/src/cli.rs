//! Command-line argument definitions.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};
use hgtea_core::Filter;

/// Personal tea journal.
///
/// Keeps a catalog of teas and a log of every session brewed from them.
#[derive(Debug, Parser)]
#[command(name = "hgtea", version, about, long_about = None)]
pub struct Cli {
    /// Enable verbose output.
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Path to config file.
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands.
#[derive(Debug, Subcommand)]
pub enum Commands {
    /// List teas in the catalog.
    Teas(FilterArgs),

    /// Show one tea and its rating statistics.
    Tea {
        /// The tea id.
        id: i64,
    },

    /// Show the session log, oldest first.
    Log(FilterArgs),
}

/// Options that narrow a query.
#[derive(Debug, Clone, Default, Args)]
pub struct FilterArgs {
    /// Only teas currently in stock.
    #[arg(long)]
    pub stocked: bool,

    /// Only samples.
    #[arg(long)]
    pub samples: bool,

    /// Only teas of this type (repeatable, case-insensitive).
    #[arg(long = "type", value_name = "TYPE")]
    pub types: Vec<String>,
}

impl FilterArgs {
    pub fn to_filter(&self) -> Filter {
        let mut filter = Filter::new();
        if self.stocked {
            filter.stocked_only();
        }
        if self.samples {
            filter.samples_only();
        }
        filter.with_types(&self.types);
        filter
    }
}
