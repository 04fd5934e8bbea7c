use std::io;
use std::path::Path;

use anyhow::{Context, Result};
use clap::Parser;
use tracing_subscriber::EnvFilter;

use hgtea_cli::commands::{log, tea, teas};
use hgtea_cli::{Cli, Commands, Config, load};

/// Load config and both data files.
fn open_db(config_path: Option<&Path>) -> Result<hgtea_db::TeaDb> {
    let config = Config::load_from(config_path).context("failed to load configuration")?;
    tracing::debug!(?config, "loaded configuration");
    load::open_db(&config)
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::from_default_env()
    };
    // Use try_init to avoid panic if tracing is already initialized (e.g., in tests)
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .try_init();

    let mut stdout = io::stdout().lock();
    match &cli.command {
        Some(Commands::Teas(args)) => {
            let db = open_db(cli.config.as_deref())?;
            teas::run(&mut stdout, &db, &args.to_filter())?;
        }
        Some(Commands::Tea { id }) => {
            let db = open_db(cli.config.as_deref())?;
            tea::run(&mut stdout, &db, *id)?;
        }
        Some(Commands::Log(args)) => {
            let db = open_db(cli.config.as_deref())?;
            log::run(&mut stdout, &db, &args.to_filter())?;
        }
        None => {
            // No subcommand, show help
            use clap::CommandFactory;
            Cli::command().print_help()?;
            println!();
        }
    }

    Ok(())
}
