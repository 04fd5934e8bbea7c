//! Reads the catalog and log JSON files and builds the database.
//!
//! Both files hold a JSON array. `null` items are allowed and are skipped
//! when the database is built.

use std::path::Path;

use anyhow::{Context, Result};
use hgtea_core::{Entry, Tea};
use hgtea_db::TeaDb;
use serde::de::DeserializeOwned;

use crate::Config;

fn read_json_array<T: DeserializeOwned>(path: &Path) -> Result<Vec<Option<T>>> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("failed to read {}", path.display()))?;
    let items: Vec<Option<T>> = serde_json::from_str(&content)
        .with_context(|| format!("failed to parse {}", path.display()))?;
    tracing::debug!(path = ?path, count = items.len(), "loaded records");
    Ok(items)
}

/// Loads the tea catalog.
pub fn load_teas(path: &Path) -> Result<Vec<Option<Tea>>> {
    read_json_array(path)
}

/// Loads the session log.
pub fn load_entries(path: &Path) -> Result<Vec<Option<Entry>>> {
    read_json_array(path)
}

/// Loads both files named by `config` and links them into a database.
pub fn open_db(config: &Config) -> Result<TeaDb> {
    let teas = load_teas(&config.teas_path)?;
    let entries = load_entries(&config.entries_path)?;
    TeaDb::new(teas, entries).context("failed to build tea database")
}
