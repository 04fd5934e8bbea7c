//! In-memory store for the tea catalog and the session log.
//!
//! A [`TeaDb`] is built once from fully loaded teas and entries and is
//! read-only afterwards, so queries only ever take `&self`.
//!
//! # Linking
//!
//! Every entry whose `tea` id names a known tea is added to that tea's
//! sessions during [`TeaDbBuilder::build`]. Entries pointing at unknown teas
//! stay in the log but belong to no tea.
//!
//! # Collisions
//!
//! Both collisions are resolved last-write-wins:
//! - two teas with the same id: the later tea replaces the earlier one;
//! - two entries with the same timestamp: the log keeps the later entry. Both
//!   entries are still added to their teas.
//!
//! # Thread Safety
//!
//! `TeaDb` holds plain owned data and is `Send + Sync`. Nothing mutates it
//! after construction, so it can be shared behind an `Arc` without locking.

use std::collections::{BTreeMap, HashMap};

use chrono::{DateTime, Utc};
use hgtea_core::{Entry, Filter, Tea};
use thiserror::Error;

/// Database errors.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum DbError {
    /// No tea with the requested id.
    #[error("tea not found: {id}")]
    NotFound { id: i64 },
}

/// The tea catalog plus the time-ordered session log.
#[derive(Debug, Clone, Default)]
pub struct TeaDb {
    teas: HashMap<i64, Tea>,
    log: BTreeMap<DateTime<Utc>, Entry>,
}

/// Collects teas and entries, then links them into a [`TeaDb`].
///
/// Input order does not matter: entries may be added before their teas.
#[derive(Debug, Clone, Default)]
pub struct TeaDbBuilder {
    teas: Vec<Tea>,
    entries: Vec<Entry>,
}

impl TeaDbBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn tea(mut self, tea: Tea) -> Self {
        self.teas.push(tea);
        self
    }

    #[must_use]
    pub fn entry(mut self, entry: Entry) -> Self {
        self.entries.push(entry);
        self
    }

    /// Adds every present tea, skipping `None` placeholders.
    #[must_use]
    pub fn teas<I>(mut self, teas: I) -> Self
    where
        I: IntoIterator<Item = Option<Tea>>,
    {
        for tea in teas {
            match tea {
                Some(tea) => self.teas.push(tea),
                None => tracing::trace!("skipping absent tea"),
            }
        }
        self
    }

    /// Adds every present entry, skipping `None` placeholders.
    #[must_use]
    pub fn entries<I>(mut self, entries: I) -> Self
    where
        I: IntoIterator<Item = Option<Entry>>,
    {
        for entry in entries {
            match entry {
                Some(entry) => self.entries.push(entry),
                None => tracing::trace!("skipping absent entry"),
            }
        }
        self
    }

    /// Indexes the teas, fills the log and links entries to their teas.
    pub fn build(self) -> Result<TeaDb, DbError> {
        let mut teas: HashMap<i64, Tea> = HashMap::with_capacity(self.teas.len());
        for tea in self.teas {
            let id = tea.id;
            if teas.insert(id, tea).is_some() {
                tracing::warn!(tea_id = id, "duplicate tea id, keeping the later tea");
            }
        }

        let mut log = BTreeMap::new();
        let mut dangling = 0usize;
        for entry in self.entries {
            match teas.get_mut(&entry.tea) {
                Some(tea) => tea.add(entry.clone()),
                None => {
                    dangling += 1;
                    tracing::warn!(
                        tea_id = entry.tea,
                        date_time = %entry.date_time,
                        "entry references unknown tea"
                    );
                }
            }

            let date_time = entry.date_time;
            if log.insert(date_time, entry).is_some() {
                tracing::warn!(%date_time, "duplicate entry timestamp, keeping the later entry");
            }
        }

        tracing::debug!(
            tea_count = teas.len(),
            entry_count = log.len(),
            dangling,
            "built tea database"
        );

        Ok(TeaDb { teas, log })
    }
}

impl TeaDb {
    /// Builds a database from two loaded collections.
    ///
    /// `None` items stand for records that failed to load and are skipped.
    pub fn new<T, E>(teas: T, entries: E) -> Result<Self, DbError>
    where
        T: IntoIterator<Item = Option<Tea>>,
        E: IntoIterator<Item = Option<Entry>>,
    {
        Self::builder().teas(teas).entries(entries).build()
    }

    pub fn builder() -> TeaDbBuilder {
        TeaDbBuilder::new()
    }

    /// Teas passing every predicate enabled in `filter`, keyed by id.
    pub fn teas(&self, filter: &Filter) -> Result<HashMap<i64, Tea>, DbError> {
        Ok(self
            .teas
            .iter()
            .filter(|(_, tea)| filter.matches(tea))
            .map(|(id, tea)| (*id, tea.clone()))
            .collect())
    }

    /// Looks up a single tea.
    pub fn tea(&self, id: i64) -> Result<&Tea, DbError> {
        self.teas.get(&id).ok_or(DbError::NotFound { id })
    }

    /// Log entries, oldest first.
    ///
    /// With no filter, or one that matches everything, the whole log is
    /// returned, including entries for unknown teas. Otherwise only entries
    /// whose tea exists and passes the filter are kept.
    pub fn log(&self, filter: Option<&Filter>) -> Result<Vec<&Entry>, DbError> {
        let filter = filter.filter(|f| !f.is_unrestricted());
        Ok(self
            .log
            .values()
            .filter(|entry| {
                filter.is_none_or(|f| self.teas.get(&entry.tea).is_some_and(|tea| f.matches(tea)))
            })
            .collect())
    }

    /// Number of teas in the catalog.
    pub fn len_teas(&self) -> usize {
        self.teas.len()
    }

    /// Number of entries in the log.
    pub fn len_log(&self) -> usize {
        self.log.len()
    }
}
