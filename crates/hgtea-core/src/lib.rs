//! Core domain logic for the hgtea tea journal.
//!
//! This crate contains:
//! - Parsing: free-form date, time and steep time fields
//! - Entries: single tasting sessions
//! - Teas: catalog records with their sessions and rating statistics
//! - Filters: selection predicates used by queries

mod entry;
mod filter;
pub mod parse;
mod tea;

pub use entry::Entry;
pub use filter::Filter;
pub use parse::ParseError;
pub use tea::{Flush, Origin, Picked, Purchased, Storage, Tea, UnknownFlush};
