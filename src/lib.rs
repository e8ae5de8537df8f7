//! lineagectl
//!
//! A CLI client for a data catalog's lineage-tracking REST API.
//! Fetches table-level and column-level lineage for fully qualified
//! table names and renders the raw API response as JSON.

pub mod api;
pub mod cli;
pub mod commands;
pub mod config;
pub mod error;
pub mod output;

pub use error::{LineageError, Result};

pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub const NAME: &str = env!("CARGO_PKG_NAME");
