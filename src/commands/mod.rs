//! Command implementation module
//!
//! Contains implementations for the table-lineage, column-lineage,
//! and config commands

pub mod column_lineage;
pub mod config;
pub mod table_lineage;

use crate::error::Result;

/// Command trait
#[async_trait::async_trait]
pub trait Command {
    /// Execute the command
    async fn execute(&self) -> Result<()>;
}
