//! column-lineage command implementation
//!
//! Fetch column-level lineage for a table column

use serde_json::Value;

use crate::api::LineageClient;
use crate::cli::ColumnLineageArgs;
use crate::commands::Command;
use crate::config::Config;
use crate::error::Result;
use crate::output::{JsonSink, OutputSink};

/// column-lineage command
pub struct ColumnLineageCommand {
    args: ColumnLineageArgs,
}

impl ColumnLineageCommand {
    /// Create a new column-lineage command
    pub fn new(args: ColumnLineageArgs) -> Self {
        Self { args }
    }
}

#[async_trait::async_trait]
impl Command for ColumnLineageCommand {
    async fn execute(&self) -> Result<()> {
        let config = Config::load()?;
        let client = LineageClient::new(&config)?;

        let lineage = client
            .column_lineage(&self.args.table_name, &self.args.column_name)
            .await?;

        JsonSink::stdout().render(&Value::Object(lineage))
    }
}
