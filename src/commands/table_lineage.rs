//! table-lineage command implementation
//!
//! Fetch table-level lineage for a fully qualified table name

use serde_json::Value;

use crate::api::LineageClient;
use crate::cli::TableLineageArgs;
use crate::commands::Command;
use crate::config::Config;
use crate::error::Result;
use crate::output::{JsonSink, OutputSink};

/// table-lineage command
pub struct TableLineageCommand {
    args: TableLineageArgs,
}

impl TableLineageCommand {
    /// Create a new table-lineage command
    pub fn new(args: TableLineageArgs) -> Self {
        Self { args }
    }
}

#[async_trait::async_trait]
impl Command for TableLineageCommand {
    async fn execute(&self) -> Result<()> {
        let config = Config::load()?;
        let client = LineageClient::new(&config)?;

        let lineage = client
            .table_lineage(&self.args.table_name, self.args.include_entity_lineage)
            .await?;

        JsonSink::stdout().render(&Value::Object(lineage))
    }
}
