use anyhow::Result;
use colored::Colorize;
use lineagectl::cli::{Commands, parse_args};
use lineagectl::commands::{
    Command, column_lineage::ColumnLineageCommand, config::ConfigCommand,
    table_lineage::TableLineageCommand,
};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt::init();
    let cli = parse_args();
    let result = match cli.command {
        Commands::TableLineage(args) => {
            let cmd = TableLineageCommand::new(args);
            cmd.execute().await
        }
        Commands::ColumnLineage(args) => {
            let cmd = ColumnLineageCommand::new(args);
            cmd.execute().await
        }
        Commands::Config(args) => {
            let cmd = ConfigCommand::new(args);
            cmd.execute().await
        }
    };

    if let Err(err) = result {
        if err.is_auth_error() {
            eprintln!(
                "{} Check your workspace token, or run {} to reconfigure",
                "HINT:".yellow(),
                "lineagectl config --setup".cyan()
            );
        }
        return Err(err.into());
    }

    Ok(())
}
