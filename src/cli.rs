//! Command-line argument definitions
//!
//! Subcommand and flag declarations for the lineagectl binary.

use clap::{ArgAction, Args, Parser, Subcommand};

/// Retrieve table and column lineage
#[derive(Parser, Debug)]
#[command(
    name = "lineagectl",
    version,
    about = "Retrieve table and column lineage",
    long_about = "Retrieve table and column lineage from a workspace's lineage-tracking REST API."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Available subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Get table lineage for a catalog table
    TableLineage(TableLineageArgs),
    /// Get column lineage for a table column
    ColumnLineage(ColumnLineageArgs),
    /// Manage lineagectl configuration
    Config(ConfigArgs),
}

/// Arguments for the table-lineage command
#[derive(Args, Debug)]
pub struct TableLineageArgs {
    /// Fully qualified table name (catalog.schema.table)
    pub table_name: String,

    /// Include notebook, job, or dashboard lineage when available
    #[arg(
        long,
        action = ArgAction::Set,
        default_value_t = true,
        default_missing_value = "true",
        num_args = 0..=1
    )]
    pub include_entity_lineage: bool,
}

/// Arguments for the column-lineage command
#[derive(Args, Debug)]
pub struct ColumnLineageArgs {
    /// Fully qualified table name (catalog.schema.table)
    pub table_name: String,

    /// Column name
    pub column_name: String,
}

/// Arguments for the config command
#[derive(Args, Debug)]
pub struct ConfigArgs {
    /// Config key to read or write (e.g. workspace.host)
    pub key: Option<String>,

    /// Value to assign to the key
    pub value: Option<String>,

    /// List all config values
    #[arg(short, long)]
    pub list: bool,

    /// Run interactive setup
    #[arg(long)]
    pub setup: bool,
}

/// Parse command line arguments
pub fn parse_args() -> Cli {
    Cli::parse()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_lineage_default_flag() {
        let cli = Cli::try_parse_from(["lineagectl", "table-lineage", "catalog1.schema1.table1"])
            .unwrap();
        match cli.command {
            Commands::TableLineage(args) => {
                assert_eq!(args.table_name, "catalog1.schema1.table1");
                assert!(args.include_entity_lineage);
            }
            _ => panic!("expected table-lineage"),
        }
    }

    #[test]
    fn test_table_lineage_explicit_false() {
        let cli = Cli::try_parse_from([
            "lineagectl",
            "table-lineage",
            "c.s.t",
            "--include-entity-lineage=false",
        ])
        .unwrap();
        match cli.command {
            Commands::TableLineage(args) => assert!(!args.include_entity_lineage),
            _ => panic!("expected table-lineage"),
        }
    }

    #[test]
    fn test_table_lineage_bare_flag_means_true() {
        let cli =
            Cli::try_parse_from(["lineagectl", "table-lineage", "c.s.t", "--include-entity-lineage"])
                .unwrap();
        match cli.command {
            Commands::TableLineage(args) => assert!(args.include_entity_lineage),
            _ => panic!("expected table-lineage"),
        }
    }

    #[test]
    fn test_table_lineage_requires_table_name() {
        assert!(Cli::try_parse_from(["lineagectl", "table-lineage"]).is_err());
    }

    #[test]
    fn test_table_lineage_rejects_extra_args() {
        assert!(Cli::try_parse_from(["lineagectl", "table-lineage", "c.s.t", "extra"]).is_err());
    }

    #[test]
    fn test_column_lineage_requires_both_args() {
        assert!(Cli::try_parse_from(["lineagectl", "column-lineage", "c.s.t"]).is_err());

        let cli = Cli::try_parse_from(["lineagectl", "column-lineage", "c.s.t", "col"]).unwrap();
        match cli.command {
            Commands::ColumnLineage(args) => {
                assert_eq!(args.table_name, "c.s.t");
                assert_eq!(args.column_name, "col");
            }
            _ => panic!("expected column-lineage"),
        }
    }

    #[test]
    fn test_column_lineage_rejects_extra_args() {
        assert!(
            Cli::try_parse_from(["lineagectl", "column-lineage", "c.s.t", "col", "extra"]).is_err()
        );
    }

    #[test]
    fn test_unknown_subcommand_rejected() {
        assert!(Cli::try_parse_from(["lineagectl", "row-lineage", "c.s.t"]).is_err());
    }
}
