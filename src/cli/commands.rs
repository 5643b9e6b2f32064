//! CLI commands and argument parsing

use crate::model::StatusFilter;
use clap::{Parser, Subcommand};
use std::path::PathBuf;
use uuid::Uuid;

/// GDAX REST client CLI
#[derive(Parser, Debug)]
#[command(name = "gdax")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Client configuration file (YAML). Defaults to GDAX_* environment variables
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Output format
    #[arg(short, long, global = true, default_value = "json")]
    pub format: OutputFormat,

    /// Stop after this many items of a listing
    #[arg(long, global = true)]
    pub max_items: Option<usize>,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List trading accounts
    Accounts,

    /// Show one account
    Account {
        /// Account id
        id: Uuid,
    },

    /// List the ledger of an account
    Ledger {
        /// Account id
        account_id: Uuid,
    },

    /// List the holds on an account
    Holds {
        /// Account id
        account_id: Uuid,
    },

    /// List orders
    Orders {
        /// Status filter (repeatable or comma-separated; default all)
        #[arg(short, long, value_delimiter = ',')]
        status: Vec<StatusFilter>,

        /// Only orders of this product
        #[arg(short, long)]
        product: Option<String>,
    },

    /// Show one order
    Order {
        /// Order id
        id: Uuid,
    },

    /// Cancel one order, every order of a product, or every open order
    Cancel {
        /// Order to cancel
        #[arg(long, conflicts_with = "product")]
        order_id: Option<Uuid>,

        /// Product whose orders to cancel
        #[arg(short, long)]
        product: Option<String>,
    },

    /// Show the status of a report
    Report {
        /// Report id
        id: Uuid,
    },
}

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// JSON output (one document per line)
    Json,
    /// Indented JSON
    Pretty,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_orders_statuses() {
        let cli = Cli::try_parse_from([
            "gdax", "orders", "--status", "open,pending", "--status", "done", "-p", "BTC-USD",
        ])
        .unwrap();

        match cli.command {
            Commands::Orders { status, product } => {
                assert_eq!(
                    status,
                    vec![StatusFilter::Open, StatusFilter::Pending, StatusFilter::Done]
                );
                assert_eq!(product.as_deref(), Some("BTC-USD"));
            }
            other => panic!("Expected Orders, got {other:?}"),
        }
    }

    #[test]
    fn test_parse_global_flags() {
        let cli = Cli::try_parse_from([
            "gdax",
            "accounts",
            "--format",
            "pretty",
            "--max-items",
            "5",
            "-C",
            "gdax.yaml",
        ])
        .unwrap();

        assert_eq!(cli.format, OutputFormat::Pretty);
        assert_eq!(cli.max_items, Some(5));
        assert_eq!(cli.config, Some(PathBuf::from("gdax.yaml")));
        assert!(matches!(cli.command, Commands::Accounts));
    }

    #[test]
    fn test_parse_ledger_requires_uuid() {
        assert!(Cli::try_parse_from(["gdax", "ledger", "not-a-uuid"]).is_err());
        assert!(Cli::try_parse_from([
            "gdax",
            "ledger",
            "6cf2b1ba-3705-40e6-a41e-69be033514f7"
        ])
        .is_ok());
    }

    #[test]
    fn test_cancel_order_and_product_conflict() {
        let result = Cli::try_parse_from([
            "gdax",
            "cancel",
            "--order-id",
            "d0c5340b-6d6c-49d9-b567-48c4bfca13d2",
            "--product",
            "BTC-USD",
        ]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_status_rejected() {
        assert!(Cli::try_parse_from(["gdax", "orders", "--status", "closed"]).is_err());
    }
}
