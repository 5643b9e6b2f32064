//! CLI runner - executes commands

use crate::api::Client;
use crate::cli::commands::{Cli, Commands, OutputFormat};
use crate::config::ClientConfig;
use crate::error::Result;
use crate::pagination::{Pager, PagerState};
use serde::Serialize;
use tracing::debug;

/// CLI runner
pub struct Runner {
    cli: Cli,
}

impl Runner {
    /// Create a new runner
    pub fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the CLI command
    pub async fn run(&self) -> Result<()> {
        let client = Client::from_config(&self.load_config()?)?;

        match &self.cli.command {
            Commands::Accounts => self.emit_all(client.get_accounts()).await,
            Commands::Account { id } => self.emit(&client.get_account(*id).await?),
            Commands::Ledger { account_id } => {
                self.emit_all(client.get_account_history(*account_id)).await
            }
            Commands::Holds { account_id } => {
                self.emit_all(client.get_account_holds(*account_id)).await
            }
            Commands::Orders { status, product } => {
                let pager = match product {
                    Some(product) => client.get_orders_for_product(product, status),
                    None => client.get_orders(status),
                };
                self.emit_all(pager).await
            }
            Commands::Order { id } => self.emit(&client.get_order(*id).await?),
            Commands::Cancel { order_id, product } => {
                let pager = match (order_id, product) {
                    (Some(id), _) => client.cancel_order(*id),
                    (None, Some(product)) => client.cancel_all_orders_for_product(product),
                    (None, None) => client.cancel_all_orders(),
                };
                self.emit_all(pager).await
            }
            Commands::Report { id } => self.emit(&client.get_report_status(*id).await?),
        }
    }

    /// Config file when given, otherwise the environment
    fn load_config(&self) -> Result<ClientConfig> {
        match self.cli.config {
            Some(ref path) => ClientConfig::load(path),
            None => ClientConfig::from_env(),
        }
    }

    /// Print items of a listing until it ends or `--max-items` is reached
    async fn emit_all<T: Serialize>(&self, mut pager: Pager<T>) -> Result<()> {
        let limit = self.cli.max_items.unwrap_or(usize::MAX);
        let mut emitted = 0;

        while emitted < limit && pager.has_more().await {
            self.emit(&pager.take_next()?)?;
            emitted += 1;
        }

        debug!(
            "Emitted {} items in {} requests",
            emitted,
            pager.requests_made()
        );

        if pager.state() == PagerState::Failed {
            pager.take_next()?;
        }
        Ok(())
    }

    fn emit<T: Serialize>(&self, value: &T) -> Result<()> {
        let line = match self.cli.format {
            OutputFormat::Json => serde_json::to_string(value)?,
            OutputFormat::Pretty => serde_json::to_string_pretty(value)?,
        };
        println!("{line}");
        Ok(())
    }
}
