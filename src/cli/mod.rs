//! CLI module
//!
//! Command-line interface over the REST client.
//!
//! # Commands
//!
//! - `accounts`, `account` - Accounts and balances
//! - `ledger`, `holds` - Account activity
//! - `orders`, `order` - Order listing and lookup
//! - `cancel` - Cancel orders
//! - `report` - Report status

mod commands;
mod runner;

pub use commands::{Cli, Commands, OutputFormat};
pub use runner::Runner;
