//! CLI command implementations.

pub mod cart;
pub mod catalog;
pub mod config;

use anyhow::{bail, Result};
use clap::{Args, Subcommand};
use shop_commerce::prelude::*;

use crate::context::Context;

/// Arguments for the catalog command.
#[derive(Args)]
pub struct CatalogArgs {
    /// Only list products in this category (case-insensitive).
    #[arg(long)]
    pub category: Option<String>,
}

/// Arguments for the cart command.
///
/// Operations run in a fixed order: every add, then every set, then every
/// remove.
#[derive(Args)]
pub struct CartArgs {
    /// Add one unit of a product (repeatable).
    #[arg(long, value_name = "ID")]
    pub add: Vec<ProductId>,

    /// Set a line's quantity; zero or less removes it (repeatable).
    #[arg(long, value_name = "ID=QTY", value_parser = parse_quantity)]
    pub set: Vec<(ProductId, i64)>,

    /// Remove a product's line (repeatable).
    #[arg(long, value_name = "ID")]
    pub remove: Vec<ProductId>,
}

/// Arguments for the config command.
#[derive(Args)]
pub struct ConfigArgs {
    #[command(subcommand)]
    pub command: ConfigCommand,
}

#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show the effective configuration.
    Show,
    /// Initialize a new config file.
    Init {
        /// Force overwrite existing config.
        #[arg(short, long)]
        force: bool,
    },
}

/// Parse `ID=QTY`.
fn parse_quantity(s: &str) -> Result<(ProductId, i64), String> {
    let (id, quantity) = s
        .split_once('=')
        .ok_or_else(|| format!("expected ID=QTY, got '{s}'"))?;

    let id = id.trim();
    if id.is_empty() {
        return Err(format!("missing product id in '{s}'"));
    }
    let quantity = quantity
        .trim()
        .parse::<i64>()
        .map_err(|e| format!("invalid quantity in '{s}': {e}"))?;

    Ok((ProductId::new(id), quantity))
}

/// Run one catalog load cycle, with a spinner while it is `Loading`.
///
/// Fails with the user-facing message when the catalog ends in `Error`.
pub(crate) async fn load_catalog(ctx: &Context) -> Result<Catalog> {
    let mut catalog = Catalog::new();

    match CatalogClient::from_config(&ctx.config.catalog) {
        Ok(loader) => {
            let spinner = ctx.output.spinner(&format!("Loading {}", loader.endpoint()));
            loader.load(&mut catalog).await;
            spinner.finish_and_clear();
        }
        Err(err) => {
            let ticket = catalog.begin_load();
            catalog.finish_load(ticket, Err(err));
        }
    }

    if let Some(message) = catalog.state().error() {
        bail!("{message}");
    }
    Ok(catalog)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_quantity() {
        assert_eq!(parse_quantity("3=2").unwrap(), (ProductId::new("3"), 2));
        assert_eq!(parse_quantity(" 3 = -1 ").unwrap(), (ProductId::new("3"), -1));
    }

    #[test]
    fn test_parse_quantity_rejects_garbage() {
        assert!(parse_quantity("3").is_err());
        assert!(parse_quantity("=2").is_err());
        assert!(parse_quantity("3=two").is_err());
    }
}
