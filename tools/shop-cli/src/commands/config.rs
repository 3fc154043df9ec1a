//! Configuration management commands.

use anyhow::{bail, Result};

use super::{ConfigArgs, ConfigCommand};
use crate::config::generate_default_config;
use crate::context::{Context, CONFIG_NAMES, ENDPOINT_ENV};

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    match args.command {
        ConfigCommand::Show => show_config(ctx),
        ConfigCommand::Init { force } => init_config(force, ctx),
    }
}

fn show_config(ctx: &Context) -> Result<()> {
    if ctx.output.is_json() {
        ctx.output.json(&ctx.config);
        return Ok(());
    }

    ctx.output.header("Current Configuration");
    match &ctx.config_path {
        Some(path) => ctx.output.kv("file", &path.display().to_string()),
        None => ctx.output.kv("file", "(none, using defaults)"),
    }

    ctx.output.info("[catalog]");
    ctx.output.kv("endpoint", &ctx.config.catalog.endpoint);
    ctx.output.kv("timeout_ms", &ctx.config.catalog.timeout_ms.to_string());
    ctx.output.kv("user_agent", &ctx.config.catalog.user_agent);
    if let Ok(value) = std::env::var(ENDPOINT_ENV) {
        ctx.output.kv("override", &format!("{ENDPOINT_ENV}={value}"));
    }

    ctx.output.info("[display]");
    ctx.output.kv("currency_symbol", &ctx.config.display.currency_symbol);

    if let Err(e) = ctx.config.catalog.validate() {
        ctx.output.warn(&format!("Endpoint is not usable: {}", e));
    }

    Ok(())
}

fn init_config(force: bool, ctx: &Context) -> Result<()> {
    let config_path = ctx.cwd.join(CONFIG_NAMES[0]);

    if config_path.exists() && !force {
        bail!(
            "Config file already exists: {}. Use --force to overwrite.",
            config_path.display()
        );
    }

    std::fs::write(&config_path, generate_default_config())?;
    ctx.output.success(&format!("Created: {}", config_path.display()));

    Ok(())
}
