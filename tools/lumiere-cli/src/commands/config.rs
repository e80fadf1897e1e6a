//! Configuration display.

use anyhow::Result;

use super::ConfigArgs;
use crate::context::Context;

/// Run the config command.
pub async fn run(args: ConfigArgs, ctx: &Context) -> Result<()> {
    let config = &ctx.config;

    if ctx.output.is_json() {
        ctx.output.json(config);
        return Ok(());
    }

    if args.toml {
        print!("{}", toml::to_string_pretty(config)?);
        return Ok(());
    }

    ctx.output.header("Configuration");
    match &ctx.config_source {
        Some(path) => ctx.output.kv("source", &path.display().to_string()),
        None => ctx.output.kv("source", "defaults"),
    }
    ctx.output.kv("api.base_url", &config.api.base_url);
    ctx.output
        .kv("api.timeout_secs", &config.api.timeout_secs.to_string());
    ctx.output
        .kv("api.order_timeout_secs", &config.api.order_timeout_secs.to_string());
    ctx.output.kv("api.user_agent", &config.api.user_agent);
    ctx.output.kv(
        "display.low_stock_threshold",
        &config.display.low_stock_threshold.to_string(),
    );
    Ok(())
}
