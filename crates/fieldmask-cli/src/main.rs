mod cli;
mod commands;

use anyhow::Result;
use clap::Parser;

fn main() -> Result<()> {
    // Logs go to stderr, stdout carries the masked JSON
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = cli::Cli::parse();

    match cli.command {
        cli::Commands::Mask {
            input,
            fields,
            pretty,
            lines,
            report,
            config,
        } => commands::mask::handle(
            input.as_deref(),
            fields,
            commands::mask::MaskOptions {
                pretty,
                lines,
                report,
            },
            config.as_deref(),
        ),
        cli::Commands::Obscure { text } => commands::obscure::handle(&text),
        cli::Commands::Fields { fields, config } => {
            commands::fields::handle(fields, config.as_deref())
        }
        cli::Commands::Config(config_cmd) => commands::config::handle(config_cmd),
    }
}
