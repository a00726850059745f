use anyhow::Result;
use clap::Parser;
use config::Config;
use tracing_subscriber::EnvFilter;

mod config;
mod helpers;
mod logic;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = Config::new(config::Args::parse())?;
    let report = logic::scratch::run(&config)?;

    if config.json {
        println!("{}", serde_json::to_string_pretty(&report)?);
    }
    tracing::info!("Success!");
    Ok(())
}
