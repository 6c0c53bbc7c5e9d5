use anyhow::Result;
use clap::Parser;
use tracing::info;

use runner::{load_config, run_config, Args};

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();
    let cfg = load_config(&args.config)?;
    info!(?cfg, "Run config loaded");

    run_config(&cfg, &args)?;
    Ok(())
}
