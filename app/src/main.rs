use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(name = "app", version, about = "Template placeholder application")]
struct Cli {}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(std::io::stderr)
        .compact()
        .init();

    let _cli = Cli::parse();
    let stdout = std::io::stdout();
    app::greet(&mut stdout.lock()).context("write greeting")?;
    debug!("greeting written");
    Ok(())
}
