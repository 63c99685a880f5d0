use std::path::PathBuf;

use clap::Parser;
use dictforge_config::Config;
use tracing_subscriber::EnvFilter;

mod pipeline;

/// Convert the CantoDict export into a lookup-tool dictionary archive
#[derive(Debug, Parser)]
#[command(version, about)]
struct Args {
    /// JSON config profile; defaults and environment are used without it
    #[arg(long)]
    config: Option<PathBuf>,

    /// Source CSV table
    #[arg(long)]
    input: Option<PathBuf>,

    /// Archive to write
    #[arg(long)]
    output: Option<PathBuf>,
}

fn load_config(args: &Args) -> anyhow::Result<Config> {
    let mut config = match &args.config {
        Some(path) => {
            tracing::info!("Loading config: {}", path.display());
            Config::from_json_file(path)?
        }
        None => Config::new(),
    };

    if let Some(input) = &args.input {
        config.source.csv_path = input.display().to_string();
    }
    if let Some(output) = &args.output {
        config.output.archive_path = output.display().to_string();
    }

    Ok(config)
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let args = Args::parse();
    let config = load_config(&args)?;

    if let Err(e) = pipeline::run(config).await {
        tracing::error!("Conversion failed: {e:#}");
        return Err(e);
    }

    Ok(())
}
