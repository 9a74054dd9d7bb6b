/// Tunebox - in-memory song catalog
use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};
use tunebox_catalog::CatalogService;
use tunebox_cli::{config, execute, Command};

#[derive(Parser)]
#[command(name = "tunebox")]
#[command(about = "In-memory song catalog with shuffle and playback history", long_about = None)]
struct Cli {
    /// Configuration file path
    #[arg(short, long, global = true, env = "TUNEBOX_CONFIG")]
    config: Option<PathBuf>,

    /// Start with shuffle on
    #[arg(long, global = true)]
    shuffle: bool,

    /// Print JSON instead of text
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

fn main() -> anyhow::Result<()> {
    // Logs go to stderr so command output stays clean
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "tunebox_cli=info,tunebox_catalog=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    let mut config = config::load(cli.config.as_deref())?;
    if cli.shuffle {
        config.shuffle = true;
    }

    let seed = config.seed_defaults;
    let mut catalog = CatalogService::new(config)?;
    if seed {
        catalog.seed_defaults()?;
    }
    tracing::info!("Catalog ready: {}", catalog.library());

    let output = execute(&mut catalog, &cli.command, cli.json)?;
    print!("{}", output);

    Ok(())
}
