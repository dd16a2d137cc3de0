use clap::{Parser, Subcommand};
use recipe_index::backfill::run_backfill;
use recipe_index::config::Config;
use recipe_index::seed::seed;
use recipe_index::server::serve;
use recipe_index::storage::RecipeStore;
use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(author, version, about)]
struct Cli {
    /// Snapshot file holding the recipe collection (overrides RECIPE_DATA_PATH).
    #[arg(long, global = true)]
    data: Option<PathBuf>,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Run the HTTP API (default).
    Serve {
        /// Address to bind (overrides RECIPE_BIND).
        #[arg(long)]
        bind: Option<SocketAddr>,
    },
    /// Recompute normalized ingredients, categories and tags for every stored recipe.
    Backfill,
    /// Insert the sample recipes, replacing earlier copies.
    Seed,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let cli = Cli::parse();
    let config = Config::load()?;
    let data_path = cli.data.unwrap_or(config.data_path);

    // An unreadable store aborts before any record is touched.
    let store = RecipeStore::open(&data_path)?;

    match cli.command.unwrap_or(Command::Serve { bind: None }) {
        Command::Serve { bind } => {
            let bind_addr = bind.unwrap_or(config.bind_addr);
            serve(Arc::new(store), bind_addr, config.flush_interval).await?;
        }
        Command::Backfill => {
            tracing::info!("Backfilling {} recipes in {}", store.len(), data_path.display());
            let report = run_backfill(&store)?;
            println!("Backfill complete. Updated docs: {}", report.updated);
            if report.failed > 0 {
                println!("Failed to persist: {}", report.failed);
            }
        }
        Command::Seed => {
            let report = seed(&store)?;
            println!(
                "Removed {} existing sample recipes, inserted {}.",
                report.removed, report.inserted
            );
        }
    }

    Ok(())
}
