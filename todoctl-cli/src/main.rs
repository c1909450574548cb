//! todoctl - todo item CRUD service
//!
//! `todoctl serve` runs the HTTP API server backed by a local SQLite
//! database. The store is opened and seeded once at startup; everything
//! after that happens per request.

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use tracing::info;

use todoctl_server::{ensure_seeded, run_server, ServerConfig, SqliteStore};

mod tracing_setup;

#[derive(Parser, Debug)]
#[command(
    name = "todoctl",
    author,
    version,
    about = "HTTP CRUD API for todo items over a local SQLite store"
)]
struct Cli {
    /// Suppress output below warnings (for script consumption)
    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// Enable debug logging
    #[arg(long, global = true)]
    debug: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Run the HTTP API server
    Serve(ServeArgs),
}

#[derive(Parser, Debug)]
struct ServeArgs {
    /// Address to bind to
    #[arg(long, short = 'b', default_value = "127.0.0.1:8080")]
    bind: SocketAddr,

    /// Database file path (default: ~/.todoctl/todos.db)
    #[arg(long, env = "TODOCTL_DB")]
    db_path: Option<PathBuf>,

    /// Allow permissive CORS (all origins) - use with caution
    #[arg(long)]
    cors_permissive: bool,
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();

    tracing_setup::init(&tracing_setup::TracingConfig {
        quiet: cli.quiet,
        debug: cli.debug,
    })?;

    match cli.command {
        Commands::Serve(args) => run_serve(args).await,
    }
}

async fn run_serve(args: ServeArgs) -> Result<()> {
    let db_path = match args.db_path {
        Some(path) => path,
        None => dirs::home_dir()
            .context("could not determine home directory")?
            .join(".todoctl")
            .join("todos.db"),
    };

    info!("opening database at {}", db_path.display());
    let store = Arc::new(
        SqliteStore::open(&db_path)
            .await
            .context("failed to open todo database")?,
    );

    // Seed exactly once per process start, before serving
    ensure_seeded(store.as_ref())
        .await
        .context("failed to seed todo database")?;

    let config = ServerConfig {
        bind_addr: args.bind,
        cors_permissive: args.cors_permissive,
    };

    info!("starting todoctl server on http://{}", args.bind);
    run_server(store, config).await.context("server error")?;

    Ok(())
}
