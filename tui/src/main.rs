use clap::Parser;
use color_eyre::eyre::Result;
use color_eyre::eyre::WrapErr;
use std::path::Path;
use std::path::PathBuf;
use std::sync::Arc;
use stockroom_core::catalog::Role;
use stockroom_core::store::MemoryStore;
use stockroom_tui::App;
use stockroom_tui::Tui;
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;

/// Terminal admin console for the product catalog.
#[derive(Debug, Parser)]
#[command(name = "stockroom-tui", version)]
struct Cli {
    /// Role to run the screen as: admin, editor or viewer. Unknown labels
    /// fall back to viewer.
    #[arg(long, default_value = "editor")]
    role: String,

    /// JSON file holding the initial product collection.
    #[arg(long, value_name = "FILE")]
    seed: Option<PathBuf>,

    /// Append logs to this file; the terminal screen stays clean.
    #[arg(long, value_name = "FILE")]
    log_file: Option<PathBuf>,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    let _log_guard = match cli.log_file.as_deref() {
        Some(path) => Some(init_logging(path)?),
        None => None,
    };

    let store = match cli.seed.as_deref() {
        Some(path) => MemoryStore::from_seed_file(path)
            .map_err(|err| color_eyre::eyre::eyre!(err.to_string()))
            .wrap_err_with(|| format!("failed to seed catalog from {}", path.display()))?,
        None => MemoryStore::new(),
    };
    let role = Role::from_label(&cli.role);
    tracing::info!(%role, "starting catalog screen");

    let mut tui = Tui::new()?;
    let result = App::run(&mut tui, Arc::new(store), role).await;
    drop(tui);
    result
}

fn init_logging(path: &Path) -> Result<WorkerGuard> {
    let file = std::fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .wrap_err_with(|| format!("failed to open log file {}", path.display()))?;
    let (writer, guard) = tracing_appender::non_blocking(file);
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Ok(guard)
}
