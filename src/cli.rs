//! Command-line options and startup wiring shared by both binaries.

use std::error::Error;
use std::fs;
use std::path::PathBuf;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use crate::app::App;
use crate::platform;
use crate::services::settings_engine::{SettingsEngine, SettingsEngineTrait};
use crate::storage::{KeyValueStore, MemoryStore, SqliteStore};
use crate::types::location::PageLocation;

/// File name of the store inside the data directory.
pub const STORE_FILE: &str = "neonlibrary.db";

/// Environment variable holding the log filter.
pub const LOG_ENV: &str = "NEONLIBRARY_LOG";

#[derive(Parser, Debug, Default)]
#[command(name = "neonlibrary")]
#[command(about = "Organize, search and share your bookmarked sites", long_about = None)]
pub struct Cli {
    /// Shared library link (`...?id=abc`) or a bare library id to open.
    pub page: Option<String>,

    /// Settings file to use instead of the platform default.
    #[arg(short = 'c', long = "config")]
    pub config_path: Option<String>,

    /// Directory holding the library store.
    #[arg(short = 'd', long = "data-dir")]
    pub data_dir: Option<PathBuf>,

    /// Keep everything in memory; nothing is written to disk.
    #[arg(long)]
    pub ephemeral: bool,
}

/// Installs the stderr log subscriber. Filter comes from `NEONLIBRARY_LOG`.
pub fn init_tracing() {
    let filter = EnvFilter::try_from_env(LOG_ENV).unwrap_or_else(|_| EnvFilter::new("info"));
    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init();
}

/// Page location for this launch: the `page` argument if given, otherwise
/// the configured base address with no identifier.
pub fn page_location(args: &Cli, base_url: &str) -> Result<PageLocation, url::ParseError> {
    match &args.page {
        Some(page) => PageLocation::from_arg(page, base_url),
        None => PageLocation::parse(base_url),
    }
}

/// Opens the configured store.
pub fn open_store(args: &Cli) -> Result<Box<dyn KeyValueStore>, Box<dyn Error>> {
    if args.ephemeral {
        tracing::info!("using in-memory store");
        return Ok(Box::new(MemoryStore::new()));
    }

    let data_dir = args.data_dir.clone().unwrap_or_else(platform::get_data_dir);
    fs::create_dir_all(&data_dir)
        .map_err(|e| format!("failed to create data directory {:?}: {}", data_dir, e))?;
    let path = data_dir.join(STORE_FILE);
    tracing::info!(path = ?path, "opening library store");
    Ok(Box::new(SqliteStore::open(&path)?))
}

/// Loads settings, opens the store and builds the `App`.
pub fn build_app(args: &Cli) -> Result<App, Box<dyn Error>> {
    let mut settings_engine = SettingsEngine::new(args.config_path.clone());
    settings_engine.load()?;

    let location = page_location(args, &settings_engine.get_settings().sharing.base_url)?;
    let store = open_store(args)?;
    Ok(App::new(store, settings_engine, Some(&location))?)
}
