//! Logging init: append to a file under the XDG state dir, or stderr when that fails.

use anyhow::{Context, Result};
use std::fs;
use std::io;
use std::path::{Path, PathBuf};
use std::sync::Mutex;
use tracing::Subscriber;
use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::EnvFilter;

const DEFAULT_FILTER: &str = "info,docpage=debug,docpage_core=debug";

/// `~/.local/state/docpage/docpage.log`
pub fn log_file_path() -> Result<PathBuf> {
    let xdg_dirs = xdg::BaseDirectories::with_prefix("docpage")?;
    Ok(xdg_dirs.get_state_home().join("docpage.log"))
}

fn open_append(path: &Path) -> Result<fs::File> {
    if let Some(dir) = path.parent() {
        fs::create_dir_all(dir).with_context(|| format!("creating {}", dir.display()))?;
    }
    fs::OpenOptions::new()
        .create(true)
        .append(true)
        .open(path)
        .with_context(|| format!("opening log file {}", path.display()))
}

/// Plain-text subscriber honoring `RUST_LOG`, falling back to [`DEFAULT_FILTER`].
fn subscriber<W>(writer: W) -> impl Subscriber + Send + Sync
where
    W: for<'a> MakeWriter<'a> + Send + Sync + 'static,
{
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .finish()
}

/// Installs file logging globally. Returns Err (nothing installed) when the
/// log file cannot be opened, so the caller can use [`init_logging_stderr`].
pub fn init_logging() -> Result<()> {
    let path = log_file_path()?;
    let file = open_append(&path)?;
    tracing::subscriber::set_global_default(subscriber(Mutex::new(file)))
        .context("installing tracing subscriber")?;
    tracing::info!("docpage logging initialized at {}", path.display());
    Ok(())
}

/// Installs stderr logging globally; a no-op if a subscriber is already set.
pub fn init_logging_stderr() {
    let _ = tracing::subscriber::set_global_default(subscriber(io::stderr));
}
