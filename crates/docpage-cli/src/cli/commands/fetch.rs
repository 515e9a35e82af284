//! `docpage fetch <path>` – fetch a page and print its HTML.

use anyhow::{Context, Result};
use docpage_core::config::DocpageConfig;
use docpage_core::{ContentFetcher, PagePath};

pub async fn run_fetch(cfg: &DocpageConfig, path: PagePath) -> Result<()> {
    let fetcher = ContentFetcher::from_config(cfg);
    let html = tokio::task::spawn_blocking(move || fetcher.fetch_content(Some(&path)))
        .await
        .context("fetch task join")??;
    if let Some(html) = html {
        println!("{html}");
    }
    Ok(())
}
