//! `docpage load <path>` – run the page load and print the props object.

use anyhow::Result;
use docpage_core::config::DocpageConfig;
use docpage_core::{load, ContentFetcher, PagePath};
use std::sync::Arc;

pub async fn run_load(cfg: &DocpageConfig, path: &PagePath) -> Result<()> {
    let fetcher = Arc::new(ContentFetcher::from_config(cfg));
    let data = load(fetcher, Some(path)).await?;
    println!("{}", serde_json::to_string_pretty(&data)?);
    Ok(())
}
