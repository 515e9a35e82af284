//! `docpage target <path>` – show the URL a request would fetch.

use docpage_core::config::DocpageConfig;
use docpage_core::target;
use docpage_core::{PagePath, RequestUrl};

pub fn run_target(cfg: &DocpageConfig, path: &PagePath) {
    match target::target_url(&cfg.docs_host, path.pathname()) {
        Some(url) => println!("{url}"),
        None => println!("{} references a file; nothing would be fetched", path.as_str()),
    }
}
