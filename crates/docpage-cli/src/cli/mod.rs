//! CLI for the docpage loader.

mod commands;

use anyhow::Result;
use clap::{Parser, Subcommand};
use docpage_core::config::{self, DocpageConfig};
use docpage_core::PagePath;

use commands::{run_fetch, run_load, run_target};

/// Top-level CLI for the docpage loader.
#[derive(Debug, Parser)]
#[command(name = "docpage")]
#[command(about = "docpage: load pre-rendered documentation pages", long_about = None)]
pub struct Cli {
    /// Documentation host base address (overrides config and $PUBLIC_DOCS_HOST).
    #[arg(long, global = true, value_name = "URL")]
    pub docs_host: Option<String>,

    #[command(subcommand)]
    pub command: CliCommand,
}

#[derive(Debug, Subcommand)]
pub enum CliCommand {
    /// Print the documentation host URL a request path maps to.
    Target {
        /// Request URL or pathname, e.g. /docs/guide/.
        path: String,
    },

    /// Fetch the page for a request path and print its HTML.
    Fetch {
        /// Request URL or pathname, e.g. /docs/guide/.
        path: String,
    },

    /// Run the page load and print the props object as JSON.
    Load {
        /// Request URL or pathname, e.g. /docs/guide/.
        path: String,
    },
}

/// Config file, then environment, then `--docs-host`.
fn resolve_config(docs_host: Option<String>) -> Result<DocpageConfig> {
    let mut cfg = config::load_or_init()?;
    apply_overrides(&mut cfg, std::env::var(config::DOCS_HOST_ENV).ok(), docs_host);
    Ok(cfg)
}

/// Layers the environment value, then the command-line value, over the file host.
/// Empty values are ignored.
fn apply_overrides(cfg: &mut DocpageConfig, env: Option<String>, cli: Option<String>) {
    cfg.apply_docs_host_override(env);
    cfg.apply_docs_host_override(cli);
}

impl CliCommand {
    pub async fn run_from_args() -> Result<()> {
        let cli = Cli::parse();
        let cfg = resolve_config(cli.docs_host)?;
        tracing::debug!("loaded config: {:?}", cfg);

        match cli.command {
            CliCommand::Target { path } => run_target(&cfg, &PagePath::from_input(&path)),
            CliCommand::Fetch { path } => run_fetch(&cfg, PagePath::from_input(&path)).await?,
            CliCommand::Load { path } => run_load(&cfg, &PagePath::from_input(&path)).await?,
        }

        Ok(())
    }
}
