//! Command line interface
//!
//! | Command | Description |
//! |---------|-------------|
//! | `cfp list` | Build every configured frontend and print it in pool order |
//! | `cfp probe <id>` | Round-trip a probe entry through one frontend |
//! | `cfp backends` | Print the registered backends |
//! | `cfp init-config [path]` | Write a configuration file with the default settings |

use anyhow::{Context, bail};
use cfp_application::list_cache_frontends;
use cfp_domain::value_objects::EntryOptions;
use cfp_infrastructure::config::{AppConfig, ConfigLoader};
use cfp_infrastructure::constants::DEFAULT_CONFIG_FILENAME;
use cfp_infrastructure::{build_frontend_pool, default_frontend_settings};
use clap::{Parser, Subcommand};
use std::io::Write;
use std::path::{Path, PathBuf};

const PROBE_ENTRY_ID: &str = "cfp_probe";
const PROBE_PAYLOAD: &str = "probe";
const PROBE_TAG: &str = "cfp_probe";
const PROBE_LIFETIME_SECS: u64 = 60;

/// Command line interface for the Cache Frontend Pool
#[derive(Parser, Debug)]
#[command(name = "cfp")]
#[command(about = "Cache Frontend Pool - Inspect configured cache frontends")]
#[command(version)]
pub struct Cli {
    /// Path to configuration file
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Command,
}

/// Subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Build every configured frontend and print it in pool order
    List,

    /// Save, load and remove a probe entry through one frontend
    Probe {
        /// Frontend identifier
        id: String,
    },

    /// Print the registered backends
    Backends,

    /// Write a configuration file with the default settings
    InitConfig {
        /// Destination file
        #[arg(default_value = DEFAULT_CONFIG_FILENAME)]
        path: PathBuf,

        /// Overwrite an existing file
        #[arg(long)]
        force: bool,
    },
}

impl Cli {
    /// Configuration loader honoring `--config`
    pub fn loader(&self) -> ConfigLoader {
        match &self.config {
            Some(path) => ConfigLoader::new().with_config_path(path),
            None => ConfigLoader::new(),
        }
    }
}

/// Run a parsed command, writing its report to `out`
pub async fn run<W: Write>(cli: &Cli, out: &mut W) -> anyhow::Result<()> {
    match &cli.command {
        Command::List => list(&cli.loader(), out),
        Command::Probe { id } => probe(&cli.loader(), id, out).await,
        Command::Backends => backends(out),
        Command::InitConfig { path, force } => init_config(&cli.loader(), path, *force, out),
    }
}

fn list<W: Write>(loader: &ConfigLoader, out: &mut W) -> anyhow::Result<()> {
    let pool = build_frontend_pool(loader);
    for entry in pool.iter() {
        let (id, frontend) = entry?;
        writeln!(out, "{id}\t{}", frontend.backend_name())?;
    }
    Ok(())
}

async fn probe<W: Write>(loader: &ConfigLoader, id: &str, out: &mut W) -> anyhow::Result<()> {
    let pool = build_frontend_pool(loader);
    let frontend = pool.get(id)?;

    let options = EntryOptions::new()
        .with_tag(PROBE_TAG)
        .with_lifetime_secs(PROBE_LIFETIME_SECS);
    frontend.save(PROBE_ENTRY_ID, PROBE_PAYLOAD, &options).await?;
    let hit = frontend.load(PROBE_ENTRY_ID).await?.as_deref() == Some(PROBE_PAYLOAD);
    frontend.remove(PROBE_ENTRY_ID).await?;

    let outcome = if hit { "hit" } else { "miss" };
    writeln!(out, "{id}\t{}\t{outcome}", frontend.backend_name())?;
    Ok(())
}

fn backends<W: Write>(out: &mut W) -> anyhow::Result<()> {
    for (name, description) in list_cache_frontends() {
        writeln!(out, "{name}\t{description}")?;
    }
    Ok(())
}

fn init_config<W: Write>(
    loader: &ConfigLoader,
    path: &Path,
    force: bool,
    out: &mut W,
) -> anyhow::Result<()> {
    if path.exists() && !force {
        bail!(
            "{} already exists, pass --force to overwrite",
            path.display()
        );
    }

    let mut config = AppConfig::default();
    config.cache.frontend = default_frontend_settings();
    loader
        .save_to_file(&config, path)
        .with_context(|| format!("Failed to initialize {}", path.display()))?;

    writeln!(out, "Wrote {}", path.display())?;
    Ok(())
}
