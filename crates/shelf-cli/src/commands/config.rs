//! Config command implementation.

use std::process::ExitCode;

use anyhow::{Result, bail};
use clap::{Args, Subcommand};

use crate::cli::ApiArgs;
use crate::config;
use crate::output;

#[derive(Args, Debug)]
pub struct ConfigCommand {
    #[command(flatten)]
    pub api: ApiArgs,

    #[command(subcommand)]
    pub command: Option<ConfigSubcommand>,
}

#[derive(Subcommand, Debug)]
pub enum ConfigSubcommand {
    /// Persist new defaults to the config file
    Set(SetArgs),
}

#[derive(Args, Debug)]
pub struct SetArgs {
    /// Base URL of the book API
    #[arg(long)]
    pub api_url: Option<String>,

    /// Books per page
    #[arg(long)]
    pub page_size: Option<u32>,

    /// Request timeout in seconds
    #[arg(long)]
    pub timeout_secs: Option<u64>,
}

pub fn run(cmd: ConfigCommand) -> Result<ExitCode> {
    match cmd.command {
        None => show(&cmd.api),
        Some(ConfigSubcommand::Set(args)) => set(args),
    }
}

/// Print the effective configuration, overrides included.
fn show(api: &ApiArgs) -> Result<ExitCode> {
    let config = config::load()?.with_overrides(api);

    output::field("api_url", &config.api_url);
    output::field("page_size", &config.page_size.to_string());
    output::field("timeout_secs", &config.timeout_secs.to_string());
    output::field("file", &config::config_path()?.display().to_string());

    Ok(ExitCode::SUCCESS)
}

fn set(args: SetArgs) -> Result<ExitCode> {
    if args.api_url.is_none() && args.page_size.is_none() && args.timeout_secs.is_none() {
        bail!("Nothing to set. Pass --api-url, --page-size or --timeout-secs.");
    }

    let mut config = config::load()?;
    if let Some(api_url) = args.api_url {
        config.api_url = api_url;
    }
    if let Some(page_size) = args.page_size {
        config.page_size = page_size;
    }
    if let Some(timeout_secs) = args.timeout_secs {
        config.timeout_secs = timeout_secs;
    }

    let path = config::save(&config)?;
    output::success(&format!("Saved {}", path.display()));

    Ok(ExitCode::SUCCESS)
}
