//! CLI argument definitions.

use clap::{Args, Parser, Subcommand};

use crate::commands::add::AddArgs;
use crate::commands::browse::BrowseArgs;
use crate::commands::config::ConfigCommand;
use crate::commands::delete::DeleteArgs;
use crate::commands::list::ListArgs;

/// Browse and edit a paginated book catalog.
#[derive(Parser, Debug)]
#[command(name = "shelf")]
#[command(author, version = env!("SHELF_VERSION"), about, long_about = None)]
pub struct Cli {
    /// Increase verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Output logs as JSON
    #[arg(long, global = true)]
    pub json_logs: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show one page of the catalog
    List(ListArgs),

    /// Add a book
    Add(AddArgs),

    /// Delete a book by id
    Delete(DeleteArgs),

    /// Page through the catalog interactively
    Browse(BrowseArgs),

    /// Show or change the stored configuration
    Config(ConfigCommand),
}

/// Connection overrides shared by every command that talks to the API.
#[derive(Args, Debug, Clone, Default)]
pub struct ApiArgs {
    /// Base URL of the book API
    #[arg(long, env = "SHELF_API_URL")]
    pub api_url: Option<String>,

    /// Books per page
    #[arg(long, env = "SHELF_PAGE_SIZE")]
    pub page_size: Option<u32>,
}
