//! Subcommand implementations.

pub mod add;
pub mod browse;
pub mod config;
pub mod delete;
pub mod list;

use std::process::ExitCode;
use std::sync::Arc;

use anyhow::{Context, Result};
use tracing::debug;

use shelf_http::HttpCatalog;
use shelf_sync::{ListSynchronizer, MutationCoordinator, PageOutcome};

use crate::cli::{ApiArgs, Commands};
use crate::notifier::ConsoleNotifier;
use crate::output;

pub type Shelf = ListSynchronizer<HttpCatalog, ConsoleNotifier>;
pub type Mutations = MutationCoordinator<HttpCatalog, ConsoleNotifier>;

pub async fn handle(command: Commands) -> Result<ExitCode> {
    match command {
        Commands::List(args) => list::run(args).await,
        Commands::Add(args) => add::run(args).await,
        Commands::Delete(args) => delete::run(args).await,
        Commands::Browse(args) => browse::run(args).await,
        Commands::Config(cmd) => config::run(cmd),
    }
}

/// Build a synchronizer from stored config plus overrides.
pub fn connect(args: &ApiArgs) -> Result<Arc<Shelf>> {
    let config = crate::config::load()?.with_overrides(args);
    config.check()?;
    debug!(api = %config.api_url, page_size = config.page_size, "Connecting");

    let catalog = HttpCatalog::with_timeout(config.api()?, config.timeout())
        .context("Failed to create HTTP client")?;
    let sync = ListSynchronizer::new(catalog, ConsoleNotifier, config.page_size)
        .context("Invalid page size")?;

    Ok(Arc::new(sync))
}

/// Print what a page request produced and map it to an exit code.
pub fn report(outcome: &PageOutcome) -> ExitCode {
    match outcome {
        PageOutcome::Committed(state) => {
            output::page(state);
            ExitCode::SUCCESS
        }
        PageOutcome::OutOfRange { total_pages, .. } => {
            output::error(&format!(
                "That page does not exist (the last page is {})",
                total_pages
            ));
            ExitCode::FAILURE
        }
        PageOutcome::Rejected => {
            output::error("Page and page size must be at least 1");
            ExitCode::FAILURE
        }
        PageOutcome::Unchanged | PageOutcome::Discarded => ExitCode::SUCCESS,
        // Already reported through the notifier.
        PageOutcome::Failed(_) => ExitCode::FAILURE,
    }
}
