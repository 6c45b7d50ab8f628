//! Delete command implementation.

use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;

use shelf_core::BookId;
use shelf_sync::DeleteOutcome;

use crate::cli::ApiArgs;

use super::Mutations;

#[derive(Args, Debug)]
pub struct DeleteArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    /// Id of the book to delete
    pub id: String,

    /// Page to re-fetch afterwards
    #[arg(long, default_value_t = 1)]
    pub page: u32,
}

pub async fn run(args: DeleteArgs) -> Result<ExitCode> {
    let id = BookId::new(&args.id).context("Invalid book id")?;

    let shelf = super::connect(&args.api)?;
    if args.page > 1 {
        // Position on the requested page so the resync corrects from there.
        let page_size = shelf.snapshot().page_size();
        let positioned = shelf.request_page(args.page, page_size).await;
        if positioned.committed().is_none() {
            return Ok(super::report(&positioned));
        }
    }

    let mutations = Mutations::new(shelf);
    match mutations.submit_delete(&id).await {
        DeleteOutcome::Deleted { resync } => {
            super::report(&resync);
            Ok(ExitCode::SUCCESS)
        }
        DeleteOutcome::Failed(_) => Ok(ExitCode::FAILURE),
    }
}
