//! List command implementation.

use std::process::ExitCode;

use anyhow::Result;
use clap::Args;

use shelf_sync::PageOutcome;

use crate::cli::ApiArgs;
use crate::output;

#[derive(Args, Debug)]
pub struct ListArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    /// Page to show
    #[arg(long, default_value_t = 1)]
    pub page: u32,

    /// Print one JSON object per book instead of a table
    #[arg(long)]
    pub json: bool,
}

pub async fn run(args: ListArgs) -> Result<ExitCode> {
    let shelf = super::connect(&args.api)?;
    let page_size = shelf.snapshot().page_size();

    let outcome = shelf.request_page(args.page, page_size).await;

    match (&outcome, args.json) {
        (PageOutcome::Committed(state), true) => {
            for book in state.items() {
                output::json(book)?;
            }
            Ok(ExitCode::SUCCESS)
        }
        _ => Ok(super::report(&outcome)),
    }
}
