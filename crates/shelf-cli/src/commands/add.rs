//! Add command implementation.

use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Args;
use tracing::debug;

use shelf_core::{Attachment, DraftField, FormState};
use shelf_sync::CreateOutcome;

use crate::cli::ApiArgs;
use crate::output;

use super::Mutations;

#[derive(Args, Debug)]
pub struct AddArgs {
    #[command(flatten)]
    pub api: ApiArgs,

    /// Book name
    #[arg(long)]
    pub name: Option<String>,

    /// Book title
    #[arg(long)]
    pub title: Option<String>,

    /// Author
    #[arg(long)]
    pub author: Option<String>,

    /// Price, e.g. 12.50
    #[arg(long)]
    pub price: Option<String>,

    /// Publication date (YYYY-MM-DD)
    #[arg(long = "published-date")]
    pub published_date: Option<String>,

    /// File to upload with the book
    #[arg(long)]
    pub attachment: Option<PathBuf>,
}

impl AddArgs {
    fn fields(&self) -> [(DraftField, Option<&str>); 5] {
        [
            (DraftField::Name, self.name.as_deref()),
            (DraftField::Title, self.title.as_deref()),
            (DraftField::Author, self.author.as_deref()),
            (DraftField::Price, self.price.as_deref()),
            (DraftField::PublishedDate, self.published_date.as_deref()),
        ]
    }
}

pub async fn run(args: AddArgs) -> Result<ExitCode> {
    let mut form = FormState::new();
    for (field, value) in args.fields() {
        if let Some(value) = value {
            form.set(field, value)
                .with_context(|| format!("Invalid {}", field))?;
        }
    }

    if let Some(path) = &args.attachment {
        let attachment = Attachment::from_path(path)
            .with_context(|| format!("Failed to read attachment {}", path.display()))?;
        form.set_attachment(Some(attachment))
            .context("Failed to prepare attachment preview")?;
        if let Some(preview) = form.preview() {
            debug!(path = %preview.path().display(), media_type = preview.media_type(), "Attachment preview ready");
        }
    }

    let shelf = super::connect(&args.api)?;
    let mutations = Mutations::new(shelf);

    match mutations.submit_create(&mut form).await {
        CreateOutcome::Created { book, resync } => {
            output::field("id", book.id.as_str());
            if let Some(url) = &book.attachment_url {
                output::field("attachment", url);
            }
            super::report(&resync);
            Ok(ExitCode::SUCCESS)
        }
        CreateOutcome::Invalid(_) | CreateOutcome::Failed(_) => Ok(ExitCode::FAILURE),
    }
}
