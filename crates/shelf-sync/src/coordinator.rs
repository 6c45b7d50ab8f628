//! Create and delete, followed by a re-fetch of the visible page.

use std::sync::Arc;

use tracing::{debug, info, instrument, warn};

use shelf_core::error::ValidationError;
use shelf_core::{Book, BookId, Catalog, ErrorKind, FormState, Notifier};

use crate::synchronizer::{ListSynchronizer, PageOutcome};

/// What became of a create.
#[derive(Debug, Clone, PartialEq)]
pub enum CreateOutcome {
    /// The draft was incomplete; nothing was sent.
    Invalid(ValidationError),
    /// The catalog refused or could not be reached. The form is untouched.
    Failed(ErrorKind),
    /// The book was created and the visible page re-fetched.
    Created { book: Book, resync: PageOutcome },
}

/// What became of a delete.
#[derive(Debug, Clone, PartialEq)]
pub enum DeleteOutcome {
    /// The catalog refused or could not be reached. Nothing was re-fetched.
    Failed(ErrorKind),
    /// The book was deleted and the visible page re-fetched.
    Deleted { resync: PageOutcome },
}

/// Sequences mutations with the re-fetch that keeps the page authoritative.
///
/// New books are never spliced into the local page: where they land is the
/// server's decision, and page counts may shift.
#[derive(Debug)]
pub struct MutationCoordinator<C, N> {
    sync: Arc<ListSynchronizer<C, N>>,
}

impl<C, N> Clone for MutationCoordinator<C, N> {
    fn clone(&self) -> Self {
        Self {
            sync: Arc::clone(&self.sync),
        }
    }
}

impl<C: Catalog, N: Notifier> MutationCoordinator<C, N> {
    pub fn new(sync: Arc<ListSynchronizer<C, N>>) -> Self {
        Self { sync }
    }

    pub fn synchronizer(&self) -> &ListSynchronizer<C, N> {
        &self.sync
    }

    /// Validate and create the drafted book.
    ///
    /// On success the form is reset and the current page re-fetched. On
    /// failure the form keeps its values so the user can retry.
    #[instrument(skip(self, form))]
    pub async fn submit_create(&self, form: &mut FormState) -> CreateOutcome {
        let notifier = self.sync.notifier();

        let draft = match form.validate() {
            Ok(draft) => draft,
            Err(err) => {
                debug!(missing = %err, "Draft is incomplete");
                notifier.error(&format!("All fields are required: {}", field_list(&err)));
                return CreateOutcome::Invalid(err);
            }
        };

        let book = match self.sync.catalog().create(&draft).await {
            Ok(book) => book,
            Err(err) => {
                warn!(error = %err, "Create failed");
                notifier.error(err.server_message().unwrap_or("Failed to add book"));
                return CreateOutcome::Failed(err.kind());
            }
        };

        info!(id = %book.id, "Book added");
        notifier.success("Book added successfully!");
        form.reset();

        let resync = self.sync.refresh().await;
        CreateOutcome::Created { book, resync }
    }

    /// Delete a book and re-fetch the current page.
    ///
    /// If the re-fetch shows the current page no longer exists (the last
    /// book of the last page went away), the new last page is requested
    /// once.
    #[instrument(skip(self))]
    pub async fn submit_delete(&self, id: &BookId) -> DeleteOutcome {
        let notifier = self.sync.notifier();

        if let Err(err) = self.sync.catalog().delete(id).await {
            warn!(error = %err, "Delete failed");
            notifier.error(err.server_message().unwrap_or("Failed to delete book"));
            return DeleteOutcome::Failed(err.kind());
        }

        info!("Book deleted");
        notifier.success("Book deleted successfully!");

        let page_size = self.sync.snapshot().page_size();
        let resync = match self.sync.refresh().await {
            PageOutcome::OutOfRange { total_pages, .. } => {
                debug!(total_pages, "Current page is gone, moving to last page");
                self.sync.request_page(total_pages, page_size).await
            }
            outcome => outcome,
        };

        DeleteOutcome::Deleted { resync }
    }
}

fn field_list(err: &ValidationError) -> String {
    err.missing
        .iter()
        .map(|f| f.as_str())
        .collect::<Vec<_>>()
        .join(", ")
}
