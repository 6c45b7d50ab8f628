//! Catalog trait.

use std::sync::Arc;

use async_trait::async_trait;

use crate::Result;
use crate::book::{Book, BookPage, DraftBook};
use crate::types::BookId;

/// The remote book collection.
///
/// Implementations hold no state between calls; every call is independent
/// and may run concurrently with others.
#[async_trait]
pub trait Catalog: Send + Sync {
    /// Fetch one page. `page` is 1-based.
    async fn list(&self, page: u32, page_size: u32) -> Result<BookPage>;

    /// Create a book. Drafts with an attachment are uploaded as multipart.
    async fn create(&self, draft: &DraftBook) -> Result<Book>;

    /// Delete a book. Whatever the server decides is reported as-is.
    async fn delete(&self, id: &BookId) -> Result<()>;
}

#[async_trait]
impl<C: Catalog + ?Sized> Catalog for Arc<C> {
    async fn list(&self, page: u32, page_size: u32) -> Result<BookPage> {
        (**self).list(page, page_size).await
    }

    async fn create(&self, draft: &DraftBook) -> Result<Book> {
        (**self).create(draft).await
    }

    async fn delete(&self, id: &BookId) -> Result<()> {
        (**self).delete(id).await
    }
}
