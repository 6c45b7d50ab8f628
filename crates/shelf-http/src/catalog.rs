//! HTTP-backed book catalog.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::multipart::{Form, Part};
use tracing::{debug, info, instrument};

use shelf_core::error::InvalidInputError;
use shelf_core::{ApiUrl, Attachment, Book, BookId, BookPage, Catalog, DraftBook, Result};

use crate::http::*;

/// Request timeout used by [`HttpCatalog::new`].
pub const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// A network-backed catalog talking to the book API.
#[derive(Debug, Clone)]
pub struct HttpCatalog {
    client: ApiClient,
}

impl HttpCatalog {
    /// Create a catalog for the given API with the default timeout.
    pub fn new(api: ApiUrl) -> Result<Self> {
        Self::with_timeout(api, DEFAULT_TIMEOUT)
    }

    /// Create a catalog whose requests give up after `timeout`.
    pub fn with_timeout(api: ApiUrl, timeout: Duration) -> Result<Self> {
        Ok(Self {
            client: ApiClient::new(api, timeout)?,
        })
    }

    /// Returns the API URL for this catalog.
    pub fn api(&self) -> &ApiUrl {
        self.client.api()
    }
}

#[async_trait]
impl Catalog for HttpCatalog {
    #[instrument(skip(self))]
    async fn list(&self, page: u32, page_size: u32) -> Result<BookPage> {
        debug!("Listing books via HTTP");

        let query = ListBooksQuery { page, page_size };
        let response: ListBooksResponse = self.client.get(LIST_BOOKS, &query).await?;

        response.into_page(page_size)
    }

    #[instrument(skip(self, draft), fields(name = %draft.name, attachment = draft.attachment.is_some()))]
    async fn create(&self, draft: &DraftBook) -> Result<Book> {
        let response: AddBookResponse = match &draft.attachment {
            Some(attachment) => {
                debug!("Creating book via multipart upload");
                let form = multipart_form(draft, attachment)?;
                self.client.post_multipart(ADD_BOOK, form).await?
            }
            None => {
                debug!("Creating book via JSON");
                let request = AddBookRequest::from_draft(draft);
                self.client.post_json(ADD_BOOK, &request).await?
            }
        };

        let book = response.into_book()?;
        info!(id = %book.id, "Book created");
        Ok(book)
    }

    #[instrument(skip(self))]
    async fn delete(&self, id: &BookId) -> Result<()> {
        debug!("Deleting book via HTTP");

        self.client
            .delete(&format!("{}/{}", DELETE_BOOK, id.as_str()))
            .await
    }
}

/// One text part per scalar field, plus the file part.
fn multipart_form(draft: &DraftBook, attachment: &Attachment) -> Result<Form> {
    let part = Part::bytes(attachment.bytes().to_vec())
        .file_name(attachment.file_name().to_string())
        .mime_str(attachment.media_type())
        .map_err(|e| InvalidInputError::Attachment {
            reason: e.to_string(),
        })?;

    Ok(Form::new()
        .text(FIELD_NAME, draft.name.clone())
        .text(FIELD_TITLE, draft.title.clone())
        .text(FIELD_AUTHOR, draft.author.clone())
        .text(FIELD_PRICE, draft.price.value().to_string())
        .text(FIELD_PUBLISHED_DATE, format_date(draft))
        .part(FIELD_ATTACHMENT, part))
}
