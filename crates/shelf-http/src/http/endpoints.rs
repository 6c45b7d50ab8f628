//! Book API endpoint definitions and request/response types.

use serde::{Deserialize, Serialize};

use shelf_core::error::ProtocolError;
use shelf_core::types::parse_date;
use shelf_core::{Book, BookId, BookPage, DraftBook, Price, Result};

// ============================================================================
// Endpoint Paths
// ============================================================================

/// GET, paginated listing.
pub const LIST_BOOKS: &str = "api/books/getbook";

/// POST, JSON or multipart.
pub const ADD_BOOK: &str = "api/books/addbook";

/// DELETE, followed by `/{id}`.
pub const DELETE_BOOK: &str = "api/books/deletebook";

// ============================================================================
// Field Names
// ============================================================================

pub const FIELD_NAME: &str = "BookName";
pub const FIELD_TITLE: &str = "BookTitle";
pub const FIELD_AUTHOR: &str = "BookAuthor";
pub const FIELD_PRICE: &str = "BookPrice";
pub const FIELD_PUBLISHED_DATE: &str = "PublishedDate";
pub const FIELD_ATTACHMENT: &str = "BookAttachment";

// ============================================================================
// Request/Response Types
// ============================================================================

/// Query parameters for the listing.
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksQuery {
    pub page: u32,
    pub page_size: u32,
}

/// JSON body for creating a book without an attachment.
#[derive(Debug, Serialize)]
pub struct AddBookRequest<'a> {
    #[serde(rename = "BookName")]
    pub name: &'a str,
    #[serde(rename = "BookTitle")]
    pub title: &'a str,
    #[serde(rename = "BookAuthor")]
    pub author: &'a str,
    #[serde(rename = "BookPrice")]
    pub price: f64,
    #[serde(rename = "PublishedDate")]
    pub published_date: String,
}

impl<'a> AddBookRequest<'a> {
    pub fn from_draft(draft: &'a DraftBook) -> Self {
        Self {
            name: &draft.name,
            title: &draft.title,
            author: &draft.author,
            price: draft.price.value(),
            published_date: format_date(draft),
        }
    }
}

/// Calendar date as the API expects it.
pub fn format_date(draft: &DraftBook) -> String {
    draft.published_date.format("%Y-%m-%d").to_string()
}

/// Response from the listing.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ListBooksResponse {
    pub books: Vec<WireBook>,
    #[serde(default)]
    pub total_items: Option<u64>,
    #[serde(default)]
    pub total_pages: Option<u32>,
    #[serde(default)]
    pub current_page: Option<u32>,
}

impl ListBooksResponse {
    /// Check the reply against the listing contract for `page_size`.
    pub fn into_page(self, page_size: u32) -> Result<BookPage> {
        let total_items = self.total_items.ok_or(missing("totalItems"))?;
        let total_pages = self.total_pages.ok_or(missing("totalPages"))?;
        let current_page = self.current_page.ok_or(missing("currentPage"))?;

        if current_page == 0 {
            return Err(ProtocolError::Pagination {
                message: "currentPage must be at least 1".to_string(),
            }
            .into());
        }
        if self.books.len() > page_size as usize {
            return Err(ProtocolError::Pagination {
                message: format!(
                    "{} books returned for page size {}",
                    self.books.len(),
                    page_size
                ),
            }
            .into());
        }

        // An empty catalog is still one (empty) page.
        let total_pages = match (total_pages, total_items) {
            (0, 0) => 1,
            (0, _) => {
                return Err(ProtocolError::Pagination {
                    message: format!("{} items reported on 0 pages", total_items),
                }
                .into());
            }
            (n, _) => n,
        };

        let items = self
            .books
            .into_iter()
            .map(WireBook::into_book)
            .collect::<Result<Vec<_>>>()?;

        Ok(BookPage {
            items,
            total_items,
            total_pages,
            current_page,
        })
    }
}

/// Response from creating a book: either the book or `{ "book": ... }`.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum AddBookResponse {
    Wrapped { book: WireBook },
    Bare(WireBook),
}

impl AddBookResponse {
    pub fn into_book(self) -> Result<Book> {
        match self {
            AddBookResponse::Wrapped { book } | AddBookResponse::Bare(book) => book.into_book(),
        }
    }
}

/// Error body.
#[derive(Debug, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub message: Option<String>,
}

/// A price as the server sends it: a number or numeric text.
#[derive(Debug, Deserialize)]
#[serde(untagged)]
pub enum WirePrice {
    Number(f64),
    Text(String),
}

/// A book as it appears on the wire. Every field is checked in
/// [`WireBook::into_book`].
#[derive(Debug, Deserialize)]
pub struct WireBook {
    #[serde(rename = "_id", default)]
    pub id: Option<String>,
    #[serde(rename = "BookName", default)]
    pub name: Option<String>,
    #[serde(rename = "BookTitle", default)]
    pub title: Option<String>,
    #[serde(rename = "BookAuthor", default)]
    pub author: Option<String>,
    #[serde(rename = "BookPrice", default)]
    pub price: Option<WirePrice>,
    #[serde(rename = "PublishedDate", default)]
    pub published_date: Option<String>,
    #[serde(rename = "BookAttachmentUrl", default)]
    pub attachment_url: Option<String>,
}

impl WireBook {
    pub fn into_book(self) -> Result<Book> {
        let id = self.id.ok_or(missing("_id"))?;
        let id = BookId::new(id).map_err(|e| invalid("_id", e))?;

        let price = match self.price.ok_or(missing(FIELD_PRICE))? {
            WirePrice::Number(n) => Price::new(n),
            WirePrice::Text(s) => s.parse(),
        }
        .map_err(|e| invalid(FIELD_PRICE, e))?;

        let published_date = self.published_date.ok_or(missing(FIELD_PUBLISHED_DATE))?;
        let published_date =
            parse_date(&published_date).map_err(|e| invalid(FIELD_PUBLISHED_DATE, e))?;

        Ok(Book {
            id,
            name: self.name.ok_or(missing(FIELD_NAME))?,
            title: self.title.ok_or(missing(FIELD_TITLE))?,
            author: self.author.ok_or(missing(FIELD_AUTHOR))?,
            price,
            published_date,
            attachment_url: self.attachment_url.filter(|u| !u.is_empty()),
        })
    }
}

fn missing(field: &'static str) -> ProtocolError {
    ProtocolError::InvalidField {
        field,
        reason: "missing".to_string(),
    }
}

fn invalid(field: &'static str, err: shelf_core::Error) -> ProtocolError {
    ProtocolError::InvalidField {
        field,
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;
    use serde_json::json;

    use super::*;

    fn wire(value: serde_json::Value) -> WireBook {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn decodes_mongo_style_book() {
        let book = wire(json!({
            "_id": "65f1c2a9e4b0a1b2c3d4e5f6",
            "BookName": "Dune",
            "BookTitle": "Dune",
            "BookAuthor": "Frank Herbert",
            "BookPrice": "499",
            "PublishedDate": "1965-08-01T00:00:00.000Z",
            "__v": 0
        }))
        .into_book()
        .unwrap();

        assert_eq!(book.id.as_str(), "65f1c2a9e4b0a1b2c3d4e5f6");
        assert_eq!(book.price.value(), 499.0);
        assert_eq!(
            book.published_date,
            NaiveDate::from_ymd_opt(1965, 8, 1).unwrap()
        );
        assert!(book.attachment_url.is_none());
    }

    #[test]
    fn missing_field_is_named() {
        let err = wire(json!({
            "_id": "x1",
            "BookName": "Dune",
            "BookTitle": "Dune",
            "BookPrice": 10,
            "PublishedDate": "1965-08-01"
        }))
        .into_book()
        .unwrap_err();

        assert!(err.to_string().contains("BookAuthor"));
    }

    #[test]
    fn negative_price_is_a_protocol_error() {
        let err = wire(json!({
            "_id": "x1",
            "BookName": "a",
            "BookTitle": "b",
            "BookAuthor": "c",
            "BookPrice": -1,
            "PublishedDate": "1965-08-01"
        }))
        .into_book()
        .unwrap_err();

        assert_eq!(err.kind(), shelf_core::ErrorKind::Protocol);
    }

    #[test]
    fn empty_catalog_has_one_page() {
        let response: ListBooksResponse = serde_json::from_value(json!({
            "books": [],
            "totalItems": 0,
            "totalPages": 0,
            "currentPage": 1
        }))
        .unwrap();

        let page = response.into_page(5).unwrap();
        assert_eq!(page.total_pages, 1);
        assert!(page.items.is_empty());
    }

    #[test]
    fn missing_totals_are_rejected() {
        let response: ListBooksResponse =
            serde_json::from_value(json!({ "books": [] })).unwrap();
        let err = response.into_page(5).unwrap_err();
        assert!(err.to_string().contains("totalItems"));
    }

    #[test]
    fn items_without_pages_are_rejected() {
        let response: ListBooksResponse = serde_json::from_value(json!({
            "books": [],
            "totalItems": 3,
            "totalPages": 0,
            "currentPage": 1
        }))
        .unwrap();
        assert!(response.into_page(5).is_err());
    }

    #[test]
    fn more_books_than_page_size_are_rejected() {
        let book = json!({
            "_id": "x1",
            "BookName": "a",
            "BookTitle": "b",
            "BookAuthor": "c",
            "BookPrice": 1,
            "PublishedDate": "2001-01-01"
        });
        let response: ListBooksResponse = serde_json::from_value(json!({
            "books": [book.clone(), book],
            "totalItems": 2,
            "totalPages": 2,
            "currentPage": 1
        }))
        .unwrap();

        let err = response.into_page(1).unwrap_err();
        assert_eq!(err.kind(), shelf_core::ErrorKind::Protocol);
    }

    #[test]
    fn add_response_accepts_wrapped_and_bare() {
        let book = json!({
            "_id": "x1",
            "BookName": "a",
            "BookTitle": "b",
            "BookAuthor": "c",
            "BookPrice": 1.5,
            "PublishedDate": "2001-01-01"
        });

        let wrapped: AddBookResponse =
            serde_json::from_value(json!({ "message": "ok", "book": book.clone() })).unwrap();
        let bare: AddBookResponse = serde_json::from_value(book).unwrap();

        assert_eq!(wrapped.into_book().unwrap(), bare.into_book().unwrap());
    }

    #[test]
    fn request_uses_api_field_names() {
        let draft = DraftBook {
            name: "a".to_string(),
            title: "b".to_string(),
            author: "c".to_string(),
            price: Price::new(12.5).unwrap(),
            published_date: NaiveDate::from_ymd_opt(2001, 2, 3).unwrap(),
            attachment: None,
        };

        let body = serde_json::to_value(AddBookRequest::from_draft(&draft)).unwrap();
        assert_eq!(
            body,
            json!({
                "BookName": "a",
                "BookTitle": "b",
                "BookAuthor": "c",
                "BookPrice": 12.5,
                "PublishedDate": "2001-02-03"
            })
        );
    }
}
