//! shelf-core - Core types and traits for the shelf catalog client.

pub mod book;
pub mod error;
pub mod form;
pub mod pagination;
pub mod traits;
pub mod types;

pub use book::{Attachment, Book, BookPage, DraftBook, DraftField};
pub use error::{Error, ErrorKind};
pub use form::{AttachmentPreview, FormState};
pub use pagination::{DEFAULT_PAGE_SIZE, PageFit, PaginationState};
pub use traits::{Catalog, Notifier};
pub use types::{ApiUrl, BookId, Price};

/// Result type alias using the crate's Error type.
pub type Result<T> = std::result::Result<T, Error>;
