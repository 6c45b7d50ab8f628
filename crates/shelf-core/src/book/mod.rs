//! Book records and drafts.
//!
//! This module defines the values exchanged with the catalog.
//! The operations themselves are methods on [`Catalog`](crate::Catalog).

mod attachment;
mod draft;
mod types;

pub use attachment::Attachment;
pub use draft::{DraftBook, DraftField};
pub use types::{Book, BookPage};
