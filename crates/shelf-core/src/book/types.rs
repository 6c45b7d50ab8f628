//! Catalog record types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::{BookId, Price};

/// A book persisted in the remote catalog.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Book {
    /// Server-assigned identity. Never changes once created.
    pub id: BookId,
    pub name: String,
    pub title: String,
    pub author: String,
    pub price: Price,
    pub published_date: NaiveDate,
    /// Reference to a stored attachment, if the book has one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub attachment_url: Option<String>,
}

/// One page of the catalog as reported by the server.
#[derive(Debug, Clone, PartialEq)]
pub struct BookPage {
    /// The books on this page, in server order.
    pub items: Vec<Book>,

    /// Total number of books across all pages.
    pub total_items: u64,

    /// Total number of pages for the requested page size.
    pub total_pages: u32,

    /// The page the server answered for.
    pub current_page: u32,
}
