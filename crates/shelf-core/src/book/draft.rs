//! Validated drafts of new books.

use chrono::NaiveDate;
use std::fmt;

use crate::types::Price;

use super::Attachment;

/// The required fields of a book draft, in form order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DraftField {
    Name,
    Title,
    Author,
    Price,
    PublishedDate,
}

impl DraftField {
    /// All required fields, in form order.
    pub const ALL: [DraftField; 5] = [
        DraftField::Name,
        DraftField::Title,
        DraftField::Author,
        DraftField::Price,
        DraftField::PublishedDate,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            DraftField::Name => "name",
            DraftField::Title => "title",
            DraftField::Author => "author",
            DraftField::Price => "price",
            DraftField::PublishedDate => "published date",
        }
    }
}

impl fmt::Display for DraftField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A complete book draft, ready to be sent to the catalog.
///
/// Produced by [`FormState::validate`](crate::FormState::validate); every
/// required field is present.
#[derive(Debug, Clone, PartialEq)]
pub struct DraftBook {
    pub name: String,
    pub title: String,
    pub author: String,
    pub price: Price,
    pub published_date: NaiveDate,
    pub attachment: Option<Attachment>,
}
