//! In-progress values of a new-book form.
//!
//! [`FormState`] holds what the user has typed so far. It knows nothing
//! about the network or pagination; [`FormState::validate`] turns it into a
//! [`DraftBook`] once every required field is filled in.

mod preview;

pub use preview::AttachmentPreview;

use chrono::NaiveDate;

use crate::Result;
use crate::book::{Attachment, DraftBook, DraftField};
use crate::error::ValidationError;
use crate::types::{Price, parse_date};

/// Draft values of a book that has not been submitted yet.
#[derive(Debug, Default)]
pub struct FormState {
    name: String,
    title: String,
    author: String,
    price: Option<Price>,
    published_date: Option<NaiveDate>,
    attachment: Option<Attachment>,
    preview: Option<AttachmentPreview>,
}

impl FormState {
    /// An empty form.
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace one field from its text input.
    ///
    /// A blank value clears the field. Price and date are parsed; if parsing
    /// fails the previous value is kept and the error is returned.
    pub fn set(&mut self, field: DraftField, value: &str) -> Result<()> {
        let blank = value.trim().is_empty();

        match field {
            DraftField::Name => self.name = value.to_string(),
            DraftField::Title => self.title = value.to_string(),
            DraftField::Author => self.author = value.to_string(),
            DraftField::Price => {
                self.price = if blank { None } else { Some(value.parse()?) };
            }
            DraftField::PublishedDate => {
                self.published_date = if blank { None } else { Some(parse_date(value)?) };
            }
        }

        Ok(())
    }

    /// Replace the attachment, releasing any previous preview.
    ///
    /// A new preview is generated for `Some`. If that fails the form is left
    /// as it was.
    pub fn set_attachment(&mut self, attachment: Option<Attachment>) -> Result<()> {
        let preview = attachment
            .as_ref()
            .map(AttachmentPreview::create)
            .transpose()?;

        self.preview = preview;
        self.attachment = attachment;
        Ok(())
    }

    /// Return to the empty form, releasing any preview.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    /// Check that every required field is filled in.
    ///
    /// The attachment is always optional.
    pub fn validate(&self) -> std::result::Result<DraftBook, ValidationError> {
        let missing: Vec<DraftField> = DraftField::ALL
            .into_iter()
            .filter(|field| self.is_empty(*field))
            .collect();

        match (self.price, self.published_date) {
            (Some(price), Some(published_date)) if missing.is_empty() => Ok(DraftBook {
                name: self.name.trim().to_string(),
                title: self.title.trim().to_string(),
                author: self.author.trim().to_string(),
                price,
                published_date,
                attachment: self.attachment.clone(),
            }),
            _ => Err(ValidationError { missing }),
        }
    }

    /// Whether a required field currently has no value.
    pub fn is_empty(&self, field: DraftField) -> bool {
        match field {
            DraftField::Name => self.name.trim().is_empty(),
            DraftField::Title => self.title.trim().is_empty(),
            DraftField::Author => self.author.trim().is_empty(),
            DraftField::Price => self.price.is_none(),
            DraftField::PublishedDate => self.published_date.is_none(),
        }
    }

    /// Text rendering of a field, as a form input would show it.
    pub fn value(&self, field: DraftField) -> String {
        match field {
            DraftField::Name => self.name.clone(),
            DraftField::Title => self.title.clone(),
            DraftField::Author => self.author.clone(),
            DraftField::Price => self.price.map(|p| p.to_string()).unwrap_or_default(),
            DraftField::PublishedDate => self
                .published_date
                .map(|d| d.format("%Y-%m-%d").to_string())
                .unwrap_or_default(),
        }
    }

    pub fn attachment(&self) -> Option<&Attachment> {
        self.attachment.as_ref()
    }

    pub fn preview(&self) -> Option<&AttachmentPreview> {
        self.preview.as_ref()
    }
}
