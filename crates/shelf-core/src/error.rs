//! Error types for shelf.
//!
//! This module provides a unified error type with explicit variants for
//! local validation, transport, server, protocol and input errors.

use std::fmt;
use thiserror::Error;

use crate::book::DraftField;

/// The unified error type for shelf operations.
///
/// Every variant is recoverable: callers report it and let the user retry.
#[derive(Debug, Error)]
pub enum Error {
    /// A draft failed local validation. No request was sent.
    #[error("validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// Network transport errors (connection, timeout).
    #[error("transport error: {0}")]
    Transport(#[from] TransportError),

    /// The server processed the request and declined it.
    #[error("server error: {0}")]
    Server(#[from] ServerError),

    /// The server replied successfully but the body broke the contract.
    #[error("protocol error: {0}")]
    Protocol(#[from] ProtocolError),

    /// Input validation errors (identifiers, prices, dates, URLs).
    #[error("invalid input: {0}")]
    InvalidInput(#[from] InvalidInputError),

    /// Local I/O (attachments, preview files).
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Coarse classification of an [`Error`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Validation,
    Transport,
    Server,
    Protocol,
    InvalidInput,
    Io,
}

impl Error {
    /// Returns the kind of this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            Error::Validation(_) => ErrorKind::Validation,
            Error::Transport(_) => ErrorKind::Transport,
            Error::Server(_) => ErrorKind::Server,
            Error::Protocol(_) => ErrorKind::Protocol,
            Error::InvalidInput(_) => ErrorKind::InvalidInput,
            Error::Io(_) => ErrorKind::Io,
        }
    }

    /// Returns the server-provided message, if this error carries one.
    pub fn server_message(&self) -> Option<&str> {
        match self {
            Error::Server(err) => err.message.as_deref(),
            _ => None,
        }
    }
}

/// A draft is missing required fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationError {
    /// Every required field that was empty, in form order.
    pub missing: Vec<DraftField>,
}

impl fmt::Display for ValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "missing required fields: ")?;
        for (i, field) in self.missing.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", field)?;
        }
        Ok(())
    }
}

impl std::error::Error for ValidationError {}

/// Transport-level errors.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Network connection failed.
    #[error("connection failed: {message}")]
    Connection { message: String },

    /// Request timed out.
    #[error("request timed out")]
    Timeout,

    /// Generic HTTP error.
    #[error("HTTP error: {message}")]
    Http { message: String },
}

/// The server declined a request.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerError {
    /// HTTP status code.
    pub status: u16,
    /// Error message from the server.
    pub message: Option<String>,
}

impl ServerError {
    /// Create a new server error.
    pub fn new(status: u16, message: Option<String>) -> Self {
        Self { status, message }
    }

    /// Check if the server reported the resource as missing.
    pub fn is_not_found(&self) -> bool {
        self.status == 404
    }
}

impl fmt::Display for ServerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HTTP {}", self.status)?;
        if let Some(ref message) = self.message {
            write!(f, ": {}", message)?;
        }
        Ok(())
    }
}

impl std::error::Error for ServerError {}

/// Response bodies that do not match the expected shape.
#[derive(Debug, Error)]
pub enum ProtocolError {
    /// The body could not be decoded.
    #[error("malformed response body: {message}")]
    Malformed { message: String },

    /// A field of an item was missing or malformed.
    #[error("invalid field '{field}': {reason}")]
    InvalidField { field: &'static str, reason: String },

    /// Pagination numbers that cannot describe a real page.
    #[error("inconsistent pagination: {message}")]
    Pagination { message: String },
}

/// Input validation errors.
#[derive(Debug, Error)]
pub enum InvalidInputError {
    /// Invalid book identifier.
    #[error("invalid book id '{value}': {reason}")]
    BookId { value: String, reason: String },

    /// Invalid price.
    #[error("invalid price '{value}': {reason}")]
    Price { value: String, reason: String },

    /// Invalid calendar date.
    #[error("invalid date '{value}': {reason}")]
    Date { value: String, reason: String },

    /// Invalid API base URL.
    #[error("invalid API URL '{value}': {reason}")]
    ApiUrl { value: String, reason: String },

    /// Invalid page request.
    #[error("invalid page: {reason}")]
    Page { reason: String },

    /// Invalid attachment.
    #[error("invalid attachment: {reason}")]
    Attachment { reason: String },
}
