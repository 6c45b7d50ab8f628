//! shelf-http - HTTP-backed book catalog.

mod catalog;
mod http;

pub use catalog::{DEFAULT_TIMEOUT, HttpCatalog};
