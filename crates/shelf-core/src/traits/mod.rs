//! Core traits for the catalog and user notifications.

mod catalog;
mod notifier;

pub use catalog::Catalog;
pub use notifier::Notifier;
