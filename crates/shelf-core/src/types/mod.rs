//! Core catalog types.
//!
//! These types enforce their invariants at construction time,
//! ensuring invalid states are unrepresentable.

mod api_url;
mod book_id;
mod date;
mod price;

pub use api_url::ApiUrl;
pub use book_id::BookId;
pub use date::parse_date;
pub use price::Price;
