//! Output formatting helpers.

use anyhow::Result;
use colored::Colorize;
use serde::Serialize;

use shelf_core::{Book, PaginationState};

/// Print a success message.
pub fn success(msg: &str) {
    println!("{} {}", "✓".green(), msg);
}

/// Print an error message.
pub fn error(msg: &str) {
    eprintln!("{} {}", "✗".red(), msg);
}

/// Print a labeled field.
pub fn field(label: &str, value: &str) {
    println!("{}: {}", label.dimmed(), value);
}

/// Print a value as compact JSON.
pub fn json<T: Serialize>(value: &T) -> Result<()> {
    let json = serde_json::to_string(value)?;
    println!("{}", json);
    Ok(())
}

/// Print the committed page followed by a position footer.
pub fn page(state: &PaginationState) {
    if state.items().is_empty() {
        println!("{}", "No books found.".dimmed());
    }

    for book in state.items() {
        book_line(book);
    }

    println!(
        "{}",
        format!(
            "Page {} of {} ({} books, {} per page)",
            state.current_page(),
            state.total_pages(),
            state.total_items(),
            state.page_size()
        )
        .dimmed()
    );
}

fn book_line(book: &Book) {
    let mut line = format!(
        "{}  {} | {} | {} | {} | {}",
        book.id.as_str().dimmed(),
        book.name.bold(),
        book.title,
        book.author,
        book.price,
        book.published_date.format("%Y-%m-%d"),
    );
    if let Some(url) = &book.attachment_url {
        line.push_str(&format!(" | {}", url.cyan()));
    }
    println!("{}", line);
}
