//! Text rendering of contacts for listings and search results.

use crate::contact::{Contact, ContactBook};

/// Width of the name column unless configured otherwise.
pub const DEFAULT_NAME_WIDTH: usize = 20;

/// Widest name column accepted from configuration.
pub const MAX_NAME_WIDTH: usize = 1024;

/// Shown by [`render_list`] for an empty book.
pub const EMPTY_LIST_MESSAGE: &str = "No contacts stored.";

/// One row: name padded (and cut) to `width` characters, ` | `, phone.
///
/// `width` is capped at [`MAX_NAME_WIDTH`].
pub fn format_row(name: &str, phone: &str, width: usize) -> String {
    let width = width.min(MAX_NAME_WIDTH);
    format!("{name:<width$.width$} | {phone}")
}

/// Rows for a sequence of contacts, joined by newlines.
pub fn render_rows<'a>(contacts: impl IntoIterator<Item = &'a Contact>, width: usize) -> String {
    contacts
        .into_iter()
        .map(|c| format_row(&c.name, &c.phone, width))
        .collect::<Vec<_>>()
        .join("\n")
}

/// Every contact, sorted case-insensitively by name.
pub fn render_list(book: &ContactBook, width: usize) -> String {
    if book.is_empty() {
        return EMPTY_LIST_MESSAGE.to_string();
    }
    render_rows(&book.sorted(), width)
}
