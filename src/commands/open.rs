//! Open command - show a book's link in the default browser

use crate::{Book, BookrError, catalog::Catalog, output};
use std::io::Write;

type Result<T> = std::result::Result<T, BookrError>;

/// Trimmed link of a record
///
/// Catalog links often carry a trailing newline.
///
/// # Errors
/// Returns `BookrError::InvalidInput` if the record has no link
pub fn link_of(book: &Book) -> Result<&str> {
    let link = book.link.trim();
    if link.is_empty() {
        return Err(BookrError::InvalidInput(format!(
            "'{}' has no link",
            book.title
        )));
    }
    Ok(link)
}

/// Open a record's link with the system handler
///
/// # Errors
/// Returns an error if the record has no link or the handler cannot be launched
pub fn open_book(book: &Book, quiet: bool, out: &mut impl Write) -> Result<()> {
    let link = link_of(book)?;
    tracing::info!(title = %book.title, link, "opening link");
    open::that(link)?;

    if !quiet {
        writeln!(out, "{}", output::book_details(book))?;
    }
    Ok(())
}

/// Execute the open command
///
/// # Errors
/// Returns `BookrError::NotFound` if no record has exactly this title
pub fn execute(catalog: &Catalog, title: &str, quiet: bool, out: &mut impl Write) -> Result<()> {
    let book = catalog
        .find(title)
        .ok_or_else(|| BookrError::NotFound(title.to_string()))?;
    open_book(book, quiet, out)
}
