//! Check command - report titles shared by more than one record

use crate::{BookrError, catalog::Catalog, catalog::CatalogError};
use colored::Colorize;
use std::io::Write;

type Result<T> = std::result::Result<T, BookrError>;

/// Execute the check command
///
/// # Errors
/// Returns `CatalogError::DuplicateIdentity` when any title repeats, so the
/// process exits non-zero.
pub fn execute(catalog: &Catalog, quiet: bool, out: &mut impl Write) -> Result<()> {
    let duplicates = catalog.duplicate_identities();

    if duplicates.is_empty() {
        if !quiet {
            writeln!(
                out,
                "{} {} book(s), every title is unique",
                "✓".green(),
                catalog.len()
            )?;
        }
        return Ok(());
    }

    if !quiet {
        writeln!(
            out,
            "{} {} title(s) appear more than once; favorites for them are shared:",
            "✗".red(),
            duplicates.len()
        )?;
    }
    for title in &duplicates {
        let count = catalog.iter().filter(|book| book.title == *title).count();
        if quiet {
            writeln!(out, "{title}")?;
        } else {
            writeln!(out, "  {title} ({count} records)")?;
        }
    }

    Err(CatalogError::DuplicateIdentity(duplicates).into())
}
