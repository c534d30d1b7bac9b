//! Facets command - show the options for every filter

use crate::{BookrError, catalog::Catalog, catalog::FacetOptions, output};
use std::io::Write;

type Result<T> = std::result::Result<T, BookrError>;

/// Execute the facets command
///
/// # Errors
/// Returns an error if writing to `out` or JSON serialization fails
pub fn execute(catalog: &Catalog, json: bool, quiet: bool, out: &mut impl Write) -> Result<()> {
    let facets = FacetOptions::from_catalog(catalog);

    if json {
        serde_json::to_writer_pretty(&mut *out, &facets)?;
    } else {
        write!(out, "{}", output::render_facets(&facets, quiet))?;
    }
    writeln!(out)?;
    Ok(())
}
