//! List command - render one page of matching books

use crate::{
    BookrError,
    browse::{BrowseSession, Event},
    catalog::Catalog,
    filters::{FilterCriteria, FilterState},
    output,
};
use std::io::Write;

type Result<T> = std::result::Result<T, BookrError>;

/// Execute the list command
///
/// Favorites given on the command line are toggled in order, so naming a
/// title twice leaves it unmarked.
///
/// # Errors
/// Returns an error if writing to `out` or JSON serialization fails
pub fn execute(
    catalog: Catalog,
    criteria: FilterCriteria,
    page: usize,
    favorites: &[String],
    json: bool,
    quiet: bool,
    out: &mut impl Write,
) -> Result<()> {
    let filters = FilterState::from(criteria).with_current_page(page);
    let mut session = BrowseSession::builder()
        .catalog(catalog)
        .filters(filters)
        .build()?;

    for title in favorites {
        session.dispatch(Event::ToggleFavorite(title.clone()));
    }

    let view = session.view();
    if json {
        serde_json::to_writer_pretty(&mut *out, &view)?;
        writeln!(out)?;
        return Ok(());
    }

    if !quiet && let Some(summary) = output::describe_criteria(&view.filters.criteria) {
        writeln!(out, "Filters: {summary}")?;
    }
    writeln!(out, "{}", output::render_view(&view, quiet))?;
    Ok(())
}
