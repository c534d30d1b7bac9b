//! Output formatting for CLI display
//!
//! This module turns session views, facet lists and records into text for
//! the terminal. Functions return strings; commands decide where they go.

use crate::Book;
use crate::browse::{View, ViewItem};
use crate::catalog::FacetOptions;
use crate::favorites::FavoriteMap;
use crate::filters::FilterCriteria;
use colored::Colorize;

/// Format a publication year, writing negative years as BC
#[must_use]
pub fn format_year(year: i64) -> String {
    if year < 0 {
        format!("{} BC", year.unsigned_abs())
    } else {
        year.to_string()
    }
}

/// Format one record of the current page
///
/// `position` is the 1-based index on the page, usable as `#n` in the shell.
#[must_use]
pub fn book_line(item: &ViewItem<'_>, position: usize, quiet: bool) -> String {
    let book = item.book;
    if quiet {
        return book.title.clone();
    }

    let heart = if item.favorite {
        "♥".red().to_string()
    } else {
        "♡".dimmed().to_string()
    };

    format!(
        "{position:>3}. {heart} {} by {} {}",
        book.title.bold(),
        book.author,
        format!(
            "({}, {}, {}, {} pages)",
            book.language,
            book.country,
            format_year(book.year),
            book.pages
        )
        .dimmed()
    )
}

/// Footer describing where the page sits in the results
#[must_use]
pub fn page_footer(view: &View<'_>) -> String {
    if view.total_matches == 0 {
        return "No books match the current filters".to_string();
    }

    if view.past_end {
        return format!(
            "Page {} is past the last page ({}); {} book(s) match",
            view.page_number, view.total_pages, view.total_matches
        );
    }

    format!(
        "Page {} of {} ({} book(s))",
        view.page_number, view.total_pages, view.total_matches
    )
}

/// Render a full view: one line per record followed by the footer
#[must_use]
pub fn render_view(view: &View<'_>, quiet: bool) -> String {
    let mut lines: Vec<String> = view
        .items
        .iter()
        .enumerate()
        .map(|(index, item)| book_line(item, index + 1, quiet))
        .collect();

    if !quiet {
        lines.push(page_footer(view).dimmed().to_string());
    }

    lines.join("\n")
}

/// Summarize the active filters, or `None` when nothing is filtered
#[must_use]
pub fn describe_criteria(criteria: &FilterCriteria) -> Option<String> {
    if criteria.is_unfiltered() {
        return None;
    }

    let mut parts = Vec::new();
    if !criteria.search_query.is_empty() {
        parts.push(format!("search \"{}\"", criteria.search_query));
    }
    if !criteria.languages.is_empty() {
        let languages: Vec<&str> = criteria.languages.iter().map(String::as_str).collect();
        parts.push(format!("language {}", languages.join(" or ")));
    }
    if let Some(country) = &criteria.country {
        parts.push(format!("country {country}"));
    }
    if let Some(range) = criteria.page_range {
        parts.push(range.display_label().to_string());
    }
    if let Some(century) = criteria.century {
        parts.push(century.display_label().to_string());
    }

    Some(parts.join(", "))
}

/// Render every filter's option list
#[must_use]
pub fn render_facets(facets: &FacetOptions, quiet: bool) -> String {
    let page_ranges: Vec<&str> = facets.page_ranges.iter().map(|r| r.label()).collect();
    let centuries: Vec<&str> = facets.centuries.iter().map(|c| c.label()).collect();

    let sections = [
        ("Languages", facets.languages.join(", ")),
        ("Countries", facets.countries.join(", ")),
        ("Pages", page_ranges.join(", ")),
        ("Centuries", centuries.join(", ")),
    ];

    sections
        .iter()
        .map(|(name, values)| {
            if quiet {
                values.clone()
            } else {
                format!("{}: {values}", name.bold())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Render the favorite list
#[must_use]
pub fn render_favorites(favorites: &FavoriteMap, quiet: bool) -> String {
    if favorites.is_empty() {
        return if quiet {
            String::new()
        } else {
            "No favorites yet".to_string()
        };
    }

    favorites
        .iter()
        .map(|title| {
            if quiet {
                title.to_string()
            } else {
                format!("  {} {title}", "♥".red())
            }
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// Detailed multi-line description of one record
#[must_use]
pub fn book_details(book: &Book) -> String {
    format!(
        "{}\n  Author:   {}\n  Language: {}\n  Country:  {}\n  Year:     {}\n  Pages:    {}\n  Link:     {}",
        book.title.bold(),
        book.author,
        book.language,
        book.country,
        format_year(book.year),
        book.pages,
        book.link.trim()
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::browse::{BrowseSession, Event};
    use crate::testing::{book, numbered_catalog, sample_catalog};

    #[test]
    fn test_format_year() {
        assert_eq!(format_year(1945), "1945");
        assert_eq!(format_year(-735), "735 BC");
        assert_eq!(format_year(0), "0");
    }

    #[test]
    fn test_book_line_quiet_is_title_only() {
        let record = book("Emma", "Jane Austen", "English", "UK", 1815, 492);
        let item = ViewItem {
            book: &record,
            favorite: true,
        };
        assert_eq!(book_line(&item, 1, true), "Emma");
    }

    #[test]
    fn test_book_line_shows_details() {
        let record = book("The Iliad", "Homer", "Greek", "Greece", -735, 608);
        let item = ViewItem {
            book: &record,
            favorite: false,
        };
        let line = book_line(&item, 2, false);
        assert!(line.contains("2."));
        assert!(line.contains("The Iliad"));
        assert!(line.contains("Homer"));
        assert!(line.contains("735 BC"));
        assert!(line.contains("608 pages"));
    }

    #[test]
    fn test_footer_variants() {
        let mut session = BrowseSession::new(numbered_catalog(45));
        assert_eq!(page_footer(&session.view()), "Page 1 of 3 (45 book(s))");

        session.dispatch(Event::SetCurrentPage(9));
        assert!(page_footer(&session.view()).contains("past the last page (3)"));

        session.dispatch(Event::SetSearchQuery("zzz".into()));
        assert_eq!(
            page_footer(&session.view()),
            "No books match the current filters"
        );
    }

    #[test]
    fn test_render_view_quiet_lists_titles() {
        let mut session = BrowseSession::new(sample_catalog());
        session.dispatch(Event::SetCountryFilter(Some("France".into())));
        assert_eq!(
            render_view(&session.view(), true),
            "Madame Bovary\nCandide\nEssays"
        );
    }

    #[test]
    fn test_describe_criteria() {
        assert_eq!(describe_criteria(&FilterCriteria::default()), None);

        let criteria = FilterCriteria::builder()
            .search_query("war")
            .languages(["French", "English"])
            .century(crate::filters::Century::Nineteenth)
            .build();
        assert_eq!(
            describe_criteria(&criteria).unwrap(),
            "search \"war\", language English or French, 19th century"
        );
    }

    #[test]
    fn test_render_facets_quiet() {
        let session = BrowseSession::new(numbered_catalog(3));
        let text = render_facets(session.facets(), true);
        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines[0], "English");
        assert_eq!(lines[1], "Nowhere");
        assert_eq!(lines[2], "1-100, 101-200, 201-300, 301+");
        assert_eq!(lines[3], "16th, 17th, 18th, 19th, 20th, 21st");
    }

    #[test]
    fn test_render_favorites() {
        assert_eq!(render_favorites(&FavoriteMap::new(), true), "");
        let favorites = FavoriteMap::new().toggle("Faust").toggle("Candide");
        assert_eq!(render_favorites(&favorites, true), "Candide\nFaust");
    }
}
