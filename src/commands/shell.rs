//! Shell command - line-driven browsing over stdin
//!
//! Each input line is parsed into a [`ShellCommand`]; events go through
//! [`BrowseSession::dispatch`] and the resulting view is printed. Bad input
//! is reported and the loop keeps going.

use super::open::open_book;
use crate::{
    BookrError,
    browse::{BrowseError, BrowseSession, Event, ShellCommand, Target, parse_line},
    output,
};
use colored::Colorize;
use std::io::{BufRead, Write};

type Result<T> = std::result::Result<T, BookrError>;

const PROMPT: &str = "bookr> ";

const HELP: &str = "\
Commands:
  search <text>          filter by title or author (no text clears)
  lang <a, b, ...>       filter by any of these languages (none clears)
  country <name>         filter by country (none clears)
  pages <range>          1-100, 101-200, 201-300, 301+ (none clears)
  century <c>            16th .. 21st (none clears)
  page <n> | next | prev move between pages
  fav <title|#n>         toggle a favorite
  open <title|#n>        open a book's link
  show | facets | favs   show results, filter options or favorites
  help | quit";

/// Execute the shell command
///
/// Reads until end of input or `quit`.
///
/// # Errors
/// Returns an error only if reading input or writing output fails
pub fn execute(
    session: &mut BrowseSession,
    input: impl BufRead,
    out: &mut impl Write,
    quiet: bool,
) -> Result<()> {
    if !quiet {
        writeln!(out, "{}", "Type 'help' for commands, 'quit' to leave".dimmed())?;
        print_block(out, &output::render_view(&session.view(), quiet))?;
        prompt(out)?;
    }

    for line in input.lines() {
        let line = line?;
        match parse_line(&line) {
            Ok(Some(ShellCommand::Quit)) => break,
            Ok(Some(command)) => {
                if let Err(e) = run_command(session, command, out, quiet) {
                    report(out, &e)?;
                }
            }
            Ok(None) => {}
            Err(e) => report(out, &BookrError::from(e))?,
        }

        if !quiet {
            prompt(out)?;
        }
    }

    Ok(())
}

fn run_command(
    session: &mut BrowseSession,
    command: ShellCommand,
    out: &mut impl Write,
    quiet: bool,
) -> Result<()> {
    match command {
        ShellCommand::Event(event) => session.dispatch(event),
        ShellCommand::Next => {
            let view = session.view();
            if !view.has_next {
                return Err(BookrError::InvalidInput("Already on the last page".into()));
            }
            let next = view.page_number + 1;
            session.dispatch(Event::SetCurrentPage(next));
        }
        ShellCommand::Prev => {
            let view = session.view();
            if !view.has_previous {
                return Err(BookrError::InvalidInput("Already on the first page".into()));
            }
            let previous = view.page_number - 1;
            session.dispatch(Event::SetCurrentPage(previous));
        }
        ShellCommand::Favorite(target) => {
            let identity = match target {
                Target::Title(title) => title,
                Target::Item(position) => session
                    .item_on_page(position)
                    .map(|book| book.identity().to_string())
                    .ok_or(BrowseError::NoSuchItem(position))?,
            };
            session.dispatch(Event::ToggleFavorite(identity));
        }
        ShellCommand::Open(target) => {
            let book = match &target {
                Target::Title(title) => session
                    .catalog()
                    .find(title)
                    .ok_or_else(|| BookrError::NotFound(title.clone()))?,
                Target::Item(position) => session
                    .item_on_page(*position)
                    .ok_or(BrowseError::NoSuchItem(*position))?,
            };
            return open_book(book, quiet, out);
        }
        ShellCommand::Show => {}
        ShellCommand::Facets => {
            return print_block(out, &output::render_facets(session.facets(), quiet));
        }
        ShellCommand::Favorites => {
            return print_block(out, &output::render_favorites(session.favorites(), quiet));
        }
        ShellCommand::Help => return print_block(out, HELP),
        ShellCommand::Quit => return Ok(()),
    }

    print_block(out, &output::render_view(&session.view(), quiet))
}

fn print_block(out: &mut impl Write, text: &str) -> Result<()> {
    if !text.is_empty() {
        writeln!(out, "{text}")?;
    }
    Ok(())
}

fn prompt(out: &mut impl Write) -> Result<()> {
    write!(out, "{PROMPT}")?;
    out.flush()?;
    Ok(())
}

fn report(out: &mut impl Write, error: &BookrError) -> Result<()> {
    tracing::debug!(%error, "shell command failed");
    writeln!(out, "{} {error}", "error:".red())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::{numbered_catalog, sample_catalog};

    fn run(session: &mut BrowseSession, script: &str) -> String {
        let mut out = Vec::new();
        execute(session, script.as_bytes(), &mut out, true).unwrap();
        String::from_utf8(out).unwrap()
    }

    #[test]
    fn test_events_print_the_new_view() {
        let mut session = BrowseSession::new(sample_catalog());
        let text = run(&mut session, "country France\ncentury 16th\n");

        assert_eq!(text, "Madame Bovary\nCandide\nEssays\nEssays\n");
        let country = session.filters().criteria.country.as_deref();
        assert_eq!(country, Some("France"));
    }

    #[test]
    fn test_favorite_by_position_and_listing() {
        let mut session = BrowseSession::new(sample_catalog());
        let text = run(&mut session, "search faust\nfav #1\nfavs\n");

        assert_eq!(text, "Faust\nFaust\nFaust\n");
        assert!(session.favorites().is_favorite("Faust"));
    }

    #[test]
    fn test_quit_stops_reading() {
        let mut session = BrowseSession::new(sample_catalog());
        run(&mut session, "search hamlet\nquit\nsearch candide\n");
        assert_eq!(session.filters().criteria.search_query, "hamlet");
    }

    #[test]
    fn test_errors_are_reported_and_loop_continues() {
        let mut session = BrowseSession::new(sample_catalog());
        let text = run(&mut session, "frobnicate\nfav #99\nopen Moby Dick\nsearch iliad\n");

        let lines: Vec<&str> = text.lines().collect();
        assert_eq!(lines.len(), 4);
        assert!(lines[0].contains("Unknown command 'frobnicate'"));
        assert!(lines[1].contains("No item #99"));
        assert!(lines[2].contains("Moby Dick"));
        assert_eq!(lines[3], "The Iliad");
    }

    #[test]
    fn test_next_and_prev_stay_in_range() {
        let mut session = BrowseSession::new(numbered_catalog(25));
        let text = run(&mut session, "prev\nnext\nnext\n");

        assert_eq!(session.filters().current_page, 2);
        assert!(text.lines().next().unwrap().contains("first page"));
        assert!(text.lines().last().unwrap().contains("last page"));
    }

    #[test]
    fn test_prev_from_past_the_end_steps_back() {
        let mut session = BrowseSession::new(numbered_catalog(25));
        session.dispatch(Event::SetCurrentPage(5));
        let text = run(&mut session, "next\nprev\n");

        assert_eq!(session.filters().current_page, 4);
        assert!(text.lines().next().unwrap().contains("last page"));
    }

    #[test]
    fn test_blank_and_comment_lines_print_nothing() {
        let mut session = BrowseSession::new(sample_catalog());
        assert_eq!(run(&mut session, "\n# comment\n   \n"), "");
    }
}
