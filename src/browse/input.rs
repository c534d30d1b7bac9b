//! Shell line parser
//!
//! Turns one line of `bookr shell` input into a [`ShellCommand`]. Most
//! commands map directly onto a session [`Event`]; the rest are navigation
//! shortcuts or display requests handled by the shell loop.
//!
//! | Input | Command |
//! |---|---|
//! | `search <text>` / `search` | set / clear the search query |
//! | `lang <a, b>` / `lang` | set / clear the language set |
//! | `country <name>` / `country` | set / clear the country |
//! | `pages <1-100\|101-200\|201-300\|301+>` / `pages` | set / clear the page range |
//! | `century <16th..21st>` / `century` | set / clear the century |
//! | `page <n>`, `next`, `prev` | move between pages |
//! | `fav <title\|#n>` | toggle a favorite |
//! | `open <title\|#n>` | open a record's link |
//! | `show`, `facets`, `favs`, `help`, `quit` | display and control |

use super::BrowseError;
use super::session::Event;
use crate::filters::{Century, PageRange};
use std::collections::BTreeSet;
use std::str::FromStr;

/// A record reference typed by the user
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Target {
    /// Exact title (identity)
    Title(String),
    /// 1-based position on the current page, written `#n`
    Item(usize),
}

/// One parsed shell line
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellCommand {
    /// Apply a session event
    Event(Event),
    /// Go to the following page
    Next,
    /// Go to the preceding page (stops at 1)
    Prev,
    /// Toggle the favorite flag of a record
    Favorite(Target),
    /// Open a record's link in the browser
    Open(Target),
    /// Render the current page
    Show,
    /// List filter options
    Facets,
    /// List favorites
    Favorites,
    Help,
    Quit,
}

/// Parse one input line
///
/// Blank lines and lines starting with `#` yield `Ok(None)`.
///
/// # Errors
///
/// Returns `BrowseError` if the command is unknown, a required argument is
/// missing, or an argument does not parse.
pub fn parse_line(line: &str) -> Result<Option<ShellCommand>, BrowseError> {
    let line = line.trim();
    if line.is_empty() || line.starts_with('#') {
        return Ok(None);
    }

    let (command, rest) = match line.split_once(char::is_whitespace) {
        Some((command, rest)) => (command, rest.trim()),
        None => (line, ""),
    };
    let argument = (!rest.is_empty()).then_some(rest);

    let parsed = match command.to_lowercase().as_str() {
        "search" | "s" => ShellCommand::Event(Event::SetSearchQuery(rest.to_string())),
        "lang" | "language" | "l" => ShellCommand::Event(Event::SetLanguageFilter(
            parse_language_list(rest),
        )),
        "country" | "c" => {
            ShellCommand::Event(Event::SetCountryFilter(argument.map(str::to_string)))
        }
        "pages" => ShellCommand::Event(Event::SetPageRangeFilter(parse_optional::<PageRange>(
            command, argument,
        )?)),
        "century" => ShellCommand::Event(Event::SetCenturyFilter(parse_optional::<Century>(
            command, argument,
        )?)),
        "page" | "p" => {
            let value = argument.ok_or_else(|| BrowseError::MissingArgument(command.into()))?;
            ShellCommand::Event(Event::SetCurrentPage(parse_page_number(command, value)?))
        }
        "next" | "n" => ShellCommand::Next,
        "prev" | "previous" => ShellCommand::Prev,
        "fav" | "f" => ShellCommand::Favorite(parse_target(command, argument)?),
        "open" | "o" => ShellCommand::Open(parse_target(command, argument)?),
        "show" | "ls" | "list" => ShellCommand::Show,
        "facets" => ShellCommand::Facets,
        "favs" | "favorites" => ShellCommand::Favorites,
        "help" | "?" => ShellCommand::Help,
        "quit" | "exit" | "q" => ShellCommand::Quit,
        _ => return Err(BrowseError::InvalidCommand(command.to_string())),
    };

    Ok(Some(parsed))
}

/// Split a comma-separated language list, dropping empty entries
fn parse_language_list(rest: &str) -> BTreeSet<String> {
    rest.split(',')
        .map(str::trim)
        .filter(|language| !language.is_empty())
        .map(str::to_string)
        .collect()
}

/// Parse a bucket label; no argument or `none` clears the filter
fn parse_optional<T>(command: &str, argument: Option<&str>) -> Result<Option<T>, BrowseError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match argument {
        None => Ok(None),
        Some(value) if value.eq_ignore_ascii_case("none") => Ok(None),
        Some(value) => value
            .parse::<T>()
            .map(Some)
            .map_err(|e| BrowseError::InvalidValue {
                command: command.to_string(),
                reason: e.to_string(),
            }),
    }
}

fn parse_page_number(command: &str, value: &str) -> Result<usize, BrowseError> {
    match value.parse::<usize>() {
        Ok(page) if page >= 1 => Ok(page),
        _ => Err(BrowseError::InvalidValue {
            command: command.to_string(),
            reason: format!("'{value}' is not a page number (1 or greater)"),
        }),
    }
}

fn parse_target(command: &str, argument: Option<&str>) -> Result<Target, BrowseError> {
    let value = argument.ok_or_else(|| BrowseError::MissingArgument(command.to_string()))?;
    match value.strip_prefix('#') {
        Some(position) => position
            .parse::<usize>()
            .ok()
            .filter(|&n| n >= 1)
            .map(Target::Item)
            .ok_or_else(|| BrowseError::InvalidValue {
                command: command.to_string(),
                reason: format!("'{value}' is not an item number"),
            }),
        None => Ok(Target::Title(value.to_string())),
    }
}
