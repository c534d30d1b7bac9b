//! Command-line interface definitions and parsing
//!
//! This module defines the complete CLI structure for bookr using the `clap`
//! crate. It provides command parsing, argument validation, and conversion
//! from filter flags into [`FilterCriteria`].
//!
//! # Commands
//!
//! - **list**: Render one page of filtered results (default)
//! - **facets**: Show the options available for each filter
//! - **shell**: Line-driven browsing session over stdin
//! - **open**: Open a book's link in the browser
//! - **check**: Report duplicate titles in the catalog
//! - **config**: Get and set configuration values
//!
//! # Examples
//!
//! ```no_run
//! use bookr::cli::{Cli, Commands};
//!
//! let cli = Cli::parse_args();
//! match cli.get_command() {
//!     Commands::List { filters, .. } => {
//!         let criteria = bookr::filters::FilterCriteria::from(&filters);
//!         println!("{criteria:?}");
//!     }
//!     _ => {}
//! }
//! ```

use crate::filters::{Century, FilterCriteria, PageRange};
use clap::{Args, Parser, Subcommand};
use std::path::PathBuf;

/// Filter flags shared by commands that show results
#[derive(Args, Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterArgs {
    /// Search titles and authors (case-insensitive substring)
    #[arg(value_name = "QUERY")]
    pub query: Option<String>,

    /// Languages to include (repeat or comma-separate: -l English,French)
    #[arg(short = 'l', long = "language", value_name = "LANG", value_delimiter = ',')]
    pub languages: Vec<String>,

    /// Country to include (exact match)
    #[arg(short = 'c', long = "country", value_name = "COUNTRY")]
    pub country: Option<String>,

    /// Page-count range
    #[arg(long = "pages", value_name = "RANGE", value_enum)]
    pub page_range: Option<PageRange>,

    /// Publication century
    #[arg(long = "century", value_name = "CENTURY", value_enum)]
    pub century: Option<Century>,
}

impl From<&FilterArgs> for FilterCriteria {
    fn from(args: &FilterArgs) -> Self {
        Self::new()
            .with_search_query(args.query.clone().unwrap_or_default())
            .with_languages(
                args.languages
                    .iter()
                    .map(|l| l.trim())
                    .filter(|l| !l.is_empty())
                    .map(str::to_string)
                    .collect(),
            )
            .with_country(args.country.clone())
            .with_page_range(args.page_range)
            .with_century(args.century)
    }
}

/// Main CLI structure for parsing command-line arguments
#[derive(Parser, Debug)]
#[command(name = "bookr")]
#[command(about = "Browse a book catalog with search, filters and favorites", long_about = None)]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Suppress informational output (only print results)
    #[arg(short = 'q', long = "quiet", global = true)]
    pub quiet: bool,

    /// Catalog file to browse, .json or .csv (overrides config)
    #[arg(long = "catalog", value_name = "FILE", global = true)]
    pub catalog: Option<PathBuf>,
}

/// Available CLI commands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Show one page of matching books (default)
    #[command(visible_alias = "ls")]
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Page to show (1-based)
        #[arg(
            short = 'p',
            long = "page",
            value_name = "N",
            default_value_t = 1,
            value_parser = clap::value_parser!(u64).range(1..)
        )]
        page: u64,

        /// Mark a title as favorite for this listing (repeatable)
        #[arg(short = 'f', long = "favorite", value_name = "TITLE")]
        favorites: Vec<String>,

        /// Print the view as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Show the options available for each filter
    Facets {
        /// Print the options as JSON
        #[arg(long = "json")]
        json: bool,
    },

    /// Browse interactively, one command per line
    #[command(visible_alias = "sh")]
    Shell,

    /// Open a book's link in the default browser
    Open {
        /// Exact title of the book
        title: String,
    },

    /// Check the catalog for duplicate titles
    Check,

    /// Manage configuration settings
    Config {
        #[command(subcommand)]
        command: ConfigCommands,
    },
}

/// Configuration management subcommands
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum ConfigCommands {
    /// Set a configuration value
    Set {
        /// Configuration key=value (e.g., quiet=true)
        #[arg(value_name = "KEY=VALUE")]
        setting: String,
    },

    /// Get a configuration value
    Get {
        /// Configuration key to retrieve (e.g., catalog)
        #[arg(value_name = "KEY")]
        key: String,
    },

    /// Print the configuration file path
    Path,
}

impl Cli {
    /// Parse command-line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }

    /// Get the command, defaulting to List if none specified
    #[must_use]
    pub fn get_command(&self) -> Commands {
        self.command.clone().unwrap_or(Commands::List {
            filters: FilterArgs::default(),
            page: 1,
            favorites: Vec::new(),
            json: false,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("bookr").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_default_command_is_list() {
        let cli = parse(&[]);
        assert!(matches!(
            cli.get_command(),
            Commands::List { page: 1, json: false, .. }
        ));
    }

    #[test]
    fn test_list_filters() {
        let cli = parse(&[
            "list",
            "anim",
            "-l",
            "English,French",
            "-l",
            "German",
            "-c",
            "UK",
            "--pages",
            "101-200",
            "--century",
            "20th",
            "-p",
            "2",
        ]);

        let Commands::List { filters, page, .. } = cli.get_command() else {
            panic!("expected list command");
        };
        let criteria = FilterCriteria::from(&filters);
        assert_eq!(page, 2);
        assert_eq!(criteria.search_query, "anim");
        assert_eq!(criteria.languages.len(), 3);
        assert_eq!(criteria.country.as_deref(), Some("UK"));
        assert_eq!(criteria.page_range, Some(PageRange::From101To200));
        assert_eq!(criteria.century, Some(Century::Twentieth));
    }

    #[test]
    fn test_page_zero_rejected() {
        let result = Cli::try_parse_from(["bookr", "list", "-p", "0"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_unknown_bucket_rejected() {
        assert!(Cli::try_parse_from(["bookr", "list", "--century", "15th"]).is_err());
        assert!(Cli::try_parse_from(["bookr", "list", "--pages", "1-50"]).is_err());
    }

    #[test]
    fn test_global_flags_after_subcommand() {
        let cli = parse(&["facets", "--catalog", "books.csv", "-q"]);
        assert!(cli.quiet);
        assert_eq!(cli.catalog, Some(PathBuf::from("books.csv")));
    }

    #[test]
    fn test_empty_filter_args_are_unfiltered() {
        assert!(FilterCriteria::from(&FilterArgs::default()).is_unfiltered());
    }
}
