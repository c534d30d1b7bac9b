//! Bookr CLI application entry point
//!
//! This is the main executable for the bookr catalog browser. It loads a book
//! catalog from JSON or CSV and lets you search, filter, page through and
//! favorite records from the command line.
//!
//! # Usage
//!
//! ```bash
//! # Show the first page of the configured catalog (default command)
//! bookr
//! bookr --catalog books.json list
//!
//! # Search and filter
//! bookr list orwell -l English --century 20th
//! bookr list --pages 301+ -p 2
//!
//! # Browse interactively, one command per line
//! bookr shell
//!
//! # Open a book's link
//! bookr open "Things Fall Apart"
//!
//! # Quiet mode (only output results)
//! bookr -q list -c France
//! ```
//!
//! # Configuration
//!
//! Configuration is stored in the user's config directory
//! (`~/.config/bookr/config.toml` on Linux). Set `RUST_LOG=debug` to see
//! filter and dispatch logs on stderr.

use bookr::{
    BookrError,
    browse::BrowseSession,
    catalog::IdentityPolicy,
    cli::{Cli, Commands},
    commands,
    config::BookrConfig,
    filters::{FilterCriteria, FilterState},
};
use std::io;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

type Result<T> = std::result::Result<T, BookrError>;

fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::fmt::layer()
                .with_target(false)
                .with_writer(io::stderr),
        )
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let config = BookrConfig::load()?;

    let cli = Cli::parse_args();

    let quiet = cli.quiet || config.quiet;

    let command = cli.get_command();

    let stdout = io::stdout();
    let mut out = stdout.lock();

    if let Commands::Config { command } = &command {
        let path = BookrConfig::config_path()?;
        return commands::config(config, command, &path, quiet, &mut out);
    }

    let catalog_path = cli.catalog.as_deref();

    match &command {
        Commands::List {
            filters,
            page,
            favorites,
            json,
        } => {
            let catalog = commands::load_catalog(catalog_path, &config)?;
            let page = usize::try_from(*page)
                .map_err(|_| BookrError::InvalidInput(format!("Page {page} is too large")))?;
            commands::list(
                catalog,
                FilterCriteria::from(filters),
                page,
                favorites,
                *json,
                quiet,
                &mut out,
            )?;
        }
        Commands::Facets { json } => {
            let catalog = commands::load_catalog(catalog_path, &config)?;
            commands::facets(&catalog, *json, quiet, &mut out)?;
        }
        Commands::Shell => {
            let catalog = commands::load_catalog(catalog_path, &config)?;
            let mut session = BrowseSession::builder()
                .catalog(catalog)
                .filters(FilterState::new())
                .cache_capacity(config.cache_capacity)
                .build()?;
            commands::shell(&mut session, io::stdin().lock(), &mut out, quiet)?;
        }
        Commands::Open { title } => {
            let catalog = commands::load_catalog(catalog_path, &config)?;
            commands::open(&catalog, title, quiet, &mut out)?;
        }
        Commands::Check => {
            let catalog =
                commands::load_catalog_with(catalog_path, &config, IdentityPolicy::Warn)?;
            commands::check(&catalog, quiet, &mut out)?;
        }
        Commands::Config { .. } => unreachable!(),
    }

    Ok(())
}
