//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the loaded catalog.

pub mod check;
pub mod config;
pub mod facets;
pub mod list;
pub mod open;
pub mod shell;

// Re-export execute functions for convenience
pub use self::check::execute as check;
pub use self::config::execute as config;
pub use self::facets::execute as facets;
pub use self::list::execute as list;
pub use self::open::execute as open;
pub use self::shell::execute as shell;

use crate::{
    BookrError,
    catalog::{Catalog, IdentityPolicy},
    config::BookrConfig,
};
use std::path::Path;

/// Load the catalog named on the command line, falling back to the configured one
///
/// Duplicate titles are handled according to the configured identity policy.
///
/// # Errors
/// Returns `BookrError::InvalidInput` if no catalog is given anywhere, or the
/// catalog error if the file cannot be loaded.
pub fn load_catalog(cli_path: Option<&Path>, config: &BookrConfig) -> Result<Catalog, BookrError> {
    load_catalog_with(cli_path, config, config.identity_policy())
}

/// Like [`load_catalog`], with an explicit duplicate-title policy
///
/// # Errors
/// See [`load_catalog`].
pub fn load_catalog_with(
    cli_path: Option<&Path>,
    config: &BookrConfig,
    policy: IdentityPolicy,
) -> Result<Catalog, BookrError> {
    let path = cli_path.or(config.catalog.as_deref()).ok_or_else(|| {
        BookrError::InvalidInput(
            "No catalog given. Pass --catalog <FILE> or run 'bookr config set catalog=<FILE>'."
                .into(),
        )
    })?;

    Ok(Catalog::load_with(path, policy)?)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use std::path::PathBuf;

    #[test]
    fn test_missing_catalog_is_invalid_input() {
        let result = load_catalog(None, &BookrConfig::default());
        assert!(matches!(result, Err(BookrError::InvalidInput(_))));
    }

    #[test]
    fn test_cli_path_overrides_config() {
        let mut file = tempfile::Builder::new().suffix(".json").tempfile().unwrap();
        write!(file, r#"[{{"title": "Emma", "language": "English"}}]"#).unwrap();

        let config = BookrConfig {
            catalog: Some(PathBuf::from("/does/not/exist.json")),
            ..BookrConfig::default()
        };
        let catalog = load_catalog(Some(file.path()), &config).unwrap();
        assert_eq!(catalog.len(), 1);

        assert!(load_catalog(None, &config).is_err());
    }
}
