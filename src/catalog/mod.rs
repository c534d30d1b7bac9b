//! Catalog store
//!
//! Holds the immutable collection of records supplied once at startup. A
//! `Catalog` is backed by an `Arc<[Book]>`: cloning it is cheap and no
//! operation can mutate the records after load.
//!
//! # Loading
//!
//! Catalogs are read from `.json` (an array of records) or `.csv` (one record
//! per row, header `title,author,language,country,year,pages,imageLink,link`).
//!
//! # Identity
//!
//! A record's identity is its title. Titles are not guaranteed unique; by
//! default duplicates are loaded and reported with a warning, and under
//! [`IdentityPolicy::Strict`] they are rejected.

pub mod error;
pub mod facets;

pub use error::CatalogError;
pub use facets::{Facet, FacetOptions, distinct_values};

use crate::Book;
use std::collections::HashMap;
use std::fs;
use std::io::Read;
use std::path::Path;
use std::sync::Arc;

/// How to treat records that share a title
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdentityPolicy {
    /// Load anyway and log a warning; duplicates share favorite state
    #[default]
    Warn,
    /// Refuse to load a catalog with duplicate titles
    Strict,
}

/// Immutable, shareable collection of records
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    books: Arc<[Book]>,
}

impl Catalog {
    /// Wrap a collection of records
    #[must_use]
    pub fn new(books: Vec<Book>) -> Self {
        Self {
            books: books.into(),
        }
    }

    /// Decode a catalog from a JSON array of records
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Json` if the input is not an array of records.
    pub fn from_json_str(json: &str) -> Result<Self, CatalogError> {
        let books: Vec<Book> = serde_json::from_str(json)?;
        Ok(Self::new(books))
    }

    /// Decode a catalog from CSV with a header row
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::Csv` if a row cannot be decoded.
    pub fn from_csv_reader(reader: impl Read) -> Result<Self, CatalogError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let books = csv_reader
            .deserialize()
            .collect::<Result<Vec<Book>, _>>()?;
        Ok(Self::new(books))
    }

    /// Load a catalog file, warning about duplicate titles
    ///
    /// # Errors
    ///
    /// See [`Catalog::load_with`].
    pub fn load(path: impl AsRef<Path>) -> Result<Self, CatalogError> {
        Self::load_with(path, IdentityPolicy::Warn)
    }

    /// Load a catalog file, choosing the format from its extension
    ///
    /// # Errors
    ///
    /// Returns `CatalogError` if:
    /// - The file cannot be read
    /// - The extension is neither `json` nor `csv`
    /// - The contents cannot be decoded
    /// - `policy` is `Strict` and two records share a title
    pub fn load_with(path: impl AsRef<Path>, policy: IdentityPolicy) -> Result<Self, CatalogError> {
        let path = path.as_ref();
        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(str::to_ascii_lowercase);

        let read = |path: &Path| {
            fs::read_to_string(path).map_err(|source| CatalogError::Io {
                path: path.to_path_buf(),
                source,
            })
        };

        let catalog = match extension.as_deref() {
            Some("json") => Self::from_json_str(&read(path)?)?,
            Some("csv") => Self::from_csv_reader(read(path)?.as_bytes())?,
            _ => return Err(CatalogError::UnsupportedFormat(path.to_path_buf())),
        };

        tracing::info!(path = %path.display(), books = catalog.len(), "loaded catalog");
        catalog.verify_identities(policy)?;
        Ok(catalog)
    }

    /// Check title uniqueness according to `policy`
    ///
    /// # Errors
    ///
    /// Returns `CatalogError::DuplicateIdentity` under `IdentityPolicy::Strict`
    /// when any title occurs more than once.
    pub fn verify_identities(&self, policy: IdentityPolicy) -> Result<(), CatalogError> {
        let duplicates = self.duplicate_identities();
        if duplicates.is_empty() {
            return Ok(());
        }

        match policy {
            IdentityPolicy::Warn => {
                tracing::warn!(
                    count = duplicates.len(),
                    titles = %duplicates.join(", "),
                    "catalog contains duplicate titles; their favorite state is shared"
                );
                Ok(())
            }
            IdentityPolicy::Strict => Err(CatalogError::DuplicateIdentity(duplicates)),
        }
    }

    /// Titles that occur more than once, in first-occurrence order
    #[must_use]
    pub fn duplicate_identities(&self) -> Vec<String> {
        let mut counts: HashMap<&str, usize> = HashMap::new();
        let mut order = Vec::new();
        for book in self.books.iter() {
            let count = counts.entry(book.identity()).or_insert(0);
            if *count == 0 {
                order.push(book.identity());
            }
            *count += 1;
        }

        order
            .into_iter()
            .filter(|identity| counts.get(identity).is_some_and(|&n| n > 1))
            .map(str::to_string)
            .collect()
    }

    /// First record with the given identity
    #[must_use]
    pub fn find(&self, identity: &str) -> Option<&Book> {
        self.books.iter().find(|book| book.identity() == identity)
    }

    /// All records in catalog order
    #[must_use]
    pub fn books(&self) -> &[Book] {
        &self.books
    }

    /// Number of records
    #[must_use]
    pub fn len(&self) -> usize {
        self.books.len()
    }

    /// True when the catalog holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.books.is_empty()
    }

    /// Iterate over records in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Book> {
        self.books.iter()
    }
}

impl From<Vec<Book>> for Catalog {
    fn from(books: Vec<Book>) -> Self {
        Self::new(books)
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Book;
    type IntoIter = std::slice::Iter<'a, Book>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
