//! Bookr - A filterable, paginated book catalog browser
//!
//! This library provides the browsing engine behind the `bookr` CLI: an
//! immutable in-memory catalog, derived facet option lists, composable filter
//! predicates, page slicing, and per-title favorite state.

use serde::{Deserialize, Deserializer, Serialize};
use thiserror::Error;

pub mod browse;
pub mod catalog;
pub mod cli;
pub mod commands;
pub mod config;
pub mod favorites;
pub mod filters;
pub mod output;
pub mod search;

#[cfg(test)]
pub mod testing;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BookrError {
    /// Catalog could not be loaded or verified
    #[error("Catalog error: {0}")]
    CatalogError(#[from] catalog::CatalogError),
    /// Shell input could not be understood
    #[error("Browse error: {0}")]
    BrowseError(#[from] browse::BrowseError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Serializing output failed
    #[error("Serialization error: {0}")]
    SerializeError(#[from] serde_json::Error),
    /// No record with the requested title
    #[error("No book titled '{0}' in the catalog")]
    NotFound(String),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A single catalog record
///
/// Records are supplied once at startup and never mutated afterwards. Missing
/// text fields decode as empty strings and missing numbers as zero; such
/// records simply fail the corresponding filter comparisons.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq, Hash)]
pub struct Book {
    pub title: String,
    #[serde(default)]
    pub author: String,
    #[serde(default)]
    pub language: String,
    #[serde(default)]
    pub country: String,
    #[serde(default, deserialize_with = "zero_if_blank")]
    pub year: i64,
    #[serde(default, deserialize_with = "zero_if_blank")]
    pub pages: i64,
    #[serde(default, rename = "imageLink")]
    pub image_link: String,
    #[serde(default)]
    pub link: String,
}

/// Decode a number, reading `null` and empty CSV cells as zero
fn zero_if_blank<'de, D>(deserializer: D) -> Result<i64, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<i64>::deserialize(deserializer)?.unwrap_or_default())
}

impl Book {
    /// Identity used for favorites and lookups.
    ///
    /// This is the title. Titles are not guaranteed unique; see
    /// [`catalog::Catalog::duplicate_identities`].
    #[must_use]
    pub fn identity(&self) -> &str {
        &self.title
    }
}
