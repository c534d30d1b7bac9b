//! Favorite tracking
//!
//! A sparse map from record identity to a favorite flag. Absent identities
//! are not favorites. Toggling returns a new map and leaves the original
//! untouched; favorites are independent of filtering and pagination and live
//! only as long as the session.

use serde::Serialize;
use std::collections::BTreeSet;

/// Per-identity favorite state
///
/// Only favorited identities are stored, so toggling twice yields a map equal
/// to the original.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct FavoriteMap {
    marked: BTreeSet<String>,
}

impl FavoriteMap {
    /// Create an empty map
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Return a copy with `identity`'s flag flipped
    ///
    /// The identity need not exist in the catalog.
    #[must_use]
    pub fn toggle(&self, identity: &str) -> Self {
        let mut marked = self.marked.clone();
        if !marked.remove(identity) {
            marked.insert(identity.to_string());
        }
        Self { marked }
    }

    /// Check whether `identity` is a favorite
    #[must_use]
    pub fn is_favorite(&self, identity: &str) -> bool {
        self.marked.contains(identity)
    }

    /// Favorited identities in sorted order
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.marked.iter().map(String::as_str)
    }

    /// Number of favorites
    #[must_use]
    pub fn len(&self) -> usize {
        self.marked.len()
    }

    /// True when nothing is favorited
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.marked.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for FavoriteMap {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self {
            marked: iter.into_iter().map(Into::into).collect(),
        }
    }
}
