//! Extension catalogue.
//!
//! Holds the fixed set of extension records served by the REST API and
//! implements keyword search over them. The catalogue is built once at
//! startup and never mutated; clones share the same record storage.

mod builtin;

use std::collections::HashSet;
use std::sync::Arc;

use serde::ser::{Serialize, SerializeStruct, Serializer};
use thiserror::Error;

/// Catalogue construction errors.
#[derive(Debug, Error)]
pub enum CatalogueError {
    /// Two records share the same id.
    #[error("Duplicate extension id: {0}")]
    DuplicateId(String),
}

/// A single installable extension.
#[derive(Debug, Clone, PartialEq)]
pub struct ExtensionRecord {
    /// Namespace-qualified id, e.g. `salome.geometry`.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Version string (not parsed).
    pub version: String,
    pub author: String,
    pub description: String,
    /// Lowercase search tags.
    pub tags: Vec<String>,
    /// Rating in the 0.0..=5.0 range by convention.
    pub rating: f64,
    /// Install counter. Static for the lifetime of the process.
    pub installs: u64,
}

impl ExtensionRecord {
    /// Creates a new record.
    #[must_use]
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        id: impl Into<String>,
        name: impl Into<String>,
        version: impl Into<String>,
        author: impl Into<String>,
        description: impl Into<String>,
        tags: &[&str],
        rating: f64,
        installs: u64,
    ) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            version: version.into(),
            author: author.into(),
            description: description.into(),
            tags: tags.iter().map(|t| (*t).to_string()).collect(),
            rating,
            installs,
        }
    }

    /// Returns true if `keyword` occurs in the name, description, author
    /// or any tag, ignoring case.
    ///
    /// `keyword` must already be normalized with [`normalize_keyword`].
    #[must_use]
    pub fn matches(&self, keyword: &str) -> bool {
        self.name.to_lowercase().contains(keyword)
            || self.description.to_lowercase().contains(keyword)
            || self.author.to_lowercase().contains(keyword)
            || self
                .tags
                .iter()
                .any(|tag| tag.to_lowercase().contains(keyword))
    }
}

// Written out by hand so the wire shape is exactly these eight fields.
impl Serialize for ExtensionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut s = serializer.serialize_struct("ExtensionRecord", 8)?;
        s.serialize_field("id", &self.id)?;
        s.serialize_field("name", &self.name)?;
        s.serialize_field("version", &self.version)?;
        s.serialize_field("author", &self.author)?;
        s.serialize_field("description", &self.description)?;
        s.serialize_field("tags", &self.tags)?;
        s.serialize_field("rating", &self.rating)?;
        s.serialize_field("installs", &self.installs)?;
        s.end()
    }
}

/// Trims and lowercases a raw search keyword.
#[must_use]
pub fn normalize_keyword(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Immutable, ordered collection of extension records.
#[derive(Debug, Clone)]
pub struct Catalogue {
    records: Arc<[ExtensionRecord]>,
}

impl Catalogue {
    /// Builds a catalogue from records, keeping their order.
    ///
    /// # Errors
    /// Returns [`CatalogueError::DuplicateId`] if two records share an id.
    pub fn new(records: Vec<ExtensionRecord>) -> Result<Self, CatalogueError> {
        {
            let mut seen = HashSet::with_capacity(records.len());
            for record in &records {
                if !seen.insert(record.id.as_str()) {
                    return Err(CatalogueError::DuplicateId(record.id.clone()));
                }
            }
        }

        Ok(Self {
            records: records.into(),
        })
    }

    /// Returns the built-in SALOME extension catalogue.
    #[must_use]
    pub fn builtin() -> Self {
        Self {
            records: builtin::records().into(),
        }
    }

    /// Returns every record in declared order.
    #[must_use]
    pub fn all(&self) -> &[ExtensionRecord] {
        &self.records
    }

    /// Returns the number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.records.len()
    }

    /// Returns true if the catalogue has no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Looks up a record by exact id.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&ExtensionRecord> {
        self.records.iter().find(|r| r.id == id)
    }

    /// Filters the catalogue by keyword.
    ///
    /// The keyword is trimmed and lowercased. An empty keyword returns the
    /// whole catalogue. Matches keep catalogue order.
    #[must_use]
    pub fn search(&self, keyword: &str) -> Vec<&ExtensionRecord> {
        let keyword = normalize_keyword(keyword);
        if keyword.is_empty() {
            return self.records.iter().collect();
        }

        self.records.iter().filter(|r| r.matches(&keyword)).collect()
    }
}

impl Default for Catalogue {
    fn default() -> Self {
        Self::builtin()
    }
}
