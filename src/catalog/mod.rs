//! The model catalog: the ordered list of simulation models the Indra API
//! server knows how to run.

mod fetch;
mod loader;

pub use fetch::{CatalogError, fetch_catalog, models_url};
pub use loader::Loader;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Opaque model identifier.
///
/// The catalog database stores numeric ids, but nothing downstream depends
/// on that, so string ids are accepted as well.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ModelId {
    /// Numeric id, as the public server emits today.
    Number(i64),
    /// String id.
    Text(String),
}

impl fmt::Display for ModelId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{n}"),
            Self::Text(s) => f.write_str(s),
        }
    }
}

/// One catalog entry.
///
/// The wire field for the id is literally `"model ID"` (with a space).
/// Responses carry extra fields (e.g. `graph`) that are ignored here, and
/// `doc` may be absent in older databases.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModelDescriptor {
    /// Unique id within one catalog response.
    #[serde(rename = "model ID")]
    pub id: ModelId,
    /// Human-readable display label.
    pub name: String,
    /// Where the model's implementation lives (e.g. `sandpile.py`).
    pub source: String,
    /// Short description shown alongside the selected row.
    #[serde(default)]
    pub doc: String,
}

/// Ordered sequence of model descriptors, exactly as received.
///
/// Order is significant: it drives display order and the positional index
/// used for the detail route. The catalog is replaced wholesale on each
/// successful fetch and never mutated in place.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Catalog {
    models: Vec<ModelDescriptor>,
}

impl Catalog {
    /// Number of models in the catalog.
    #[must_use]
    pub fn len(&self) -> usize {
        self.models.len()
    }

    /// Whether the catalog has no models.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.models.is_empty()
    }

    /// The descriptor at a zero-based position.
    #[must_use]
    pub fn get(&self, index: usize) -> Option<&ModelDescriptor> {
        self.models.get(index)
    }

    /// Iterate over descriptors in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = &ModelDescriptor> {
        self.models.iter()
    }

    /// The descriptors as a slice, in catalog order.
    #[must_use]
    pub fn as_slice(&self) -> &[ModelDescriptor] {
        &self.models
    }
}

impl From<Vec<ModelDescriptor>> for Catalog {
    fn from(models: Vec<ModelDescriptor>) -> Self {
        Self { models }
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a ModelDescriptor;
    type IntoIter = std::slice::Iter<'a, ModelDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.models.iter()
    }
}
