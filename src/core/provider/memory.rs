//! In-memory parameter store.
//!
//! Backed by a map, optionally loaded from a TOML fixture:
//!
//! ```toml
//! [parameters]
//! "/app/prod/db/host" = "db.internal"
//! "/app/prod/db/port" = "5432"
//! ```
//!
//! Every fetch is recorded so callers can inspect what was asked for.

use serde::Deserialize;
use std::cell::RefCell;
use std::collections::BTreeMap;
use std::path::Path;
use tracing::trace;

use super::{sub_path, ParameterStore};
use crate::error::{FetchError, Result};

/// A recorded fetch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Fetch {
    Value { name: String, decrypt: bool },
    Path { path: String, decrypt: bool },
}

#[derive(Deserialize)]
struct Fixture {
    #[serde(default)]
    parameters: BTreeMap<String, String>,
}

/// Map-backed parameter store.
#[derive(Debug, Default)]
pub struct MemoryStore {
    parameters: BTreeMap<String, String>,
    fetches: RefCell<Vec<Fetch>>,
}

impl MemoryStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store from (name, value) pairs.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        Self {
            parameters: pairs
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
            fetches: RefCell::new(Vec::new()),
        }
    }

    /// Parse a TOML fixture.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Fixture` if the TOML is malformed.
    pub fn from_toml(contents: &str) -> Result<Self> {
        let fixture: Fixture =
            toml::from_str(contents).map_err(|e| FetchError::Fixture(e.to_string()))?;
        Ok(Self::from_pairs(fixture.parameters))
    }

    /// Load a TOML fixture file.
    ///
    /// # Errors
    ///
    /// Returns `FetchError::Fixture` if the file can't be read or parsed.
    pub fn load(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)
            .map_err(|e| FetchError::Fixture(format!("{}: {}", path.display(), e)))?;
        Self::from_toml(&contents)
    }

    /// Fetches made so far, oldest first.
    pub fn fetches(&self) -> Vec<Fetch> {
        self.fetches.borrow().clone()
    }

    fn record(&self, fetch: Fetch) {
        self.fetches.borrow_mut().push(fetch);
    }
}

impl ParameterStore for MemoryStore {
    fn get_value(&self, name: &str, decrypt: bool) -> Result<String> {
        trace!(name, decrypt, "memory get_value");
        self.record(Fetch::Value {
            name: name.to_string(),
            decrypt,
        });
        self.parameters
            .get(name)
            .cloned()
            .ok_or_else(|| FetchError::NotFound(name.to_string()).into())
    }

    fn get_values_by_path(&self, path: &str, decrypt: bool) -> Result<BTreeMap<String, String>> {
        trace!(path, decrypt, "memory get_values_by_path");
        self.record(Fetch::Path {
            path: path.to_string(),
            decrypt,
        });

        Ok(self
            .parameters
            .iter()
            .filter_map(|(name, value)| {
                sub_path(name, path).map(|sub| (sub.to_string(), value.clone()))
            })
            .collect())
    }
}
