//! Parameter store backends.
//!
//! ## Adding a New Backend
//!
//! 1. Implement the `ParameterStore` trait
//! 2. Add the implementation in a new file (e.g., `vault.rs`)
//! 3. Re-export from this module
//!
//! Retries, credentials and caching belong to the backend. Every
//! resolution fetches again.

use std::collections::BTreeMap;

use crate::error::Result;

mod memory;

#[cfg(feature = "aws")]
pub mod aws;

pub use memory::{Fetch, MemoryStore};

#[cfg(feature = "aws")]
pub use aws::AwsStore;

/// Remote parameter store.
pub trait ParameterStore {
    /// Fetch a single parameter value by exact name.
    ///
    /// # Arguments
    ///
    /// * `name` - Full parameter name
    /// * `decrypt` - Ask the store to decrypt SecureString values
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the parameter is missing or the request fails.
    fn get_value(&self, name: &str, decrypt: bool) -> Result<String>;

    /// Fetch every parameter below a path prefix, recursively.
    ///
    /// # Returns
    ///
    /// Map of sub-path (the parameter name with `path` stripped) to value.
    ///
    /// # Errors
    ///
    /// Returns `FetchError` if the request fails.
    fn get_values_by_path(&self, path: &str, decrypt: bool) -> Result<BTreeMap<String, String>>;
}

/// The part of `name` below `path`, or `None` if `name` is not under it.
///
/// `path` is stripped exactly as given, so `/app` leaves a leading slash on
/// the sub-path and `/app/` does not. A name equal to the path, or one that
/// merely shares a string prefix (`/application` under `/app`), is not under it.
pub fn sub_path<'a>(name: &'a str, path: &str) -> Option<&'a str> {
    let rest = name.strip_prefix(path)?;
    if rest.is_empty() {
        return None;
    }
    if path.ends_with('/') || rest.starts_with('/') {
        Some(rest)
    } else {
        None
    }
}
