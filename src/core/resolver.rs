//! Parameter type dispatch.
//!
//! Picks the store call for a declared type:
//!
//! - `String`, `SecureString`: one value by exact name
//! - `StringList`: one value by exact name, decomposed later
//! - `Directory`: everything under the name as a path prefix
//! - anything else: no fetch

use std::collections::BTreeMap;
use tracing::debug;

use crate::core::provider::ParameterStore;
use crate::core::types::ParamType;
use crate::error::Result;

/// What the store returned for a parameter.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Resolution {
    /// A scalar value (String, SecureString).
    Scalar(String),
    /// A raw comma-delimited list value (StringList).
    List(String),
    /// Sub-path to value (Directory).
    Directory(BTreeMap<String, String>),
    /// Unrecognised type, nothing was fetched.
    Unfetched,
}

/// Fetch a parameter according to its declared type.
///
/// # Errors
///
/// Propagates the store's `FetchError` unchanged.
pub fn resolve(
    store: &dyn ParameterStore,
    name: &str,
    param_type: &ParamType,
    decrypt: bool,
) -> Result<Resolution> {
    debug!(name, param_type = %param_type, decrypt, "resolving parameter");

    let resolution = match param_type {
        ParamType::String | ParamType::SecureString => {
            Resolution::Scalar(store.get_value(name, decrypt)?)
        }
        ParamType::StringList => Resolution::List(store.get_value(name, decrypt)?),
        ParamType::Directory => Resolution::Directory(store.get_values_by_path(name, decrypt)?),
        ParamType::Unknown(_) => Resolution::Unfetched,
    };

    Ok(resolution)
}
