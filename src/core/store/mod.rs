//! Object persistence.
//!
//! Writes an updated cluster object back to wherever it lives. The cluster
//! API client is one implementation; the bundled one writes JSON files.

use crate::core::object::ConfigObject;
use crate::error::Result;

mod fs;

pub use fs::FileObjectStore;

/// Object persistence trait.
pub trait ObjectStore {
    /// Persist an updated object.
    ///
    /// # Returns
    ///
    /// The object as stored.
    ///
    /// # Errors
    ///
    /// Returns `ObjectError` if the object can't be serialized or written.
    fn update_object(&self, object: &ConfigObject) -> Result<ConfigObject>;
}
