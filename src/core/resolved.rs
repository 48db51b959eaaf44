//! Resolved configuration for one annotated object.
//!
//! A `ResolvedConfig` is built fresh per object: annotations are extracted,
//! the parameter is fetched by type, decomposed, and written into a data
//! mapping seeded from the object's own data. No key is ever overwritten,
//! so a key already on the object fails the resolution with `KeyCollision`.
//! The mapping then becomes the object's data and is handed to an
//! [`ObjectStore`].
//!
//! Every type except `Directory` ends with a canonical entry keyed by the
//! type name. `Directory` records `param_value = "true"` and returns after
//! its per-path writes, so it never gets a `Directory` entry of its own.

use std::collections::BTreeMap;
use tracing::debug;

use crate::core::annotations::Annotations;
use crate::core::config::Settings;
use crate::core::constants;
use crate::core::decompose::{parse_string_list, safe_key_name};
use crate::core::object::ConfigObject;
use crate::core::provider::ParameterStore;
use crate::core::resolver::{resolve, Resolution};
use crate::core::store::ObjectStore;
use crate::core::types::{DataKey, ParamType};
use crate::error::{Error, Result};

/// The result of resolving one annotated object.
#[derive(Debug, Clone)]
pub struct ResolvedConfig {
    object: ConfigObject,
    name: String,
    namespace: String,
    annotations: Annotations,
    param_value: String,
    data: BTreeMap<DataKey, String>,
}

impl ResolvedConfig {
    /// Resolve an annotated object on top of its existing data.
    ///
    /// # Errors
    ///
    /// - `Error::IrrelevantObject` if the name or type annotation is missing.
    ///   No fetch is made.
    /// - `Error::UnsupportedParamType` for unknown types in strict mode.
    /// - `Error::Fetch` from the store, unchanged.
    /// - `Error::KeyCollision` if two entries flatten to the same key, or a
    ///   key is already present on the object.
    pub fn build_from_annotated_object(
        store: &dyn ParameterStore,
        object: ConfigObject,
        settings: &Settings,
    ) -> Result<Self> {
        let data = object.data.clone();
        Self::resolve_into(store, object, settings, data)
    }

    /// Resolve an annotated object on top of an existing data mapping.
    ///
    /// Existing keys are never replaced, so re-running against a mapping that
    /// already holds the type-marker key fails with `KeyCollision`.
    pub fn resolve_into(
        store: &dyn ParameterStore,
        object: ConfigObject,
        settings: &Settings,
        data: BTreeMap<DataKey, String>,
    ) -> Result<Self> {
        let annotations = Annotations::extract(
            &object.metadata.annotations,
            &object.qualified_name(),
            &settings.default_kms_key,
        )?;

        if settings.strict_param_types && !annotations.param_type.is_known() {
            return Err(Error::UnsupportedParamType(
                annotations.param_type.as_str().to_string(),
            ));
        }

        let mut config = Self {
            name: object.metadata.name.clone(),
            namespace: object.metadata.namespace.clone(),
            object,
            annotations,
            param_value: String::new(),
            data,
        };

        debug!(
            object = %config.qualified_name(),
            param = %config.annotations.param_name,
            "getting value"
        );

        let resolution = resolve(
            store,
            &config.annotations.param_name,
            &config.annotations.param_type,
            config.decrypt(),
        )?;

        match resolution {
            Resolution::Scalar(value) => config.param_value = value,
            Resolution::List(raw) => {
                for (key, value) in parse_string_list(&raw) {
                    config.set(&key, &value)?;
                }
                config.param_value = raw;
            }
            Resolution::Directory(values) => {
                for (path, value) in values {
                    config.set(&safe_key_name(&path), &value)?;
                }
                config.param_value = constants::DIRECTORY_MARKER.to_string();
                return Ok(config);
            }
            Resolution::Unfetched => {
                debug!(param_type = %config.annotations.param_type, "unrecognised parameter type, nothing fetched");
            }
        }

        let marker = config.annotations.param_type.as_str().to_string();
        let value = config.param_value.clone();
        config.set(&marker, &value)?;

        Ok(config)
    }

    /// Insert a data entry, refusing to replace an existing key.
    ///
    /// # Errors
    ///
    /// Returns `Error::KeyCollision` naming the key and this object; `data`
    /// is left untouched.
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        debug!(key, "setting key");
        if self.data.contains_key(key) {
            return Err(Error::KeyCollision {
                key: key.to_string(),
                namespace: self.namespace.clone(),
                name: self.name.clone(),
            });
        }
        self.data.insert(key.to_string(), value.to_string());
        Ok(())
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn namespace(&self) -> &str {
        &self.namespace
    }

    /// `namespace/name` of the source object.
    pub fn qualified_name(&self) -> String {
        format!("{}/{}", self.namespace, self.name)
    }

    pub fn param_name(&self) -> &str {
        &self.annotations.param_name
    }

    pub fn param_type(&self) -> &ParamType {
        &self.annotations.param_type
    }

    /// Decryption key; empty when no decryption was requested.
    pub fn param_key(&self) -> &str {
        &self.annotations.param_key
    }

    /// Raw scalar value, or `"true"` for a Directory expansion.
    pub fn param_value(&self) -> &str {
        &self.param_value
    }

    /// Whether the store was asked to decrypt.
    pub fn decrypt(&self) -> bool {
        self.annotations.decrypt()
    }

    /// Resolved entries, including whatever the object carried before.
    pub fn data(&self) -> &BTreeMap<DataKey, String> {
        &self.data
    }

    /// The source object, as it was before resolution.
    pub fn object(&self) -> &ConfigObject {
        &self.object
    }

    /// Replace the object's data with the resolved mapping.
    ///
    /// The mapping was seeded from the object, so nothing the object held
    /// is lost or changed.
    pub fn into_object(self) -> ConfigObject {
        let mut object = self.object;
        object.data = self.data;
        object
    }

    /// Project onto the object and persist it.
    ///
    /// # Errors
    ///
    /// Propagates the object store's error.
    pub fn update_object(self, store: &dyn ObjectStore) -> Result<ConfigObject> {
        debug!(object = %self.qualified_name(), entries = self.data.len(), "updating object");
        store.update_object(&self.into_object())
    }
}
