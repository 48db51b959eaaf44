//! Annotation extraction.
//!
//! Each logical field has two accepted annotation keys, the current
//! `aws-ssm/` namespace and the legacy `alpha.ssm.cmattoon.com/` one. The
//! alias table is walked once per object. When both aliases of a field are
//! present the current namespace wins, independent of map order.

use std::collections::BTreeMap;
use tracing::info;

use crate::core::constants;
use crate::core::types::ParamType;
use crate::error::{Error, Result};

/// Logical annotation field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Field {
    Name,
    Type,
    Key,
}

/// Alias key, field, and whether it belongs to the current namespace.
const ALIASES: &[(&str, Field, bool)] = &[
    (constants::ANNOTATION_PARAM_NAME, Field::Name, true),
    (constants::ANNOTATION_PARAM_TYPE, Field::Type, true),
    (constants::ANNOTATION_PARAM_KEY, Field::Key, true),
    (constants::LEGACY_PARAM_NAME, Field::Name, false),
    (constants::LEGACY_PARAM_TYPE, Field::Type, false),
    (constants::LEGACY_PARAM_KEY, Field::Key, false),
];

fn lookup(key: &str) -> Option<(Field, bool)> {
    ALIASES
        .iter()
        .find(|(alias, _, _)| *alias == key)
        .map(|(_, field, current)| (*field, *current))
}

/// A slot that remembers whether its value came from the current namespace.
#[derive(Default)]
struct Slot {
    value: String,
    current: bool,
}

impl Slot {
    fn offer(&mut self, value: &str, current: bool) {
        if current || !self.current {
            self.value = value.to_string();
            self.current = current;
        }
    }
}

/// The (name, type, key) triple read from an object's annotations.
#[derive(Debug, Clone, PartialEq)]
pub struct Annotations {
    pub param_name: String,
    pub param_type: ParamType,
    /// Empty means no decryption requested.
    pub param_key: String,
}

impl Annotations {
    /// Extract the triple from an annotation map.
    ///
    /// `object` is only used for the error message.
    ///
    /// # Errors
    ///
    /// Returns `Error::IrrelevantObject` if the name or type is empty.
    pub fn extract(
        annotations: &BTreeMap<String, String>,
        object: &str,
        default_kms_key: &str,
    ) -> Result<Self> {
        let mut name = Slot::default();
        let mut kind = Slot::default();
        let mut key = Slot::default();

        for (k, v) in annotations {
            match lookup(k) {
                Some((Field::Name, current)) => name.offer(v, current),
                Some((Field::Type, current)) => kind.offer(v, current),
                Some((Field::Key, current)) => key.offer(v, current),
                None => {}
            }
        }

        if name.value.is_empty() || kind.value.is_empty() {
            return Err(Error::IrrelevantObject(object.to_string()));
        }

        let param_type = ParamType::parse(&kind.value);
        let mut param_key = key.value;
        if param_type == ParamType::SecureString && param_key.is_empty() {
            info!(key = %default_kms_key, "no KMS key defined, using default key");
            param_key = default_kms_key.to_string();
        }

        Ok(Self {
            param_name: name.value,
            param_type,
            param_key,
        })
    }

    /// Whether the store should decrypt values.
    pub fn decrypt(&self) -> bool {
        !self.param_key.is_empty()
    }
}
