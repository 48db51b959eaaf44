//! JSON file object store.

use std::io::Write;
use std::path::PathBuf;
use tracing::info;

use super::ObjectStore;
use crate::core::object::ConfigObject;
use crate::error::{ObjectError, Result};

/// Writes objects as pretty JSON to a file, or stdout when no path is set.
#[derive(Debug, Clone, Default)]
pub struct FileObjectStore {
    path: Option<PathBuf>,
}

impl FileObjectStore {
    /// Store writing to `path`.
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self {
            path: Some(path.into()),
        }
    }

    /// Store writing to stdout.
    pub fn stdout() -> Self {
        Self { path: None }
    }
}

impl ObjectStore for FileObjectStore {
    fn update_object(&self, object: &ConfigObject) -> Result<ConfigObject> {
        let mut json = object.to_json()?;
        json.push('\n');

        match &self.path {
            Some(path) => {
                info!(object = %object.qualified_name(), path = %path.display(), "writing object");
                std::fs::write(path, &json).map_err(|source| ObjectError::Write {
                    path: path.display().to_string(),
                    source,
                })?;
            }
            None => {
                info!(object = %object.qualified_name(), "writing object to stdout");
                std::io::stdout()
                    .write_all(json.as_bytes())
                    .map_err(|source| ObjectError::Write {
                        path: "<stdout>".to_string(),
                        source,
                    })?;
            }
        }

        Ok(object.clone())
    }
}
