//! Error types for paramsync.
//!
//! One top-level [`Error`] with nested domain enums. Every error is scoped to
//! a single object's resolution attempt; nothing here is fatal to the process.

use thiserror::Error;

/// Top-level error.
#[derive(Error, Debug)]
pub enum Error {
    /// The object lacks the name or type annotation and is not meant for us.
    #[error("irrelevant object: {0}")]
    IrrelevantObject(String),

    /// A flattened key would be written twice.
    #[error("key '{key}' already exists for {namespace}/{name}")]
    KeyCollision {
        key: String,
        namespace: String,
        name: String,
    },

    /// Unknown parameter type, only raised when strict types are enabled.
    #[error("unsupported parameter type '{0}' (expected String, SecureString, StringList or Directory)")]
    UnsupportedParamType(String),

    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error(transparent)]
    Config(#[from] ConfigError),

    #[error(transparent)]
    Object(#[from] ObjectError),
}

impl Error {
    /// True for the benign "not annotated for us" classification.
    pub fn is_irrelevant(&self) -> bool {
        matches!(self, Self::IrrelevantObject(_))
    }
}

/// Errors raised by a parameter store backend.
#[derive(Error, Debug)]
pub enum FetchError {
    #[error("parameter not found: {0}")]
    NotFound(String),

    #[error("parameter '{0}' has no value")]
    MissingValue(String),

    #[error("failed to fetch '{name}': {reason}")]
    Request { name: String, reason: String },

    #[error("failed to start runtime: {0}")]
    Runtime(String),

    #[error("failed to read parameter fixture: {0}")]
    Fixture(String),
}

/// Settings file errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read settings: {0}")]
    ReadFile(std::io::Error),

    #[error("failed to parse settings: {0}")]
    Parse(#[from] toml::de::Error),

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

/// Errors reading or persisting a cluster object.
#[derive(Error, Debug)]
pub enum ObjectError {
    #[error("failed to read object {path}: {source}")]
    Read {
        path: String,
        source: std::io::Error,
    },

    #[error("failed to parse object: {0}")]
    Parse(serde_json::Error),

    #[error("failed to serialize object: {0}")]
    Serialize(serde_json::Error),

    #[error("failed to write object {path}: {source}")]
    Write {
        path: String,
        source: std::io::Error,
    },
}

pub type Result<T> = std::result::Result<T, Error>;
