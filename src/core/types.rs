//! Parameter types and type aliases for domain concepts.

use std::fmt;

/// A flattened key in an object's data mapping.
pub type DataKey = String;

/// Declared type of a remote parameter.
///
/// Parsing is exact and case-sensitive. Anything outside the four known
/// spellings is kept verbatim in `Unknown` so it can still be written as
/// the type-marker key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ParamType {
    String,
    SecureString,
    StringList,
    Directory,
    Unknown(String),
}

impl ParamType {
    /// Parse an annotation value.
    pub fn parse(value: &str) -> Self {
        match value {
            "String" => Self::String,
            "SecureString" => Self::SecureString,
            "StringList" => Self::StringList,
            "Directory" => Self::Directory,
            other => Self::Unknown(other.to_string()),
        }
    }

    /// The spelling used as the canonical type-marker key.
    pub fn as_str(&self) -> &str {
        match self {
            Self::String => "String",
            Self::SecureString => "SecureString",
            Self::StringList => "StringList",
            Self::Directory => "Directory",
            Self::Unknown(other) => other,
        }
    }

    /// Whether this is one of the four recognised types.
    pub fn is_known(&self) -> bool {
        !matches!(self, Self::Unknown(_))
    }
}

impl fmt::Display for ParamType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
