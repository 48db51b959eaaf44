//! Constants used throughout paramsync.
//!
//! Centralizes annotation names and default values.

/// Settings file name (paramsync.toml).
pub const CONFIG_FILE: &str = "paramsync.toml";

/// Environment variable holding the tracing filter.
pub const LOG_ENV: &str = "PARAMSYNC_LOG";

/// Default KMS key used for SecureString parameters without a key annotation.
pub const DEFAULT_KMS_KEY: &str = "alias/aws/ssm";

/// Current annotation namespace.
pub const ANNOTATION_PARAM_NAME: &str = "aws-ssm/aws-param-name";
pub const ANNOTATION_PARAM_TYPE: &str = "aws-ssm/aws-param-type";
pub const ANNOTATION_PARAM_KEY: &str = "aws-ssm/aws-param-key";

/// Legacy annotation namespace, still honoured.
pub const LEGACY_PARAM_NAME: &str = "alpha.ssm.cmattoon.com/aws-param-name";
pub const LEGACY_PARAM_TYPE: &str = "alpha.ssm.cmattoon.com/aws-param-type";
pub const LEGACY_PARAM_KEY: &str = "alpha.ssm.cmattoon.com/aws-param-key";

/// Value recorded on the aggregate for a Directory expansion.
pub const DIRECTORY_MARKER: &str = "true";
