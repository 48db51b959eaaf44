//! Resolve command.

use std::path::{Path, PathBuf};
use tracing::info;

use crate::cli::output;
use crate::core::config::Settings;
use crate::core::object::ConfigObject;
use crate::core::provider::{MemoryStore, ParameterStore};
use crate::core::resolved::ResolvedConfig;
use crate::core::store::FileObjectStore;
use crate::error::{ConfigError, Result};

/// Resolve a manifest and write the updated object.
///
/// An object without parameter annotations is reported and skipped.
pub fn execute(
    settings: &Settings,
    manifest: &Path,
    params: Option<&Path>,
    aws: bool,
    output_path: Option<PathBuf>,
) -> Result<()> {
    let object = ConfigObject::load(manifest)?;
    let store = open_store(settings, params, aws)?;

    let resolved =
        match ResolvedConfig::build_from_annotated_object(store.as_ref(), object, settings) {
            Ok(resolved) => resolved,
            Err(e) if e.is_irrelevant() => {
                info!(error = %e, "skipping object");
                output::warn(&format!("skipped: {}", e));
                return Ok(());
            }
            Err(e) => return Err(e),
        };

    let qualified = resolved.qualified_name();
    let entries = resolved.data().len();
    let objects = match &output_path {
        Some(path) => FileObjectStore::new(path),
        None => FileObjectStore::stdout(),
    };
    resolved.update_object(&objects)?;

    output::success(&format!("resolved {} ({} entries)", qualified, entries));
    Ok(())
}

fn open_store(
    settings: &Settings,
    params: Option<&Path>,
    aws: bool,
) -> Result<Box<dyn ParameterStore>> {
    if let Some(path) = params {
        return Ok(Box::new(MemoryStore::load(path)?));
    }
    if aws {
        return aws_store(settings);
    }
    Err(ConfigError::Invalid("no parameter source: pass --params <file> or --aws".into()).into())
}

#[cfg(feature = "aws")]
fn aws_store(settings: &Settings) -> Result<Box<dyn ParameterStore>> {
    let store = crate::core::provider::AwsStore::new(settings.region.as_deref())?;
    Ok(Box::new(store))
}

#[cfg(not(feature = "aws"))]
fn aws_store(_settings: &Settings) -> Result<Box<dyn ParameterStore>> {
    Err(ConfigError::Invalid("built without AWS support, rebuild with --features aws".into()).into())
}
