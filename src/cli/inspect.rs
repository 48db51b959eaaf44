//! Inspect command.
//!
//! Prints the (name, type, key) triple recognised on a manifest without
//! contacting any parameter store.

use std::path::Path;

use crate::cli::output;
use crate::core::annotations::Annotations;
use crate::core::config::Settings;
use crate::core::object::ConfigObject;
use crate::error::Result;

/// Show the recognised annotations.
pub fn execute(settings: &Settings, manifest: &Path) -> Result<()> {
    let object = ConfigObject::load(manifest)?;
    let qualified = object.qualified_name();

    let annotations = match Annotations::extract(
        &object.metadata.annotations,
        &qualified,
        &settings.default_kms_key,
    ) {
        Ok(a) => a,
        Err(e) if e.is_irrelevant() => {
            output::warn(&format!("{} has no parameter annotations", qualified));
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    println!("{}", qualified);
    output::kv("name", &annotations.param_name);
    output::kv("type", &annotations.param_type);
    if annotations.decrypt() {
        output::kv("key", &annotations.param_key);
    } else {
        output::kv("key", "(none)");
    }
    if !annotations.param_type.is_known() {
        output::warn(&format!(
            "unrecognised type '{}', only an empty marker would be written",
            annotations.param_type
        ));
    }
    Ok(())
}
