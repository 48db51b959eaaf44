//! Manifest and parameter fixtures.

use paramsync::core::constants;
use paramsync::ConfigObject;

/// A manifest annotated in the current namespace.
pub fn manifest(param_type: &str, param_name: &str) -> String {
    let object = ConfigObject::new("prod", "app")
        .with_annotation(constants::ANNOTATION_PARAM_NAME, param_name)
        .with_annotation(constants::ANNOTATION_PARAM_TYPE, param_type);
    object.to_json().expect("serialize manifest")
}

/// A manifest with no parameter annotations.
pub fn plain_manifest() -> String {
    ConfigObject::new("prod", "plain")
        .with_annotation("team", "infra")
        .to_json()
        .expect("serialize manifest")
}

/// A parameter fixture file body.
pub fn params(pairs: &[(&str, &str)]) -> String {
    let mut out = String::from("[parameters]\n");
    for (k, v) in pairs {
        out.push_str(&format!("{:?} = {:?}\n", k, v));
    }
    out
}
