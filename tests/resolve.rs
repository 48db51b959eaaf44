//! Resolution behaviour through the public API.

use std::collections::BTreeMap;

use paramsync::core::constants;
use paramsync::core::provider::Fetch;
use paramsync::error::Error;
use paramsync::{ConfigObject, MemoryStore, ParamType, ResolvedConfig, Settings};

fn annotated(param_type: &str, name: &str) -> ConfigObject {
    ConfigObject::new("prod", "app")
        .with_annotation(constants::ANNOTATION_PARAM_NAME, name)
        .with_annotation(constants::ANNOTATION_PARAM_TYPE, param_type)
}

fn data(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
    pairs
        .iter()
        .map(|(k, v)| (k.to_string(), v.to_string()))
        .collect()
}

fn build(store: &MemoryStore, object: ConfigObject) -> paramsync::error::Result<ResolvedConfig> {
    ResolvedConfig::build_from_annotated_object(store, object, &Settings::default())
}

#[test]
fn test_missing_fields_are_irrelevant_without_fetch() {
    let store = MemoryStore::from_pairs([("/p", "v")]);
    let cases = [
        ConfigObject::new("prod", "a"),
        ConfigObject::new("prod", "b").with_annotation(constants::ANNOTATION_PARAM_NAME, "/p"),
        ConfigObject::new("prod", "c").with_annotation(constants::LEGACY_PARAM_TYPE, "String"),
        ConfigObject::new("prod", "d")
            .with_annotation(constants::ANNOTATION_PARAM_KEY, "alias/x")
            .with_annotation(constants::ANNOTATION_PARAM_TYPE, "SecureString"),
    ];

    for object in cases {
        let err = build(&store, object).unwrap_err();
        assert!(matches!(err, Error::IrrelevantObject(_)));
    }
    assert!(store.fetches().is_empty());
}

#[test]
fn test_secure_string_defaults_key_and_decrypts() {
    let store = MemoryStore::from_pairs([("/db/password", "s3cret")]);
    let cfg = build(&store, annotated("SecureString", "/db/password")).unwrap();

    assert_eq!(cfg.param_key(), "alias/aws/ssm");
    assert_eq!(
        store.fetches(),
        vec![Fetch::Value {
            name: "/db/password".into(),
            decrypt: true
        }]
    );
    assert_eq!(cfg.data(), &data(&[("SecureString", "s3cret")]));
}

#[test]
fn test_string_without_key_does_not_decrypt() {
    let store = MemoryStore::from_pairs([("/flag", "on")]);
    let cfg = build(&store, annotated("String", "/flag")).unwrap();
    assert!(!cfg.decrypt());
    assert_eq!(
        store.fetches(),
        vec![Fetch::Value {
            name: "/flag".into(),
            decrypt: false
        }]
    );
}

#[test]
fn test_string_list_decomposition() {
    let store = MemoryStore::from_pairs([("/list", "a=1, b=2, bare")]);
    let cfg = build(&store, annotated("StringList", "/list")).unwrap();

    assert_eq!(
        cfg.data(),
        &data(&[
            ("a", "1"),
            ("b", "2"),
            ("bare", ""),
            ("StringList", "a=1, b=2, bare"),
        ])
    );
}

#[test]
fn test_string_list_empty_left_side() {
    let store = MemoryStore::from_pairs([("/list", "=x,y")]);
    let cfg = build(&store, annotated("StringList", "/list")).unwrap();

    assert_eq!(
        cfg.data(),
        &data(&[("=x", ""), ("y", ""), ("StringList", "=x,y")])
    );
}

#[test]
fn test_directory_expansion() {
    let store = MemoryStore::from_pairs([("/svc/a/b/", "v1"), ("/svc/c", "v2")]);
    let cfg = build(&store, annotated("Directory", "/svc")).unwrap();

    assert_eq!(cfg.param_type(), &ParamType::Directory);
    assert_eq!(cfg.param_value(), "true");
    assert_eq!(cfg.data(), &data(&[("a_b", "v1"), ("c", "v2")]));
    assert!(!cfg.data().contains_key("Directory"));
}

#[test]
fn test_directory_sub_key_may_be_named_directory() {
    let store = MemoryStore::from_pairs([("/svc/Directory", "v")]);
    let cfg = build(&store, annotated("Directory", "/svc")).unwrap();
    assert_eq!(cfg.data(), &data(&[("Directory", "v")]));
}

#[test]
fn test_collision_keeps_earlier_entry() {
    let store = MemoryStore::from_pairs([("/x", "1")]);
    let mut cfg = build(&store, annotated("String", "/x")).unwrap();

    let err = cfg.set("String", "2").unwrap_err();
    assert_eq!(err.to_string(), "key 'String' already exists for prod/app");
    assert_eq!(cfg.data().get("String"), Some(&"1".to_string()));
}

#[test]
fn test_rerun_against_populated_mapping_fails() {
    let store = MemoryStore::from_pairs([("/list", "a=1")]);
    let existing = data(&[("StringList", "a=1")]);

    let err = ResolvedConfig::resolve_into(
        &store,
        annotated("StringList", "/list"),
        &Settings::default(),
        existing,
    )
    .unwrap_err();
    assert!(matches!(err, Error::KeyCollision { ref key, .. } if key == "StringList"));
}

#[test]
fn test_missing_parameter_aborts() {
    let store = MemoryStore::new();
    let cfg = build(&store, annotated("Directory", "/nothing")).unwrap();
    assert!(cfg.data().is_empty(), "empty path yields no entries");

    let err = build(&store, annotated("StringList", "/missing")).unwrap_err();
    assert!(matches!(err, Error::Fetch(_)));
}

#[test]
fn test_legacy_annotations_resolve() {
    let store = MemoryStore::from_pairs([("/legacy", "v")]);
    let object = ConfigObject::new("prod", "old")
        .with_annotation(constants::LEGACY_PARAM_NAME, "/legacy")
        .with_annotation(constants::LEGACY_PARAM_TYPE, "String");
    let cfg = build(&store, object).unwrap();
    assert_eq!(cfg.qualified_name(), "prod/old");
    assert_eq!(cfg.data(), &data(&[("String", "v")]));
}

#[test]
fn test_hand_edited_marker_survives_rerun() {
    let store = MemoryStore::from_pairs([("/x", "new")]);
    let mut object = build(&store, annotated("String", "/x"))
        .unwrap()
        .into_object();
    object.data.insert("String".into(), "hand-edited".into());

    let err = build(&store, object).unwrap_err();
    assert_eq!(err.to_string(), "key 'String' already exists for prod/app");
}

#[test]
fn test_existing_directory_key_collides() {
    let store = MemoryStore::from_pairs([("/svc/port", "5432")]);
    let mut object = annotated("Directory", "/svc");
    object.data.insert("port".into(), "80".into());
    object.data.insert("other".into(), "kept".into());

    let err = build(&store, object).unwrap_err();
    assert!(matches!(err, Error::KeyCollision { ref key, .. } if key == "port"));
}

#[test]
fn test_update_object_persists_projection() {
    use paramsync::FileObjectStore;
    use tempfile::TempDir;

    let dir = TempDir::new().unwrap();
    let out = dir.path().join("out.json");
    let store = MemoryStore::from_pairs([("/x", "v")]);

    let cfg = build(&store, annotated("String", "/x")).unwrap();
    let stored = cfg.update_object(&FileObjectStore::new(&out)).unwrap();
    assert_eq!(stored.data.get("String"), Some(&"v".to_string()));

    let reloaded = ConfigObject::load(&out).unwrap();
    assert_eq!(reloaded, stored);
}
