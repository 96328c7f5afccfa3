use crate::fixtures::{test_type_builder, test_type_registry, TEST_TYPES};
use enum_ext::{EnumExtError, Expansion};
use std::collections::BTreeSet;

fn expand(tokens: &[&str]) -> BTreeSet<String> {
    let registry = test_type_registry();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();
    ext.expand(tokens).unwrap().keys.into_iter().collect()
}

fn set_of(keys: &[&str]) -> BTreeSet<String> {
    keys.iter().map(|k| k.to_string()).collect()
}

#[test]
fn test_nested_reference() {
    assert_eq!(expand(&["fast"]), set_of(&["unit_test", "spec", "controller"]));
}

#[test]
fn test_superset_composition() {
    assert_eq!(expand(&["minitest"]), set_of(&TEST_TYPES));
}

#[test]
fn test_empty_tokens_expand_to_nothing() {
    let registry = test_type_registry();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();
    let none: [&str; 0] = [];
    assert_eq!(ext.expand(&none).unwrap(), Expansion::default());
    assert!(ext.expand_codes(&none).unwrap().is_empty());
}

#[test]
fn test_expansion_is_idempotent() {
    let first: Vec<String> = expand(&["fast", "view"]).into_iter().collect();
    let tokens: Vec<&str> = first.iter().map(String::as_str).collect();
    assert_eq!(expand(&tokens), set_of(&tokens));
}

#[test]
fn test_order_does_not_matter() {
    assert_eq!(expand(&["raw_level", "high_level"]), expand(&["high_level", "raw_level"]));
    assert_eq!(expand(&["view", "fast"]), expand(&["fast", "view"]));
}

#[test]
fn test_union_law() {
    let union: BTreeSet<String> = expand(&["fast"]).union(&expand(&["high_level"])).cloned().collect();
    assert_eq!(expand(&["fast", "high_level"]), union);
}

#[test]
fn test_mixed_keys_and_sets() {
    assert_eq!(expand(&["raw_level", "view"]), set_of(&["unit_test", "spec", "view"]));
}

#[test]
fn test_codes_follow_definition() {
    let registry = test_type_registry();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();
    assert_eq!(ext.expand_codes(&["fast"]).unwrap(), vec![0, 1, 3]);
    assert_eq!(ext.set_codes("high_level").unwrap(), vec![2, 3, 4]);
}

#[test]
fn test_permissive_mode_reports_unknown_tokens() {
    let registry = test_type_registry();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();

    let expansion = ext.expand(&["raw_level", "e2e"]).unwrap();
    assert_eq!(expansion.keys, vec!["unit_test", "spec"]);
    assert_eq!(expansion.unknown, vec!["e2e"]);
}

#[test]
fn test_strict_mode_rejects_unknown_tokens() {
    let registry = test_type_builder().strict(true).finalize().unwrap();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();

    assert_eq!(
        ext.expand(&["raw_level", "e2e"]),
        Err(EnumExtError::UnknownSetOrKey {
            enum_name: "test_type".to_string(),
            tokens: vec!["e2e".to_string()],
        })
    );
}

#[test]
fn test_reregistering_replaces_only_that_set() {
    let mut builder = test_type_builder();
    builder
        .register_sets("EnumExtMock", "test_type", [("raw_level", vec!["unit_test"])])
        .unwrap();
    let registry = builder.finalize().unwrap();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();

    assert_eq!(ext.set_keys("raw_level").unwrap(), vec!["unit_test"]);
    assert_eq!(ext.set_keys("high_level").unwrap(), vec!["view", "controller", "integration"]);
    assert_eq!(ext.set_keys("fast").unwrap(), vec!["unit_test", "controller"]);
}

#[test]
fn test_forward_references_resolve() {
    let mut builder = test_type_builder();
    builder
        .register_sets("EnumExtMock", "test_type", [("everything", vec!["later", "unit_test"])])
        .unwrap();
    builder
        .register_sets("EnumExtMock", "test_type", [("later", vec!["integration"])])
        .unwrap();
    let registry = builder.finalize().unwrap();
    let ext = registry.get("EnumExtMock", "test_type").unwrap();

    assert_eq!(ext.set_keys("everything").unwrap(), vec!["unit_test", "integration"]);
}

#[test]
fn test_cycles_fail_finalize() {
    let mut builder = test_type_builder();
    builder
        .register_sets(
            "EnumExtMock",
            "test_type",
            [("loop_a", vec!["spec", "loop_b"]), ("loop_b", vec!["loop_a"])],
        )
        .unwrap();

    match builder.finalize() {
        Err(EnumExtError::CyclicSetReference { enum_name, path }) => {
            assert_eq!(enum_name, "test_type");
            assert_eq!(path.first(), path.last());
            assert!(path.contains(&"loop_b".to_string()));
        }
        other => panic!("Expected cyclic set error, got {:?}", other.map(|_| ())),
    }
}

#[test]
fn test_set_named_like_a_key_fails_finalize() {
    let mut builder = test_type_builder();
    builder
        .register_sets("EnumExtMock", "test_type", [("spec", vec!["unit_test"])])
        .unwrap();

    assert_eq!(
        builder.finalize().map(|_| ()),
        Err(EnumExtError::SetShadowsKey {
            enum_name: "test_type".to_string(),
            set_name: "spec".to_string(),
        })
    );
}
