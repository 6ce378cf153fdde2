//! Behavioural properties of the load -> resolve -> view pipeline

use password_toggle::{
    resolve, to_view_binding, OptionKind, OptionSchema, ResolvedOptions, ViewBinding, OPTIONS,
    VIEW_KEYS,
};
use proptest::prelude::*;
use serde_json::{json, Map, Value};
use std::sync::Arc;
use std::thread;

fn map(value: Value) -> Map<String, Value> {
    value.as_object().cloned().unwrap_or_default()
}

fn valid_value(kind: OptionKind) -> BoxedStrategy<Value> {
    match kind {
        OptionKind::Boolean => any::<bool>().prop_map(Value::Bool).boxed(),
        OptionKind::NonEmptyString => "[a-z][a-z: -]{0,15}".prop_map(Value::String).boxed(),
        OptionKind::StringList => prop::collection::vec("[a-z-]{1,10}", 0..4)
            .prop_map(|items| json!(items))
            .boxed(),
    }
}

fn single_override() -> impl Strategy<Value = (&'static str, Value)> {
    (0..OPTIONS.len()).prop_flat_map(|index| {
        let spec = OPTIONS[index];
        valid_value(spec.kind).prop_map(move |value| (spec.name, value))
    })
}

proptest! {
    #[test]
    fn override_takes_precedence((key, value) in single_override()) {
        let schema = OptionSchema::builtin();
        let mut overrides = Map::new();
        overrides.insert(key.to_string(), value.clone());

        let resolved = resolve(&schema, &overrides).unwrap();
        let defaults = schema.to_parameters();
        for (name, resolved_value) in resolved.to_map() {
            if name == key {
                prop_assert_eq!(&resolved_value, &value);
            } else {
                prop_assert_eq!(&resolved_value, &defaults[&name]);
            }
        }
    }

    #[test]
    fn loaded_defaults_survive_empty_resolve((key, value) in single_override()) {
        let mut raw = Map::new();
        raw.insert(key.to_string(), value);
        let schema = OptionSchema::load(&raw).unwrap();

        let resolved = resolve(&schema, &Map::new()).unwrap();
        prop_assert_eq!(&resolved, schema.defaults());
    }

    #[test]
    fn view_is_projection((key, value) in single_override()) {
        let mut overrides = Map::new();
        overrides.insert(key.to_string(), value);
        let resolved = resolve(&OptionSchema::builtin(), &overrides).unwrap();

        let vars = to_view_binding(&resolved).to_vars();
        prop_assert_eq!(vars.len(), VIEW_KEYS.len());
        let all = resolved.to_map();
        for name in VIEW_KEYS {
            prop_assert_eq!(&vars[name], &all[name]);
        }
    }
}

#[test]
fn end_to_end_example() {
    let schema = OptionSchema::load(&Map::new()).unwrap();
    let resolved = resolve(
        &schema,
        &map(json!({
            "toggle": false,
            "visible_label": "Mostrar",
            "hidden_label": "Ocultar",
        })),
    )
    .unwrap();
    let view = to_view_binding(&resolved);

    assert_eq!(
        view,
        ViewBinding {
            toggle: false,
            toggle_container_classes: vec!["form-password-toggle".into()],
            button_classes: vec!["input-group-text".into(), "cursor-pointer".into()],
            visible_icon: "tabler:eye-off".into(),
            hidden_icon: "tabler:eye".into(),
            visible_label: "Mostrar".into(),
            hidden_label: "Ocultar".into(),
        }
    );
    assert_eq!(
        Value::Object(view.to_vars()),
        json!({
            "toggle": false,
            "toggle_container_classes": ["form-password-toggle"],
            "button_classes": ["input-group-text", "cursor-pointer"],
            "visible_icon": "tabler:eye-off",
            "hidden_icon": "tabler:eye",
            "visible_label": "Mostrar",
            "hidden_label": "Ocultar",
        })
    );
}

#[test]
fn replacement_not_merge() {
    let schema = OptionSchema::load(&map(json!({"button_classes": ["a", "b"]}))).unwrap();
    let resolved = resolve(&schema, &map(json!({"button_classes": ["c"]}))).unwrap();
    assert_eq!(resolved.button_classes, ["c"]);
}

#[test]
fn string_toggle_is_rejected() {
    let err = resolve(&OptionSchema::builtin(), &map(json!({"toggle": "yes"}))).unwrap_err();
    assert_eq!(err.key, "toggle");
    assert_eq!(err.expected, "boolean");
    assert_eq!(err.received, "string");
}

#[test]
fn empty_icon_in_configuration_is_rejected() {
    let err = OptionSchema::load(&map(json!({"visible_icon": ""}))).unwrap_err();
    assert_eq!(err.key(), Some("visible_icon"));
}

#[test_log::test]
fn concurrent_resolution_shares_schema() {
    let schema = Arc::new(OptionSchema::load(&map(json!({"trim": true}))).unwrap());

    let handles: Vec<_> = (0..8)
        .map(|i| {
            let schema = Arc::clone(&schema);
            thread::spawn(move || {
                let overrides = map(json!({"visible_label": format!("Show {i}")}));
                resolve(&schema, &overrides)
            })
        })
        .collect();

    for (i, handle) in handles.into_iter().enumerate() {
        let resolved: ResolvedOptions = handle.join().unwrap().unwrap();
        assert_eq!(resolved.visible_label, format!("Show {i}"));
        assert!(resolved.trim);
    }
}
