//! Schema and defaults registry
//!
//! [`OptionSchema`] is the application-wide default option set. It is built
//! once at startup from the raw configuration mapping, validated against the
//! fixed schema, and then shared read-only by every field resolution.

use crate::error::{ConfigurationError, ConfigurationResult};
use crate::options::ResolvedOptions;
use crate::schema::apply_option;
use serde_json::{Map, Value};
use tracing::{debug, trace};

/// The validated application-wide defaults.
///
/// Can only be obtained through [`OptionSchema::load`] (or its layered and
/// built-in variants), so holding one means the defaults passed validation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OptionSchema {
    defaults: ResolvedOptions,
}

impl OptionSchema {
    /// Schema carrying only the built-in defaults
    pub fn builtin() -> Self {
        Self {
            defaults: ResolvedOptions::default(),
        }
    }

    /// Build the schema from a raw configuration mapping.
    ///
    /// Recognized keys are validated and override the built-in default;
    /// unknown keys are ignored. The first violation aborts the load.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::InvalidValue`] naming the offending key
    /// and the rule it violates.
    ///
    /// ```
    /// use password_toggle::OptionSchema;
    /// use serde_json::json;
    ///
    /// let raw = json!({"visible_label": "Mostrar"});
    /// let schema = OptionSchema::load(raw.as_object().unwrap())?;
    /// assert_eq!(schema.defaults().visible_label, "Mostrar");
    /// assert_eq!(schema.defaults().hidden_label, "Hide");
    /// # Ok::<(), password_toggle::ConfigurationError>(())
    /// ```
    pub fn load(raw: &Map<String, Value>) -> ConfigurationResult<Self> {
        debug!("Loading option schema from {} configuration keys", raw.len());

        let mut defaults = ResolvedOptions::default();
        for (key, value) in raw {
            let applied = apply_option(&mut defaults, key, value).map_err(|violation| {
                ConfigurationError::InvalidValue {
                    key: key.clone(),
                    rule: violation.rule(),
                }
            })?;
            if applied {
                trace!("Configured default: {} = {}", key, value);
            } else {
                debug!("Ignoring unknown configuration key: {}", key);
            }
        }

        Ok(Self { defaults })
    }

    /// Build the schema from several configuration mappings.
    ///
    /// Layers are folded in order, a later layer replacing the value of an
    /// earlier one key by key. Sequences are replaced, never appended.
    pub fn load_layers<'a, I>(layers: I) -> ConfigurationResult<Self>
    where
        I: IntoIterator<Item = &'a Map<String, Value>>,
    {
        let mut merged = Map::new();
        let mut count = 0;
        for layer in layers {
            count += 1;
            for (key, value) in layer {
                merged.insert(key.clone(), value.clone());
            }
        }
        debug!("Merged {} configuration layers", count);
        Self::load(&merged)
    }

    /// The processed defaults
    pub fn defaults(&self) -> &ResolvedOptions {
        &self.defaults
    }

    /// The processed defaults as a flat mapping, one entry per option
    pub fn to_parameters(&self) -> Map<String, Value> {
        self.defaults.to_map()
    }
}

impl Default for OptionSchema {
    fn default() -> Self {
        Self::builtin()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;
    use serde_json::json;

    fn raw(value: Value) -> Map<String, Value> {
        match value {
            Value::Object(map) => map,
            other => panic!("expected object, got {other}"),
        }
    }

    #[test]
    fn test_empty_config_gives_builtin_defaults() {
        let schema = OptionSchema::load(&Map::new()).unwrap();
        assert_eq!(schema, OptionSchema::builtin());
        assert_eq!(schema.defaults(), &ResolvedOptions::default());
    }

    #[test]
    fn test_custom_configuration() {
        let schema = OptionSchema::load(&raw(json!({
            "toggle": false,
            "visible_icon": "custom:eye-off",
            "hidden_icon": "custom:eye",
            "visible_label": "Mostrar",
            "hidden_label": "Ocultar",
            "button_classes": ["btn", "btn-primary"],
            "toggle_container_classes": ["custom-container"],
        })))
        .unwrap();

        let defaults = schema.defaults();
        assert!(!defaults.toggle);
        assert_eq!(defaults.visible_icon, "custom:eye-off");
        assert_eq!(defaults.hidden_icon, "custom:eye");
        assert_eq!(defaults.visible_label, "Mostrar");
        assert_eq!(defaults.hidden_label, "Ocultar");
        assert_eq!(defaults.button_classes, ["btn", "btn-primary"]);
        assert_eq!(defaults.toggle_container_classes, ["custom-container"]);
        // untouched keys keep their built-in default
        assert!(defaults.use_toggle_form_theme);
        assert!(defaults.always_empty);
        assert!(!defaults.trim);
        assert_eq!(defaults.invalid_message, "The password is invalid.");
    }

    #[rstest]
    #[case(json!({"visible_icon": ""}), "visible_icon")]
    #[case(json!({"visible_label": ""}), "visible_label")]
    #[case(json!({"hidden_icon": "  "}), "hidden_icon")]
    #[case(json!({"invalid_message": 42}), "invalid_message")]
    #[case(json!({"button_classes": "not-an-array"}), "button_classes")]
    #[case(json!({"toggle_container_classes": true}), "toggle_container_classes")]
    #[case(json!({"toggle": "yes"}), "toggle")]
    #[case(json!({"always_empty": null}), "always_empty")]
    fn test_invalid_configuration_is_rejected(#[case] config: Value, #[case] key: &str) {
        let err = OptionSchema::load(&raw(config)).unwrap_err();
        assert_eq!(err.key(), Some(key));
        match err {
            ConfigurationError::InvalidValue { rule, .. } => assert!(rule.starts_with(key)),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_unknown_keys_are_ignored() {
        let schema = OptionSchema::load(&raw(json!({
            "future_option": {"nested": true},
            "hidden_label": "Ocultar",
        })))
        .unwrap();
        assert_eq!(schema.defaults().hidden_label, "Ocultar");
        assert!(!schema.to_parameters().contains_key("future_option"));
    }

    #[test]
    fn test_load_is_deterministic() {
        let config = raw(json!({"trim": true, "button_classes": []}));
        assert_eq!(
            OptionSchema::load(&config).unwrap(),
            OptionSchema::load(&config).unwrap()
        );
    }

    #[test]
    fn test_later_layer_wins() {
        let first = raw(json!({
            "visible_label": "Show password",
            "button_classes": ["a", "b"],
        }));
        let second = raw(json!({"button_classes": ["c"]}));

        let schema = OptionSchema::load_layers([&first, &second]).unwrap();
        assert_eq!(schema.defaults().visible_label, "Show password");
        assert_eq!(schema.defaults().button_classes, ["c"]);
    }

    #[test]
    fn test_layers_validate_after_merge() {
        let first = raw(json!({"visible_icon": ""}));
        let second = raw(json!({"visible_icon": "custom:eye-off"}));
        let schema = OptionSchema::load_layers([&first, &second]).unwrap();
        assert_eq!(schema.defaults().visible_icon, "custom:eye-off");

        let err = OptionSchema::load_layers([&second, &first]).unwrap_err();
        assert_eq!(err.key(), Some("visible_icon"));
    }

    #[test]
    fn test_no_layers() {
        let schema = OptionSchema::load_layers(std::iter::empty()).unwrap();
        assert_eq!(schema, OptionSchema::builtin());
    }

    #[test]
    fn test_to_parameters() {
        let schema = OptionSchema::load(&raw(json!({"toggle": false}))).unwrap();
        let parameters = schema.to_parameters();
        assert_eq!(parameters["toggle"], json!(false));
        assert_eq!(parameters["visible_label"], json!("Show"));
        assert_eq!(parameters.len(), crate::schema::OPTIONS.len());
    }
}
