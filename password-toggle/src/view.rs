//! Variables handed to the rendering layer

use crate::options::ResolvedOptions;
use serde::Serialize;
use serde_json::{Map, Value};

/// Names of the variables a [`ViewBinding`] exposes, in render order
pub const VIEW_KEYS: [&str; 7] = [
    "toggle",
    "toggle_container_classes",
    "button_classes",
    "visible_icon",
    "hidden_icon",
    "visible_label",
    "hidden_label",
];

/// The rendering-relevant subset of a [`ResolvedOptions`].
///
/// Always derived from a resolved set with [`ViewBinding::from_options`]; the
/// renderer uses the icon, label and class values verbatim. There is no
/// other way to construct one from untyped data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewBinding {
    pub toggle: bool,
    pub toggle_container_classes: Vec<String>,
    pub button_classes: Vec<String>,
    pub visible_icon: String,
    pub hidden_icon: String,
    pub visible_label: String,
    pub hidden_label: String,
}

impl ViewBinding {
    /// Project the seven view variables out of a resolved option set
    pub fn from_options(resolved: &ResolvedOptions) -> Self {
        Self {
            toggle: resolved.toggle,
            toggle_container_classes: resolved.toggle_container_classes.clone(),
            button_classes: resolved.button_classes.clone(),
            visible_icon: resolved.visible_icon.clone(),
            hidden_icon: resolved.hidden_icon.clone(),
            visible_label: resolved.visible_label.clone(),
            hidden_label: resolved.hidden_label.clone(),
        }
    }

    /// Flat variable map as consumed by templates
    pub fn to_vars(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(vars)) => vars,
            _ => Map::new(),
        }
    }
}

impl From<&ResolvedOptions> for ViewBinding {
    fn from(resolved: &ResolvedOptions) -> Self {
        Self::from_options(resolved)
    }
}

/// Project a resolved option set into its view variables
pub fn to_view_binding(resolved: &ResolvedOptions) -> ViewBinding {
    ViewBinding::from_options(resolved)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_view_passes_options() {
        let resolved = ResolvedOptions {
            toggle_container_classes: vec!["form-password-toggle".into(), "custom".into()],
            ..ResolvedOptions::default()
        };
        let view = to_view_binding(&resolved);

        assert!(view.toggle);
        assert_eq!(view.toggle_container_classes, ["form-password-toggle", "custom"]);
        assert_eq!(view.button_classes, ["input-group-text", "cursor-pointer"]);
        assert_eq!(view.visible_icon, "tabler:eye-off");
        assert_eq!(view.hidden_icon, "tabler:eye");
        assert_eq!(view.visible_label, "Show");
        assert_eq!(view.hidden_label, "Hide");
    }

    #[test]
    fn test_view_with_toggle_disabled() {
        let resolved = ResolvedOptions {
            toggle: false,
            toggle_container_classes: vec![],
            button_classes: vec![],
            ..ResolvedOptions::default()
        };
        let view = ViewBinding::from(&resolved);

        assert!(!view.toggle);
        assert!(view.toggle_container_classes.is_empty());
        assert!(view.button_classes.is_empty());
    }

    #[test]
    fn test_vars_have_exactly_view_keys() {
        let vars = to_view_binding(&ResolvedOptions::default()).to_vars();
        let mut keys: Vec<&str> = vars.keys().map(String::as_str).collect();
        let mut expected = VIEW_KEYS.to_vec();
        keys.sort_unstable();
        expected.sort_unstable();
        assert_eq!(keys, expected);
    }

    #[test]
    fn test_vars_values() {
        let resolved = ResolvedOptions {
            visible_label: "Mostrar".into(),
            ..ResolvedOptions::default()
        };
        let vars = to_view_binding(&resolved).to_vars();
        assert_eq!(vars["visible_label"], Value::from("Mostrar"));
        assert_eq!(vars["toggle"], Value::Bool(true));
        assert_eq!(
            vars["toggle_container_classes"],
            Value::from(vec!["form-password-toggle"])
        );
    }

    #[test]
    fn test_non_view_options_are_dropped() {
        let vars = to_view_binding(&ResolvedOptions::default()).to_vars();
        for key in ["use_toggle_form_theme", "always_empty", "trim", "invalid_message"] {
            assert!(!vars.contains_key(key), "{key} leaked into view");
        }
    }
}
