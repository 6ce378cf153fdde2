//! Fully populated, typed option set

use crate::error::InvalidOptionsError;
use crate::schema::apply_option;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// A complete set of password toggle options.
///
/// Every recognized key is present with a value of the right type. Instances
/// handed out by [`OptionSchema`](crate::OptionSchema) and
/// [`resolve`](crate::resolve) have also passed validation, so string options
/// are non-empty after trimming.
///
/// Deserializing goes through the same validation: keys missing from the
/// input keep their built-in default and every present key must satisfy its
/// rule.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Map<String, Value>")]
pub struct ResolvedOptions {
    pub toggle: bool,
    pub visible_icon: String,
    pub hidden_icon: String,
    pub visible_label: String,
    pub hidden_label: String,
    pub button_classes: Vec<String>,
    pub toggle_container_classes: Vec<String>,
    pub use_toggle_form_theme: bool,
    pub always_empty: bool,
    pub trim: bool,
    pub invalid_message: String,
}

impl Default for ResolvedOptions {
    /// The built-in defaults, used for every key the configuration leaves unset
    fn default() -> Self {
        Self {
            toggle: true,
            visible_icon: "tabler:eye-off".to_string(),
            hidden_icon: "tabler:eye".to_string(),
            visible_label: "Show".to_string(),
            hidden_label: "Hide".to_string(),
            button_classes: vec!["input-group-text".to_string(), "cursor-pointer".to_string()],
            toggle_container_classes: vec!["form-password-toggle".to_string()],
            use_toggle_form_theme: true,
            always_empty: true,
            trim: false,
            invalid_message: "The password is invalid.".to_string(),
        }
    }
}

impl ResolvedOptions {
    /// Flatten into an untyped mapping keyed by option name
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            // only strings, booleans and string lists, so always an object
            _ => Map::new(),
        }
    }
}

impl TryFrom<Map<String, Value>> for ResolvedOptions {
    type Error = InvalidOptionsError;

    fn try_from(raw: Map<String, Value>) -> Result<Self, Self::Error> {
        let mut options = Self::default();
        for (key, value) in &raw {
            apply_option(&mut options, key, value)?;
        }
        Ok(options)
    }
}
