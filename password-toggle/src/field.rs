//! Password field composed over an ordinary text field
//!
//! The toggle options are a capability layered on top of a text input owned by
//! the rendering layer. [`PasswordField`] keeps the two apart: resolved toggle
//! options on one side, the options the text input consumes on the other.

use crate::defaults::OptionSchema;
use crate::error::{FieldError, InvalidOptionsError};
use crate::options::ResolvedOptions;
use crate::resolver::resolve;
use crate::schema::is_recognized;
use crate::view::ViewBinding;
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::{debug, warn};

/// Type the password field is rendered on top of
pub const PARENT_TYPE: &str = "text";

/// Prefix of the template block that renders the widget
pub const BLOCK_PREFIX: &str = "toggle_password";

/// Form theme used when `use_toggle_form_theme` is enabled
pub const FORM_THEME: &str = "toggle_password_theme";

/// Options consumed by the underlying text input
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TextFieldOptions {
    pub always_empty: bool,
    pub trim: bool,
    pub invalid_message: String,
    /// Per-field options the toggle schema does not own (`label`, `attr`, ...)
    #[serde(flatten)]
    pub passthrough: Map<String, Value>,
}

impl TextFieldOptions {
    /// Flat mapping of every text-input option
    pub fn to_map(&self) -> Map<String, Value> {
        match serde_json::to_value(self) {
            Ok(Value::Object(map)) => map,
            _ => self.passthrough.clone(),
        }
    }
}

/// One instantiation of the password toggle widget inside a form
#[derive(Debug, Clone, PartialEq)]
pub struct PasswordField {
    name: String,
    options: ResolvedOptions,
    passthrough: Map<String, Value>,
}

impl PasswordField {
    /// Resolve `overrides` against `schema` for the field called `name`.
    ///
    /// # Errors
    ///
    /// Returns [`InvalidOptionsError`] when an override violates the schema.
    pub fn new(
        name: impl Into<String>,
        schema: &OptionSchema,
        overrides: &Map<String, Value>,
    ) -> Result<Self, InvalidOptionsError> {
        let name = name.into();
        let options = resolve(schema, overrides)?;
        let passthrough: Map<String, Value> = overrides
            .iter()
            .filter(|(key, _)| !is_recognized(key))
            .map(|(key, value)| (key.clone(), value.clone()))
            .collect();

        debug!(
            "Built password field '{}' with {} pass-through options",
            name,
            passthrough.len()
        );
        Ok(Self {
            name,
            options,
            passthrough,
        })
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn options(&self) -> &ResolvedOptions {
        &self.options
    }

    pub fn parent(&self) -> &'static str {
        PARENT_TYPE
    }

    pub fn block_prefix(&self) -> &'static str {
        BLOCK_PREFIX
    }

    /// Form theme to render with, if the field opts into it
    pub fn form_theme(&self) -> Option<&'static str> {
        self.options.use_toggle_form_theme.then_some(FORM_THEME)
    }

    /// Options handed to the underlying text input
    pub fn text_options(&self) -> TextFieldOptions {
        TextFieldOptions {
            always_empty: self.options.always_empty,
            trim: self.options.trim,
            invalid_message: self.options.invalid_message.clone(),
            passthrough: self.passthrough.clone(),
        }
    }

    /// View variables regenerated from the current resolved options
    pub fn build_view(&self) -> ViewBinding {
        ViewBinding::from_options(&self.options)
    }

    /// Flat template variables for this field
    pub fn view_vars(&self) -> Map<String, Value> {
        self.build_view().to_vars()
    }
}

/// Build several password fields against the same schema.
///
/// Each field is resolved independently: a field whose overrides are invalid
/// yields a [`FieldError`] in its slot and the others are unaffected.
pub fn build_fields<'a, I>(schema: &OptionSchema, fields: I) -> Vec<Result<PasswordField, FieldError>>
where
    I: IntoIterator<Item = (&'a str, &'a Map<String, Value>)>,
{
    fields
        .into_iter()
        .map(|(name, overrides)| {
            PasswordField::new(name, schema, overrides).map_err(|source| {
                warn!("Rejected field '{}': invalid option '{}'", name, source.key);
                FieldError {
                    field: name.to_string(),
                    source,
                }
            })
        })
        .collect()
}
