//! The fixed option schema: recognized keys, their kinds and validation rules
//!
//! Untyped values enter the crate at two boundaries (configuration load and
//! per-field resolution). Both go through [`apply_option`], which checks a raw
//! value against the kind of its key and stores it into a typed
//! [`ResolvedOptions`].

use crate::options::ResolvedOptions;
use serde_json::Value;
use std::fmt;

/// The value shape accepted for an option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OptionKind {
    /// `true` or `false`
    Boolean,
    /// A string that is not empty after trimming
    NonEmptyString,
    /// A sequence whose elements are all strings (may be empty)
    StringList,
}

impl OptionKind {
    /// Human-readable name of the kind, used in error messages
    pub fn describe(self) -> &'static str {
        match self {
            Self::Boolean => "boolean",
            Self::NonEmptyString => "non-empty string",
            Self::StringList => "sequence of strings",
        }
    }
}

impl fmt::Display for OptionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.describe())
    }
}

/// Declaration of a single recognized option
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionSpec {
    pub name: &'static str,
    pub kind: OptionKind,
    pub info: &'static str,
}

/// Every option the schema recognizes, in declaration order
pub const OPTIONS: [OptionSpec; 11] = [
    OptionSpec {
        name: "toggle",
        kind: OptionKind::Boolean,
        info: "Enable/disable toggle functionality by default",
    },
    OptionSpec {
        name: "visible_icon",
        kind: OptionKind::NonEmptyString,
        info: "Icon when password is hidden",
    },
    OptionSpec {
        name: "hidden_icon",
        kind: OptionKind::NonEmptyString,
        info: "Icon when password is visible",
    },
    OptionSpec {
        name: "visible_label",
        kind: OptionKind::NonEmptyString,
        info: "Label when password is hidden",
    },
    OptionSpec {
        name: "hidden_label",
        kind: OptionKind::NonEmptyString,
        info: "Label when password is visible",
    },
    OptionSpec {
        name: "button_classes",
        kind: OptionKind::StringList,
        info: "CSS classes for the toggle button",
    },
    OptionSpec {
        name: "toggle_container_classes",
        kind: OptionKind::StringList,
        info: "CSS classes for the toggle container",
    },
    OptionSpec {
        name: "use_toggle_form_theme",
        kind: OptionKind::Boolean,
        info: "Render the field with the toggle form theme",
    },
    OptionSpec {
        name: "always_empty",
        kind: OptionKind::Boolean,
        info: "Always render an empty value",
    },
    OptionSpec {
        name: "trim",
        kind: OptionKind::Boolean,
        info: "Trim whitespace from the submitted value",
    },
    OptionSpec {
        name: "invalid_message",
        kind: OptionKind::NonEmptyString,
        info: "Message shown when the submitted value is invalid",
    },
];

/// Look up the declaration of a recognized option
pub fn option_spec(name: &str) -> Option<&'static OptionSpec> {
    OPTIONS.iter().find(|spec| spec.name == name)
}

/// Whether `name` is one of the recognized options
pub fn is_recognized(name: &str) -> bool {
    option_spec(name).is_some()
}

/// Type name of a raw value as reported in errors
pub fn value_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "sequence",
        Value::Object(_) => "mapping",
    }
}

/// A raw value rejected by its option's rule
#[derive(Debug, Clone, PartialEq)]
pub struct Violation {
    pub key: &'static str,
    pub expected: OptionKind,
    pub value: Value,
}

impl Violation {
    fn new(spec: &OptionSpec, value: &Value) -> Self {
        Self {
            key: spec.name,
            expected: spec.kind,
            value: value.clone(),
        }
    }

    /// Type name of the rejected value
    pub fn received(&self) -> &'static str {
        match &self.value {
            Value::String(s) if s.trim().is_empty() => "empty string",
            other => value_type_name(other),
        }
    }

    /// The rule that was violated, phrased against the key
    pub fn rule(&self) -> String {
        match self.expected {
            OptionKind::Boolean => format!("{} must be a boolean", self.key),
            OptionKind::NonEmptyString => format!("{} must be a non-empty string", self.key),
            OptionKind::StringList => format!("{} must be a sequence of strings", self.key),
        }
    }
}

fn expect_bool(spec: &OptionSpec, value: &Value) -> Result<bool, Violation> {
    value.as_bool().ok_or_else(|| Violation::new(spec, value))
}

fn expect_text(spec: &OptionSpec, value: &Value) -> Result<String, Violation> {
    match value {
        Value::String(s) if !s.trim().is_empty() => Ok(s.clone()),
        _ => Err(Violation::new(spec, value)),
    }
}

fn expect_list(spec: &OptionSpec, value: &Value) -> Result<Vec<String>, Violation> {
    let items = value.as_array().ok_or_else(|| Violation::new(spec, value))?;
    items
        .iter()
        .map(|item| item.as_str().map(str::to_string))
        .collect::<Option<Vec<_>>>()
        .ok_or_else(|| Violation::new(spec, value))
}

/// Validate `value` against the rule for `key` and store it into `options`.
///
/// Returns `Ok(false)` without touching `options` when `key` is not a
/// recognized option.
pub fn apply_option(
    options: &mut ResolvedOptions,
    key: &str,
    value: &Value,
) -> Result<bool, Violation> {
    let Some(spec) = option_spec(key) else {
        return Ok(false);
    };

    match spec.name {
        "toggle" => options.toggle = expect_bool(spec, value)?,
        "visible_icon" => options.visible_icon = expect_text(spec, value)?,
        "hidden_icon" => options.hidden_icon = expect_text(spec, value)?,
        "visible_label" => options.visible_label = expect_text(spec, value)?,
        "hidden_label" => options.hidden_label = expect_text(spec, value)?,
        "button_classes" => options.button_classes = expect_list(spec, value)?,
        "toggle_container_classes" => {
            options.toggle_container_classes = expect_list(spec, value)?
        }
        "use_toggle_form_theme" => options.use_toggle_form_theme = expect_bool(spec, value)?,
        "always_empty" => options.always_empty = expect_bool(spec, value)?,
        "trim" => options.trim = expect_bool(spec, value)?,
        "invalid_message" => options.invalid_message = expect_text(spec, value)?,
        _ => return Ok(false),
    }
    Ok(true)
}
