//! Per-field option resolution

use crate::defaults::OptionSchema;
use crate::error::InvalidOptionsError;
use crate::options::ResolvedOptions;
use crate::schema::{apply_option, Violation};
use serde_json::{Map, Value};
use tracing::{debug, trace};

impl From<Violation> for InvalidOptionsError {
    fn from(violation: Violation) -> Self {
        Self {
            key: violation.key.to_string(),
            expected: violation.expected.describe().to_string(),
            received: violation.received().to_string(),
            value: violation.value.to_string(),
        }
    }
}

/// Merge per-field overrides over the schema defaults and validate the result.
///
/// For every recognized key the override wins when present, otherwise the
/// default is used. Overrides replace sequence defaults wholesale. The merged
/// set is validated as a whole, so either a complete [`ResolvedOptions`] is
/// returned or nothing is.
///
/// Keys the schema does not recognize are skipped; they belong to whatever
/// owns the rest of the field (see [`PasswordField`](crate::PasswordField)).
///
/// # Errors
///
/// Returns [`InvalidOptionsError`] naming the key, the expected type and the
/// received value for the first override that violates the schema.
///
/// ```
/// use password_toggle::{resolve, OptionSchema};
/// use serde_json::json;
///
/// let schema = OptionSchema::builtin();
/// let overrides = json!({"button_classes": ["btn"]});
/// let resolved = resolve(&schema, overrides.as_object().unwrap())?;
/// assert_eq!(resolved.button_classes, ["btn"]);
/// # Ok::<(), password_toggle::InvalidOptionsError>(())
/// ```
pub fn resolve(
    defaults: &OptionSchema,
    overrides: &Map<String, Value>,
) -> Result<ResolvedOptions, InvalidOptionsError> {
    let mut merged = defaults.to_parameters();
    let mut overridden = 0;
    for (key, value) in overrides {
        if let Some(slot) = merged.get_mut(key) {
            trace!("Override: {} = {}", key, value);
            *slot = value.clone();
            overridden += 1;
        }
    }

    let mut resolved = ResolvedOptions::default();
    for (key, value) in &merged {
        apply_option(&mut resolved, key, value)?;
    }

    debug!(
        "Resolved options with {} of {} overrides applied",
        overridden,
        overrides.len()
    );
    Ok(resolved)
}
