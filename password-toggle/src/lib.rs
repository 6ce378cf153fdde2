//! Option resolution and view binding for password inputs with a visibility toggle
//!
//! This crate owns the configuration side of a password field that renders a
//! show/hide toggle next to the input. It merges three layers of options and
//! hands a small, stable set of variables to whatever renders the widget.
//!
//! # Layers
//!
//! 1. **Built-in defaults** (lowest precedence)
//! 2. **Application configuration** - `config/packages/password_toggle.{toml,yaml,yml,json}`
//!    and `PASSWORD_TOGGLE_*` environment variables, loaded once at startup
//!    into an [`OptionSchema`]
//! 3. **Per-field overrides** - supplied every time a field is built and
//!    merged by [`resolve`]
//!
//! # Quick Start
//!
//! ```
//! use password_toggle::{resolve, to_view_binding, OptionSchema};
//! use serde_json::json;
//!
//! let schema = OptionSchema::load(&serde_json::Map::new())?;
//!
//! let overrides = json!({
//!     "toggle": false,
//!     "visible_label": "Mostrar",
//!     "hidden_label": "Ocultar",
//! });
//! let resolved = resolve(&schema, overrides.as_object().unwrap())?;
//! let view = to_view_binding(&resolved);
//!
//! assert!(!view.toggle);
//! assert_eq!(view.visible_icon, "tabler:eye-off");
//! assert_eq!(view.visible_label, "Mostrar");
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```
//!
//! # Loading configuration
//!
//! ```no_run
//! use password_toggle::ConfigProvider;
//!
//! // Bootstrap must not continue if this fails
//! let schema = ConfigProvider::new().load_schema()?;
//! # Ok::<(), password_toggle::ConfigurationError>(())
//! ```
//!
//! ## Example YAML Configuration
//!
//! ```yaml
//! password_toggle:
//!   visible_label: Show password
//!   hidden_label: Hide password
//!   button_classes: [btn, btn-outline-secondary]
//! ```
//!
//! # Threading
//!
//! [`OptionSchema`] is immutable once loaded and `Send + Sync`; share it (for
//! example behind an `Arc`) and call [`resolve`] from any thread.

/// Schema defaults registry
pub mod defaults;
/// File discovery logic for configuration files
pub mod discovery;
/// Error types and handling
pub mod error;
/// Password field composed over a text input
pub mod field;
/// Fully populated option set
pub mod options;
/// Figment based configuration provider
pub mod provider;
/// Per-field option resolution
pub mod resolver;
/// Recognized options and validation rules
pub mod schema;
/// View variables for the rendering layer
pub mod view;

pub use defaults::OptionSchema;
pub use discovery::{ConfigFile, ConfigFormat, FileDiscovery};
pub use error::{ConfigurationError, ConfigurationResult, FieldError, InvalidOptionsError};
pub use field::{build_fields, PasswordField, TextFieldOptions, BLOCK_PREFIX, PARENT_TYPE};
pub use options::ResolvedOptions;
pub use provider::{ConfigProvider, CONFIG_ALIAS, ENV_PREFIX};
pub use resolver::resolve;
pub use schema::{OptionKind, OptionSpec, OPTIONS};
pub use view::{to_view_binding, ViewBinding, VIEW_KEYS};
