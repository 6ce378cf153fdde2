//! Configuration provider using Figment
//!
//! Sources the raw configuration mapping handed to [`OptionSchema::load`].
//! Sources are merged in precedence order (later sources override earlier):
//!
//! 1. Configuration files, each under the `password_toggle` root key
//! 2. Environment variables prefixed `PASSWORD_TOGGLE_`
//!
//! Built-in defaults are not part of the figment; they are applied by the
//! schema for every key the merged mapping leaves unset.

use crate::defaults::OptionSchema;
use crate::discovery::{ConfigFile, ConfigFormat, FileDiscovery};
use crate::error::{ConfigurationError, ConfigurationResult};
use crate::schema::{option_spec, OptionKind};
use figment::{
    providers::{Env, Format, Json, Toml, Yaml},
    Figment,
};
use serde_json::{Map, Value};
use std::path::{Path, PathBuf};
use tracing::{debug, info, trace};

/// Root key of the settings inside configuration files
pub const CONFIG_ALIAS: &str = "password_toggle";

/// Prefix of environment variables overriding file settings
pub const ENV_PREFIX: &str = "PASSWORD_TOGGLE_";

/// Configuration provider using figment
///
/// No caching is performed: each call reads the sources again. The host is
/// expected to load once at startup and keep the resulting [`OptionSchema`].
pub struct ConfigProvider {
    files: Vec<ConfigFile>,
    use_env: bool,
}

impl ConfigProvider {
    /// Provider over files discovered below the current directory
    pub fn new() -> Self {
        Self::from_files(FileDiscovery::from_current_dir().discover_all())
    }

    /// Provider over files discovered below `root`
    pub fn for_root(root: impl Into<PathBuf>) -> Self {
        Self::from_files(FileDiscovery::new(root).discover_all())
    }

    /// Provider over a single, explicitly named file
    ///
    /// # Errors
    ///
    /// Fails if the file is missing or its extension is not supported.
    pub fn for_file(path: impl AsRef<Path>) -> ConfigurationResult<Self> {
        Ok(Self::from_files(vec![ConfigFile::from_path(
            path.as_ref(),
        )?]))
    }

    /// Provider over the given files, merged in order
    pub fn from_files(files: Vec<ConfigFile>) -> Self {
        Self {
            files,
            use_env: true,
        }
    }

    /// Do not read `PASSWORD_TOGGLE_*` environment variables
    pub fn without_env(mut self) -> Self {
        self.use_env = false;
        self
    }

    /// Files this provider reads, in merge order
    pub fn files(&self) -> &[ConfigFile] {
        &self.files
    }

    /// Merge all sources into the raw configuration mapping
    ///
    /// # Errors
    ///
    /// Returns [`ConfigurationError::Parse`] when a file cannot be parsed, and
    /// [`ConfigurationError::InvalidValue`] when a file's `password_toggle`
    /// root is present but not a mapping.
    pub fn raw_config(&self) -> ConfigurationResult<Map<String, Value>> {
        for file in &self.files {
            Self::check_root(file)?;
        }

        let figment = self.build_figment();
        let mut raw = figment.extract::<Map<String, Value>>()?;
        if self.use_env {
            Self::keep_env_text(&mut raw);
        }
        debug!("Loaded {} raw configuration values", raw.len());
        Ok(raw)
    }

    /// Read every source and validate the result into an [`OptionSchema`]
    ///
    /// # Errors
    ///
    /// Any parse failure, or a value that violates the option schema.
    pub fn load_schema(&self) -> ConfigurationResult<OptionSchema> {
        let raw = self.raw_config()?;
        let schema = OptionSchema::load(&raw)?;
        info!(
            "Loaded password toggle defaults from {} files",
            self.files.len()
        );
        Ok(schema)
    }

    fn build_figment(&self) -> Figment {
        let mut files = Figment::new();
        for file in &self.files {
            trace!(
                "Loading config file: {} ({:?})",
                file.path.display(),
                file.format
            );
            files = files.merge(Self::load_config_file(file));
        }

        let mut figment = Figment::new().merge(files.focus(CONFIG_ALIAS));
        if self.use_env {
            figment = figment.merge(Self::load_env_vars());
        }
        figment
    }

    fn load_config_file(file: &ConfigFile) -> Figment {
        let path = &file.path;
        match file.format {
            ConfigFormat::Toml => Figment::from(Toml::file(path)),
            ConfigFormat::Yaml => Figment::from(Yaml::file(path)),
            ConfigFormat::Json => Figment::from(Json::file(path)),
        }
    }

    /// Focusing on a root that is not a mapping yields nothing, so reject it
    /// up front instead of falling back to the built-in defaults.
    fn check_root(file: &ConfigFile) -> ConfigurationResult<()> {
        let root = Self::load_config_file(file).extract::<Map<String, Value>>()?;
        match root.get(CONFIG_ALIAS) {
            None | Some(Value::Null) | Some(Value::Object(_)) => Ok(()),
            Some(other) => {
                debug!(
                    "Config file {} has a non-mapping {} root: {}",
                    file.path.display(),
                    CONFIG_ALIAS,
                    other
                );
                Err(ConfigurationError::InvalidValue {
                    key: CONFIG_ALIAS.to_string(),
                    rule: format!("{CONFIG_ALIAS} must be a mapping"),
                })
            }
        }
    }

    /// Text options take environment values literally; figment would turn
    /// `PASSWORD_TOGGLE_VISIBLE_LABEL=1234` into a number.
    fn keep_env_text(raw: &mut Map<String, Value>) {
        for (key, value) in Env::prefixed(ENV_PREFIX).iter() {
            let key = key.as_str().to_lowercase();
            if option_spec(&key).is_some_and(|spec| spec.kind == OptionKind::NonEmptyString) {
                trace!("Keeping environment value for {} as text", key);
                raw.insert(key, Value::String(value));
            }
        }
    }

    fn load_env_vars() -> Figment {
        // flat keys: PASSWORD_TOGGLE_VISIBLE_LABEL -> visible_label
        Figment::from(Env::prefixed(ENV_PREFIX).map(|key| key.as_str().to_lowercase().into()))
    }
}

impl Default for ConfigProvider {
    fn default() -> Self {
        Self::new()
    }
}
