//! Configuration file discovery
//!
//! Application-wide settings live in `config/packages/password_toggle.*`
//! under the application root. Several formats may coexist; they are
//! returned in merge order so later files override earlier ones.

use crate::error::{ConfigurationError, ConfigurationResult};
use std::path::{Path, PathBuf};
use tracing::{debug, trace, warn};

/// Directory, relative to the application root, holding package configuration
pub const CONFIG_DIR: &str = "config/packages";

/// File stem of the configuration files
pub const CONFIG_STEM: &str = "password_toggle";

/// Extensions searched for, in merge order
const EXTENSIONS: [&str; 4] = ["toml", "yaml", "yml", "json"];

/// Configuration file format detected from file extension
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// TOML format (.toml extension)
    Toml,
    /// YAML format (.yaml or .yml extensions)
    Yaml,
    /// JSON format (.json extension)
    Json,
}

impl ConfigFormat {
    /// Detect format from file extension
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_lowercase().as_str() {
            "toml" => Some(Self::Toml),
            "yaml" | "yml" => Some(Self::Yaml),
            "json" => Some(Self::Json),
            _ => None,
        }
    }
}

/// A configuration file together with its detected format
#[derive(Debug, Clone, PartialEq)]
pub struct ConfigFile {
    pub path: PathBuf,
    pub format: ConfigFormat,
}

impl ConfigFile {
    /// Describe an explicitly named configuration file.
    ///
    /// # Errors
    ///
    /// [`ConfigurationError::FileNotFound`] if the path is not a file,
    /// [`ConfigurationError::UnsupportedFormat`] if its extension is unknown.
    pub fn from_path(path: impl Into<PathBuf>) -> ConfigurationResult<Self> {
        let path = path.into();
        if !path.is_file() {
            return Err(ConfigurationError::FileNotFound { path });
        }

        let extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .unwrap_or_default();
        let format = ConfigFormat::from_extension(extension).ok_or_else(|| {
            ConfigurationError::UnsupportedFormat {
                format: extension.to_string(),
            }
        })?;

        Ok(Self { path, format })
    }
}

/// Finds configuration files below an application root
pub struct FileDiscovery {
    root: PathBuf,
}

impl FileDiscovery {
    /// Discover below the given application root
    pub fn new(root: impl Into<PathBuf>) -> Self {
        Self { root: root.into() }
    }

    /// Discover below the current working directory
    pub fn from_current_dir() -> Self {
        let root = std::env::current_dir().unwrap_or_else(|_| PathBuf::from("."));
        Self::new(root)
    }

    /// Directory searched for configuration files
    pub fn config_dir(&self) -> PathBuf {
        self.root.join(CONFIG_DIR)
    }

    /// All configuration files present, in merge order
    pub fn discover_all(&self) -> Vec<ConfigFile> {
        let dir = self.config_dir();
        if !dir.exists() {
            debug!("Configuration directory does not exist: {}", dir.display());
            return Vec::new();
        }
        if !dir.is_dir() {
            warn!("Path exists but is not a directory: {}", dir.display());
            return Vec::new();
        }

        let files: Vec<ConfigFile> = self
            .candidates(&dir)
            .into_iter()
            .filter(|path| path.is_file())
            .filter_map(|path| {
                let format = ConfigFormat::from_extension(path.extension()?.to_str()?)?;
                trace!("Found config: {} ({:?})", path.display(), format);
                Some(ConfigFile { path, format })
            })
            .collect();

        debug!("Discovered {} configuration files", files.len());
        files
    }

    fn candidates(&self, dir: &Path) -> Vec<PathBuf> {
        EXTENSIONS
            .iter()
            .map(|ext| dir.join(format!("{CONFIG_STEM}.{ext}")))
            .collect()
    }
}
