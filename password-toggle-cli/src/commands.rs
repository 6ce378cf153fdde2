//! Command handlers

use std::fs;
use std::path::Path;

use anyhow::{bail, Context, Result};
use password_toggle::{ConfigProvider, OptionSchema, PasswordField, ResolvedOptions, OPTIONS};
use serde::Serialize;
use serde_json::{Map, Value};
use tracing::debug;

use crate::cli::{OutputFormat, SourceArgs};

/// One row of the `schema` listing.
#[derive(Debug, Serialize)]
pub struct SchemaEntry {
    pub name: &'static str,
    #[serde(rename = "type")]
    pub kind: &'static str,
    pub default: Value,
    pub info: &'static str,
}

/// Serialize `value` in the requested format.
pub fn render<T: Serialize>(value: &T, format: OutputFormat) -> Result<String> {
    let text = match format {
        OutputFormat::Json => serde_json::to_string_pretty(value)? + "\n",
        OutputFormat::Yaml => serde_yaml_ng::to_string(value)?,
    };
    Ok(text)
}

/// Build the provider selected by the source arguments.
pub fn provider(source: &SourceArgs) -> Result<ConfigProvider> {
    let provider = match (&source.config, &source.root) {
        (Some(path), _) => ConfigProvider::for_file(path)
            .with_context(|| format!("cannot use configuration file {}", path.display()))?,
        (None, Some(root)) => ConfigProvider::for_root(root),
        (None, None) => ConfigProvider::new(),
    };
    Ok(if source.no_env {
        provider.without_env()
    } else {
        provider
    })
}

/// Load the application-wide defaults.
pub fn load_schema(source: &SourceArgs) -> Result<OptionSchema> {
    let provider = provider(source)?;
    debug!("Reading {} configuration files", provider.files().len());
    provider
        .load_schema()
        .context("invalid password toggle configuration")
}

/// Every recognized option with its built-in default.
pub fn schema_entries() -> Vec<SchemaEntry> {
    let defaults = ResolvedOptions::default().to_map();
    OPTIONS
        .iter()
        .map(|spec| SchemaEntry {
            name: spec.name,
            kind: spec.kind.describe(),
            default: defaults.get(spec.name).cloned().unwrap_or(Value::Null),
            info: spec.info,
        })
        .collect()
}

/// Parse a `KEY=VALUE` override; the value is read as YAML.
pub fn parse_assignment(assignment: &str) -> Result<(String, Value)> {
    let Some((key, raw)) = assignment.split_once('=') else {
        bail!("expected KEY=VALUE, got '{assignment}'");
    };
    let key = key.trim();
    if key.is_empty() {
        bail!("missing option name in '{assignment}'");
    }
    let value: Value = serde_yaml_ng::from_str(raw)
        .with_context(|| format!("cannot parse value for '{key}'"))?;
    Ok((key.to_string(), value))
}

/// Read an override mapping from a YAML or JSON file.
pub fn read_overrides(path: &Path) -> Result<Map<String, Value>> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("cannot read overrides file {}", path.display()))?;
    let value: Value = serde_yaml_ng::from_str(&text)
        .with_context(|| format!("cannot parse overrides file {}", path.display()))?;
    match value {
        Value::Object(map) => Ok(map),
        Value::Null => Ok(Map::new()),
        _ => bail!("overrides file {} must contain a mapping", path.display()),
    }
}

/// Collect overrides: file first, then `--set` assignments on top.
pub fn collect_overrides(file: Option<&Path>, set: &[String]) -> Result<Map<String, Value>> {
    let mut overrides = match file {
        Some(path) => read_overrides(path)?,
        None => Map::new(),
    };
    for assignment in set {
        let (key, value) = parse_assignment(assignment)?;
        overrides.insert(key, value);
    }
    Ok(overrides)
}

pub fn run_schema(format: OutputFormat) -> Result<String> {
    render(&schema_entries(), format)
}

pub fn run_defaults(source: &SourceArgs, format: OutputFormat) -> Result<String> {
    let schema = load_schema(source)?;
    render(&schema.to_parameters(), format)
}

pub fn run_resolve(
    source: &SourceArgs,
    overrides_file: Option<&Path>,
    set: &[String],
    name: &str,
    format: OutputFormat,
) -> Result<String> {
    let schema = load_schema(source)?;
    let overrides = collect_overrides(overrides_file, set)?;
    let field = PasswordField::new(name, &schema, &overrides)
        .with_context(|| format!("cannot build field '{name}'"))?;
    render(&field.view_vars(), format)
}

pub fn run_check(source: &SourceArgs) -> Result<String> {
    load_schema(source)?;
    Ok("configuration is valid\n".to_string())
}
