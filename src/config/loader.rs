// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use std::fs;
use std::path::Path;

use crate::errors::ConfigError;

/// Declarative description of a mapper.
///
/// This is the file form of the initial map a `Mapper` can be built from.
/// Operations cannot be expressed in a file, so only aliases and same-named
/// target operations are available here; explicit operations and child
/// mappers are added in code afterwards.
///
/// # Fields
/// * `name` - Provenance name used in errors and logs (optional)
/// * `map` - Key to alias target; a null value maps the key to the
///   same-named target operation
/// * `keys` - Keys mapped to same-named target operations
///
/// # Example
/// ```yaml
/// name: package
/// map:
///   devDependencies: addDependencies
///   dependencies: addDependencies
///   related: ~
/// keys:
///   - version
/// ```
#[derive(Debug, Default, Deserialize, PartialEq)]
pub struct MapperConfig {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub map: IndexMap<String, Option<String>>,
    #[serde(default)]
    pub keys: Vec<String>,
}

/// Supported file formats, chosen by extension
#[derive(Debug, Clone, Copy, PartialEq)]
enum Format {
    Yaml,
    Json,
    Toml,
}

fn format_of(path: &Path) -> Result<Format, ConfigError> {
    let extension = path
        .extension()
        .and_then(|e| e.to_str())
        .map(str::to_ascii_lowercase);

    match extension.as_deref() {
        Some("yaml") | Some("yml") => Ok(Format::Yaml),
        Some("json") => Ok(Format::Json),
        Some("toml") => Ok(Format::Toml),
        _ => Err(ConfigError::UnsupportedFormat {
            path: path.to_path_buf(),
        }),
    }
}

fn load<D: DeserializeOwned>(path: &Path) -> Result<D, ConfigError> {
    let format = format_of(path)?;
    let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
        path: path.to_path_buf(),
        source,
    })?;

    match format {
        Format::Yaml => serde_yaml::from_str(&content).map_err(|source| ConfigError::Yaml {
            path: path.to_path_buf(),
            source,
        }),
        Format::Json => serde_json::from_str(&content).map_err(|source| ConfigError::Json {
            path: path.to_path_buf(),
            source,
        }),
        Format::Toml => toml::from_str(&content).map_err(|source| ConfigError::Toml {
            path: path.to_path_buf(),
            source,
        }),
    }
}

/// Load a mapper description from a YAML, JSON or TOML file
pub fn load_mapper_config<P: AsRef<Path>>(path: P) -> Result<MapperConfig, ConfigError> {
    load(path.as_ref())
}

/// Load a configuration document to process, e.g. a `package.json`
pub fn load_document<P: AsRef<Path>>(path: P) -> Result<serde_json::Value, ConfigError> {
    load(path.as_ref())
}
