// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a mapper definition or a document
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read '{}': {}", .path.display(), .source)]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid YAML in '{}': {}", .path.display(), .source)]
    Yaml {
        path: PathBuf,
        #[source]
        source: serde_yaml::Error,
    },

    #[error("invalid JSON in '{}': {}", .path.display(), .source)]
    Json {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("invalid TOML in '{}': {}", .path.display(), .source)]
    Toml {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    /// File extension is not one of yaml, yml, json or toml
    #[error("unsupported configuration format for '{}'", .path.display())]
    UnsupportedFormat { path: PathBuf },
}
