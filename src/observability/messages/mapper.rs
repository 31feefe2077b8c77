// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for mapper registration events.

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A key was registered with `map` or `map_with`.
///
/// # Log Level
/// `debug!` - Registration detail
///
/// # Example
/// ```
/// use map_config::observability::messages::mapper::KeyRegistered;
///
/// let msg = KeyRegistered {
///     mapper: "map-config",
///     key: "dependencies",
///     binding: "target",
/// };
///
/// tracing::debug!("{}", msg);
/// ```
pub struct KeyRegistered<'a> {
    pub mapper: &'a str,
    pub key: &'a str,
    pub binding: &'a str,
}

impl Display for KeyRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mapper '{}' registered key '{}' ({} binding)",
            self.mapper, self.key, self.binding
        )
    }
}

impl StructuredLog for KeyRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            mapper = self.mapper,
            key = self.key,
            binding = self.binding,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "key_registered",
            span_name = name,
            mapper = self.mapper,
            key = self.key,
            binding = self.binding,
        )
    }
}

/// An alias was registered with `alias` (or a string binding).
///
/// # Log Level
/// `debug!` - Registration detail
pub struct AliasRegistered<'a> {
    pub mapper: &'a str,
    pub from: &'a str,
    pub to: &'a str,
}

impl Display for AliasRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mapper '{}' aliased key '{}' to '{}'",
            self.mapper, self.from, self.to
        )
    }
}

impl StructuredLog for AliasRegistered<'_> {
    fn log(&self) {
        tracing::debug!(mapper = self.mapper, from = self.from, to = self.to, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "alias_registered",
            span_name = name,
            mapper = self.mapper,
            from = self.from,
            to = self.to,
        )
    }
}

/// A child mapper was mounted under a key and its keys were namespaced.
///
/// # Log Level
/// `debug!` - Registration detail
///
/// # Example
/// ```
/// use map_config::observability::messages::mapper::SubMapperRegistered;
///
/// let msg = SubMapperRegistered {
///     mapper: "root",
///     key: "verb",
///     child: "verb",
///     sub_key_count: 2,
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Mapper 'root' mounted mapper 'verb' under 'verb' with 2 namespaced keys"
/// );
/// ```
pub struct SubMapperRegistered<'a> {
    pub mapper: &'a str,
    pub key: &'a str,
    pub child: &'a str,
    pub sub_key_count: usize,
}

impl Display for SubMapperRegistered<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mapper '{}' mounted mapper '{}' under '{}' with {} namespaced keys",
            self.mapper, self.child, self.key, self.sub_key_count
        )
    }
}

impl StructuredLog for SubMapperRegistered<'_> {
    fn log(&self) {
        tracing::debug!(
            mapper = self.mapper,
            key = self.key,
            child = self.child,
            sub_key_count = self.sub_key_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "sub_mapper_registered",
            span_name = name,
            mapper = self.mapper,
            key = self.key,
            child = self.child,
            sub_key_count = self.sub_key_count,
        )
    }
}
