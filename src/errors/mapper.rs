// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Errors surfaced by `Mapper::process` and `Mapper::process_async`.
//!
//! Failures leaving the synchronous `process` carry a `<mapper>#process:`
//! prefix so the caller can tell which mapper raised them. Failures delivered
//! by `process_async` keep the operation's own message untouched, whether the
//! operation returned the error directly or from its future.

use crate::config::consts::PROCESS_TAG;
use thiserror::Error;

/// Boxed error carried as the source of an operation failure
pub type BoxError = Box<dyn std::error::Error + Send + Sync + 'static>;

#[derive(Debug, Error)]
pub enum MapperError {
    /// `process` reached an operation that only completes asynchronously
    #[error(
        "{}{}: callback expected, operation for key '{}' completes asynchronously (use process_async)",
        .mapper, PROCESS_TAG, .key
    )]
    CallbackExpected { mapper: String, key: String },

    /// An operation failed while running through the synchronous `process`
    #[error("{}{}: {}", .mapper, PROCESS_TAG, .source)]
    Process {
        mapper: String,
        key: String,
        #[source]
        source: BoxError,
    },

    /// An operation failed while running through `process_async`
    #[error("{}", .source)]
    Operation {
        key: String,
        #[source]
        source: BoxError,
    },

    /// A spawned operation never reported back (panic or runtime shutdown)
    #[error("operation for key '{key}' did not complete: {message}")]
    TaskFailed { key: String, message: String },
}

impl MapperError {
    /// Configuration key whose operation produced this error
    pub fn key(&self) -> &str {
        match self {
            MapperError::CallbackExpected { key, .. }
            | MapperError::Process { key, .. }
            | MapperError::Operation { key, .. }
            | MapperError::TaskFailed { key, .. } => key,
        }
    }

    /// Usage errors are never rewrapped by an enclosing mapper
    pub fn is_usage_error(&self) -> bool {
        matches!(self, MapperError::CallbackExpected { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_process_error_carries_provenance_prefix() {
        let err = MapperError::Process {
            mapper: "verb".to_string(),
            key: "related".to_string(),
            source: anyhow::anyhow!("boom").into(),
        };

        assert_eq!(err.to_string(), "verb#process: boom");
        assert_eq!(err.key(), "related");
        assert!(std::error::Error::source(&err).is_some());
    }

    #[test]
    fn test_operation_error_is_verbatim() {
        let err = MapperError::Operation {
            key: "foo".to_string(),
            source: anyhow::anyhow!("x").into(),
        };

        assert_eq!(err.to_string(), "x");
        assert_eq!(err.key(), "foo");
        assert!(!err.is_usage_error());
    }

    #[test]
    fn test_callback_expected_names_mapper_and_key() {
        let err = MapperError::CallbackExpected {
            mapper: "map-config".to_string(),
            key: "foo".to_string(),
        };

        let message = err.to_string();
        assert!(message.starts_with("map-config#process: callback expected"));
        assert!(message.contains("'foo'"));
        assert!(err.is_usage_error());
    }
}
