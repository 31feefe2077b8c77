// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Message types for `process` / `process_async` events.
//!
//! This module contains message types for logging events related to:
//! * Processing lifecycle (start, completion)
//! * Per-key dispatch and skipped keys
//! * Operation failures and usage errors

use crate::observability::messages::StructuredLog;
use std::fmt::{Display, Formatter};
use tracing::Span;

/// A configuration object is about to be processed.
///
/// # Log Level
/// `debug!` - The span is the useful part; the event marks its start
pub struct ProcessStarted<'a> {
    pub mapper: &'a str,
    pub mode: &'a str,
    pub key_count: usize,
}

impl Display for ProcessStarted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mapper '{}' processing {} configuration keys ({} mode)",
            self.mapper, self.key_count, self.mode
        )
    }
}

impl StructuredLog for ProcessStarted<'_> {
    fn log(&self) {
        tracing::debug!(
            mapper = self.mapper,
            mode = self.mode,
            key_count = self.key_count,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "process",
            span_name = name,
            mapper = self.mapper,
            mode = self.mode,
            key_count = self.key_count,
        )
    }
}

/// A configuration key had nothing to dispatch to.
///
/// # Log Level
/// `trace!` - Expected for configurations shared between mappers
pub struct KeySkipped<'a> {
    pub mapper: &'a str,
    pub key: &'a str,
}

impl Display for KeySkipped<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mapper '{}' skipped key '{}': no operation resolved",
            self.mapper, self.key
        )
    }
}

impl StructuredLog for KeySkipped<'_> {
    fn log(&self) {
        tracing::trace!(mapper = self.mapper, key = self.key, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::trace_span!(
            "key_skipped",
            span_name = name,
            mapper = self.mapper,
            key = self.key,
        )
    }
}

/// An operation was invoked (or spawned) for a configuration key.
///
/// # Log Level
/// `debug!` - Per-key detail
///
/// # Example
/// ```
/// use map_config::observability::messages::dispatch::OperationDispatched;
///
/// let msg = OperationDispatched {
///     mapper: "map-config",
///     key: "devDependencies",
///     kind: "async",
/// };
///
/// assert_eq!(
///     msg.to_string(),
///     "Mapper 'map-config' dispatched key 'devDependencies' to async operation"
/// );
/// ```
pub struct OperationDispatched<'a> {
    pub mapper: &'a str,
    pub key: &'a str,
    pub kind: &'a str,
}

impl Display for OperationDispatched<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mapper '{}' dispatched key '{}' to {} operation",
            self.mapper, self.key, self.kind
        )
    }
}

impl StructuredLog for OperationDispatched<'_> {
    fn log(&self) {
        tracing::debug!(mapper = self.mapper, key = self.key, kind = self.kind, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::debug_span!(
            "operation",
            span_name = name,
            mapper = self.mapper,
            key = self.key,
            kind = self.kind,
        )
    }
}

/// An operation failed; processing of this configuration stops.
///
/// # Log Level
/// `error!` - Failure requiring attention
///
/// # Example
/// ```
/// use map_config::observability::messages::dispatch::OperationFailed;
///
/// let error = std::io::Error::new(std::io::ErrorKind::Other, "disk full");
/// let msg = OperationFailed {
///     mapper: "map-config",
///     key: "files",
///     error: &error,
/// };
///
/// tracing::error!("{}", msg);
/// ```
pub struct OperationFailed<'a> {
    pub mapper: &'a str,
    pub key: &'a str,
    pub error: &'a dyn std::error::Error,
}

impl Display for OperationFailed<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mapper '{}' operation for key '{}' failed: {}",
            self.mapper, self.key, self.error
        )
    }
}

impl StructuredLog for OperationFailed<'_> {
    fn log(&self) {
        tracing::error!(
            mapper = self.mapper,
            key = self.key,
            error = %self.error,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "operation_failed",
            span_name = name,
            mapper = self.mapper,
            key = self.key,
        )
    }
}

/// `process` was called without a completion path for an async operation.
///
/// # Log Level
/// `error!` - Usage error in the caller
pub struct CallbackExpected<'a> {
    pub mapper: &'a str,
    pub key: &'a str,
}

impl Display for CallbackExpected<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mapper '{}' cannot run key '{}' synchronously: operation completes asynchronously",
            self.mapper, self.key
        )
    }
}

impl StructuredLog for CallbackExpected<'_> {
    fn log(&self) {
        tracing::error!(mapper = self.mapper, key = self.key, "{}", self);
    }

    fn span(&self, name: &str) -> Span {
        tracing::error_span!(
            "callback_expected",
            span_name = name,
            mapper = self.mapper,
            key = self.key,
        )
    }
}

/// Every dispatched operation finished without error.
///
/// # Log Level
/// `info!` - Important operational event
pub struct ProcessCompleted<'a> {
    pub mapper: &'a str,
    pub mode: &'a str,
    pub dispatched: usize,
    pub duration: std::time::Duration,
}

impl Display for ProcessCompleted<'_> {
    fn fmt(&self, f: &mut Formatter) -> std::fmt::Result {
        write!(
            f,
            "Mapper '{}' completed {} operations in {:?} ({} mode)",
            self.mapper, self.dispatched, self.duration, self.mode
        )
    }
}

impl StructuredLog for ProcessCompleted<'_> {
    fn log(&self) {
        tracing::info!(
            mapper = self.mapper,
            mode = self.mode,
            dispatched = self.dispatched,
            duration_ms = self.duration.as_millis() as u64,
            "{}", self
        );
    }

    fn span(&self, name: &str) -> Span {
        tracing::info_span!(
            "process_completed",
            span_name = name,
            mapper = self.mapper,
            mode = self.mode,
            dispatched = self.dispatched,
            duration = ?self.duration,
        )
    }
}
