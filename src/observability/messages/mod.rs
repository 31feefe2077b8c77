// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Centralized message types for structured logging.
//!
//! * `mapper` - registration events
//! * `dispatch` - processing events
//!
//! # Usage Pattern
//!
//! ```rust
//! use map_config::observability::messages::{dispatch::ProcessStarted, StructuredLog};
//!
//! let msg = ProcessStarted {
//!     mapper: "map-config",
//!     mode: "sync",
//!     key_count: 3,
//! };
//!
//! let span = msg.span("process");
//! let _guard = span.enter();
//! msg.log();
//! ```

use tracing::Span;

pub mod dispatch;
pub mod mapper;

/// A message that knows its own log level and structured fields.
pub trait StructuredLog {
    /// Emit the message as a tracing event at its documented level
    fn log(&self);

    /// Build a span carrying the message fields
    fn span(&self, name: &str) -> Span;
}
