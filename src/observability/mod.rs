// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Observability module for structured logging and tracing.
//!
//! Diagnostic output goes through message structs that implement `Display`
//! and [`messages::StructuredLog`], so log text lives in one place instead of
//! being scattered as format strings across the mapper.
//!
//! # Architecture
//!
//! Messages are organized by concern:
//! * `messages::mapper` - key, alias and sub-mapper registration
//! * `messages::dispatch` - `process` lifecycle and per-key dispatch
//!
//! # Usage
//!
//! ```rust
//! use map_config::observability::messages::dispatch::KeySkipped;
//!
//! let msg = KeySkipped {
//!     mapper: "map-config",
//!     key: "homepage",
//! };
//!
//! tracing::trace!("{}", msg);
//! ```

pub mod messages;
