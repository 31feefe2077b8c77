// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod config;     // declarative maps + document loading
pub mod errors;     // error handling
pub mod mapper;     // registration + dispatch
pub mod observability;
pub mod targets;    // ready-made targets
pub mod traits;     // unified abstractions
