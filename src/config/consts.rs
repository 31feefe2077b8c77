// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

/// Name given to a mapper that was not explicitly named
pub const DEFAULT_MAPPER_NAME: &str = "map-config";
/// Joins a parent key and a sub-mapper key, e.g. `child.foo`
pub const KEY_SEPARATOR: &str = ".";
/// Appended to the mapper name to mark errors raised out of `process`
pub const PROCESS_TAG: &str = "#process";
