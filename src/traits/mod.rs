// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

pub mod nested;
pub mod operation;
pub mod target;

pub use nested::NestedMapper;
pub use operation::{AsyncOperationFn, Operation, SyncOperationFn};
pub use target::Target;
