// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

mod binding;
mod dispatch;
mod keys;
mod registry;

#[cfg(test)]
mod integration_tests;

pub use binding::Binding;
pub use keys::KeySet;
pub use registry::Mapper;
