// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::Arc;

use crate::mapper::Mapper;
use crate::traits::{NestedMapper, Operation, Target};

/// What a configuration key is bound to.
///
/// Bindings are accepted as-is at registration time and only resolved when a
/// configuration is processed, so an alias may point at a key that is mapped
/// later, and a same-named target operation may be missing without error.
pub enum Binding<T> {
    /// Same-named operation on the target
    Target,
    /// Dispatch through whatever the named key resolves to
    Alias(String),
    /// Explicit operation
    Operation(Operation<T>),
    /// Child mapper receiving the whole sub-object
    Mapper(Arc<dyn NestedMapper>),
}

impl<T> Binding<T> {
    /// Short label used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Binding::Target => "target",
            Binding::Alias(_) => "alias",
            Binding::Operation(op) => op.kind(),
            Binding::Mapper(_) => "mapper",
        }
    }
}

impl<T> Clone for Binding<T> {
    fn clone(&self) -> Self {
        match self {
            Binding::Target => Binding::Target,
            Binding::Alias(to) => Binding::Alias(to.clone()),
            Binding::Operation(op) => Binding::Operation(op.clone()),
            Binding::Mapper(child) => Binding::Mapper(Arc::clone(child)),
        }
    }
}

impl<T> std::fmt::Debug for Binding<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Binding::Target => f.write_str("Target"),
            Binding::Alias(to) => f.debug_tuple("Alias").field(to).finish(),
            Binding::Operation(op) => f.debug_tuple("Operation").field(&op.kind()).finish(),
            Binding::Mapper(child) => f.debug_tuple("Mapper").field(&child.name()).finish(),
        }
    }
}

impl<T> From<&str> for Binding<T> {
    fn from(to: &str) -> Self {
        Binding::Alias(to.to_string())
    }
}

impl<T> From<String> for Binding<T> {
    fn from(to: String) -> Self {
        Binding::Alias(to)
    }
}

impl<T> From<Operation<T>> for Binding<T> {
    fn from(op: Operation<T>) -> Self {
        Binding::Operation(op)
    }
}

impl<T> From<Arc<dyn NestedMapper>> for Binding<T> {
    fn from(child: Arc<dyn NestedMapper>) -> Self {
        Binding::Mapper(child)
    }
}

impl<T, U: Target> From<Arc<Mapper<U>>> for Binding<T> {
    fn from(child: Arc<Mapper<U>>) -> Self {
        Binding::Mapper(child)
    }
}
