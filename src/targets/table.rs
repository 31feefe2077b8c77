// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::HashMap;

use crate::traits::{Operation, Target};

/// A target whose operations are registered by name at runtime.
///
/// Useful when the set of operations is not known at compile time, or for
/// wiring a plain state value into a mapper without writing a `Target` impl.
/// Operations receive the table itself and reach the state via [`state`].
///
/// [`state`]: OperationTable::state
///
/// # Example
/// ```
/// use map_config::targets::OperationTable;
/// use map_config::traits::{Operation, Target};
/// use std::sync::atomic::{AtomicU64, Ordering};
///
/// let table = OperationTable::new(AtomicU64::new(0)).with_operation(
///     "add",
///     Operation::sync(|t: &OperationTable<AtomicU64>, value| {
///         t.state().fetch_add(value.as_u64().unwrap_or(0), Ordering::SeqCst);
///         Ok(())
///     }),
/// );
///
/// assert!(table.operation("add").is_some());
/// assert!(table.operation("sub").is_none());
/// ```
pub struct OperationTable<S> {
    state: S,
    operations: HashMap<String, Operation<OperationTable<S>>>,
}

impl<S> OperationTable<S> {
    pub fn new(state: S) -> Self {
        Self {
            state,
            operations: HashMap::new(),
        }
    }

    /// Builder form of [`insert`](OperationTable::insert)
    pub fn with_operation(mut self, name: impl Into<String>, op: Operation<Self>) -> Self {
        self.insert(name, op);
        self
    }

    /// Register `op` under `name`, replacing any previous operation
    pub fn insert(&mut self, name: impl Into<String>, op: Operation<Self>) {
        self.operations.insert(name.into(), op);
    }

    pub fn state(&self) -> &S {
        &self.state
    }

    pub fn contains(&self, name: &str) -> bool {
        self.operations.contains_key(name)
    }

    pub fn names(&self) -> impl Iterator<Item = &String> {
        self.operations.keys()
    }
}

impl<S: Send + Sync + 'static> Target for OperationTable<S> {
    fn operation(&self, name: &str) -> Option<Operation<Self>> {
        self.operations.get(name).cloned()
    }
}

impl<S> std::fmt::Debug for OperationTable<S> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("OperationTable")
            .field("operation_count", &self.operations.len())
            .field("operation_names", &self.operations.keys().collect::<Vec<_>>())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn noop() -> Operation<OperationTable<()>> {
        Operation::sync(|_: &OperationTable<()>, _| Ok(()))
    }

    #[test]
    fn test_registered_names_are_listed() {
        let mut table = OperationTable::new(())
            .with_operation("addDependencies", noop())
            .with_operation("addRelated", noop());
        table.insert("addRelated", noop());

        let mut names: Vec<&String> = table.names().collect();
        names.sort();

        assert_eq!(names, vec!["addDependencies", "addRelated"]);
        assert!(table.contains("addRelated"));
        assert!(!table.contains("version"));
        assert!(table.operation("version").is_none());
    }
}
