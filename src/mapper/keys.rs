// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexSet;

use crate::config::consts::KEY_SEPARATOR;

/// Ordered, duplicate-free list of the keys a mapper understands.
///
/// Keys contributed by a child mapper are stored namespaced under the parent
/// key (`child.foo`), which lets callers inspect deep configuration shapes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct KeySet(IndexSet<String>);

impl KeySet {
    pub fn new() -> Self {
        Self(IndexSet::new())
    }

    /// Append `key` unless it is already present
    pub fn insert(&mut self, key: &str) -> bool {
        if self.0.contains(key) {
            return false;
        }
        self.0.insert(key.to_string())
    }

    /// Replace a bare `key` with `key.<sub>` for every sub key.
    ///
    /// The bare entry is removed if present; namespaced entries already in the
    /// set keep their position and are not repeated.
    pub fn insert_namespaced<S: AsRef<str>>(&mut self, key: &str, sub_keys: &[S]) {
        self.0.shift_remove(key);
        for sub_key in sub_keys {
            let namespaced = format!("{}{}{}", key, KEY_SEPARATOR, sub_key.as_ref());
            self.0.insert(namespaced);
        }
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}
