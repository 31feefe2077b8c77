// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use indexmap::IndexMap;
use std::sync::Arc;

use crate::config::consts::DEFAULT_MAPPER_NAME;
use crate::config::MapperConfig;
use crate::mapper::{Binding, KeySet};
use crate::observability::messages::mapper::{AliasRegistered, KeyRegistered, SubMapperRegistered};
use crate::observability::messages::StructuredLog;
use crate::traits::{NestedMapper, Target};

/// Maps configuration keys onto operations of a target.
///
/// A `Mapper` holds a shared handle to its target, a table of key bindings
/// and a table of aliases. Registration (`map`, `map_with`, `alias`) may be
/// repeated at any time; bindings are resolved lazily by `process` and
/// `process_async`, so the order of registration does not matter.
///
/// # Examples
///
/// ## Aliasing a key onto a target operation
/// ```
/// use map_config::mapper::Mapper;
/// use map_config::targets::OperationTable;
/// use map_config::traits::Operation;
/// use serde_json::json;
/// use std::sync::{Arc, Mutex};
///
/// let app = Arc::new(OperationTable::new(Mutex::new(Vec::new())).with_operation(
///     "log",
///     Operation::sync(|app: &OperationTable<Mutex<Vec<String>>>, value| {
///         app.state().lock().unwrap().push(value.to_string());
///         Ok(())
///     }),
/// ));
///
/// let mut mapper = Mapper::new(Arc::clone(&app));
/// mapper.alias("name", "log");
/// mapper.process(&json!({"name": "map-config", "version": "0.1.0"})).unwrap();
///
/// assert_eq!(*app.state().lock().unwrap(), vec!["\"map-config\""]);
/// ```
///
/// ## Mounting a child mapper
/// ```
/// use map_config::mapper::Mapper;
/// use std::sync::Arc;
///
/// let mut child = Mapper::new(Arc::new(()));
/// child.map("foo").map("bar");
///
/// let mut parent = Mapper::new(Arc::new(()));
/// parent.map_with("child", Arc::new(child));
///
/// assert_eq!(parent.keys().to_vec(), vec!["child.foo", "child.bar"]);
/// ```
pub struct Mapper<T> {
    pub(crate) name: String,
    pub(crate) target: Arc<T>,
    pub(crate) bindings: IndexMap<String, Binding<T>>,
    pub(crate) aliases: IndexMap<String, String>,
    pub(crate) keys: KeySet,
}

impl<T: Target> Mapper<T> {
    /// Create an empty mapper over `target`
    pub fn new(target: Arc<T>) -> Self {
        Self {
            name: DEFAULT_MAPPER_NAME.to_string(),
            target,
            bindings: IndexMap::new(),
            aliases: IndexMap::new(),
            keys: KeySet::new(),
        }
    }

    /// Create a mapper from a declarative map.
    ///
    /// String bindings become aliases; every other binding is registered
    /// as if passed to `map_with`.
    pub fn with_map<I, K, B>(target: Arc<T>, map: I) -> Self
    where
        I: IntoIterator<Item = (K, B)>,
        K: Into<String>,
        B: Into<Binding<T>>,
    {
        let mut mapper = Self::new(target);
        for (key, binding) in map {
            mapper.map_with(key, binding);
        }
        mapper
    }

    /// Create a mapper from a loaded `MapperConfig`
    pub fn from_config(target: Arc<T>, cfg: &MapperConfig) -> Self {
        let mut mapper = Self::new(target);
        if let Some(name) = &cfg.name {
            mapper.name = name.clone();
        }
        for (key, to) in &cfg.map {
            match to {
                Some(to) => mapper.alias(key.as_str(), to.as_str()),
                None => mapper.map(key.as_str()),
            };
        }
        for key in &cfg.keys {
            mapper.map(key.as_str());
        }
        mapper
    }

    /// Set the name used as provenance in errors and logs
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = name.into();
        self
    }

    /// Bind `key` to the same-named operation on the target
    pub fn map(&mut self, key: impl Into<String>) -> &mut Self {
        self.map_with(key, Binding::Target)
    }

    /// Bind `key` to an operation, an alias or a child mapper.
    ///
    /// A child mapper also contributes its keys, namespaced under `key`.
    pub fn map_with(&mut self, key: impl Into<String>, binding: impl Into<Binding<T>>) -> &mut Self {
        let key = key.into();
        match binding.into() {
            Binding::Alias(to) => return self.alias(key, to),
            Binding::Mapper(child) => {
                let sub_keys = child.keys();
                SubMapperRegistered {
                    mapper: &self.name,
                    key: &key,
                    child: child.name(),
                    sub_key_count: sub_keys.len(),
                }
                .log();
                self.aliases.shift_remove(&key);
                self.bindings.insert(key.clone(), Binding::Mapper(child));
                self.add_sub_keys(&key, &sub_keys);
            }
            binding => {
                KeyRegistered {
                    mapper: &self.name,
                    key: &key,
                    binding: binding.kind(),
                }
                .log();
                self.bindings.insert(key.clone(), binding);
                self.add_key(&key);
            }
        }
        self
    }

    /// Dispatch `from` through whatever `to` resolves to at processing time
    pub fn alias(&mut self, from: impl Into<String>, to: impl Into<String>) -> &mut Self {
        let from = from.into();
        let to = to.into();
        AliasRegistered {
            mapper: &self.name,
            from: &from,
            to: &to,
        }
        .log();
        self.add_key(&from);
        self.aliases.insert(from, to);
        self
    }

    /// Record `key` in `keys` if it is not already there
    pub fn add_key(&mut self, key: &str) -> &mut Self {
        self.keys.insert(key);
        self
    }

    /// Record `key.<sub>` for every sub key, replacing a bare `key` entry
    pub fn add_sub_keys<S: AsRef<str>>(&mut self, key: &str, sub_keys: &[S]) -> &mut Self {
        self.keys.insert_namespaced(key, sub_keys);
        self
    }
}

impl<T> Mapper<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn keys(&self) -> &KeySet {
        &self.keys
    }

    pub fn aliases(&self) -> &IndexMap<String, String> {
        &self.aliases
    }

    pub fn binding(&self, key: &str) -> Option<&Binding<T>> {
        self.bindings.get(key)
    }

    pub fn target(&self) -> &Arc<T> {
        &self.target
    }
}

impl<T> std::fmt::Debug for Mapper<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Mapper")
            .field("name", &self.name)
            .field("keys", &self.keys)
            .field("bindings", &self.bindings)
            .field("aliases", &self.aliases)
            .finish()
    }
}
