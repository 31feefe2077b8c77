// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

//! Replaying a configuration object against a mapper's bindings.
//!
//! `process` is the no-callback mode: every operation must finish before it
//! returns, and an asynchronous operation is a usage error. `process_async`
//! is the callback mode: synchronous operations run inline in configuration
//! order, asynchronous operations and child mappers are spawned onto the
//! tokio runtime, and the returned future resolves once all of them have
//! completed or the first one has failed.

use async_trait::async_trait;
use futures::stream::{FuturesUnordered, StreamExt};
use serde_json::Value;
use std::collections::HashSet;
use std::sync::Arc;
use std::time::Instant;
use tokio::task::JoinHandle;
use tracing::Instrument;

use crate::errors::MapperError;
use crate::mapper::{Binding, Mapper};
use crate::observability::messages::dispatch::{
    CallbackExpected, KeySkipped, OperationDispatched, OperationFailed, ProcessCompleted,
    ProcessStarted,
};
use crate::observability::messages::StructuredLog;
use crate::traits::{AsyncOperationFn, NestedMapper, Operation, SyncOperationFn, Target};

const SYNC_MODE: &str = "sync";
const ASYNC_MODE: &str = "async";

/// A binding after alias and target lookup
enum Resolved<T> {
    Sync(Arc<SyncOperationFn<T>>),
    Async(Arc<AsyncOperationFn<T>>),
    Nested(Arc<dyn NestedMapper>),
}

impl<T> Resolved<T> {
    fn kind(&self) -> &'static str {
        match self {
            Resolved::Sync(_) => "sync",
            Resolved::Async(_) => "async",
            Resolved::Nested(_) => "mapper",
        }
    }
}

impl<T> From<Operation<T>> for Resolved<T> {
    fn from(op: Operation<T>) -> Self {
        match op {
            Operation::Sync(f) => Resolved::Sync(f),
            Operation::Async(f) => Resolved::Async(f),
        }
    }
}

/// Steps of a synchronous run; async operations never get this far
enum Step<T> {
    Sync(Arc<SyncOperationFn<T>>),
    Nested(Arc<dyn NestedMapper>),
}

/// Own entries of a configuration object; anything else counts as empty
fn entries(config: &Value) -> Vec<(&str, &Value)> {
    match config {
        Value::Object(map) => map.iter().map(|(k, v)| (k.as_str(), v)).collect(),
        _ => Vec::new(),
    }
}

impl<T: Target> Mapper<T> {
    /// Process `config` synchronously.
    ///
    /// Every present key is resolved before any operation runs; if one of
    /// them resolves to an asynchronous operation this fails with
    /// [`MapperError::CallbackExpected`] and nothing is invoked. The first
    /// failing operation stops processing and is returned as
    /// [`MapperError::Process`], prefixed with `<name>#process`.
    pub fn process(&self, config: &Value) -> Result<&Self, MapperError> {
        let entries = entries(config);
        let started = ProcessStarted {
            mapper: &self.name,
            mode: SYNC_MODE,
            key_count: entries.len(),
        };
        let span = started.span("process");
        let _guard = span.enter();
        started.log();
        let start_time = Instant::now();

        let mut steps = Vec::with_capacity(entries.len());
        for (key, value) in entries {
            let step = match self.resolve(key) {
                Some(Resolved::Sync(f)) => Step::Sync(f),
                Some(Resolved::Nested(child)) => Step::Nested(child),
                Some(Resolved::Async(_)) => {
                    CallbackExpected {
                        mapper: &self.name,
                        key,
                    }
                    .log();
                    return Err(MapperError::CallbackExpected {
                        mapper: self.name.clone(),
                        key: key.to_string(),
                    });
                }
                None => {
                    KeySkipped {
                        mapper: &self.name,
                        key,
                    }
                    .log();
                    continue;
                }
            };
            steps.push((key, value, step));
        }

        let dispatched = steps.len();
        for (key, value, step) in steps {
            let result = match step {
                Step::Sync(f) => {
                    self.log_dispatch(key, "sync");
                    f(&*self.target, value).map_err(|e| self.process_error(key, e.into()))
                }
                Step::Nested(child) => {
                    self.log_dispatch(key, "mapper");
                    child.process_nested(value).map_err(|e| {
                        if e.is_usage_error() {
                            e
                        } else {
                            self.process_error(key, Box::new(e))
                        }
                    })
                }
            };

            if let Err(error) = result {
                self.log_failure(key, &error);
                return Err(error);
            }
        }

        ProcessCompleted {
            mapper: &self.name,
            mode: SYNC_MODE,
            dispatched,
            duration: start_time.elapsed(),
        }
        .log();

        Ok(self)
    }

    /// Process `config`, completing once every dispatched operation has.
    ///
    /// Errors are delivered verbatim as [`MapperError::Operation`], whether
    /// the operation returned them directly or through its future. On the
    /// first error no further keys are dispatched; operations already
    /// spawned keep running in the background but no longer affect the
    /// result. Must be called from within a tokio runtime.
    pub async fn process_async(&self, config: &Value) -> Result<(), MapperError> {
        let entries = entries(config);
        let started = ProcessStarted {
            mapper: &self.name,
            mode: ASYNC_MODE,
            key_count: entries.len(),
        };
        let span = started.span("process");
        started.log();

        self.dispatch_async(entries).instrument(span).await
    }

    async fn dispatch_async(&self, entries: Vec<(&str, &Value)>) -> Result<(), MapperError> {
        let start_time = Instant::now();
        let mut pending = FuturesUnordered::new();
        let mut dispatched = 0;

        for (key, value) in entries {
            let Some(resolved) = self.resolve(key) else {
                KeySkipped {
                    mapper: &self.name,
                    key,
                }
                .log();
                continue;
            };

            self.log_dispatch(key, resolved.kind());
            dispatched += 1;

            match resolved {
                Resolved::Sync(f) => {
                    if let Err(e) = f(&*self.target, value) {
                        let error = MapperError::Operation {
                            key: key.to_string(),
                            source: e.into(),
                        };
                        self.log_failure(key, &error);
                        return Err(error);
                    }
                }
                Resolved::Async(f) => {
                    let operation = f(Arc::clone(&self.target), value.clone());
                    let owned_key = key.to_string();
                    let handle = tokio::spawn(
                        async move {
                            operation.await.map_err(|e| MapperError::Operation {
                                key: owned_key,
                                source: e.into(),
                            })
                        }
                        .in_current_span(),
                    );
                    pending.push(settle(key.to_string(), handle));
                }
                Resolved::Nested(child) => {
                    let child_config = value.clone();
                    let owned_key = key.to_string();
                    let handle = tokio::spawn(
                        async move {
                            child
                                .process_nested_async(child_config)
                                .await
                                .map_err(|e| MapperError::Operation {
                                    key: owned_key,
                                    source: Box::new(e),
                                })
                        }
                        .in_current_span(),
                    );
                    pending.push(settle(key.to_string(), handle));
                }
            }
        }

        while let Some(result) = pending.next().await {
            if let Err(error) = result {
                self.log_failure(error.key(), &error);
                return Err(error);
            }
        }

        ProcessCompleted {
            mapper: &self.name,
            mode: ASYNC_MODE,
            dispatched,
            duration: start_time.elapsed(),
        }
        .log();

        Ok(())
    }

    /// Resolve `key` to something callable.
    ///
    /// Precedence for each key visited: explicit operation or child mapper,
    /// then alias, then the same-named target operation. Alias chains are
    /// followed; a cycle resolves to nothing. Keys that were never
    /// registered resolve to nothing even if the target has such an
    /// operation.
    fn resolve(&self, key: &str) -> Option<Resolved<T>> {
        if !self.bindings.contains_key(key) && !self.aliases.contains_key(key) {
            return None;
        }

        let mut visited = HashSet::new();
        let mut current = key;
        loop {
            if !visited.insert(current) {
                return None;
            }

            match self.bindings.get(current) {
                Some(Binding::Operation(op)) => return Some(op.clone().into()),
                Some(Binding::Mapper(child)) => return Some(Resolved::Nested(Arc::clone(child))),
                // string bindings are stored in `aliases`, never here
                _ => {}
            }

            match self.aliases.get(current) {
                Some(next) => current = next.as_str(),
                None => return self.target.operation(current).map(Resolved::from),
            }
        }
    }

    fn process_error(&self, key: &str, source: crate::errors::BoxError) -> MapperError {
        MapperError::Process {
            mapper: self.name.clone(),
            key: key.to_string(),
            source,
        }
    }

    fn log_dispatch(&self, key: &str, kind: &str) {
        OperationDispatched {
            mapper: &self.name,
            key,
            kind,
        }
        .log();
    }

    fn log_failure(&self, key: &str, error: &MapperError) {
        OperationFailed {
            mapper: &self.name,
            key,
            error,
        }
        .log();
    }
}

/// Wait for a spawned operation, mapping a lost task onto its key
async fn settle(key: String, handle: JoinHandle<Result<(), MapperError>>) -> Result<(), MapperError> {
    match handle.await {
        Ok(result) => result,
        Err(join_error) => Err(MapperError::TaskFailed {
            key,
            message: join_error.to_string(),
        }),
    }
}

#[async_trait]
impl<T: Target> NestedMapper for Mapper<T> {
    fn name(&self) -> &str {
        &self.name
    }

    fn keys(&self) -> Vec<String> {
        self.keys.to_vec()
    }

    fn process_nested(&self, config: &Value) -> Result<(), MapperError> {
        self.process(config).map(|_| ())
    }

    async fn process_nested_async(self: Arc<Self>, config: Value) -> Result<(), MapperError> {
        self.process_async(&config).await
    }
}
