// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use futures::future::{BoxFuture, FutureExt};
use serde_json::Value;
use std::future::Future;
use std::sync::Arc;

/// Operation that finishes before returning
pub type SyncOperationFn<T> = dyn Fn(&T, &Value) -> anyhow::Result<()> + Send + Sync;

/// Operation that finishes when its future resolves
pub type AsyncOperationFn<T> =
    dyn Fn(Arc<T>, Value) -> BoxFuture<'static, anyhow::Result<()>> + Send + Sync;

/// A callable the mapper dispatches a configuration value to.
///
/// The target is always handed to the operation explicitly. Synchronous
/// operations borrow it; asynchronous ones receive a shared handle so their
/// future can outlive the `process_async` call that spawned it.
///
/// # Examples
/// ```
/// use map_config::traits::Operation;
/// use std::sync::atomic::{AtomicUsize, Ordering};
///
/// struct Counter(AtomicUsize);
///
/// let bump = Operation::sync(|counter: &Counter, value| {
///     let by = value.as_u64().unwrap_or(1) as usize;
///     counter.0.fetch_add(by, Ordering::SeqCst);
///     Ok(())
/// });
///
/// assert!(!bump.is_async());
/// ```
pub enum Operation<T> {
    Sync(Arc<SyncOperationFn<T>>),
    Async(Arc<AsyncOperationFn<T>>),
}

impl<T> Operation<T> {
    /// Wrap a closure that completes synchronously
    pub fn sync<F>(f: F) -> Self
    where
        F: Fn(&T, &Value) -> anyhow::Result<()> + Send + Sync + 'static,
    {
        Operation::Sync(Arc::new(f))
    }

    /// Wrap a closure returning a future; the future is the completion signal
    pub fn future<F, Fut>(f: F) -> Self
    where
        F: Fn(Arc<T>, Value) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = anyhow::Result<()>> + Send + 'static,
    {
        Operation::Async(Arc::new(move |target, value| f(target, value).boxed()))
    }

    pub fn is_async(&self) -> bool {
        matches!(self, Operation::Async(_))
    }

    /// Short label used in log output
    pub fn kind(&self) -> &'static str {
        match self {
            Operation::Sync(_) => "sync",
            Operation::Async(_) => "async",
        }
    }
}

impl<T> Clone for Operation<T> {
    fn clone(&self) -> Self {
        match self {
            Operation::Sync(f) => Operation::Sync(Arc::clone(f)),
            Operation::Async(f) => Operation::Async(Arc::clone(f)),
        }
    }
}

impl<T> std::fmt::Debug for Operation<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("Operation").field(&self.kind()).finish()
    }
}
