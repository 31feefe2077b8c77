// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use async_trait::async_trait;
use serde_json::Value;
use std::sync::Arc;

use crate::errors::MapperError;

/// A mapper mounted under a key of another mapper.
///
/// The parent hands the whole sub-object at that key to the child, exactly as
/// it would hand a value to an operation. The child's target type is erased,
/// so a parent may mount children built around different targets.
#[async_trait]
pub trait NestedMapper: Send + Sync {
    /// Name used as provenance in errors and logs
    fn name(&self) -> &str;

    /// Keys registered on the child, in registration order
    fn keys(&self) -> Vec<String>;

    /// Process `config` synchronously (no completion path)
    fn process_nested(&self, config: &Value) -> Result<(), MapperError>;

    /// Process `config`, resolving once every dispatched operation completes
    async fn process_nested_async(self: Arc<Self>, config: Value) -> Result<(), MapperError>;
}
