// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use crate::traits::Operation;

/// An application object whose named operations a mapper can dispatch to.
///
/// Implementors expose their operations by name, usually with a `match`:
///
/// ```
/// use map_config::traits::{Operation, Target};
/// use std::sync::Mutex;
///
/// #[derive(Default)]
/// struct App {
///     related: Mutex<Vec<String>>,
/// }
///
/// impl Target for App {
///     fn operation(&self, name: &str) -> Option<Operation<Self>> {
///         match name {
///             "addRelated" => Some(Operation::sync(|app: &App, value| {
///                 if let Some(name) = value.as_str() {
///                     app.related.lock().unwrap().push(name.to_string());
///                 }
///                 Ok(())
///             })),
///             _ => None,
///         }
///     }
/// }
///
/// assert!(App::default().operation("addRelated").is_some());
/// assert!(App::default().operation("missing").is_none());
/// ```
pub trait Target: Sized + Send + Sync + 'static {
    /// Look up the operation registered under `name`, if any
    fn operation(&self, name: &str) -> Option<Operation<Self>>;
}

/// A target with no operations, for mappers that only use explicit bindings
impl Target for () {
    fn operation(&self, _name: &str) -> Option<Operation<Self>> {
        None
    }
}
