// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::collections::BTreeMap;
use std::env;
use std::sync::{Arc, Mutex};

use map_config::config::load_document;
use map_config::mapper::Mapper;
use map_config::traits::{Operation, Target};
use serde_json::{json, Value};
use tracing_subscriber::EnvFilter;

/// Example application that stores dependencies
#[derive(Default)]
struct App {
    dependencies: Mutex<BTreeMap<String, String>>,
}

impl App {
    fn add_dependency(&self, name: &str, version: &str) {
        self.dependencies
            .lock()
            .unwrap()
            .insert(name.to_string(), version.to_string());
    }
}

impl Target for App {
    fn operation(&self, name: &str) -> Option<Operation<Self>> {
        match name {
            "addDependencies" => Some(Operation::future(|app: Arc<App>, deps: Value| async move {
                let deps = deps
                    .as_object()
                    .ok_or_else(|| anyhow::anyhow!("dependencies must be an object"))?;
                for (name, version) in deps {
                    app.add_dependency(name, version.as_str().unwrap_or("*"));
                }
                Ok::<(), anyhow::Error>(())
            })),
            _ => None,
        }
    }
}

/// Usage: cargo run --example basic_app [package.json]
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let pkg = match env::args().nth(1) {
        Some(path) => load_document(path)?,
        None => json!({
            "name": "map-config",
            "devDependencies": {"base": "^0.6.7", "mocha": "*"}
        }),
    };

    let app = Arc::new(App::default());
    let mut mapper = Mapper::new(Arc::clone(&app));
    mapper.alias("devDependencies", "addDependencies");

    mapper.process_async(&pkg).await?;

    println!("Dependencies:");
    for (name, version) in app.dependencies.lock().unwrap().iter() {
        println!("  {} {}", name, version);
    }

    Ok(())
}
