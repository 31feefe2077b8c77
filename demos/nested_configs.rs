// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use std::sync::{Arc, Mutex};

use map_config::mapper::Mapper;
use map_config::traits::{Operation, Target};
use serde_json::json;
use tracing_subscriber::EnvFilter;

/// Example application that stores related modules
#[derive(Default)]
struct App {
    related: Mutex<Vec<String>>,
}

impl App {
    fn add_related(&self, name: &str) {
        self.related.lock().unwrap().push(name.to_string());
    }
}

impl Target for App {
    fn operation(&self, name: &str) -> Option<Operation<Self>> {
        match name {
            "addRelated" => Some(Operation::sync(|app: &App, value| {
                if let Some(name) = value.as_str() {
                    app.add_related(name);
                }
                Ok(())
            })),
            _ => None,
        }
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let app = Arc::new(App::default());

    // `related.list` holds module names; anything else is ignored
    let mut related = Mapper::new(Arc::clone(&app)).with_name("related");
    related.map_with(
        "list",
        Operation::sync(|app: &App, list| {
            let Some(items) = list.as_array() else {
                return Ok(());
            };
            for item in items.iter().filter_map(|item| item.as_str()) {
                app.add_related(item);
            }
            Ok(())
        }),
    );

    let mut verb = Mapper::new(Arc::clone(&app)).with_name("verb");
    verb.map_with("related", Arc::new(related));

    let mut root = Mapper::new(Arc::clone(&app));
    root.map_with("verb", Arc::new(verb)).map("addRelated");

    println!("Understood keys: {:?}", root.keys().to_vec());

    let pkg = json!({
        "name": "map-config",
        "addRelated": "base-plugins",
        "verb": {
            "related": {"list": ["base", "base-config", "base-methods"]}
        }
    });
    root.process_async(&pkg).await?;

    println!("Related: {:?}", app.related.lock().unwrap());
    Ok(())
}
