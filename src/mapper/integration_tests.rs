// Copyright (c) 2025 Steve Wagner (ciroque@live.com)
// SPDX-License-Identifier: MIT

use serde_json::{json, Value};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use crate::config::MapperConfig;
use crate::errors::MapperError;
use crate::mapper::{Binding, Mapper};
use crate::traits::{Operation, Target};

/// End-to-end tests for registration and processing against a real target
#[cfg(test)]
mod tests {
    use super::*;

    /// Records every call as `"<operation> <value>"`
    #[derive(Default)]
    struct App {
        output: Mutex<Vec<String>>,
    }

    impl App {
        fn record(&self, operation: &str, value: &Value) {
            self.output
                .lock()
                .unwrap()
                .push(format!("{} {}", operation, value));
        }

        fn output(&self) -> Vec<String> {
            self.output.lock().unwrap().clone()
        }
    }

    impl Target for App {
        fn operation(&self, name: &str) -> Option<Operation<Self>> {
            match name {
                "foo" => Some(Operation::sync(|app: &App, value| {
                    app.record("foo", value);
                    Ok(())
                })),
                "bar" => Some(Operation::sync(|app: &App, value| {
                    app.record("bar", value);
                    Ok(())
                })),
                "fail" => Some(Operation::sync(|_: &App, _| Err(anyhow::anyhow!("boom")))),
                "later" => Some(Operation::future(|app: Arc<App>, value| async move {
                    tokio::time::sleep(Duration::from_millis(5)).await;
                    app.record("later", &value);
                    Ok(())
                })),
                _ => None,
            }
        }
    }

    fn app() -> Arc<App> {
        Arc::new(App::default())
    }

    #[test]
    fn test_initial_map_alias_passes_value_and_target() {
        let app = app();
        let mapper = Mapper::with_map(
            Arc::clone(&app),
            vec![("foo", Binding::from("bar")), ("baz", Binding::from("bang"))],
        );

        mapper.process(&json!({"foo": {"baz": "beep"}})).unwrap();

        assert_eq!(app.output(), vec![r#"bar {"baz":"beep"}"#]);
    }

    #[test]
    fn test_initial_map_operation_is_bound_to_target() {
        let app = app();
        let expected = Arc::as_ptr(&app) as usize;
        let called = Arc::new(Mutex::new(false));
        let called_in_op = Arc::clone(&called);

        let mapper = Mapper::with_map(
            Arc::clone(&app),
            vec![(
                "foo",
                Binding::from(Operation::sync(move |target: &App, value| {
                    assert_eq!(value, &json!({"baz": "beep"}));
                    assert_eq!(target as *const App as usize, expected);
                    *called_in_op.lock().unwrap() = true;
                    Ok(())
                })),
            )],
        );

        mapper.process(&json!({"foo": {"baz": "beep"}})).unwrap();
        assert!(*called.lock().unwrap());
    }

    #[test]
    fn test_same_named_operation_is_invoked_once() {
        let app = app();
        let mut mapper = Mapper::new(Arc::clone(&app));
        mapper.map("foo");

        mapper.process(&json!({"foo": {"baz": "beep"}})).unwrap();

        assert_eq!(app.output(), vec![r#"foo {"baz":"beep"}"#]);
    }

    #[test]
    fn test_nothing_is_dispatched_without_matching_registration() {
        let app = app();
        let mut mapper = Mapper::new(Arc::clone(&app));
        mapper.map_with("foo", "bar");

        mapper.process(&Value::Null).unwrap();
        mapper.process(&json!({"homepage": "https://example.com"})).unwrap();
        Mapper::new(Arc::clone(&app))
            .process(&json!({"bar": {"baz": "foo"}}))
            .unwrap();

        assert!(app.output().is_empty());
    }

    #[test]
    fn test_alias_is_order_independent() {
        for alias_first in [true, false] {
            let app = app();
            let hits = Arc::new(Mutex::new(Vec::new()));
            let hits_in_op = Arc::clone(&hits);
            let op = Operation::sync(move |_: &App, value: &Value| {
                hits_in_op.lock().unwrap().push(value.clone());
                Ok(())
            });

            let mut mapper = Mapper::new(Arc::clone(&app));
            if alias_first {
                mapper.alias("a", "bar").map_with("bar", op);
            } else {
                mapper.map_with("bar", op).alias("a", "bar");
            }

            mapper.process(&json!({"a": 7})).unwrap();

            assert_eq!(*hits.lock().unwrap(), vec![json!(7)], "alias_first={}", alias_first);
            assert!(app.output().is_empty(), "explicit binding should win over target");
        }
    }

    #[test]
    fn test_child_mapper_receives_sub_object() {
        let app = app();
        let mut child = Mapper::new(Arc::clone(&app));
        child.map("foo").map("bar");

        let mut parent = Mapper::new(Arc::new(()));
        parent.map_with("child", Arc::new(child));

        parent
            .process(&json!({
                "child": {
                    "foo": {"baz": "beep"},
                    "bar": {"bang": "boop"}
                }
            }))
            .unwrap();

        assert_eq!(
            app.output(),
            vec![r#"foo {"baz":"beep"}"#, r#"bar {"bang":"boop"}"#]
        );
        assert_eq!(parent.keys().to_vec(), vec!["child.foo", "child.bar"]);
    }

    #[test]
    fn test_closures_may_drive_their_own_mappers() {
        let app = app();
        let mut inner = Mapper::new(Arc::clone(&app));
        inner.map("bar");
        let inner = Arc::new(inner);

        let mut outer = Mapper::new(Arc::clone(&app));
        outer.map_with(
            "two",
            Operation::sync(move |_: &App, value: &Value| {
                inner.process(value)?;
                Ok(())
            }),
        );

        outer.process(&json!({"two": {"bar": 1}})).unwrap();
        outer.process(&json!({})).unwrap();

        assert_eq!(app.output(), vec!["bar 1"]);
    }

    #[test]
    fn test_thrown_error_raises_with_provenance_and_stops() {
        let app = app();
        let mut mapper = Mapper::new(Arc::clone(&app));
        mapper.map("fail").map("foo");

        let err = mapper
            .process(&json!({"fail": true, "foo": 1}))
            .unwrap_err();

        assert_eq!(err.to_string(), "map-config#process: boom");
        assert_eq!(err.key(), "fail");
        assert!(app.output().is_empty(), "no dispatch past the failing key");
    }

    #[test]
    fn test_nested_thrown_error_keeps_both_provenances() {
        let mut child = Mapper::new(app()).with_name("child");
        child.map("fail");

        let mut parent = Mapper::new(Arc::new(())).with_name("parent");
        parent.map_with("sub", Arc::new(child));

        let err = parent.process(&json!({"sub": {"fail": 1}})).unwrap_err();

        assert_eq!(err.to_string(), "parent#process: child#process: boom");
        assert_eq!(err.key(), "sub");
    }

    #[test]
    fn test_async_operation_without_callback_is_usage_error() {
        let mut mapper = Mapper::new(Arc::new(()));
        mapper.map_with(
            "foo",
            Operation::future(|_: Arc<()>, _| async { Err(anyhow::anyhow!("x")) }),
        );

        let err = mapper.process(&json!({"foo": 1})).unwrap_err();

        assert!(err.is_usage_error());
        assert!(err.to_string().starts_with("map-config#process"));
    }

    #[test]
    fn test_usage_error_from_child_is_not_rewrapped() {
        let mut child = Mapper::new(app()).with_name("child");
        child.map("later");

        let mut parent = Mapper::new(Arc::new(())).with_name("parent");
        parent.map_with("sub", Arc::new(child));

        let err = parent.process(&json!({"sub": {"later": 1}})).unwrap_err();

        match err {
            MapperError::CallbackExpected { mapper, key } => {
                assert_eq!(mapper, "child");
                assert_eq!(key, "later");
            }
            other => panic!("expected CallbackExpected, got {:?}", other),
        }
    }

    #[tokio::test]
    async fn test_reported_error_is_delivered_verbatim() {
        let mut mapper = Mapper::new(Arc::new(()));
        mapper.map_with(
            "foo",
            Operation::future(|_: Arc<()>, _| async { Err(anyhow::anyhow!("x")) }),
        );

        let err = mapper.process_async(&json!({"foo": 1})).await.unwrap_err();

        assert_eq!(err.to_string(), "x");
        assert!(matches!(err, MapperError::Operation { .. }));
    }

    #[tokio::test]
    async fn test_async_mode_runs_sync_and_async_operations() {
        let app = app();
        let expected = Arc::as_ptr(&app) as usize;
        let mut mapper = Mapper::new(Arc::clone(&app));
        mapper.map("later").map("foo").map_with(
            "check",
            Operation::future(move |target: Arc<App>, _| async move {
                assert_eq!(Arc::as_ptr(&target) as usize, expected);
                Ok(())
            }),
        );

        mapper
            .process_async(&json!({"later": 1, "foo": 2, "check": null}))
            .await
            .unwrap();

        assert_eq!(app.output(), vec!["foo 2", "later 1"]);
    }

    #[tokio::test]
    async fn test_suspended_operations_join_in_any_order() {
        let completions = Arc::new(Mutex::new(Vec::new()));
        let delayed = |label: &'static str, delay_ms: u64, completions: Arc<Mutex<Vec<&'static str>>>| {
            Operation::future(move |_: Arc<()>, _| {
                let completions = Arc::clone(&completions);
                async move {
                    tokio::time::sleep(Duration::from_millis(delay_ms)).await;
                    completions.lock().unwrap().push(label);
                    Ok(())
                }
            })
        };

        let mut mapper = Mapper::new(Arc::new(()));
        mapper
            .map_with("a", delayed("a", 40, Arc::clone(&completions)))
            .map_with("b", delayed("b", 5, Arc::clone(&completions)));

        mapper.process_async(&json!({"a": 1, "b": 2})).await.unwrap();

        assert_eq!(*completions.lock().unwrap(), vec!["b", "a"]);
    }

    #[tokio::test]
    async fn test_async_sync_failure_stops_further_dispatch() {
        let app = app();
        let mut mapper = Mapper::new(Arc::clone(&app));
        mapper.map("foo").map("fail").map("bar");

        let err = mapper
            .process_async(&json!({"foo": 1, "fail": 2, "bar": 3}))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "boom");
        assert_eq!(err.key(), "fail");
        assert_eq!(app.output(), vec!["foo 1"]);
    }

    #[tokio::test]
    async fn test_nested_async_configs() {
        let app = app();

        let mut list = Mapper::new(Arc::clone(&app)).with_name("related");
        list.map_with("list", Operation::future(|app: Arc<App>, value| async move {
            for item in value.as_array().cloned().unwrap_or_default() {
                tokio::task::yield_now().await;
                app.record("related", &item);
            }
            Ok(())
        }));

        let mut verb = Mapper::new(Arc::clone(&app)).with_name("verb");
        verb.map_with("related", Arc::new(list));

        let mut root = Mapper::new(Arc::clone(&app));
        root.map_with("verb", Arc::new(verb));

        assert_eq!(root.keys().to_vec(), vec!["verb.related.list"]);

        root.process_async(&json!({
            "name": "map-config",
            "verb": {"related": {"list": ["base", "base-config"]}}
        }))
        .await
        .unwrap();

        assert_eq!(app.output(), vec![r#"related "base""#, r#"related "base-config""#]);
    }

    #[tokio::test]
    async fn test_nested_reported_error_surfaces_message() {
        let mut child = Mapper::new(Arc::new(())).with_name("child");
        child.map_with(
            "deep",
            Operation::future(|_: Arc<()>, _| async { Err(anyhow::anyhow!("deep failure")) }),
        );

        let mut parent = Mapper::new(Arc::new(()));
        parent.map_with("child", Arc::new(child));

        let err = parent
            .process_async(&json!({"child": {"deep": true}}))
            .await
            .unwrap_err();

        assert_eq!(err.to_string(), "deep failure");
        assert_eq!(err.key(), "child");
    }

    #[test]
    fn test_from_config_registers_aliases_and_keys() {
        let app = app();
        let cfg: MapperConfig = serde_yaml::from_str(
            r#"
name: package
map:
  devDependencies: bar
  foo: ~
keys: [fail]
"#,
        )
        .unwrap();

        let mapper = Mapper::from_config(Arc::clone(&app), &cfg);

        assert_eq!(mapper.name(), "package");
        assert_eq!(mapper.keys().to_vec(), vec!["devDependencies", "foo", "fail"]);

        mapper
            .process(&json!({"devDependencies": {"mocha": "*"}, "foo": 1}))
            .unwrap();
        assert_eq!(app.output(), vec![r#"bar {"mocha":"*"}"#, "foo 1"]);

        let err = mapper.process(&json!({"fail": 1})).unwrap_err();
        assert_eq!(err.to_string(), "package#process: boom");
    }
}
