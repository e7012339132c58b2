//! Integration tests for the options store against file-backed databases

use options_store::config::Config;
use options_store::{OptionRecord, OptionRepository, OptionsError};
use serde_json::{Value, json};
use tempfile::TempDir;

async fn file_config() -> (Config, TempDir) {
    let dir = tempfile::tempdir().unwrap();
    let config = Config::load(Some(dir.path().join("options.db"))).await.unwrap();
    (config, dir)
}

/// Unset keys are absent and yield the caller's default
#[tokio::test]
async fn test_unset_key() {
    let (config, _dir) = file_config().await;
    let options = &config.options;

    assert!(!options.exists("never.set").await.unwrap());
    assert_eq!(options.get("never.set", json!({"d": 1})).await.unwrap(), json!({"d": 1}));
    assert!(options.list().await.unwrap().is_empty());
}

/// Values of every JSON shape come back structurally equal
#[tokio::test]
async fn test_value_roundtrip() {
    let (config, _dir) = file_config().await;
    let options = &config.options;

    let values = [
        json!(null),
        json!(true),
        json!(-17),
        json!(u64::MAX),
        json!(3.25),
        json!("text with \"quotes\" and ünïcödé"),
        json!([1, "two", [3.0], {"four": 4}]),
        json!({"nested": {"deeper": {"list": [], "empty": {}}}}),
    ];

    for (i, value) in values.iter().enumerate() {
        let key = format!("value.{}", i);
        options.set(&key, value.clone()).await.unwrap();
        assert_eq!(&options.get(&key, Value::Null).await.unwrap(), value);
    }
}

/// Setting a mapping stores each pair and keeps integers as integers
#[tokio::test]
async fn test_set_mapping() {
    let (config, _dir) = file_config().await;
    let options = &config.options;

    let written = options
        .set_many(vec![("a".to_string(), json!(1)), ("b".to_string(), json!(2))])
        .await
        .unwrap();
    assert_eq!(written.len(), 2);

    let records = options.list().await.unwrap();
    assert_eq!(
        records,
        vec![OptionRecord::new("a", json!(1)), OptionRecord::new("b", json!(2))]
    );
    assert_eq!(records[0].value.as_i64(), Some(1));
    assert!(records[0].value.is_i64());
}

/// Mappings larger than SQLite's bound-parameter limit are written and returned in full
#[tokio::test]
async fn test_set_mapping_above_parameter_limit() {
    let config = Config::new_test().await.unwrap();
    let options = &config.options;

    let entries: Vec<(String, Value)> =
        (0..40_000).map(|i| (format!("k{:05}", i), json!(i))).collect();
    let written = options.set_many(entries).await.unwrap();

    assert_eq!(written.len(), 40_000);
    assert_eq!(written[0], OptionRecord::new("k00000", json!(0)));
    assert_eq!(written[39_999], OptionRecord::new("k39999", json!(39_999)));
    assert_eq!(options.count().await.unwrap(), 40_000);
}

/// Repeated sets update the single existing row
#[tokio::test]
async fn test_upsert_keeps_one_row() {
    let (config, _dir) = file_config().await;
    let options = &config.options;

    options.set("mode", json!("v1")).await.unwrap();
    options.set("mode", json!("v2")).await.unwrap();

    assert_eq!(options.count().await.unwrap(), 1);
    assert_eq!(options.get("mode", Value::Null).await.unwrap(), json!("v2"));
}

#[tokio::test]
async fn test_remove() {
    let (config, _dir) = file_config().await;
    let options = &config.options;

    options.set("gone", json!(1)).await.unwrap();
    assert!(options.remove("gone").await.unwrap());
    assert!(!options.exists("gone").await.unwrap());
    assert!(!options.remove("gone").await.unwrap());
}

#[tokio::test]
async fn test_getsert() {
    let (config, _dir) = file_config().await;
    let options = &config.options;

    assert_eq!(options.getsert("beta", json!(false)).await.unwrap(), json!(false));
    assert_eq!(options.get("beta", json!("unset")).await.unwrap(), json!(false));

    options.set("beta", json!(true)).await.unwrap();
    assert_eq!(options.getsert("beta", json!(false)).await.unwrap(), json!(true));
}

/// Data survives reopening the database file
#[tokio::test]
async fn test_values_persist_across_reload() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.db");

    {
        let config = Config::load(Some(path.clone())).await.unwrap();
        config.options.set("persisted", json!({"ok": true})).await.unwrap();
    }

    let config = Config::load(Some(path)).await.unwrap();
    assert_eq!(
        config.options.get("persisted", Value::Null).await.unwrap(),
        json!({"ok": true})
    );
}

/// Works through the trait object used by callers
#[tokio::test]
async fn test_dyn_repository() {
    let config = Config::new_test().await.unwrap();
    let repo: &dyn OptionRepository = &config.options;

    repo.set("dyn", json!([1])).await.unwrap();
    assert!(repo.exists("dyn").await.unwrap());
}

/// Concurrent sets of the same key never produce duplicate rows
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_sets_single_row() {
    let (config, _dir) = file_config().await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let options = config.options.clone();
        handles.push(tokio::spawn(async move {
            options.set("shared", json!(i)).await
        }));
    }
    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let records = config.options.list().await.unwrap();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].key, "shared");
    assert!(records[0].value.is_i64());
}

/// Concurrent getserts agree on a single stored value
#[tokio::test(flavor = "multi_thread", worker_threads = 4)]
async fn test_concurrent_getsert_agrees() {
    let (config, _dir) = file_config().await;

    let mut handles = Vec::new();
    for i in 0..8 {
        let options = config.options.clone();
        handles.push(tokio::spawn(async move {
            options.getsert("first", json!(i)).await
        }));
    }

    let mut results = Vec::new();
    for handle in handles {
        results.push(handle.await.unwrap().unwrap());
    }

    let stored = config.options.get("first", Value::Null).await.unwrap();
    assert!(results.iter().all(|value| *value == stored));
    assert_eq!(config.options.count().await.unwrap(), 1);
}

/// Rows written by something else with invalid JSON surface as serialization errors
#[tokio::test]
async fn test_corrupt_value_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("options.db");
    let config = Config::load(Some(path.clone())).await.unwrap();

    let pool = sqlx::SqlitePool::connect(&format!("sqlite://{}", path.display()))
        .await
        .unwrap();
    sqlx::query("INSERT INTO options (key, value) VALUES ('bad', '{oops')")
        .execute(&pool)
        .await
        .unwrap();

    let result = config.options.get("bad", Value::Null).await;
    assert!(matches!(result, Err(OptionsError::Serialization { ref key, .. }) if key == "bad"));

    // exists does not decode the value
    assert!(config.options.exists("bad").await.unwrap());
}
