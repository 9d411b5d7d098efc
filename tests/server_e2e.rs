//! End-to-end tests against a bound listener.

use std::time::Duration;

use record_service::config::{LoadFailurePolicy, ServiceConfig};
use record_service::lifecycle::bootstrap;
use sdk_rust::RecordClient;

mod common;

use common::{spawn_server, write_csv, BOOKS_CSV};

fn config_for(path: &std::path::Path) -> ServiceConfig {
    let mut config = ServiceConfig::default();
    config.listener.host = "127.0.0.1".into();
    config.data.path = path.display().to_string();
    config
}

#[tokio::test]
async fn serves_records_loaded_from_disk() {
    let path = write_csv(BOOKS_CSV);
    let server = bootstrap(config_for(&path)).unwrap();
    let running = spawn_server(server).await;
    let client = RecordClient::new(&running.url());

    let health = client.health().await.expect("service unreachable");
    assert_eq!(health.status, "ok");

    let all = client.records(None).await.unwrap();
    assert_eq!(all.len(), 3);
    assert_eq!(all[0]["title"], "A");
    assert_eq!(all[2]["genre"], "Rock");

    let jazz = client.records(Some("jazz")).await.unwrap();
    assert_eq!(jazz.len(), 1);
    assert_eq!(jazz[0]["title"], "B");

    let metrics = client.metrics().await.unwrap();
    assert_eq!(metrics.data_records, 3);
    assert_eq!(metrics.metrics.requests_total, 4);

    running.shutdown.trigger();
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn concurrent_requests_are_all_counted() {
    let path = write_csv(BOOKS_CSV);
    let server = bootstrap(config_for(&path)).unwrap();
    let running = spawn_server(server).await;
    let url = running.url();

    let tasks: Vec<_> = (0..20)
        .map(|_| {
            let url = url.clone();
            tokio::spawn(async move {
                let client = RecordClient::new(&url);
                for _ in 0..10 {
                    client.records(Some("rock")).await.unwrap();
                }
            })
        })
        .collect();
    for task in tasks {
        task.await.unwrap();
    }

    let metrics = RecordClient::new(&url).metrics().await.unwrap();
    assert_eq!(metrics.metrics.records_requests, 200);
    assert_eq!(metrics.metrics.requests_total, 201);

    running.shutdown.trigger();
    let _ = std::fs::remove_file(path);
}

#[tokio::test]
async fn missing_file_with_empty_policy_still_serves() {
    let mut config = config_for(std::path::Path::new("/nonexistent/records.csv"));
    config.data.on_load_error = LoadFailurePolicy::Empty;
    let running = spawn_server(bootstrap(config).unwrap()).await;
    let client = RecordClient::new(&running.url());

    assert_eq!(client.health().await.unwrap().status, "ok");
    assert!(client.records(None).await.unwrap().is_empty());
    assert!(client.records(Some("rock")).await.unwrap().is_empty());

    running.shutdown.trigger();
}

#[tokio::test]
async fn shutdown_stops_the_server() {
    let path = write_csv(BOOKS_CSV);
    let running = spawn_server(bootstrap(config_for(&path)).unwrap()).await;

    running.shutdown.trigger();
    let result = tokio::time::timeout(Duration::from_secs(5), running.handle)
        .await
        .expect("server did not stop")
        .unwrap();
    assert!(result.is_ok());

    let _ = std::fs::remove_file(path);
}
