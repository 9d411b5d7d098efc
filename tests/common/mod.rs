//! Shared utilities for integration tests.

#![allow(dead_code)]

use std::net::SocketAddr;
use std::path::PathBuf;

use axum::body::Body;
use axum::http::{Request, Response};
use record_service::config::ServiceConfig;
use record_service::data::RecordStore;
use record_service::http::HttpServer;
use record_service::lifecycle::Shutdown;
use serde_json::Value;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

/// The three-row example used throughout the tests.
pub const BOOKS_CSV: &str = "title,genre\nA,rock\nB,jazz\nC,Rock\n";

/// Write `contents` to a fresh file under the temp dir.
pub fn write_csv(contents: &str) -> PathBuf {
    let path = std::env::temp_dir().join(format!("record-service-{}.csv", uuid::Uuid::new_v4()));
    std::fs::write(&path, contents).unwrap();
    path
}

pub fn store(contents: &str) -> RecordStore {
    RecordStore::from_reader(contents.as_bytes()).unwrap()
}

pub fn server(config: ServiceConfig, contents: &str) -> HttpServer {
    HttpServer::new(config, store(contents))
}

pub fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

pub async fn body_json(response: Response<Body>) -> Value {
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    serde_json::from_slice(&bytes).unwrap()
}

/// A server bound to an ephemeral localhost port.
pub struct RunningServer {
    pub addr: SocketAddr,
    pub shutdown: Shutdown,
    pub handle: JoinHandle<Result<(), std::io::Error>>,
}

impl RunningServer {
    pub fn url(&self) -> String {
        format!("http://{}", self.addr)
    }
}

pub async fn spawn_server(server: HttpServer) -> RunningServer {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    let shutdown = Shutdown::new();
    let rx = shutdown.subscribe();
    let handle = tokio::spawn(async move { server.run(listener, rx).await });

    RunningServer {
        addr,
        shutdown,
        handle,
    }
}
