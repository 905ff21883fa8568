//! Shared utilities for integration and load testing.

use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use tokio::net::TcpListener;
use tokio::task::JoinHandle;

use error_generator::config::{FaultConfig, GeneratorConfig};
use error_generator::faults::FaultInjector;
use error_generator::observability::Counters;
use error_generator::HttpServer;

/// A server running on an ephemeral local port.
pub struct TestServer {
    pub addr: SocketAddr,
    pub counters: Arc<Counters>,
    pub faults: Arc<FaultInjector>,
    handle: JoinHandle<()>,
}

impl TestServer {
    pub fn url(&self, path: &str) -> String {
        format!("http://{}{}", self.addr, path)
    }
}

impl Drop for TestServer {
    fn drop(&mut self) {
        self.handle.abort();
    }
}

/// Start the error generator with the given fault settings.
pub async fn start_server(faults: FaultConfig) -> TestServer {
    let mut config = GeneratorConfig::default();
    config.listener.bind_address = "127.0.0.1:0".into();
    config.faults = faults;

    let listener = TcpListener::bind(&config.listener.bind_address).await.unwrap();
    let addr = listener.local_addr().unwrap();
    let server = HttpServer::new(config);
    let counters = server.counters();
    let faults = server.faults();

    let handle = tokio::spawn(async move {
        let _ = server.run(listener).await;
    });

    tokio::time::sleep(Duration::from_millis(50)).await;

    TestServer {
        addr,
        counters,
        faults,
        handle,
    }
}

/// Start the error generator with stock settings.
pub async fn start_default_server() -> TestServer {
    start_server(FaultConfig::default()).await
}

pub fn client() -> reqwest::Client {
    reqwest::Client::builder().no_proxy().build().unwrap()
}

/// Fetch `/metrics` as JSON.
pub async fn metrics(client: &reqwest::Client, server: &TestServer) -> serde_json::Value {
    client
        .get(server.url("/metrics"))
        .send()
        .await
        .expect("server unreachable")
        .json()
        .await
        .unwrap()
}
