//! Statistical load test for `/random-error`.

use std::time::Instant;

use reqwest::StatusCode;

mod common;

#[tokio::test]
async fn test_random_error_rate_over_ten_thousand_calls() {
    // 1. Start the service with the stock 30% error probability
    let server = common::start_default_server().await;

    // 2. Fire requests from concurrent tasks
    let concurrency = 20;
    let requests_per_task = 500;
    let total_requests = concurrency * requests_per_task;

    let client = common::client();
    let start = Instant::now();

    let mut tasks = Vec::new();
    for _ in 0..concurrency {
        let client = client.clone();
        let url = server.url("/random-error");
        tasks.push(tokio::spawn(async move {
            let mut failures = 0u64;
            for _ in 0..requests_per_task {
                let res = client.get(&url).send().await.unwrap();
                match res.status() {
                    StatusCode::OK => {}
                    StatusCode::INTERNAL_SERVER_ERROR => failures += 1,
                    other => panic!("unexpected status {other}"),
                }
            }
            failures
        }));
    }

    let mut failures = 0u64;
    for task in tasks {
        failures += task.await.unwrap();
    }

    let duration = start.elapsed();
    let observed = failures as f64 / total_requests as f64;

    println!("\n--- Random Error Results ---");
    println!("Total Requests: {}", total_requests);
    println!("Failures:       {}", failures);
    println!("Observed Rate:  {:.4}", observed);
    println!("Total Duration: {:?}", duration);
    println!("----------------------------\n");

    // 3. Every call counted exactly once; errors counted only on 500s
    assert_eq!(server.counters.total_requests(), total_requests as u64);
    assert_eq!(server.counters.error_count(), failures);

    // σ ≈ 0.0046 at n = 10_000; allow five of them.
    assert!(
        (observed - 0.30).abs() < 0.023,
        "observed error rate {observed} inconsistent with 0.30"
    );

    let body = common::metrics(&client, &server).await;
    let rate = body["errorRate"].as_f64().unwrap();
    assert!((rate - observed * 100.0).abs() < 1e-9);
}
