use std::time::Duration;

use httpmock::prelude::*;
use serde_json::json;
use stockd::pinger;

#[tokio::test]
async fn pinger_hits_the_health_url_on_each_tick() {
    let server = MockServer::start_async().await;
    let probe = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/test");
            then.status(200)
                .json_body(json!({"message": "Test API hit"}));
        })
        .await;

    let handle = pinger::spawn(server.url("/api/test"), Duration::from_millis(25));
    tokio::time::sleep(Duration::from_millis(200)).await;
    handle.stop().await;

    assert!(
        probe.hits_async().await >= 2,
        "expected at least two self-ping ticks"
    );
}

#[tokio::test]
async fn non_success_status_does_not_kill_the_task() {
    let server = MockServer::start_async().await;
    let probe = server
        .mock_async(|when, then| {
            when.method(GET).path("/api/test");
            then.status(500);
        })
        .await;

    let handle = pinger::spawn(server.url("/api/test"), Duration::from_millis(25));
    tokio::time::sleep(Duration::from_millis(200)).await;

    assert!(!handle.is_finished(), "pinger must survive error responses");
    assert!(probe.hits_async().await >= 2, "ticks must keep firing");
    handle.stop().await;
}

#[tokio::test]
async fn connection_refused_is_contained() {
    // Grab a loopback port with no listener behind it.
    let port = {
        let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
        listener.local_addr().unwrap().port()
    };

    let url = format!("http://127.0.0.1:{port}/api/test");
    let handle = pinger::spawn(url, Duration::from_millis(25));
    tokio::time::sleep(Duration::from_millis(150)).await;

    assert!(
        !handle.is_finished(),
        "network errors must be logged, not propagated"
    );
    handle.stop().await;
}

#[tokio::test]
async fn stop_is_graceful_even_mid_period() {
    // A period far longer than the test; stop must not wait for a tick.
    let handle = pinger::spawn(
        "http://127.0.0.1:1/api/test".to_string(),
        Duration::from_secs(600),
    );

    tokio::time::timeout(Duration::from_secs(1), handle.stop())
        .await
        .expect("stop() did not complete promptly");
}
