//! End-to-end checks of the public routes over a real socket.

use serde_json::Value;
use std::time::Duration;

use grometis_app::lifecycle::ShutdownReason;

mod common;

#[tokio::test]
async fn test_root_with_default_build() {
    let service = common::start_service(grometis_app::BuildInfo::default()).await;
    let client = common::client();

    let res = client.get(service.url("/")).send().await.expect("service unreachable");
    assert_eq!(res.status(), 200);

    let body: Value = res.json().await.unwrap();
    assert_eq!(body["status"], "running");
    assert_eq!(body["build"]["buildNumber"], "dev");
    assert_eq!(body["build"]["gitCommit"], "unknown");
    assert_eq!(body["build"]["environment"], "development");

    service.shutdown.trigger(ShutdownReason::Requested);
}

#[tokio::test]
async fn test_health_uptime_never_decreases() {
    let service = common::start_service(common::fixed_build()).await;
    let client = common::client();

    let mut last = 0.0_f64;
    for _ in 0..5 {
        let res = client.get(service.url("/health")).send().await.unwrap();
        assert_eq!(res.status(), 200);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["status"], "healthy");

        let uptime = body["uptime"].as_f64().expect("uptime is numeric");
        assert!(uptime >= 0.0);
        assert!(uptime >= last, "uptime went backwards: {} < {}", uptime, last);
        last = uptime;
        tokio::time::sleep(Duration::from_millis(10)).await;
    }

    service.shutdown.trigger(ShutdownReason::Requested);
}

#[tokio::test]
async fn test_info_and_root_embed_same_build() {
    let service = common::start_service(common::fixed_build()).await;
    let client = common::client();

    let root: Value = client.get(service.url("/")).send().await.unwrap().json().await.unwrap();
    let info: Value = client.get(service.url("/info")).send().await.unwrap().json().await.unwrap();

    assert_eq!(root["build"], info["build"]);
    assert_eq!(info["build"]["buildNumber"], "128");
    assert_eq!(info["application"], "GrOMEtiS App");
    assert_eq!(info["version"], "1.0.0");
    assert!(info["memory"].is_object());
    assert!(info["platform"].as_str().is_some());
    assert!(info["arch"].as_str().is_some());

    service.shutdown.trigger(ShutdownReason::Requested);
}

#[tokio::test]
async fn test_data_is_stable() {
    let service = common::start_service(common::fixed_build()).await;
    let client = common::client();

    for _ in 0..3 {
        let body: Value = client
            .get(service.url("/api/data"))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        let items = body["data"].as_array().unwrap();
        assert_eq!(items.len(), 3);
        for (idx, item) in items.iter().enumerate() {
            assert_eq!(item["id"].as_u64(), Some(idx as u64 + 1));
        }
        assert!(body["timestamp"].as_str().is_some());
    }

    service.shutdown.trigger(ShutdownReason::Requested);
}

#[tokio::test]
async fn test_unknown_route_echoes_path() {
    let service = common::start_service(common::fixed_build()).await;
    let client = common::client();

    for path in ["/does-not-exist", "/api", "/api/data/extra"] {
        let res = client.get(service.url(path)).send().await.unwrap();
        assert_eq!(res.status(), 404);
        let body: Value = res.json().await.unwrap();
        assert_eq!(body["error"], "Route not found");
        assert_eq!(body["path"], path);
    }

    service.shutdown.trigger(ShutdownReason::Requested);
}

#[tokio::test]
async fn test_malformed_json_does_not_crash() {
    let service = common::start_service(common::fixed_build()).await;
    let client = common::client();

    let res = client
        .post(service.url("/api/data"))
        .header("content-type", "application/json")
        .body("{not json")
        .send()
        .await
        .unwrap();
    assert_eq!(res.status(), 400);

    let res = client.get(service.url("/health")).send().await.unwrap();
    assert_eq!(res.status(), 200, "service should keep serving");

    service.shutdown.trigger(ShutdownReason::Requested);
}

#[tokio::test]
async fn test_no_requests_after_shutdown() {
    let service = common::start_service(common::fixed_build()).await;
    let client = common::client();

    let health_url = service.url("/health");
    let res = client.get(&health_url).send().await.unwrap();
    assert_eq!(res.status(), 200);

    service.shutdown.trigger(ShutdownReason::Requested);
    let reason = tokio::time::timeout(Duration::from_secs(1), service.handle)
        .await
        .expect("server should stop within a second")
        .unwrap()
        .unwrap();
    assert_eq!(reason, Some(ShutdownReason::Requested));

    assert!(client.get(&health_url).send().await.is_err());
}
