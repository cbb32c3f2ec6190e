use jjstats::domain::{FetchError, MetricKey, NovelId, derive_series, group};
use jjstats::infrastructure::client::JjClient;
use reqwest::StatusCode;
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

use crate::helpers::{mount_json, novel, snapshot, unused_local_url};

#[tokio::test]
async fn lists_novels_in_api_order() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/novels",
        json!([
            novel(1, "Moonlit", "Weekly", false),
            novel(2, "Tide", "Monthly", true),
            novel(3, "Ember", "Weekly", true),
        ]),
    )
    .await;

    let client = JjClient::from_base_url(&server.uri()).unwrap();
    let novels = client.novels().list().await.unwrap();

    assert_eq!(novels.len(), 3);
    assert_eq!(novels[0].title, "Moonlit");

    let grouping = group(&novels);
    assert_eq!(grouping.names, vec!["Weekly", "Monthly"]);
    let weekly: Vec<i64> = grouping
        .in_list_first("Weekly")
        .iter()
        .map(|r| r.novel_id.into_inner())
        .collect();
    assert_eq!(weekly, vec![3, 1]);
}

#[tokio::test]
async fn fetches_detail_and_statistics() {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/novel/42/detail",
        json!({ "novelId": 42, "title": "Moonlit", "authorId": 7, "status": "ongoing" }),
    )
    .await;
    mount_json(
        &server,
        "/api/novel/42/statistics",
        json!([snapshot(42, 1, 5), snapshot(42, 2, 0), snapshot(42, 3, 8)]),
    )
    .await;

    let client = JjClient::from_base_url(&server.uri()).unwrap();
    let id = NovelId::new(42);
    let detail = client.novels().detail(id).await.unwrap();
    let stats = client.novels().statistics(id).await.unwrap();

    assert_eq!(detail.heading(), "42 Moonlit");
    let series = derive_series(&stats, MetricKey::Reviews);
    assert_eq!(series.values, vec![5, 0, 8]);
    assert_eq!(series.deltas, vec![0, 0, 8]);
    assert_eq!(series.labels[0], "Mar 1, 2024 12:00 PM");
}

#[tokio::test]
async fn non_success_status_is_reported() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/novel/9/detail"))
        .respond_with(
            ResponseTemplate::new(404).set_body_json(json!({ "message": "novel not found" })),
        )
        .mount(&server)
        .await;

    let client = JjClient::from_base_url(&server.uri()).unwrap();
    let err = client.novels().detail(NovelId::new(9)).await.unwrap_err();

    match err {
        FetchError::Status { status, message } => {
            assert_eq!(status, StatusCode::NOT_FOUND);
            assert_eq!(message, "novel not found");
        }
        other => panic!("expected status error, got {other:?}"),
    }
}

#[tokio::test]
async fn plain_text_error_body_is_kept() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/novels"))
        .respond_with(ResponseTemplate::new(500).set_body_string("upstream exploded\n"))
        .mount(&server)
        .await;

    let client = JjClient::from_base_url(&server.uri()).unwrap();
    let err = client.novels().list().await.unwrap_err();

    assert_eq!(err.status(), Some(StatusCode::INTERNAL_SERVER_ERROR));
    assert_eq!(
        err.to_string(),
        "request failed (500 Internal Server Error): upstream exploded"
    );
}

#[tokio::test]
async fn malformed_json_is_a_decode_error() {
    let server = MockServer::start().await;
    Mock::given(method("GET"))
        .and(path("/api/novels"))
        .respond_with(ResponseTemplate::new(200).set_body_string("[{\"id\": "))
        .mount(&server)
        .await;

    let client = JjClient::from_base_url(&server.uri()).unwrap();
    let err = client.novels().list().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
    assert_eq!(err.kind(), "decode");
}

#[tokio::test]
async fn wrong_shape_is_a_decode_error() {
    let server = MockServer::start().await;
    mount_json(&server, "/api/novels", json!({ "novels": [] })).await;

    let client = JjClient::from_base_url(&server.uri()).unwrap();
    let err = client.novels().list().await.unwrap_err();

    assert!(matches!(err, FetchError::Decode(_)), "got {err:?}");
}

#[tokio::test]
async fn unreachable_server_is_a_network_error() {
    let client = JjClient::from_base_url(&unused_local_url()).unwrap();
    let err = client.novels().list().await.unwrap_err();

    assert!(matches!(err, FetchError::Network(_)), "got {err:?}");
    assert_eq!(err.kind(), "network");
}

#[tokio::test]
async fn base_path_prefix_is_preserved() {
    let server = MockServer::start().await;
    mount_json(&server, "/mirror/api/novels", json!([])).await;

    let client = JjClient::from_base_url(&format!("{}/mirror", server.uri())).unwrap();
    let novels = client.novels().list().await.unwrap();

    assert!(novels.is_empty());
    assert!(group(&novels).is_empty());
}
