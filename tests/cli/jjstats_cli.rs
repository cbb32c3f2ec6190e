use serde_json::Value;

use crate::helpers::{run_jjstats, seeded_server, stderr, stdout, unused_local_url};

#[tokio::test]
async fn novels_table_shows_first_tab() {
    let server = seeded_server().await;
    let output = run_jjstats(&server.uri(), &["novels"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("[Weekly (2)]  Monthly (1) "), "got: {out}");
    assert!(out.contains("Moonlit"));
    assert!(out.contains("Ember"));
    assert!(!out.contains("Tide"));
}

#[tokio::test]
async fn novels_json_orders_in_list_first() {
    let server = seeded_server().await;
    let output = run_jjstats(
        &server.uri(),
        &["novels", "--format", "json", "--in-list-first"],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let view: Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(view["selected"], "Weekly");
    assert_eq!(view["status"]["state"], "ready");
    let ids: Vec<i64> = view["rows"]
        .as_array()
        .unwrap()
        .iter()
        .map(|r| r["novelId"].as_i64().unwrap())
        .collect();
    assert_eq!(ids, vec![3, 1]);
}

#[tokio::test]
async fn stats_json_contains_series() {
    let server = seeded_server().await;
    let output = run_jjstats(
        &server.uri(),
        &["stats", "--novel-id", "1", "--format", "json"],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let view: Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(view["heading"], "1 Moonlit");
    assert_eq!(view["metric"], "reviews");
    assert_eq!(view["series"]["values"], serde_json::json!([5, 0, 8]));
    assert_eq!(view["series"]["deltas"], serde_json::json!([0, 0, 8]));
}

#[tokio::test]
async fn stats_table_draws_bars() {
    let server = seeded_server().await;
    let output = run_jjstats(&server.uri(), &["stats", "--novel-id", "1", "--width", "8"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.starts_with("1 Moonlit\n"));
    assert!(out.contains("Statistic: Reviews (emerald)"));
    assert!(out.contains("Mar 3, 2024 12:00 PM  ████████  8  +8"), "got: {out}");
}

#[tokio::test]
async fn missing_statistics_fail_the_command() {
    let server = seeded_server().await;
    let output = run_jjstats(&server.uri(), &["stats", "--novel-id", "404"]).await;

    assert!(!output.status.success());
    assert!(stdout(&output).contains("novel statistics: failed to load (http status)"));
    assert!(stderr(&output).contains("404"));
}

#[tokio::test]
async fn dashboard_lists_latest_values() {
    let server = seeded_server().await;
    let output = run_jjstats(
        &server.uri(),
        &["dashboard", "--list", "Weekly", "--format", "json"],
    )
    .await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let view: Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(view["metricLabel"], "Reviews");
    let rows = view["tabs"][0]["rows"].as_array().unwrap();
    assert_eq!(rows[0]["novelId"], 3);
    assert_eq!(rows[0]["latest"], 2);
    assert_eq!(rows[1]["novelId"], 1);
    assert_eq!(rows[1]["latest"], 8);
    assert_eq!(rows[1]["trend"], 8);
}

#[tokio::test]
async fn metrics_command_needs_no_server() {
    let output = run_jjstats("http://127.0.0.1:9", &["metrics"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let out = stdout(&output);
    assert!(out.contains("firstChapterClicks  First Chapter Clicks  orange"));
}

#[tokio::test]
async fn metrics_command_ignores_invalid_api_url() {
    let output = run_jjstats("not a url", &["metrics", "--format", "json"]).await;

    assert!(output.status.success(), "stderr: {}", stderr(&output));
    let options: Value = serde_json::from_str(&stdout(&output)).expect("valid JSON");
    assert_eq!(options.as_array().map(Vec::len), Some(5));
    assert_eq!(options[0]["key"], "reviews");
}

#[tokio::test]
async fn invalid_api_url_fails_network_commands() {
    let output = run_jjstats("not a url", &["novels"]).await;

    assert!(!output.status.success());
    assert!(stderr(&output).contains("not a url"), "stderr: {}", stderr(&output));
}

#[tokio::test]
async fn unreachable_api_exits_non_zero() {
    let output = run_jjstats(&unused_local_url(), &["novels"]).await;

    assert!(!output.status.success());
    assert!(stdout(&output).contains("novel list: failed to load (network)"));
}
