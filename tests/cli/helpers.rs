use std::net::TcpListener;
use std::process::{Command, Output};

use serde_json::{Value, json};
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// Run the `jjstats` binary against `api_url` off the async runtime.
#[allow(clippy::expect_used)]
pub async fn run_jjstats(api_url: &str, args: &[&str]) -> Output {
    let api_url = api_url.to_string();
    let args: Vec<String> = args.iter().map(|a| a.to_string()).collect();
    tokio::task::spawn_blocking(move || {
        Command::new(env!("CARGO_BIN_EXE_jjstats"))
            .args(&args)
            .env("JJSTATS_API_URL", api_url)
            .env_remove("JJSTATS_FORMAT")
            .env_remove("RUST_LOG")
            .output()
            .expect("failed to run jjstats binary")
    })
    .await
    .expect("jjstats runner panicked")
}

/// Base URL of a local port with nothing listening on it.
#[allow(clippy::expect_used)]
pub fn unused_local_url() -> String {
    let listener = TcpListener::bind("127.0.0.1:0").expect("failed to bind ephemeral port");
    let addr = listener.local_addr().expect("listener has no local address");
    drop(listener);
    format!("http://{addr}")
}

pub fn stdout(output: &Output) -> String {
    String::from_utf8_lossy(&output.stdout).into_owned()
}

pub fn stderr(output: &Output) -> String {
    String::from_utf8_lossy(&output.stderr).into_owned()
}

pub async fn mount_json(server: &MockServer, route: &str, body: Value) {
    Mock::given(method("GET"))
        .and(path(route))
        .respond_with(ResponseTemplate::new(200).set_body_json(body))
        .mount(server)
        .await;
}

pub async fn seeded_server() -> MockServer {
    let server = MockServer::start().await;
    mount_json(
        &server,
        "/api/novels",
        json!([
            { "id": "a", "title": "Moonlit", "novelId": 1, "authorId": 11, "listName": "Weekly", "inList": false },
            { "id": "b", "title": "Tide", "novelId": 2, "authorId": 22, "listName": "Monthly", "inList": true },
            { "id": "c", "title": "Ember", "novelId": 3, "authorId": 33, "listName": "Weekly", "inList": true },
        ]),
    )
    .await;
    mount_json(
        &server,
        "/api/novel/1/detail",
        json!({ "novelId": 1, "title": "Moonlit" }),
    )
    .await;
    mount_json(
        &server,
        "/api/novel/1/statistics",
        json!([
            stat(1, "2024-03-01T12:00:00Z", 5),
            stat(1, "2024-03-02T12:00:00Z", 0),
            stat(1, "2024-03-03T12:00:00Z", 8),
        ]),
    )
    .await;
    mount_json(
        &server,
        "/api/novel/3/statistics",
        json!([stat(3, "2024-03-01T12:00:00Z", 2)]),
    )
    .await;
    server
}

fn stat(novel_id: i64, at: &str, reviews: i64) -> Value {
    json!({
        "id": format!("{novel_id}-{at}"),
        "novelId": novel_id,
        "firstChapterClicks": 0,
        "lastChapterClicks": 0,
        "reviews": reviews,
        "collected": 0,
        "rewards": 0,
        "createdAt": at,
        "updatedAt": at,
    })
}
