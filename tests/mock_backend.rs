use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    routing::{get, post},
    Json, Router,
};
use chart_builder::api::ApiError;
use chart_builder::dashboard::{load_series, submit_value, SubmitError};
use chart_builder::series::InputError;
use chart_builder::session::Session;
use chart_builder::ApiClient;
use serde::Deserialize;
use serde_json::json;
use std::collections::HashMap;
use std::process::{Child, Command, Stdio};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::time::sleep;

/// Responses are picked by user id; `requests` counts every hit.
#[derive(Clone, Default)]
struct MockState {
    requests: Arc<AtomicUsize>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct AddBody {
    user_id: String,
    current_date_stock: i64,
}

async fn get_stock(
    State(state): State<MockState>,
    Query(params): Query<HashMap<String, String>>,
) -> axum::response::Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    match params.get("userId").map(String::as_str) {
        Some("broken") => (StatusCode::INTERNAL_SERVER_ERROR, "boom").into_response(),
        Some("created") => (StatusCode::CREATED, Json(json!({ "stock": [] }))).into_response(),
        Some("no-stock") => Json(json!({})).into_response(),
        Some("garbage") => "not json".into_response(),
        _ => Json(json!({
            "stock": [
                { "date": "2026-01-05T12:00:00Z", "value": 2 },
                { "value": 4 },
                { "value": 6 }
            ]
        }))
        .into_response(),
    }
}

async fn add_stock(State(state): State<MockState>, Json(body): Json<AddBody>) -> axum::response::Response {
    state.requests.fetch_add(1, Ordering::SeqCst);
    if body.user_id == "broken" {
        return StatusCode::BAD_GATEWAY.into_response();
    }
    Json(json!({
        "stock": [
            { "value": 1 },
            { "value": body.current_date_stock }
        ]
    }))
    .into_response()
}

async fn login() -> StatusCode {
    StatusCode::UNAUTHORIZED
}

async fn spawn_mock() -> (String, MockState) {
    let state = MockState::default();
    let app = Router::new()
        .route("/api/v1/get-stock", get(get_stock))
        .route("/api/v1/add-stock", post(add_stock))
        .route("/api/v1/login", post(login))
        .with_state(state.clone());
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    (format!("http://{addr}"), state)
}

fn session(user_id: &str) -> Session {
    Session {
        user_id: user_id.to_string(),
    }
}

#[tokio::test]
async fn load_series_normalizes_records() {
    let (base_url, _) = spawn_mock().await;
    let api = ApiClient::new(base_url);

    let series = load_series(&api, &session("u-1")).await.unwrap();
    let labels: Vec<&str> = series.points().iter().map(|p| p.date.as_str()).collect();
    assert_eq!(labels, ["1/5/2026", "Day 2", "Day 3"]);
}

#[tokio::test]
async fn missing_stock_field_is_empty_series() {
    let (base_url, _) = spawn_mock().await;
    let api = ApiClient::new(base_url);

    let series = load_series(&api, &session("no-stock")).await.unwrap();
    assert!(series.is_empty());
}

#[tokio::test]
async fn non_200_and_bad_bodies_are_errors() {
    let (base_url, _) = spawn_mock().await;
    let api = ApiClient::new(base_url);

    assert!(matches!(
        api.get_stock("broken").await,
        Err(ApiError::Status(StatusCode::INTERNAL_SERVER_ERROR))
    ));
    assert!(matches!(
        api.get_stock("created").await,
        Err(ApiError::Status(StatusCode::CREATED))
    ));
    assert!(matches!(api.get_stock("garbage").await, Err(ApiError::Decode(_))));
    assert!(matches!(
        api.login("ada@example.com", "nope").await,
        Err(ApiError::Status(StatusCode::UNAUTHORIZED))
    ));
}

#[tokio::test]
async fn unreachable_backend_is_transport_error() {
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let api = ApiClient::new(format!("http://127.0.0.1:{port}"));
    assert!(matches!(api.get_stock("u-1").await, Err(ApiError::Transport(_))));
}

#[tokio::test]
async fn submit_value_replaces_series_with_response() {
    let (base_url, state) = spawn_mock().await;
    let api = ApiClient::new(base_url);
    let loaded = load_series(&api, &session("u-1")).await.unwrap();
    assert_eq!(loaded.len(), 3);

    let series = submit_value(&api, &session("u-1"), " 12 ").await.unwrap();
    assert_eq!(series.len(), 2);
    assert_eq!(series.points()[1].value, 12.0);
    assert_eq!(state.requests.load(Ordering::SeqCst), 2);
}

#[tokio::test]
async fn invalid_input_never_reaches_backend() {
    let (base_url, state) = spawn_mock().await;
    let api = ApiClient::new(base_url);
    for raw in ["", "   ", "abc", "4five", "1e3", "9007199254740992"] {
        let result = submit_value(&api, &session("u-1"), raw).await;
        assert!(matches!(result, Err(SubmitError::Input(_))), "{raw:?} accepted");
    }
    assert!(matches!(
        submit_value(&api, &session("u-1"), "").await,
        Err(SubmitError::Input(InputError::Empty))
    ));
    assert_eq!(state.requests.load(Ordering::SeqCst), 0);
}

#[tokio::test]
async fn failed_add_is_reported_as_api_error() {
    let (base_url, _) = spawn_mock().await;
    let api = ApiClient::new(base_url);
    let result = submit_value(&api, &session("broken"), "3").await;
    assert!(matches!(result, Err(SubmitError::Api(ApiError::Status(StatusCode::BAD_GATEWAY)))));
}

struct AppProcess(Child);

impl Drop for AppProcess {
    fn drop(&mut self) {
        let _ = self.0.kill();
        let _ = self.0.wait();
    }
}

#[tokio::test]
async fn dashboard_stays_empty_when_backend_fails() {
    let (base_url, _) = spawn_mock().await;
    let listener = std::net::TcpListener::bind("127.0.0.1:0").unwrap();
    let port = listener.local_addr().unwrap().port();
    drop(listener);

    let mut data_path = std::env::temp_dir();
    data_path.push(format!("chart_builder_mock_{}_{port}.json", std::process::id()));

    let _app = AppProcess(
        Command::new(env!("CARGO_BIN_EXE_chart_builder"))
            .env("PORT", port.to_string())
            .env("API_URL", &base_url)
            .env("APP_DATA_PATH", &data_path)
            .env_remove("APP_DEMO_USER")
            .stdout(Stdio::null())
            .stderr(Stdio::inherit())
            .spawn()
            .expect("failed to spawn app"),
    );

    let client = reqwest::Client::new();
    let app_url = format!("http://127.0.0.1:{port}");
    let deadline = Instant::now() + Duration::from_secs(5);
    let html = loop {
        let attempt = client
            .get(format!("{app_url}/dashboard"))
            .header(reqwest::header::COOKIE, "userId=broken")
            .send()
            .await;
        if let Ok(response) = attempt {
            if response.status().is_success() {
                break response.text().await.unwrap();
            }
        }
        if Instant::now() > deadline {
            panic!("app did not become ready");
        }
        sleep(Duration::from_millis(100)).await;
    };

    assert!(html.contains("No data yet"));
    assert!(!html.contains("<svg"));
    assert!(!html.contains("stat-count"));
}
