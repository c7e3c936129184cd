//! End-to-end tests for the full parklotd stack.
//!
//! Each test spins up the complete application (in-memory `SQLite`, real repo,
//! real service, real axum router) and exercises the HTTP layer via
//! `tower::ServiceExt::oneshot` — no TCP port is bound.

use axum::body::Body;
use axum::http::{Request, StatusCode};
use http_body_util::BodyExt;
use parklot_adapter_http_axum::router;
use parklot_adapter_http_axum::state::AppState;
use parklot_adapter_storage_sqlite_sqlx::{Config, SqliteVehicleRepository};
use parklot_app::services::parking_service::ParkingService;
use tower::ServiceExt;

/// Build a fully-wired router backed by an in-memory `SQLite` database.
async fn app() -> axum::Router {
    let db = Config {
        database_url: "sqlite::memory:".to_string(),
    }
    .build()
    .await
    .expect("in-memory database should initialise");

    let repo = SqliteVehicleRepository::new(db.pool().clone());
    router::build(AppState::new(ParkingService::new(repo)))
}

async fn call(app: &axum::Router, request: Request<Body>) -> (StatusCode, serde_json::Value) {
    let resp = app.clone().oneshot(request).await.unwrap();
    let status = resp.status();
    let bytes = resp.into_body().collect().await.unwrap().to_bytes();
    let body = serde_json::from_slice(&bytes).unwrap_or(serde_json::Value::Null);
    (status, body)
}

fn enter(plate: &str, vehicle_class: &str) -> Request<Body> {
    Request::builder()
        .method("POST")
        .uri("/api/parking/entries")
        .header("content-type", "application/json")
        .body(Body::from(
            serde_json::json!({ "plate": plate, "vehicle_class": vehicle_class }).to_string(),
        ))
        .unwrap()
}

fn exit(plate: &str) -> Request<Body> {
    Request::builder()
        .method("PUT")
        .uri(format!("/api/parking/exits/{plate}"))
        .body(Body::empty())
        .unwrap()
}

fn get(uri: &str) -> Request<Body> {
    Request::builder().uri(uri).body(Body::empty()).unwrap()
}

// ---------------------------------------------------------------------------
// Health check
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_ok_when_health_check_called() {
    let resp = app().await.oneshot(get("/health")).await.unwrap();
    assert_eq!(resp.status(), StatusCode::OK);
}

// ---------------------------------------------------------------------------
// Entry
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_register_entry() {
    let app = app().await;

    let (status, body) = call(&app, enter("ABC123", "car")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["plate"], "ABC123");
    assert_eq!(body["vehicle_class"], "car");
    assert_eq!(body["active"], true);
    assert!(body["entry_time"].is_string());
    assert!(body["exit_time"].is_null());
    assert!(body["cost"].is_null());
}

#[tokio::test]
async fn should_reject_invalid_plate_and_store_nothing() {
    let app = app().await;

    let (status, _) = call(&app, enter("AB12", "car")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, history) = call(&app, get("/api/parking/history")).await;
    assert_eq!(history.as_array().unwrap().len(), 0);
}

#[tokio::test]
async fn should_reject_duplicate_entry() {
    let app = app().await;

    let (status, _) = call(&app, enter("DUP001", "motorcycle")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, body) = call(&app, enter("DUP001", "motorcycle")).await;
    assert_eq!(status, StatusCode::CONFLICT);
    assert_eq!(body["code"], 409);

    let (_, active) = call(&app, get("/api/parking/active")).await;
    let active = active.as_array().unwrap();
    assert_eq!(active.len(), 1);
    assert_eq!(active[0]["plate"], "DUP001");
}

// ---------------------------------------------------------------------------
// Full flow: enter → list → cost refused → exit → cost → history
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_complete_parking_flow() {
    let app = app().await;

    let (status, _) = call(&app, enter("flow123", "car")).await;
    assert_eq!(status, StatusCode::CREATED);

    let (status, active) = call(&app, get("/api/parking/active")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(active[0]["plate"], "FLOW123");
    assert_eq!(active[0]["active"], true);

    let (status, _) = call(&app, get("/api/parking/cost/FLOW123")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (status, exited) = call(&app, exit("FLOW123")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(exited["active"], false);
    assert!(exited["exit_time"].is_string());
    assert_eq!(exited["cost"], 1000);

    let (status, cost) = call(&app, get("/api/parking/cost/FLOW123")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(cost, 1000);

    let (_, active) = call(&app, get("/api/parking/active")).await;
    assert_eq!(active.as_array().unwrap().len(), 0);

    let (_, history) = call(&app, get("/api/parking/history")).await;
    let history = history.as_array().unwrap();
    assert_eq!(history.len(), 1);
    assert_eq!(history[0]["active"], false);
}

#[tokio::test]
async fn should_allow_reentry_after_exit() {
    let app = app().await;

    call(&app, enter("BACK01", "car")).await;
    call(&app, exit("BACK01")).await;

    let (status, body) = call(&app, enter("BACK01", "motorcycle")).await;
    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["vehicle_class"], "motorcycle");

    let (status, _) = call(&app, get("/api/parking/cost/BACK01")).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
}

// ---------------------------------------------------------------------------
// Not found
// ---------------------------------------------------------------------------

#[tokio::test]
async fn should_return_not_found_for_unknown_plate() {
    let app = app().await;

    let (status, _) = call(&app, exit("GHOST1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) = call(&app, get("/api/parking/cost/GHOST1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_not_found_when_exiting_twice() {
    let app = app().await;

    call(&app, enter("TWICE1", "car")).await;
    let (status, _) = call(&app, exit("TWICE1")).await;
    assert_eq!(status, StatusCode::OK);

    let (status, _) = call(&app, exit("TWICE1")).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
}

#[tokio::test]
async fn should_return_empty_lists_for_fresh_database() {
    let app = app().await;

    let (status, active) = call(&app, get("/api/parking/active")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(active, serde_json::json!([]));

    let (status, history) = call(&app, get("/api/parking/history")).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(history, serde_json::json!([]));
}
