//! Integration tests for the HTTP surface.
//!
//! Each test boots the full router on an ephemeral port with a temporary
//! SQLite directory, a mock bus, and a mock local reader, then talks to
//! it over a real socket.

use lotgate_bus::{AnyPublisher, GateTrigger, MockBus};
use lotgate_directory::{Database, DatabaseConfig, SqliteUserDirectory, UserDirectory};
use lotgate_gateway::{AppState, router};
use lotgate_hardware::{AnyReader, LocalScanner, mock::MockReaderHandle};
use lotgate_verify::VerificationCoordinator;
use reqwest::StatusCode;
use std::sync::Arc;
use std::time::Duration;
use tempfile::TempDir;

struct TestGateway {
    base: String,
    bus: MockBus,
    reader: MockReaderHandle,
    coordinator: VerificationCoordinator<SqliteUserDirectory>,
    directory: Arc<SqliteUserDirectory>,
    _dir: TempDir,
}

async fn spawn_gateway() -> TestGateway {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("gateway.db");
    let db = Database::new(DatabaseConfig::new(path.to_str().unwrap()))
        .await
        .unwrap();
    let directory = Arc::new(SqliteUserDirectory::new(db.pool().clone()));
    let coordinator = VerificationCoordinator::new(Arc::clone(&directory));

    let bus = MockBus::new();
    let gate = GateTrigger::new(Arc::new(AnyPublisher::Mock(bus.clone())));

    let (reader, reader_handle) = lotgate_hardware::mock::MockReader::new();
    let scanner = LocalScanner::new(AnyReader::Mock(reader), Duration::from_millis(500));

    let state = AppState {
        coordinator: coordinator.clone(),
        directory: Arc::clone(&directory),
        gate,
        scanner,
        bus_scan_wait: Duration::from_millis(300),
    };

    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router(state)).await.unwrap();
    });

    TestGateway {
        base: format!("http://{addr}"),
        bus,
        reader: reader_handle,
        coordinator,
        directory,
        _dir: dir,
    }
}

fn client() -> reqwest::Client {
    // Redirects stay visible so the notice contract can be asserted.
    reqwest::Client::builder()
        .redirect(reqwest::redirect::Policy::none())
        .build()
        .unwrap()
}

#[tokio::test]
async fn test_check_verification_starts_not_verified() {
    let gw = spawn_gateway().await;

    let body: serde_json::Value = client()
        .get(format!("{}/check_verification", gw.base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["status"], "not_verified");
    assert!(body.get("name").is_none());
}

#[tokio::test]
async fn test_verify_known_tag_redirects_to_parking_status() {
    let gw = spawn_gateway().await;
    let tag = "ab12cd34".parse().unwrap();
    gw.directory.add_user(&tag, "Alice").await.unwrap();

    let resp = client()
        .post(format!("{}/verify_user_action", gw.base))
        .form(&[("rfid_tag", "AB12CD34")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    assert_eq!(resp.headers()["location"], "/parking_status");

    let body: serde_json::Value = client()
        .get(format!("{}/check_verification", gw.base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["status"], "verified");
    assert_eq!(body["name"], "Alice");
}

#[tokio::test]
async fn test_verify_unknown_tag_redirects_back_with_notice() {
    let gw = spawn_gateway().await;

    let resp = client()
        .post(format!("{}/verify_user_action", gw.base))
        .form(&[("rfid_tag", "deadbeef")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers()["location"].to_str().unwrap();
    assert!(location.starts_with("/verify_user?notice="));
}

#[tokio::test]
async fn test_add_user_then_verify() {
    let gw = spawn_gateway().await;

    let resp = client()
        .post(format!("{}/add_user_action", gw.base))
        .form(&[("rfid_tag", "4FA9B2C1"), ("name", "Bob")])
        .send()
        .await
        .unwrap();
    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers()["location"].to_str().unwrap();
    assert!(location.starts_with("/?notice="));

    // Tag was stored lower-cased; verification matches either casing.
    assert!(gw.coordinator.verify_by_tag("4fa9b2c1").await.unwrap());
}

#[tokio::test]
async fn test_add_user_rejects_malformed_tag() {
    let gw = spawn_gateway().await;

    let resp = client()
        .post(format!("{}/add_user_action", gw.base))
        .form(&[("rfid_tag", "not a tag"), ("name", "Mallory")])
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers()["location"].to_str().unwrap();
    assert!(location.starts_with("/add_user?notice="));
}

#[tokio::test]
async fn test_open_gate_publishes_fixed_command_every_time() {
    let gw = spawn_gateway().await;
    let http = client();

    for _ in 0..3 {
        let body: serde_json::Value = http
            .post(format!("{}/open_gate", gw.base))
            .send()
            .await
            .unwrap()
            .json()
            .await
            .unwrap();
        assert_eq!(body["status"], "Gate opening triggered");
    }

    let published = gw.bus.published();
    assert_eq!(published.len(), 3);
    for (topic, payload) in published {
        assert_eq!(topic, "parking-system/servo");
        assert_eq!(payload, b"rotate");
    }
}

#[tokio::test]
async fn test_scan_rfid_returns_normalized_tag() {
    let gw = spawn_gateway().await;
    gw.reader.present_tag("4FA9B2C1").await;

    let body: serde_json::Value = client()
        .get(format!("{}/scan_rfid", gw.base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["rfid_tag"], "4fa9b2c1");
}

#[tokio::test]
async fn test_scan_rfid_timeout_redirects_home() {
    let gw = spawn_gateway().await;

    // Nothing presented; the 500ms read timeout elapses.
    let resp = client()
        .get(format!("{}/scan_rfid", gw.base))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers()["location"].to_str().unwrap();
    assert!(location.starts_with("/?notice="));
}

#[tokio::test]
async fn test_scan_rfid_arduino_delivers_bus_scan() {
    let gw = spawn_gateway().await;

    let coordinator = gw.coordinator.clone();
    tokio::spawn(async move {
        tokio::time::sleep(Duration::from_millis(50)).await;
        coordinator.handle_tag_event("ab12cd34").await;
    });

    let body: serde_json::Value = client()
        .get(format!("{}/scan_rfid_arduino", gw.base))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    assert_eq!(body["rfid_tag"], "ab12cd34");
}

#[tokio::test]
async fn test_scan_rfid_arduino_timeout_redirects_to_verify() {
    let gw = spawn_gateway().await;

    let resp = client()
        .get(format!("{}/scan_rfid_arduino", gw.base))
        .send()
        .await
        .unwrap();

    assert_eq!(resp.status(), StatusCode::SEE_OTHER);
    let location = resp.headers()["location"].to_str().unwrap();
    assert!(location.starts_with("/verify_user?notice="));
}

#[tokio::test]
async fn test_index_shows_matched_identity() {
    let gw = spawn_gateway().await;
    let tag = "ab12cd34".parse().unwrap();
    gw.directory.add_user(&tag, "Alice").await.unwrap();
    gw.coordinator.verify_by_tag("ab12cd34").await.unwrap();

    let html = client()
        .get(format!("{}/", gw.base))
        .send()
        .await
        .unwrap()
        .text()
        .await
        .unwrap();

    assert!(html.contains("Alice"));
}
