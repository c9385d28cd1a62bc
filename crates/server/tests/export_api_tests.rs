//! Integration tests for the export endpoints.

mod common;

use axum::body::Body;
use axum::http::{Request, StatusCode};
use common::{FailingStore, TestServer, sample_measurements};
use serde_json::Value;
use soil_core::SoilRecord;
use std::path::PathBuf;
use tower::ServiceExt;

async fn get_json(router: &axum::Router, uri: &str) -> (StatusCode, Value) {
    let request = Request::builder()
        .method("GET")
        .uri(uri)
        .body(Body::empty())
        .unwrap();
    let response = router.clone().oneshot(request).await.unwrap();

    let status = response.status();
    let body = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .unwrap();
    (status, serde_json::from_slice(&body).unwrap_or(Value::Null))
}

fn path_of(body: &Value) -> PathBuf {
    PathBuf::from(body["path"].as_str().expect("path field"))
}

#[tokio::test]
async fn test_export_csv_writes_file_and_returns_path() {
    let server = TestServer::with_rows(&sample_measurements()).await;

    let (status, body) = get_json(&server.router, "/api/export/csv").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "CSV exported successfully");
    assert_eq!(body["rows"], 3);

    let path = path_of(&body);
    assert!(path.exists());
    assert!(path.starts_with(&server.export_dir));
    let name = path.file_name().unwrap().to_string_lossy().into_owned();
    assert!(name.starts_with("soil_carbon_data_"));
    assert!(name.ends_with(".csv"));

    let mut reader = csv::Reader::from_path(&path).unwrap();
    let headers: Vec<String> = reader.headers().unwrap().iter().map(String::from).collect();
    assert_eq!(headers, SoilRecord::FIELD_NAMES.to_vec());
    let rows: Vec<csv::StringRecord> = reader.records().map(|r| r.unwrap()).collect();
    assert_eq!(rows.len(), 3);
    assert_eq!(&rows[0][6], "0.9");
}

#[tokio::test]
async fn test_export_pdf_writes_file_and_returns_path() {
    let server = TestServer::with_rows(&sample_measurements()).await;

    let (status, body) = get_json(&server.router, "/api/export/pdf").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "PDF exported successfully");
    assert_eq!(body["rows"], 3);

    let path = path_of(&body);
    assert!(path.to_string_lossy().ends_with(".pdf"));
    let bytes = std::fs::read(&path).unwrap();
    assert!(bytes.starts_with(b"%PDF-"));
}

#[tokio::test]
async fn test_repeated_exports_produce_distinct_files() {
    let server = TestServer::with_rows(&sample_measurements()).await;

    let (_, first) = get_json(&server.router, "/api/export/csv").await;
    let (_, second) = get_json(&server.router, "/api/export/csv").await;
    let (_, third) = get_json(&server.router, "/api/export/pdf").await;

    assert_ne!(path_of(&first), path_of(&second));
    assert!(path_of(&first).exists());
    assert!(path_of(&second).exists());
    assert!(path_of(&third).exists());
    assert_eq!(server.export_count(), 3);
}

#[tokio::test]
async fn test_export_with_empty_table_writes_header_only() {
    let server = TestServer::with_rows(&[]).await;

    let (status, body) = get_json(&server.router, "/api/export/csv").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows"], 0);
    let content = std::fs::read_to_string(path_of(&body)).unwrap();
    assert_eq!(content.lines().count(), 1);
}

#[tokio::test]
async fn test_export_store_failure_writes_empty_export_by_default() {
    let server = TestServer::with_store(FailingStore::new(), |_| {});

    let (status, body) = get_json(&server.router, "/api/export/pdf").await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["rows"], 0);
    assert!(path_of(&body).exists());
}

#[tokio::test]
async fn test_export_store_failure_is_503_when_fail_open_disabled() {
    let server = TestServer::with_store(FailingStore::new(), |config| {
        config.server.store_errors_as_empty = false;
    });

    let (status, body) = get_json(&server.router, "/api/export/csv").await;

    assert_eq!(status, StatusCode::SERVICE_UNAVAILABLE);
    assert_eq!(body["code"], "store_unavailable");
    assert_eq!(server.export_count(), 0);
}

#[tokio::test]
async fn test_export_io_failure_is_500() {
    let server = TestServer::with_rows_and_config(&sample_measurements(), |config| {
        // Point the export directory below a regular file.
        let blocker = config.export.dir.with_file_name("blocker");
        std::fs::write(&blocker, b"file").unwrap();
        config.export.dir = blocker.join("exports");
    })
    .await;

    let (status, body) = get_json(&server.router, "/api/export/csv").await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body["code"], "export_error");
}
