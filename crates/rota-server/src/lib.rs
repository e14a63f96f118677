//! Server assembly for the rota REST service.
//!
//! [`ServerConfig`] is deserialised from `config.toml` and the environment;
//! every field has a default, so both are optional. [`app`] composes the
//! API router with request tracing, and [`bootstrap`] runs the one-time
//! demo seed. The binary in `main.rs` owns the open/serve lifecycle.

use std::{path::PathBuf, sync::Arc};

use axum::Router;
use rota_core::{seed::demo_employees, store::RosterStore};
use serde::Deserialize;
use tower_http::trace::TraceLayer;

// ─── Configuration ────────────────────────────────────────────────────────────

/// Runtime server configuration, deserialised from `config.toml` and
/// `ROTA_`-prefixed environment variables.
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
  pub host:       String,
  pub port:       u16,
  pub store_path: PathBuf,
  /// Insert the fixed demo employees at startup when the directory is empty.
  pub seed_demo:  bool,
}

impl Default for ServerConfig {
  fn default() -> Self {
    Self {
      host:       "127.0.0.1".to_string(),
      port:       8080,
      store_path: PathBuf::from("rota.db"),
      seed_demo:  true,
    }
  }
}

// ─── Assembly ─────────────────────────────────────────────────────────────────

/// Build the service router: the REST API wrapped in request tracing.
pub fn app<S>(store: Arc<S>) -> Router
where
  S: RosterStore + 'static,
{
  rota_api::api_router(store).layer(TraceLayer::new_for_http())
}

/// One-time startup bootstrap: seed the demo employee directory if (and
/// only if) the store is empty and seeding is enabled.
///
/// Seeding is an explicit startup step so that list reads never mutate
/// storage.
pub async fn bootstrap<S>(store: &S, config: &ServerConfig) -> Result<(), S::Error>
where
  S: RosterStore,
{
  if !config.seed_demo {
    return Ok(());
  }

  let inserted = store.seed_employees_if_empty(demo_employees()).await?;
  if inserted > 0 {
    tracing::info!(count = inserted, "seeded demo employee directory");
  }
  Ok(())
}

// ─── Integration tests ────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
  use super::*;

  use axum::{
    body::Body,
    http::{Request, StatusCode, header},
  };
  use rota_store_sqlite::SqliteStore;
  use serde_json::{Value, json};
  use tower::ServiceExt as _;

  async fn memory_store() -> Arc<SqliteStore> {
    Arc::new(SqliteStore::open_in_memory().await.unwrap())
  }

  /// Run one request against a fresh router over the shared store and
  /// return the status with the decoded JSON body.
  async fn request(
    store: &Arc<SqliteStore>,
    method: &str,
    uri: &str,
    body: Option<Value>,
  ) -> (StatusCode, Value) {
    let mut builder = Request::builder().method(method).uri(uri);
    let body = match body {
      Some(v) => {
        builder = builder.header(header::CONTENT_TYPE, "application/json");
        Body::from(v.to_string())
      }
      None => Body::empty(),
    };

    let resp = app(store.clone())
      .oneshot(builder.body(body).unwrap())
      .await
      .unwrap();

    let status = resp.status();
    let bytes = axum::body::to_bytes(resp.into_body(), usize::MAX)
      .await
      .unwrap();
    let value = serde_json::from_slice(&bytes).expect("JSON body");
    (status, value)
  }

  fn sample_employee() -> Value {
    json!({
      "name":       "Dr. Gregory House",
      "position":   "Physician",
      "department": "Diagnostics",
      "email":      "house@hospital.com"
    })
  }

  fn sample_shift(employee_id: i64, date: &str) -> Value {
    json!({
      "employeeId":   employee_id,
      "employeeName": "Dr. Gregory House",
      "shiftTime":    "08-16",
      "date":         date
    })
  }

  // ── Employees ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn creating_an_employee_returns_the_record() {
    let store = memory_store().await;
    let (status, body) =
      request(&store, "POST", "/employees", Some(sample_employee())).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["success"], true);
    assert_eq!(body["message"], "Employee created successfully");
    assert!(body["data"]["id"].as_i64().unwrap() >= 1);
    assert_eq!(body["data"]["name"], "Dr. Gregory House");
    assert_eq!(body["data"]["email"], "house@hospital.com");
  }

  #[tokio::test]
  async fn created_employee_is_readable() {
    let store = memory_store().await;
    let (_, created) =
      request(&store, "POST", "/employees", Some(sample_employee())).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, body) =
      request(&store, "GET", &format!("/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"], created["data"]);
  }

  #[tokio::test]
  async fn employee_list_is_ordered_by_id() {
    let store = memory_store().await;
    for _ in 0..3 {
      request(&store, "POST", "/employees", Some(sample_employee())).await;
    }

    let (status, body) = request(&store, "GET", "/employees", None).await;
    assert_eq!(status, StatusCode::OK);

    let ids: Vec<i64> = body["data"]
      .as_array()
      .unwrap()
      .iter()
      .map(|e| e["id"].as_i64().unwrap())
      .collect();
    assert_eq!(ids.len(), 3);
    assert!(ids.windows(2).all(|w| w[0] < w[1]));
  }

  #[tokio::test]
  async fn missing_body_field_is_rejected() {
    let store = memory_store().await;
    let incomplete = json!({
      "name":       "Dr. Gregory House",
      "position":   "Physician",
      "department": "Diagnostics"
    });

    let (status, body) =
      request(&store, "POST", "/employees", Some(incomplete)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("email"), "{error}");
  }

  #[tokio::test]
  async fn empty_body_field_is_rejected() {
    let store = memory_store().await;
    let mut employee = sample_employee();
    employee["name"] = json!("");

    let (status, body) =
      request(&store, "POST", "/employees", Some(employee)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing required field: name");
  }

  #[tokio::test]
  async fn unknown_body_field_is_rejected() {
    let store = memory_store().await;
    let mut employee = sample_employee();
    employee["favouriteColor"] = json!("red");

    let (status, body) =
      request(&store, "POST", "/employees", Some(employee)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
  }

  #[tokio::test]
  async fn unknown_employee_is_404() {
    let store = memory_store().await;
    let (status, body) = request(&store, "GET", "/employees/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["success"], false);
    assert_eq!(body["error"], "Employee with ID 999 not found");
  }

  #[tokio::test]
  async fn non_integer_id_is_rejected() {
    let store = memory_store().await;
    let (status, body) = request(&store, "GET", "/employees/abc", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
  }

  #[tokio::test]
  async fn employee_update_keeps_omitted_fields() {
    let store = memory_store().await;
    let (_, created) =
      request(&store, "POST", "/employees", Some(sample_employee())).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, body) = request(
      &store,
      "PUT",
      &format!("/employees/{id}"),
      Some(json!({ "position": "Head of Diagnostics" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee updated successfully");
    assert_eq!(body["data"]["position"], "Head of Diagnostics");
    assert_eq!(body["data"]["name"], "Dr. Gregory House");

    let (_, fetched) =
      request(&store, "GET", &format!("/employees/{id}"), None).await;
    assert_eq!(fetched["data"], body["data"]);
  }

  #[tokio::test]
  async fn updating_a_missing_employee_is_404() {
    let store = memory_store().await;
    let (status, body) = request(
      &store,
      "PUT",
      "/employees/999",
      Some(json!({ "name": "Ghost" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Employee with ID 999 not found");
  }

  #[tokio::test]
  async fn deleted_employee_is_returned_then_gone() {
    let store = memory_store().await;
    let (_, created) =
      request(&store, "POST", "/employees", Some(sample_employee())).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, body) =
      request(&store, "DELETE", &format!("/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Employee deleted successfully");
    assert_eq!(body["data"], created["data"]);

    let (status, _) =
      request(&store, "GET", &format!("/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
      request(&store, "DELETE", &format!("/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  // ── Shifts ──────────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn creating_a_shift_defaults_the_status() {
    let store = memory_store().await;
    let (status, body) =
      request(&store, "POST", "/shifts", Some(sample_shift(3, "2025-01-10"))).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Shift created successfully");
    assert_eq!(body["data"]["status"], "scheduled");
    assert_eq!(body["data"]["shiftTime"], "08-16");
    assert_eq!(body["data"]["date"], "2025-01-10");
  }

  #[tokio::test]
  async fn shift_roundtrips_every_field() {
    let store = memory_store().await;
    let full = json!({
      "employeeId":   3,
      "employeeName": "Dr. Emily Rodriguez",
      "shiftTime":    "24-08",
      "date":         "2025-01-10",
      "status":       "confirmed"
    });
    let (_, created) = request(&store, "POST", "/shifts", Some(full)).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, body) =
      request(&store, "GET", &format!("/shifts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["data"]["employeeId"], 3);
    assert_eq!(body["data"]["employeeName"], "Dr. Emily Rodriguez");
    assert_eq!(body["data"]["shiftTime"], "24-08");
    assert_eq!(body["data"]["date"], "2025-01-10");
    assert_eq!(body["data"]["status"], "confirmed");
  }

  #[tokio::test]
  async fn invalid_shift_time_is_rejected_and_not_persisted() {
    let store = memory_store().await;
    let mut shift = sample_shift(1, "2025-01-10");
    shift["shiftTime"] = json!("99-99");

    let (status, body) = request(&store, "POST", "/shifts", Some(shift)).await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(
      body["error"],
      "Invalid shift time. Must be one of: 08-16, 08-20, 08-24, 16-24, 24-08"
    );

    let (_, listed) = request(&store, "GET", "/shifts", None).await;
    assert_eq!(listed["data"].as_array().unwrap().len(), 0);
  }

  #[tokio::test]
  async fn non_positive_employee_id_is_rejected() {
    let store = memory_store().await;
    let (status, body) =
      request(&store, "POST", "/shifts", Some(sample_shift(0, "2025-01-10"))).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    let error = body["error"].as_str().unwrap();
    assert!(error.contains("positive integer"), "{error}");
  }

  #[tokio::test]
  async fn shift_update_keeps_omitted_fields() {
    let store = memory_store().await;
    let (_, created) =
      request(&store, "POST", "/shifts", Some(sample_shift(2, "2025-01-10"))).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, body) = request(
      &store,
      "PUT",
      &format!("/shifts/{id}"),
      Some(json!({ "status": "confirmed" })),
    )
    .await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Shift updated successfully");
    assert_eq!(body["data"]["status"], "confirmed");
    assert_eq!(body["data"]["shiftTime"], "08-16");
    assert_eq!(body["data"]["date"], "2025-01-10");
  }

  #[tokio::test]
  async fn shift_update_revalidates_the_time() {
    let store = memory_store().await;
    let (_, created) =
      request(&store, "POST", "/shifts", Some(sample_shift(2, "2025-01-10"))).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, _) = request(
      &store,
      "PUT",
      &format!("/shifts/{id}"),
      Some(json!({ "shiftTime": "9-5" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);

    let (_, fetched) =
      request(&store, "GET", &format!("/shifts/{id}"), None).await;
    assert_eq!(fetched["data"]["shiftTime"], "08-16");
  }

  #[tokio::test]
  async fn shift_update_rejects_blanking_the_status() {
    let store = memory_store().await;
    let (_, created) =
      request(&store, "POST", "/shifts", Some(sample_shift(2, "2025-01-10"))).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, body) = request(
      &store,
      "PUT",
      &format!("/shifts/{id}"),
      Some(json!({ "status": "" })),
    )
    .await;
    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["error"], "missing required field: status");

    let (_, fetched) =
      request(&store, "GET", &format!("/shifts/{id}"), None).await;
    assert_eq!(fetched["data"]["status"], "scheduled");
  }

  #[tokio::test]
  async fn updating_a_missing_shift_is_404() {
    let store = memory_store().await;
    let (status, body) = request(
      &store,
      "PUT",
      "/shifts/999",
      Some(json!({ "status": "confirmed" })),
    )
    .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Shift with ID 999 not found");
  }

  #[tokio::test]
  async fn deleted_shift_is_returned_then_gone() {
    let store = memory_store().await;
    let (_, created) =
      request(&store, "POST", "/shifts", Some(sample_shift(1, "2025-01-10"))).await;
    let id = created["data"]["id"].as_i64().unwrap();

    let (status, body) =
      request(&store, "DELETE", &format!("/shifts/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["message"], "Shift deleted successfully");
    assert_eq!(body["data"], created["data"]);

    let (status, _) =
      request(&store, "GET", &format!("/shifts/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);

    let (status, _) =
      request(&store, "DELETE", &format!("/shifts/{id}"), None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
  }

  #[tokio::test]
  async fn shift_filters_are_a_conjunction() {
    let store = memory_store().await;
    request(&store, "POST", "/shifts", Some(sample_shift(3, "2025-01-10"))).await;
    request(&store, "POST", "/shifts", Some(sample_shift(3, "2025-01-11"))).await;
    request(&store, "POST", "/shifts", Some(sample_shift(4, "2025-01-10"))).await;

    let (status, body) = request(
      &store,
      "GET",
      "/shifts?employeeId=3&date=2025-01-10",
      None,
    )
    .await;
    assert_eq!(status, StatusCode::OK);

    let matches = body["data"].as_array().unwrap();
    assert_eq!(matches.len(), 1);
    assert_eq!(matches[0]["employeeId"], 3);
    assert_eq!(matches[0]["date"], "2025-01-10");
  }

  #[tokio::test]
  async fn invalid_filter_time_is_rejected() {
    let store = memory_store().await;
    let (status, body) =
      request(&store, "GET", "/shifts?shiftTime=99-99", None).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(body["success"], false);
  }

  #[tokio::test]
  async fn shift_list_is_ordered_by_date() {
    let store = memory_store().await;
    request(&store, "POST", "/shifts", Some(sample_shift(1, "2025-03-01"))).await;
    request(&store, "POST", "/shifts", Some(sample_shift(1, "2025-01-15"))).await;
    request(&store, "POST", "/shifts", Some(sample_shift(1, "2025-02-01"))).await;

    let (_, body) = request(&store, "GET", "/shifts", None).await;
    let dates: Vec<&str> = body["data"]
      .as_array()
      .unwrap()
      .iter()
      .map(|s| s["date"].as_str().unwrap())
      .collect();
    assert_eq!(dates, vec!["2025-01-15", "2025-02-01", "2025-03-01"]);
  }

  #[tokio::test]
  async fn unknown_shift_is_404() {
    let store = memory_store().await;
    let (status, body) = request(&store, "GET", "/shifts/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Shift with ID 999 not found");
  }

  #[tokio::test]
  async fn deleting_an_employee_orphans_their_shifts() {
    let store = memory_store().await;
    let (_, created) =
      request(&store, "POST", "/employees", Some(sample_employee())).await;
    let id = created["data"]["id"].as_i64().unwrap();
    request(&store, "POST", "/shifts", Some(sample_shift(id, "2025-01-10"))).await;

    let (status, _) =
      request(&store, "DELETE", &format!("/employees/{id}"), None).await;
    assert_eq!(status, StatusCode::OK);

    let (_, body) =
      request(&store, "GET", &format!("/shifts?employeeId={id}"), None).await;
    let orphans = body["data"].as_array().unwrap();
    assert_eq!(orphans.len(), 1);
    assert_eq!(orphans[0]["employeeName"], "Dr. Gregory House");
  }

  // ── Bootstrap ───────────────────────────────────────────────────────────────

  #[tokio::test]
  async fn bootstrap_seeds_an_empty_store_once() {
    let store = memory_store().await;
    let config = ServerConfig::default();

    bootstrap(store.as_ref(), &config).await.unwrap();
    bootstrap(store.as_ref(), &config).await.unwrap();

    let (_, body) = request(&store, "GET", "/employees", None).await;
    let employees = body["data"].as_array().unwrap();
    assert_eq!(employees.len(), 4);
    assert!(employees.iter().any(|e| e["name"] == "Dr. Sarah Johnson"));
  }

  #[tokio::test]
  async fn bootstrap_respects_seed_demo_false() {
    let store = memory_store().await;
    let config = ServerConfig {
      seed_demo: false,
      ..Default::default()
    };

    bootstrap(store.as_ref(), &config).await.unwrap();

    let (_, body) = request(&store, "GET", "/employees", None).await;
    assert_eq!(body["data"].as_array().unwrap().len(), 0);
  }

  #[tokio::test]
  async fn config_defaults_are_sensible() {
    let config = ServerConfig::default();
    assert_eq!(config.host, "127.0.0.1");
    assert_eq!(config.port, 8080);
    assert!(config.seed_demo);
  }
}
