//! Async HTTP client wrapping the rota JSON API.

use std::time::Duration;

use anyhow::{Context, Result, anyhow};
use reqwest::Client;
use rota_core::{employee::Employee, shift::Shift};
use serde::Deserialize;
use serde_json::{Map, Value, json};

/// The `{success, data, message, error}` envelope every endpoint replies
/// with, success or failure.
#[derive(Debug, Deserialize)]
struct Envelope<T> {
  success: bool,
  data:    Option<T>,
  message: Option<String>,
  error:   Option<String>,
}

/// Async HTTP client for the rota JSON REST API.
///
/// Cheap to clone — the inner [`reqwest::Client`] is `Arc`-based.
#[derive(Clone)]
pub struct ApiClient {
  client:   Client,
  base_url: String,
}

impl ApiClient {
  pub fn new(base_url: impl Into<String>) -> Result<Self> {
    let client = Client::builder()
      .timeout(Duration::from_secs(30))
      .build()
      .context("failed to build HTTP client")?;
    Ok(Self {
      client,
      base_url: base_url.into(),
    })
  }

  fn url(&self, path: &str) -> String {
    format!("{}{}", self.base_url.trim_end_matches('/'), path)
  }

  /// Unpack the envelope: surface the server's `error` string on failure,
  /// yield `data` and the optional `message` on success.
  async fn unpack<T: serde::de::DeserializeOwned>(
    resp: reqwest::Response,
  ) -> Result<(T, Option<String>)> {
    let status = resp.status();
    let envelope: Envelope<T> = resp
      .json()
      .await
      .with_context(|| format!("deserialising response ({status})"))?;

    if !envelope.success {
      let error = envelope
        .error
        .unwrap_or_else(|| format!("request failed ({status})"));
      return Err(anyhow!(error));
    }
    let data = envelope
      .data
      .ok_or_else(|| anyhow!("response envelope carried no data"))?;
    Ok((data, envelope.message))
  }

  // ── Employees ─────────────────────────────────────────────────────────────

  /// `GET /employees`
  pub async fn list_employees(&self) -> Result<Vec<Employee>> {
    let resp = self
      .client
      .get(self.url("/employees"))
      .send()
      .await
      .context("GET /employees failed")?;
    Ok(Self::unpack(resp).await?.0)
  }

  /// `GET /employees/{id}`
  pub async fn get_employee(&self, id: i64) -> Result<Employee> {
    let resp = self
      .client
      .get(self.url(&format!("/employees/{id}")))
      .send()
      .await
      .context("GET /employees/{id} failed")?;
    Ok(Self::unpack(resp).await?.0)
  }

  /// `POST /employees`
  pub async fn create_employee(
    &self,
    name: &str,
    position: &str,
    department: &str,
    email: &str,
  ) -> Result<(Employee, Option<String>)> {
    let resp = self
      .client
      .post(self.url("/employees"))
      .json(&json!({
        "name":       name,
        "position":   position,
        "department": department,
        "email":      email,
      }))
      .send()
      .await
      .context("POST /employees failed")?;
    Self::unpack(resp).await
  }

  /// `PUT /employees/{id}` — only the given fields are sent, so the server
  /// keeps everything else as-is.
  pub async fn update_employee(
    &self,
    id: i64,
    fields: Map<String, Value>,
  ) -> Result<(Employee, Option<String>)> {
    let resp = self
      .client
      .put(self.url(&format!("/employees/{id}")))
      .json(&Value::Object(fields))
      .send()
      .await
      .context("PUT /employees/{id} failed")?;
    Self::unpack(resp).await
  }

  /// `DELETE /employees/{id}`
  pub async fn delete_employee(&self, id: i64) -> Result<(Employee, Option<String>)> {
    let resp = self
      .client
      .delete(self.url(&format!("/employees/{id}")))
      .send()
      .await
      .context("DELETE /employees/{id} failed")?;
    Self::unpack(resp).await
  }

  // ── Shifts ────────────────────────────────────────────────────────────────

  /// `GET /shifts[?employeeId=..][&date=..][&shiftTime=..]`
  pub async fn list_shifts(&self, filters: &[(&str, String)]) -> Result<Vec<Shift>> {
    let resp = self
      .client
      .get(self.url("/shifts"))
      .query(filters)
      .send()
      .await
      .context("GET /shifts failed")?;
    Ok(Self::unpack(resp).await?.0)
  }

  /// `GET /shifts/{id}`
  pub async fn get_shift(&self, id: i64) -> Result<Shift> {
    let resp = self
      .client
      .get(self.url(&format!("/shifts/{id}")))
      .send()
      .await
      .context("GET /shifts/{id} failed")?;
    Ok(Self::unpack(resp).await?.0)
  }

  /// `POST /shifts` — values are passed through verbatim; the server owns
  /// all validation.
  pub async fn create_shift(
    &self,
    employee_id: i64,
    employee_name: &str,
    shift_time: &str,
    date: &str,
    status: Option<&str>,
  ) -> Result<(Shift, Option<String>)> {
    let mut body = Map::new();
    body.insert("employeeId".to_string(), json!(employee_id));
    body.insert("employeeName".to_string(), json!(employee_name));
    body.insert("shiftTime".to_string(), json!(shift_time));
    body.insert("date".to_string(), json!(date));
    if let Some(status) = status {
      body.insert("status".to_string(), json!(status));
    }

    let resp = self
      .client
      .post(self.url("/shifts"))
      .json(&Value::Object(body))
      .send()
      .await
      .context("POST /shifts failed")?;
    Self::unpack(resp).await
  }

  /// `PUT /shifts/{id}` — only the given fields are sent.
  pub async fn update_shift(
    &self,
    id: i64,
    fields: Map<String, Value>,
  ) -> Result<(Shift, Option<String>)> {
    let resp = self
      .client
      .put(self.url(&format!("/shifts/{id}")))
      .json(&Value::Object(fields))
      .send()
      .await
      .context("PUT /shifts/{id} failed")?;
    Self::unpack(resp).await
  }

  /// `DELETE /shifts/{id}`
  pub async fn delete_shift(&self, id: i64) -> Result<(Shift, Option<String>)> {
    let resp = self
      .client
      .delete(self.url(&format!("/shifts/{id}")))
      .send()
      .await
      .context("DELETE /shifts/{id} failed")?;
    Self::unpack(resp).await
  }
}
