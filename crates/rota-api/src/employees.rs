//! Handlers for the `/employees` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/employees` | All records, id ascending |
//! | `GET`    | `/employees/{id}` | 404 if not found |
//! | `POST`   | `/employees` | Body: all four directory fields, non-empty |
//! | `PUT`    | `/employees/{id}` | Any subset; omitted fields keep their value |
//! | `DELETE` | `/employees/{id}` | Returns the removed record |

use std::sync::Arc;

use axum::{Json, extract::State};
use rota_core::{
  employee::{Employee, EmployeeUpdate, NewEmployee},
  store::RosterStore,
};
use serde::Deserialize;

use crate::{
  error::ApiError,
  extract::{ApiJson, ApiPath},
  response::Envelope,
};

fn not_found(id: i64) -> ApiError {
  ApiError::NotFound(format!("Employee with ID {id} not found"))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// `GET /employees`
pub async fn list<S>(
  State(store): State<Arc<S>>,
) -> Result<Json<Envelope<Vec<Employee>>>, ApiError>
where
  S: RosterStore,
{
  let employees = store
    .list_employees()
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(Envelope::data(employees)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /employees/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
) -> Result<Json<Envelope<Employee>>, ApiError>
where
  S: RosterStore,
{
  let employee = store
    .get_employee(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(Envelope::data(employee)))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /employees`. Every field is required;
/// unknown fields are rejected.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct CreateEmployeeBody {
  pub name:       String,
  pub position:   String,
  pub department: String,
  pub email:      String,
}

/// `POST /employees`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<CreateEmployeeBody>,
) -> Result<Json<Envelope<Employee>>, ApiError>
where
  S: RosterStore,
{
  let input = NewEmployee {
    name:       body.name,
    position:   body.position,
    department: body.department,
    email:      body.email,
  };
  input.validate()?;

  let employee = store
    .create_employee(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(Envelope::with_message(
    employee,
    "Employee created successfully",
  )))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `PUT /employees/{id}`: any subset of the directory
/// fields. Omitted fields keep their stored values.
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct UpdateEmployeeBody {
  pub name:       Option<String>,
  pub position:   Option<String>,
  pub department: Option<String>,
  pub email:      Option<String>,
}

/// `PUT /employees/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
  ApiJson(body): ApiJson<UpdateEmployeeBody>,
) -> Result<Json<Envelope<Employee>>, ApiError>
where
  S: RosterStore,
{
  let update = EmployeeUpdate {
    name:       body.name,
    position:   body.position,
    department: body.department,
    email:      body.email,
  };
  update.validate()?;

  let employee = store
    .update_employee(id, update)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(Envelope::with_message(
    employee,
    "Employee updated successfully",
  )))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /employees/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
) -> Result<Json<Envelope<Employee>>, ApiError>
where
  S: RosterStore,
{
  let employee = store
    .delete_employee(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(Envelope::with_message(
    employee,
    "Employee deleted successfully",
  )))
}
