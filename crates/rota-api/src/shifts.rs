//! Handlers for the `/shifts` endpoints.
//!
//! | Method | Path | Notes |
//! |--------|------|-------|
//! | `GET`    | `/shifts` | Optional `?employeeId=&date=&shiftTime=`, a conjunction |
//! | `GET`    | `/shifts/{id}` | 404 if not found |
//! | `POST`   | `/shifts` | `shiftTime` must be a vocabulary member; `status` defaults |
//! | `PUT`    | `/shifts/{id}` | Any subset; `shiftTime` re-validated when present |
//! | `DELETE` | `/shifts/{id}` | Returns the removed record |
//!
//! `shiftTime` arrives as a plain string and is parsed here so membership
//! failures produce the allowed-set message instead of a serde rejection.

use std::sync::Arc;

use axum::{Json, extract::State};
use chrono::NaiveDate;
use rota_core::{
  shift::{DEFAULT_STATUS, NewShift, Shift, ShiftQuery, ShiftTime, ShiftUpdate},
  store::RosterStore,
};
use serde::Deserialize;

use crate::{
  error::ApiError,
  extract::{ApiJson, ApiPath, ApiQuery},
  response::Envelope,
};

fn not_found(id: i64) -> ApiError {
  ApiError::NotFound(format!("Shift with ID {id} not found"))
}

// ─── List ─────────────────────────────────────────────────────────────────────

/// Query parameters for `GET /shifts`; all optional, combined as a
/// conjunction.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct ListShiftsParams {
  pub employee_id: Option<i64>,
  pub date:        Option<NaiveDate>,
  pub shift_time:  Option<String>,
}

/// `GET /shifts[?employeeId=<id>][&date=<yyyy-mm-dd>][&shiftTime=<label>]`
pub async fn list<S>(
  State(store): State<Arc<S>>,
  ApiQuery(params): ApiQuery<ListShiftsParams>,
) -> Result<Json<Envelope<Vec<Shift>>>, ApiError>
where
  S: RosterStore,
{
  let query = ShiftQuery {
    employee_id: params.employee_id,
    date:        params.date,
    shift_time:  params
      .shift_time
      .map(|s| s.parse::<ShiftTime>())
      .transpose()?,
  };

  let shifts = store
    .list_shifts(&query)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(Envelope::data(shifts)))
}

// ─── Get one ──────────────────────────────────────────────────────────────────

/// `GET /shifts/{id}`
pub async fn get_one<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
) -> Result<Json<Envelope<Shift>>, ApiError>
where
  S: RosterStore,
{
  let shift = store
    .get_shift(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(Envelope::data(shift)))
}

// ─── Create ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `POST /shifts`. `status` is optional; absent or
/// empty means the default. Unknown fields are rejected.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct CreateShiftBody {
  pub employee_id:   i64,
  pub employee_name: String,
  pub shift_time:    String,
  pub date:          NaiveDate,
  pub status:        Option<String>,
}

/// `POST /shifts`
pub async fn create<S>(
  State(store): State<Arc<S>>,
  ApiJson(body): ApiJson<CreateShiftBody>,
) -> Result<Json<Envelope<Shift>>, ApiError>
where
  S: RosterStore,
{
  let input = NewShift {
    employee_id:   body.employee_id,
    employee_name: body.employee_name,
    shift_time:    body.shift_time.parse::<ShiftTime>()?,
    date:          body.date,
    status:        body
      .status
      .filter(|s| !s.is_empty())
      .unwrap_or_else(|| DEFAULT_STATUS.to_string()),
  };
  input.validate()?;

  let shift = store
    .create_shift(input)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?;
  Ok(Json(Envelope::with_message(
    shift,
    "Shift created successfully",
  )))
}

// ─── Update ───────────────────────────────────────────────────────────────────

/// JSON body accepted by `PUT /shifts/{id}`: any subset of the shift fields.
/// Omitted fields keep their stored values.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase", deny_unknown_fields)]
pub struct UpdateShiftBody {
  pub employee_id:   Option<i64>,
  pub employee_name: Option<String>,
  pub shift_time:    Option<String>,
  pub date:          Option<NaiveDate>,
  pub status:        Option<String>,
}

/// `PUT /shifts/{id}`
pub async fn update<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
  ApiJson(body): ApiJson<UpdateShiftBody>,
) -> Result<Json<Envelope<Shift>>, ApiError>
where
  S: RosterStore,
{
  let update = ShiftUpdate {
    employee_id:   body.employee_id,
    employee_name: body.employee_name,
    shift_time:    body
      .shift_time
      .map(|s| s.parse::<ShiftTime>())
      .transpose()?,
    date:          body.date,
    status:        body.status,
  };
  update.validate()?;

  let shift = store
    .update_shift(id, update)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(Envelope::with_message(
    shift,
    "Shift updated successfully",
  )))
}

// ─── Delete ───────────────────────────────────────────────────────────────────

/// `DELETE /shifts/{id}`
pub async fn delete_one<S>(
  State(store): State<Arc<S>>,
  ApiPath(id): ApiPath<i64>,
) -> Result<Json<Envelope<Shift>>, ApiError>
where
  S: RosterStore,
{
  let shift = store
    .delete_shift(id)
    .await
    .map_err(|e| ApiError::Store(Box::new(e)))?
    .ok_or_else(|| not_found(id))?;
  Ok(Json(Envelope::with_message(
    shift,
    "Shift deleted successfully",
  )))
}
