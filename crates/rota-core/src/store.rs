//! The `RosterStore` trait — the storage abstraction under both entity
//! surfaces.
//!
//! The trait is implemented by storage backends (e.g. `rota-store-sqlite`).
//! Higher layers (`rota-api`, `rota-server`) depend on this abstraction, not
//! on any concrete backend.

use std::future::Future;

use crate::{
  employee::{Employee, EmployeeUpdate, NewEmployee},
  shift::{NewShift, Shift, ShiftQuery, ShiftUpdate},
};

/// Abstraction over a roster storage backend.
///
/// Single-record reads return `Option` (`None` means no such id) so callers
/// decide how "not found" surfaces. Updates and deletes return the affected
/// record for the same reason. An update or delete must be applied
/// atomically: a failed or missing-id call leaves the record untouched.
///
/// All methods return `Send` futures so the trait can be used in
/// multi-threaded async runtimes (e.g. tokio with `axum`).
pub trait RosterStore: Send + Sync {
  type Error: std::error::Error + Send + Sync + 'static;

  // ── Employees ─────────────────────────────────────────────────────────

  /// List every employee, ordered by id ascending.
  fn list_employees(
    &self,
  ) -> impl Future<Output = Result<Vec<Employee>, Self::Error>> + Send + '_;

  /// Retrieve an employee by id. Returns `None` if not found.
  fn get_employee(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Persist a new employee and return it with its assigned id.
  ///
  /// Ids are monotonically increasing and never reused, even after deletes.
  fn create_employee(
    &self,
    input: NewEmployee,
  ) -> impl Future<Output = Result<Employee, Self::Error>> + Send + '_;

  /// Apply a partial update; absent fields keep their stored values.
  /// Returns the updated record, or `None` if the id is unknown.
  fn update_employee(
    &self,
    id: i64,
    update: EmployeeUpdate,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Delete by id, returning the removed record (`None` if unknown).
  /// Shifts referencing the employee are left in place as orphans.
  fn delete_employee(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Employee>, Self::Error>> + Send + '_;

  /// Insert `seed` only when the directory is empty; returns how many
  /// records went in (0 when the directory already had any).
  ///
  /// The emptiness check and the inserts are one storage operation, so
  /// concurrent bootstraps cannot double-seed.
  fn seed_employees_if_empty(
    &self,
    seed: Vec<NewEmployee>,
  ) -> impl Future<Output = Result<usize, Self::Error>> + Send + '_;

  // ── Shifts ────────────────────────────────────────────────────────────

  /// List shifts matching `query`, ordered by date ascending with id
  /// ascending as the tiebreak.
  fn list_shifts<'a>(
    &'a self,
    query: &'a ShiftQuery,
  ) -> impl Future<Output = Result<Vec<Shift>, Self::Error>> + Send + 'a;

  /// Retrieve a shift by id. Returns `None` if not found.
  fn get_shift(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Shift>, Self::Error>> + Send + '_;

  /// Persist a new shift and return it with its assigned id.
  ///
  /// The referenced employee is not checked for existence.
  fn create_shift(
    &self,
    input: NewShift,
  ) -> impl Future<Output = Result<Shift, Self::Error>> + Send + '_;

  /// Apply a partial update; absent fields keep their stored values.
  /// Returns the updated record, or `None` if the id is unknown.
  fn update_shift(
    &self,
    id: i64,
    update: ShiftUpdate,
  ) -> impl Future<Output = Result<Option<Shift>, Self::Error>> + Send + '_;

  /// Delete by id, returning the removed record (`None` if unknown).
  fn delete_shift(
    &self,
    id: i64,
  ) -> impl Future<Output = Result<Option<Shift>, Self::Error>> + Send + '_;
}
