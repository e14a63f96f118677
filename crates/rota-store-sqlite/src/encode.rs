//! Encoding and decoding helpers between Rust domain types and the plain-text
//! representations stored in SQLite columns.
//!
//! Dates are stored as `YYYY-MM-DD` strings; lexicographic order on the
//! encoding matches calendar order, which is what lets `ORDER BY date` work
//! on a TEXT column. Shift times are stored as their `HH-HH` labels.

use chrono::NaiveDate;
use rota_core::{
  employee::Employee,
  shift::{Shift, ShiftTime},
};

use crate::Result;

// ─── Date ────────────────────────────────────────────────────────────────────

pub fn encode_date(date: NaiveDate) -> String { date.to_string() }

pub fn decode_date(s: &str) -> Result<NaiveDate> { Ok(s.parse()?) }

// ─── Row types ───────────────────────────────────────────────────────────────

/// Map an `employees` row in column order; no domain decoding is needed.
pub fn employee_from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Employee> {
  Ok(Employee {
    id:         row.get(0)?,
    name:       row.get(1)?,
    position:   row.get(2)?,
    department: row.get(3)?,
    email:      row.get(4)?,
  })
}

/// A `shifts` row exactly as stored, before domain decoding.
///
/// Rows are fetched into this shape inside the connection closure, where
/// only `rusqlite::Error` can flow, and decoded afterwards where domain
/// errors have somewhere to go.
pub struct RawShift {
  pub id:            i64,
  pub employee_id:   i64,
  pub employee_name: String,
  pub shift_time:    String,
  pub date:          String,
  pub status:        String,
}

impl RawShift {
  pub fn from_row(row: &rusqlite::Row<'_>) -> rusqlite::Result<Self> {
    Ok(RawShift {
      id:            row.get(0)?,
      employee_id:   row.get(1)?,
      employee_name: row.get(2)?,
      shift_time:    row.get(3)?,
      date:          row.get(4)?,
      status:        row.get(5)?,
    })
  }

  pub fn into_shift(self) -> Result<Shift> {
    Ok(Shift {
      id:            self.id,
      employee_id:   self.employee_id,
      employee_name: self.employee_name,
      shift_time:    self.shift_time.parse::<ShiftTime>()?,
      date:          decode_date(&self.date)?,
      status:        self.status,
    })
  }
}
