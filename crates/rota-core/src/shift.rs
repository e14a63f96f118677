//! Shift — a dated assignment of an employee to one of the fixed
//! shift windows.
//!
//! `ShiftTime` is the one closed vocabulary in the data model: every create
//! and every update that carries a shift time must name a member. Dates are
//! plain calendar dates with no range restriction; scheduling into the past
//! is allowed.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// Status given to a newly created shift when the caller does not set one.
pub const DEFAULT_STATUS: &str = "scheduled";

// ─── Shift time ──────────────────────────────────────────────────────────────

/// The fixed set of rosterable shift windows, keyed by `HH-HH` label.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ShiftTime {
  /// `08-16`, the standard day shift.
  #[serde(rename = "08-16")]
  Day,
  /// `08-20`, a twelve-hour long day.
  #[serde(rename = "08-20")]
  LongDay,
  /// `08-24`, a sixteen-hour extended day.
  #[serde(rename = "08-24")]
  ExtendedDay,
  /// `16-24`, the evening shift.
  #[serde(rename = "16-24")]
  Evening,
  /// `24-08`, the overnight shift.
  #[serde(rename = "24-08")]
  Night,
}

impl ShiftTime {
  /// Every member of the vocabulary, in label order.
  pub const ALL: [ShiftTime; 5] = [
    ShiftTime::Day,
    ShiftTime::LongDay,
    ShiftTime::ExtendedDay,
    ShiftTime::Evening,
    ShiftTime::Night,
  ];

  /// The wire and storage label, e.g. `"08-16"`.
  pub fn as_str(self) -> &'static str {
    match self {
      ShiftTime::Day => "08-16",
      ShiftTime::LongDay => "08-20",
      ShiftTime::ExtendedDay => "08-24",
      ShiftTime::Evening => "16-24",
      ShiftTime::Night => "24-08",
    }
  }

  /// The labels joined for error messages:
  /// `08-16, 08-20, 08-24, 16-24, 24-08`.
  pub fn allowed_list() -> String {
    Self::ALL
      .iter()
      .map(|t| t.as_str())
      .collect::<Vec<_>>()
      .join(", ")
  }
}

impl std::str::FromStr for ShiftTime {
  type Err = Error;

  fn from_str(s: &str) -> Result<Self> {
    Self::ALL
      .into_iter()
      .find(|t| t.as_str() == s)
      .ok_or_else(|| Error::InvalidShiftTime(s.to_string()))
  }
}

impl std::fmt::Display for ShiftTime {
  fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
    // pad, not write_str, so format width specifiers apply.
    f.pad(self.as_str())
  }
}

// ─── Records ─────────────────────────────────────────────────────────────────

/// A rostered shift.
///
/// `employee_name` is a denormalised copy taken at creation time; it is not
/// kept in sync with later employee renames. `employee_id` is expected to
/// reference an [`Employee`](crate::employee::Employee) but is never
/// enforced, so a shift may outlive its employee as an orphan.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Shift {
  pub id:            i64,
  pub employee_id:   i64,
  pub employee_name: String,
  pub shift_time:    ShiftTime,
  pub date:          NaiveDate,
  pub status:        String,
}

/// Input to [`RosterStore::create_shift`](crate::store::RosterStore::create_shift).
/// The id is always assigned by the store, never accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewShift {
  pub employee_id:   i64,
  pub employee_name: String,
  pub shift_time:    ShiftTime,
  pub date:          NaiveDate,
  pub status:        String,
}

impl NewShift {
  /// Presence rules: `employee_id` positive, `employee_name` non-empty.
  /// `shift_time` is already a vocabulary member by construction.
  pub fn validate(&self) -> Result<()> {
    if self.employee_id < 1 {
      return Err(Error::InvalidEmployeeId(self.employee_id));
    }
    if self.employee_name.is_empty() {
      return Err(Error::MissingField("employeeName"));
    }
    Ok(())
  }
}

/// Partial overlay for [`RosterStore::update_shift`](crate::store::RosterStore::update_shift).
/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct ShiftUpdate {
  pub employee_id:   Option<i64>,
  pub employee_name: Option<String>,
  pub shift_time:    Option<ShiftTime>,
  pub date:          Option<NaiveDate>,
  pub status:        Option<String>,
}

impl ShiftUpdate {
  /// Fields that are present obey the same presence rules as creation;
  /// `status` may be omitted but not blanked.
  pub fn validate(&self) -> Result<()> {
    if let Some(id) = self.employee_id
      && id < 1
    {
      return Err(Error::InvalidEmployeeId(id));
    }
    if let Some(name) = &self.employee_name
      && name.is_empty()
    {
      return Err(Error::MissingField("employeeName"));
    }
    if let Some(status) = &self.status
      && status.is_empty()
    {
      return Err(Error::MissingField("status"));
    }
    Ok(())
  }
}

// ─── Query type ──────────────────────────────────────────────────────────────

/// Equality filters for [`RosterStore::list_shifts`](crate::store::RosterStore::list_shifts).
/// `None` matches everything; set fields combine as a conjunction.
#[derive(Debug, Clone, Default)]
pub struct ShiftQuery {
  pub employee_id: Option<i64>,
  pub date:        Option<NaiveDate>,
  pub shift_time:  Option<ShiftTime>,
}
