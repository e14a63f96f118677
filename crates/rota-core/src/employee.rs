//! Employee — the staff-directory side of the roster.
//!
//! An employee is a flat record; shifts reference it by id and carry a
//! denormalised copy of the name.

use serde::{Deserialize, Serialize};

use crate::{Error, Result};

/// A member of staff who can be rostered onto shifts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
  pub id:         i64,
  pub name:       String,
  pub position:   String,
  pub department: String,
  pub email:      String,
}

/// Input to [`RosterStore::create_employee`](crate::store::RosterStore::create_employee).
/// The id is always assigned by the store, never accepted from callers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewEmployee {
  pub name:       String,
  pub position:   String,
  pub department: String,
  pub email:      String,
}

impl NewEmployee {
  /// All four directory fields are required and must be non-empty.
  pub fn validate(&self) -> Result<()> {
    for (field, value) in [
      ("name", &self.name),
      ("position", &self.position),
      ("department", &self.department),
      ("email", &self.email),
    ] {
      if value.is_empty() {
        return Err(Error::MissingField(field));
      }
    }
    Ok(())
  }
}

/// Partial overlay for [`RosterStore::update_employee`](crate::store::RosterStore::update_employee).
/// `None` leaves the stored value unchanged.
#[derive(Debug, Clone, Default)]
pub struct EmployeeUpdate {
  pub name:       Option<String>,
  pub position:   Option<String>,
  pub department: Option<String>,
  pub email:      Option<String>,
}

impl EmployeeUpdate {
  /// Fields that are present must still be non-empty; a required field
  /// cannot be blanked out by an update.
  pub fn validate(&self) -> Result<()> {
    for (field, value) in [
      ("name", &self.name),
      ("position", &self.position),
      ("department", &self.department),
      ("email", &self.email),
    ] {
      if let Some(v) = value
        && v.is_empty()
      {
        return Err(Error::MissingField(field));
      }
    }
    Ok(())
  }
}
