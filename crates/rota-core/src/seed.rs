//! The fixed demo dataset used to bootstrap an empty employee directory.

use crate::employee::NewEmployee;

/// The demo employees inserted when the directory is empty at startup.
///
/// The set is fixed so that seeding stays idempotent: a freshly
/// bootstrapped store lists exactly these four records.
pub fn demo_employees() -> Vec<NewEmployee> {
  [
    ("Dr. Sarah Johnson", "Physician", "Emergency", "sarah.j@hospital.com"),
    ("Nurse Michael Chen", "Nurse", "ICU", "michael.c@hospital.com"),
    ("Dr. Emily Rodriguez", "Physician", "Cardiology", "emily.r@hospital.com"),
    ("Nurse David Kim", "Nurse", "Pediatrics", "david.k@hospital.com"),
  ]
  .into_iter()
  .map(|(name, position, department, email)| NewEmployee {
    name:       name.to_string(),
    position:   position.to_string(),
    department: department.to_string(),
    email:      email.to_string(),
  })
  .collect()
}
