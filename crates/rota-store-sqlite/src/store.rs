//! [`SqliteStore`] — the SQLite implementation of [`RosterStore`].

use std::path::Path;

use rusqlite::OptionalExtension as _;

use rota_core::{
  employee::{Employee, EmployeeUpdate, NewEmployee},
  shift::{NewShift, Shift, ShiftQuery, ShiftUpdate},
  store::RosterStore,
};

use crate::{
  encode::{employee_from_row, encode_date, RawShift},
  schema::SCHEMA,
  Error, Result,
};

// ─── Store ───────────────────────────────────────────────────────────────────

/// A roster store backed by a single SQLite file.
///
/// Cloning is cheap — the inner connection is reference-counted. Every
/// operation runs as one closure on the connection thread, so a
/// read-overlay-write update can never interleave with another request.
#[derive(Clone)]
pub struct SqliteStore {
  conn: tokio_rusqlite::Connection,
}

impl SqliteStore {
  /// Open (or create) a store at `path` and run schema initialisation.
  pub async fn open(path: impl AsRef<Path>) -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open(path).await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  /// Open an in-memory store — useful for testing.
  pub async fn open_in_memory() -> Result<Self> {
    let conn = tokio_rusqlite::Connection::open_in_memory().await?;
    let store = Self { conn };
    store.init_schema().await?;
    Ok(store)
  }

  async fn init_schema(&self) -> Result<()> {
    self
      .conn
      .call(|conn| {
        conn.execute_batch(SCHEMA)?;
        Ok(())
      })
      .await?;
    Ok(())
  }
}

// ─── RosterStore impl ────────────────────────────────────────────────────────

impl RosterStore for SqliteStore {
  type Error = Error;

  // ── Employees ─────────────────────────────────────────────────────────────

  async fn list_employees(&self) -> Result<Vec<Employee>> {
    let employees = self
      .conn
      .call(|conn| {
        let mut stmt = conn.prepare(
          "SELECT id, name, position, department, email
           FROM employees
           ORDER BY id ASC",
        )?;
        let rows = stmt
          .query_map([], employee_from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;
        Ok(rows)
      })
      .await?;

    Ok(employees)
  }

  async fn get_employee(&self, id: i64) -> Result<Option<Employee>> {
    let employee = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, name, position, department, email
               FROM employees WHERE id = ?1",
              rusqlite::params![id],
              employee_from_row,
            )
            .optional()?,
        )
      })
      .await?;

    Ok(employee)
  }

  async fn create_employee(&self, input: NewEmployee) -> Result<Employee> {
    let employee = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO employees (name, position, department, email)
           VALUES (?1, ?2, ?3, ?4)",
          rusqlite::params![input.name, input.position, input.department, input.email],
        )?;

        Ok(Employee {
          id:         conn.last_insert_rowid(),
          name:       input.name,
          position:   input.position,
          department: input.department,
          email:      input.email,
        })
      })
      .await?;

    Ok(employee)
  }

  async fn update_employee(
    &self,
    id: i64,
    update: EmployeeUpdate,
  ) -> Result<Option<Employee>> {
    let updated = self
      .conn
      .call(move |conn| {
        let existing = conn
          .query_row(
            "SELECT id, name, position, department, email
             FROM employees WHERE id = ?1",
            rusqlite::params![id],
            employee_from_row,
          )
          .optional()?;

        let Some(mut employee) = existing else {
          return Ok(None);
        };

        if let Some(name) = update.name {
          employee.name = name;
        }
        if let Some(position) = update.position {
          employee.position = position;
        }
        if let Some(department) = update.department {
          employee.department = department;
        }
        if let Some(email) = update.email {
          employee.email = email;
        }

        conn.execute(
          "UPDATE employees
           SET name = ?1, position = ?2, department = ?3, email = ?4
           WHERE id = ?5",
          rusqlite::params![
            employee.name,
            employee.position,
            employee.department,
            employee.email,
            id,
          ],
        )?;

        Ok(Some(employee))
      })
      .await?;

    Ok(updated)
  }

  async fn delete_employee(&self, id: i64) -> Result<Option<Employee>> {
    let deleted = self
      .conn
      .call(move |conn| {
        let existing = conn
          .query_row(
            "SELECT id, name, position, department, email
             FROM employees WHERE id = ?1",
            rusqlite::params![id],
            employee_from_row,
          )
          .optional()?;

        let Some(employee) = existing else {
          return Ok(None);
        };

        conn.execute("DELETE FROM employees WHERE id = ?1", rusqlite::params![id])?;

        Ok(Some(employee))
      })
      .await?;

    Ok(deleted)
  }

  async fn seed_employees_if_empty(&self, seed: Vec<NewEmployee>) -> Result<usize> {
    let inserted = self
      .conn
      .call(move |conn| {
        let count: i64 =
          conn.query_row("SELECT COUNT(*) FROM employees", [], |row| row.get(0))?;
        if count > 0 {
          return Ok(0);
        }

        let tx = conn.transaction()?;
        for employee in &seed {
          tx.execute(
            "INSERT INTO employees (name, position, department, email)
             VALUES (?1, ?2, ?3, ?4)",
            rusqlite::params![
              employee.name,
              employee.position,
              employee.department,
              employee.email,
            ],
          )?;
        }
        tx.commit()?;

        Ok(seed.len())
      })
      .await?;

    Ok(inserted)
  }

  // ── Shifts ────────────────────────────────────────────────────────────────

  async fn list_shifts(&self, query: &ShiftQuery) -> Result<Vec<Shift>> {
    let employee_id    = query.employee_id;
    let date_str       = query.date.map(encode_date);
    let shift_time_str = query.shift_time.map(|t| t.as_str().to_owned());

    let raws: Vec<RawShift> = self
      .conn
      .call(move |conn| {
        // Build the WHERE clause dynamically; placeholders are numbered in
        // push order so the parameter list always lines up.
        let mut conds: Vec<String> = vec![];
        let mut params: Vec<rusqlite::types::Value> = vec![];

        if let Some(id) = employee_id {
          params.push(rusqlite::types::Value::Integer(id));
          conds.push(format!("employee_id = ?{}", params.len()));
        }
        if let Some(date) = date_str {
          params.push(rusqlite::types::Value::Text(date));
          conds.push(format!("date = ?{}", params.len()));
        }
        if let Some(time) = shift_time_str {
          params.push(rusqlite::types::Value::Text(time));
          conds.push(format!("shift_time = ?{}", params.len()));
        }

        let where_clause = if conds.is_empty() {
          String::new()
        } else {
          format!("WHERE {}", conds.join(" AND "))
        };

        let sql = format!(
          "SELECT id, employee_id, employee_name, shift_time, date, status
           FROM shifts
           {where_clause}
           ORDER BY date ASC, id ASC"
        );

        let mut stmt = conn.prepare(&sql)?;
        let rows = stmt
          .query_map(rusqlite::params_from_iter(params), RawShift::from_row)?
          .collect::<rusqlite::Result<Vec<_>>>()?;

        Ok(rows)
      })
      .await?;

    raws.into_iter().map(RawShift::into_shift).collect()
  }

  async fn get_shift(&self, id: i64) -> Result<Option<Shift>> {
    let raw: Option<RawShift> = self
      .conn
      .call(move |conn| {
        Ok(
          conn
            .query_row(
              "SELECT id, employee_id, employee_name, shift_time, date, status
               FROM shifts WHERE id = ?1",
              rusqlite::params![id],
              RawShift::from_row,
            )
            .optional()?,
        )
      })
      .await?;

    raw.map(RawShift::into_shift).transpose()
  }

  async fn create_shift(&self, input: NewShift) -> Result<Shift> {
    let shift_time_str = input.shift_time.as_str();
    let date_str       = encode_date(input.date);

    let shift = self
      .conn
      .call(move |conn| {
        conn.execute(
          "INSERT INTO shifts (employee_id, employee_name, shift_time, date, status)
           VALUES (?1, ?2, ?3, ?4, ?5)",
          rusqlite::params![
            input.employee_id,
            input.employee_name,
            shift_time_str,
            date_str,
            input.status,
          ],
        )?;

        Ok(Shift {
          id:            conn.last_insert_rowid(),
          employee_id:   input.employee_id,
          employee_name: input.employee_name,
          shift_time:    input.shift_time,
          date:          input.date,
          status:        input.status,
        })
      })
      .await?;

    Ok(shift)
  }

  async fn update_shift(&self, id: i64, update: ShiftUpdate) -> Result<Option<Shift>> {
    let ShiftUpdate { employee_id, employee_name, shift_time, date, status } = update;
    let shift_time_str = shift_time.map(|t| t.as_str().to_owned());
    let date_str       = date.map(encode_date);

    let raw: Option<RawShift> = self
      .conn
      .call(move |conn| {
        let existing = conn
          .query_row(
            "SELECT id, employee_id, employee_name, shift_time, date, status
             FROM shifts WHERE id = ?1",
            rusqlite::params![id],
            RawShift::from_row,
          )
          .optional()?;

        let Some(mut shift) = existing else {
          return Ok(None);
        };

        if let Some(employee_id) = employee_id {
          shift.employee_id = employee_id;
        }
        if let Some(employee_name) = employee_name {
          shift.employee_name = employee_name;
        }
        if let Some(shift_time) = shift_time_str {
          shift.shift_time = shift_time;
        }
        if let Some(date) = date_str {
          shift.date = date;
        }
        if let Some(status) = status {
          shift.status = status;
        }

        conn.execute(
          "UPDATE shifts
           SET employee_id = ?1, employee_name = ?2, shift_time = ?3,
               date = ?4, status = ?5
           WHERE id = ?6",
          rusqlite::params![
            shift.employee_id,
            shift.employee_name,
            shift.shift_time,
            shift.date,
            shift.status,
            id,
          ],
        )?;

        Ok(Some(shift))
      })
      .await?;

    raw.map(RawShift::into_shift).transpose()
  }

  async fn delete_shift(&self, id: i64) -> Result<Option<Shift>> {
    let raw: Option<RawShift> = self
      .conn
      .call(move |conn| {
        let existing = conn
          .query_row(
            "SELECT id, employee_id, employee_name, shift_time, date, status
             FROM shifts WHERE id = ?1",
            rusqlite::params![id],
            RawShift::from_row,
          )
          .optional()?;

        let Some(shift) = existing else {
          return Ok(None);
        };

        conn.execute("DELETE FROM shifts WHERE id = ?1", rusqlite::params![id])?;

        Ok(Some(shift))
      })
      .await?;

    raw.map(RawShift::into_shift).transpose()
  }
}
