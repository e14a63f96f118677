//! SQL schema for the rota SQLite store.
//!
//! Executed once at connection startup. Future migrations will be gated on
//! `PRAGMA user_version`.

/// Full schema DDL; idempotent thanks to `CREATE TABLE IF NOT EXISTS`.
///
/// `AUTOINCREMENT` keeps row ids monotonic and never reused, so the id of a
/// deleted record is never handed out again by a later create.
///
/// `shifts.employee_id` deliberately has no foreign key: deleting an
/// employee leaves their shifts in place as orphans.
pub const SCHEMA: &str = "
PRAGMA journal_mode = WAL;

CREATE TABLE IF NOT EXISTS employees (
    id          INTEGER PRIMARY KEY AUTOINCREMENT,
    name        TEXT NOT NULL,
    position    TEXT NOT NULL,
    department  TEXT NOT NULL,
    email       TEXT NOT NULL
);

CREATE TABLE IF NOT EXISTS shifts (
    id             INTEGER PRIMARY KEY AUTOINCREMENT,
    employee_id    INTEGER NOT NULL,
    employee_name  TEXT NOT NULL,
    shift_time     TEXT NOT NULL,   -- ShiftTime label, e.g. '08-16'
    date           TEXT NOT NULL,   -- ISO 8601 calendar date
    status         TEXT NOT NULL
);

CREATE INDEX IF NOT EXISTS shifts_employee_idx ON shifts(employee_id);
CREATE INDEX IF NOT EXISTS shifts_date_idx     ON shifts(date);

PRAGMA user_version = 1;
";
