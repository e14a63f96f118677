//! `rota` — command-line client for the rota shift-scheduling API.
//!
//! A thin consumer of the REST surface: values are passed through verbatim
//! and all validation happens server-side, so the messages printed on
//! failure are the server's own.
//!
//! # Usage
//!
//! ```text
//! rota employees list
//! rota employees add --name "Dr. Gregory House" --position Physician \
//!     --department Diagnostics --email house@hospital.com
//! rota shifts list --employee-id 3 --date 2025-01-10
//! rota shifts add --employee-id 3 --employee-name "Dr. Gregory House" \
//!     --shift-time 08-16 --date 2025-01-10
//! ```

mod client;

use anyhow::Result;
use clap::{Parser, Subcommand};
use client::ApiClient;
use rota_core::{employee::Employee, shift::Shift};
use serde_json::{Map, Value, json};

// ─── CLI args ─────────────────────────────────────────────────────────────────

#[derive(Parser)]
#[command(name = "rota", about = "Command-line client for the rota API")]
struct Cli {
  /// Base URL of the rota server.
  #[arg(long, default_value = "http://127.0.0.1:8080")]
  server: String,

  #[command(subcommand)]
  command: Command,
}

#[derive(Subcommand)]
enum Command {
  /// Employee directory operations.
  #[command(subcommand)]
  Employees(EmployeeCommand),
  /// Shift roster operations.
  #[command(subcommand)]
  Shifts(ShiftCommand),
}

#[derive(Subcommand)]
enum EmployeeCommand {
  /// List every employee.
  List,
  /// Show one employee.
  Show { id: i64 },
  /// Create an employee.
  Add {
    #[arg(long)]
    name: String,
    #[arg(long)]
    position: String,
    #[arg(long)]
    department: String,
    #[arg(long)]
    email: String,
  },
  /// Update an employee; only the given fields change.
  Update {
    id: i64,
    #[arg(long)]
    name: Option<String>,
    #[arg(long)]
    position: Option<String>,
    #[arg(long)]
    department: Option<String>,
    #[arg(long)]
    email: Option<String>,
  },
  /// Delete an employee.
  Rm { id: i64 },
}

#[derive(Subcommand)]
enum ShiftCommand {
  /// List shifts, optionally filtered; filters combine as a conjunction.
  List {
    #[arg(long)]
    employee_id: Option<i64>,
    /// Calendar date, e.g. 2025-01-10.
    #[arg(long)]
    date: Option<String>,
    /// Shift window label, e.g. 08-16.
    #[arg(long)]
    shift_time: Option<String>,
  },
  /// Show one shift.
  Show { id: i64 },
  /// Create a shift.
  Add {
    #[arg(long)]
    employee_id: i64,
    #[arg(long)]
    employee_name: String,
    /// Shift window label, e.g. 08-16.
    #[arg(long)]
    shift_time: String,
    /// Calendar date, e.g. 2025-01-10.
    #[arg(long)]
    date: String,
    #[arg(long)]
    status: Option<String>,
  },
  /// Update a shift; only the given fields change.
  Update {
    id: i64,
    #[arg(long)]
    employee_id: Option<i64>,
    #[arg(long)]
    employee_name: Option<String>,
    #[arg(long)]
    shift_time: Option<String>,
    #[arg(long)]
    date: Option<String>,
    #[arg(long)]
    status: Option<String>,
  },
  /// Delete a shift.
  Rm { id: i64 },
}

// ─── Entry point ──────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
  let cli = Cli::parse();
  let client = ApiClient::new(&cli.server)?;

  match cli.command {
    Command::Employees(cmd) => run_employees(&client, cmd).await,
    Command::Shifts(cmd) => run_shifts(&client, cmd).await,
  }
}

async fn run_employees(client: &ApiClient, cmd: EmployeeCommand) -> Result<()> {
  match cmd {
    EmployeeCommand::List => {
      for employee in client.list_employees().await? {
        print_employee(&employee);
      }
    }
    EmployeeCommand::Show { id } => {
      print_employee(&client.get_employee(id).await?);
    }
    EmployeeCommand::Add { name, position, department, email } => {
      let (employee, message) = client
        .create_employee(&name, &position, &department, &email)
        .await?;
      report(message);
      print_employee(&employee);
    }
    EmployeeCommand::Update { id, name, position, department, email } => {
      let mut fields = Map::new();
      insert_if_set(&mut fields, "name", name.map(Value::String));
      insert_if_set(&mut fields, "position", position.map(Value::String));
      insert_if_set(&mut fields, "department", department.map(Value::String));
      insert_if_set(&mut fields, "email", email.map(Value::String));

      let (employee, message) = client.update_employee(id, fields).await?;
      report(message);
      print_employee(&employee);
    }
    EmployeeCommand::Rm { id } => {
      let (employee, message) = client.delete_employee(id).await?;
      report(message);
      print_employee(&employee);
    }
  }
  Ok(())
}

async fn run_shifts(client: &ApiClient, cmd: ShiftCommand) -> Result<()> {
  match cmd {
    ShiftCommand::List { employee_id, date, shift_time } => {
      let mut filters: Vec<(&str, String)> = vec![];
      if let Some(id) = employee_id {
        filters.push(("employeeId", id.to_string()));
      }
      if let Some(date) = date {
        filters.push(("date", date));
      }
      if let Some(time) = shift_time {
        filters.push(("shiftTime", time));
      }

      for shift in client.list_shifts(&filters).await? {
        print_shift(&shift);
      }
    }
    ShiftCommand::Show { id } => {
      print_shift(&client.get_shift(id).await?);
    }
    ShiftCommand::Add { employee_id, employee_name, shift_time, date, status } => {
      let (shift, message) = client
        .create_shift(
          employee_id,
          &employee_name,
          &shift_time,
          &date,
          status.as_deref(),
        )
        .await?;
      report(message);
      print_shift(&shift);
    }
    ShiftCommand::Update { id, employee_id, employee_name, shift_time, date, status } => {
      let mut fields = Map::new();
      insert_if_set(&mut fields, "employeeId", employee_id.map(|v| json!(v)));
      insert_if_set(&mut fields, "employeeName", employee_name.map(Value::String));
      insert_if_set(&mut fields, "shiftTime", shift_time.map(Value::String));
      insert_if_set(&mut fields, "date", date.map(Value::String));
      insert_if_set(&mut fields, "status", status.map(Value::String));

      let (shift, message) = client.update_shift(id, fields).await?;
      report(message);
      print_shift(&shift);
    }
    ShiftCommand::Rm { id } => {
      let (shift, message) = client.delete_shift(id).await?;
      report(message);
      print_shift(&shift);
    }
  }
  Ok(())
}

// ─── Output helpers ───────────────────────────────────────────────────────────

fn insert_if_set(fields: &mut Map<String, Value>, key: &str, value: Option<Value>) {
  if let Some(v) = value {
    fields.insert(key.to_string(), v);
  }
}

fn report(message: Option<String>) {
  if let Some(m) = message {
    println!("{m}");
  }
}

fn print_employee(employee: &Employee) {
  println!(
    "{:<5} {:<24} {:<14} {:<14} {}",
    employee.id, employee.name, employee.position, employee.department, employee.email
  );
}

fn print_shift(shift: &Shift) {
  // NaiveDate's Display ignores width flags; pad the rendered string.
  let date = shift.date.to_string();
  println!(
    "{:<5} {:<12} {:<6} {:<5} {:<24} {}",
    shift.id, date, shift.shift_time, shift.employee_id, shift.employee_name, shift.status
  );
}
