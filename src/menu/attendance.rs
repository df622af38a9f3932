use crate::error::Result;
use crate::menu::{Choice, Console, Session, read_choice, render, report};
use crate::model::employee::NewEmployee;
use crate::ops::{attendance, employee};
use crate::utils::time_format::to_display;
use sqlx::SqliteConnection;
use std::io::{BufRead, Write};
use strum_macros::{Display, EnumIter};
use tracing::info;

pub const TITLE: &str = "Employee Attendance Management System";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum AttendanceAction {
    #[strum(serialize = "Add employee")]
    AddEmployee,
    #[strum(serialize = "List employees")]
    ListEmployees,
    #[strum(serialize = "Check in")]
    CheckIn,
    #[strum(serialize = "Check out")]
    CheckOut,
    #[strum(serialize = "View attendance")]
    ViewAttendance,
    #[strum(serialize = "Recalculate missing durations")]
    BackfillDurations,
    #[strum(serialize = "Exit")]
    Exit,
}

/// Menu loop until Exit is chosen or input runs out.
pub async fn run<R: BufRead, W: Write>(
    conn: &mut SqliteConnection,
    console: &mut Console<R, W>,
) -> Result<()> {
    info!("Attendance session started");
    let mut session = Session::Running;

    while session == Session::Running {
        session = match read_choice::<AttendanceAction, _, _>(console, TITLE)? {
            Choice::EndOfInput | Choice::Action(AttendanceAction::Exit) => Session::Terminated,
            Choice::Invalid(text) => {
                console.say(format!("Invalid choice {text:?}, please try again."))?;
                Session::Running
            }
            Choice::Action(action) => {
                if let Err(e) = perform(conn, console, action).await {
                    report(console, e)?;
                }
                Session::Running
            }
        };
    }

    console.say("Goodbye!")?;
    info!("Attendance session ended");
    Ok(())
}

async fn perform<R: BufRead, W: Write>(
    conn: &mut SqliteConnection,
    console: &mut Console<R, W>,
    action: AttendanceAction,
) -> Result<()> {
    match action {
        AttendanceAction::AddEmployee => {
            let name = console.ask("Enter employee name: ")?;
            let department = console.ask("Enter department (optional): ")?;
            let added = employee::add_employee(conn, &NewEmployee::new(&name, &department)).await?;
            console.say(format!("Employee {} added with ID {}.", added.name, added.id))?;
        }
        AttendanceAction::ListEmployees => {
            let employees = employee::list_employees(conn).await?;
            if employees.is_empty() {
                console.say("No employees found.")?;
            } else {
                console.say(render::employees_table(&employees))?;
            }
        }
        AttendanceAction::CheckIn => {
            let employee_id = console.ask_number("Enter employee ID: ", "employee ID")?;
            let record = attendance::check_in(conn, employee_id).await?;
            console.say(format!(
                "Employee {employee_id} checked in at {}.",
                to_display(record.check_in)
            ))?;
        }
        AttendanceAction::CheckOut => {
            let employee_id = console.ask_number("Enter employee ID: ", "employee ID")?;
            let done = attendance::check_out(conn, employee_id).await?;
            console.say(format!(
                "Employee {employee_id} checked out at {}. Hours worked: {:.2}",
                to_display(done.check_out),
                done.duration_hours
            ))?;
        }
        AttendanceAction::ViewAttendance => {
            let rows = attendance::list_attendance(conn).await?;
            if rows.is_empty() {
                console.say("No attendance records found.")?;
            } else {
                console.say(render::attendance_table(&rows))?;
            }
        }
        AttendanceAction::BackfillDurations => {
            let repaired = attendance::backfill_durations(conn).await?;
            console.say(format!("Recalculated duration for {repaired} record(s)."))?;
        }
        AttendanceAction::Exit => {}
    }
    Ok(())
}
