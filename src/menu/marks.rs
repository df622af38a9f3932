use crate::error::Result;
use crate::menu::{Choice, Console, Session, read_choice, render, report};
use crate::model::student::{Marks, StudentRef};
use crate::ops::student;
use sqlx::SqliteConnection;
use std::io::{BufRead, Write};
use strum_macros::{Display, EnumIter};
use tracing::info;

pub const TITLE: &str = "Student Mark Management System";

#[derive(Debug, Clone, Copy, PartialEq, Eq, EnumIter, Display)]
pub enum MarkAction {
    #[strum(serialize = "Add student")]
    AddStudent,
    #[strum(serialize = "View students")]
    ViewStudents,
    #[strum(serialize = "Update marks")]
    UpdateMarks,
    #[strum(serialize = "Delete student")]
    DeleteStudent,
    #[strum(serialize = "Exit")]
    Exit,
}

pub async fn run<R: BufRead, W: Write>(
    conn: &mut SqliteConnection,
    console: &mut Console<R, W>,
) -> Result<()> {
    info!("Marks session started");
    let mut session = Session::Running;

    while session == Session::Running {
        session = match read_choice::<MarkAction, _, _>(console, TITLE)? {
            Choice::EndOfInput | Choice::Action(MarkAction::Exit) => Session::Terminated,
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
    info!("Marks session ended");
    Ok(())
}

fn ask_marks<R: BufRead, W: Write>(console: &mut Console<R, W>) -> Result<Marks> {
    let m1 = console.ask_number("Enter mark for subject 1: ", "mark")?;
    let m2 = console.ask_number("Enter mark for subject 2: ", "mark")?;
    let m3 = console.ask_number("Enter mark for subject 3: ", "mark")?;
    Marks::new(m1, m2, m3)
}

async fn perform<R: BufRead, W: Write>(
    conn: &mut SqliteConnection,
    console: &mut Console<R, W>,
    action: MarkAction,
) -> Result<()> {
    match action {
        MarkAction::AddStudent => {
            let name = console.ask("Enter student name: ")?;
            let marks = ask_marks(console)?;
            let added = student::add_student(conn, &name, marks).await?;
            console.say(format!(
                "Student {} added with ID {}. Total: {}, Average: {:.2}",
                added.name, added.id, added.total, added.average
            ))?;
        }
        MarkAction::ViewStudents => {
            let students = student::list_students(conn).await?;
            if students.is_empty() {
                console.say("No student records found.")?;
            } else {
                console.say(render::students_table(&students))?;
            }
        }
        MarkAction::UpdateMarks => {
            let who: StudentRef = console.ask("Enter student name or ID: ")?.parse()?;
            // Resolve first so an unknown name is reported before asking for marks.
            let student_id = student::resolve_student(conn, &who).await?;
            let marks = ask_marks(console)?;
            let updated = student::update_marks(conn, student_id, marks).await?;
            console.say(format!(
                "Marks updated for {}. Total: {}, Average: {:.2}",
                updated.name, updated.total, updated.average
            ))?;
        }
        MarkAction::DeleteStudent => {
            let who: StudentRef = console.ask("Enter student name or ID: ")?.parse()?;
            let student_id = student::resolve_student(conn, &who).await?;
            student::delete_student(conn, student_id).await?;
            console.say(format!("Student {student_id} deleted."))?;
        }
        MarkAction::Exit => {}
    }
    Ok(())
}
