use crate::error::{Error, Result, RuleViolation};
use crate::model::student::{Marks, Student, StudentRef};
use sqlx::SqliteConnection;
use tracing::{error, info};

const SELECT_STUDENT: &str = "SELECT id, name, mark1, mark2, mark3, total, average FROM students";

/// Insert a student with total and average computed up front.
pub async fn add_student(conn: &mut SqliteConnection, name: &str, marks: Marks) -> Result<Student> {
    let name = name.trim();
    if name.is_empty() {
        return Err(Error::input("student name must not be empty"));
    }

    let [m1, m2, m3] = marks.values();
    let result = sqlx::query(
        r#"
        INSERT INTO students (name, mark1, mark2, mark3, total, average)
        VALUES (?, ?, ?, ?, ?, ?)
        "#,
    )
    .bind(name)
    .bind(m1)
    .bind(m2)
    .bind(m3)
    .bind(marks.total())
    .bind(marks.average())
    .execute(&mut *conn)
    .await
    .map_err(|e| {
        error!(error = %e, name, "Failed to add student");
        e
    })?;

    let student = Student {
        id: result.last_insert_rowid(),
        name: name.to_string(),
        mark1: m1,
        mark2: m2,
        mark3: m3,
        total: marks.total(),
        average: marks.average(),
    };
    info!(student_id = student.id, name, total = student.total, "Student added");
    Ok(student)
}

pub async fn list_students(conn: &mut SqliteConnection) -> Result<Vec<Student>> {
    let students = sqlx::query_as::<_, Student>(&format!("{SELECT_STUDENT} ORDER BY id"))
        .fetch_all(&mut *conn)
        .await?;
    Ok(students)
}

pub async fn get_student(conn: &mut SqliteConnection, student_id: i64) -> Result<Option<Student>> {
    let student = sqlx::query_as::<_, Student>(&format!("{SELECT_STUDENT} WHERE id = ?"))
        .bind(student_id)
        .fetch_optional(&mut *conn)
        .await?;
    Ok(student)
}

/// The one student with exactly this name. None or several is refused.
pub async fn find_student_by_name(conn: &mut SqliteConnection, name: &str) -> Result<Student> {
    let mut matches =
        sqlx::query_as::<_, Student>(&format!("{SELECT_STUDENT} WHERE name = ? ORDER BY id"))
            .bind(name)
            .fetch_all(&mut *conn)
            .await?;

    match matches.len() {
        0 => Err(RuleViolation::StudentNotFound(name.to_string()).into()),
        1 => Ok(matches.remove(0)),
        count => Err(RuleViolation::AmbiguousStudentName {
            name: name.to_string(),
            count,
        }
        .into()),
    }
}

/// Translate what the user typed into a student id.
pub async fn resolve_student(conn: &mut SqliteConnection, student: &StudentRef) -> Result<i64> {
    match student {
        StudentRef::Id(id) => match get_student(conn, *id).await? {
            Some(found) => Ok(found.id),
            None => Err(RuleViolation::StudentNotFound(id.to_string()).into()),
        },
        StudentRef::Name(name) => Ok(find_student_by_name(conn, name).await?.id),
    }
}

/// Replace all three marks and recompute total and average.
pub async fn update_marks(
    conn: &mut SqliteConnection,
    student_id: i64,
    marks: Marks,
) -> Result<Student> {
    let [m1, m2, m3] = marks.values();
    let result = sqlx::query(
        r#"
        UPDATE students
        SET mark1 = ?, mark2 = ?, mark3 = ?, total = ?, average = ?
        WHERE id = ?
        "#,
    )
    .bind(m1)
    .bind(m2)
    .bind(m3)
    .bind(marks.total())
    .bind(marks.average())
    .bind(student_id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RuleViolation::StudentNotFound(student_id.to_string()).into());
    }

    info!(student_id, total = marks.total(), "Marks updated");
    get_student(conn, student_id)
        .await?
        .ok_or_else(|| RuleViolation::StudentNotFound(student_id.to_string()).into())
}

pub async fn delete_student(conn: &mut SqliteConnection, student_id: i64) -> Result<()> {
    let result = sqlx::query("DELETE FROM students WHERE id = ?")
        .bind(student_id)
        .execute(&mut *conn)
        .await?;

    if result.rows_affected() == 0 {
        return Err(RuleViolation::StudentNotFound(student_id.to_string()).into());
    }

    info!(student_id, "Student deleted");
    Ok(())
}
