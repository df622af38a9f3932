use sqlx::sqlite::{SqliteConnectOptions, SqliteConnection};
use sqlx::ConnectOptions;
use std::str::FromStr;
use tracing::{debug, info};

/// Open the single connection a process works with. The database file is
/// created when it does not exist yet.
pub async fn init_db(database_url: &str) -> Result<SqliteConnection, sqlx::Error> {
    let conn = SqliteConnectOptions::from_str(database_url)?
        .create_if_missing(true)
        .connect()
        .await?;

    info!(database_url, "Database opened");
    Ok(conn)
}

const ATTENDANCE_SCHEMA: &[&str] = &[
    r#"
    CREATE TABLE IF NOT EXISTS employees (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL CHECK (length(trim(name)) > 0),
        department TEXT
    )
    "#,
    r#"
    CREATE TABLE IF NOT EXISTS attendance (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        employee_id INTEGER NOT NULL REFERENCES employees(id),
        check_in TEXT NOT NULL,
        check_out TEXT,
        duration_hours REAL
    )
    "#,
    r#"
    CREATE INDEX IF NOT EXISTS idx_attendance_open
        ON attendance(employee_id, check_out)
    "#,
];

const MARKS_SCHEMA: &[&str] = &[r#"
    CREATE TABLE IF NOT EXISTS students (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        name TEXT NOT NULL,
        mark1 INTEGER NOT NULL,
        mark2 INTEGER NOT NULL,
        mark3 INTEGER NOT NULL,
        total INTEGER NOT NULL,
        average REAL NOT NULL
    )
    "#];

pub async fn init_attendance_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    apply(conn, ATTENDANCE_SCHEMA).await
}

pub async fn init_marks_schema(conn: &mut SqliteConnection) -> Result<(), sqlx::Error> {
    apply(conn, MARKS_SCHEMA).await
}

async fn apply(conn: &mut SqliteConnection, statements: &[&str]) -> Result<(), sqlx::Error> {
    for sql in statements {
        debug!(sql = %sql.trim(), "Applying schema");
        sqlx::query(sql).execute(&mut *conn).await?;
    }
    Ok(())
}
