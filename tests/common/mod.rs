use chrono::{DateTime, Utc};
use roster::db::{init_attendance_schema, init_db, init_marks_schema};
use sqlx::SqliteConnection;

/// Fresh in-memory attendance database
#[allow(dead_code)]
pub async fn attendance_db() -> SqliteConnection {
    let mut conn = init_db("sqlite::memory:").await.unwrap();
    init_attendance_schema(&mut conn).await.unwrap();
    conn
}

/// Fresh in-memory marks database
#[allow(dead_code)]
pub async fn marks_db() -> SqliteConnection {
    let mut conn = init_db("sqlite::memory:").await.unwrap();
    init_marks_schema(&mut conn).await.unwrap();
    conn
}

#[allow(dead_code)]
pub fn utc(s: &str) -> DateTime<Utc> {
    DateTime::parse_from_rfc3339(s).unwrap().with_timezone(&Utc)
}

#[allow(dead_code)]
pub async fn count(conn: &mut SqliteConnection, sql: &str) -> i64 {
    sqlx::query_scalar::<_, i64>(sql)
        .fetch_one(&mut *conn)
        .await
        .unwrap()
}
