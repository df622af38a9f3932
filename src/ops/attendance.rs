use crate::error::{Result, RuleViolation};
use crate::model::attendance::{
    AttendanceRecord, AttendanceRow, AttendanceView, AttendanceViewRow, CheckOut,
};
use crate::ops::employee::employee_exists;
use crate::utils::time_format::{duration_hours, now, parse_stored, to_stored};
use chrono::{DateTime, Utc};
use futures::TryStreamExt;
use sqlx::SqliteConnection;
use tracing::{debug, info, warn};

/// Most recent record for the employee that has no check-out yet.
pub async fn find_open_record(
    conn: &mut SqliteConnection,
    employee_id: i64,
) -> Result<Option<AttendanceRecord>> {
    let row = sqlx::query_as::<_, AttendanceRow>(
        r#"
        SELECT id, employee_id, check_in, check_out, duration_hours
        FROM attendance
        WHERE employee_id = ?
        AND check_out IS NULL
        ORDER BY id DESC
        LIMIT 1
        "#,
    )
    .bind(employee_id)
    .fetch_optional(&mut *conn)
    .await?;

    row.map(AttendanceRecord::try_from).transpose()
}

pub async fn check_in(conn: &mut SqliteConnection, employee_id: i64) -> Result<AttendanceRecord> {
    check_in_at(conn, employee_id, now()).await
}

/// Open a new attendance record at `at`.
///
/// Refused when the employee is unknown or already has an open record.
pub async fn check_in_at(
    conn: &mut SqliteConnection,
    employee_id: i64,
    at: DateTime<Utc>,
) -> Result<AttendanceRecord> {
    if !employee_exists(conn, employee_id).await? {
        info!(employee_id, "Check-in refused: unknown employee");
        return Err(RuleViolation::EmployeeNotFound(employee_id).into());
    }

    if let Some(open) = find_open_record(conn, employee_id).await? {
        info!(employee_id, record_id = open.id, "Check-in refused: already checked in");
        return Err(RuleViolation::AlreadyCheckedIn { employee_id }.into());
    }

    let result = sqlx::query("INSERT INTO attendance (employee_id, check_in) VALUES (?, ?)")
        .bind(employee_id)
        .bind(to_stored(at))
        .execute(&mut *conn)
        .await?;

    let record = AttendanceRecord {
        id: result.last_insert_rowid(),
        employee_id,
        check_in: at,
        check_out: None,
        duration_hours: None,
    };
    info!(employee_id, record_id = record.id, "Checked in");
    Ok(record)
}

pub async fn check_out(conn: &mut SqliteConnection, employee_id: i64) -> Result<CheckOut> {
    check_out_at(conn, employee_id, now()).await
}

/// Close the employee's open record at `at` and store its duration.
pub async fn check_out_at(
    conn: &mut SqliteConnection,
    employee_id: i64,
    at: DateTime<Utc>,
) -> Result<CheckOut> {
    let Some(open) = find_open_record(conn, employee_id).await? else {
        info!(employee_id, "Check-out refused: no active check-in");
        return Err(RuleViolation::NoActiveCheckIn { employee_id }.into());
    };

    if at < open.check_in {
        warn!(employee_id, record_id = open.id, "Check-out is earlier than check-in");
    }
    let hours = duration_hours(open.check_in, at);

    // Keyed by record id so no other row of this employee is touched.
    let result = sqlx::query(
        r#"
        UPDATE attendance
        SET check_out = ?, duration_hours = ?
        WHERE id = ?
        AND check_out IS NULL
        "#,
    )
    .bind(to_stored(at))
    .bind(hours)
    .bind(open.id)
    .execute(&mut *conn)
    .await?;

    if result.rows_affected() == 0 {
        return Err(RuleViolation::NoActiveCheckIn { employee_id }.into());
    }

    info!(employee_id, record_id = open.id, hours, "Checked out");
    Ok(CheckOut {
        record_id: open.id,
        check_in: open.check_in,
        check_out: at,
        duration_hours: hours,
    })
}

/// Every record joined with its employee, newest check-in first.
///
/// Runs the join again on each call.
pub async fn list_attendance(conn: &mut SqliteConnection) -> Result<Vec<AttendanceView>> {
    let mut rows = sqlx::query_as::<_, AttendanceViewRow>(
        r#"
        SELECT a.id, a.employee_id, e.name, e.department,
               a.check_in, a.check_out, a.duration_hours
        FROM attendance a
        JOIN employees e ON e.id = a.employee_id
        ORDER BY a.check_in DESC, a.id DESC
        "#,
    )
    .fetch(&mut *conn);

    let mut views = Vec::new();
    while let Some(row) = rows.try_next().await? {
        views.push(AttendanceView::try_from(row)?);
    }
    drop(rows);

    // Rows from an earlier version hold 12-hour text, which does not sort
    // chronologically as text. Order by the decoded instant.
    views.sort_by(|a, b| b.check_in.cmp(&a.check_in).then(b.id.cmp(&a.id)));
    debug!(count = views.len(), "Attendance listed");
    Ok(views)
}

/// Fill in the duration of closed records that lack one.
///
/// Every candidate is parsed before anything is written, so a malformed
/// timestamp aborts the run with the table untouched. Returns the number of
/// records repaired.
pub async fn backfill_durations(conn: &mut SqliteConnection) -> Result<usize> {
    let rows = sqlx::query_as::<_, (i64, String, String)>(
        r#"
        SELECT id, check_in, check_out
        FROM attendance
        WHERE check_out IS NOT NULL
        AND duration_hours IS NULL
        ORDER BY id
        "#,
    )
    .fetch_all(&mut *conn)
    .await?;

    let mut repairs = Vec::with_capacity(rows.len());
    for (id, check_in, check_out) in &rows {
        let hours = duration_hours(parse_stored(check_in)?, parse_stored(check_out)?);
        repairs.push((*id, hours));
    }

    for (id, hours) in &repairs {
        sqlx::query("UPDATE attendance SET duration_hours = ? WHERE id = ?")
            .bind(hours)
            .bind(id)
            .execute(&mut *conn)
            .await?;
        debug!(record_id = id, hours, "Duration backfilled");
    }

    info!(repaired = repairs.len(), "Duration backfill finished");
    Ok(repairs.len())
}
