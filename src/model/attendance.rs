use crate::error::Result;
use crate::utils::time_format::parse_stored;
use chrono::{DateTime, Utc};

/// An attendance row as persisted. Timestamps stay text until decoded.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AttendanceRow {
    pub id: i64,
    pub employee_id: i64,
    pub check_in: String,
    pub check_out: Option<String>,
    pub duration_hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceRecord {
    pub id: i64,
    pub employee_id: i64,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
    pub duration_hours: Option<f64>,
}

impl AttendanceRecord {
    pub fn is_open(&self) -> bool {
        self.check_out.is_none()
    }
}

impl TryFrom<AttendanceRow> for AttendanceRecord {
    type Error = crate::error::Error;

    fn try_from(row: AttendanceRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            employee_id: row.employee_id,
            check_in: parse_stored(&row.check_in)?,
            check_out: row.check_out.as_deref().map(parse_stored).transpose()?,
            duration_hours: row.duration_hours,
        })
    }
}

/// One line of the attendance report: a record joined with its employee.
#[derive(Debug, Clone, sqlx::FromRow)]
pub struct AttendanceViewRow {
    pub id: i64,
    pub employee_id: i64,
    pub name: String,
    pub department: Option<String>,
    pub check_in: String,
    pub check_out: Option<String>,
    pub duration_hours: Option<f64>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct AttendanceView {
    pub id: i64,
    pub employee_id: i64,
    pub name: String,
    pub department: Option<String>,
    pub check_in: DateTime<Utc>,
    pub check_out: Option<DateTime<Utc>>,
    pub duration_hours: Option<f64>,
}

impl TryFrom<AttendanceViewRow> for AttendanceView {
    type Error = crate::error::Error;

    fn try_from(row: AttendanceViewRow) -> Result<Self> {
        Ok(Self {
            id: row.id,
            employee_id: row.employee_id,
            name: row.name,
            department: row.department,
            check_in: parse_stored(&row.check_in)?,
            check_out: row.check_out.as_deref().map(parse_stored).transpose()?,
            duration_hours: row.duration_hours,
        })
    }
}

/// What a completed check-out recorded.
#[derive(Debug, Clone, PartialEq)]
pub struct CheckOut {
    pub record_id: i64,
    pub check_in: DateTime<Utc>,
    pub check_out: DateTime<Utc>,
    pub duration_hours: f64,
}
