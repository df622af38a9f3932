use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

/// Everything an operation can fail with.
///
/// Only `Io` ends a console session; every other member is reported to the
/// user and the menu loop carries on.
#[derive(Debug, Error)]
pub enum Error {
    #[error("{0}")]
    Rule(#[from] RuleViolation),

    #[error("Invalid input: {0}")]
    Input(String),

    #[error("Database error: {0}")]
    Persistence(#[from] sqlx::Error),

    #[error("Malformed timestamp {value:?}: {reason}")]
    Timestamp { value: String, reason: String },

    #[error("Console error: {0}")]
    Io(#[from] std::io::Error),
}

/// Domain rules an operation refused to break. Nothing was written.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RuleViolation {
    #[error("Employee {employee_id} is already checked in")]
    AlreadyCheckedIn { employee_id: i64 },

    #[error("No active check-in found for employee {employee_id}")]
    NoActiveCheckIn { employee_id: i64 },

    #[error("Employee {0} not found")]
    EmployeeNotFound(i64),

    #[error("Student {0} not found")]
    StudentNotFound(String),

    #[error("{count} students are named {name:?}; use the student id instead")]
    AmbiguousStudentName { name: String, count: usize },
}

impl Error {
    pub fn input(msg: impl Into<String>) -> Self {
        Error::Input(msg.into())
    }

    pub fn is_fatal(&self) -> bool {
        matches!(self, Error::Io(_))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rule_violation_message_is_shown_verbatim() {
        let err: Error = RuleViolation::AlreadyCheckedIn { employee_id: 7 }.into();
        assert_eq!(err.to_string(), "Employee 7 is already checked in");
        assert!(!err.is_fatal());
    }

    #[test]
    fn only_console_failures_are_fatal() {
        let io = Error::from(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"));
        assert!(io.is_fatal());
        assert!(!Error::input("bad id").is_fatal());
        assert!(!Error::Persistence(sqlx::Error::RowNotFound).is_fatal());
    }

    #[test]
    fn ambiguous_name_reports_count() {
        let err = RuleViolation::AmbiguousStudentName {
            name: "Asha".into(),
            count: 2,
        };
        assert!(err.to_string().starts_with("2 students are named \"Asha\""));
    }
}
