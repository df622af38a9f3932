#[derive(Debug, Clone, PartialEq, Eq, sqlx::FromRow)]
pub struct Employee {
    pub id: i64,
    pub name: String,
    pub department: Option<String>,
}

/// Input for adding an employee. Department may be left blank.
#[derive(Debug, Clone)]
pub struct NewEmployee {
    pub name: String,
    pub department: Option<String>,
}

impl NewEmployee {
    pub fn new(name: &str, department: &str) -> Self {
        let department = department.trim();
        Self {
            name: name.trim().to_string(),
            department: (!department.is_empty()).then(|| department.to_string()),
        }
    }
}
