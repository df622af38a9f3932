use crate::error::{Error, Result};
use crate::model::employee::{Employee, NewEmployee};
use sqlx::SqliteConnection;
use tracing::{error, info};

/// Add an employee and return it with its assigned id.
pub async fn add_employee(conn: &mut SqliteConnection, new: &NewEmployee) -> Result<Employee> {
    if new.name.is_empty() {
        return Err(Error::input("employee name must not be empty"));
    }

    let result = sqlx::query("INSERT INTO employees (name, department) VALUES (?, ?)")
        .bind(&new.name)
        .bind(&new.department)
        .execute(&mut *conn)
        .await
        .map_err(|e| {
            error!(error = %e, name = %new.name, "Failed to add employee");
            e
        })?;

    let employee = Employee {
        id: result.last_insert_rowid(),
        name: new.name.clone(),
        department: new.department.clone(),
    };
    info!(employee_id = employee.id, name = %employee.name, "Employee added");
    Ok(employee)
}

pub async fn list_employees(conn: &mut SqliteConnection) -> Result<Vec<Employee>> {
    let employees =
        sqlx::query_as::<_, Employee>("SELECT id, name, department FROM employees ORDER BY id")
            .fetch_all(&mut *conn)
            .await?;
    Ok(employees)
}

pub async fn employee_exists(conn: &mut SqliteConnection, employee_id: i64) -> Result<bool> {
    let exists = sqlx::query_scalar::<_, bool>(
        "SELECT EXISTS(SELECT 1 FROM employees WHERE id = ? LIMIT 1)",
    )
    .bind(employee_id)
    .fetch_one(&mut *conn)
    .await?;
    Ok(exists)
}
