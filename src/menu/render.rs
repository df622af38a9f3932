use crate::model::{attendance::AttendanceView, employee::Employee, student::Student};
use crate::utils::time_format::to_display;
use comfy_table::{presets::UTF8_FULL, Cell, ContentArrangement, Table};

fn table_with_header(header: &[&str]) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_header(header.iter().map(|h| Cell::new(*h)).collect::<Vec<_>>());
    table
}

pub fn employees_table(employees: &[Employee]) -> Table {
    let mut table = table_with_header(&["ID", "NAME", "DEPARTMENT"]);
    for employee in employees {
        table.add_row(vec![
            Cell::new(employee.id),
            Cell::new(&employee.name),
            Cell::new(employee.department.as_deref().unwrap_or("-")),
        ]);
    }
    table
}

pub fn attendance_table(rows: &[AttendanceView]) -> Table {
    let mut table = table_with_header(&[
        "RECORD",
        "EMPLOYEE",
        "NAME",
        "DEPARTMENT",
        "CHECK IN",
        "CHECK OUT",
        "HOURS",
    ]);
    for row in rows {
        table.add_row(vec![
            Cell::new(row.id),
            Cell::new(row.employee_id),
            Cell::new(&row.name),
            Cell::new(row.department.as_deref().unwrap_or("-")),
            Cell::new(to_display(row.check_in)),
            Cell::new(row.check_out.map(to_display).unwrap_or_else(|| "-".into())),
            Cell::new(
                row.duration_hours
                    .map(|h| format!("{h:.2}"))
                    .unwrap_or_else(|| "-".into()),
            ),
        ]);
    }
    table
}

pub fn students_table(students: &[Student]) -> Table {
    let mut table = table_with_header(&["ID", "NAME", "MARK 1", "MARK 2", "MARK 3", "TOTAL", "AVERAGE"]);
    for s in students {
        table.add_row(vec![
            Cell::new(s.id),
            Cell::new(&s.name),
            Cell::new(s.mark1),
            Cell::new(s.mark2),
            Cell::new(s.mark3),
            Cell::new(s.total),
            Cell::new(format!("{:.2}", s.average)),
        ]);
    }
    table
}
