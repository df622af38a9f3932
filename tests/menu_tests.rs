mod common;

use common::{attendance_db, count, marks_db};
use roster::menu::{Console, attendance, marks};
use std::io::Cursor;

type TestConsole = Console<Cursor<Vec<u8>>, Vec<u8>>;

fn console(input: &str) -> TestConsole {
    Console::new(Cursor::new(input.as_bytes().to_vec()), Vec::new())
}

fn output(console: TestConsole) -> String {
    String::from_utf8(console.into_output()).unwrap()
}

// ===== ATTENDANCE MENU =====

#[tokio::test]
async fn test_attendance_session_end_to_end() {
    let mut conn = attendance_db().await;
    // add employee, check in twice, check out, view, exit
    let mut console = console("1\nRahim\nFinance\n3\n1\n3\n1\n4\n1\n5\n7\n");

    attendance::run(&mut conn, &mut console).await.unwrap();

    let out = output(console);
    assert!(out.contains("Employee Rahim added with ID 1."));
    assert!(out.contains("Employee 1 checked in at"));
    assert!(out.contains("Employee 1 is already checked in"));
    assert!(out.contains("Employee 1 checked out at"));
    assert!(out.contains("Finance"));
    assert!(out.ends_with("Goodbye!\n"));
    assert_eq!(count(&mut conn, "SELECT COUNT(*) FROM attendance").await, 1);
}

#[tokio::test]
async fn test_attendance_empty_listing_message() {
    let mut conn = attendance_db().await;
    let mut console = console("5\n2\n7\n");

    attendance::run(&mut conn, &mut console).await.unwrap();

    let out = output(console);
    assert!(out.contains("No attendance records found."));
    assert!(out.contains("No employees found."));
}

#[tokio::test]
async fn test_bad_input_is_reported_and_loop_continues() {
    let mut conn = attendance_db().await;
    let mut console = console("9\nhello\n3\nabc\n4\n1\n7\n");

    attendance::run(&mut conn, &mut console).await.unwrap();

    let out = output(console);
    assert!(out.contains("Invalid choice \"9\""));
    assert!(out.contains("Invalid choice \"hello\""));
    assert!(out.contains("Invalid input: employee ID must be a whole number"));
    assert!(out.contains("No active check-in found for employee 1"));
    assert!(out.ends_with("Goodbye!\n"));
}

#[tokio::test]
async fn test_end_of_input_terminates_session() {
    let mut conn = attendance_db().await;
    let mut console = console("2\n");

    attendance::run(&mut conn, &mut console).await.unwrap();

    assert!(output(console).ends_with("Goodbye!\n"));
}

#[tokio::test]
async fn test_input_ending_mid_operation_is_fatal() {
    let mut conn = attendance_db().await;
    let mut console = console("1\nRahim\n");

    let err = attendance::run(&mut conn, &mut console).await.unwrap_err();

    assert!(err.is_fatal());
    assert_eq!(count(&mut conn, "SELECT COUNT(*) FROM employees").await, 0);
}

#[tokio::test]
async fn test_backfill_from_menu() {
    let mut conn = attendance_db().await;
    let mut console = console("6\n7\n");

    attendance::run(&mut conn, &mut console).await.unwrap();

    assert!(output(console).contains("Recalculated duration for 0 record(s)."));
}

// ===== MARKS MENU =====

#[tokio::test]
async fn test_marks_session_end_to_end() {
    let mut conn = marks_db().await;
    let mut console = console(concat!(
        "1\nNadia\n80\n70\n90\n",
        "3\nNadia\n100\n100\n100\n",
        "2\n",
        "4\n1\n",
        "2\n",
        "5\n",
    ));

    marks::run(&mut conn, &mut console).await.unwrap();

    let out = output(console);
    assert!(out.contains("Student Nadia added with ID 1. Total: 240, Average: 80.00"));
    assert!(out.contains("Marks updated for Nadia. Total: 300, Average: 100.00"));
    assert!(out.contains("Student 1 deleted."));
    assert!(out.contains("No student records found."));
    assert_eq!(count(&mut conn, "SELECT COUNT(*) FROM students").await, 0);
}

#[tokio::test]
async fn test_marks_out_of_range_is_rejected() {
    let mut conn = marks_db().await;
    let mut console = console("1\nNadia\n80\n170\n90\n5\n");

    marks::run(&mut conn, &mut console).await.unwrap();

    assert!(output(console).contains("Invalid input: mark 170 for subject 2"));
    assert_eq!(count(&mut conn, "SELECT COUNT(*) FROM students").await, 0);
}

#[tokio::test]
async fn test_unknown_student_is_reported_before_marks_are_asked() {
    let mut conn = marks_db().await;
    let mut console = console("3\nGhost\n5\n");

    marks::run(&mut conn, &mut console).await.unwrap();

    let out = output(console);
    assert!(out.contains("Student Ghost not found"));
    assert!(!out.contains("Enter mark for subject 1"));
}
