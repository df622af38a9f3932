mod common;

use common::{count, marks_db};
use roster::model::student::{Marks, StudentRef};
use roster::ops::student;
use roster::{Error, RuleViolation};

fn marks(m1: i64, m2: i64, m3: i64) -> Marks {
    Marks::new(m1, m2, m3).unwrap()
}

#[tokio::test]
async fn test_add_student_computes_total_and_average() {
    let mut conn = marks_db().await;
    let added = student::add_student(&mut conn, "Nadia", marks(80, 70, 90))
        .await
        .unwrap();

    assert_eq!(added.total, 240);
    assert_eq!(added.average, 80.0);

    let stored = student::get_student(&mut conn, added.id).await.unwrap().unwrap();
    assert_eq!(stored, added);
}

#[tokio::test]
async fn test_update_marks_recomputes_in_place() {
    let mut conn = marks_db().await;
    let added = student::add_student(&mut conn, "Nadia", marks(80, 70, 90))
        .await
        .unwrap();

    let id = student::resolve_student(&mut conn, &StudentRef::Name("Nadia".into()))
        .await
        .unwrap();
    let updated = student::update_marks(&mut conn, id, marks(100, 100, 100))
        .await
        .unwrap();

    assert_eq!(updated.id, added.id);
    assert_eq!(updated.total, 300);
    assert_eq!(updated.average, 100.0);
    assert_eq!(count(&mut conn, "SELECT COUNT(*) FROM students").await, 1);
}

#[tokio::test]
async fn test_delete_student_leaves_others_untouched() {
    let mut conn = marks_db().await;
    let a = student::add_student(&mut conn, "Nadia", marks(80, 70, 90)).await.unwrap();
    let b = student::add_student(&mut conn, "Tanvir", marks(50, 60, 70)).await.unwrap();
    let c = student::add_student(&mut conn, "Mitu", marks(99, 98, 97)).await.unwrap();

    student::delete_student(&mut conn, b.id).await.unwrap();

    let remaining = student::list_students(&mut conn).await.unwrap();
    assert_eq!(remaining, vec![a, c]);
}

#[tokio::test]
async fn test_list_students_in_id_order() {
    let mut conn = marks_db().await;
    assert!(student::list_students(&mut conn).await.unwrap().is_empty());

    for name in ["Zara", "Adil", "Mitu"] {
        student::add_student(&mut conn, name, marks(1, 2, 3)).await.unwrap();
    }

    let names: Vec<_> = student::list_students(&mut conn)
        .await
        .unwrap()
        .into_iter()
        .map(|s| s.name)
        .collect();
    assert_eq!(names, vec!["Zara", "Adil", "Mitu"]);
}

#[tokio::test]
async fn test_unknown_name_is_not_found() {
    let mut conn = marks_db().await;
    let result = student::find_student_by_name(&mut conn, "Ghost").await;

    assert!(matches!(
        result,
        Err(Error::Rule(RuleViolation::StudentNotFound(name))) if name == "Ghost"
    ));
}

#[tokio::test]
async fn test_duplicate_names_are_ambiguous_but_ids_still_work() {
    let mut conn = marks_db().await;
    student::add_student(&mut conn, "Asha", marks(10, 20, 30)).await.unwrap();
    let second = student::add_student(&mut conn, "Asha", marks(40, 50, 60)).await.unwrap();

    let by_name = student::resolve_student(&mut conn, &StudentRef::Name("Asha".into())).await;
    assert!(matches!(
        by_name,
        Err(Error::Rule(RuleViolation::AmbiguousStudentName { count: 2, .. }))
    ));

    let id = student::resolve_student(&mut conn, &StudentRef::Id(second.id))
        .await
        .unwrap();
    student::delete_student(&mut conn, id).await.unwrap();

    let only = student::find_student_by_name(&mut conn, "Asha").await.unwrap();
    assert_eq!(only.total, 60);
}

#[tokio::test]
async fn test_missing_id_is_reported_for_update_and_delete() {
    let mut conn = marks_db().await;

    assert!(matches!(
        student::update_marks(&mut conn, 9, marks(1, 1, 1)).await,
        Err(Error::Rule(RuleViolation::StudentNotFound(_)))
    ));
    assert!(matches!(
        student::delete_student(&mut conn, 9).await,
        Err(Error::Rule(RuleViolation::StudentNotFound(_)))
    ));
}

#[tokio::test]
async fn test_blank_student_name_is_rejected() {
    let mut conn = marks_db().await;
    let result = student::add_student(&mut conn, "  ", marks(1, 2, 3)).await;

    assert!(matches!(result, Err(Error::Input(_))));
    assert_eq!(count(&mut conn, "SELECT COUNT(*) FROM students").await, 0);
}
