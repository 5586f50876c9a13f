use hackbright_tracker::{Error, ProjectGrade, Result, SqliteConfig, Tracker};
use rusqlite::{params, Connection};
use tempfile::NamedTempFile;

const SCHEMA: &str = include_str!("../schema.sql");

// Helper function to create an in-memory database for testing
fn create_test_db() -> Result<Tracker> {
    create_graded_db(&[])
}

// Grade rows are never created by the tracker itself, so they are seeded
// through the raw connection before it is handed over
fn create_graded_db(grades: &[(&str, &str, Option<i64>)]) -> Result<Tracker> {
    let conn = Connection::open_in_memory()?;
    conn.execute_batch(SCHEMA)?;
    for (github, title, grade) in grades {
        conn.execute(
            "INSERT INTO Grades (student_github, project_title, grade) VALUES (?1, ?2, ?3)",
            params![*github, *title, *grade],
        )?;
    }
    Ok(Tracker::from_connection(conn))
}

// Helper function to create a temporary file-based database
fn create_temp_db() -> Result<(Tracker, NamedTempFile)> {
    let temp_file = NamedTempFile::new().unwrap();
    Connection::open(temp_file.path())?.execute_batch(SCHEMA)?;
    let tracker = Tracker::open(&SqliteConfig::new(temp_file.path()))?;
    Ok((tracker, temp_file))
}

#[test]
fn test_student_round_trip() {
    test_student_round_trip_impl().unwrap();
}

fn test_student_round_trip_impl() -> Result<()> {
    let tracker = create_test_db()?;
    tracker.create_student("Ada", "Lovelace", "ada99")?;
    tracker.create_student("Grace", "Hopper", "cobol")?;

    let student = tracker.student_by_github("ada99")?;
    assert_eq!(student.first_name, "Ada");
    assert_eq!(student.last_name, "Lovelace");
    assert_eq!(student.github, "ada99");
    assert_eq!(tracker.student_by_github("cobol")?.full_name(), "Grace Hopper");
    Ok(())
}

#[test]
fn test_missing_rows_are_not_found() {
    let tracker = create_test_db().unwrap();
    assert!(matches!(tracker.student_by_github("nobody"), Err(Error::NotFound(_))));
    assert!(matches!(tracker.project_by_title("nothing"), Err(Error::NotFound(_))));
    assert!(matches!(tracker.grade_for("nobody", "nothing"), Err(Error::NotFound(_))));
}

#[test]
fn test_duplicate_student_is_a_database_error() {
    let tracker = create_test_db().unwrap();
    tracker.create_student("Ada", "Lovelace", "ada99").unwrap();
    assert!(matches!(
        tracker.create_student("Ada", "Byron", "ada99"),
        Err(Error::Database(_))
    ));
}

#[test]
fn test_project_round_trip() {
    test_project_round_trip_impl().unwrap();
}

fn test_project_round_trip_impl() -> Result<()> {
    let tracker = create_test_db()?;
    tracker.create_project("calc", "Differential engine", 100)?;

    let project = tracker.project_by_title("calc")?;
    assert_eq!(project.title, "calc");
    assert_eq!(project.description, "Differential engine");
    assert_eq!(project.max_grade, Some(100));
    Ok(())
}

#[test]
fn test_assign_then_lookup_grade() {
    test_assign_then_lookup_grade_impl().unwrap();
}

fn test_assign_then_lookup_grade_impl() -> Result<()> {
    let tracker = create_graded_db(&[("ada99", "calc", None)])?;
    tracker.create_student("Ada", "Lovelace", "ada99")?;
    tracker.create_project("calc", "Differential engine", 100)?;

    assert_eq!(tracker.grade_for("ada99", "calc")?, None);
    assert_eq!(tracker.assign_grade("ada99", "calc", 95)?, 1);
    assert_eq!(tracker.grade_for("ada99", "calc")?, Some(95));
    Ok(())
}

#[test]
fn test_assign_grade_without_row_changes_nothing() {
    let tracker = create_test_db().unwrap();
    tracker.create_student("Ada", "Lovelace", "ada99").unwrap();
    assert_eq!(tracker.assign_grade("ada99", "calc", 95).unwrap(), 0);
    assert!(matches!(tracker.grade_for("ada99", "calc"), Err(Error::NotFound(_))));
}

#[test]
fn test_grades_for_student() {
    test_grades_for_student_impl().unwrap();
}

fn test_grades_for_student_impl() -> Result<()> {
    let tracker = create_graded_db(&[
        ("ada99", "notes", Some(88)),
        ("ada99", "calc", Some(95)),
        ("cobol", "calc", Some(70)),
    ])?;
    tracker.create_student("Ada", "Lovelace", "ada99")?;
    tracker.create_student("Grace", "Hopper", "cobol")?;

    assert_eq!(
        tracker.grades_for_student("Ada", "Lovelace")?,
        vec![
            ProjectGrade {
                project_title: "calc".to_string(),
                grade: Some(95),
            },
            ProjectGrade {
                project_title: "notes".to_string(),
                grade: Some(88),
            },
        ]
    );
    assert!(tracker.grades_for_student("Alan", "Turing")?.is_empty());
    Ok(())
}

#[test]
fn test_writes_survive_reopen() {
    test_writes_survive_reopen_impl().unwrap();
}

fn test_writes_survive_reopen_impl() -> Result<()> {
    let (tracker, temp_file) = create_temp_db()?;
    tracker.create_student("Ada", "Lovelace", "ada99")?;
    tracker.close()?;

    let reopened = Tracker::open(&SqliteConfig::new(temp_file.path()))?;
    assert_eq!(reopened.student_by_github("ada99")?.full_name(), "Ada Lovelace");
    Ok(())
}

#[test]
fn test_open_missing_database_fails() {
    let dir = tempfile::tempdir().unwrap();
    let config = SqliteConfig::new(dir.path().join("missing.db"));
    assert!(matches!(Tracker::open(&config), Err(Error::Database(_))));
    assert!(!config.db_path.exists());
}
