use log::debug;
use rusqlite::{params, Connection, OpenFlags, OptionalExtension};
use std::path::PathBuf;

use crate::error::{Error, Result};
use crate::model::{Project, ProjectGrade, Student};

/// Default database file, relative to the working directory
pub const DEFAULT_DB_PATH: &str = "hackbright.db";

/// SQLite configuration for the tracker
#[derive(Debug, Clone, PartialEq)]
pub struct SqliteConfig {
    /// Path to the SQLite database file
    pub db_path: PathBuf,
}

impl SqliteConfig {
    /// Create a new SQLite config for the given database path
    pub fn new(db_path: impl Into<PathBuf>) -> Self {
        Self {
            db_path: db_path.into(),
        }
    }
}

/// Handle on the students/projects/grades database.
///
/// Owns a single connection for the life of the session. Every statement runs
/// in SQLite's autocommit mode, so mutations are committed as soon as they
/// return.
pub struct Tracker {
    conn: Connection,
}

impl Tracker {
    /// Open an existing database. The tables are expected to be there already;
    /// a missing file is an error rather than an empty database.
    pub fn open(config: &SqliteConfig) -> Result<Self> {
        let conn = Connection::open_with_flags(
            &config.db_path,
            OpenFlags::SQLITE_OPEN_READ_WRITE | OpenFlags::SQLITE_OPEN_URI,
        )?;
        debug!("opened database at {}", config.db_path.display());
        Ok(Self::from_connection(conn))
    }

    /// Wrap a connection that is already open (in-memory databases, tests)
    pub fn from_connection(conn: Connection) -> Self {
        Self { conn }
    }

    /// Close the connection, surfacing any error SQLite reports on the way out
    pub fn close(self) -> Result<()> {
        self.conn.close().map_err(|(_, err)| Error::Database(err))
    }

    pub fn student_by_github(&self, github: &str) -> Result<Student> {
        debug!("looking up student {}", github);
        self.conn
            .query_row(
                "SELECT first_name, last_name, github FROM Students WHERE github = ?1",
                params![github],
                |row| {
                    Ok(Student {
                        first_name: row.get(0)?,
                        last_name: row.get(1)?,
                        github: row.get(2)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("no student with github account {}", github)))
    }

    pub fn create_student(&self, first_name: &str, last_name: &str, github: &str) -> Result<Student> {
        self.conn.execute(
            "INSERT INTO Students (first_name, last_name, github) VALUES (?1, ?2, ?3)",
            params![first_name, last_name, github],
        )?;
        debug!("inserted student {}", github);
        Ok(Student {
            first_name: first_name.to_string(),
            last_name: last_name.to_string(),
            github: github.to_string(),
        })
    }

    pub fn project_by_title(&self, title: &str) -> Result<Project> {
        debug!("looking up project {}", title);
        self.conn
            .query_row(
                "SELECT title, description, max_grade FROM Projects WHERE title = ?1",
                params![title],
                |row| {
                    Ok(Project {
                        title: row.get(0)?,
                        description: row.get::<_, Option<String>>(1)?.unwrap_or_default(),
                        max_grade: row.get(2)?,
                    })
                },
            )
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("no project titled {}", title)))
    }

    /// Grade a student received on a project. The inner `None` is a grade row
    /// that exists but has not been filled in yet.
    pub fn grade_for(&self, github: &str, title: &str) -> Result<Option<i64>> {
        debug!("looking up grade of {} for {}", github, title);
        self.conn
            .query_row(
                "SELECT grade FROM Grades WHERE student_github = ?1 AND project_title = ?2",
                params![github, title],
                |row| row.get::<_, Option<i64>>(0),
            )
            .optional()?
            .ok_or_else(|| Error::NotFound(format!("no grade for {} on project {}", github, title)))
    }

    /// Set the grade on an existing grade row and return how many rows changed.
    /// Zero means no row matched; nothing is inserted in that case.
    pub fn assign_grade(&self, github: &str, title: &str, grade: i64) -> Result<usize> {
        let changed = self.conn.execute(
            "UPDATE Grades SET grade = ?1 WHERE student_github = ?2 AND project_title = ?3",
            params![grade, github, title],
        )?;
        debug!("assigned grade {} to {} for {} ({} rows)", grade, github, title, changed);
        Ok(changed)
    }

    pub fn create_project(&self, title: &str, description: &str, max_grade: i64) -> Result<Project> {
        self.conn.execute(
            "INSERT INTO Projects (title, description, max_grade) VALUES (?1, ?2, ?3)",
            params![title, description, max_grade],
        )?;
        debug!("inserted project {}", title);
        Ok(Project {
            title: title.to_string(),
            description: description.to_string(),
            max_grade: Some(max_grade),
        })
    }

    /// Every project and grade recorded for the student with this name
    pub fn grades_for_student(&self, first_name: &str, last_name: &str) -> Result<Vec<ProjectGrade>> {
        let mut stmt = self.conn.prepare(
            "SELECT Grades.project_title, Grades.grade
             FROM Grades JOIN Students ON (Students.github = Grades.student_github)
             WHERE Students.first_name = ?1 AND Students.last_name = ?2
             ORDER BY Grades.project_title",
        )?;
        let rows = stmt.query_map(params![first_name, last_name], |row| {
            Ok(ProjectGrade {
                project_title: row.get(0)?,
                grade: row.get(1)?,
            })
        })?;
        let mut result = Vec::new();
        for row in rows {
            result.push(row?);
        }
        debug!("found {} grades for {} {}", result.len(), first_name, last_name);
        Ok(result)
    }
}
