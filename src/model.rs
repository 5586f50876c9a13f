//! Rows read from and written to the tracker database.

/// A row of the `Students` table. The github handle identifies the student.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Student {
    pub first_name: String,
    pub last_name: String,
    pub github: String,
}

impl Student {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

/// A row of the `Projects` table. The title identifies the project.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Project {
    pub title: String,
    pub description: String,
    pub max_grade: Option<i64>,
}

/// One line of a student's report card
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectGrade {
    pub project_title: String,
    pub grade: Option<i64>,
}
