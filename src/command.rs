//! Parsing of console input lines into commands.

use crate::error::{Error, Result};

/// Verbs understood by the console
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verb {
    Student,
    NewStudent,
    ProjectDescription,
    ProjectGrade,
    AssignGrade,
    AddProject,
    PrintGrades,
    Help,
    Quit,
}

/// How many arguments a verb takes
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Arity {
    Exactly(usize),
    AtLeast(usize),
}

impl Arity {
    fn accepts(self, count: usize) -> bool {
        match self {
            Arity::Exactly(n) => count == n,
            Arity::AtLeast(n) => count >= n,
        }
    }
}

impl Verb {
    pub const ALL: [Verb; 9] = [
        Verb::Student,
        Verb::NewStudent,
        Verb::ProjectDescription,
        Verb::ProjectGrade,
        Verb::AssignGrade,
        Verb::AddProject,
        Verb::PrintGrades,
        Verb::Help,
        Verb::Quit,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Verb::Student => "student",
            Verb::NewStudent => "new_student",
            Verb::ProjectDescription => "project_description",
            Verb::ProjectGrade => "project_grade",
            Verb::AssignGrade => "assign_grade",
            Verb::AddProject => "add_project",
            Verb::PrintGrades => "print_grades",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }

    pub fn from_name(name: &str) -> Option<Verb> {
        Verb::ALL.into_iter().find(|verb| verb.name() == name)
    }

    pub fn arity(self) -> Arity {
        match self {
            Verb::Student | Verb::ProjectDescription => Arity::Exactly(1),
            Verb::ProjectGrade | Verb::PrintGrades => Arity::Exactly(2),
            Verb::NewStudent | Verb::AssignGrade => Arity::Exactly(3),
            Verb::AddProject => Arity::AtLeast(2),
            Verb::Help => Arity::Exactly(0),
            // anything after quit is ignored
            Verb::Quit => Arity::AtLeast(0),
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Verb::Student => "student <github>",
            Verb::NewStudent => "new_student <first_name> <last_name> <github>",
            Verb::ProjectDescription => "project_description <title>",
            Verb::ProjectGrade => "project_grade <github> <title>",
            Verb::AssignGrade => "assign_grade <github> <title> <grade>",
            Verb::AddProject => "add_project <title> [description ...] <max_grade>",
            Verb::PrintGrades => "print_grades <first_name> <last_name>",
            Verb::Help => "help",
            Verb::Quit => "quit",
        }
    }

    pub fn summary(self) -> &'static str {
        match self {
            Verb::Student => "Show a student by github account",
            Verb::NewStudent => "Add a student",
            Verb::ProjectDescription => "Show a project's description",
            Verb::ProjectGrade => "Show the grade a student got on a project",
            Verb::AssignGrade => "Change the grade a student got on a project",
            Verb::AddProject => "Add a project",
            Verb::PrintGrades => "List every project and grade for a student",
            Verb::Help => "Show this help message",
            Verb::Quit => "Leave the console",
        }
    }
}

/// A fully parsed console command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    Student {
        github: String,
    },
    NewStudent {
        first_name: String,
        last_name: String,
        github: String,
    },
    ProjectDescription {
        title: String,
    },
    ProjectGrade {
        github: String,
        title: String,
    },
    AssignGrade {
        github: String,
        title: String,
        grade: i64,
    },
    AddProject {
        title: String,
        description: String,
        max_grade: i64,
    },
    PrintGrades {
        first_name: String,
        last_name: String,
    },
    Help,
    Quit,
}

impl Command {
    /// Parse one input line. Blank lines parse to `None`.
    pub fn parse(line: &str) -> Result<Option<Command>> {
        let mut tokens = line.split_whitespace();
        let Some(name) = tokens.next() else {
            return Ok(None);
        };
        let verb = Verb::from_name(name).ok_or_else(|| Error::UnknownCommand(name.to_string()))?;
        let args: Vec<&str> = tokens.collect();
        if !verb.arity().accepts(args.len()) {
            return Err(Error::Usage {
                verb: verb.name(),
                usage: verb.usage(),
            });
        }

        let command = match verb {
            Verb::Student => Command::Student {
                github: args[0].to_string(),
            },
            Verb::NewStudent => Command::NewStudent {
                first_name: args[0].to_string(),
                last_name: args[1].to_string(),
                github: args[2].to_string(),
            },
            Verb::ProjectDescription => Command::ProjectDescription {
                title: args[0].to_string(),
            },
            Verb::ProjectGrade => Command::ProjectGrade {
                github: args[0].to_string(),
                title: args[1].to_string(),
            },
            Verb::AssignGrade => Command::AssignGrade {
                github: args[0].to_string(),
                title: args[1].to_string(),
                grade: parse_number("grade", args[2])?,
            },
            Verb::AddProject => {
                let last = args.len() - 1;
                Command::AddProject {
                    title: args[0].to_string(),
                    description: args[1..last].join(" "),
                    max_grade: parse_number("max_grade", args[last])?,
                }
            }
            Verb::PrintGrades => Command::PrintGrades {
                first_name: args[0].to_string(),
                last_name: args[1].to_string(),
            },
            Verb::Help => Command::Help,
            Verb::Quit => Command::Quit,
        };
        Ok(Some(command))
    }

    pub fn verb(&self) -> Verb {
        match self {
            Command::Student { .. } => Verb::Student,
            Command::NewStudent { .. } => Verb::NewStudent,
            Command::ProjectDescription { .. } => Verb::ProjectDescription,
            Command::ProjectGrade { .. } => Verb::ProjectGrade,
            Command::AssignGrade { .. } => Verb::AssignGrade,
            Command::AddProject { .. } => Verb::AddProject,
            Command::PrintGrades { .. } => Verb::PrintGrades,
            Command::Help => Verb::Help,
            Command::Quit => Verb::Quit,
        }
    }
}

fn parse_number(field: &'static str, value: &str) -> Result<i64> {
    value.parse().map_err(|_| Error::InvalidNumber {
        field,
        value: value.to_string(),
    })
}
