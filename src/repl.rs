//! The interactive console: read a line, run the command, print the result.

use colored::Colorize;
use log::{debug, warn};
use rustyline::{error::ReadlineError, CompletionType, Config, DefaultEditor, EditMode};
use std::io::{BufRead, Write};
use std::path::PathBuf;

use crate::command::{Command, Verb};
use crate::error::{Error, Result};
use crate::sqlite::Tracker;

pub const PROMPT: &str = "HBA Database> ";

/// Whether the console keeps reading after a command
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Flow {
    Continue,
    Quit,
}

/// Run one parsed command against the database and write its output
pub fn execute<W: Write>(tracker: &Tracker, command: &Command, out: &mut W) -> Result<Flow> {
    match command {
        Command::Student { github } => {
            let student = tracker.student_by_github(github)?;
            writeln!(out, "Student: {}", student.full_name())?;
            writeln!(out, "Github account: {}", student.github)?;
        }
        Command::NewStudent {
            first_name,
            last_name,
            github,
        } => {
            let student = tracker.create_student(first_name, last_name, github)?;
            writeln!(out, "Successfully added student: {}", student.full_name())?;
        }
        Command::ProjectDescription { title } => {
            let project = tracker.project_by_title(title)?;
            writeln!(out, "Title: {}", project.title)?;
            writeln!(out, "Description: {}", project.description)?;
        }
        Command::ProjectGrade { github, title } => {
            let grade = tracker.grade_for(github, title)?;
            writeln!(out, "Grade: {}", format_grade(grade))?;
        }
        Command::AssignGrade {
            github,
            title,
            grade,
        } => {
            let changed = tracker.assign_grade(github, title, *grade)?;
            if changed == 0 {
                debug!("no grade row for {} on {}", github, title);
            }
            writeln!(
                out,
                "Success! {} is now assigned grade {} for project {}",
                github, grade, title
            )?;
        }
        Command::AddProject {
            title,
            description,
            max_grade,
        } => {
            let project = tracker.create_project(title, description, *max_grade)?;
            writeln!(out, "New project {} successfully added!", project.title)?;
            writeln!(out, "Description: {}", project.description)?;
            writeln!(out, "Max grade: {}", format_grade(project.max_grade))?;
        }
        Command::PrintGrades {
            first_name,
            last_name,
        } => {
            let grades = tracker.grades_for_student(first_name, last_name)?;
            if grades.is_empty() {
                writeln!(out, "No record found.")?;
            }
            for line in grades {
                writeln!(out, "{}: {}", line.project_title, format_grade(line.grade))?;
            }
        }
        Command::Help => print_help(out)?,
        Command::Quit => return Ok(Flow::Quit),
    }
    Ok(Flow::Continue)
}

/// Parse and run one input line. Mistakes in the command and failed
/// statements are reported on `out` and the console carries on; only
/// failures to write output are returned.
pub fn handle_line<W: Write>(tracker: &Tracker, line: &str, out: &mut W) -> Result<Flow> {
    let outcome = Command::parse(line).and_then(|command| match command {
        Some(command) => execute(tracker, &command, out),
        None => Ok(Flow::Continue),
    });
    match outcome {
        Err(err) if is_recoverable(&err) => {
            warn!("{}: {}", line.trim(), err);
            writeln!(out, "{}", describe(&err).yellow())?;
            Ok(Flow::Continue)
        }
        other => other,
    }
}

/// Errors that end one command but not the session
pub fn is_recoverable(err: &Error) -> bool {
    !matches!(err, Error::Io(_) | Error::Readline(_))
}

/// The message shown to the user for a failed command
pub fn describe(err: &Error) -> String {
    match err {
        Error::UnknownCommand(_) => "Invalid Entry. Try again.".to_string(),
        Error::Usage {
            verb: "print_grades",
            ..
        } => "Try typing a student name again.".to_string(),
        other => other.to_string(),
    }
}

/// Run commands read from a non-interactive source until `quit` or end of input.
/// Bytes that are not UTF-8 are replaced, so a garbled line is reported like
/// any other bad command instead of ending the session.
pub fn run_script<R: BufRead, W: Write>(tracker: &Tracker, input: R, out: &mut W) -> Result<()> {
    for raw in input.split(b'\n') {
        let line = String::from_utf8_lossy(&raw?).into_owned();
        if handle_line(tracker, &line, out)? == Flow::Quit {
            break;
        }
    }
    Ok(())
}

/// Line-editing console on the terminal
pub struct Repl<'a> {
    tracker: &'a Tracker,
    history_path: Option<PathBuf>,
}

impl<'a> Repl<'a> {
    pub fn new(tracker: &'a Tracker) -> Self {
        Self {
            tracker,
            history_path: None,
        }
    }

    /// Keep command history in this file between sessions
    pub fn with_history(mut self, path: impl Into<PathBuf>) -> Self {
        self.history_path = Some(path.into());
        self
    }

    pub fn run(&self) -> Result<()> {
        let config = Config::builder()
            .edit_mode(EditMode::Emacs)
            .history_ignore_space(true)
            .completion_type(CompletionType::List)
            .auto_add_history(false)
            .build();
        let mut rl = DefaultEditor::with_config(config)?;

        if let Some(path) = &self.history_path {
            if let Err(err) = rl.load_history(path) {
                debug!("no history loaded from {}: {}", path.display(), err);
            }
        }

        println!("{}", "Hackbright project tracker".bold().green());
        println!("Type 'help' for commands, 'quit' to exit");

        loop {
            let line = match rl.readline(PROMPT) {
                Ok(line) => line,
                Err(ReadlineError::Interrupted) => continue,
                Err(ReadlineError::Eof) => break,
                Err(err) => return Err(err.into()),
            };
            if !line.trim().is_empty() {
                rl.add_history_entry(line.as_str())?;
            }
            if handle_line(self.tracker, &line, &mut std::io::stdout())? == Flow::Quit {
                break;
            }
        }

        if let Some(path) = &self.history_path {
            if let Err(err) = rl.save_history(path) {
                warn!("could not save history to {}: {}", path.display(), err);
            }
        }
        Ok(())
    }
}

fn format_grade(grade: Option<i64>) -> String {
    match grade {
        Some(grade) => grade.to_string(),
        None => "not graded".to_string(),
    }
}

fn print_help<W: Write>(out: &mut W) -> Result<()> {
    writeln!(out, "{}", "Available commands:".bold().green())?;
    for verb in Verb::ALL {
        writeln!(out, "  {:<52} {}", verb.usage().cyan(), verb.summary())?;
    }
    Ok(())
}
