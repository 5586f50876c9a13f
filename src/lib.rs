//! Command-line front-end for the Hackbright students, projects and grades database.
//!
//! # Intention
//!
//! - Turn console lines into a closed set of commands.
//! - Run each command as a single parameterized statement against SQLite.
//! - Report missing rows and bad input as messages, not crashes.
//!
//! # Architectural Boundaries
//!
//! - `sqlite` owns the connection and every SQL statement.
//! - `command` only parses; it never touches the database.
//! - `repl` glues the two together and owns all console output.

pub mod command;
pub mod error;
pub mod model;
pub mod repl;
pub mod sqlite;

pub use command::{Command, Verb};
pub use error::{Error, Result};
pub use model::{Project, ProjectGrade, Student};
pub use repl::{Flow, Repl};
pub use sqlite::{SqliteConfig, Tracker};
