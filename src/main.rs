use anyhow::Context;
use clap::Parser;
use colored::Colorize;
use log::info;
use std::io::IsTerminal;
use std::path::PathBuf;
use std::process;

use hackbright_tracker::repl::{self, Repl};
use hackbright_tracker::sqlite::{SqliteConfig, Tracker, DEFAULT_DB_PATH};

/// Console for the Hackbright students, projects and grades database
#[derive(Parser, Debug)]
#[command(name = "hackbright", version, about)]
struct Args {
    /// SQLite database file (must already contain the tracker tables)
    #[arg(short, long, default_value = DEFAULT_DB_PATH)]
    database: PathBuf,

    /// File to load and save console history
    #[arg(long)]
    history: Option<PathBuf>,
}

fn main() {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    if let Err(err) = run(Args::parse()) {
        eprintln!("{}", format!("Error: {:#}", err).red());
        process::exit(1);
    }
}

fn run(args: Args) -> anyhow::Result<()> {
    let config = SqliteConfig::new(&args.database);
    let tracker = Tracker::open(&config)
        .with_context(|| format!("could not open database {}", config.db_path.display()))?;
    info!("connected to {}", config.db_path.display());

    if std::io::stdin().is_terminal() {
        let mut console = Repl::new(&tracker);
        if let Some(path) = args.history {
            console = console.with_history(path);
        }
        console.run()?;
    } else {
        let stdin = std::io::stdin();
        repl::run_script(&tracker, stdin.lock(), &mut std::io::stdout())?;
    }

    tracker.close()?;
    info!("database closed");
    Ok(())
}
