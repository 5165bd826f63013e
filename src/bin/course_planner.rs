//! Advising menu and one-shot catalog queries.
//!
//! Usage:
//!   course-planner [--file data/abcu_courses.csv]
//!   course-planner --file data/abcu_courses.csv list [--json]
//!   course-planner --file data/abcu_courses.csv show csci-300 [--json]

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand, ValueEnum};
use course_planner::shell::{report_load, write_course_detail, write_course_list, write_query_error};
use course_planner::{CatalogStore, LoadOptions, QueryError, Shell};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "course-planner")]
#[command(about = "Look up courses and prerequisites in an advising catalog", version)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
    /// Course catalog to load before running the command or menu.
    #[arg(long, global = true)]
    file: Option<PathBuf>,
    /// Field delimiter used by the catalog file.
    #[arg(long, default_value_t = ',', global = true)]
    delimiter: char,
    /// Logging verbosity (logs go to stderr).
    #[arg(long, value_enum, default_value = "warn", global = true)]
    log_level: LogLevel,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print every course in identifier order.
    List {
        /// Emit a JSON array instead of text.
        #[arg(long)]
        json: bool,
    },
    /// Print one course and its prerequisites.
    Show {
        /// Course identifier; separators and case are ignored.
        course: String,
        /// Emit JSON instead of text.
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum LogLevel {
    Error,
    Warn,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    fn to_filter_directive(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Warn => "warn",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }
}

fn main() {
    match run() {
        Ok(true) => {}
        Ok(false) => std::process::exit(1),
        Err(err) => {
            eprintln!("{err:#}");
            std::process::exit(1);
        }
    }
}

/// Returns `Ok(false)` when a load or query condition was already reported
/// to the operator and the process should exit non-zero.
fn run() -> Result<bool> {
    let cli = Cli::parse();
    initialize_tracing(cli.log_level);

    let mut store = CatalogStore::new(LoadOptions {
        delimiter: cli.delimiter,
    });

    let Some(command) = cli.command else {
        run_menu(store, cli.file.as_deref())?;
        return Ok(true);
    };

    if !load_required(&mut store, cli.file.as_deref())? {
        return Ok(false);
    }
    let mut out = io::stdout().lock();
    match command {
        Command::List { json } => match store.list_all() {
            Ok(courses) if json => {
                serde_json::to_writer_pretty(&mut out, &courses)
                    .context("writing course list JSON")?;
                writeln!(out)?;
            }
            Ok(courses) => write_course_list(&mut out, &courses)?,
            Err(err) => return report_query_error(&err),
        },
        Command::Show { course, json } => match store.lookup(&course) {
            Ok(detail) if json => {
                serde_json::to_writer_pretty(&mut out, &detail).context("writing course JSON")?;
                writeln!(out)?;
            }
            Ok(detail) => write_course_detail(&mut out, &detail)?,
            Err(err) => return report_query_error(&err),
        },
    }
    Ok(true)
}

/// Logs always go to stderr so stdout carries only menu and query output.
fn initialize_tracing(log_level: LogLevel) {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::new(log_level.to_filter_directive()))
        .with_target(false)
        .with_writer(io::stderr)
        .init();
}

fn run_menu(store: CatalogStore, preload: Option<&Path>) -> Result<()> {
    let stdin = io::stdin();
    let mut shell = Shell::new(store, stdin.lock(), io::stdout(), io::stderr());
    if let Some(path) = preload {
        shell.load(path).context("writing load summary")?;
    }
    shell.run().context("running advising menu")
}

fn load_required(store: &mut CatalogStore, file: Option<&Path>) -> Result<bool> {
    let Some(path) = file else {
        bail!("--file is required for the list and show commands");
    };
    let result = store.load(path);
    let loaded = report_load(&mut io::sink(), &mut io::stderr(), path, result)
        .context("writing load diagnostics")?;
    Ok(loaded)
}

fn report_query_error(err: &QueryError) -> Result<bool> {
    write_query_error(&mut io::stderr(), err).context("writing query message")?;
    Ok(false)
}
