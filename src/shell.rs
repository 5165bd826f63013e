//! Interactive advising menu.
//!
//! The shell only reads choices, calls `CatalogStore::{load, list_all,
//! lookup}` and renders what comes back. Input and output are generic so the
//! whole menu can be driven from tests.

use crate::catalog::{
    CatalogStore, CourseDetail, CourseSummary, LoadReport, Prerequisites, ResolvedPrerequisite,
};
use crate::error::{CatalogError, QueryError};
use std::io::{self, BufRead, Write};
use std::path::{Path, PathBuf};

const DIVIDER: &str = "----------------------------------------";
const NOT_LOADED: &str = "Please load the data first (Option 1).";

/// Menu entries understood by the shell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    List,
    Show,
    Exit,
}

impl MenuChoice {
    /// Parse a menu line by its leading integer, ignoring anything after it
    /// (`"1abc"` is option 1). `None` for anything that is not a listed option.
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim_start();
        let unsigned = trimmed.strip_prefix('+').unwrap_or(trimmed);
        let digits = unsigned
            .find(|c: char| !c.is_ascii_digit())
            .unwrap_or(unsigned.len());
        match unsigned[..digits].parse::<u32>().ok()? {
            1 => Some(MenuChoice::Load),
            2 => Some(MenuChoice::List),
            3 => Some(MenuChoice::Show),
            9 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

pub struct Shell<R, W, E> {
    store: CatalogStore,
    input: R,
    out: W,
    err: E,
}

impl<R: BufRead, W: Write, E: Write> Shell<R, W, E> {
    pub fn new(store: CatalogStore, input: R, out: W, err: E) -> Self {
        Self {
            store,
            input,
            out,
            err,
        }
    }

    /// Run the menu until the user exits or input is exhausted.
    pub fn run(&mut self) -> io::Result<()> {
        writeln!(self.out, "Welcome to the course planner.")?;
        loop {
            self.show_menu()?;
            let Some(line) = self.read_line()? else {
                break;
            };
            match MenuChoice::parse(&line) {
                Some(MenuChoice::Load) => self.prompt_load()?,
                Some(MenuChoice::List) => self.print_course_list()?,
                Some(MenuChoice::Show) => self.prompt_course()?,
                Some(MenuChoice::Exit) => {
                    writeln!(self.out, "Thank you for using the Advising Assistance Program.")?;
                    break;
                }
                None => writeln!(self.out, "That is not a valid option. Try again.")?,
            }
        }
        self.out.flush()
    }

    /// Load `path` into the session's store and report the outcome.
    pub fn load(&mut self, path: &Path) -> io::Result<bool> {
        let result = self.store.load(path);
        report_load(&mut self.out, &mut self.err, path, result)
    }

    pub fn into_store(self) -> CatalogStore {
        self.store
    }

    fn show_menu(&mut self) -> io::Result<()> {
        writeln!(self.out, "{DIVIDER}")?;
        writeln!(self.out, "1. Load Data Structure")?;
        writeln!(self.out, "2. Print Course List")?;
        writeln!(self.out, "3. Print Course")?;
        writeln!(self.out, "9. Exit")?;
        writeln!(self.out, "{DIVIDER}")?;
        write!(self.out, "Enter choice: ")?;
        self.out.flush()
    }

    fn read_line(&mut self) -> io::Result<Option<String>> {
        let mut line = String::new();
        if self.input.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn prompt(&mut self, text: &str) -> io::Result<String> {
        write!(self.out, "{text}")?;
        self.out.flush()?;
        Ok(self.read_line()?.unwrap_or_default())
    }

    fn prompt_load(&mut self) -> io::Result<()> {
        let answer = self.prompt("Enter the file name: ")?;
        let path = answer.trim();
        if path.is_empty() {
            return writeln!(self.out, "No file name entered.");
        }
        let path = PathBuf::from(path);
        self.load(&path).map(|_| ())
    }

    fn print_course_list(&mut self) -> io::Result<()> {
        match self.store.list_all() {
            Ok(courses) => write_course_list(&mut self.out, &courses),
            Err(err) => write_query_error(&mut self.out, &err),
        }
    }

    fn prompt_course(&mut self) -> io::Result<()> {
        if !self.store.is_loaded() {
            return writeln!(self.out, "{NOT_LOADED}");
        }
        let query = self.prompt("What course do you want to know about? ")?;
        match self.store.lookup(&query) {
            Ok(detail) => write_course_detail(&mut self.out, &detail),
            Err(err) => write_query_error(&mut self.out, &err),
        }
    }
}

/// Print the per-line warnings and the summary (or the open failure) for one
/// load attempt. Returns whether the load succeeded.
pub fn report_load<W: Write, E: Write>(
    out: &mut W,
    err: &mut E,
    path: &Path,
    result: Result<LoadReport, CatalogError>,
) -> io::Result<bool> {
    let path = path.display();
    match result {
        Ok(report) => {
            for record in &report.malformed {
                writeln!(err, "Warning: malformed line {}.", record.line)?;
            }
            writeln!(out, "Loaded {} courses from \"{path}\".", report.loaded)?;
            Ok(true)
        }
        Err(CatalogError::Open { .. }) => {
            writeln!(err, "Error: could not open \"{path}\".")?;
            Ok(false)
        }
        Err(failure @ CatalogError::Read { .. }) => {
            writeln!(err, "Error: could not read \"{path}\": {failure}.")?;
            Ok(false)
        }
    }
}

/// `ID, Title` per course.
pub fn write_course_list<W: Write>(out: &mut W, courses: &[CourseSummary<'_>]) -> io::Result<()> {
    for course in courses {
        writeln!(out, "{}, {}", course.id, course.title)?;
    }
    Ok(())
}

/// `ID, Title` followed by the resolved prerequisite line.
pub fn write_course_detail<W: Write>(out: &mut W, detail: &CourseDetail<'_>) -> io::Result<()> {
    writeln!(out, "{}, {}", detail.id, detail.title)?;
    match &detail.prerequisites {
        Prerequisites::None => writeln!(out, "Prerequisites: None"),
        Prerequisites::Listed(prereqs) => {
            let rendered: Vec<String> = prereqs
                .iter()
                .map(|prereq| match prereq {
                    ResolvedPrerequisite::Found { id, title } => format!("{id} ({title})"),
                    ResolvedPrerequisite::Missing { id } => format!("{id} (missing)"),
                })
                .collect();
            writeln!(out, "Prerequisites: {}", rendered.join(", "))
        }
    }
}

/// Plain operator message for a query condition.
pub fn write_query_error<W: Write>(out: &mut W, err: &QueryError) -> io::Result<()> {
    let message = match err {
        QueryError::EmptyQuery => "No course entered.",
        QueryError::NotLoaded => NOT_LOADED,
        QueryError::NotFound(_) => "Course not found.",
    };
    writeln!(out, "{message}")
}
