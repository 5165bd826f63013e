// Menu-driver behavior, driven through in-memory input and output.
mod support;

use anyhow::Result;
use course_planner::{CatalogStore, Shell};
use std::io::Cursor;

use support::{catalog_file, path_arg};

struct Transcript {
    out: String,
    err: String,
    store: CatalogStore,
}

fn drive(store: CatalogStore, input: &str) -> Result<Transcript> {
    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut shell = Shell::new(store, Cursor::new(input.as_bytes()), &mut out, &mut err);
    shell.run()?;
    let store = shell.into_store();
    Ok(Transcript {
        out: String::from_utf8(out)?,
        err: String::from_utf8(err)?,
        store,
    })
}

#[test]
fn exit_prints_farewell() -> Result<()> {
    let transcript = drive(CatalogStore::default(), "9\n")?;
    assert!(transcript.out.starts_with("Welcome to the course planner.\n"));
    assert!(transcript.out.contains("1. Load Data Structure\n"));
    assert!(
        transcript
            .out
            .ends_with("Thank you for using the Advising Assistance Program.\n")
    );
    Ok(())
}

#[test]
fn queries_before_loading_ask_for_data() -> Result<()> {
    let transcript = drive(CatalogStore::default(), "2\n3\n9\n")?;
    assert_eq!(
        transcript
            .out
            .matches("Please load the data first (Option 1).")
            .count(),
        2
    );
    assert!(
        !transcript.out.contains("What course do you want to know about?"),
        "lookup should not prompt before a catalog is loaded"
    );
    Ok(())
}

#[test]
fn load_list_and_show_round() -> Result<()> {
    let file = catalog_file(
        "CS300,Algorithms,CS200\nCS100,Intro\nCS150\nCS200,Data Structures,CS100,CS050\n",
    )?;
    let path = path_arg(file.path());
    let input = format!("1\n{path}\n2\n3\ncs-200\n3\ncs100\n9\n");
    let transcript = drive(CatalogStore::default(), &input)?;

    assert!(transcript.store.is_loaded());
    assert_eq!(transcript.err, "Warning: malformed line 3.\n");
    assert!(
        transcript
            .out
            .contains(&format!("Loaded 3 courses from \"{path}\".\n"))
    );
    assert!(
        transcript
            .out
            .contains("CS100, Intro\nCS200, Data Structures\nCS300, Algorithms\n")
    );
    assert!(transcript.out.contains(
        "CS200, Data Structures\nPrerequisites: CS100 (Intro), CS050 (missing)\n"
    ));
    assert!(transcript.out.contains("CS100, Intro\nPrerequisites: None\n"));
    Ok(())
}

#[test]
fn bad_input_is_reported_and_loop_continues() -> Result<()> {
    let file = catalog_file("CS100,Intro\n")?;
    let path = path_arg(file.path());
    let input = format!("7\nabc\n1\n\n1\n/nonexistent/catalog.csv\n1\n{path}\n3\n\n3\nCS999\n9\n");
    let transcript = drive(CatalogStore::default(), &input)?;

    assert_eq!(
        transcript
            .out
            .matches("That is not a valid option. Try again.")
            .count(),
        2
    );
    assert!(transcript.out.contains("No file name entered.\n"));
    assert_eq!(
        transcript.err,
        "Error: could not open \"/nonexistent/catalog.csv\".\n"
    );
    assert!(transcript.out.contains("No course entered.\n"));
    assert!(transcript.out.contains("Course not found.\n"));
    assert!(transcript.out.ends_with("Thank you for using the Advising Assistance Program.\n"));
    Ok(())
}

#[test]
fn end_of_input_stops_quietly() -> Result<()> {
    let transcript = drive(CatalogStore::default(), "2\n")?;
    assert!(transcript.out.ends_with("Enter choice: "));
    assert!(transcript.err.is_empty());
    Ok(())
}

#[test]
fn failed_reload_keeps_earlier_catalog() -> Result<()> {
    let file = catalog_file("CS100,Intro\n")?;
    let path = path_arg(file.path());
    let input = format!("1\n{path}\n1\n/nonexistent/catalog.csv\n2\n9\n");
    let transcript = drive(CatalogStore::default(), &input)?;
    assert!(transcript.err.contains("could not open"));
    let after_error = transcript
        .out
        .rsplit("Enter choice: ")
        .nth(1)
        .unwrap_or_default();
    assert_eq!(after_error, "CS100, Intro\n----------------------------------------\n1. Load Data Structure\n2. Print Course List\n3. Print Course\n9. Exit\n----------------------------------------\n");
    Ok(())
}

#[cfg(target_os = "linux")]
#[test]
fn load_accepts_non_utf8_path() -> Result<()> {
    use std::ffi::OsStr;
    use std::os::unix::ffi::OsStrExt;
    use tempfile::TempDir;

    let dir = TempDir::new()?;
    let path = dir.path().join(OsStr::from_bytes(b"caf\xe9.csv"));
    std::fs::write(&path, "CS100,Intro\n")?;

    let mut out = Vec::new();
    let mut err = Vec::new();
    let mut shell = Shell::new(
        CatalogStore::default(),
        Cursor::new(&b""[..]),
        &mut out,
        &mut err,
    );
    assert!(shell.load(&path)?);
    assert!(shell.into_store().is_loaded());
    assert!(err.is_empty());
    assert!(String::from_utf8(out)?.starts_with("Loaded 1 courses from "));
    Ok(())
}
