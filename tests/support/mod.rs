#![allow(dead_code)]

use anyhow::{Context, Result};
use std::io::Write;
use std::path::{Path, PathBuf};
use std::process::{Command, Output, Stdio};
use tempfile::NamedTempFile;

// Writes `contents` to a throw-away catalog file that is removed on drop.
pub fn catalog_file(contents: &str) -> Result<NamedTempFile> {
    catalog_file_bytes(contents.as_bytes())
}

// Same as `catalog_file`, for contents that are not valid UTF-8.
pub fn catalog_file_bytes(contents: &[u8]) -> Result<NamedTempFile> {
    let mut file = NamedTempFile::new().context("failed to allocate temp catalog")?;
    file.write_all(contents)?;
    file.flush()?;
    Ok(file)
}

pub fn repo_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR"))
}

pub fn sample_catalog_path() -> PathBuf {
    repo_root().join(course_planner::catalog::DEFAULT_CATALOG_PATH)
}

pub fn planner_binary() -> PathBuf {
    PathBuf::from(env!("CARGO_BIN_EXE_course-planner"))
}

// Runs the planner binary with `args`, feeding `stdin` and capturing both
// output streams.
pub fn run_planner(args: &[&str], stdin: &str) -> Result<Output> {
    let mut child = Command::new(planner_binary())
        .args(args)
        .current_dir(repo_root())
        .stdin(Stdio::piped())
        .stdout(Stdio::piped())
        .stderr(Stdio::piped())
        .spawn()
        .context("failed to spawn course-planner")?;
    child
        .stdin
        .take()
        .context("stdin not captured")?
        .write_all(stdin.as_bytes())?;
    child
        .wait_with_output()
        .context("failed to wait for course-planner")
}

pub fn path_arg(path: &Path) -> String {
    path.display().to_string()
}
