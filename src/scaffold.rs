//! The scaffolder itself
//!
//! Creates the per-day input files and rewrites the solution and test
//! templates, replacing handlebars-style tokens with their computed values.
//! Existing files are never overwritten.

use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

use crate::consts::{DAY_TOKEN, YEAR_TOKEN};
use crate::error::ScaffoldError;
use crate::paths::DayPaths;

fn create_parent_dirs(path: &Path) -> Result<(), ScaffoldError> {
    if let Some(parent) = path.parent()
        && !parent.as_os_str().is_empty()
    {
        fs::create_dir_all(parent).map_err(|source| ScaffoldError::CreateDir {
            path: parent.to_path_buf(),
            source,
        })?;
    }
    Ok(())
}

/// Create an empty file at `path` if absent, along with any missing parent
/// directories. An existing file is left untouched.
pub(crate) fn ensure_empty_file(path: &Path) -> Result<(), ScaffoldError> {
    create_parent_dirs(path)?;
    if path.exists() {
        return Ok(());
    }
    File::create(path).map_err(|source| ScaffoldError::WriteFile {
        path: path.to_path_buf(),
        source,
    })?;
    Ok(())
}

/// Apply the four substitutions to one template line.
///
/// Token replacement runs before the generic `template`/`Template` marker
/// replacement, so a token embedded inside a larger word is expanded first.
/// Each substitution replaces every occurrence in the line.
pub(crate) fn render_line(line: &str, day_number: u32, year: i32) -> String {
    line.replace(DAY_TOKEN, &day_number.to_string())
        .replace(YEAR_TOKEN, &year.to_string())
        .replace("template", &format!("day{day_number}"))
        .replace("Template", &format!("Day{day_number}"))
}

/// Rewrite the template at `source` into `dest` with tokens substituted.
///
/// If `dest` already exists it is skipped with a notice on stdout; that is
/// the only conflict policy. Line order and line endings are preserved.
pub(crate) fn render_template(
    day_number: u32,
    year: i32,
    source: &Path,
    dest: &Path,
) -> Result<(), ScaffoldError> {
    create_parent_dirs(dest)?;

    if dest.exists() {
        println!("{} already exists. Skipping.", dest.display());
        return Ok(());
    }

    if !source.exists() {
        return Err(ScaffoldError::MissingTemplate {
            path: source.to_path_buf(),
        });
    }
    let content = fs::read_to_string(source).map_err(|e| ScaffoldError::ReadTemplate {
        path: source.to_path_buf(),
        source: e,
    })?;

    let mut out = File::create(dest).map_err(|source| ScaffoldError::WriteFile {
        path: dest.to_path_buf(),
        source,
    })?;
    for line in content.split_inclusive('\n') {
        out.write_all(render_line(line, day_number, year).as_bytes())
            .map_err(|source| ScaffoldError::WriteFile {
                path: dest.to_path_buf(),
                source,
            })?;
    }
    Ok(())
}

/// Scaffold one day: touch the two input files, then render the solution
/// and test files from their templates. Strictly sequential; the first
/// error aborts the run.
pub(crate) fn go(day_number: u32, year: i32) -> Result<(), ScaffoldError> {
    let paths = DayPaths::derive(day_number, year);

    ensure_empty_file(&paths.puzzle_input)?;
    ensure_empty_file(&paths.sample_input)?;

    render_template(day_number, year, &paths.solution_template, &paths.solution)?;
    render_template(day_number, year, &paths.test_template, &paths.test)?;

    Ok(())
}
