//! Command dispatch for the non-interactive subcommands.

use std::io::{self, BufRead, Write};
use std::path::Path;

use tracing::{debug, instrument};

use crate::catalog::{presenter, CourseCatalog};
use crate::cli::args::{Cli, Commands};
use crate::cli::error::{CliError, CliResult};
use crate::cli::menu;
use crate::common::config::CATALOG_FILE_ENV;
use crate::common::{CatalogConfig, Error};

/// Run the parsed command against stdin/stdout.
pub fn execute_command(cli: &Cli) -> CliResult<()> {
    let stdin = io::stdin();
    let stdout = io::stdout();
    run(cli, stdin.lock(), &mut stdout.lock())
}

/// Run the parsed command with explicit input and output streams.
pub fn run<R: BufRead, W: Write>(cli: &Cli, input: R, out: &mut W) -> CliResult<()> {
    let config = cli.catalog_config();
    match &cli.command {
        None | Some(Commands::Menu) => {
            menu::run_menu(input, out, CourseCatalog::new(config), cli.file.as_deref())
        }
        Some(Commands::List) => _list(&load(cli.file.as_deref(), config)?, out),
        Some(Commands::Show { course }) => _show(&load(cli.file.as_deref(), config)?, course, out),
        Some(Commands::Validate) => {
            // Load everything first so the report can name every gap.
            let catalog = load(cli.file.as_deref(), config.with_integrity_check(false))?;
            _validate(&catalog, out)
        }
    }
}

fn load(file: Option<&Path>, config: CatalogConfig) -> CliResult<CourseCatalog> {
    let path = file.ok_or_else(|| {
        CliError::Usage(format!(
            "no catalog file given (use --file or {})",
            CATALOG_FILE_ENV
        ))
    })?;

    let mut catalog = CourseCatalog::new(config);
    let summary = catalog.load_path(path)?;
    debug!(?summary, path = %path.display(), "loaded");
    Ok(catalog)
}

#[instrument(skip_all)]
fn _list<W: Write>(catalog: &CourseCatalog, out: &mut W) -> CliResult<()> {
    presenter::write_listing(out, catalog.list_ordered())?;
    Ok(())
}

#[instrument(skip(catalog, out))]
fn _show<W: Write>(catalog: &CourseCatalog, course: &str, out: &mut W) -> CliResult<()> {
    write!(out, "{}", presenter::format_course_info(catalog.search(course)))?;
    Ok(())
}

#[instrument(skip_all)]
fn _validate<W: Write>(catalog: &CourseCatalog, out: &mut W) -> CliResult<()> {
    let missing = catalog.missing_prerequisites();
    if missing.is_empty() {
        writeln!(
            out,
            "All {} courses have their prerequisites in the catalog.",
            catalog.index().len()
        )?;
        return Ok(());
    }

    for gap in &missing {
        writeln!(out, "Missing prerequisite: {}", gap)?;
    }
    Err(Error::DanglingPrerequisites(missing).into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::Parser;
    use std::io::Cursor;
    use tempfile::NamedTempFile;

    fn catalog_file(contents: &str) -> NamedTempFile {
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(contents.as_bytes()).unwrap();
        file
    }

    fn run_args(args: &[&str]) -> (CliResult<()>, String) {
        let cli = Cli::try_parse_from(args).unwrap();
        let mut out = Vec::new();
        let result = run(&cli, Cursor::new(""), &mut out);
        (result, String::from_utf8(out).unwrap())
    }

    #[test]
    fn test_list_command() {
        let file = catalog_file("CSCI200,Data Structures,CSCI100\nCSCI100,Intro\n");
        let path = file.path().to_str().unwrap();

        let (result, out) = run_args(&["course-catalog", "-f", path, "list"]);
        result.unwrap();
        assert_eq!(
            out,
            "Course ID: CSCI100, Course Name: Intro\n\
             Course ID: CSCI200, Course Name: Data Structures\n"
        );
    }

    #[test]
    fn test_show_command() {
        let file = catalog_file("CSCI200,Data Structures,CSCI100\nCSCI100,Intro\n");
        let path = file.path().to_str().unwrap();

        let (result, out) = run_args(&["course-catalog", "-f", path, "show", "csci200"]);
        result.unwrap();
        assert_eq!(
            out,
            "Course ID: CSCI200, Course Name: Data Structures\nPrerequisites: CSCI100\n"
        );

        let (_, out) = run_args(&["course-catalog", "-f", path, "show", "MATH999"]);
        assert_eq!(out, "Course not found.\n");
    }

    #[test]
    fn test_validate_reports_every_gap() {
        let file = catalog_file("CSCI300,Algorithms,CSCI200,MATH201\nCSCI100,Intro\n");
        let path = file.path().to_str().unwrap();

        let (result, out) = run_args(&["course-catalog", "-f", path, "validate"]);
        let err = result.unwrap_err();

        assert_eq!(err.exit_code(), crate::cli::exitcode::INVALID);
        assert!(out.contains("Missing prerequisite: CSCI300 -> CSCI200"));
        assert!(out.contains("Missing prerequisite: CSCI300 -> MATH201"));
    }

    #[test]
    fn test_missing_file_is_usage_error() {
        let cli = Cli {
            debug: 0,
            file: None,
            strict: false,
            no_validate: false,
            command: Some(Commands::List),
        };
        let mut out = Vec::new();
        let err = run(&cli, Cursor::new(""), &mut out).unwrap_err();
        assert!(matches!(err, CliError::Usage(_)));
    }
}
