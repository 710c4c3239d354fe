//! Interactive menu loop.
//!
//! ```text
//! Menu:
//! 1. Load courses
//! 2. Print all courses alphanumerically
//! 3. Search for a course
//! 4. EXIT
//! ```
//!
//! Load failures are printed and the menu keeps running; the previously
//! loaded catalog stays available. End of input behaves like option 4.

use std::io::{BufRead, Write};
use std::path::Path;

use tracing::{info, warn};

use crate::catalog::{presenter, CourseCatalog};
use crate::cli::error::CliResult;

/// One parsed menu selection.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Load,
    PrintAll,
    Search,
    Exit,
}

impl MenuChoice {
    /// Parse user input; only `1`..=`4` are accepted.
    pub fn parse(input: &str) -> Option<Self> {
        match input.trim().parse::<u8>().ok()? {
            1 => Some(MenuChoice::Load),
            2 => Some(MenuChoice::PrintAll),
            3 => Some(MenuChoice::Search),
            4 => Some(MenuChoice::Exit),
            _ => None,
        }
    }
}

const MENU: &str = "Menu:\n\
1. Load courses\n\
2. Print all courses alphanumerically\n\
3. Search for a course\n\
4. EXIT\n\
Enter choice: ";

/// Read one line, trimmed. `None` at end of input.
fn read_line<R: BufRead>(input: &mut R) -> CliResult<Option<String>> {
    let mut line = String::new();
    if input.read_line(&mut line)? == 0 {
        return Ok(None);
    }
    Ok(Some(line.trim().to_string()))
}

/// Run the menu until the user exits or input ends.
///
/// `default_file` is offered when the user answers the file prompt with an
/// empty line.
pub fn run_menu<R: BufRead, W: Write>(
    mut input: R,
    out: &mut W,
    mut catalog: CourseCatalog,
    default_file: Option<&Path>,
) -> CliResult<()> {
    loop {
        write!(out, "{}", MENU)?;
        out.flush()?;

        let Some(line) = read_line(&mut input)? else {
            break;
        };

        let Some(choice) = MenuChoice::parse(&line) else {
            writeln!(out, "Invalid option. Please enter a number between 1 and 4.")?;
            continue;
        };

        match choice {
            MenuChoice::Load => {
                match default_file {
                    Some(path) => write!(
                        out,
                        "Please enter the name of the file to load [{}]: ",
                        path.display()
                    )?,
                    None => write!(out, "Please enter the name of the file to load: ")?,
                }
                out.flush()?;

                let Some(name) = read_line(&mut input)? else {
                    break;
                };
                let path = match (name.is_empty(), default_file) {
                    (true, Some(path)) => path.to_path_buf(),
                    _ => name.into(),
                };

                writeln!(out, "loading courses")?;
                match catalog.load_path(&path) {
                    Ok(summary) => {
                        info!(path = %path.display(), ?summary, "menu load");
                        writeln!(out, "Loaded {} courses.", catalog.index().len())?;
                    }
                    Err(e) => {
                        warn!(path = %path.display(), error = %e, "menu load failed");
                        writeln!(out, "Error: {}", e)?;
                    }
                }
            }
            MenuChoice::PrintAll => {
                if catalog.index().is_empty() {
                    writeln!(out, "No courses loaded.")?;
                } else {
                    presenter::write_listing(out, catalog.list_ordered())?;
                }
            }
            MenuChoice::Search => {
                write!(out, "Please enter the course ID that you want to search for: ")?;
                out.flush()?;

                let Some(course) = read_line(&mut input)? else {
                    break;
                };
                write!(out, "{}", presenter::format_course_info(catalog.search(&course)))?;
            }
            MenuChoice::Exit => break,
        }
    }

    writeln!(out, "Good bye.")?;
    Ok(())
}
