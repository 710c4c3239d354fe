//! CLI argument definitions using clap

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand, ValueHint};

use crate::common::{CatalogConfig, DuplicatePolicy};

/// Load a course catalog and query it
#[derive(Parser, Debug)]
#[command(name = "course-catalog")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Verbosity: -d info, -dd debug, -ddd trace
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub debug: u8,

    /// Catalog file, one course per line
    #[arg(short, long, global = true, env = "COURSE_CATALOG_FILE", value_hint = ValueHint::FilePath)]
    pub file: Option<PathBuf>,

    /// Fail on a repeated course ID instead of keeping the first one
    #[arg(long, global = true)]
    pub strict: bool,

    /// Skip the prerequisite check after loading
    #[arg(long, global = true)]
    pub no_validate: bool,

    /// Command to run (default: interactive menu)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Print all courses in alphanumeric order
    List,

    /// Print one course and its prerequisites
    Show {
        /// Course ID, any case (e.g. csci300)
        course: String,
    },

    /// Check that every prerequisite has an entry
    Validate,

    /// Interactive menu
    Menu,
}

impl Cli {
    /// Load options derived from the flags.
    pub fn catalog_config(&self) -> CatalogConfig {
        let policy = if self.strict {
            DuplicatePolicy::Reject
        } else {
            DuplicatePolicy::Ignore
        };
        CatalogConfig::default()
            .with_duplicate_policy(policy)
            .with_integrity_check(!self.no_validate)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    // https://docs.rs/clap/latest/clap/_derive/_tutorial/index.html#testing
    #[test]
    fn verify_cli() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_show() {
        let cli = Cli::try_parse_from(["course-catalog", "-f", "courses.csv", "show", "csci300"])
            .unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Show {
                course: "csci300".to_string()
            })
        );
        assert_eq!(cli.file, Some(PathBuf::from("courses.csv")));
    }

    #[test]
    fn test_flags_map_to_config() {
        let cli = Cli::try_parse_from(["course-catalog", "--strict", "--no-validate", "-dd", "list"])
            .unwrap();
        let config = cli.catalog_config();

        assert_eq!(cli.debug, 2);
        assert_eq!(config.duplicate_policy, DuplicatePolicy::Reject);
        assert!(!config.require_integrity);
    }

    #[test]
    fn test_defaults_to_menu() {
        let cli = Cli::try_parse_from(["course-catalog"]).unwrap();
        assert!(cli.command.is_none());
        assert_eq!(cli.catalog_config(), CatalogConfig::default());
    }
}
