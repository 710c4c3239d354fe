//! Course catalog - an ordered, self-balancing index of course records.
//!
//! # Architecture
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                        course-catalog                           │
//! ├─────────────────────────────────────────────────────────────────┤
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                 CLI (cli/, main.rs)                      │   │
//! │  │        list | show | validate | interactive menu         │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                Catalog Layer (catalog/)                  │   │
//! │  │   Loader → CourseCatalog → Presenter   SharedCatalog     │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! │                              ↓                                  │
//! │  ┌─────────────────────────────────────────────────────────┐   │
//! │  │                  Index Layer (index/)                    │   │
//! │  │     OrderedCourseIndex (AVL tree) + IndexStats           │   │
//! │  └─────────────────────────────────────────────────────────┘   │
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//! - [`common`] - Shared primitives (CourseId, Error, config)
//! - [`index`] - The AVL-balanced ordered index
//! - [`catalog`] - Loading, validation and presentation of catalogs
//! - [`cli`] - Command-line front end
//!
//! # Quick Start
//! ```no_run
//! use coursecatalog::{CatalogConfig, CourseCatalog};
//! use coursecatalog::catalog::presenter;
//!
//! let mut catalog = CourseCatalog::new(CatalogConfig::default());
//! catalog.load_path("courses.csv").unwrap();
//!
//! print!("{}", presenter::format_course_info(catalog.search("CSCI300")));
//! ```

pub mod catalog;
pub mod cli;
pub mod common;
pub mod index;

// Re-export commonly used items at crate root for convenience
pub use common::{CatalogConfig, CourseId, DuplicatePolicy, Error, MissingPrerequisite, Result};

pub use catalog::{CourseCatalog, CourseRecord, LoadSummary, SharedCatalog};
pub use index::{OrderedCourseIndex, StatsSnapshot};
