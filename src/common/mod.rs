//! Common types and utilities shared across the catalog.
//!
//! This module contains fundamental primitives used throughout the codebase:
//! - Configuration constants and load options
//! - Error types
//! - Course identifiers and key normalization

pub mod config;
mod course_id;
pub mod error;

pub use config::{CatalogConfig, DuplicatePolicy};
pub use course_id::{normalize_key, CourseId};
pub use error::{Error, MissingPrerequisite, Result};
