//! Course identifier type.

use std::fmt;

use crate::common::config::{COURSE_ID_ALPHA_LEN, COURSE_ID_LEN};

/// A syntactically valid course identifier: 4 ASCII letters then 3 digits.
///
/// The identifier keeps the spelling it was parsed from. Comparisons inside
/// the index go through [`normalize_key`], so `csci100` and `CSCI100` name
/// the same course.
///
/// # Example
/// ```
/// use coursecatalog::CourseId;
///
/// let id = CourseId::parse("CSCI300").unwrap();
/// assert_eq!(id.as_str(), "CSCI300");
/// assert!(CourseId::parse("CS300").is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CourseId(String);

impl CourseId {
    /// Parse an identifier, returning `None` if it is not well formed.
    pub fn parse(raw: &str) -> Option<Self> {
        if Self::is_valid(raw) {
            Some(CourseId(raw.to_string()))
        } else {
            None
        }
    }

    /// Check identifier syntax without allocating.
    pub fn is_valid(raw: &str) -> bool {
        let bytes = raw.as_bytes();
        if bytes.len() != COURSE_ID_LEN {
            return false;
        }

        let (prefix, digits) = bytes.split_at(COURSE_ID_ALPHA_LEN);
        prefix.iter().all(u8::is_ascii_alphabetic) && digits.iter().all(u8::is_ascii_digit)
    }

    /// The identifier as written.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// The identifier as the index compares it.
    #[inline]
    pub fn key(&self) -> String {
        normalize_key(&self.0)
    }

    /// Consume into the underlying string.
    pub fn into_string(self) -> String {
        self.0
    }
}

impl fmt::Display for CourseId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for CourseId {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

/// Canonical form of an index key: ASCII uppercase.
///
/// Used for insertion and lookup alike.
#[inline]
pub fn normalize_key(raw: &str) -> String {
    raw.to_ascii_uppercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_course_id_valid() {
        assert!(CourseId::is_valid("CSCI100"));
        assert!(CourseId::is_valid("math201"));
        assert!(CourseId::is_valid("MaTh201"));
    }

    #[test]
    fn test_course_id_invalid() {
        assert!(!CourseId::is_valid(""));
        assert!(!CourseId::is_valid("CSCI10"));
        assert!(!CourseId::is_valid("CSCI1000"));
        assert!(!CourseId::is_valid("CSC1100"));
        assert!(!CourseId::is_valid("CSCIA00"));
        assert!(!CourseId::is_valid("Intro to CS"));
        // 7 bytes but not 7 ASCII chars
        assert!(!CourseId::is_valid("ÉCS100"));
    }

    #[test]
    fn test_course_id_keeps_spelling() {
        let id = CourseId::parse("csci100").unwrap();
        assert_eq!(id.as_str(), "csci100");
        assert_eq!(id.key(), "CSCI100");
        assert_eq!(format!("{}", id), "csci100");
    }

    #[test]
    fn test_normalize_key() {
        assert_eq!(normalize_key("csci100"), "CSCI100");
        assert_eq!(normalize_key("CSCI100"), "CSCI100");
    }
}
