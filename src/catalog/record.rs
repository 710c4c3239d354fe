//! Course records stored in the index.

/// One course of the catalog.
///
/// Immutable once built: the index hands out shared references only.
/// Prerequisites keep their input order and are not deduplicated.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CourseRecord {
    identifier: String,
    display_name: String,
    prerequisites: Vec<String>,
}

impl CourseRecord {
    /// Create a record.
    pub fn new(
        identifier: impl Into<String>,
        display_name: impl Into<String>,
        prerequisites: Vec<String>,
    ) -> Self {
        Self {
            identifier: identifier.into(),
            display_name: display_name.into(),
            prerequisites,
        }
    }

    /// The course identifier, spelled as loaded.
    #[inline]
    pub fn identifier(&self) -> &str {
        &self.identifier
    }

    /// Human-readable course name.
    #[inline]
    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    /// Identifiers of prerequisite courses, in input order.
    #[inline]
    pub fn prerequisites(&self) -> &[String] {
        &self.prerequisites
    }

    /// True if the course has no prerequisites.
    #[inline]
    pub fn has_prerequisites(&self) -> bool {
        !self.prerequisites.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_accessors() {
        let record = CourseRecord::new(
            "CSCI300",
            "Introduction to Algorithms",
            vec!["CSCI200".to_string(), "MATH201".to_string()],
        );

        assert_eq!(record.identifier(), "CSCI300");
        assert_eq!(record.display_name(), "Introduction to Algorithms");
        assert_eq!(record.prerequisites(), ["CSCI200", "MATH201"]);
        assert!(record.has_prerequisites());
    }

    #[test]
    fn test_prerequisites_keep_order_and_duplicates() {
        let record = CourseRecord::new(
            "CSCI400",
            "Large Software Development",
            vec!["CSCI301".into(), "CSCI350".into(), "CSCI301".into()],
        );
        assert_eq!(record.prerequisites(), ["CSCI301", "CSCI350", "CSCI301"]);
    }

    #[test]
    fn test_record_without_prerequisites() {
        let record = CourseRecord::new("MATH201", "Discrete Mathematics", vec![]);
        assert!(!record.has_prerequisites());
    }
}
