//! Text rendering of index query results.

use std::io::Write;

use crate::catalog::CourseRecord;
use crate::common::Result;

/// Message shown when a search finds nothing.
pub const NOT_FOUND: &str = "Course not found.";

/// One-line summary: `Course ID: <id>, Course Name: <name>`.
pub fn format_course(record: &CourseRecord) -> String {
    format!(
        "Course ID: {}, Course Name: {}",
        record.identifier(),
        record.display_name()
    )
}

/// Prerequisite line: space-separated identifiers, or `None`.
pub fn format_prerequisites(record: &CourseRecord) -> String {
    if record.has_prerequisites() {
        format!("Prerequisites: {}", record.prerequisites().join(" "))
    } else {
        "Prerequisites: None".to_string()
    }
}

/// Full result of a search, newline-terminated.
pub fn format_course_info(found: Option<&CourseRecord>) -> String {
    match found {
        Some(record) => format!(
            "{}\n{}\n",
            format_course(record),
            format_prerequisites(record)
        ),
        None => format!("{}\n", NOT_FOUND),
    }
}

/// Write one [`format_course`] line per entry.
pub fn write_listing<'a, W, I>(out: &mut W, entries: I) -> Result<()>
where
    W: Write,
    I: IntoIterator<Item = (&'a str, &'a CourseRecord)>,
{
    for (_, record) in entries {
        writeln!(out, "{}", format_course(record))?;
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::index::OrderedCourseIndex;

    #[test]
    fn test_format_course_info_with_prerequisites() {
        let record = CourseRecord::new(
            "CSCI300",
            "Introduction to Algorithms",
            vec!["CSCI200".into(), "MATH201".into()],
        );

        assert_eq!(
            format_course_info(Some(&record)),
            "Course ID: CSCI300, Course Name: Introduction to Algorithms\n\
             Prerequisites: CSCI200 MATH201\n"
        );
    }

    #[test]
    fn test_format_course_info_without_prerequisites() {
        let record = CourseRecord::new("MATH201", "Discrete Mathematics", vec![]);
        assert_eq!(
            format_course_info(Some(&record)),
            "Course ID: MATH201, Course Name: Discrete Mathematics\nPrerequisites: None\n"
        );
    }

    #[test]
    fn test_format_not_found() {
        assert_eq!(format_course_info(None), "Course not found.\n");
    }

    #[test]
    fn test_write_listing() {
        let index: OrderedCourseIndex = vec![
            CourseRecord::new("CSCI200", "Data Structures", vec![]),
            CourseRecord::new("CSCI100", "Intro", vec![]),
        ]
        .into_iter()
        .collect();

        let mut out = Vec::new();
        write_listing(&mut out, &index).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "Course ID: CSCI100, Course Name: Intro\n\
             Course ID: CSCI200, Course Name: Data Structures\n"
        );
    }
}
