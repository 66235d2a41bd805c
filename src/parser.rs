//! Course metadata parser for evaluation export file names.

use regex::Regex;
use serde::Serialize;
use std::sync::LazyLock;

static COURSE_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(Spring|Fall|Summer)\s+(\d{4}).*?(CMSI\s+\d+)\s+(\d+)")
        .expect("course pattern is valid")
});

/// Semester, course and section identified from a file name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CourseInfo {
    pub semester: String,
    pub course: String,
    pub section: String,
}

impl CourseInfo {
    /// Placeholder used when the file name does not follow the export naming.
    pub fn unknown() -> Self {
        CourseInfo {
            semester: "Unknown".to_string(),
            course: "Unknown".to_string(),
            section: "00".to_string(),
        }
    }
}

/// Extracts semester, course code and section from an export file name such
/// as `Coleman Jared Fall 2025 Evaluation CMSI 186 02.csv`.
///
/// Never fails: names that don't match yield [`CourseInfo::unknown`].
pub fn parse_course_info(filename: &str) -> CourseInfo {
    let Some(caps) = COURSE_PATTERN.captures(filename) else {
        return CourseInfo::unknown();
    };

    CourseInfo {
        semester: format!("{} {}", &caps[1], &caps[2]),
        course: caps[3].to_string(),
        section: caps[4].to_string(),
    }
}
