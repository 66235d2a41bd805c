use crate::analyzers::aggregate::{aggregate_courses, rank_questions};
use crate::analyzers::feedback::{MIN_FEEDBACK_LENGTH, filter_good_feedback};
use crate::analyzers::types::Report;
use crate::analyzers::utility::calculate_stats;
use crate::loader::load_eval_file;
use crate::parser::parse_course_info;
use crate::stats::CourseSummary;
use anyhow::Result;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{info, warn};

/// Loads one evaluation file and summarizes it.
///
/// # Errors
///
/// Returns an error if the file cannot be opened or is not valid CSV.
#[tracing::instrument(skip(path), fields(file = %path.display()))]
pub fn summarize_file(path: &Path) -> Result<CourseSummary> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy().into_owned())
        .unwrap_or_default();
    let info = parse_course_info(&name);
    if info.course == "Unknown" {
        warn!(file = %name, "Could not identify course from file name");
    }

    let responses = load_eval_file(path)?;
    let summary = CourseSummary::from_responses(info, &responses);

    info!(
        course = %summary.info.course,
        section = %summary.info.section,
        semester = %summary.info.semester,
        respondents = summary.respondents,
        effectiveness_n = summary.effectiveness.len(),
        "Course summarized"
    );
    Ok(summary)
}

/// Summarizes every file in order and builds the combined report.
///
/// Stops at the first file that cannot be read.
pub fn analyze(files: &[PathBuf], token: &str) -> Result<Report> {
    let courses = files
        .iter()
        .map(|path| summarize_file(path))
        .collect::<Result<Vec<_>>>()?;

    Ok(build_report(&courses, token))
}

/// Aggregates already-summarized courses into a [`Report`].
pub fn build_report(courses: &[CourseSummary], token: &str) -> Report {
    let aggregate = aggregate_courses(courses);
    let ranked = rank_questions(&aggregate);
    let positive_feedback = filter_good_feedback(&aggregate.beneficial, MIN_FEEDBACK_LENGTH);

    info!(
        courses = courses.len(),
        respondents = aggregate.respondents,
        ranked = ranked.len(),
        beneficial = aggregate.beneficial.len(),
        positive = positive_feedback.len(),
        "Aggregate built"
    );

    Report {
        generated_at: Utc::now(),
        token: token.to_string(),
        courses: courses.iter().map(CourseSummary::report).collect(),
        respondents: aggregate.respondents,
        effectiveness: calculate_stats(&aggregate.effectiveness),
        ranked,
        positive_feedback,
        improvement: aggregate.improvement,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::questions::QuestionLabel;
    use std::fs;

    const HEADER: &str = "\u{feff}Overall effectiveness of the instructor,\
The course challenged me to do my best work,\
The course challenged me to do my best work_Comments,\
What was most beneficial?,What would make this course more effective?";

    fn write(dir: &Path, name: &str, rows: &[&str]) -> PathBuf {
        let path = dir.join(name);
        let mut body = String::from(HEADER);
        for row in rows {
            body.push('\n');
            body.push_str(row);
        }
        fs::write(&path, body).unwrap();
        path
    }

    #[test]
    fn test_summarize_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = write(
            dir.path(),
            "Coleman Jared Fall 2025 Eval CMSI 186 02.csv",
            &[
                "Excellent,Agree,Strongly Agree,Loved the projects,D/A",
                "Good,Strongly Agree,,,More examples please",
                "Excellent,N/A,,D/A,",
            ],
        );

        let summary = summarize_file(&path).unwrap();
        assert_eq!(summary.info.semester, "Fall 2025");
        assert_eq!(summary.info.course, "CMSI 186");
        assert_eq!(summary.info.section, "02");
        assert_eq!(summary.respondents, 3);
        assert_eq!(summary.effectiveness, vec![5, 3, 5]);
        assert_eq!(summary.ratings[&QuestionLabel::Challenged], vec![4, 5]);
        assert_eq!(summary.beneficial, vec!["Loved the projects"]);
        assert_eq!(summary.improvement, vec!["More examples please"]);
    }

    #[test]
    fn test_malformed_name_does_not_stop_run() {
        let dir = tempfile::TempDir::new().unwrap();
        let a = write(dir.path(), "a 2025 export.csv", &["Fair,Disagree,,,"]);
        let b = write(dir.path(), "b Spring 2025 CMSI 185 01.csv", &["Very Good,Agree,,,"]);

        let report = analyze(&[a, b], "2025").unwrap();
        assert_eq!(report.courses.len(), 2);
        assert_eq!(report.courses[0].info.course, "Unknown");
        assert_eq!(report.courses[0].info.section, "00");
        assert_eq!(report.courses[1].info.course, "CMSI 185");
        assert_eq!(report.effectiveness.unwrap().n, 2);
    }

    #[test]
    fn test_unreadable_file_fails_run() {
        let dir = tempfile::TempDir::new().unwrap();
        let good = write(dir.path(), "Fall 2025 CMSI 186 01.csv", &["Good,Agree,,,"]);
        let missing = dir.path().join("Fall 2025 CMSI 186 02.csv");

        let err = analyze(&[good, missing], "2025").unwrap_err();
        assert!(format!("{err:#}").contains("CMSI 186 02"));
    }

    #[test]
    fn test_build_report_from_nothing() {
        let report = build_report(&[], "2025");
        assert!(report.courses.is_empty());
        assert_eq!(report.effectiveness, None);
        assert!(report.ranked.is_empty());
        assert!(report.top_rated().is_empty());
        assert!(report.growth_areas().is_empty());
    }
}
