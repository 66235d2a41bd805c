use std::collections::BTreeMap;

use crate::analyzers::aggregate::question_stats;
use crate::analyzers::extract::{extract_comments, extract_ratings};
use crate::analyzers::types::{CourseReport, RatingStats, ScoreSeries};
use crate::analyzers::utility::calculate_stats;
use crate::loader::Response;
use crate::parser::CourseInfo;
use crate::questions::QuestionLabel;

/// Everything extracted from one course section's evaluation file.
#[derive(Debug, Clone, PartialEq)]
pub struct CourseSummary {
    pub info: CourseInfo,
    /// Every respondent row, including those who skipped all rated questions.
    pub respondents: usize,
    pub ratings: BTreeMap<QuestionLabel, ScoreSeries>,
    pub effectiveness: ScoreSeries,
    pub beneficial: Vec<String>,
    pub improvement: Vec<String>,
}

impl CourseSummary {
    pub fn from_responses(info: CourseInfo, responses: &[Response]) -> Self {
        let ratings = extract_ratings(responses);
        let comments = extract_comments(responses);

        CourseSummary {
            info,
            respondents: responses.len(),
            ratings: ratings.questions,
            effectiveness: ratings.effectiveness,
            beneficial: comments.beneficial,
            improvement: comments.improvement,
        }
    }

    pub fn effectiveness_stats(&self) -> Option<RatingStats> {
        calculate_stats(&self.effectiveness)
    }

    pub fn report(&self) -> CourseReport {
        CourseReport {
            info: self.info.clone(),
            respondents: self.respondents,
            effectiveness: self.effectiveness_stats(),
            questions: question_stats(&self.ratings),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::parse_course_info;

    const EFFECTIVENESS: &str = "Overall effectiveness of the instructor";
    const INTERACTIONS: &str =
        "There were constructive interactions between the instructor and the students";

    fn response(pairs: &[(&str, &str)]) -> Response {
        pairs.iter().copied().collect()
    }

    #[test]
    fn test_from_responses_empty() {
        let summary = CourseSummary::from_responses(CourseInfo::unknown(), &[]);
        assert_eq!(summary.respondents, 0);
        assert!(summary.ratings.is_empty());
        assert_eq!(summary.effectiveness_stats(), None);
        assert!(summary.report().questions.is_empty());
    }

    #[test]
    fn test_blank_answers_still_count_as_respondents() {
        let responses = vec![
            response(&[(EFFECTIVENESS, "Excellent"), (INTERACTIONS, "Agree")]),
            response(&[(EFFECTIVENESS, ""), (INTERACTIONS, "")]),
            response(&[(EFFECTIVENESS, "Very Good"), (INTERACTIONS, "N/A")]),
        ];
        let summary = CourseSummary::from_responses(
            parse_course_info("Fall 2025 CMSI 186 02.csv"),
            &responses,
        );

        assert_eq!(summary.respondents, 3);
        assert_eq!(summary.effectiveness, vec![5, 4]);
        assert_eq!(summary.ratings[&QuestionLabel::Interactions], vec![4]);

        let report = summary.report();
        assert_eq!(report.info.course, "CMSI 186");
        assert_eq!(report.effectiveness.unwrap().n, 2);
        assert_eq!(report.questions.len(), 1);
        assert_eq!(report.questions[0].label, QuestionLabel::Interactions);
        assert_eq!(report.questions[0].stddev, 0.0);
    }

    #[test]
    fn test_effectiveness_scenario() {
        let responses: Vec<_> = ["Excellent", "Good", "Excellent"]
            .iter()
            .map(|v| response(&[(EFFECTIVENESS, *v)]))
            .collect();
        let summary = CourseSummary::from_responses(CourseInfo::unknown(), &responses);
        let stats = summary.effectiveness_stats().unwrap();

        assert_eq!(summary.effectiveness, vec![5, 3, 5]);
        assert_eq!(format!("{:.2}", stats.mean), "4.33");
        assert_eq!(format!("{:.2}", stats.stddev), "1.15");
    }
}
