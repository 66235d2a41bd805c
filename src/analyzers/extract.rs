//! Pulls scores and free-text comments out of raw survey rows.

use crate::analyzers::scale::{effectiveness_score, likert_score};
use crate::analyzers::types::ScoreSeries;
use crate::loader::Response;
use crate::questions::{COMMENTS_MARKER, QUESTIONS, QuestionLabel};
use std::collections::BTreeMap;

/// Answer recorded when a respondent declined a free-text prompt.
pub const NO_ANSWER: &str = "D/A";

const EFFECTIVENESS_MARKER: &str = "overall effectiveness";
const BENEFICIAL_MARKER: &str = "most beneficial";
const IMPROVEMENT_MARKER: &str = "more effective";

/// Scores extracted from one file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExtractedRatings {
    pub questions: BTreeMap<QuestionLabel, ScoreSeries>,
    pub effectiveness: ScoreSeries,
}

/// Free-text answers extracted from one file.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct ExtractedComments {
    pub beneficial: Vec<String>,
    pub improvement: Vec<String>,
}

/// Maps every recognized categorical answer onto its question's series and
/// the overall-effectiveness series.
///
/// Blank or unrecognized answers are skipped.
pub fn extract_ratings(responses: &[Response]) -> ExtractedRatings {
    let mut out = ExtractedRatings::default();

    for resp in responses {
        for (col, value) in resp.iter() {
            for q in QUESTIONS.iter().filter(|q| q.matches(col)) {
                if let Some(score) = likert_score(value) {
                    out.questions.entry(q.label).or_default().push(score);
                }
            }

            if col.to_lowercase().contains(EFFECTIVENESS_MARKER) && !col.contains(COMMENTS_MARKER) {
                if let Some(score) = effectiveness_score(value) {
                    out.effectiveness.push(score);
                }
            }
        }
    }

    out
}

/// Collects "most beneficial" and "more effective" comments in file order.
pub fn extract_comments(responses: &[Response]) -> ExtractedComments {
    let mut out = ExtractedComments::default();

    for resp in responses {
        for (col, value) in resp.iter() {
            let Some(text) = answered(value) else {
                continue;
            };

            let col = col.to_lowercase();
            if col.contains(BENEFICIAL_MARKER) {
                out.beneficial.push(text.to_string());
            } else if col.contains(IMPROVEMENT_MARKER) {
                out.improvement.push(text.to_string());
            }
        }
    }

    out
}

fn answered(value: &str) -> Option<&str> {
    let text = value.trim();
    if text.is_empty() || text == NO_ANSWER {
        None
    } else {
        Some(text)
    }
}
