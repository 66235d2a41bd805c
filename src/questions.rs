//! The closed set of Likert questions reported on.
//!
//! Survey exports embed the full question text in the column header, often
//! with a file-specific suffix, so each question is matched by substring.

use serde::Serialize;

/// Marker carried by the free-text column paired with a rated question.
pub const COMMENTS_MARKER: &str = "_Comments";

/// Canonical short name for a rated survey question.
///
/// Variants are declared in display order and serialize as their display name.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum QuestionLabel {
    #[serde(rename = "Outcomes Stated")]
    OutcomesStated,
    #[serde(rename = "Outcomes Addressed")]
    OutcomesAddressed,
    Interactions,
    Accessible,
    Feedback,
    Challenged,
    Interest,
}

/// A question's matching rule: columns containing `text` but not
/// `excluded` carry its categorical answer.
#[derive(Debug, Clone, Copy)]
pub struct QuestionMatcher {
    pub label: QuestionLabel,
    pub text: &'static str,
    pub excluded: &'static str,
}

impl QuestionMatcher {
    pub fn matches(&self, column: &str) -> bool {
        column.contains(self.text) && !column.contains(self.excluded)
    }
}

pub static QUESTIONS: &[QuestionMatcher] = &[
    QuestionMatcher {
        label: QuestionLabel::OutcomesStated,
        text: "Learning outcomes for the course were clearly stated",
        excluded: COMMENTS_MARKER,
    },
    QuestionMatcher {
        label: QuestionLabel::OutcomesAddressed,
        text: "The learning outcomes were effectively addressed in the course",
        excluded: COMMENTS_MARKER,
    },
    QuestionMatcher {
        label: QuestionLabel::Interactions,
        text: "There were constructive interactions between the instructor and the students",
        excluded: COMMENTS_MARKER,
    },
    QuestionMatcher {
        label: QuestionLabel::Accessible,
        text: "The instructor was accessible for discussions about the course",
        excluded: COMMENTS_MARKER,
    },
    QuestionMatcher {
        label: QuestionLabel::Feedback,
        text: "I received feedback that improved my learning in this course",
        excluded: COMMENTS_MARKER,
    },
    QuestionMatcher {
        label: QuestionLabel::Challenged,
        text: "The course challenged me to do my best work",
        excluded: COMMENTS_MARKER,
    },
    QuestionMatcher {
        label: QuestionLabel::Interest,
        text: "My experience in the course increased my interest in the subject matter",
        excluded: COMMENTS_MARKER,
    },
];

impl QuestionLabel {
    /// All labels in declared order.
    pub fn all() -> impl Iterator<Item = QuestionLabel> {
        QUESTIONS.iter().map(|q| q.label)
    }

    pub fn display_name(self) -> &'static str {
        match self {
            QuestionLabel::OutcomesStated => "Outcomes Stated",
            QuestionLabel::OutcomesAddressed => "Outcomes Addressed",
            QuestionLabel::Interactions => "Interactions",
            QuestionLabel::Accessible => "Accessible",
            QuestionLabel::Feedback => "Feedback",
            QuestionLabel::Challenged => "Challenged",
            QuestionLabel::Interest => "Interest",
        }
    }

    /// The full question text as it appears in survey headers.
    pub fn full_text(self) -> &'static str {
        QUESTIONS
            .iter()
            .find(|q| q.label == self)
            .map(|q| q.text)
            .unwrap_or_else(|| self.display_name())
    }
}

impl std::fmt::Display for QuestionLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.display_name())
    }
}
