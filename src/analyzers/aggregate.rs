use crate::analyzers::types::{AggregateResult, RankedStat, ScoreSeries};
use crate::analyzers::utility::calculate_stats;
use crate::questions::QuestionLabel;
use crate::stats::CourseSummary;
use std::cmp::Ordering;
use std::collections::BTreeMap;

/// How many questions the highest-rated and growth-area lists show.
pub const RANKING_SLICE: usize = 3;

impl AggregateResult {
    /// Returns a new aggregate with `course` appended after everything
    /// already merged.
    pub fn merge(mut self, course: &CourseSummary) -> Self {
        for (label, series) in &course.ratings {
            self.questions
                .entry(*label)
                .or_default()
                .extend_from_slice(series);
        }
        self.effectiveness.extend_from_slice(&course.effectiveness);
        self.beneficial.extend(course.beneficial.iter().cloned());
        self.improvement.extend(course.improvement.iter().cloned());
        self.respondents += course.respondents;
        self
    }
}

/// Folds course summaries, in the given order, into one [`AggregateResult`].
pub fn aggregate_courses(courses: &[CourseSummary]) -> AggregateResult {
    courses
        .iter()
        .fold(AggregateResult::default(), AggregateResult::merge)
}

/// Statistics for each question with data, in declared question order.
pub fn question_stats(series: &BTreeMap<QuestionLabel, ScoreSeries>) -> Vec<RankedStat> {
    QuestionLabel::all()
        .filter_map(|label| {
            let stats = calculate_stats(series.get(&label)?)?;
            Some(RankedStat::new(label, stats))
        })
        .collect()
}

/// Aggregate question statistics sorted by mean, highest first.
///
/// The sort is stable, so questions with equal means keep declared order.
pub fn rank_questions(aggregate: &AggregateResult) -> Vec<RankedStat> {
    let mut ranked = question_stats(&aggregate.questions);
    ranked.sort_by(|a, b| b.mean.partial_cmp(&a.mean).unwrap_or(Ordering::Equal));
    ranked
}

/// The highest-rated questions from a ranked list.
pub fn top_rated(ranked: &[RankedStat]) -> &[RankedStat] {
    &ranked[..ranked.len().min(RANKING_SLICE)]
}

/// The lowest-rated questions from a ranked list, in ranked order.
///
/// With fewer than twice [`RANKING_SLICE`] questions this overlaps
/// [`top_rated`].
pub fn growth_areas(ranked: &[RankedStat]) -> &[RankedStat] {
    &ranked[ranked.len().saturating_sub(RANKING_SLICE)..]
}
