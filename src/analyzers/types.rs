//! Data types used by the aggregation pipeline.

use crate::analyzers::aggregate::{growth_areas, top_rated};
use crate::parser::CourseInfo;
use crate::questions::QuestionLabel;
use chrono::{DateTime, Utc};
use serde::Serialize;
use std::collections::BTreeMap;

/// Ordered 1–5 scores for one question or for overall effectiveness.
pub type ScoreSeries = Vec<u8>;

/// Mean, sample standard deviation and sample size of a score series.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RatingStats {
    pub mean: f64,
    pub stddev: f64,
    pub n: usize,
}

/// Statistics for a single question, the unit of ranking.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct RankedStat {
    pub label: QuestionLabel,
    pub mean: f64,
    pub stddev: f64,
    pub n: usize,
}

impl RankedStat {
    pub fn new(label: QuestionLabel, stats: RatingStats) -> Self {
        RankedStat {
            label,
            mean: stats.mean,
            stddev: stats.stddev,
            n: stats.n,
        }
    }
}

/// Every course's scores and comments concatenated in processing order.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct AggregateResult {
    pub questions: BTreeMap<QuestionLabel, ScoreSeries>,
    pub effectiveness: ScoreSeries,
    pub beneficial: Vec<String>,
    pub improvement: Vec<String>,
    pub respondents: usize,
}

/// Per-course section of the report.
#[derive(Debug, Clone, Serialize)]
pub struct CourseReport {
    #[serde(flatten)]
    pub info: CourseInfo,
    pub respondents: usize,
    pub effectiveness: Option<RatingStats>,
    /// Questions with data, in declared order.
    pub questions: Vec<RankedStat>,
}

/// Complete analysis of a set of evaluation files.
#[derive(Debug, Clone, Serialize)]
pub struct Report {
    pub generated_at: DateTime<Utc>,
    pub token: String,
    pub courses: Vec<CourseReport>,
    pub respondents: usize,
    pub effectiveness: Option<RatingStats>,
    /// Aggregate question statistics, highest mean first.
    pub ranked: Vec<RankedStat>,
    pub positive_feedback: Vec<String>,
    pub improvement: Vec<String>,
}

impl Report {
    pub fn top_rated(&self) -> &[RankedStat] {
        top_rated(&self.ranked)
    }

    pub fn growth_areas(&self) -> &[RankedStat] {
        growth_areas(&self.ranked)
    }
}
