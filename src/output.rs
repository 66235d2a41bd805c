//! Report formatting for the console, LaTeX and JSON.
//!
//! Everything here is presentation: the numbers come precomputed in a
//! [`Report`], and sections whose statistics are absent are left out.

use anyhow::Result;
use tracing::debug;

use crate::analyzers::types::{CourseReport, RankedStat, RatingStats, Report};

const WIDE_RULE: usize = 80;
const NARROW_RULE: usize = 40;

const POSITIVE_EXAMPLES: usize = 10;
const POSITIVE_MAX_CHARS: usize = 500;
const IMPROVEMENT_EXAMPLES: usize = 5;
const IMPROVEMENT_MIN_CHARS: usize = 10;
const IMPROVEMENT_MAX_CHARS: usize = 300;
const LATEX_FEEDBACK: usize = 3;
const LATEX_MAX_CHARS: usize = 200;

/// Characters escaped before a comment is placed in LaTeX.
const LATEX_SPECIAL: &[char] = &['&', '%', '$', '#', '_'];

/// Escapes LaTeX control characters in free text.
pub fn latex_escape(text: &str) -> String {
    let mut out = String::with_capacity(text.len());
    for c in text.chars() {
        if LATEX_SPECIAL.contains(&c) {
            out.push('\\');
        }
        out.push(c);
    }
    out
}

/// Cuts `text` to `max_chars` characters, marking the cut with `...`.
pub fn truncate(text: &str, max_chars: usize) -> String {
    match text.char_indices().nth(max_chars) {
        Some((idx, _)) => format!("{}...", &text[..idx]),
        None => text.to_string(),
    }
}

fn banner(out: &mut String, title: &str) {
    out.push_str(&"=".repeat(WIDE_RULE));
    out.push('\n');
    out.push_str(title);
    out.push('\n');
    out.push_str(&"=".repeat(WIDE_RULE));
    out.push('\n');
}

fn fmt_question(stat: &RankedStat) -> String {
    format!(
        "{}: {:.2}/5.0 (SD: {:.2}, n={})",
        stat.label, stat.mean, stat.stddev, stat.n
    )
}

fn fmt_short(stat: &RankedStat) -> String {
    format!("{}: {:.2}/5.0 (SD: {:.2})", stat.label, stat.mean, stat.stddev)
}

/// Formats one course's section: respondents, effectiveness and question scores.
pub fn format_course(course: &CourseReport) -> String {
    let mut out = String::new();
    let rule = "─".repeat(WIDE_RULE);

    out.push_str(&format!("\n{rule}\n"));
    out.push_str(&format!(
        "Course: {} Section {} ({})\n",
        course.info.course, course.info.section, course.info.semester
    ));
    out.push_str(&format!("{rule}\n"));
    out.push_str(&format!("Responses: {}\n", course.respondents));

    if let Some(RatingStats { mean, stddev, .. }) = course.effectiveness {
        out.push_str(&format!(
            "\nOverall Effectiveness: {mean:.2}/5.0 (SD: {stddev:.2})\n"
        ));
    }

    out.push_str("\nQuestion Ratings:\n");
    for stat in &course.questions {
        out.push_str(&format!("  {}\n", fmt_question(stat)));
    }

    out
}

/// Formats corpus-wide statistics, the full ranking and the top/bottom lists.
pub fn format_aggregate(report: &Report) -> String {
    let mut out = String::from("\n");
    banner(
        &mut out,
        &format!("AGGREGATE STATISTICS (All {} Courses)", report.token),
    );

    if let Some(RatingStats { mean, stddev, n }) = report.effectiveness {
        out.push_str(&format!(
            "\nOverall Effectiveness: {mean:.2}/5.0 (SD: {stddev:.2}, n={n})\n"
        ));
    }

    out.push_str("\nAggregate Question Ratings:\n");
    for stat in &report.ranked {
        out.push_str(&format!("  {}\n", fmt_question(stat)));
    }

    let rule = "─".repeat(NARROW_RULE);
    out.push_str(&format!("\n{rule}\nTOP 3 HIGHEST RATED AREAS:\n"));
    for (i, stat) in report.top_rated().iter().enumerate() {
        out.push_str(&format!("  {}. {}\n", i + 1, fmt_short(stat)));
    }

    out.push_str(&format!("\n{rule}\nAREAS FOR POTENTIAL GROWTH:\n"));
    for stat in report.growth_areas() {
        out.push_str(&format!("  • {}\n", fmt_short(stat)));
    }

    out
}

/// Formats selected positive comments and a sample of improvement suggestions.
pub fn format_comments(report: &Report) -> String {
    let mut out = String::from("\n");
    banner(&mut out, "SELECTED POSITIVE FEEDBACK EXAMPLES");

    for (i, comment) in report.positive_feedback.iter().take(POSITIVE_EXAMPLES).enumerate() {
        out.push_str(&format!(
            "\n{}. \"{}\"\n",
            i + 1,
            truncate(comment, POSITIVE_MAX_CHARS)
        ));
    }

    out.push('\n');
    banner(&mut out, "IMPROVEMENT SUGGESTIONS (Sample)");

    // Numbering follows position in the sample, so skipped short replies
    // leave gaps.
    for (i, comment) in report.improvement.iter().take(IMPROVEMENT_EXAMPLES).enumerate() {
        if comment.chars().count() <= IMPROVEMENT_MIN_CHARS {
            continue;
        }
        out.push_str(&format!(
            "\n{}. \"{}\"\n",
            i + 1,
            truncate(comment, IMPROVEMENT_MAX_CHARS)
        ));
    }

    out
}

/// Formats the LaTeX itemize blocks for the highest-rated questions and
/// selected student feedback.
pub fn format_latex(report: &Report) -> String {
    let mut out = String::new();

    out.push_str("% Highest-rated areas (aggregate):\n");
    out.push_str("\\begin{itemize}[leftmargin=*, nosep]\n");
    for stat in report.top_rated() {
        out.push_str(&format!(
            "\\item {}: {:.2}/5.0 (SD: {:.2})\n",
            stat.label.full_text(),
            stat.mean,
            stat.stddev
        ));
    }
    out.push_str("\\end{itemize}\n");

    out.push_str("\n% Selected student feedback:\n");
    out.push_str("\\begin{itemize}[leftmargin=*, nosep]\n");
    for comment in report.positive_feedback.iter().take(LATEX_FEEDBACK) {
        let clean = truncate(&latex_escape(comment), LATEX_MAX_CHARS);
        out.push_str(&format!("\\item ``{clean}''\n"));
    }
    out.push_str("\\end{itemize}\n");

    out
}

/// Formats the complete console report: per-course sections, aggregate
/// statistics, comments and the LaTeX fragment.
pub fn format_report(report: &Report) -> String {
    let mut out = String::new();
    banner(
        &mut out,
        &format!("COURSE EVALUATION ANALYSIS - {}", report.token),
    );

    for course in &report.courses {
        out.push_str(&format_course(course));
    }

    out.push_str(&format_aggregate(report));
    out.push_str(&format_comments(report));

    out.push('\n');
    banner(&mut out, "LATEX-READY OUTPUT FOR FSR");
    out.push('\n');
    out.push_str(&format_latex(report));

    debug!(bytes = out.len(), "Report formatted");
    out
}

/// Serializes the report as pretty-printed JSON.
pub fn to_json(report: &Report) -> Result<String> {
    Ok(serde_json::to_string_pretty(report)?)
}
