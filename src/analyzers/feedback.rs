//! Heuristic selection of substantive positive comments.
//!
//! This is a precision filter for picking quotable feedback, not a sentiment
//! classifier: a comment qualifies when it is long enough and mentions at
//! least two distinct positive keywords.

/// Comments shorter than this many characters are never selected.
pub const MIN_FEEDBACK_LENGTH: usize = 50;

/// Distinct keywords a comment must mention to count as positive.
pub const MIN_POSITIVE_KEYWORDS: usize = 2;

pub static POSITIVE_KEYWORDS: &[&str] = &[
    "great",
    "excellent",
    "helpful",
    "enjoyed",
    "liked",
    "appreciated",
    "well",
    "organized",
    "clear",
    "kind",
    "willing",
    "best",
    "really",
    "engaging",
    "informative",
    "thorough",
    "fair",
    "supportive",
];

/// Number of keywords appearing anywhere in `comment`, case-insensitively.
/// Each keyword counts once no matter how often it repeats.
pub fn positive_count(comment: &str) -> usize {
    let lower = comment.to_lowercase();
    POSITIVE_KEYWORDS
        .iter()
        .filter(|kw| lower.contains(*kw))
        .count()
}

/// Keeps comments of at least `min_length` characters that mention
/// [`MIN_POSITIVE_KEYWORDS`] or more keywords, preserving input order.
pub fn filter_good_feedback(comments: &[String], min_length: usize) -> Vec<String> {
    comments
        .iter()
        .filter(|c| c.chars().count() >= min_length)
        .filter(|c| positive_count(c) >= MIN_POSITIVE_KEYWORDS)
        .cloned()
        .collect()
}
