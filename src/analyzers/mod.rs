//! Score extraction, aggregation and feedback selection.
//!
//! This module turns loaded survey rows into per-course summaries, folds them
//! into corpus-wide score series, ranks questions by mean score, and picks
//! quotable positive comments.

pub mod aggregate;
pub mod analyzer;
pub mod extract;
pub mod feedback;
pub mod scale;
pub mod types;
pub mod utility;
