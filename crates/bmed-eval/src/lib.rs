//! Scoring engine behind the b-Med solution evaluation questionnaire.
//!
//! The [`evaluation`] module holds the rubric: niche taxonomy, point tables, the usability and
//! quality sub-scales, one scorer per evaluation group, and the session that accumulates scores
//! until the evaluator finalizes the report. [`config`], [`telemetry`], and [`error`] carry the
//! ambient service concerns shared with the API binary.

pub mod config;
pub mod error;
pub mod evaluation;
pub mod telemetry;
