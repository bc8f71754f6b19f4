//! Evaluation rubric: taxonomy, point tables, sub-scales, group scorers, and the session that
//! accumulates category scores until the report is finalized.
//!
//! Scorers are pure functions over typed answers. Blocking answers (identifiable-data training,
//! missing registration, ethical risk) are not errors: they zero the category and travel with
//! the outcome as a [`BlockReason`], which the summary turns into an [`Advisory`].

pub mod aggregate;
pub mod domain;
mod outcome;
mod request;
pub mod rubric;
pub mod scoring;
mod session;
pub mod subscale;
pub mod taxonomy;

#[cfg(test)]
mod tests;

pub use aggregate::{
    breakdown, max_total, total, Advisory, CategoryScoreView, EvaluationSummary,
};
pub use domain::{
    DataStorage, DiagnosticAnswers, GroupAnswers, Identification, IdentificationError,
    InteroperabilityAnswers, Jurisdiction, ManagementAnswers, RegulatoryAnswers,
    SecurityAnswers, StabilityAnswers, TherapeuticsAnswers, ToolMetrics, UsabilityAnswers,
};
pub use outcome::{BlockReason, Category, CategoryEntry, CategoryOutcome, CategoryScores};
pub use request::EvaluationRequest;
pub use rubric::Points;
pub use scoring::{score_diagnostic, score_dtx, score_management};
pub use session::{EvaluationError, EvaluationSession, SectionAnswers};
pub use subscale::{
    compute_quality, compute_usability, DimensionMismatch, QualityDimension, QualityRatings,
    Rating, SubscaleError,
};
pub use taxonomy::{all_niches, catalog, resolve_group, Group, Niche, TaxonomyError};
