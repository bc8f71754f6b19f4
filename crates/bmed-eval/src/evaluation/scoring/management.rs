use super::super::domain::{
    InteroperabilityAnswers, ManagementAnswers, StabilityAnswers, UsabilityAnswers,
};
use super::super::outcome::{Category, CategoryOutcome, CategoryScores};
use super::super::rubric::{
    usability_tier_points, INTEROPERABILITY_MAX, STABILITY_MAX, USABILITY_MAX,
};
use super::super::subscale::{compute_usability, SubscaleError};
use super::score_security;
use tracing::debug;

pub fn score_interoperability(answers: &InteroperabilityAnswers) -> CategoryOutcome {
    let points = answers.exchange_format.points()
        + answers.vocabulary.points()
        + answers.api_documentation.points()
        + answers.certification.points();

    CategoryOutcome::scored(points, INTEROPERABILITY_MAX)
}

/// Click tier plus the usability-scale tier; fails on malformed scale responses.
pub fn score_usability(answers: &UsabilityAnswers) -> Result<CategoryOutcome, SubscaleError> {
    let scale = compute_usability(&answers.usability_responses)?;
    let points = answers.clicks.points() + usability_tier_points(scale);

    Ok(CategoryOutcome::scored(points, USABILITY_MAX).with_note(format!("SUS score {scale:.1}")))
}

pub fn score_stability(answers: &StabilityAnswers) -> CategoryOutcome {
    let points = answers.recovery_point.points()
        + answers.recovery_time.points()
        + answers.failover.points();

    CategoryOutcome::scored(points, STABILITY_MAX)
}

pub fn score_management(answers: &ManagementAnswers) -> Result<CategoryScores, SubscaleError> {
    let mut scores = CategoryScores::new();
    scores.record(
        Category::Interoperability,
        score_interoperability(&answers.interoperability),
    );
    scores.record(
        Category::ManagementSecurity,
        score_security(&answers.security),
    );
    scores.record(Category::Usability, score_usability(&answers.usability)?);
    scores.record(Category::Stability, score_stability(&answers.stability));

    debug!(
        categories = scores.len(),
        "scored management tools questionnaire"
    );
    Ok(scores)
}
