use super::super::domain::TherapeuticsAnswers;
use super::super::outcome::{Category, CategoryOutcome, CategoryScores};
use super::super::rubric::{
    quality_tier_points, ContentAuthorship, EvidenceDesign, CONTENT_MAX, ENGAGEMENT_MAX,
    EVIDENCE_MAX,
};
use super::super::subscale::{quality_scores, QualityRatings, SubscaleError};
use tracing::debug;

pub fn score_evidence(design: EvidenceDesign) -> CategoryOutcome {
    CategoryOutcome::scored(design.points(), EVIDENCE_MAX)
}

/// Engagement points from the quality-scale composite.
pub fn score_engagement(ratings: &QualityRatings) -> Result<CategoryOutcome, SubscaleError> {
    let scores = quality_scores(ratings)?;

    Ok(
        CategoryOutcome::scored(quality_tier_points(scores.composite), ENGAGEMENT_MAX).with_note(
            format!(
                "MARS {:.2} (engagement {:.2}, functionality {:.2}, aesthetics {:.2}, information {:.2})",
                scores.composite,
                scores.engagement,
                scores.functionality,
                scores.aesthetics,
                scores.information
            ),
        ),
    )
}

pub fn score_content(authorship: ContentAuthorship) -> CategoryOutcome {
    CategoryOutcome::scored(authorship.points(), CONTENT_MAX)
}

pub fn score_dtx(answers: &TherapeuticsAnswers) -> Result<CategoryScores, SubscaleError> {
    let mut scores = CategoryScores::new();
    scores.record(Category::Evidence, score_evidence(answers.evidence));
    scores.record(Category::Engagement, score_engagement(&answers.quality)?);
    scores.record(Category::Content, score_content(answers.authorship));

    debug!(
        categories = scores.len(),
        "scored digital therapeutics questionnaire"
    );
    Ok(scores)
}
