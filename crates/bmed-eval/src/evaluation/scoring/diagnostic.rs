use super::super::domain::{DiagnosticAnswers, RegulatoryAnswers, ToolMetrics};
use super::super::outcome::{BlockReason, Category, CategoryOutcome, CategoryScores};
use super::super::rubric::{
    Points, RecordConnectivity, ValidationMethod, METRIC_CHECK_POINTS, REGULATORY_POINTS,
    SCIENTIFIC_VALIDATION_MAX,
};
use super::score_security;
use tracing::{debug, warn};

pub fn score_validation(method: ValidationMethod) -> CategoryOutcome {
    CategoryOutcome::scored(method.points(), SCIENTIFIC_VALIDATION_MAX)
}

/// Ten points per met threshold of the declared tool type.
pub fn score_metrics(metrics: &ToolMetrics) -> CategoryOutcome {
    let checks = metrics.checks();
    let max_points = METRIC_CHECK_POINTS * checks.len() as Points;
    let met: Vec<&str> = checks
        .iter()
        .filter(|(_, met)| *met)
        .map(|(name, _)| *name)
        .collect();
    let points = METRIC_CHECK_POINTS * met.len() as Points;

    let outcome =
        CategoryOutcome::scored(points, max_points).with_note(format!("tool type: {}", metrics.label()));
    if met.is_empty() {
        outcome
    } else {
        outcome.with_note(format!("met: {}", met.join(", ")))
    }
}

pub fn score_regulatory(answers: &RegulatoryAnswers) -> CategoryOutcome {
    match *answers {
        RegulatoryAnswers::Clinical {
            national_registration,
            portuguese_instructions,
        } => {
            if national_registration && portuguese_instructions {
                CategoryOutcome::scored(REGULATORY_POINTS, REGULATORY_POINTS)
                    .with_note("registration validated")
            } else {
                warn!(
                    national_registration,
                    portuguese_instructions, "regulatory block for clinical use"
                );
                CategoryOutcome::blocked(
                    REGULATORY_POINTS,
                    BlockReason::RegulatoryRegistration {
                        registered: national_registration,
                        portuguese_instructions,
                    },
                )
            }
        }
        RegulatoryAnswers::NonClinical {
            research_disclaimer,
            record_connectivity,
        } => {
            let separated_data_source = record_connectivity == RecordConnectivity::SeparatedDataset;
            if research_disclaimer && separated_data_source {
                CategoryOutcome::scored(REGULATORY_POINTS, REGULATORY_POINTS)
            } else {
                warn!(
                    research_disclaimer,
                    separated_data_source, "ethical risk block for non-clinical use"
                );
                CategoryOutcome::blocked(
                    REGULATORY_POINTS,
                    BlockReason::EthicalRisk {
                        research_disclaimer,
                        separated_data_source,
                    },
                )
            }
        }
    }
}

pub fn score_diagnostic(answers: &DiagnosticAnswers) -> CategoryScores {
    let mut scores = CategoryScores::new();
    scores.record(
        Category::ScientificValidation,
        score_validation(answers.validation),
    );
    scores.record(Category::Metrics, score_metrics(&answers.metrics));
    scores.record(Category::Regulatory, score_regulatory(&answers.regulatory));
    scores.record(
        Category::DiagnosticSecurity,
        score_security(&answers.security),
    );

    debug!(
        categories = scores.len(),
        "scored diagnostic support questionnaire"
    );
    scores
}
