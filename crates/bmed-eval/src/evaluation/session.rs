use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::aggregate::{self, EvaluationSummary};
use super::domain::{
    GroupAnswers, Identification, IdentificationError, InteroperabilityAnswers,
    RegulatoryAnswers, SecurityAnswers, StabilityAnswers, ToolMetrics, UsabilityAnswers,
};
use super::outcome::{Category, CategoryOutcome, CategoryScores};
use super::rubric::{ContentAuthorship, EvidenceDesign, Points, ValidationMethod};
use super::scoring;
use super::subscale::{QualityRatings, SubscaleError};
use super::taxonomy::{Group, Niche, TaxonomyError};

/// Errors surfaced while driving an evaluation session.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum EvaluationError {
    #[error(transparent)]
    Identification(#[from] IdentificationError),
    #[error(transparent)]
    Taxonomy(#[from] TaxonomyError),
    #[error(transparent)]
    Subscale(#[from] SubscaleError),
    #[error(
        "{category} belongs to {section_group}, but this evaluation is scored as {session_group}"
    )]
    SectionOutsideGroup {
        category: Category,
        section_group: Group,
        session_group: Group,
    },
    #[error("answers for {answers_group} cannot score an evaluation of {session_group}")]
    AnswersOutsideGroup {
        answers_group: Group,
        session_group: Group,
    },
    #[error("evaluation incomplete, unanswered sections: {}", join_labels(.missing))]
    Incomplete { missing: Vec<Category> },
}

fn join_labels(categories: &[Category]) -> String {
    categories
        .iter()
        .map(|category| category.label())
        .collect::<Vec<_>>()
        .join(", ")
}

/// Answers for a single questionnaire section, scored on their own.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "section", content = "answers")]
pub enum SectionAnswers {
    Interoperability(InteroperabilityAnswers),
    ManagementSecurity(SecurityAnswers),
    Usability(UsabilityAnswers),
    Stability(StabilityAnswers),
    ScientificValidation(ValidationMethod),
    Metrics(ToolMetrics),
    Regulatory(RegulatoryAnswers),
    DiagnosticSecurity(SecurityAnswers),
    Evidence(EvidenceDesign),
    Engagement(QualityRatings),
    Content(ContentAuthorship),
}

impl SectionAnswers {
    pub const fn category(&self) -> Category {
        match self {
            Self::Interoperability(_) => Category::Interoperability,
            Self::ManagementSecurity(_) => Category::ManagementSecurity,
            Self::Usability(_) => Category::Usability,
            Self::Stability(_) => Category::Stability,
            Self::ScientificValidation(_) => Category::ScientificValidation,
            Self::Metrics(_) => Category::Metrics,
            Self::Regulatory(_) => Category::Regulatory,
            Self::DiagnosticSecurity(_) => Category::DiagnosticSecurity,
            Self::Evidence(_) => Category::Evidence,
            Self::Engagement(_) => Category::Engagement,
            Self::Content(_) => Category::Content,
        }
    }

    pub fn score(&self) -> Result<CategoryOutcome, SubscaleError> {
        let outcome = match self {
            Self::Interoperability(answers) => scoring::score_interoperability(answers),
            Self::ManagementSecurity(answers) | Self::DiagnosticSecurity(answers) => {
                scoring::score_security(answers)
            }
            Self::Usability(answers) => scoring::score_usability(answers)?,
            Self::Stability(answers) => scoring::score_stability(answers),
            Self::ScientificValidation(method) => scoring::score_validation(*method),
            Self::Metrics(metrics) => scoring::score_metrics(metrics),
            Self::Regulatory(answers) => scoring::score_regulatory(answers),
            Self::Evidence(design) => scoring::score_evidence(*design),
            Self::Engagement(ratings) => scoring::score_engagement(ratings)?,
            Self::Content(authorship) => scoring::score_content(*authorship),
        };
        Ok(outcome)
    }
}

/// State of one evaluator working through one solution's questionnaire.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EvaluationSession {
    identification: Identification,
    niche: Niche,
    group: Group,
    scores: CategoryScores,
}

impl EvaluationSession {
    /// Step one: validate identification and route the niche to its group.
    pub fn start(identification: Identification, niche: &str) -> Result<Self, EvaluationError> {
        identification.validate()?;
        let niche = Niche::from_label(niche)?;
        let group = niche.group();

        info!(
            niche = niche.label(),
            group = group.label(),
            "evaluation session started"
        );

        Ok(Self {
            identification,
            niche,
            group,
            scores: CategoryScores::new(),
        })
    }

    pub fn identification(&self) -> &Identification {
        &self.identification
    }

    pub fn niche(&self) -> Niche {
        self.niche
    }

    pub fn group(&self) -> Group {
        self.group
    }

    pub fn scores(&self) -> &CategoryScores {
        &self.scores
    }

    /// Running total, recomputed from the score map on every call.
    pub fn total(&self) -> Points {
        aggregate::total(&self.scores)
    }

    /// Score one section. Answering a section again replaces its previous score.
    pub fn answer(
        &mut self,
        section: &SectionAnswers,
    ) -> Result<CategoryOutcome, EvaluationError> {
        let category = section.category();
        if category.group() != self.group {
            return Err(EvaluationError::SectionOutsideGroup {
                category,
                section_group: category.group(),
                session_group: self.group,
            });
        }

        let outcome = section.score()?;
        debug!(
            category = category.label(),
            points = outcome.points,
            max_points = outcome.max_points,
            "section scored"
        );
        self.scores.record(category, outcome.clone());

        Ok(outcome)
    }

    /// Score every section of the group at once.
    pub fn apply(&mut self, answers: &GroupAnswers) -> Result<&CategoryScores, EvaluationError> {
        if answers.group() != self.group {
            return Err(EvaluationError::AnswersOutsideGroup {
                answers_group: answers.group(),
                session_group: self.group,
            });
        }

        let scores = match answers {
            GroupAnswers::ManagementTools(answers) => scoring::score_management(answers)?,
            GroupAnswers::DiagnosticSupport(answers) => scoring::score_diagnostic(answers),
            GroupAnswers::DigitalTherapeutics(answers) => scoring::score_dtx(answers)?,
        };
        self.scores.merge(scores);

        Ok(&self.scores)
    }

    /// Categories of the session's group that have not been scored yet.
    pub fn missing_sections(&self) -> Vec<Category> {
        Category::for_group(self.group)
            .iter()
            .copied()
            .filter(|category| !self.scores.contains(*category))
            .collect()
    }

    /// Consolidate the report. Every section of the group must have been answered.
    pub fn finalize(
        &self,
        evaluated_at: DateTime<Utc>,
    ) -> Result<EvaluationSummary, EvaluationError> {
        let missing = self.missing_sections();
        if !missing.is_empty() {
            return Err(EvaluationError::Incomplete { missing });
        }

        let summary = EvaluationSummary::build(
            self.identification.clone(),
            self.niche,
            &self.scores,
            evaluated_at,
        );

        if summary.blocked {
            warn!(
                advisories = summary.advisories.len(),
                total = summary.total,
                "evaluation finalized with blocking advisories"
            );
        } else {
            info!(
                total = summary.total,
                max_total = summary.max_total,
                "evaluation finalized"
            );
        }

        Ok(summary)
    }
}
