use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::domain::Identification;
use super::outcome::{BlockReason, CategoryScores};
use super::rubric::Points;
use super::taxonomy::{Group, Niche};

/// Unweighted sum of every populated category. Order never matters.
pub fn total(scores: &CategoryScores) -> Points {
    scores.iter().map(|(_, outcome)| outcome.points).sum()
}

/// Highest total the scored categories could have reached.
pub fn max_total(scores: &CategoryScores) -> Points {
    scores.iter().map(|(_, outcome)| outcome.max_points).sum()
}

/// One row of the ordered report breakdown.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryScoreView {
    pub label: String,
    pub points: Points,
    pub max_points: Points,
    pub blocked: bool,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

pub fn breakdown(scores: &CategoryScores) -> Vec<CategoryScoreView> {
    scores
        .iter()
        .map(|(label, outcome)| CategoryScoreView {
            label: label.to_string(),
            points: outcome.points,
            max_points: outcome.max_points,
            blocked: outcome.is_blocked(),
            notes: outcome.notes.clone(),
        })
        .collect()
}

/// Block surfaced to the reader of the report; a zero alone would not say why.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Advisory {
    pub category: String,
    pub reason: BlockReason,
    pub message: String,
}

pub fn advisories(scores: &CategoryScores) -> Vec<Advisory> {
    scores
        .blocks()
        .map(|(label, reason)| Advisory {
            category: label.to_string(),
            reason: reason.clone(),
            message: reason.summary(),
        })
        .collect()
}

/// Consolidated result shown when the evaluator finalizes the report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EvaluationSummary {
    pub identification: Identification,
    pub niche: Niche,
    pub niche_label: String,
    pub group: Group,
    pub group_label: String,
    pub breakdown: Vec<CategoryScoreView>,
    pub total: Points,
    pub max_total: Points,
    pub advisories: Vec<Advisory>,
    pub blocked: bool,
    pub evaluated_at: DateTime<Utc>,
}

impl EvaluationSummary {
    pub fn build(
        identification: Identification,
        niche: Niche,
        scores: &CategoryScores,
        evaluated_at: DateTime<Utc>,
    ) -> Self {
        let advisories = advisories(scores);
        Self {
            identification,
            niche,
            niche_label: niche.label().to_string(),
            group: niche.group(),
            group_label: niche.group().label().to_string(),
            breakdown: breakdown(scores),
            total: total(scores),
            max_total: max_total(scores),
            blocked: !advisories.is_empty(),
            advisories,
            evaluated_at,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::evaluation::outcome::{Category, CategoryOutcome};

    #[test]
    fn total_sums_all_entries() {
        let scores: CategoryScores = [("A", 10), ("B", 0), ("C", 20)].into_iter().collect();
        assert_eq!(total(&scores), 30);
    }

    #[test]
    fn total_of_empty_scores_is_zero() {
        assert_eq!(total(&CategoryScores::new()), 0);
    }

    #[test]
    fn total_ignores_insertion_order() {
        let forward: CategoryScores = [("A", 10), ("B", 0), ("C", 20)].into_iter().collect();
        let reversed: CategoryScores = [("C", 20), ("B", 0), ("A", 10)].into_iter().collect();
        assert_eq!(total(&forward), total(&reversed));
    }

    #[test]
    fn breakdown_preserves_display_order() {
        let scores: CategoryScores = [("Z", 1), ("A", 2)].into_iter().collect();
        let labels: Vec<_> = breakdown(&scores).into_iter().map(|row| row.label).collect();
        assert_eq!(labels, vec!["Z", "A"]);
    }

    #[test]
    fn advisories_list_blocked_categories() {
        let mut scores = CategoryScores::new();
        scores.record(
            Category::DiagnosticSecurity,
            CategoryOutcome::blocked(10, BlockReason::IdentifiableDataTraining),
        );
        scores.record(Category::Metrics, CategoryOutcome::scored(20, 30));

        let advisories = advisories(&scores);
        assert_eq!(advisories.len(), 1);
        assert_eq!(advisories[0].category, "2.4 Segurança");
        assert!(advisories[0].message.contains("do not use"));
        assert_eq!(max_total(&scores), 40);
    }
}
