//! One scorer per evaluation group, plus the security veto both technical groups share.

mod diagnostic;
mod management;
mod therapeutics;

pub use diagnostic::{score_diagnostic, score_metrics, score_regulatory, score_validation};
pub use management::{
    score_interoperability, score_management, score_stability, score_usability,
};
pub use therapeutics::{score_content, score_dtx, score_engagement, score_evidence};

use super::domain::{DataStorage, SecurityAnswers};
use super::outcome::{BlockReason, CategoryOutcome};
use super::rubric::SECURITY_POINTS;
use tracing::warn;

/// Training on patient-identifying data vetoes the category; storage answers are informational.
pub fn score_security(answers: &SecurityAnswers) -> CategoryOutcome {
    let outcome = if answers.trains_on_identifiable_data {
        warn!("security veto: models trained on patient-identifying data");
        CategoryOutcome::blocked(SECURITY_POINTS, BlockReason::IdentifiableDataTraining)
    } else {
        CategoryOutcome::scored(SECURITY_POINTS, SECURITY_POINTS)
    };

    match answers.storage {
        Some(DataStorage::Cloud { domestic_or_scc }) => outcome.with_note(if domestic_or_scc {
            "cloud hosted in Brazil or under standard contractual clauses"
        } else {
            "cloud hosted abroad without standard contractual clauses"
        }),
        Some(DataStorage::OnDevice { sandboxed }) => outcome.with_note(if sandboxed {
            "on-device storage with app sandbox"
        } else {
            "on-device storage without app sandbox"
        }),
        None => outcome,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn security_scores_full_points_without_identifiable_training() {
        let outcome = score_security(&SecurityAnswers {
            storage: None,
            trains_on_identifiable_data: false,
        });
        assert_eq!(outcome.points, 10);
        assert!(!outcome.is_blocked());
    }

    #[test]
    fn storage_answers_never_change_points() {
        for storage in [
            DataStorage::Cloud {
                domestic_or_scc: false,
            },
            DataStorage::OnDevice { sandboxed: false },
        ] {
            let outcome = score_security(&SecurityAnswers {
                storage: Some(storage),
                trains_on_identifiable_data: false,
            });
            assert_eq!(outcome.points, 10);
            assert_eq!(outcome.notes.len(), 1);
        }
    }
}
