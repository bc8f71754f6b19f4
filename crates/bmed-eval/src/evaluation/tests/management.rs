use super::common::*;
use crate::evaluation::domain::ManagementAnswers;
use crate::evaluation::rubric::{
    ApiDocumentation, Certification, ClickCount, ExchangeFormat, Failover, RecoveryPoint,
    RecoveryTime, Vocabulary,
};
use crate::evaluation::scoring::{
    score_interoperability, score_management, score_stability, score_usability,
};
use crate::evaluation::{total, BlockReason, Category, SubscaleError};

#[test]
fn interoperability_adds_each_answer() {
    let outcome = score_interoperability(&interoperability());
    assert_eq!(outcome.points, 35);
    assert_eq!(outcome.max_points, 40);
}

#[test]
fn interoperability_without_integration_keeps_certification_floor() {
    let mut answers = interoperability();
    answers.exchange_format = ExchangeFormat::NoIntegrationOrCsv;
    answers.vocabulary = Vocabulary::FreeText;
    answers.api_documentation = ApiDocumentation::OnRequest;
    answers.certification = Certification::Absent;

    assert_eq!(score_interoperability(&answers).points, 5);
}

#[test]
fn proprietary_api_scores_half_of_fhir() {
    let mut answers = interoperability();
    answers.exchange_format = ExchangeFormat::ProprietaryApi;
    answers.certification = Certification::Certified;

    assert_eq!(score_interoperability(&answers).points, 35);
}

#[test]
fn usability_combines_clicks_and_scale_tier() {
    let outcome = score_usability(&usability()).expect("valid responses");
    assert_eq!(outcome.points, 12);
    assert!(outcome.notes.iter().any(|note| note.contains("52.5")));

    let mut answers = usability();
    answers.usability_responses = vec![3; 10];
    // 50.0 falls just below the lowest scale tier.
    assert_eq!(score_usability(&answers).expect("valid").points, 10);

    answers.clicks = ClickCount::SixToNine;
    answers.usability_responses = vec![5, 1, 5, 1, 5, 1, 5, 1, 5, 1];
    assert_eq!(score_usability(&answers).expect("valid").points, 15);

    answers.clicks = ClickCount::MoreThanTen;
    answers.usability_responses = vec![4, 2, 4, 2, 4, 2, 4, 2, 4, 2];
    // 75.0 sits in the [68, 80) tier.
    assert_eq!(score_usability(&answers).expect("valid").points, 5);
}

#[test]
fn usability_fails_fast_on_incomplete_scale() {
    let mut answers = usability();
    answers.usability_responses.truncate(9);

    assert_eq!(
        score_usability(&answers),
        Err(SubscaleError::InvalidResponseCount {
            expected: 10,
            found: 9
        })
    );
}

#[test]
fn stability_sums_three_lookups() {
    assert_eq!(score_stability(&stability()).points, 30);

    let partial = crate::evaluation::StabilityAnswers {
        recovery_point: RecoveryPoint::ThreeAndHalfHoursMonthly,
        recovery_time: RecoveryTime::DailyBackup,
        failover: Failover::TakesDays,
    };
    assert_eq!(score_stability(&partial).points, 5);
}

#[test]
fn management_scores_four_labelled_categories() {
    let scores = score_management(&management_answers()).expect("valid answers");

    let labels: Vec<_> = scores.iter().map(|(label, _)| label).collect();
    assert_eq!(
        labels,
        vec![
            "1.1 Interoperabilidade",
            "1.2 Segurança",
            "1.3 Usabilidade",
            "1.4 Estabilidade"
        ]
    );
    assert_eq!(scores.points(Category::Interoperability.label()), 35);
    assert_eq!(scores.points(Category::ManagementSecurity.label()), 10);
    assert_eq!(scores.points(Category::Usability.label()), 12);
    assert_eq!(scores.points(Category::Stability.label()), 30);
    assert_eq!(total(&scores), 87);
}

#[test]
fn identifiable_training_zeroes_security_regardless_of_other_answers() {
    let answers = ManagementAnswers {
        security: identifiable_training(),
        ..management_answers()
    };

    let scores = score_management(&answers).expect("valid answers");
    let security = scores
        .get(Category::ManagementSecurity.label())
        .expect("security scored");

    assert_eq!(security.points, 0);
    assert_eq!(security.block, Some(BlockReason::IdentifiableDataTraining));
    assert_eq!(total(&scores), 77);
}
