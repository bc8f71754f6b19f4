use crate::report::render_summary;
use bmed_eval::config::AppConfig;
use bmed_eval::error::AppError;
use bmed_eval::evaluation::domain::{DataStorage, Jurisdiction};
use bmed_eval::evaluation::rubric::{
    ApiDocumentation, Certification, ClickCount, ExchangeFormat, Failover, RecoveryPoint,
    RecoveryTime, Vocabulary,
};
use bmed_eval::evaluation::{
    catalog, EvaluationRequest, EvaluationSession, Identification, InteroperabilityAnswers,
    SectionAnswers, SecurityAnswers, StabilityAnswers, UsabilityAnswers,
};
use chrono::Utc;
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug)]
pub(crate) struct ScoreArgs {
    /// JSON evaluation request: identification, niche, and answers tagged by group
    #[arg(long)]
    pub(crate) input: PathBuf,
    /// Print the summary as JSON instead of the terminal report
    #[arg(long)]
    pub(crate) json: bool,
}

pub(crate) fn run_niches() {
    for entry in catalog() {
        println!("{}", entry.label);
        for niche in entry.niches {
            println!("  - {niche}");
        }
    }
}

pub(crate) fn run_score(args: ScoreArgs) -> Result<(), AppError> {
    let config = AppConfig::load()?;
    let raw = std::fs::read(&args.input)?;
    let request = EvaluationRequest::from_json(&raw, &config.evaluation.default_jurisdiction)?;
    let summary = request.evaluate(Utc::now())?;

    if args.json {
        println!("{}", serde_json::to_string_pretty(&summary)?);
    } else {
        println!("{}", render_summary(&summary));
    }
    Ok(())
}

pub(crate) fn run_demo() -> Result<(), AppError> {
    let mut session = EvaluationSession::start(demo_identification(), "Telemedicina")?;
    println!(
        "Evaluating {} as {} ({})",
        session.identification().solution_name,
        session.niche(),
        session.group()
    );

    for section in demo_sections() {
        let outcome = session.answer(&section)?;
        println!(
            "  {}: {}/{} (running total {})",
            section.category(),
            outcome.points,
            outcome.max_points,
            session.total()
        );
    }

    let summary = session.finalize(Utc::now())?;
    println!("\n{}", render_summary(&summary));
    Ok(())
}

fn demo_identification() -> Identification {
    Identification {
        evaluator_name: "Dr. Paulo Lima".to_string(),
        email: "paulo.lima@hospital.org.br".to_string(),
        jurisdiction: Jurisdiction::parse("RJ").unwrap_or_default(),
        registration_number: "52-123456".to_string(),
        solution_name: "TeleCare Pro".to_string(),
    }
}

/// Management-tools answers in questionnaire tab order, totalling 35 + 10 + 12 + 30.
fn demo_sections() -> Vec<SectionAnswers> {
    vec![
        SectionAnswers::Interoperability(InteroperabilityAnswers {
            exchange_format: ExchangeFormat::Hl7Fhir,
            vocabulary: Vocabulary::Controlled,
            api_documentation: ApiDocumentation::Public,
            certification: Certification::Absent,
        }),
        SectionAnswers::ManagementSecurity(SecurityAnswers {
            storage: Some(DataStorage::Cloud {
                domestic_or_scc: true,
            }),
            trains_on_identifiable_data: false,
        }),
        SectionAnswers::Usability(UsabilityAnswers {
            clicks: ClickCount::FewerThanFive,
            usability_responses: vec![4, 3, 3, 3, 3, 3, 3, 3, 3, 3],
        }),
        SectionAnswers::Stability(StabilityAnswers {
            recovery_point: RecoveryPoint::FortyThreeMinutesMonthly,
            recovery_time: RecoveryTime::RealTime,
            failover: Failover::AutomaticRedundancy,
        }),
    ]
}
