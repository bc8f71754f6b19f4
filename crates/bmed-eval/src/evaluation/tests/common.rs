use chrono::{DateTime, TimeZone, Utc};

use crate::evaluation::domain::{
    DataStorage, DiagnosticAnswers, Identification, InteroperabilityAnswers, Jurisdiction,
    ManagementAnswers, RegulatoryAnswers, SecurityAnswers, StabilityAnswers, TherapeuticsAnswers,
    ToolMetrics, UsabilityAnswers,
};
use crate::evaluation::rubric::{
    ApiDocumentation, Certification, ClickCount, ContentAuthorship, EvidenceDesign,
    ExchangeFormat, Failover, RecordConnectivity, RecoveryPoint, RecoveryTime, ValidationMethod,
    Vocabulary,
};
use crate::evaluation::subscale::{QualityRatings, Rating};

pub(super) fn identification() -> Identification {
    Identification {
        evaluator_name: "Dr. Paulo Lima".to_string(),
        email: "paulo.lima@hospital.org.br".to_string(),
        jurisdiction: Jurisdiction::parse("RJ").expect("valid unit"),
        registration_number: "52-123456".to_string(),
        solution_name: "TeleCare Pro".to_string(),
    }
}

pub(super) fn evaluated_at() -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2025, 3, 14, 9, 30, 0)
        .single()
        .expect("valid timestamp")
}

pub(super) fn interoperability() -> InteroperabilityAnswers {
    InteroperabilityAnswers {
        exchange_format: ExchangeFormat::Hl7Fhir,
        vocabulary: Vocabulary::Controlled,
        api_documentation: ApiDocumentation::Public,
        certification: Certification::Absent,
    }
}

pub(super) fn safe_security() -> SecurityAnswers {
    SecurityAnswers {
        storage: Some(DataStorage::Cloud {
            domestic_or_scc: true,
        }),
        trains_on_identifiable_data: false,
    }
}

pub(super) fn identifiable_training() -> SecurityAnswers {
    SecurityAnswers {
        storage: Some(DataStorage::OnDevice { sandboxed: true }),
        trains_on_identifiable_data: true,
    }
}

/// Scale responses that land at 52.5, inside the [51, 68) tier.
pub(super) fn usability() -> UsabilityAnswers {
    UsabilityAnswers {
        clicks: ClickCount::FewerThanFive,
        usability_responses: vec![4, 3, 3, 3, 3, 3, 3, 3, 3, 3],
    }
}

pub(super) fn stability() -> StabilityAnswers {
    StabilityAnswers {
        recovery_point: RecoveryPoint::FortyThreeMinutesMonthly,
        recovery_time: RecoveryTime::RealTime,
        failover: Failover::AutomaticRedundancy,
    }
}

/// Telemedicine answers that total 35 + 10 + 12 + 30.
pub(super) fn management_answers() -> ManagementAnswers {
    ManagementAnswers {
        interoperability: interoperability(),
        security: safe_security(),
        usability: usability(),
        stability: stability(),
    }
}

pub(super) fn clinical_registered() -> RegulatoryAnswers {
    RegulatoryAnswers::Clinical {
        national_registration: true,
        portuguese_instructions: true,
    }
}

pub(super) fn diagnostic_answers() -> DiagnosticAnswers {
    DiagnosticAnswers {
        validation: ValidationMethod::ExternalSingleSite,
        metrics: ToolMetrics::DiagnosticSupport {
            specificity_at_least_85: true,
            ppv_at_least_95: false,
            f1_at_least_95: true,
        },
        regulatory: clinical_registered(),
        security: SecurityAnswers {
            storage: None,
            trains_on_identifiable_data: false,
        },
    }
}

pub(super) fn non_clinical(
    research_disclaimer: bool,
    record_connectivity: RecordConnectivity,
) -> RegulatoryAnswers {
    RegulatoryAnswers::NonClinical {
        research_disclaimer,
        record_connectivity,
    }
}

pub(super) fn therapeutics_answers(rating: Rating) -> TherapeuticsAnswers {
    TherapeuticsAnswers {
        evidence: EvidenceDesign::RandomizedControlled,
        quality: QualityRatings::uniform(rating),
        authorship: ContentAuthorship::Qualified,
    }
}
