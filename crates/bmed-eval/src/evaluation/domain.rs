use serde::{Deserialize, Serialize};
use std::fmt;

use super::rubric::{
    ApiDocumentation, Certification, ClickCount, ContentAuthorship, EvidenceDesign,
    ExchangeFormat, Failover, RecordConnectivity, RecoveryPoint, RecoveryTime, ValidationMethod,
    Vocabulary,
};
use super::subscale::{QualityRatings, Rating};
use super::taxonomy::Group;

/// Brazilian federative units accepted as the evaluator's registration jurisdiction.
pub const JURISDICTIONS: [&str; 27] = [
    "AC", "AL", "AP", "AM", "BA", "CE", "DF", "ES", "GO", "MA", "MT", "MS", "MG", "PA", "PB", "PR",
    "PE", "PI", "RJ", "RN", "RS", "RO", "RR", "SC", "SP", "SE", "TO",
];

/// Errors raised while validating step-one identification fields.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum IdentificationError {
    #[error("{0} is required")]
    MissingField(&'static str),
    #[error("'{0}' is not a Brazilian federative unit")]
    UnknownJurisdiction(String),
}

/// Two-letter federative unit code of the evaluator's professional registration.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Jurisdiction(String);

impl Jurisdiction {
    pub fn parse(code: &str) -> Result<Self, IdentificationError> {
        let normalized = code.trim().to_ascii_uppercase();
        if JURISDICTIONS.contains(&normalized.as_str()) {
            Ok(Self(normalized))
        } else {
            Err(IdentificationError::UnknownJurisdiction(code.to_string()))
        }
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

/// São Paulo, the fallback when `APP_DEFAULT_JURISDICTION` is unset.
impl Default for Jurisdiction {
    fn default() -> Self {
        Self("SP".to_string())
    }
}

impl TryFrom<String> for Jurisdiction {
    type Error = IdentificationError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::parse(&value)
    }
}

impl From<Jurisdiction> for String {
    fn from(value: Jurisdiction) -> Self {
        value.0
    }
}

impl fmt::Display for Jurisdiction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Who is evaluating which solution. Formats of email and registration are not checked here.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Identification {
    pub evaluator_name: String,
    #[serde(default)]
    pub email: String,
    /// Required on the wire. `EvaluationRequest::from_json` fills it from configuration when absent.
    pub jurisdiction: Jurisdiction,
    pub registration_number: String,
    #[serde(default)]
    pub solution_name: String,
}

impl Identification {
    /// Evaluator name and registration number must be filled in before scoring starts.
    pub fn validate(&self) -> Result<(), IdentificationError> {
        if self.evaluator_name.trim().is_empty() {
            return Err(IdentificationError::MissingField("evaluator name"));
        }
        if self.registration_number.trim().is_empty() {
            return Err(IdentificationError::MissingField("registration number"));
        }
        Ok(())
    }

    /// Registration rendered as `NUMBER/UF`.
    pub fn registration(&self) -> String {
        format!("{}/{}", self.registration_number.trim(), self.jurisdiction)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct InteroperabilityAnswers {
    pub exchange_format: ExchangeFormat,
    pub vocabulary: Vocabulary,
    pub api_documentation: ApiDocumentation,
    pub certification: Certification,
}

/// Where patient data lives. Recorded for the report; it carries no points.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "location")]
pub enum DataStorage {
    Cloud { domestic_or_scc: bool },
    OnDevice { sandboxed: bool },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SecurityAnswers {
    #[serde(default)]
    pub storage: Option<DataStorage>,
    pub trains_on_identifiable_data: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct UsabilityAnswers {
    pub clicks: ClickCount,
    pub usability_responses: Vec<Rating>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StabilityAnswers {
    pub recovery_point: RecoveryPoint,
    pub recovery_time: RecoveryTime,
    pub failover: Failover,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ManagementAnswers {
    pub interoperability: InteroperabilityAnswers,
    pub security: SecurityAnswers,
    pub usability: UsabilityAnswers,
    pub stability: StabilityAnswers,
}

/// Threshold checks for the single tool type the evaluated solution declares.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "tool_type")]
pub enum ToolMetrics {
    ScreeningTriage {
        sensitivity_at_least_90: bool,
        npv_at_least_95: bool,
    },
    DiagnosticSupport {
        specificity_at_least_85: bool,
        ppv_at_least_95: bool,
        f1_at_least_95: bool,
    },
    Monitoring {
        false_alarms_below_one_per_4h: bool,
        lead_time_at_least_4h: bool,
        precision_at_least_20: bool,
    },
}

impl ToolMetrics {
    pub const fn label(&self) -> &'static str {
        match self {
            Self::ScreeningTriage { .. } => "Rastreio/Triagem",
            Self::DiagnosticSupport { .. } => "Apoio ao Diagnóstico",
            Self::Monitoring { .. } => "Monitorização",
        }
    }

    /// Named checks for this tool type with whether each threshold is met.
    pub fn checks(&self) -> Vec<(&'static str, bool)> {
        match *self {
            Self::ScreeningTriage {
                sensitivity_at_least_90,
                npv_at_least_95,
            } => vec![
                ("sensitivity >= 90%", sensitivity_at_least_90),
                ("NPV >= 95%", npv_at_least_95),
            ],
            Self::DiagnosticSupport {
                specificity_at_least_85,
                ppv_at_least_95,
                f1_at_least_95,
            } => vec![
                ("specificity >= 85%", specificity_at_least_85),
                ("PPV >= 95%", ppv_at_least_95),
                ("F1-score >= 95%", f1_at_least_95),
            ],
            Self::Monitoring {
                false_alarms_below_one_per_4h,
                lead_time_at_least_4h,
                precision_at_least_20,
            } => vec![
                ("false alarms < 1 per 4h", false_alarms_below_one_per_4h),
                ("lead time >= 4h", lead_time_at_least_4h),
                ("precision >= 20%", precision_at_least_20),
            ],
        }
    }
}

/// Regulatory answers branch on whether the tool is used clinically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "use")]
pub enum RegulatoryAnswers {
    /// Software as a medical device.
    Clinical {
        national_registration: bool,
        portuguese_instructions: bool,
    },
    /// Educational or research use.
    NonClinical {
        research_disclaimer: bool,
        record_connectivity: RecordConnectivity,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosticAnswers {
    pub validation: ValidationMethod,
    pub metrics: ToolMetrics,
    pub regulatory: RegulatoryAnswers,
    pub security: SecurityAnswers,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TherapeuticsAnswers {
    pub evidence: EvidenceDesign,
    pub quality: QualityRatings,
    pub authorship: ContentAuthorship,
}

/// Complete answer set for one group's questionnaire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "group")]
pub enum GroupAnswers {
    ManagementTools(ManagementAnswers),
    DiagnosticSupport(DiagnosticAnswers),
    DigitalTherapeutics(TherapeuticsAnswers),
}

impl GroupAnswers {
    pub const fn group(&self) -> Group {
        match self {
            Self::ManagementTools(_) => Group::ManagementTools,
            Self::DiagnosticSupport(_) => Group::DiagnosticSupport,
            Self::DigitalTherapeutics(_) => Group::DigitalTherapeutics,
        }
    }
}
