//! Point tables for every discrete option offered by the questionnaire.
//!
//! Each selectable option is its own enum variant and maps to points through `points()`, so
//! reworded option labels never change a score.

use serde::{Deserialize, Serialize};

pub type Points = u32;

pub const INTEROPERABILITY_MAX: Points = 40;
pub const SECURITY_POINTS: Points = 10;
pub const USABILITY_MAX: Points = 20;
pub const STABILITY_MAX: Points = 30;
pub const SCIENTIFIC_VALIDATION_MAX: Points = 20;
pub const METRIC_CHECK_POINTS: Points = 10;
pub const REGULATORY_POINTS: Points = 20;
pub const EVIDENCE_MAX: Points = 20;
pub const ENGAGEMENT_MAX: Points = 20;
pub const CONTENT_MAX: Points = 10;

/// How data travels between the solution and other systems.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ExchangeFormat {
    NoIntegrationOrCsv,
    ProprietaryApi,
    Hl7Fhir,
}

impl ExchangeFormat {
    pub const fn points(self) -> Points {
        match self {
            Self::NoIntegrationOrCsv => 0,
            Self::ProprietaryApi => 5,
            Self::Hl7Fhir => 10,
        }
    }
}

/// Whether clinical content is coded (CID/TUSS/SNOMED) or stored as free text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Vocabulary {
    FreeText,
    Controlled,
}

impl Vocabulary {
    pub const fn points(self) -> Points {
        match self {
            Self::FreeText => 0,
            Self::Controlled => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ApiDocumentation {
    OnRequest,
    Public,
}

impl ApiDocumentation {
    pub const fn points(self) -> Points {
        match self {
            Self::OnRequest => 0,
            Self::Public => 10,
        }
    }
}

/// National (SBIS-CFM) certification. An uncertified solution keeps a 5 point floor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Certification {
    Absent,
    Certified,
}

impl Certification {
    pub const fn points(self) -> Points {
        match self {
            Self::Absent => 5,
            Self::Certified => 10,
        }
    }
}

/// Clicks needed to complete the reference task (prescribing a common drug).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ClickCount {
    MoreThanTen,
    SixToNine,
    FewerThanFive,
}

impl ClickCount {
    pub const fn points(self) -> Points {
        match self {
            Self::MoreThanTen => 0,
            Self::SixToNine => 5,
            Self::FewerThanFive => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryPoint {
    OverSevenHours,
    ThreeAndHalfHoursMonthly,
    FortyThreeMinutesMonthly,
}

impl RecoveryPoint {
    pub const fn points(self) -> Points {
        match self {
            Self::OverSevenHours => 0,
            Self::ThreeAndHalfHoursMonthly => 5,
            Self::FortyThreeMinutesMonthly => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecoveryTime {
    DailyBackup,
    RealTime,
}

impl RecoveryTime {
    pub const fn points(self) -> Points {
        match self {
            Self::DailyBackup => 0,
            Self::RealTime => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Failover {
    TakesDays,
    AutomaticRedundancy,
}

impl Failover {
    pub const fn points(self) -> Points {
        match self {
            Self::TakesDays => 0,
            Self::AutomaticRedundancy => 10,
        }
    }
}

/// Methodology used to validate a diagnostic model.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValidationMethod {
    InternalCrossValidation,
    TemporalSplit,
    ExternalSingleSite,
    ExternalMultiSite,
}

impl ValidationMethod {
    pub const fn points(self) -> Points {
        match self {
            Self::InternalCrossValidation => 0,
            Self::TemporalSplit => 5,
            Self::ExternalSingleSite => 10,
            Self::ExternalMultiSite => 20,
        }
    }
}

/// Study design backing a digital therapeutic.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EvidenceDesign {
    RandomizedControlled,
    PrePost,
    Pilot,
}

impl EvidenceDesign {
    pub const fn points(self) -> Points {
        match self {
            Self::RandomizedControlled => 20,
            Self::PrePost | Self::Pilot => 10,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ContentAuthorship {
    Qualified,
    Unqualified,
}

impl ContentAuthorship {
    pub const fn points(self) -> Points {
        match self {
            Self::Qualified => 10,
            Self::Unqualified => 0,
        }
    }
}

/// Source of patient records for a non-clinical (educational/research) tool.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RecordConnectivity {
    LivePatientData,
    SeparatedDataset,
}

/// Points added to usability for a given usability-scale score.
pub fn usability_tier_points(score: f64) -> Points {
    if score > 80.0 {
        10
    } else if score >= 68.0 {
        5
    } else if score >= 51.0 {
        2
    } else {
        0
    }
}

/// Engagement points for a quality-scale composite.
pub fn quality_tier_points(composite: f64) -> Points {
    if composite >= 4.0 {
        20
    } else if composite >= 3.0 {
        10
    } else {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn usability_tiers_use_exclusive_top_boundary() {
        assert_eq!(usability_tier_points(100.0), 10);
        assert_eq!(usability_tier_points(80.0), 5);
        assert_eq!(usability_tier_points(68.0), 5);
        assert_eq!(usability_tier_points(67.5), 2);
        assert_eq!(usability_tier_points(51.0), 2);
        assert_eq!(usability_tier_points(50.0), 0);
    }

    #[test]
    fn quality_tiers_include_lower_boundaries() {
        assert_eq!(quality_tier_points(5.0), 20);
        assert_eq!(quality_tier_points(4.0), 20);
        assert_eq!(quality_tier_points(3.99), 10);
        assert_eq!(quality_tier_points(3.0), 10);
        assert_eq!(quality_tier_points(2.99), 0);
    }

    #[test]
    fn certification_floor_is_five_points() {
        assert_eq!(Certification::Absent.points(), 5);
        assert_eq!(Certification::Certified.points(), 10);
    }

    #[test]
    fn best_options_reach_category_maximums() {
        let interoperability = ExchangeFormat::Hl7Fhir.points()
            + Vocabulary::Controlled.points()
            + ApiDocumentation::Public.points()
            + Certification::Certified.points();
        assert_eq!(interoperability, INTEROPERABILITY_MAX);

        let stability = RecoveryPoint::FortyThreeMinutesMonthly.points()
            + RecoveryTime::RealTime.points()
            + Failover::AutomaticRedundancy.points();
        assert_eq!(stability, STABILITY_MAX);

        assert_eq!(
            ClickCount::FewerThanFive.points() + usability_tier_points(100.0),
            USABILITY_MAX
        );
        assert_eq!(
            ValidationMethod::ExternalMultiSite.points(),
            SCIENTIFIC_VALIDATION_MAX
        );
        assert_eq!(EvidenceDesign::RandomizedControlled.points(), EVIDENCE_MAX);
        assert_eq!(ContentAuthorship::Qualified.points(), CONTENT_MAX);
    }
}
