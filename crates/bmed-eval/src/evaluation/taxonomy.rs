use serde::{Deserialize, Serialize};
use std::fmt;

/// Raised when a niche label is not part of the fixed taxonomy.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum TaxonomyError {
    #[error("unknown niche '{0}'")]
    UnknownNiche(String),
}

/// Top-level evaluation track. Each group is scored with its own rubric.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Group {
    ManagementTools,
    DiagnosticSupport,
    DigitalTherapeutics,
}

impl Group {
    pub const fn ordered() -> [Self; 3] {
        [
            Self::ManagementTools,
            Self::DiagnosticSupport,
            Self::DigitalTherapeutics,
        ]
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::ManagementTools => "Ferramentas de Gestão e Fluxo",
            Self::DiagnosticSupport => "Suporte à Diagnóstico e Conduta",
            Self::DigitalTherapeutics => "Terapêuticas Digitais e Reabilitação",
        }
    }

    pub const fn niches(self) -> &'static [Niche] {
        match self {
            Self::ManagementTools => &[
                Niche::ElectronicHealthRecord,
                Niche::Telemedicine,
                Niche::PracticeManagement,
            ],
            Self::DiagnosticSupport => &[
                Niche::MedicalDevice,
                Niche::DiagnosticAi,
                Niche::ClinicalCalculators,
                Niche::RemoteMonitoring,
            ],
            Self::DigitalTherapeutics => &[
                Niche::DigitalTherapeutics,
                Niche::VirtualReality,
                Niche::HabitChange,
            ],
        }
    }
}

impl fmt::Display for Group {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Product category an evaluated solution belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Niche {
    ElectronicHealthRecord,
    Telemedicine,
    PracticeManagement,
    MedicalDevice,
    DiagnosticAi,
    ClinicalCalculators,
    RemoteMonitoring,
    DigitalTherapeutics,
    VirtualReality,
    HabitChange,
}

impl Niche {
    pub const ALL: [Self; 10] = [
        Self::ElectronicHealthRecord,
        Self::Telemedicine,
        Self::PracticeManagement,
        Self::MedicalDevice,
        Self::DiagnosticAi,
        Self::ClinicalCalculators,
        Self::RemoteMonitoring,
        Self::DigitalTherapeutics,
        Self::VirtualReality,
        Self::HabitChange,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            Self::ElectronicHealthRecord => "Prontuário Eletrônico",
            Self::Telemedicine => "Telemedicina",
            Self::PracticeManagement => "Gestão de Consultório",
            Self::MedicalDevice => "Dispositivo Médico",
            Self::DiagnosticAi => "IA Diagnóstica",
            Self::ClinicalCalculators => "Calculadoras Clínicas",
            Self::RemoteMonitoring => "Monitoramento Remoto",
            Self::DigitalTherapeutics => "DTx",
            Self::VirtualReality => "Realidade Virtual",
            Self::HabitChange => "Mudança de Hábito",
        }
    }

    pub const fn group(self) -> Group {
        match self {
            Self::ElectronicHealthRecord | Self::Telemedicine | Self::PracticeManagement => {
                Group::ManagementTools
            }
            Self::MedicalDevice
            | Self::DiagnosticAi
            | Self::ClinicalCalculators
            | Self::RemoteMonitoring => Group::DiagnosticSupport,
            Self::DigitalTherapeutics | Self::VirtualReality | Self::HabitChange => {
                Group::DigitalTherapeutics
            }
        }
    }

    /// Look up a niche by the label shown to evaluators.
    pub fn from_label(label: &str) -> Result<Self, TaxonomyError> {
        let wanted = label.trim();
        Self::ALL
            .into_iter()
            .find(|niche| niche.label() == wanted)
            .ok_or_else(|| TaxonomyError::UnknownNiche(label.to_string()))
    }
}

impl fmt::Display for Niche {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

pub fn resolve_group(niche: &str) -> Result<Group, TaxonomyError> {
    Niche::from_label(niche).map(Niche::group)
}

/// Every niche, sorted by label the way the selection list presents them.
pub fn all_niches() -> Vec<Niche> {
    let mut niches = Niche::ALL.to_vec();
    niches.sort_by(|a, b| a.label().cmp(b.label()));
    niches
}

/// Group with its niches, as listed to evaluators choosing a niche.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GroupCatalogEntry {
    pub group: Group,
    pub label: &'static str,
    pub niches: Vec<&'static str>,
}

pub fn catalog() -> Vec<GroupCatalogEntry> {
    Group::ordered()
        .into_iter()
        .map(|group| GroupCatalogEntry {
            group,
            label: group.label(),
            niches: group.niches().iter().map(|niche| niche.label()).collect(),
        })
        .collect()
}
