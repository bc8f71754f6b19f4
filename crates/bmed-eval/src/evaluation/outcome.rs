use super::rubric::Points;
use super::taxonomy::Group;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scored category of one evaluation group, in display order within its group.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Interoperability,
    ManagementSecurity,
    Usability,
    Stability,
    ScientificValidation,
    Metrics,
    Regulatory,
    DiagnosticSecurity,
    Evidence,
    Engagement,
    Content,
}

impl Category {
    pub const fn label(self) -> &'static str {
        match self {
            Self::Interoperability => "1.1 Interoperabilidade",
            Self::ManagementSecurity => "1.2 Segurança",
            Self::Usability => "1.3 Usabilidade",
            Self::Stability => "1.4 Estabilidade",
            Self::ScientificValidation => "2.1 Científico",
            Self::Metrics => "2.2 Métricas",
            Self::Regulatory => "2.3 Regulatório",
            Self::DiagnosticSecurity => "2.4 Segurança",
            Self::Evidence => "3.1 Evidência",
            Self::Engagement => "3.2 Engajamento",
            Self::Content => "3.3 Conteúdo",
        }
    }

    pub const fn group(self) -> Group {
        match self {
            Self::Interoperability
            | Self::ManagementSecurity
            | Self::Usability
            | Self::Stability => Group::ManagementTools,
            Self::ScientificValidation
            | Self::Metrics
            | Self::Regulatory
            | Self::DiagnosticSecurity => Group::DiagnosticSupport,
            Self::Evidence | Self::Engagement | Self::Content => Group::DigitalTherapeutics,
        }
    }

    /// Categories scored for a group, in display order.
    pub const fn for_group(group: Group) -> &'static [Category] {
        match group {
            Group::ManagementTools => &[
                Self::Interoperability,
                Self::ManagementSecurity,
                Self::Usability,
                Self::Stability,
            ],
            Group::DiagnosticSupport => &[
                Self::ScientificValidation,
                Self::Metrics,
                Self::Regulatory,
                Self::DiagnosticSecurity,
            ],
            Group::DigitalTherapeutics => &[Self::Evidence, Self::Engagement, Self::Content],
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Hard stop raised by an answer, independent of how many points the category earned.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "kind")]
pub enum BlockReason {
    /// Predictive models are trained on data that identifies patients.
    IdentifiableDataTraining,
    /// Clinical use (SaMD) without national registration or Portuguese instructions.
    RegulatoryRegistration {
        registered: bool,
        portuguese_instructions: bool,
    },
    /// Non-clinical use without a research disclaimer or wired to live patient records.
    EthicalRisk {
        research_disclaimer: bool,
        separated_data_source: bool,
    },
}

impl BlockReason {
    pub fn summary(&self) -> String {
        match self {
            BlockReason::IdentifiableDataTraining => {
                "high ethical risk: models are trained on patient-identifying data, do not use"
                    .to_string()
            }
            BlockReason::RegulatoryRegistration {
                registered,
                portuguese_instructions,
            } => {
                let mut missing = Vec::new();
                if !registered {
                    missing.push("national regulatory registration");
                }
                if !portuguese_instructions {
                    missing.push("Portuguese instructions for use");
                }
                format!("regulatory block: missing {}", missing.join(" and "))
            }
            BlockReason::EthicalRisk {
                research_disclaimer,
                separated_data_source,
            } => {
                let mut issues = Vec::new();
                if !research_disclaimer {
                    issues.push("no research disclaimer");
                }
                if !separated_data_source {
                    issues.push("connected to live patient records");
                }
                format!("ethical risk: {}", issues.join(", "))
            }
        }
    }
}

/// Points earned by one category plus the block raised while scoring it, if any.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryOutcome {
    pub points: Points,
    pub max_points: Points,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub block: Option<BlockReason>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub notes: Vec<String>,
}

impl CategoryOutcome {
    pub fn scored(points: Points, max_points: Points) -> Self {
        Self {
            points,
            max_points,
            block: None,
            notes: Vec::new(),
        }
    }

    /// Zero points, whatever else was answered.
    pub fn blocked(max_points: Points, reason: BlockReason) -> Self {
        Self {
            points: 0,
            max_points,
            block: Some(reason),
            notes: Vec::new(),
        }
    }

    pub fn with_note(mut self, note: impl Into<String>) -> Self {
        self.notes.push(note.into());
        self
    }

    pub fn is_blocked(&self) -> bool {
        self.block.is_some()
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CategoryEntry {
    pub label: String,
    #[serde(flatten)]
    pub outcome: CategoryOutcome,
}

/// Ordered category label to outcome mapping. Insertion order is display order.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CategoryScores {
    entries: Vec<CategoryEntry>,
}

impl CategoryScores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Set a label's outcome. An existing label keeps its position.
    pub fn insert(&mut self, label: impl Into<String>, outcome: CategoryOutcome) {
        let label = label.into();
        match self.entries.iter_mut().find(|entry| entry.label == label) {
            Some(entry) => entry.outcome = outcome,
            None => self.entries.push(CategoryEntry { label, outcome }),
        }
    }

    pub fn record(&mut self, category: Category, outcome: CategoryOutcome) {
        self.insert(category.label(), outcome);
    }

    pub fn merge(&mut self, other: CategoryScores) {
        for entry in other.entries {
            self.insert(entry.label, entry.outcome);
        }
    }

    pub fn get(&self, label: &str) -> Option<&CategoryOutcome> {
        self.entries
            .iter()
            .find(|entry| entry.label == label)
            .map(|entry| &entry.outcome)
    }

    /// Points for a label; categories never scored count as zero.
    pub fn points(&self, label: &str) -> Points {
        self.get(label).map(|outcome| outcome.points).unwrap_or(0)
    }

    pub fn contains(&self, category: Category) -> bool {
        self.get(category.label()).is_some()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryOutcome)> {
        self.entries
            .iter()
            .map(|entry| (entry.label.as_str(), &entry.outcome))
    }

    pub fn entries(&self) -> &[CategoryEntry] {
        &self.entries
    }

    pub fn blocks(&self) -> impl Iterator<Item = (&str, &BlockReason)> {
        self.iter()
            .filter_map(|(label, outcome)| outcome.block.as_ref().map(|reason| (label, reason)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<L: Into<String>> FromIterator<(L, Points)> for CategoryScores {
    fn from_iter<I: IntoIterator<Item = (L, Points)>>(iter: I) -> Self {
        let mut scores = Self::new();
        for (label, points) in iter {
            scores.insert(label, CategoryOutcome::scored(points, points));
        }
        scores
    }
}
