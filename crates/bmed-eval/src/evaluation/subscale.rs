//! Standardized psychometric sub-scales.
//!
//! The usability scale is the ten item bipolar instrument scored 0-100 (SUS). The quality scale
//! is the twenty item, four dimension app rating instrument scored 1-5 (MARS).

use serde::{Deserialize, Serialize};
use std::fmt;

pub const USABILITY_ITEMS: usize = 10;
/// A single questionnaire answer. Decoded wider than the scale so bad values reach validation.
pub type Rating = i64;

pub const RATING_MIN: Rating = 1;
pub const RATING_MAX: Rating = 5;

/// Malformed sub-scale input. These are integration errors and are never approximated.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum SubscaleError {
    #[error("usability scale expects {expected} responses, received {found}")]
    InvalidResponseCount { expected: usize, found: usize },
    #[error("item {item} rated {value}, outside the 1-5 scale")]
    OutOfRange { item: usize, value: Rating },
    #[error("{dimension} does not match its item layout: {detail}")]
    DimensionCountMismatch {
        dimension: QualityDimension,
        detail: DimensionMismatch,
    },
}

/// Why a quality dimension failed validation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DimensionMismatch {
    #[error("expects {expected} ratings, received {found}")]
    Arity { expected: usize, found: usize },
    #[error("item {item} rated {value}, outside the 1-5 scale")]
    Rating { item: usize, value: Rating },
}

fn in_scale(value: Rating) -> bool {
    (RATING_MIN..=RATING_MAX).contains(&value)
}

/// Usability score in `[0, 100]`. Odd items count `response - 1`, even items `5 - response`.
pub fn compute_usability(responses: &[Rating]) -> Result<f64, SubscaleError> {
    if responses.len() != USABILITY_ITEMS {
        return Err(SubscaleError::InvalidResponseCount {
            expected: USABILITY_ITEMS,
            found: responses.len(),
        });
    }

    let mut sum: Rating = 0;
    for (index, &value) in responses.iter().enumerate() {
        let item = index + 1;
        if !in_scale(value) {
            return Err(SubscaleError::OutOfRange { item, value });
        }
        sum += if item % 2 == 1 {
            value - RATING_MIN
        } else {
            RATING_MAX - value
        };
    }

    Ok(sum as f64 * 2.5)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum QualityDimension {
    Engagement,
    Functionality,
    Aesthetics,
    Information,
}

impl QualityDimension {
    pub const fn ordered() -> [Self; 4] {
        [
            Self::Engagement,
            Self::Functionality,
            Self::Aesthetics,
            Self::Information,
        ]
    }

    /// Number of items the dimension is rated on.
    pub const fn arity(self) -> usize {
        match self {
            Self::Engagement => 5,
            Self::Functionality => 4,
            Self::Aesthetics => 3,
            Self::Information => 8,
        }
    }

    pub const fn label(self) -> &'static str {
        match self {
            Self::Engagement => "Engajamento",
            Self::Functionality => "Funcionalidade",
            Self::Aesthetics => "Estética",
            Self::Information => "Informação",
        }
    }
}

impl fmt::Display for QualityDimension {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Raw 1-5 ratings for each quality dimension, in questionnaire order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QualityRatings {
    pub engagement: Vec<Rating>,
    pub functionality: Vec<Rating>,
    pub aesthetics: Vec<Rating>,
    pub information: Vec<Rating>,
}

impl QualityRatings {
    /// Every item rated with the same value.
    pub fn uniform(value: Rating) -> Self {
        let fill = |dimension: QualityDimension| vec![value; dimension.arity()];
        Self {
            engagement: fill(QualityDimension::Engagement),
            functionality: fill(QualityDimension::Functionality),
            aesthetics: fill(QualityDimension::Aesthetics),
            information: fill(QualityDimension::Information),
        }
    }

    pub fn dimension(&self, dimension: QualityDimension) -> &[Rating] {
        match dimension {
            QualityDimension::Engagement => &self.engagement,
            QualityDimension::Functionality => &self.functionality,
            QualityDimension::Aesthetics => &self.aesthetics,
            QualityDimension::Information => &self.information,
        }
    }
}

/// Per-dimension means alongside the composite they produce.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct QualityScores {
    pub engagement: f64,
    pub functionality: f64,
    pub aesthetics: f64,
    pub information: f64,
    pub composite: f64,
}

pub fn quality_scores(ratings: &QualityRatings) -> Result<QualityScores, SubscaleError> {
    let mut means = [0.0f64; 4];
    let mut item_offset = 0;

    for (slot, dimension) in QualityDimension::ordered().into_iter().enumerate() {
        let items = ratings.dimension(dimension);
        if items.len() != dimension.arity() {
            return Err(SubscaleError::DimensionCountMismatch {
                dimension,
                detail: DimensionMismatch::Arity {
                    expected: dimension.arity(),
                    found: items.len(),
                },
            });
        }

        let mut sum: Rating = 0;
        for (index, &value) in items.iter().enumerate() {
            if !in_scale(value) {
                return Err(SubscaleError::DimensionCountMismatch {
                    dimension,
                    detail: DimensionMismatch::Rating {
                        item: item_offset + index + 1,
                        value,
                    },
                });
            }
            sum += value;
        }
        means[slot] = sum as f64 / items.len() as f64;
        item_offset += dimension.arity();
    }

    let [engagement, functionality, aesthetics, information] = means;
    Ok(QualityScores {
        engagement,
        functionality,
        aesthetics,
        information,
        composite: means.iter().sum::<f64>() / means.len() as f64,
    })
}

/// Unweighted mean of the four dimension means, in `[1, 5]`.
pub fn compute_quality(ratings: &QualityRatings) -> Result<f64, SubscaleError> {
    quality_scores(ratings).map(|scores| scores.composite)
}
