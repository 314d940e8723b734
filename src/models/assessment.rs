//! Derived assessment types.
//!
//! These types are produced on demand by the assessment pipeline and have no
//! lifecycle of their own: each is a pure function of an [`EmployeeRecord`]
//! snapshot and is recomputed, never mutated.
//!
//! [`EmployeeRecord`]: super::EmployeeRecord

use serde::{Deserialize, Serialize};

use super::GridTier;

/// Direction of change between the two most recent rating periods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TrendDirection {
    /// Most recent rating is strictly above the one before it.
    Improving,
    /// Most recent rating is strictly below the one before it.
    Declining,
    /// Most recent two ratings are equal.
    Stable,
    /// Fewer than two usable ratings; no direction can be derived.
    InsufficientData,
}

impl std::fmt::Display for TrendDirection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            TrendDirection::Improving => "Improving",
            TrendDirection::Declining => "Declining",
            TrendDirection::Stable => "Stable",
            TrendDirection::InsufficientData => "Insufficient Data",
        };
        write!(f, "{}", label)
    }
}

/// The result of performance-trend analysis over up to three annual ratings.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TrendResult {
    /// The derived direction.
    pub direction: TrendDirection,
    /// Whether the full series supports the direction without contradiction.
    pub consistent: bool,
    /// Ordinal values of the ratings actually present, chronological.
    pub rating_series: Vec<u8>,
    /// The most recent ordinal rating, or 0 when the series is empty.
    pub latest_rating: u8,
}

/// Business category assigned by potential classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PotentialCategory {
    /// High grid tier with strong recent performance.
    HighPotential,
    /// High grid tier with solid (on-target) recent performance.
    EmergingTalent,
    /// Medium grid tier on an improving trend.
    GrowingTalent,
    /// Medium grid tier performing at or above target.
    SolidPerformer,
    /// Low grid tier, or weak recent performance.
    NeedsDevelopment,
    /// No usable grid placement, or no rule matched.
    NeedsAssessment,
}

impl std::fmt::Display for PotentialCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PotentialCategory::HighPotential => "High Potential",
            PotentialCategory::EmergingTalent => "Emerging Talent",
            PotentialCategory::GrowingTalent => "Growing Talent",
            PotentialCategory::SolidPerformer => "Solid Performer",
            PotentialCategory::NeedsDevelopment => "Needs Development",
            PotentialCategory::NeedsAssessment => "Needs Assessment",
        };
        write!(f, "{}", label)
    }
}

/// The signals a classification was based on, carried for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SupportingSignals {
    /// The trend direction at classification time.
    pub trend: TrendDirection,
    /// The coarse grid tier at classification time.
    pub grid_tier: GridTier,
    /// Whether the succession flag was set.
    pub is_successor: bool,
}

/// A potential assessment: category plus supporting narrative and signals.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PotentialAssessment {
    /// The assigned business category.
    pub category: PotentialCategory,
    /// Narrative text for display, from the configured template.
    pub narrative: String,
    /// The inputs the classification was based on.
    pub signals: SupportingSignals,
}

/// An ordered, deduplicated, capped list of development actions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationList {
    /// The recommendation strings, in priority order.
    pub items: Vec<String>,
}

impl RecommendationList {
    /// Builds a list from candidate items: duplicates are dropped keeping
    /// the first occurrence, and the result is truncated to `cap`.
    pub fn from_candidates<I>(candidates: I, cap: usize) -> Self
    where
        I: IntoIterator<Item = String>,
    {
        let mut items: Vec<String> = Vec::new();
        for candidate in candidates {
            if items.len() == cap {
                break;
            }
            if !items.contains(&candidate) {
                items.push(candidate);
            }
        }
        Self { items }
    }

    /// Number of recommendations.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// True when the list carries no recommendations.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }
}
