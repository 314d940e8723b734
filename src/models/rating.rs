//! Annual performance rating vocabulary.

use serde::{Deserialize, Serialize};

/// An annual performance rating from a talent review.
///
/// Ratings carry a fixed ordinal value used by trend analysis. The explicit
/// [`PerformanceRating::Unrated`] label is distinct from an absent rating:
/// both contribute nothing to a trend series, but only "Unrated" is a
/// recognized label on the source roster.
///
/// # Example
///
/// ```
/// use talent_engine::models::PerformanceRating;
///
/// assert_eq!(PerformanceRating::from_label("Exceed Target"), Some(PerformanceRating::ExceedTarget));
/// assert_eq!(PerformanceRating::ExceedTarget.ordinal(), 4);
/// assert_eq!(PerformanceRating::from_label("#N/A"), None);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PerformanceRating {
    /// Top rating: performance well beyond expectations.
    Exceptional,
    /// Performance exceeded the agreed targets.
    ExceedTarget,
    /// Performance met the agreed targets.
    AchievedTarget,
    /// Performance fell short of targets in places.
    NeedImprovement,
    /// Performance substantially below targets.
    LowPerformance,
    /// Explicitly reviewed but left unrated for the period.
    Unrated,
}

impl PerformanceRating {
    /// Returns the ordinal value used for trend comparison.
    ///
    /// Exceptional=5 down to LowPerformance=1; the explicit Unrated label
    /// is 0. Zero is reserved for Unrated — unrecognized labels never map
    /// to an ordinal because [`PerformanceRating::from_label`] rejects them.
    pub fn ordinal(self) -> u8 {
        match self {
            PerformanceRating::Exceptional => 5,
            PerformanceRating::ExceedTarget => 4,
            PerformanceRating::AchievedTarget => 3,
            PerformanceRating::NeedImprovement => 2,
            PerformanceRating::LowPerformance => 1,
            PerformanceRating::Unrated => 0,
        }
    }

    /// Parses a roster display label into a rating.
    ///
    /// Matching is case-insensitive and tolerant of surrounding whitespace.
    /// Unrecognized labels (including the roster's "#N/A" placeholder)
    /// return `None` — absence of data, not ordinal zero.
    pub fn from_label(label: &str) -> Option<Self> {
        match label.trim().to_lowercase().as_str() {
            "exceptional" => Some(PerformanceRating::Exceptional),
            "exceed target" => Some(PerformanceRating::ExceedTarget),
            "achieved target" => Some(PerformanceRating::AchievedTarget),
            "need improvement" => Some(PerformanceRating::NeedImprovement),
            "low performance" => Some(PerformanceRating::LowPerformance),
            "unrated" => Some(PerformanceRating::Unrated),
            _ => None,
        }
    }

    /// Returns true when the rating contributes a data point to a trend
    /// series. The explicit Unrated label is treated as absence of data.
    pub fn is_rated(self) -> bool {
        self != PerformanceRating::Unrated
    }
}

impl std::fmt::Display for PerformanceRating {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            PerformanceRating::Exceptional => "Exceptional",
            PerformanceRating::ExceedTarget => "Exceed Target",
            PerformanceRating::AchievedTarget => "Achieved Target",
            PerformanceRating::NeedImprovement => "Need Improvement",
            PerformanceRating::LowPerformance => "Low Performance",
            PerformanceRating::Unrated => "Unrated",
        };
        write!(f, "{}", label)
    }
}
