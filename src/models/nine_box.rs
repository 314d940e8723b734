//! 9-box talent grid vocabulary.
//!
//! The grid placement combines performance and potential into a categorical
//! matrix position. The assessment engine consumes it only as a coarse tier
//! (High/Medium/Low/Unknown).

use serde::{Deserialize, Serialize};

/// A 9-box talent-matrix placement.
///
/// # Example
///
/// ```
/// use talent_engine::models::{GridTier, NineBoxCategory};
///
/// assert_eq!(NineBoxCategory::from_label("Hi-Potential"), NineBoxCategory::HiPotential);
/// assert_eq!(NineBoxCategory::HiPotential.tier(), GridTier::High);
/// assert_eq!(NineBoxCategory::from_label("#N/A"), NineBoxCategory::Unknown);
/// ```
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NineBoxCategory {
    /// High performance, high potential.
    HiPotential,
    /// High potential with leadership orientation.
    HiLead,
    /// High potential on a professional/specialist track.
    HiProfessional,
    /// High growth trajectory.
    HighGrow,
    /// Medium potential, on an upward path.
    Promising,
    /// Medium potential, dependable delivery.
    SafeHand,
    /// Low placement: potential unclear, performance mixed.
    Dilemma,
    /// Low placement: underperforming against the role.
    Shortfall,
    /// Low placement: likely role mismatch.
    CastingError,
    /// No placement recorded, or explicitly unrated.
    #[default]
    Unknown,
}

/// The coarse tier of a 9-box placement, as consumed by classification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GridTier {
    /// One of the four high-potential boxes.
    High,
    /// Promising or Safe Hand.
    Medium,
    /// Dilemma, Shortfall or Casting Error.
    Low,
    /// No usable placement.
    Unknown,
}

impl NineBoxCategory {
    /// Returns the coarse tier for this placement.
    pub fn tier(self) -> GridTier {
        match self {
            NineBoxCategory::HiPotential
            | NineBoxCategory::HiLead
            | NineBoxCategory::HiProfessional
            | NineBoxCategory::HighGrow => GridTier::High,
            NineBoxCategory::Promising | NineBoxCategory::SafeHand => GridTier::Medium,
            NineBoxCategory::Dilemma
            | NineBoxCategory::Shortfall
            | NineBoxCategory::CastingError => GridTier::Low,
            NineBoxCategory::Unknown => GridTier::Unknown,
        }
    }

    /// Parses a roster display label into a placement.
    ///
    /// Matching is case-insensitive and tolerant of surrounding whitespace.
    /// "Unrated", "#N/A" and anything unrecognized map to
    /// [`NineBoxCategory::Unknown`] — missing grid data is never an error.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "hi-potential" | "hi potential" => NineBoxCategory::HiPotential,
            "hi-lead" | "hi lead" => NineBoxCategory::HiLead,
            "hi-professional" | "hi professional" => NineBoxCategory::HiProfessional,
            "high-grow" | "high grow" => NineBoxCategory::HighGrow,
            "promising" => NineBoxCategory::Promising,
            "safe hand" => NineBoxCategory::SafeHand,
            "dilemma" => NineBoxCategory::Dilemma,
            "shortfall" => NineBoxCategory::Shortfall,
            "casting error" => NineBoxCategory::CastingError,
            _ => NineBoxCategory::Unknown,
        }
    }
}

impl std::fmt::Display for NineBoxCategory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            NineBoxCategory::HiPotential => "Hi-Potential",
            NineBoxCategory::HiLead => "Hi-Lead",
            NineBoxCategory::HiProfessional => "Hi-Professional",
            NineBoxCategory::HighGrow => "High-Grow",
            NineBoxCategory::Promising => "Promising",
            NineBoxCategory::SafeHand => "Safe Hand",
            NineBoxCategory::Dilemma => "Dilemma",
            NineBoxCategory::Shortfall => "Shortfall",
            NineBoxCategory::CastingError => "Casting Error",
            NineBoxCategory::Unknown => "Not yet rated",
        };
        write!(f, "{}", label)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_high_tier_boxes() {
        for category in [
            NineBoxCategory::HiPotential,
            NineBoxCategory::HiLead,
            NineBoxCategory::HiProfessional,
            NineBoxCategory::HighGrow,
        ] {
            assert_eq!(category.tier(), GridTier::High, "{:?}", category);
        }
    }

    #[test]
    fn test_medium_tier_boxes() {
        assert_eq!(NineBoxCategory::Promising.tier(), GridTier::Medium);
        assert_eq!(NineBoxCategory::SafeHand.tier(), GridTier::Medium);
    }

    #[test]
    fn test_low_tier_boxes() {
        for category in [
            NineBoxCategory::Dilemma,
            NineBoxCategory::Shortfall,
            NineBoxCategory::CastingError,
        ] {
            assert_eq!(category.tier(), GridTier::Low, "{:?}", category);
        }
    }

    #[test]
    fn test_unknown_tier() {
        assert_eq!(NineBoxCategory::Unknown.tier(), GridTier::Unknown);
    }

    #[test]
    fn test_from_label_roster_spellings() {
        assert_eq!(
            NineBoxCategory::from_label("Hi-Potential"),
            NineBoxCategory::HiPotential
        );
        assert_eq!(NineBoxCategory::from_label("Safe Hand"), NineBoxCategory::SafeHand);
        assert_eq!(
            NineBoxCategory::from_label("Casting Error"),
            NineBoxCategory::CastingError
        );
        assert_eq!(NineBoxCategory::from_label(" high-grow "), NineBoxCategory::HighGrow);
    }

    #[test]
    fn test_from_label_placeholders_map_to_unknown() {
        assert_eq!(NineBoxCategory::from_label("Unrated"), NineBoxCategory::Unknown);
        assert_eq!(NineBoxCategory::from_label("#N/A"), NineBoxCategory::Unknown);
        assert_eq!(NineBoxCategory::from_label(""), NineBoxCategory::Unknown);
        assert_eq!(NineBoxCategory::from_label("Top Box"), NineBoxCategory::Unknown);
    }

    #[test]
    fn test_default_is_unknown() {
        assert_eq!(NineBoxCategory::default(), NineBoxCategory::Unknown);
    }

    #[test]
    fn test_display_for_unknown_is_neutral() {
        assert_eq!(NineBoxCategory::Unknown.to_string(), "Not yet rated");
    }
}
