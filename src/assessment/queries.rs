//! Query surface for presentation callers.
//!
//! Three pure, independently callable query functions over an optional
//! selected record. With no record selected each returns a well-defined
//! neutral result so presentation can render an empty state; nothing here
//! ever errors on bad review data.

use crate::config::AssessmentConfig;
use crate::models::{
    EmployeeRecord, GridTier, PotentialAssessment, PotentialCategory, RecommendationList,
    SupportingSignals, TrendDirection, TrendResult,
};

use super::{analyze_trend, classify_potential, recommend};

/// Returns the performance trend for the selected record.
///
/// With no record selected, returns the neutral insufficient-data trend.
pub fn get_trend(record: Option<&EmployeeRecord>) -> TrendResult {
    match record {
        Some(record) => analyze_trend(record),
        None => TrendResult {
            direction: TrendDirection::InsufficientData,
            consistent: true,
            rating_series: Vec::new(),
            latest_rating: 0,
        },
    }
}

/// Returns the potential assessment for the selected record.
///
/// With no record selected, returns a Needs Assessment result with its
/// configured narrative and neutral signals.
pub fn get_potential(
    record: Option<&EmployeeRecord>,
    config: &AssessmentConfig,
) -> PotentialAssessment {
    match record {
        Some(record) => {
            let trend = analyze_trend(record);
            classify_potential(record, &trend, config)
        }
        None => PotentialAssessment {
            category: PotentialCategory::NeedsAssessment,
            narrative: config
                .narratives
                .for_category(PotentialCategory::NeedsAssessment)
                .text
                .clone(),
            signals: SupportingSignals {
                trend: TrendDirection::InsufficientData,
                grid_tier: GridTier::Unknown,
                is_successor: false,
            },
        },
    }
}

/// Returns development recommendations for the selected record.
///
/// With no record selected, returns the Needs Assessment default list.
pub fn get_recommendations(
    record: Option<&EmployeeRecord>,
    config: &AssessmentConfig,
) -> RecommendationList {
    let assessment = get_potential(record, config);
    let skill_level = record.map(|r| r.skill_level).unwrap_or_default();
    recommend(&assessment, skill_level, config)
}
