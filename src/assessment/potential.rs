//! Potential classification.
//!
//! Combines the 9-box grid tier with the performance trend (and the
//! succession flag) to assign one of six business categories plus a
//! supporting narrative.

use crate::config::AssessmentConfig;
use crate::models::{
    EmployeeRecord, GridTier, PotentialAssessment, PotentialCategory, SupportingSignals,
    TrendDirection, TrendResult,
};

/// Classifies an employee's potential from grid placement and trend.
///
/// The rules form a priority cascade evaluated top to bottom, first match
/// wins. Grid placement is the primary signal: high tiers with strong
/// recent performance classify as high-value before the raw rating
/// thresholds near the bottom can downgrade them.
///
/// 1. High tier, latest rating ≥ 4 → High Potential
/// 2. High tier, latest rating = 3 → Emerging Talent
/// 3. Medium tier, improving trend → Growing Talent
/// 4. Medium tier, latest rating ≥ 3 → Solid Performer
/// 5. Low tier, or latest rating ≤ 2 → Needs Development
/// 6. Unknown tier → Needs Assessment
/// 7. Fallback → Needs Assessment
///
/// The narrative comes from the configured template for the category; the
/// High Potential template carries a successor variant used when the
/// record's succession flag is set.
pub fn classify_potential(
    record: &EmployeeRecord,
    trend: &TrendResult,
    config: &AssessmentConfig,
) -> PotentialAssessment {
    let grid_tier = record.nine_box.tier();
    let latest = trend.latest_rating;

    let category = if grid_tier == GridTier::High && latest >= 4 {
        PotentialCategory::HighPotential
    } else if grid_tier == GridTier::High && latest == 3 {
        PotentialCategory::EmergingTalent
    } else if grid_tier == GridTier::Medium && trend.direction == TrendDirection::Improving {
        PotentialCategory::GrowingTalent
    } else if grid_tier == GridTier::Medium && latest >= 3 {
        PotentialCategory::SolidPerformer
    } else if grid_tier == GridTier::Low || latest <= 2 {
        PotentialCategory::NeedsDevelopment
    } else if grid_tier == GridTier::Unknown {
        PotentialCategory::NeedsAssessment
    } else {
        // Unreached with the current rules (rule 5's rating arm is a
        // catch-all for latest <= 2); kept so future rule edits stay total
        PotentialCategory::NeedsAssessment
    };

    let entry = config.narratives.for_category(category);
    let narrative = match (&entry.successor_text, record.is_successor) {
        (Some(successor_text), true) => successor_text.clone(),
        _ => entry.text.clone(),
    };

    PotentialAssessment {
        category,
        narrative,
        signals: SupportingSignals {
            trend: trend.direction,
            grid_tier,
            is_successor: record.is_successor,
        },
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assessment::analyze_trend;
    use crate::models::{NineBoxCategory, PerformanceRating};

    fn record(
        nine_box: NineBoxCategory,
        ratings: [Option<PerformanceRating>; 3],
        is_successor: bool,
    ) -> EmployeeRecord {
        EmployeeRecord {
            id: "emp_001".to_string(),
            name: "Test Person".to_string(),
            position: "Analyst".to_string(),
            department: None,
            function: None,
            team: None,
            grade: None,
            tenure_years: None,
            entry_date: None,
            nationality: Default::default(),
            nine_box,
            skill_level: Default::default(),
            is_successor,
            succession_target: None,
            ratings,
        }
    }

    fn classify(record: &EmployeeRecord) -> PotentialAssessment {
        let config = AssessmentConfig::default();
        let trend = analyze_trend(record);
        classify_potential(record, &trend, &config)
    }

    #[test]
    fn test_high_tier_strong_rating_is_high_potential() {
        let record = record(
            NineBoxCategory::HiPotential,
            [
                Some(PerformanceRating::AchievedTarget),
                Some(PerformanceRating::ExceedTarget),
                Some(PerformanceRating::Exceptional),
            ],
            false,
        );
        let assessment = classify(&record);
        assert_eq!(assessment.category, PotentialCategory::HighPotential);
        assert!(!assessment.narrative.contains("identified as a successor"));
    }

    #[test]
    fn test_high_potential_successor_narrative() {
        let record = record(
            NineBoxCategory::HiLead,
            [None, None, Some(PerformanceRating::Exceptional)],
            true,
        );
        let assessment = classify(&record);
        assert_eq!(assessment.category, PotentialCategory::HighPotential);
        assert!(assessment.narrative.contains("identified as a successor"));
        assert!(assessment.signals.is_successor);
    }

    #[test]
    fn test_high_tier_on_target_is_emerging_talent() {
        let record = record(
            NineBoxCategory::HighGrow,
            [None, None, Some(PerformanceRating::AchievedTarget)],
            false,
        );
        assert_eq!(classify(&record).category, PotentialCategory::EmergingTalent);
    }

    #[test]
    fn test_medium_tier_improving_is_growing_talent_regardless_of_level() {
        // Ratings [3, 3, 4]: improving, latest only 4 — rule 3 fires before
        // rule 4's absolute threshold is considered
        let record = record(
            NineBoxCategory::Promising,
            [
                Some(PerformanceRating::AchievedTarget),
                Some(PerformanceRating::AchievedTarget),
                Some(PerformanceRating::ExceedTarget),
            ],
            false,
        );
        let assessment = classify(&record);
        assert_eq!(assessment.category, PotentialCategory::GrowingTalent);
        assert_eq!(assessment.signals.grid_tier, GridTier::Medium);
        assert_eq!(assessment.signals.trend, TrendDirection::Improving);
    }

    #[test]
    fn test_medium_tier_stable_on_target_is_solid_performer() {
        let record = record(
            NineBoxCategory::SafeHand,
            [
                Some(PerformanceRating::ExceedTarget),
                Some(PerformanceRating::AchievedTarget),
                Some(PerformanceRating::AchievedTarget),
            ],
            false,
        );
        assert_eq!(classify(&record).category, PotentialCategory::SolidPerformer);
    }

    #[test]
    fn test_low_tier_is_needs_development() {
        let record = record(
            NineBoxCategory::Shortfall,
            [None, None, Some(PerformanceRating::Exceptional)],
            false,
        );
        assert_eq!(classify(&record).category, PotentialCategory::NeedsDevelopment);
    }

    #[test]
    fn test_weak_rating_downgrades_medium_tier() {
        let record = record(
            NineBoxCategory::Promising,
            [
                Some(PerformanceRating::AchievedTarget),
                Some(PerformanceRating::NeedImprovement),
                Some(PerformanceRating::NeedImprovement),
            ],
            false,
        );
        assert_eq!(classify(&record).category, PotentialCategory::NeedsDevelopment);
    }

    #[test]
    fn test_unknown_grid_short_circuits_before_rating_thresholds() {
        // Latest rating 5 would satisfy rule 1's threshold, but the tier is
        // Unknown, so rules 1-4 cannot fire; rule 5's rating arm does not
        // apply (latest > 2) and rule 6 assigns Needs Assessment
        let record = record(
            NineBoxCategory::Unknown,
            [
                Some(PerformanceRating::ExceedTarget),
                Some(PerformanceRating::Exceptional),
                Some(PerformanceRating::Exceptional),
            ],
            false,
        );
        let assessment = classify(&record);
        assert_eq!(assessment.category, PotentialCategory::NeedsAssessment);
        assert_eq!(assessment.signals.grid_tier, GridTier::Unknown);
    }

    #[test]
    fn test_unknown_grid_weak_rating_is_needs_development() {
        // Rule 5's rating arm fires ahead of rule 6 even with Unknown tier
        let record = record(
            NineBoxCategory::Unknown,
            [
                None,
                Some(PerformanceRating::NeedImprovement),
                Some(PerformanceRating::LowPerformance),
            ],
            false,
        );
        assert_eq!(classify(&record).category, PotentialCategory::NeedsDevelopment);
    }

    #[test]
    fn test_no_rating_data_with_high_tier_falls_to_needs_development() {
        // Empty series has latest 0, caught by rule 5's threshold arm
        // before the high-tier rules can apply (they need latest >= 3)
        let record = record(NineBoxCategory::HiPotential, [None, None, None], false);
        assert_eq!(classify(&record).category, PotentialCategory::NeedsDevelopment);
    }

    #[test]
    fn test_successor_flag_does_not_change_other_categories() {
        let record = record(
            NineBoxCategory::SafeHand,
            [
                None,
                Some(PerformanceRating::AchievedTarget),
                Some(PerformanceRating::AchievedTarget),
            ],
            true,
        );
        let assessment = classify(&record);
        assert_eq!(assessment.category, PotentialCategory::SolidPerformer);
        assert!(!assessment.narrative.contains("successor"));
        assert!(assessment.signals.is_successor);
    }

    #[test]
    fn test_narrative_comes_from_config() {
        let record = record(
            NineBoxCategory::Unknown,
            [None, None, Some(PerformanceRating::AchievedTarget)],
            false,
        );
        let assessment = classify(&record);
        assert_eq!(
            assessment.narrative,
            AssessmentConfig::default()
                .narratives
                .for_category(PotentialCategory::NeedsAssessment)
                .text
        );
    }
}
