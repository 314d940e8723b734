//! Development recommendation generation.
//!
//! Maps a potential category, optionally refined by the skill-level signal,
//! to an ordered, capped, deduplicated list of development actions. The
//! catalogs themselves are configuration data.

use crate::config::AssessmentConfig;
use crate::models::{PotentialAssessment, RecommendationList, SkillLevel};

/// Generates development recommendations for an assessment.
///
/// Without a skill signal ([`SkillLevel::Unknown`]) the output is the
/// category's configured list, capped at the category-only limit. With a
/// known skill level the output blends the skill tier's list with a single
/// category-derived item (the category list's lead entry), capped at the
/// with-skill limit.
///
/// The output is never empty (every category carries a non-empty default
/// list) and never contains the same action twice.
pub fn recommend(
    assessment: &PotentialAssessment,
    skill_level: SkillLevel,
    config: &AssessmentConfig,
) -> RecommendationList {
    let catalogs = &config.recommendations;
    let category_items = catalogs.categories.for_category(assessment.category);

    match catalogs.skills.for_level(skill_level) {
        Some(skill_items) => {
            let candidates = skill_items
                .iter()
                .chain(category_items.first())
                .cloned();
            RecommendationList::from_candidates(candidates, catalogs.limits.with_skill)
        }
        None => RecommendationList::from_candidates(
            category_items.iter().cloned(),
            catalogs.limits.category_only,
        ),
    }
}
