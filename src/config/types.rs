//! Configuration types for narratives and recommendation catalogs.

use serde::{Deserialize, Serialize};

use crate::models::{PotentialCategory, SkillLevel};

/// Narrative text for one potential category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryNarrative {
    /// The narrative shown for the category.
    pub text: String,
    /// Alternative narrative used when the succession flag is set.
    /// Only categories that acknowledge succession ship one.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub successor_text: Option<String>,
}

impl CategoryNarrative {
    fn plain(text: &str) -> Self {
        Self {
            text: text.to_string(),
            successor_text: None,
        }
    }
}

/// Narrative templates keyed by potential category.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NarrativeConfig {
    /// Narrative for the High Potential category.
    pub high_potential: CategoryNarrative,
    /// Narrative for the Emerging Talent category.
    pub emerging_talent: CategoryNarrative,
    /// Narrative for the Growing Talent category.
    pub growing_talent: CategoryNarrative,
    /// Narrative for the Solid Performer category.
    pub solid_performer: CategoryNarrative,
    /// Narrative for the Needs Development category.
    pub needs_development: CategoryNarrative,
    /// Narrative for the Needs Assessment category.
    pub needs_assessment: CategoryNarrative,
}

impl NarrativeConfig {
    /// Returns the narrative entry for a category.
    pub fn for_category(&self, category: PotentialCategory) -> &CategoryNarrative {
        match category {
            PotentialCategory::HighPotential => &self.high_potential,
            PotentialCategory::EmergingTalent => &self.emerging_talent,
            PotentialCategory::GrowingTalent => &self.growing_talent,
            PotentialCategory::SolidPerformer => &self.solid_performer,
            PotentialCategory::NeedsDevelopment => &self.needs_development,
            PotentialCategory::NeedsAssessment => &self.needs_assessment,
        }
    }
}

impl Default for NarrativeConfig {
    fn default() -> Self {
        Self {
            high_potential: CategoryNarrative {
                text: "Exceptional performer consistently exceeding targets. Recommended for \
                       leadership development programs and increased responsibilities."
                    .to_string(),
                successor_text: Some(
                    "Exceptional performer consistently exceeding targets and identified as a \
                     successor. Recommended for leadership development programs and increased \
                     responsibilities."
                        .to_string(),
                ),
            },
            emerging_talent: CategoryNarrative::plain(
                "Demonstrates high potential with solid performance. Focus on challenging \
                 assignments to accelerate growth.",
            ),
            growing_talent: CategoryNarrative::plain(
                "Shows consistent improvement and solid potential. Provide targeted development \
                 opportunities.",
            ),
            solid_performer: CategoryNarrative::plain(
                "Reliable performer with moderate potential. Focus on maintaining strengths \
                 while developing in key areas.",
            ),
            needs_development: CategoryNarrative::plain(
                "Requires focused intervention and performance improvement plan. Consider skills \
                 assessment and targeted coaching.",
            ),
            needs_assessment: CategoryNarrative::plain(
                "Insufficient data for accurate assessment. Recommend completing 9-box \
                 evaluation.",
            ),
        }
    }
}

/// Caps applied to recommendation lists.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationLimits {
    /// Cap when only the category list is used.
    pub category_only: usize,
    /// Cap when skill-tier refinement is blended in.
    pub with_skill: usize,
}

impl Default for RecommendationLimits {
    fn default() -> Self {
        Self {
            category_only: 3,
            with_skill: 4,
        }
    }
}

/// Per-category development recommendation lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryRecommendations {
    /// Actions for High Potential employees.
    pub high_potential: Vec<String>,
    /// Actions for Emerging Talent employees.
    pub emerging_talent: Vec<String>,
    /// Actions for Growing Talent employees.
    pub growing_talent: Vec<String>,
    /// Actions for Solid Performer employees.
    pub solid_performer: Vec<String>,
    /// Actions for Needs Development employees.
    pub needs_development: Vec<String>,
    /// Default actions steering toward completing the evaluation.
    pub needs_assessment: Vec<String>,
}

impl CategoryRecommendations {
    /// Returns the recommendation list for a category.
    pub fn for_category(&self, category: PotentialCategory) -> &[String] {
        match category {
            PotentialCategory::HighPotential => &self.high_potential,
            PotentialCategory::EmergingTalent => &self.emerging_talent,
            PotentialCategory::GrowingTalent => &self.growing_talent,
            PotentialCategory::SolidPerformer => &self.solid_performer,
            PotentialCategory::NeedsDevelopment => &self.needs_development,
            PotentialCategory::NeedsAssessment => &self.needs_assessment,
        }
    }
}

fn string_list(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

impl Default for CategoryRecommendations {
    fn default() -> Self {
        Self {
            high_potential: string_list(&[
                "Leadership development program",
                "Executive mentoring",
                "Strategic project assignments",
            ]),
            emerging_talent: string_list(&[
                "Advanced skill development",
                "Increased project responsibility",
                "Mentoring program participation",
            ]),
            growing_talent: string_list(&[
                "Targeted skill development",
                "Stretch assignments",
                "Regular feedback sessions",
            ]),
            solid_performer: string_list(&[
                "Maintain current performance",
                "Knowledge sharing opportunities",
                "Process improvement projects",
            ]),
            needs_development: string_list(&[
                "Performance improvement plan",
                "Regular coaching sessions",
                "Core skill training",
            ]),
            needs_assessment: string_list(&[
                "Complete 9-box evaluation",
                "Performance review",
                "Career aspiration discussion",
            ]),
        }
    }
}

/// Per-skill-tier development recommendation lists.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SkillRecommendations {
    /// Actions for Expert-level employees.
    pub expert: Vec<String>,
    /// Actions for Advanced-level employees.
    pub advanced: Vec<String>,
    /// Actions for Intermediate-level employees.
    pub intermediate: Vec<String>,
    /// Actions for Basic-level employees.
    pub basic: Vec<String>,
}

impl SkillRecommendations {
    /// Returns the recommendation list for a skill level, or `None` for
    /// [`SkillLevel::Unknown`] (no refinement available).
    pub fn for_level(&self, level: SkillLevel) -> Option<&[String]> {
        match level {
            SkillLevel::Expert => Some(&self.expert),
            SkillLevel::Advanced => Some(&self.advanced),
            SkillLevel::Intermediate => Some(&self.intermediate),
            SkillLevel::Basic => Some(&self.basic),
            SkillLevel::Unknown => None,
        }
    }
}

impl Default for SkillRecommendations {
    fn default() -> Self {
        Self {
            expert: string_list(&[
                "Mentor and coach junior colleagues",
                "Lead a community of practice",
                "Represent the function in cross-organization forums",
            ]),
            advanced: string_list(&[
                "Pursue specialist certification",
                "Lead a small project team",
                "Shadow senior leadership",
            ]),
            intermediate: string_list(&[
                "Structured technical training plan",
                "Pair with a senior mentor",
                "Broaden exposure through rotations",
            ]),
            basic: string_list(&[
                "Foundational skills training",
                "Close supervision with regular feedback",
                "On-the-job coaching",
            ]),
        }
    }
}

/// Recommendation catalogs plus list caps.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecommendationConfig {
    /// List caps.
    #[serde(default)]
    pub limits: RecommendationLimits,
    /// Per-category lists.
    #[serde(default)]
    pub categories: CategoryRecommendations,
    /// Per-skill-tier lists.
    #[serde(default)]
    pub skills: SkillRecommendations,
}

/// The full assessment configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AssessmentConfig {
    /// Narrative templates.
    #[serde(default)]
    pub narratives: NarrativeConfig,
    /// Recommendation catalogs and caps.
    #[serde(default)]
    pub recommendations: RecommendationConfig,
}
