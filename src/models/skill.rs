//! Skill-level vocabulary.

use serde::{Deserialize, Serialize};

/// An independent proficiency signal, distinct from the performance rating,
/// used to refine development recommendations.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SkillLevel {
    /// Recognized authority in the discipline.
    Expert,
    /// Operates independently on complex work.
    Advanced,
    /// Competent on routine work, growing depth.
    Intermediate,
    /// Early in the discipline; needs structured support.
    Basic,
    /// No skill assessment recorded.
    #[default]
    Unknown,
}

impl SkillLevel {
    /// Parses a roster display label into a skill level.
    ///
    /// Case-insensitive; "beginner" is accepted as an alias for Basic.
    /// Unrecognized labels map to [`SkillLevel::Unknown`].
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "expert" => SkillLevel::Expert,
            "advanced" => SkillLevel::Advanced,
            "intermediate" => SkillLevel::Intermediate,
            "basic" | "beginner" => SkillLevel::Basic,
            _ => SkillLevel::Unknown,
        }
    }

    /// Returns true when a skill assessment is recorded, i.e. the
    /// recommendation engine may apply skill-tier refinement.
    pub fn is_known(self) -> bool {
        self != SkillLevel::Unknown
    }
}

impl std::fmt::Display for SkillLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            SkillLevel::Expert => "Expert",
            SkillLevel::Advanced => "Advanced",
            SkillLevel::Intermediate => "Intermediate",
            SkillLevel::Basic => "Basic",
            SkillLevel::Unknown => "Unknown",
        };
        write!(f, "{}", label)
    }
}
