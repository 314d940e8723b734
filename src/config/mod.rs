//! Configuration for the Talent Assessment Engine.
//!
//! Narrative templates, recommendation catalogs and list caps are data, not
//! logic. They are defined here as typed structs with embedded defaults and
//! can be overridden from YAML files via [`ConfigLoader`].

mod loader;
mod types;

pub use loader::ConfigLoader;
pub use types::{
    AssessmentConfig, CategoryNarrative, CategoryRecommendations, NarrativeConfig,
    RecommendationConfig, RecommendationLimits, SkillRecommendations,
};
