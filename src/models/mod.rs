//! Data models for the Talent Assessment Engine.
//!
//! This module defines the employee record and its closed vocabulary types
//! (performance ratings, 9-box grid placements, skill levels), plus the
//! derived assessment types produced by the engine.

mod assessment;
mod employee;
mod nine_box;
mod rating;
mod skill;

pub use assessment::{
    PotentialAssessment, PotentialCategory, RecommendationList, SupportingSignals, TrendDirection,
    TrendResult,
};
pub use employee::{EmployeeRecord, NationalityStatus, REVIEW_PERIOD_COUNT};
pub use nine_box::{GridTier, NineBoxCategory};
pub use rating::PerformanceRating;
pub use skill::SkillLevel;
