//! Request types for the Talent Assessment Engine API.
//!
//! This module defines the JSON request structure for the `/assess`
//! endpoint. Review fields arrive as raw roster labels and are converted
//! leniently: unrecognized labels become the documented absent states, the
//! same degradation the ingestion boundary applies.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::models::{
    EmployeeRecord, NationalityStatus, NineBoxCategory, PerformanceRating, SkillLevel,
    REVIEW_PERIOD_COUNT,
};

/// Request body for the `/assess` endpoint.
///
/// Only the identity fields are required; every review field is optional
/// and carried as its roster display label.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssessRequest {
    /// Personnel identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position or job title.
    #[serde(default)]
    pub position: String,
    /// Organizational department.
    #[serde(default)]
    pub department: Option<String>,
    /// Organizational function.
    #[serde(default)]
    pub function: Option<String>,
    /// Team within the function.
    #[serde(default)]
    pub team: Option<String>,
    /// Grade code.
    #[serde(default)]
    pub grade: Option<String>,
    /// Tenure in years.
    #[serde(default)]
    pub tenure_years: Option<Decimal>,
    /// Date the employee joined.
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
    /// Nationality label (e.g. "Local", "Expat").
    #[serde(default)]
    pub nationality: Option<String>,
    /// 9-box placement label (e.g. "Hi-Potential").
    #[serde(default)]
    pub nine_box: Option<String>,
    /// Skill-level label (e.g. "Advanced").
    #[serde(default)]
    pub skill_level: Option<String>,
    /// Succession flag label; true only for a case-insensitive "yes".
    #[serde(default)]
    pub successor: Option<String>,
    /// Position the employee is a successor for.
    #[serde(default)]
    pub succession_target: Option<String>,
    /// Annual rating labels, chronological; unrecognized labels are absent.
    #[serde(default)]
    pub ratings: [Option<String>; REVIEW_PERIOD_COUNT],
}

impl From<AssessRequest> for EmployeeRecord {
    fn from(req: AssessRequest) -> Self {
        EmployeeRecord {
            id: req.id,
            name: req.name,
            position: req.position,
            department: req.department,
            function: req.function,
            team: req.team,
            grade: req.grade,
            tenure_years: req.tenure_years,
            entry_date: req.entry_date,
            nationality: req
                .nationality
                .as_deref()
                .map(NationalityStatus::from_label)
                .unwrap_or_default(),
            nine_box: req
                .nine_box
                .as_deref()
                .map(NineBoxCategory::from_label)
                .unwrap_or_default(),
            skill_level: req
                .skill_level
                .as_deref()
                .map(SkillLevel::from_label)
                .unwrap_or_default(),
            is_successor: EmployeeRecord::successor_flag(req.successor.as_deref()),
            succession_target: req.succession_target,
            ratings: req
                .ratings
                .map(|label| label.as_deref().and_then(PerformanceRating::from_label)),
        }
    }
}
