//! Employee record model.
//!
//! This module defines the [`EmployeeRecord`] struct: a typed, read-only
//! snapshot of one reviewed employee. All assessment results are pure
//! functions of this snapshot. Absent data is modeled with `Option` or an
//! explicit Unknown variant, never with sentinel strings.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::{NineBoxCategory, PerformanceRating, SkillLevel};

/// Number of fixed, consecutive annual review periods carried per record.
pub const REVIEW_PERIOD_COUNT: usize = 3;

/// Nationality status of an employee, used for workforce reporting.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NationalityStatus {
    /// A national employee.
    Local,
    /// An expatriate employee.
    Expatriate,
    /// Status not recorded.
    #[default]
    Unknown,
}

impl NationalityStatus {
    /// Parses a roster label. Accepts common synonyms case-insensitively;
    /// anything unrecognized maps to Unknown.
    pub fn from_label(label: &str) -> Self {
        match label.trim().to_lowercase().as_str() {
            "local" | "national" | "omani" => NationalityStatus::Local,
            "expat" | "expatriate" => NationalityStatus::Expatriate,
            _ => NationalityStatus::Unknown,
        }
    }
}

/// A reviewed employee.
///
/// Created by the ingestion boundary (or an API request) and read-only
/// thereafter. Ratings cover [`REVIEW_PERIOD_COUNT`] fixed chronological
/// periods; a `None` slot means the period was not rated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EmployeeRecord {
    /// Personnel identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// Position or job title.
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
    /// Tenure in years; non-negative, may be fractional.
    #[serde(default)]
    pub tenure_years: Option<Decimal>,
    /// Date the employee joined.
    #[serde(default)]
    pub entry_date: Option<NaiveDate>,
    /// Nationality status.
    #[serde(default)]
    pub nationality: NationalityStatus,
    /// 9-box grid placement; Unknown when no evaluation is recorded.
    #[serde(default)]
    pub nine_box: NineBoxCategory,
    /// Skill-level signal; Unknown when no assessment is recorded.
    #[serde(default)]
    pub skill_level: SkillLevel,
    /// True when the employee is earmarked as a successor
    /// (case-insensitive "yes" on the source roster).
    #[serde(default)]
    pub is_successor: bool,
    /// Position the employee is a successor for, when specified.
    #[serde(default)]
    pub succession_target: Option<String>,
    /// Annual performance ratings, chronological. `None` = not rated.
    #[serde(default)]
    pub ratings: [Option<PerformanceRating>; REVIEW_PERIOD_COUNT],
}

impl EmployeeRecord {
    /// Parses a roster successor flag: true only for a case-insensitive
    /// "yes"; anything else (including absence) is not a successor.
    pub fn successor_flag(label: Option<&str>) -> bool {
        label.is_some_and(|v| v.trim().eq_ignore_ascii_case("yes"))
    }

    /// Returns true when at least one period carries a usable rating
    /// (present and not the explicit Unrated label).
    pub fn has_rating_data(&self) -> bool {
        self.ratings
            .iter()
            .any(|slot| slot.is_some_and(PerformanceRating::is_rated))
    }
}
