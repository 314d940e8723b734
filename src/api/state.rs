//! Application state for the Talent Assessment Engine API.
//!
//! This module defines the shared application state that is available
//! to all request handlers.

use std::sync::Arc;

use crate::config::AssessmentConfig;
use crate::models::EmployeeRecord;

/// Shared application state.
///
/// Contains resources shared across all request handlers: the assessment
/// configuration and the loaded roster. Both are read-only after startup,
/// so handlers can run concurrently with no coordination.
#[derive(Clone)]
pub struct AppState {
    config: Arc<AssessmentConfig>,
    roster: Arc<Vec<EmployeeRecord>>,
}

impl AppState {
    /// Creates a new application state.
    pub fn new(config: AssessmentConfig, roster: Vec<EmployeeRecord>) -> Self {
        Self {
            config: Arc::new(config),
            roster: Arc::new(roster),
        }
    }

    /// Returns a reference to the assessment configuration.
    pub fn config(&self) -> &AssessmentConfig {
        &self.config
    }

    /// Returns the loaded roster.
    pub fn roster(&self) -> &[EmployeeRecord] {
        &self.roster
    }

    /// Looks up a roster record by personnel ID.
    pub fn find_record(&self, id: &str) -> Option<&EmployeeRecord> {
        self.roster.iter().find(|record| record.id == id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_app_state_is_clone() {
        // Verify AppState can be cloned (required for axum state)
        fn assert_clone<T: Clone>() {}
        assert_clone::<AppState>();
    }

    #[test]
    fn test_find_record_by_id() {
        let record = EmployeeRecord {
            id: "10042".to_string(),
            name: "Amina Al Busaidi".to_string(),
            position: "Process Engineer".to_string(),
            department: None,
            function: None,
            team: None,
            grade: None,
            tenure_years: None,
            entry_date: None,
            nationality: Default::default(),
            nine_box: Default::default(),
            skill_level: Default::default(),
            is_successor: false,
            succession_target: None,
            ratings: [None, None, None],
        };
        let state = AppState::new(AssessmentConfig::default(), vec![record]);

        assert!(state.find_record("10042").is_some());
        assert!(state.find_record("99999").is_none());
    }
}
