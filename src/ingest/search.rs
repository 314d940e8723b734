//! Roster search.
//!
//! Substring search over name and personnel ID, used by the selection UI's
//! autocomplete. The core itself operates on one record at a time; no index
//! is built or required.

use crate::models::EmployeeRecord;

/// Maximum number of search matches returned.
pub const MAX_SEARCH_RESULTS: usize = 5;

/// Searches the roster by display name or personnel ID.
///
/// Name matching is a case-insensitive substring match; ID matching is a
/// raw substring match. An empty or whitespace-only query returns no
/// matches. Results keep roster order and are capped at
/// [`MAX_SEARCH_RESULTS`].
pub fn search_roster<'a>(records: &'a [EmployeeRecord], query: &str) -> Vec<&'a EmployeeRecord> {
    let query = query.trim();
    if query.is_empty() {
        return Vec::new();
    }

    let query_lower = query.to_lowercase();
    records
        .iter()
        .filter(|record| {
            record.name.to_lowercase().contains(&query_lower) || record.id.contains(query)
        })
        .take(MAX_SEARCH_RESULTS)
        .collect()
}
