//! Roster ingestion and search boundary.
//!
//! The assessment core operates on typed [`EmployeeRecord`] snapshots; this
//! module produces them from a delimited roster export. Field extraction is
//! deliberately lenient: the source roster has typo-prone, inconsistently
//! spaced headers, so headers are matched in normalized form and missing or
//! unrecognized values degrade to the documented absent states rather than
//! erroring.
//!
//! [`EmployeeRecord`]: crate::models::EmployeeRecord

mod roster;
mod search;

pub use roster::{REVIEW_PERIODS, load_roster, parse_roster};
pub use search::{MAX_SEARCH_RESULTS, search_roster};
