//! HTTP API module for the Talent Assessment Engine.
//!
//! This module provides the REST API endpoints for assessing employee
//! talent-review records and searching the loaded roster.

mod handlers;
mod request;
mod response;
mod state;

pub use handlers::create_router;
pub use request::AssessRequest;
pub use response::{ApiError, AssessmentResponse, EmployeeSummary};
pub use state::AppState;
