//! Assessment logic for the Talent Assessment Engine.
//!
//! This module contains the pure assessment pipeline: performance-trend
//! analysis over the annual rating series, potential classification against
//! the 9-box grid combined with the trend, development recommendation
//! generation, and the query surface used by presentation callers.

mod potential;
mod queries;
mod recommendation;
mod trend;

pub use potential::classify_potential;
pub use queries::{get_potential, get_recommendations, get_trend};
pub use recommendation::recommend;
pub use trend::analyze_trend;
