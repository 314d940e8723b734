//! Talent Assessment Engine for annual employee talent reviews.
//!
//! This crate derives structured assessments from per-employee talent-review
//! records: a multi-year performance trend, a potential/succession category
//! based on 9-box grid placement, and a capped list of development
//! recommendations.

#![warn(missing_docs)]

pub mod api;
pub mod assessment;
pub mod config;
pub mod error;
pub mod ingest;
pub mod models;
