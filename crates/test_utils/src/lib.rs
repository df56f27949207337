//! Test Utilities
//!
//! Shared builders and fixtures for constructing claims and assessments in
//! tests. Builders let a test specify only the fields it cares about.

pub mod builders;
pub mod fixtures;

pub use builders::{AssessmentBuilder, ClaimBuilder, DamageBuilder};
pub use fixtures::ClaimFixtures;
