//! Claims Review Domain
//!
//! This crate holds the review-side model of a vehicle damage claim and the
//! small rule set that drives the review tool:
//! - Estimate-source classification (AI vs. agent-edited vs. agent-only)
//! - Total-loss valuation overrides
//! - The claim status workflow with its transition allow-list
//! - Partial-update application with a tagged update type

pub mod assessment;
pub mod claim;
pub mod error;
pub mod provenance;
pub mod status;
pub mod update;
pub mod valuation;

pub use assessment::{AiAssessment, BoundingBox, Damage, MarkerPosition, Severity};
pub use claim::{Claim, ClaimId};
pub use error::ClaimError;
pub use provenance::{classify_estimate_source, EstimateSource};
pub use status::ClaimStatus;
pub use update::{ClaimUpdate, ImagePatch};
