//! Partial claim updates
//!
//! Every updatable field is an explicit `Option`, and the agent image
//! carries a dedicated set/clear patch so "absent" and "delete" stay
//! distinguishable.

use crate::assessment::AiAssessment;
use crate::provenance::EstimateSource;
use crate::status::ClaimStatus;

/// Patch for the agent-annotated image reference
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ImagePatch {
    /// Replace the stored image URL
    Set(String),
    /// Remove the stored image URL
    Clear,
}

/// A partial update to a claim; unset fields are left untouched
#[derive(Debug, Clone, Default)]
pub struct ClaimUpdate {
    pub status: Option<ClaimStatus>,
    pub assessment: Option<AiAssessment>,
    pub estimate_source: Option<EstimateSource>,
    pub agent_image: Option<ImagePatch>,
    /// Baseline snapshot; accepted only on first write
    pub original_assessment: Option<AiAssessment>,
}

impl ClaimUpdate {
    /// An update that only changes the status
    pub fn status(status: ClaimStatus) -> Self {
        Self {
            status: Some(status),
            ..Self::default()
        }
    }

    pub fn is_empty(&self) -> bool {
        self.status.is_none()
            && self.assessment.is_none()
            && self.estimate_source.is_none()
            && self.agent_image.is_none()
            && self.original_assessment.is_none()
    }
}
