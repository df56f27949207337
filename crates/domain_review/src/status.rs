//! Claim status workflow
//!
//! Claims move through a small review loop: a pending claim is either sent
//! for approval or escalated, and a submitted claim can be pulled back into
//! the review queue. `Pending - Returned for Update` is a peer "not yet
//! approved" state that sits in the same queue as `Pending Review`.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::ClaimError;

/// Review status of a claim
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ClaimStatus {
    /// In the review queue
    #[serde(rename = "Pending Review")]
    PendingReview,
    /// Returned by an upstream intake step; reviewed alongside pending claims
    #[serde(rename = "Pending - Returned for Update")]
    PendingReturnedForUpdate,
    /// Submitted for approval
    #[serde(rename = "Awaiting approval")]
    AwaitingApproval,
    /// Flagged for escalation
    Escalated,
}

impl ClaimStatus {
    /// Wire representation, as stored in the state file and the API
    pub fn as_str(&self) -> &'static str {
        match self {
            ClaimStatus::PendingReview => "Pending Review",
            ClaimStatus::PendingReturnedForUpdate => "Pending - Returned for Update",
            ClaimStatus::AwaitingApproval => "Awaiting approval",
            ClaimStatus::Escalated => "Escalated",
        }
    }

    /// Checks the transition allow-list.
    ///
    /// Self-transitions are allowed so that partial updates carrying the
    /// current status stay idempotent.
    pub fn can_transition_to(self, target: ClaimStatus) -> bool {
        use ClaimStatus::*;
        if self == target {
            return true;
        }
        matches!(
            (self, target),
            (PendingReview, AwaitingApproval)
                | (PendingReview, Escalated)
                | (PendingReturnedForUpdate, AwaitingApproval)
                | (PendingReturnedForUpdate, Escalated)
                | (AwaitingApproval, PendingReview)
                | (Escalated, PendingReview)
        )
    }

    /// True for claims sitting in the review queue
    pub fn is_pending(self) -> bool {
        matches!(
            self,
            ClaimStatus::PendingReview | ClaimStatus::PendingReturnedForUpdate
        )
    }

    /// True for claims that left the review queue
    pub fn is_submitted(self) -> bool {
        matches!(self, ClaimStatus::AwaitingApproval | ClaimStatus::Escalated)
    }
}

impl Default for ClaimStatus {
    fn default() -> Self {
        ClaimStatus::PendingReview
    }
}

impl fmt::Display for ClaimStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ClaimStatus {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "Pending Review" => Ok(ClaimStatus::PendingReview),
            "Pending - Returned for Update" => Ok(ClaimStatus::PendingReturnedForUpdate),
            "Awaiting approval" => Ok(ClaimStatus::AwaitingApproval),
            "Escalated" => Ok(ClaimStatus::Escalated),
            other => Err(ClaimError::UnknownStatus(other.to_string())),
        }
    }
}
