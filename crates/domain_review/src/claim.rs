//! Claim aggregate

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::assessment::AiAssessment;
use crate::error::ClaimError;
use crate::provenance::{classify_estimate_source, EstimateSource};
use crate::status::ClaimStatus;
use crate::update::{ClaimUpdate, ImagePatch};
use crate::valuation;

/// Business identifier of a claim (e.g. `CLM-001`)
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ClaimId(String);

impl ClaimId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ClaimId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ClaimId {
    fn from(id: &str) -> Self {
        Self(id.to_string())
    }
}

impl From<String> for ClaimId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

/// Vehicle identification
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleDetails {
    pub license_plate: String,
    pub vin: String,
    pub make: String,
    pub model: String,
    pub year: u16,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DriverLicense {
    pub number: String,
    pub state: String,
}

/// Policy and driver information
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PolicyInfo {
    pub policy_number: String,
    pub vehicle_details: VehicleDetails,
    pub driver_name: String,
    pub driver_contact: String,
    pub driver_license: DriverLicense,
    pub was_policyholder_driving: String,
    /// Replacement value used by the total-loss override
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub estimated_vehicle_value: Option<Decimal>,
    /// Repair-cost-to-value ratio above which a total loss is suggested
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_loss_threshold: Option<f64>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IncidentDetails {
    pub date_time: DateTime<Utc>,
    pub location: String,
    pub description: String,
    /// Collision, Weather Damage, Theft, ...
    #[serde(rename = "type")]
    pub incident_type: String,
    pub speed_of_travel: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct OtherParty {
    pub name: String,
    pub contact: String,
    pub policy_number: String,
    pub vehicle_details: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PoliceReport {
    pub report_number: String,
    pub was_police_called: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageDetails {
    pub description: String,
    pub is_drivable: String,
    pub personal_property_damaged: String,
    pub prior_existing_damage: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RepairInfo {
    pub preferred_shop: String,
    pub estimates_obtained: String,
    pub towing_receipts: String,
    pub rental_car_needs: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct InjuryInfo {
    pub was_anyone_injured: String,
    pub injury_description: String,
    pub medical_provider: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TheftInfo {
    pub proof_of_ownership: String,
    pub stolen_items: String,
    pub spare_key_confirmation: String,
}

/// A vehicle damage claim under review
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Claim {
    pub id: ClaimId,
    pub policy_info: PolicyInfo,
    pub incident_details: IncidentDetails,
    pub other_parties: Vec<OtherParty>,
    pub police_report: PoliceReport,
    pub damage_details: DamageDetails,
    pub repair_info: RepairInfo,
    pub injury_info: InjuryInfo,
    pub theft_info: TheftInfo,
    #[serde(default)]
    pub status: ClaimStatus,
    pub vehicle_image_url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub annotated_vehicle_image_url: Option<String>,
    /// Present only when an agent saved a manually annotated image
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub agent_annotated_image_url: Option<String>,
    pub ai_assessment: AiAssessment,
    /// Snapshot of the AI output at claim creation; diff baseline and
    /// revert target, immutable after first write
    #[serde(
        rename = "originalAIAssessment",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub original_ai_assessment: Option<AiAssessment>,
    #[serde(default)]
    pub estimate_source: EstimateSource,
}

impl Claim {
    /// Vehicle replacement value from the policy, if known
    pub fn vehicle_value(&self) -> Option<Decimal> {
        self.policy_info.estimated_vehicle_value
    }

    /// Records the AI output as the diff baseline if none exists yet.
    pub fn ensure_baseline(&mut self) {
        if self.original_ai_assessment.is_none() {
            self.original_ai_assessment = Some(self.ai_assessment.clone());
        }
    }

    /// Restores the original AI assessment and wipes agent work.
    ///
    /// No-op on the assessment itself if no baseline was ever recorded.
    pub fn revert_to_original(&mut self) {
        if let Some(original) = self.original_ai_assessment.clone() {
            self.ai_assessment = original;
        }
        self.estimate_source = EstimateSource::AiOnly;
        self.agent_annotated_image_url = None;
    }

    /// Moves the claim to `next`, enforcing the transition allow-list.
    ///
    /// Pulling a submitted claim back to `Pending Review` is the revert
    /// path: it restores the baseline assessment before the status changes.
    pub fn transition_status(&mut self, next: ClaimStatus) -> Result<(), ClaimError> {
        if !self.status.can_transition_to(next) {
            return Err(ClaimError::InvalidStatusTransition {
                from: self.status.to_string(),
                to: next.to_string(),
            });
        }
        if next == ClaimStatus::PendingReview && self.status.is_submitted() {
            self.revert_to_original();
        }
        self.status = next;
        Ok(())
    }

    /// Applies a partial update.
    ///
    /// Field order matters: the baseline is recorded first, then the status
    /// transition runs (possibly reverting agent work), then an incoming
    /// assessment overrides whatever the transition left behind. When an
    /// assessment is part of the update the estimate source is re-derived
    /// from the classifier; an explicit source is honored only on its own.
    ///
    /// Any error leaves the claim untouched.
    pub fn apply_update(&mut self, update: ClaimUpdate) -> Result<(), ClaimError> {
        if let Some(baseline) = &update.original_assessment {
            match &self.original_ai_assessment {
                Some(existing) if existing != baseline => {
                    return Err(ClaimError::BaselineAlreadyRecorded(self.id.to_string()));
                }
                _ => {}
            }
        }
        if let Some(assessment) = &update.assessment {
            assessment.validate()?;
        }
        if let Some(next) = update.status {
            // Validate before any field is written
            if !self.status.can_transition_to(next) {
                return Err(ClaimError::InvalidStatusTransition {
                    from: self.status.to_string(),
                    to: next.to_string(),
                });
            }
        }

        if let Some(baseline) = update.original_assessment {
            if self.original_ai_assessment.is_none() {
                self.original_ai_assessment = Some(baseline);
            }
        }
        if let Some(next) = update.status {
            self.transition_status(next)?;
        }
        if let Some(mut assessment) = update.assessment {
            valuation::normalize(&mut assessment, self.vehicle_value());
            self.ai_assessment = assessment;
            self.estimate_source = classify_estimate_source(
                &self.ai_assessment,
                self.original_ai_assessment.as_ref(),
            );
        } else if let Some(source) = update.estimate_source {
            self.estimate_source = source;
        }
        match update.agent_image {
            Some(ImagePatch::Set(url)) => self.agent_annotated_image_url = Some(url),
            Some(ImagePatch::Clear) => self.agent_annotated_image_url = None,
            None => {}
        }
        Ok(())
    }
}
