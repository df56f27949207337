//! Damage assessment model
//!
//! An assessment is a confidence score plus an ordered list of damage line
//! items. Costs use decimal arithmetic; spatial annotations are expressed in
//! percent-of-image coordinates so they survive image resizing.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::ClaimError;

/// Damage severity
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Severity {
    Low,
    Medium,
    High,
    Critical,
}

/// Legacy point marker on the vehicle photo (percent of image)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MarkerPosition {
    pub x: f64,
    pub y: f64,
}

/// Rectangle annotation on the vehicle photo (percent of image,
/// top-left corner plus extent)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BoundingBox {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

/// A single damage line item
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Damage {
    #[serde(rename = "type")]
    pub damage_type: String,
    pub location: String,
    pub severity: Severity,
    pub estimated_cost: Decimal,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub marker_position: Option<MarkerPosition>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub bounding_box: Option<BoundingBox>,
}

/// Machine-generated (or agent-edited) damage assessment for a claim
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AiAssessment {
    pub confidence_score: f64,
    pub total_estimated_cost: Decimal,
    pub damages: Vec<Damage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub is_total_loss: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_loss_value: Option<Decimal>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub total_loss_reason: Option<String>,
}

impl AiAssessment {
    /// Whether the vehicle is currently marked as a total loss
    pub fn is_total_loss(&self) -> bool {
        self.is_total_loss.unwrap_or(false)
    }

    /// Sum of all damage line item costs
    pub fn damage_total(&self) -> Decimal {
        self.damages.iter().map(|d| d.estimated_cost).sum()
    }

    /// Validates value ranges before an assessment is accepted into the store.
    pub fn validate(&self) -> Result<(), ClaimError> {
        if !(0.0..=1.0).contains(&self.confidence_score) {
            return Err(ClaimError::validation(format!(
                "confidence score must be within 0..=1, got {}",
                self.confidence_score
            )));
        }
        for damage in &self.damages {
            if damage.estimated_cost < Decimal::ZERO {
                return Err(ClaimError::validation(format!(
                    "negative estimated cost for {} / {}",
                    damage.damage_type, damage.location
                )));
            }
            if let Some(marker) = &damage.marker_position {
                if !percent(marker.x) || !percent(marker.y) {
                    return Err(ClaimError::validation(format!(
                        "marker position out of range for {} / {}",
                        damage.damage_type, damage.location
                    )));
                }
            }
            if let Some(bbox) = &damage.bounding_box {
                if !percent(bbox.x)
                    || !percent(bbox.y)
                    || !percent(bbox.width)
                    || !percent(bbox.height)
                {
                    return Err(ClaimError::validation(format!(
                        "bounding box out of range for {} / {}",
                        damage.damage_type, damage.location
                    )));
                }
            }
        }
        if let Some(value) = self.total_loss_value {
            if value < Decimal::ZERO {
                return Err(ClaimError::validation("negative total loss value"));
            }
        }
        Ok(())
    }
}

fn percent(v: f64) -> bool {
    (0.0..=100.0).contains(&v)
}
