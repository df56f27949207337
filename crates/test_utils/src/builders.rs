//! Test Data Builders
//!
//! Builder patterns for claims, assessments, and damage line items with
//! sensible defaults.

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_review::assessment::{AiAssessment, BoundingBox, Damage, Severity};
use domain_review::claim::{
    Claim, ClaimId, DamageDetails, DriverLicense, IncidentDetails, InjuryInfo, PoliceReport,
    PolicyInfo, RepairInfo, TheftInfo, VehicleDetails,
};
use domain_review::provenance::EstimateSource;
use domain_review::status::ClaimStatus;

/// Builder for damage line items
pub struct DamageBuilder {
    damage_type: String,
    location: String,
    severity: Severity,
    estimated_cost: Decimal,
    bounding_box: Option<BoundingBox>,
}

impl Default for DamageBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl DamageBuilder {
    pub fn new() -> Self {
        Self {
            damage_type: "Dent".to_string(),
            location: "Front Bumper".to_string(),
            severity: Severity::Medium,
            estimated_cost: dec!(500),
            bounding_box: None,
        }
    }

    pub fn with_type(mut self, damage_type: impl Into<String>) -> Self {
        self.damage_type = damage_type.into();
        self
    }

    pub fn with_location(mut self, location: impl Into<String>) -> Self {
        self.location = location.into();
        self
    }

    pub fn with_severity(mut self, severity: Severity) -> Self {
        self.severity = severity;
        self
    }

    pub fn with_cost(mut self, cost: Decimal) -> Self {
        self.estimated_cost = cost;
        self
    }

    pub fn with_bounding_box(mut self, x: f64, y: f64, width: f64, height: f64) -> Self {
        self.bounding_box = Some(BoundingBox {
            x,
            y,
            width,
            height,
        });
        self
    }

    pub fn build(self) -> Damage {
        Damage {
            damage_type: self.damage_type,
            location: self.location,
            severity: self.severity,
            estimated_cost: self.estimated_cost,
            marker_position: None,
            bounding_box: self.bounding_box,
        }
    }
}

/// Builder for assessments; the total tracks the damage list unless set
pub struct AssessmentBuilder {
    confidence_score: f64,
    damages: Vec<Damage>,
    total_estimated_cost: Option<Decimal>,
    is_total_loss: Option<bool>,
    total_loss_value: Option<Decimal>,
    total_loss_reason: Option<String>,
}

impl Default for AssessmentBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl AssessmentBuilder {
    pub fn new() -> Self {
        Self {
            confidence_score: 0.92,
            damages: Vec::new(),
            total_estimated_cost: None,
            is_total_loss: None,
            total_loss_value: None,
            total_loss_reason: None,
        }
    }

    pub fn with_confidence(mut self, score: f64) -> Self {
        self.confidence_score = score;
        self
    }

    pub fn with_damage(mut self, damage: Damage) -> Self {
        self.damages.push(damage);
        self
    }

    pub fn with_damages(mut self, damages: Vec<Damage>) -> Self {
        self.damages = damages;
        self
    }

    pub fn with_total(mut self, total: Decimal) -> Self {
        self.total_estimated_cost = Some(total);
        self
    }

    pub fn total_loss(mut self, value: Decimal, reason: impl Into<String>) -> Self {
        self.is_total_loss = Some(true);
        self.total_loss_value = Some(value);
        self.total_loss_reason = Some(reason.into());
        self
    }

    pub fn build(self) -> AiAssessment {
        let damage_total: Decimal = self.damages.iter().map(|d| d.estimated_cost).sum();
        let total = if self.is_total_loss == Some(true) {
            self.total_loss_value.unwrap_or(damage_total)
        } else {
            self.total_estimated_cost.unwrap_or(damage_total)
        };
        AiAssessment {
            confidence_score: self.confidence_score,
            total_estimated_cost: total,
            damages: self.damages,
            is_total_loss: self.is_total_loss,
            total_loss_value: self.total_loss_value,
            total_loss_reason: self.total_loss_reason,
        }
    }
}

/// Builder for whole claims
pub struct ClaimBuilder {
    id: ClaimId,
    status: ClaimStatus,
    vehicle_value: Option<Decimal>,
    assessment: Option<AiAssessment>,
    original_assessment: Option<AiAssessment>,
    estimate_source: EstimateSource,
    agent_annotated_image_url: Option<String>,
}

impl Default for ClaimBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl ClaimBuilder {
    pub fn new() -> Self {
        Self {
            id: ClaimId::new("CLM-100"),
            status: ClaimStatus::PendingReview,
            vehicle_value: Some(dec!(18500)),
            assessment: None,
            original_assessment: None,
            estimate_source: EstimateSource::AiOnly,
            agent_annotated_image_url: None,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = ClaimId::new(id);
        self
    }

    pub fn with_status(mut self, status: ClaimStatus) -> Self {
        self.status = status;
        self
    }

    pub fn with_vehicle_value(mut self, value: Option<Decimal>) -> Self {
        self.vehicle_value = value;
        self
    }

    pub fn with_assessment(mut self, assessment: AiAssessment) -> Self {
        self.assessment = Some(assessment);
        self
    }

    pub fn with_original_assessment(mut self, assessment: AiAssessment) -> Self {
        self.original_assessment = Some(assessment);
        self
    }

    pub fn with_estimate_source(mut self, source: EstimateSource) -> Self {
        self.estimate_source = source;
        self
    }

    pub fn with_agent_image(mut self, url: impl Into<String>) -> Self {
        self.agent_annotated_image_url = Some(url.into());
        self
    }

    pub fn build(self) -> Claim {
        let assessment = self.assessment.unwrap_or_else(|| {
            AssessmentBuilder::new()
                .with_damage(DamageBuilder::new().with_cost(dec!(850)).build())
                .with_damage(
                    DamageBuilder::new()
                        .with_type("Scratch")
                        .with_location("Driver Door")
                        .with_cost(dec!(320))
                        .build(),
                )
                .build()
        });
        let original = self
            .original_assessment
            .unwrap_or_else(|| assessment.clone());
        Claim {
            id: self.id.clone(),
            policy_info: PolicyInfo {
                policy_number: "POL-2024-00001".to_string(),
                vehicle_details: VehicleDetails {
                    license_plate: "7ABC123".to_string(),
                    vin: "1HGCM82633A004352".to_string(),
                    make: "Honda".to_string(),
                    model: "Accord".to_string(),
                    year: 2021,
                },
                driver_name: "Test Driver".to_string(),
                driver_contact: "driver@example.com".to_string(),
                driver_license: DriverLicense {
                    number: "D0000001".to_string(),
                    state: "CA".to_string(),
                },
                was_policyholder_driving: "Yes".to_string(),
                estimated_vehicle_value: self.vehicle_value,
                total_loss_threshold: Some(0.75),
            },
            incident_details: IncidentDetails {
                date_time: Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap(),
                location: "Test intersection".to_string(),
                description: "Test incident".to_string(),
                incident_type: "Collision".to_string(),
                speed_of_travel: "25 mph".to_string(),
            },
            other_parties: vec![],
            police_report: PoliceReport {
                report_number: String::new(),
                was_police_called: "No".to_string(),
            },
            damage_details: DamageDetails {
                description: "Test damage".to_string(),
                is_drivable: "Yes".to_string(),
                personal_property_damaged: "No".to_string(),
                prior_existing_damage: "No".to_string(),
            },
            repair_info: RepairInfo {
                preferred_shop: String::new(),
                estimates_obtained: "No".to_string(),
                towing_receipts: "No".to_string(),
                rental_car_needs: "No".to_string(),
            },
            injury_info: InjuryInfo {
                was_anyone_injured: "No".to_string(),
                injury_description: String::new(),
                medical_provider: String::new(),
            },
            theft_info: TheftInfo {
                proof_of_ownership: String::new(),
                stolen_items: String::new(),
                spare_key_confirmation: String::new(),
            },
            status: self.status,
            vehicle_image_url: format!("/images/{}.jpg", self.id.as_str().to_lowercase()),
            annotated_vehicle_image_url: None,
            agent_annotated_image_url: self.agent_annotated_image_url,
            ai_assessment: assessment,
            original_ai_assessment: Some(original),
            estimate_source: self.estimate_source,
        }
    }
}
