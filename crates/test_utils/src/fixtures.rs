//! Pre-built Test Fixtures

use rust_decimal_macros::dec;

use domain_review::assessment::AiAssessment;
use domain_review::claim::Claim;
use domain_review::status::ClaimStatus;

use crate::builders::{AssessmentBuilder, ClaimBuilder, DamageBuilder};

/// Ready-made claims for store and API tests
pub struct ClaimFixtures;

impl ClaimFixtures {
    /// A pending claim with a two-item AI assessment
    pub fn pending() -> Claim {
        ClaimBuilder::new().with_id("CLM-100").build()
    }

    /// A claim already submitted for approval
    pub fn awaiting_approval() -> Claim {
        ClaimBuilder::new()
            .with_id("CLM-101")
            .with_status(ClaimStatus::AwaitingApproval)
            .build()
    }

    /// A total-loss claim whose displayed total is the vehicle value
    pub fn total_loss() -> Claim {
        let assessment = AssessmentBuilder::new()
            .with_confidence(0.88)
            .with_damage(
                DamageBuilder::new()
                    .with_type("Frame Damage")
                    .with_location("Front Frame Rail")
                    .with_cost(dec!(6200))
                    .build(),
            )
            .total_loss(dec!(9800), "Repair cost exceeds threshold")
            .build();
        ClaimBuilder::new()
            .with_id("CLM-102")
            .with_vehicle_value(Some(dec!(9800)))
            .with_assessment(assessment.clone())
            .with_original_assessment(assessment)
            .build()
    }

    /// A small review queue covering the interesting states
    pub fn queue() -> Vec<Claim> {
        vec![
            Self::pending(),
            Self::awaiting_approval(),
            Self::total_loss(),
        ]
    }

    /// The pending fixture's assessment with one damage removed and the
    /// total recomputed, as an agent edit would produce
    pub fn edited_assessment() -> AiAssessment {
        let mut assessment = Self::pending().ai_assessment;
        assessment.damages.remove(1);
        assessment.total_estimated_cost = assessment.damage_total();
        assessment
    }
}
