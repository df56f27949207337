//! Comprehensive tests for domain_review

use chrono::{TimeZone, Utc};
use rust_decimal::Decimal;
use rust_decimal_macros::dec;

use domain_review::assessment::{AiAssessment, BoundingBox, Damage, Severity};
use domain_review::claim::{
    Claim, ClaimId, DamageDetails, DriverLicense, IncidentDetails, InjuryInfo, PoliceReport,
    PolicyInfo, RepairInfo, TheftInfo, VehicleDetails,
};
use domain_review::provenance::{classify_estimate_source, EstimateSource};
use domain_review::status::ClaimStatus;
use domain_review::update::{ClaimUpdate, ImagePatch};
use domain_review::valuation;

fn damage(damage_type: &str, location: &str, cost: Decimal) -> Damage {
    Damage {
        damage_type: damage_type.to_string(),
        location: location.to_string(),
        severity: Severity::Medium,
        estimated_cost: cost,
        marker_position: None,
        bounding_box: None,
    }
}

fn assessment(damages: Vec<Damage>) -> AiAssessment {
    let total = damages.iter().map(|d| d.estimated_cost).sum();
    AiAssessment {
        confidence_score: 0.92,
        total_estimated_cost: total,
        damages,
        is_total_loss: None,
        total_loss_value: None,
        total_loss_reason: None,
    }
}

fn ai_baseline() -> AiAssessment {
    assessment(vec![
        damage("Dent", "Front Bumper", dec!(850)),
        damage("Scratch", "Driver Door", dec!(320)),
    ])
}

fn test_claim() -> Claim {
    let mut claim = Claim {
        id: ClaimId::new("CLM-TEST"),
        policy_info: PolicyInfo {
            policy_number: "POL-9912".to_string(),
            vehicle_details: VehicleDetails {
                license_plate: "7ABC123".to_string(),
                vin: "1HGCM82633A004352".to_string(),
                make: "Honda".to_string(),
                model: "Accord".to_string(),
                year: 2021,
            },
            driver_name: "Jordan Smith".to_string(),
            driver_contact: "jordan.smith@example.com".to_string(),
            driver_license: DriverLicense {
                number: "D1234567".to_string(),
                state: "CA".to_string(),
            },
            was_policyholder_driving: "Yes".to_string(),
            estimated_vehicle_value: Some(dec!(18500)),
            total_loss_threshold: Some(0.75),
        },
        incident_details: IncidentDetails {
            date_time: Utc.with_ymd_and_hms(2026, 1, 15, 9, 30, 0).unwrap(),
            location: "5th and Main, Sacramento, CA".to_string(),
            description: "Rear-ended at a stop light".to_string(),
            incident_type: "Collision".to_string(),
            speed_of_travel: "0 mph".to_string(),
        },
        other_parties: vec![],
        police_report: PoliceReport {
            report_number: "RPT-4411".to_string(),
            was_police_called: "Yes".to_string(),
        },
        damage_details: DamageDetails {
            description: "Rear bumper and trunk damage".to_string(),
            is_drivable: "Yes".to_string(),
            personal_property_damaged: "No".to_string(),
            prior_existing_damage: "No".to_string(),
        },
        repair_info: RepairInfo {
            preferred_shop: "Main St Auto Body".to_string(),
            estimates_obtained: "No".to_string(),
            towing_receipts: "No".to_string(),
            rental_car_needs: "Yes".to_string(),
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
        status: ClaimStatus::PendingReview,
        vehicle_image_url: "/images/clm-test.jpg".to_string(),
        annotated_vehicle_image_url: None,
        agent_annotated_image_url: None,
        ai_assessment: ai_baseline(),
        original_ai_assessment: None,
        estimate_source: EstimateSource::AiOnly,
    };
    claim.ensure_baseline();
    claim
}

// ============================================================================
// Estimate-Source Classifier Tests
// ============================================================================

mod classifier_tests {
    use super::*;

    #[test]
    fn test_no_baseline_is_ai_only() {
        let current = ai_baseline();
        assert_eq!(
            classify_estimate_source(&current, None),
            EstimateSource::AiOnly
        );
    }

    #[test]
    fn test_identical_assessments_are_ai_only() {
        let baseline = ai_baseline();
        let current = baseline.clone();
        assert_eq!(
            classify_estimate_source(&current, Some(&baseline)),
            EstimateSource::AiOnly
        );
    }

    #[test]
    fn test_cost_edit_is_edited_by_agent() {
        let baseline = ai_baseline();
        let mut current = baseline.clone();
        current.damages[0].estimated_cost = dec!(1100);
        current.total_estimated_cost = current.damage_total();
        assert_eq!(
            classify_estimate_source(&current, Some(&baseline)),
            EstimateSource::EditedByClaimsAgent
        );
    }

    #[test]
    fn test_removed_damage_is_edited_by_agent() {
        let baseline = ai_baseline();
        let mut current = baseline.clone();
        current.damages.remove(1);
        current.total_estimated_cost = current.damage_total();
        assert_eq!(
            classify_estimate_source(&current, Some(&baseline)),
            EstimateSource::EditedByClaimsAgent
        );
    }

    #[test]
    fn test_added_damage_is_edited_by_agent() {
        let baseline = ai_baseline();
        let mut current = baseline.clone();
        current
            .damages
            .push(damage("Crack", "Windshield", dec!(450)));
        current.total_estimated_cost = current.damage_total();
        assert_eq!(
            classify_estimate_source(&current, Some(&baseline)),
            EstimateSource::EditedByClaimsAgent
        );
    }

    #[test]
    fn test_fully_replaced_list_is_agent_only() {
        let baseline = ai_baseline();
        let current = assessment(vec![
            damage("Hail Damage", "Roof", dec!(900)),
            damage("Crack", "Windshield", dec!(450)),
        ]);
        assert_eq!(
            classify_estimate_source(&current, Some(&baseline)),
            EstimateSource::ClaimsAgentOnly
        );
    }

    #[test]
    fn test_empty_current_list_is_not_agent_only() {
        // Clearing every damage is an edit, not pure agent work
        let baseline = ai_baseline();
        let current = assessment(vec![]);
        assert_eq!(
            classify_estimate_source(&current, Some(&baseline)),
            EstimateSource::EditedByClaimsAgent
        );
    }

    #[test]
    fn test_empty_both_sides_is_ai_only() {
        let baseline = assessment(vec![]);
        let current = baseline.clone();
        assert_eq!(
            classify_estimate_source(&current, Some(&baseline)),
            EstimateSource::AiOnly
        );
    }

    #[test]
    fn test_annotation_only_change_is_edited_by_agent() {
        // Deep comparison covers spatial annotations, not just costs
        let baseline = ai_baseline();
        let mut current = baseline.clone();
        current.damages[0].bounding_box = Some(BoundingBox {
            x: 10.0,
            y: 20.0,
            width: 15.0,
            height: 12.0,
        });
        assert_eq!(
            classify_estimate_source(&current, Some(&baseline)),
            EstimateSource::EditedByClaimsAgent
        );
    }

    #[test]
    fn test_type_and_location_edit_misclassifies_as_agent_only() {
        // Known limitation of the type+location identity key, pinned here
        // so a behavior change shows up in review.
        let baseline = assessment(vec![damage("Dent", "Front Bumper", dec!(850))]);
        let mut current = baseline.clone();
        current.damages[0].damage_type = "Crease".to_string();
        current.damages[0].location = "Rear Bumper".to_string();
        assert_eq!(
            classify_estimate_source(&current, Some(&baseline)),
            EstimateSource::ClaimsAgentOnly
        );
    }
}

// ============================================================================
// Total-Loss Valuation Tests
// ============================================================================

mod valuation_tests {
    use super::*;

    #[test]
    fn test_toggle_on_uses_vehicle_value() {
        let mut a = ai_baseline();
        valuation::toggle_total_loss(&mut a, true, Some(dec!(18500)));

        assert_eq!(a.is_total_loss, Some(true));
        assert_eq!(a.total_loss_value, Some(dec!(18500)));
        assert_eq!(a.total_estimated_cost, dec!(18500));
    }

    #[test]
    fn test_toggle_on_falls_back_to_prior_total_loss_value() {
        let mut a = ai_baseline();
        a.total_loss_value = Some(dec!(16000));
        valuation::toggle_total_loss(&mut a, true, None);

        assert_eq!(a.total_estimated_cost, dec!(16000));
    }

    #[test]
    fn test_toggle_on_falls_back_to_damage_sum() {
        let mut a = ai_baseline();
        valuation::toggle_total_loss(&mut a, true, None);

        assert_eq!(a.total_estimated_cost, dec!(1170));
        assert_eq!(a.total_loss_value, Some(dec!(1170)));
    }

    #[test]
    fn test_zero_vehicle_value_never_wins() {
        let mut a = ai_baseline();
        valuation::toggle_total_loss(&mut a, true, Some(Decimal::ZERO));

        assert_eq!(a.total_estimated_cost, dec!(1170));
    }

    #[test]
    fn test_toggle_off_clears_override_fields() {
        let mut a = ai_baseline();
        a.total_loss_reason = Some("Frame damage beyond threshold".to_string());
        valuation::toggle_total_loss(&mut a, true, Some(dec!(18500)));
        valuation::toggle_total_loss(&mut a, false, Some(dec!(18500)));

        assert_eq!(a.is_total_loss, Some(false));
        assert!(a.total_loss_value.is_none());
        assert!(a.total_loss_reason.is_none());
        assert_eq!(a.total_estimated_cost, dec!(1170));
    }

    #[test]
    fn test_toggle_on_preserves_reason() {
        let mut a = ai_baseline();
        a.total_loss_reason = Some("Repair exceeds 75% of value".to_string());
        valuation::toggle_total_loss(&mut a, true, Some(dec!(18500)));

        assert_eq!(
            a.total_loss_reason.as_deref(),
            Some("Repair exceeds 75% of value")
        );
    }

    #[test]
    fn test_displayed_cost_total_loss_prefers_recorded_value() {
        let mut a = ai_baseline();
        a.is_total_loss = Some(true);
        a.total_loss_value = Some(dec!(17000));

        assert_eq!(
            valuation::displayed_total_cost(&a, Some(dec!(18500))),
            dec!(17000)
        );
    }

    #[test]
    fn test_displayed_cost_repairable_falls_back_to_damage_sum() {
        let mut a = ai_baseline();
        a.total_estimated_cost = Decimal::ZERO;

        assert_eq!(valuation::displayed_total_cost(&a, None), dec!(1170));
    }

    #[test]
    fn test_normalize_repairable_recomputes_damage_sum() {
        let mut a = ai_baseline();
        a.total_estimated_cost = dec!(9999);
        valuation::normalize(&mut a, None);

        assert_eq!(a.total_estimated_cost, dec!(1170));
    }

    #[test]
    fn test_normalize_total_loss_keeps_override_without_drift() {
        let mut a = ai_baseline();
        a.is_total_loss = Some(true);
        a.total_loss_value = Some(dec!(18500));
        a.total_estimated_cost = dec!(1170);
        valuation::normalize(&mut a, Some(dec!(18500)));

        assert_eq!(a.total_estimated_cost, dec!(18500));
        // Re-normalizing must not recompute from the damage list
        valuation::normalize(&mut a, Some(dec!(18500)));
        assert_eq!(a.total_estimated_cost, dec!(18500));
    }
}

// ============================================================================
// Status Workflow Tests
// ============================================================================

mod workflow_tests {
    use super::*;

    #[test]
    fn test_pending_to_awaiting_approval() {
        let mut claim = test_claim();
        assert!(claim
            .transition_status(ClaimStatus::AwaitingApproval)
            .is_ok());
        assert_eq!(claim.status, ClaimStatus::AwaitingApproval);
    }

    #[test]
    fn test_pending_to_escalated() {
        let mut claim = test_claim();
        assert!(claim.transition_status(ClaimStatus::Escalated).is_ok());
    }

    #[test]
    fn test_returned_for_update_behaves_like_pending() {
        let mut claim = test_claim();
        claim.status = ClaimStatus::PendingReturnedForUpdate;
        assert!(claim
            .transition_status(ClaimStatus::AwaitingApproval)
            .is_ok());
    }

    #[test]
    fn test_awaiting_approval_cannot_escalate_directly() {
        let mut claim = test_claim();
        claim.transition_status(ClaimStatus::AwaitingApproval).unwrap();
        let result = claim.transition_status(ClaimStatus::Escalated);
        assert!(result.is_err());
        assert_eq!(claim.status, ClaimStatus::AwaitingApproval);
    }

    #[test]
    fn test_self_transition_is_idempotent() {
        let mut claim = test_claim();
        assert!(claim.transition_status(ClaimStatus::PendingReview).is_ok());
        assert_eq!(claim.status, ClaimStatus::PendingReview);
    }

    #[test]
    fn test_revert_restores_baseline_exactly() {
        let mut claim = test_claim();
        let baseline = claim.original_ai_assessment.clone().unwrap();

        let mut edited = claim.ai_assessment.clone();
        edited.damages.remove(0);
        edited.total_estimated_cost = edited.damage_total();
        claim
            .apply_update(ClaimUpdate {
                status: Some(ClaimStatus::AwaitingApproval),
                assessment: Some(edited),
                agent_image: Some(ImagePatch::Set("/images/annotated/x.jpg".to_string())),
                ..ClaimUpdate::default()
            })
            .unwrap();
        assert_eq!(claim.estimate_source, EstimateSource::EditedByClaimsAgent);

        claim.transition_status(ClaimStatus::PendingReview).unwrap();

        assert_eq!(claim.status, ClaimStatus::PendingReview);
        assert_eq!(claim.ai_assessment, baseline);
        assert_eq!(claim.estimate_source, EstimateSource::AiOnly);
        assert!(claim.agent_annotated_image_url.is_none());
        // Baseline itself is untouched by the revert
        assert_eq!(claim.original_ai_assessment, Some(baseline));
    }

    #[test]
    fn test_revert_without_baseline_keeps_assessment() {
        let mut claim = test_claim();
        claim.original_ai_assessment = None;
        claim.status = ClaimStatus::Escalated;
        let current = claim.ai_assessment.clone();

        claim.transition_status(ClaimStatus::PendingReview).unwrap();

        assert_eq!(claim.ai_assessment, current);
        assert_eq!(claim.estimate_source, EstimateSource::AiOnly);
    }
}

// ============================================================================
// Partial Update Tests
// ============================================================================

mod update_tests {
    use super::*;

    #[test]
    fn test_assessment_update_rederives_estimate_source() {
        let mut claim = test_claim();
        let mut edited = claim.ai_assessment.clone();
        edited.damages[0].estimated_cost = dec!(990);

        claim
            .apply_update(ClaimUpdate {
                assessment: Some(edited),
                // Stale label from the client is ignored in favor of the diff
                estimate_source: Some(EstimateSource::AiOnly),
                ..ClaimUpdate::default()
            })
            .unwrap();

        assert_eq!(claim.estimate_source, EstimateSource::EditedByClaimsAgent);
        assert_eq!(claim.ai_assessment.total_estimated_cost, dec!(1310));
    }

    #[test]
    fn test_explicit_source_applies_without_assessment() {
        let mut claim = test_claim();
        claim
            .apply_update(ClaimUpdate {
                estimate_source: Some(EstimateSource::ClaimsAgentOnly),
                ..ClaimUpdate::default()
            })
            .unwrap();
        assert_eq!(claim.estimate_source, EstimateSource::ClaimsAgentOnly);
    }

    #[test]
    fn test_image_patch_set_and_clear() {
        let mut claim = test_claim();
        claim
            .apply_update(ClaimUpdate {
                agent_image: Some(ImagePatch::Set("/uploads/a.jpg".to_string())),
                ..ClaimUpdate::default()
            })
            .unwrap();
        assert_eq!(
            claim.agent_annotated_image_url.as_deref(),
            Some("/uploads/a.jpg")
        );

        claim
            .apply_update(ClaimUpdate {
                agent_image: Some(ImagePatch::Clear),
                ..ClaimUpdate::default()
            })
            .unwrap();
        assert!(claim.agent_annotated_image_url.is_none());
    }

    #[test]
    fn test_baseline_first_write_accepted() {
        let mut claim = test_claim();
        claim.original_ai_assessment = None;
        let baseline = ai_baseline();

        claim
            .apply_update(ClaimUpdate {
                original_assessment: Some(baseline.clone()),
                ..ClaimUpdate::default()
            })
            .unwrap();

        assert_eq!(claim.original_ai_assessment, Some(baseline));
    }

    #[test]
    fn test_baseline_rewrite_rejected() {
        let mut claim = test_claim();
        let mut other = ai_baseline();
        other.damages.clear();
        other.total_estimated_cost = Decimal::ZERO;

        let result = claim.apply_update(ClaimUpdate {
            original_assessment: Some(other),
            ..ClaimUpdate::default()
        });

        assert!(result.is_err());
        assert_eq!(claim.original_ai_assessment, Some(ai_baseline()));
    }

    #[test]
    fn test_invalid_assessment_leaves_claim_untouched() {
        let mut claim = test_claim();
        let before = claim.clone();
        let mut bad = claim.ai_assessment.clone();
        bad.damages[0].estimated_cost = dec!(-5);

        let result = claim.apply_update(ClaimUpdate {
            status: Some(ClaimStatus::AwaitingApproval),
            assessment: Some(bad),
            ..ClaimUpdate::default()
        });

        assert!(result.is_err());
        assert_eq!(claim, before);
    }

    #[test]
    fn test_invalid_transition_leaves_other_fields_untouched() {
        let mut claim = test_claim();
        claim.status = ClaimStatus::AwaitingApproval;
        let before = claim.clone();
        let mut edited = claim.ai_assessment.clone();
        edited.damages[0].estimated_cost = dec!(990);

        let result = claim.apply_update(ClaimUpdate {
            status: Some(ClaimStatus::Escalated),
            assessment: Some(edited),
            ..ClaimUpdate::default()
        });

        assert!(result.is_err());
        assert_eq!(claim, before);
    }

    #[test]
    fn test_total_loss_update_keeps_override_value() {
        let mut claim = test_claim();
        let mut edited = claim.ai_assessment.clone();
        valuation::toggle_total_loss(&mut edited, true, claim.vehicle_value());

        claim
            .apply_update(ClaimUpdate {
                assessment: Some(edited),
                ..ClaimUpdate::default()
            })
            .unwrap();

        assert_eq!(claim.ai_assessment.total_estimated_cost, dec!(18500));
        assert_eq!(claim.estimate_source, EstimateSource::EditedByClaimsAgent);
    }
}

// ============================================================================
// Property Tests
// ============================================================================

mod property_tests {
    use super::*;
    use proptest::prelude::*;

    fn arb_damage(prefix: &'static str) -> impl Strategy<Value = Damage> {
        (0u32..8, 0u32..8, 0i64..20_000).prop_map(move |(t, l, cost)| {
            damage(
                &format!("{prefix}-type-{t}"),
                &format!("{prefix}-loc-{l}"),
                Decimal::from(cost),
            )
        })
    }

    fn arb_assessment(prefix: &'static str) -> impl Strategy<Value = AiAssessment> {
        proptest::collection::vec(arb_damage(prefix), 0..6).prop_map(assessment)
    }

    proptest! {
        #[test]
        fn prop_identical_assessments_classify_ai_only(a in arb_assessment("ai")) {
            let current = a.clone();
            prop_assert_eq!(
                classify_estimate_source(&current, Some(&a)),
                EstimateSource::AiOnly
            );
        }

        #[test]
        fn prop_disjoint_nonempty_list_classifies_agent_only(
            baseline in arb_assessment("ai"),
            current in arb_assessment("agent"),
        ) {
            // Distinct prefixes guarantee zero identity-key overlap
            prop_assume!(!current.damages.is_empty());
            prop_assert_eq!(
                classify_estimate_source(&current, Some(&baseline)),
                EstimateSource::ClaimsAgentOnly
            );
        }

        #[test]
        fn prop_toggle_on_hits_chosen_value_exactly(
            a in arb_assessment("ai"),
            value in 1i64..100_000,
        ) {
            let mut toggled = a;
            let vehicle_value = Decimal::from(value);
            valuation::toggle_total_loss(&mut toggled, true, Some(vehicle_value));
            prop_assert_eq!(toggled.total_estimated_cost, vehicle_value);
            prop_assert_eq!(toggled.total_loss_value, Some(vehicle_value));
        }

        #[test]
        fn prop_toggle_off_equals_damage_sum(a in arb_assessment("ai")) {
            let mut toggled = a;
            valuation::toggle_total_loss(&mut toggled, false, None);
            prop_assert_eq!(toggled.total_estimated_cost, toggled.damage_total());
        }
    }
}
