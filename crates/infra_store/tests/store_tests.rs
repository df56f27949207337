//! Tests for the flat-file claim store

use rust_decimal_macros::dec;

use domain_review::{ClaimId, ClaimStatus, ClaimUpdate, EstimateSource, ImagePatch};
use infra_store::{seed_claims, ClaimStore, StoreError};
use test_utils::ClaimFixtures;

#[test]
fn test_seed_claims_parse_and_carry_baselines() {
    let claims = seed_claims().unwrap();
    assert!(claims.len() >= 4);
    for claim in &claims {
        assert!(
            claim.original_ai_assessment.is_some(),
            "claim {} lost its baseline",
            claim.id
        );
    }

    let clm_001 = claims.iter().find(|c| c.id == ClaimId::new("CLM-001")).unwrap();
    assert_eq!(clm_001.status, ClaimStatus::PendingReview);
    assert_eq!(
        clm_001.ai_assessment.total_estimated_cost,
        clm_001.ai_assessment.damage_total()
    );
}

#[test]
fn test_list_returns_deep_copies() {
    let store = ClaimStore::in_memory(ClaimFixtures::queue());

    let mut listed = store.list();
    listed[0].status = ClaimStatus::Escalated;
    listed[0].ai_assessment.damages.clear();

    let reread = store.get(&listed[0].id).unwrap();
    assert_eq!(reread.status, ClaimStatus::PendingReview);
    assert!(!reread.ai_assessment.damages.is_empty());
}

#[test]
fn test_get_unknown_id_is_none() {
    let store = ClaimStore::in_memory(ClaimFixtures::queue());
    assert!(store.get(&ClaimId::new("CLM-999")).is_none());
}

#[test]
fn test_update_unknown_id_is_not_found() {
    let store = ClaimStore::in_memory(ClaimFixtures::queue());
    let result = store.update(
        &ClaimId::new("CLM-999"),
        ClaimUpdate::status(ClaimStatus::Escalated),
    );
    assert!(matches!(result, Err(StoreError::NotFound(_))));
}

#[test]
fn test_update_applies_and_rederives_source() {
    let store = ClaimStore::in_memory(ClaimFixtures::queue());
    let id = ClaimId::new("CLM-100");

    let updated = store
        .update(
            &id,
            ClaimUpdate {
                status: Some(ClaimStatus::AwaitingApproval),
                assessment: Some(ClaimFixtures::edited_assessment()),
                ..ClaimUpdate::default()
            },
        )
        .unwrap();

    assert_eq!(updated.status, ClaimStatus::AwaitingApproval);
    assert_eq!(updated.estimate_source, EstimateSource::EditedByClaimsAgent);
    assert_eq!(updated.ai_assessment.total_estimated_cost, dec!(850));
    assert_eq!(store.get(&id).unwrap(), updated);
}

#[test]
fn test_rejected_update_leaves_state_unchanged() {
    let store = ClaimStore::in_memory(ClaimFixtures::queue());
    let id = ClaimId::new("CLM-101");
    let before = store.get(&id).unwrap();

    // Awaiting approval cannot jump straight to Escalated
    let result = store.update(&id, ClaimUpdate::status(ClaimStatus::Escalated));

    assert!(matches!(result, Err(StoreError::Claim(_))));
    assert_eq!(store.get(&id).unwrap(), before);
}

#[test]
fn test_persistence_round_trip() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("claims-state.json");
    let id = ClaimId::new("CLM-100");

    {
        let store = ClaimStore::open(Some(state_file.clone()), ClaimFixtures::queue());
        store
            .update(
                &id,
                ClaimUpdate {
                    status: Some(ClaimStatus::Escalated),
                    agent_image: Some(ImagePatch::Set("/uploads/x.jpg".to_string())),
                    ..ClaimUpdate::default()
                },
            )
            .unwrap();
    }

    // A fresh store must pick the state file over the seed
    let reopened = ClaimStore::open(Some(state_file), ClaimFixtures::queue());
    let claim = reopened.get(&id).unwrap();
    assert_eq!(claim.status, ClaimStatus::Escalated);
    assert_eq!(claim.agent_annotated_image_url.as_deref(), Some("/uploads/x.jpg"));
}

#[test]
fn test_corrupt_state_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("claims-state.json");
    std::fs::write(&state_file, "not json {{{").unwrap();

    let store = ClaimStore::open(Some(state_file), ClaimFixtures::queue());
    assert_eq!(store.list().len(), 3);
}

#[test]
fn test_empty_state_file_falls_back_to_seed() {
    let dir = tempfile::tempdir().unwrap();
    let state_file = dir.path().join("claims-state.json");
    std::fs::write(&state_file, "[]").unwrap();

    let store = ClaimStore::open(Some(state_file), ClaimFixtures::queue());
    assert_eq!(store.list().len(), 3);
}

#[test]
fn test_revert_through_store_restores_baseline() {
    let store = ClaimStore::in_memory(ClaimFixtures::queue());
    let id = ClaimId::new("CLM-100");
    let baseline = store.get(&id).unwrap().original_ai_assessment.unwrap();

    store
        .update(
            &id,
            ClaimUpdate {
                status: Some(ClaimStatus::AwaitingApproval),
                assessment: Some(ClaimFixtures::edited_assessment()),
                agent_image: Some(ImagePatch::Set("/uploads/a.jpg".to_string())),
                ..ClaimUpdate::default()
            },
        )
        .unwrap();

    let reverted = store
        .update(&id, ClaimUpdate::status(ClaimStatus::PendingReview))
        .unwrap();

    assert_eq!(reverted.ai_assessment, baseline);
    assert_eq!(reverted.estimate_source, EstimateSource::AiOnly);
    assert!(reverted.agent_annotated_image_url.is_none());
}
