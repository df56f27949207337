//! Embedded seed claims
//!
//! The review queue starts from a fixed set of claims compiled into the
//! binary. A state file, when present, supersedes the seed.

use domain_review::Claim;

const SEED_JSON: &str = include_str!("../data/seed_claims.json");

/// Parses the embedded seed claims.
///
/// Every claim gets its AI output recorded as the immutable diff baseline
/// unless the seed already carries one.
pub fn seed_claims() -> Result<Vec<Claim>, serde_json::Error> {
    let mut claims: Vec<Claim> = serde_json::from_str(SEED_JSON)?;
    for claim in &mut claims {
        claim.ensure_baseline();
    }
    Ok(claims)
}
