//! Claim record store

use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{PoisonError, RwLock};

use thiserror::Error;
use tracing::{debug, warn};

use domain_review::{Claim, ClaimError, ClaimId, ClaimUpdate};

/// Store-level errors
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("Claim not found: {0}")]
    NotFound(ClaimId),

    #[error(transparent)]
    Claim(#[from] ClaimError),
}

/// Owns the claim collection and its optional state file.
///
/// The lock exists only because HTTP handlers require shared state to be
/// `Sync`; semantics stay single-writer, last-writer-wins.
pub struct ClaimStore {
    claims: RwLock<Vec<Claim>>,
    state_file: Option<PathBuf>,
}

impl ClaimStore {
    /// Opens the store: the state file wins when it holds a non-empty,
    /// parseable claim list, otherwise the seed is used.
    pub fn open(state_file: Option<PathBuf>, seed: Vec<Claim>) -> Self {
        let claims = state_file
            .as_deref()
            .and_then(load_state)
            .unwrap_or(seed);
        debug!(count = claims.len(), "Claim store initialized");
        Self {
            claims: RwLock::new(claims),
            state_file,
        }
    }

    /// A store without persistence, used by tests
    pub fn in_memory(seed: Vec<Claim>) -> Self {
        Self::open(None, seed)
    }

    /// All claims, as deep copies that cannot alias store state
    pub fn list(&self) -> Vec<Claim> {
        self.claims
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .clone()
    }

    /// A single claim by id
    pub fn get(&self, id: &ClaimId) -> Option<Claim> {
        self.claims
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .find(|c| &c.id == id)
            .cloned()
    }

    /// Applies a partial update and mirrors the collection to disk.
    ///
    /// A rejected update leaves the store unchanged. Persistence is
    /// best-effort: failures are logged and never surfaced.
    pub fn update(&self, id: &ClaimId, update: ClaimUpdate) -> Result<Claim, StoreError> {
        let mut claims = self
            .claims
            .write()
            .unwrap_or_else(PoisonError::into_inner);
        let claim = claims
            .iter_mut()
            .find(|c| &c.id == id)
            .ok_or_else(|| StoreError::NotFound(id.clone()))?;

        claim.apply_update(update)?;
        let updated = claim.clone();

        self.persist(&claims);
        Ok(updated)
    }

    fn persist(&self, claims: &[Claim]) {
        let Some(path) = &self.state_file else {
            return;
        };
        match serde_json::to_string_pretty(claims) {
            Ok(json) => {
                if let Err(err) = fs::write(path, json) {
                    warn!(path = %path.display(), error = %err, "Failed to persist claim state");
                }
            }
            Err(err) => warn!(error = %err, "Failed to serialize claim state"),
        }
    }
}

fn load_state(path: &Path) -> Option<Vec<Claim>> {
    if !path.exists() {
        return None;
    }
    let raw = fs::read_to_string(path)
        .map_err(|err| warn!(path = %path.display(), error = %err, "Failed to read state file"))
        .ok()?;
    match serde_json::from_str::<Vec<Claim>>(&raw) {
        Ok(claims) if !claims.is_empty() => Some(claims),
        Ok(_) => None,
        Err(err) => {
            warn!(path = %path.display(), error = %err, "Ignoring unparseable state file");
            None
        }
    }
}
