//! Estimate-source classification
//!
//! Derives the provenance label of a claim's current assessment by diffing
//! it against the original AI output. The label is derived data: whenever an
//! assessment changes, the classifier is re-run and its answer wins over
//! anything a client sent along.

use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::fmt;
use std::str::FromStr;

use crate::assessment::{AiAssessment, Damage};
use crate::error::ClaimError;

/// Provenance of the current damage estimate
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum EstimateSource {
    /// Untouched AI output
    #[serde(rename = "AI only")]
    AiOnly,
    /// AI output with agent modifications
    #[serde(rename = "Edited by claims agent")]
    EditedByClaimsAgent,
    /// Every AI line item was replaced by agent entries
    #[serde(rename = "Claims agent only")]
    ClaimsAgentOnly,
}

impl EstimateSource {
    pub fn as_str(&self) -> &'static str {
        match self {
            EstimateSource::AiOnly => "AI only",
            EstimateSource::EditedByClaimsAgent => "Edited by claims agent",
            EstimateSource::ClaimsAgentOnly => "Claims agent only",
        }
    }
}

impl Default for EstimateSource {
    fn default() -> Self {
        EstimateSource::AiOnly
    }
}

impl fmt::Display for EstimateSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for EstimateSource {
    type Err = ClaimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "AI only" => Ok(EstimateSource::AiOnly),
            "Edited by claims agent" => Ok(EstimateSource::EditedByClaimsAgent),
            "Claims agent only" => Ok(EstimateSource::ClaimsAgentOnly),
            other => Err(ClaimError::UnknownEstimateSource(other.to_string())),
        }
    }
}

/// Classifies the provenance of `current` against the original AI baseline.
///
/// Damages are identified by a `type + location` key. If no key of the
/// baseline survives into a nonempty current list, the estimate is treated
/// as pure agent work; any other deep difference in the damages list or the
/// total cost counts as an agent edit.
///
/// The identity key is a heuristic: an agent editing both the type and the
/// location of one AI-flagged damage in a single step is indistinguishable
/// from a remove-and-replace, and classifies as "Claims agent only". Kept
/// as-is deliberately.
pub fn classify_estimate_source(
    current: &AiAssessment,
    baseline: Option<&AiAssessment>,
) -> EstimateSource {
    let Some(original) = baseline else {
        return EstimateSource::AiOnly;
    };

    let original_keys: HashSet<String> = original.damages.iter().map(identity_key).collect();
    let current_keys: HashSet<String> = current.damages.iter().map(identity_key).collect();

    let has_overlap = original_keys.iter().any(|key| current_keys.contains(key));
    if !has_overlap && !current.damages.is_empty() {
        return EstimateSource::ClaimsAgentOnly;
    }

    if original.damages != current.damages
        || original.total_estimated_cost != current.total_estimated_cost
    {
        return EstimateSource::EditedByClaimsAgent;
    }

    EstimateSource::AiOnly
}

fn identity_key(damage: &Damage) -> String {
    format!("{}-{}", damage.damage_type, damage.location)
}
