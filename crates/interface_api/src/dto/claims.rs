//! Claim DTOs

use serde::{Deserialize, Deserializer};

use domain_review::{AiAssessment, ClaimError, ClaimUpdate, ImagePatch};

/// Partial update payload for a claim.
///
/// `status` and `estimateSource` arrive as raw strings and are parsed
/// against the enums so an unknown value rejects cleanly instead of failing
/// somewhere inside deserialization. `agentAnnotatedImageUrl` is tri-state:
/// absent leaves the image alone, an explicit `null` deletes it, a string
/// replaces it.
#[derive(Debug, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateClaimRequest {
    pub status: Option<String>,
    pub ai_assessment: Option<AiAssessment>,
    pub estimate_source: Option<String>,
    #[serde(default, deserialize_with = "deserialize_present")]
    pub agent_annotated_image_url: Option<Option<String>>,
    #[serde(rename = "originalAIAssessment")]
    pub original_ai_assessment: Option<AiAssessment>,
}

impl UpdateClaimRequest {
    /// Parses the raw payload into the domain update type.
    pub fn into_update(self) -> Result<ClaimUpdate, ClaimError> {
        let status = self.status.map(|s| s.parse()).transpose()?;
        let estimate_source = self.estimate_source.map(|s| s.parse()).transpose()?;
        let agent_image = self.agent_annotated_image_url.map(|value| match value {
            Some(url) => ImagePatch::Set(url),
            None => ImagePatch::Clear,
        });
        Ok(ClaimUpdate {
            status,
            assessment: self.ai_assessment,
            estimate_source,
            agent_image,
            original_assessment: self.original_ai_assessment,
        })
    }
}

// Wraps a present field (including an explicit null) in Some so that
// "absent" and "null" stay distinguishable after deserialization.
fn deserialize_present<'de, T, D>(deserializer: D) -> Result<Option<Option<T>>, D::Error>
where
    T: Deserialize<'de>,
    D: Deserializer<'de>,
{
    Deserialize::deserialize(deserializer).map(Some)
}
