//! Static reference data
//!
//! Read-only cost statistics per damage type and a list of vehicle
//! valuation data sources, consumed for informational display next to the
//! editable estimate.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

const REFERENCE_JSON: &str = include_str!("../data/reference_database.json");

// Damage type labels are free text entered by agents; matching falls back
// from exact to substring to these shared keywords.
const TYPE_KEYWORDS: &[&str] = &[
    "bumper",
    "hood",
    "headlight",
    "tail",
    "door",
    "windshield",
    "grille",
    "quarter",
    "fender",
    "paint",
    "mirror",
    "frame",
    "pillar",
    "structure",
    "steering",
    "water",
    "hail",
    "roof",
    "trunk",
];

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostRange {
    pub min: Decimal,
    pub max: Decimal,
}

/// Per-source record count; some sources only publish approximate figures
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RecordCount {
    Count(u64),
    Approximate(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CostDataSource {
    pub source: String,
    pub record_count: RecordCount,
    pub average_cost: Decimal,
    pub notes: String,
}

/// Cost statistics for one damage type
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct DamageTypeReference {
    #[serde(rename = "type")]
    pub damage_type: String,
    pub average_cost: Decimal,
    pub cost_range: CostRange,
    pub data_sources: Vec<CostDataSource>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ValuationSource {
    pub name: String,
    pub coverage: String,
    pub notes: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VehicleValuation {
    pub data_sources: Vec<ValuationSource>,
}

/// The embedded reference database
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReferenceDatabase {
    pub damage_types: Vec<DamageTypeReference>,
    pub vehicle_valuation: VehicleValuation,
}

impl ReferenceDatabase {
    /// Parses the embedded reference data.
    pub fn load() -> Result<Self, serde_json::Error> {
        serde_json::from_str(REFERENCE_JSON)
    }

    /// Finds the reference entry for a damage type label.
    ///
    /// Matching is case-insensitive: exact match first, then substring
    /// containment in either direction, then a shared keyword.
    pub fn lookup_damage_type(&self, damage_type: &str) -> Option<&DamageTypeReference> {
        let needle = damage_type.to_lowercase();

        if let Some(exact) = self
            .damage_types
            .iter()
            .find(|dt| dt.damage_type.to_lowercase() == needle)
        {
            return Some(exact);
        }

        if let Some(partial) = self.damage_types.iter().find(|dt| {
            let label = dt.damage_type.to_lowercase();
            needle.contains(&label) || label.contains(&needle)
        }) {
            return Some(partial);
        }

        self.damage_types.iter().find(|dt| {
            let label = dt.damage_type.to_lowercase();
            TYPE_KEYWORDS
                .iter()
                .any(|kw| needle.contains(kw) && label.contains(kw))
        })
    }

    pub fn valuation_sources(&self) -> &[ValuationSource] {
        &self.vehicle_valuation.data_sources
    }
}
