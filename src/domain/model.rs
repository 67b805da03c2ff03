use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// A single sensor position. Constructed once at load time, never mutated.
///
/// The serde rename matches the canonical JSON source shape:
/// `{"Id": 1, "Latitude": 40.0, "Longitude": -70.0}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "PascalCase")]
pub struct SensorRecord {
    pub id: i64,
    pub latitude: f64,
    pub longitude: f64,
}

impl SensorRecord {
    pub fn new(id: i64, latitude: f64, longitude: f64) -> Self {
        Self {
            id,
            latitude,
            longitude,
        }
    }
}

/// Primary-sensor id to secondary-sensor id pairing. serde_json renders the
/// integer keys as decimal strings, which is the required output shape.
pub type MatchMapping = BTreeMap<i64, i64>;

#[derive(Debug, Clone)]
pub struct ExtractResult {
    pub primary: Vec<SensorRecord>,
    pub secondary: Vec<SensorRecord>,
}

#[derive(Debug, Clone)]
pub struct MatchResult {
    pub mapping: MatchMapping,
    pub primary_count: usize,
    pub secondary_count: usize,
}
