use crate::core::geo::haversine_m;
use crate::domain::model::{MatchMapping, SensorRecord};

pub const DEFAULT_RADIUS_M: f64 = 100.0;

/// Pairs each primary record with the first secondary record within
/// `radius_m` meters, scanning both sequences in order. First match wins,
/// not nearest match. A later primary record with a duplicate id overwrites
/// the earlier entry when it finds a qualifying match.
///
/// Exhaustive O(|primary| x |secondary|) scan, intended for small datasets.
pub fn match_sensors(
    primary: &[SensorRecord],
    secondary: &[SensorRecord],
    radius_m: f64,
) -> MatchMapping {
    let mut mapping = MatchMapping::new();

    for a in primary {
        for b in secondary {
            if haversine_m(a.latitude, a.longitude, b.latitude, b.longitude) <= radius_m {
                mapping.insert(a.id, b.id);
                break;
            }
        }
    }

    mapping
}
