use serde::Serialize;

use crate::{NEAREST_FLOOR_KM, REGION_SPAN_KM, SCORE_OFFSET};

const EARTH_RADIUS_KM: f64 = 6371.0;

// north and east are positive numbers
#[derive(Debug, Copy, Clone, Serialize)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Great-circle distance between two points in kilometers, by the haversine
/// formula on a mean-radius sphere.
pub fn haversine_km(a: Coordinates, b: Coordinates) -> f64 {
    let d_lat = (b.lat - a.lat).to_radians();
    let d_lng = (b.lng - a.lng).to_radians();
    let h = (d_lat / 2.0).sin().powi(2)
        + a.lat.to_radians().cos() * b.lat.to_radians().cos() * (d_lng / 2.0).sin().powi(2);
    // rounding can push h a hair past 1 for near-antipodal points
    2.0 * EARTH_RADIUS_KM * h.sqrt().min(1.0).asin()
}

/// Proximity scores for `targets` relative to `origin`, in input order.
///
/// The nearest target sets the reference distance, clamped to
/// [NEAREST_FLOOR_KM, REGION_SPAN_KM]; each target then scores
/// `reference / (distance + 1)`, so scores peak near 1 for the closest
/// candidate and fall off with distance.
pub fn proximity_scores(origin: Coordinates, targets: &[Coordinates]) -> Vec<f64> {
    let distances: Vec<f64> = targets.iter().map(|t| haversine_km(origin, *t)).collect();
    let nearest = distances.iter().copied().fold(f64::INFINITY, f64::min);
    let reference = nearest.clamp(NEAREST_FLOOR_KM, REGION_SPAN_KM);
    distances
        .into_iter()
        .map(|km| reference / (km + SCORE_OFFSET))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    const LONDON: Coordinates = Coordinates {
        lat: 51.50735,
        lng: -0.12776,
    };
    const EDINBURGH: Coordinates = Coordinates {
        lat: 55.95325,
        lng: -3.18827,
    };

    #[test]
    fn matches_known_city_distance() {
        let km = haversine_km(LONDON, EDINBURGH);
        assert!((km - 534.0).abs() < 2.0, "london-edinburgh was {} km", km);
    }

    #[test]
    fn zero_distance_for_identical_points() {
        assert_eq!(haversine_km(LONDON, LONDON), 0.0);
    }

    #[test]
    fn symmetric_in_its_arguments() {
        let there = haversine_km(LONDON, EDINBURGH);
        let back = haversine_km(EDINBURGH, LONDON);
        assert!((there - back).abs() < 1e-9);
    }

    #[test]
    fn antipodal_points_stay_finite() {
        let half_circumference = std::f64::consts::PI * EARTH_RADIUS_KM;
        let mut lat = 0.0_f64;
        while lat < 90.0 {
            let a = Coordinates { lat, lng: 30.0 };
            let b = Coordinates {
                lat: -lat,
                lng: -150.0,
            };
            let km = haversine_km(a, b);
            assert!(km.is_finite(), "lat {} gave {}", lat, km);
            assert!((km - half_circumference).abs() < 1.0);
            lat += 0.1;
        }
    }

    #[test]
    fn nearer_targets_score_higher() {
        let near = Coordinates {
            lat: 51.6,
            lng: -0.1,
        };
        let scores = proximity_scores(LONDON, &[near, EDINBURGH]);
        assert!(scores[0] > scores[1]);
        assert!(scores.iter().all(|s| *s > 0.0 && *s <= 1.0));
    }

    #[test]
    fn reference_is_floored_for_a_colocated_target() {
        let scores = proximity_scores(LONDON, &[LONDON, EDINBURGH]);
        assert_eq!(scores[0], 1.0);
        assert!(scores[1] > 0.0);
    }

    #[test]
    fn reference_is_capped_when_everything_is_remote() {
        let faraway = Coordinates { lat: 0.0, lng: 0.0 };
        let scores = proximity_scores(faraway, &[LONDON, EDINBURGH]);
        // both targets sit beyond the cap, so every score stays below 1
        assert!(scores.iter().all(|s| *s < 0.25));
    }

    #[test]
    fn empty_targets_score_empty() {
        assert!(proximity_scores(LONDON, &[]).is_empty());
    }
}
