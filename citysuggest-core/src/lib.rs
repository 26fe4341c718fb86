pub mod coordinates;
pub mod gazetteer;
pub mod matching;
pub mod search;

// Proximity reference clamp bounds: nothing nearer than NEAREST_FLOOR_KM,
// nothing farther than a national-scale span.
const REGION_SPAN_KM: f64 = 1000.0;
const NEAREST_FLOOR_KM: f64 = 1.0;

const SCORE_OFFSET: f64 = 1.0;
const TEXT_WEIGHT: f64 = 0.5;

pub fn normalize(s: &str) -> String {
    s.to_lowercase()
}
