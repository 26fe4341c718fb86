use crate::coordinates::{proximity_scores, Coordinates};
use crate::gazetteer::{Gazetteer, PlaceRecord};
use crate::matching;
use crate::TEXT_WEIGHT;

/// A gazetteer entry scored against one query. Borrows from the gazetteer
/// and lives only as long as the caller needs the result.
#[derive(Debug, Copy, Clone)]
pub struct ScoredPlace<'a> {
    pub place: &'a PlaceRecord,
    pub score: f64,
}

impl Gazetteer {
    /// Rank every place whose name the query fuzzily matches, best first.
    /// An empty query or a query matching nothing returns an empty list.
    pub fn search(&self, query: &str) -> Vec<ScoredPlace<'_>> {
        let matches = matching::rank(query, self.places().iter().map(|p| p.normalized_name()));
        let mut results: Vec<ScoredPlace> = matches
            .into_iter()
            .map(|m| ScoredPlace {
                place: &self.places()[m.index],
                score: m.score,
            })
            .collect();
        sort_by_score(&mut results);
        results
    }

    /// Like `search`, but blends each string score with a proximity score
    /// relative to the caller's position. The same places match in both
    /// modes, the position only re-weights them.
    pub fn search_near(&self, query: &str, lat: f64, lng: f64) -> Vec<ScoredPlace<'_>> {
        let mut results = self.search(query);
        let origin = Coordinates { lat, lng };
        let targets: Vec<Coordinates> = results.iter().map(|r| r.place.coordinates()).collect();
        for (result, proximity) in results.iter_mut().zip(proximity_scores(origin, &targets)) {
            result.score = TEXT_WEIGHT * result.score + (1.0 - TEXT_WEIGHT) * proximity;
        }
        sort_by_score(&mut results);
        results
    }
}

fn sort_by_score(results: &mut [ScoredPlace]) {
    results.sort_unstable_by(|a, b| b.score.total_cmp(&a.score));
}
