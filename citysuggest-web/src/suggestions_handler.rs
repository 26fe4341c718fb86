use std::sync::Arc;

use axum::extract::{Extension, Query};
use axum::http::StatusCode;
use axum::Json;
use schemars::{schema_for, JsonSchema};
use serde::{Deserialize, Serialize};
use serde_json::json;

use citysuggest_core::gazetteer::Gazetteer;
use citysuggest_core::search::ScoredPlace;

#[derive(Debug, Deserialize)]
pub struct SuggestionParams {
    q: Option<String>,
    latitude: Option<String>,
    longitude: Option<String>,
}

#[derive(Serialize, JsonSchema)]
pub struct SuggestionsBody {
    suggestions: Vec<SuggestionJson>,
}

#[derive(Serialize, JsonSchema)]
pub struct SuggestionJson {
    name: String,
    latitude: f64,
    longitude: f64,
    score: f64,
}

impl SuggestionJson {
    fn from_scored(s: &ScoredPlace) -> Self {
        SuggestionJson {
            name: s.place.name.clone(),
            latitude: s.place.lat,
            longitude: s.place.lng,
            score: s.score,
        }
    }
}

type Rejection = (StatusCode, Json<serde_json::Value>);

fn bad_request(msg: &str) -> Rejection {
    (StatusCode::BAD_REQUEST, Json(json!({ "error": msg })))
}

/// Both angles, neither, or a rejection. An empty parameter counts as unset.
fn lat_lng(params: &SuggestionParams) -> Result<Option<(f64, f64)>, Rejection> {
    let lat = params.latitude.as_deref().filter(|v| !v.is_empty());
    let lng = params.longitude.as_deref().filter(|v| !v.is_empty());
    match (lat, lng) {
        (None, None) => Ok(None),
        (Some(lat), Some(lng)) => {
            let lat = lat
                .parse::<f64>()
                .map_err(|_| bad_request("latitude was not a number"))?;
            let lng = lng
                .parse::<f64>()
                .map_err(|_| bad_request("longitude was not a number"))?;
            Ok(Some((lat, lng)))
        }
        _ => Err(bad_request("only one angle was provided")),
    }
}

pub async fn suggestions_handler(
    Query(params): Query<SuggestionParams>,
    Extension(gazetteer): Extension<Arc<Gazetteer>>,
) -> Result<Json<SuggestionsBody>, Rejection> {
    let q = match params.q.as_deref().filter(|q| !q.is_empty()) {
        Some(q) => q,
        None => return Err(bad_request("q (query string) must be set in URL")),
    };
    let scored = match lat_lng(&params)? {
        Some((lat, lng)) => gazetteer.search_near(q, lat, lng),
        None => gazetteer.search(q),
    };
    let mut suggestions: Vec<SuggestionJson> =
        scored.iter().map(|s| SuggestionJson::from_scored(s)).collect();
    // descending score order is part of the wire contract
    suggestions.sort_unstable_by(|a, b| b.score.total_cmp(&a.score));
    Ok(Json(SuggestionsBody { suggestions }))
}

pub async fn suggestions_schema_handler() -> String {
    let schema = schema_for!(SuggestionsBody);
    serde_json::to_string(&schema).expect("json schema")
}
