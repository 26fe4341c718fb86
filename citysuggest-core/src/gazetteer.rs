use std::io::Read;

use serde::Deserialize;
use thiserror::Error;
use tracing::info;

use crate::coordinates::Coordinates;
use crate::normalize;

#[derive(Debug, Error)]
pub enum GazetteerError {
    #[error("failed to decode places csv: {0}")]
    Csv(#[from] csv::Error),
    #[error("no places remained after filtering")]
    Empty,
}

/// One row of a GeoNames-style places export. Columns are picked out of the
/// header by name, anything else in the file is ignored.
#[derive(Debug, Deserialize)]
struct PlaceRow {
    #[serde(rename = "geonameid")]
    id: String,
    name: String,
    latitude: f64,
    longitude: f64,
    #[serde(rename = "country code")]
    country_code: Option<String>,
}

#[derive(Debug, Clone)]
pub struct PlaceRecord {
    pub id: String,
    pub name: String,
    pub lat: f64,
    pub lng: f64,
    pub country_code: Option<String>,
    normalized: String,
}

impl PlaceRecord {
    pub fn new(id: String, name: String, lat: f64, lng: f64, country_code: Option<String>) -> Self {
        let normalized = normalize(&name);
        Self {
            id,
            name,
            lat,
            lng,
            country_code,
            normalized,
        }
    }

    /// Case-folded name, derived once at construction.
    pub fn normalized_name(&self) -> &str {
        &self.normalized
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates {
            lat: self.lat,
            lng: self.lng,
        }
    }
}

impl From<PlaceRow> for PlaceRecord {
    fn from(r: PlaceRow) -> Self {
        PlaceRecord::new(r.id, r.name, r.latitude, r.longitude, r.country_code)
    }
}

/// Inclusion rule applied while building a gazetteer.
pub type PlaceFilter = Box<dyn Fn(&PlaceRecord) -> bool + Send + Sync>;

/// Keeps records whose country code equals `code`, ASCII case-insensitive.
pub fn only_country(code: &str) -> PlaceFilter {
    let code = code.to_string();
    Box::new(move |p| {
        p.country_code
            .as_deref()
            .map_or(false, |c| c.eq_ignore_ascii_case(&code))
    })
}

/// Keeps records passing every filter. No filters keeps everything.
pub fn apply_filters(places: Vec<PlaceRecord>, filters: &[PlaceFilter]) -> Vec<PlaceRecord> {
    places
        .into_iter()
        .filter(|p| filters.iter().all(|f| f(p)))
        .collect()
}

/// Immutable, ordered collection of places to search against. Built once at
/// startup; lookups only ever borrow it, so request handlers can share one
/// instance without locking.
#[derive(Debug)]
pub struct Gazetteer {
    places: Vec<PlaceRecord>,
}

impl Gazetteer {
    /// Decode a GeoNames-style CSV export and keep the rows passing every
    /// filter.
    pub fn from_csv<R: Read>(reader: R, filters: &[PlaceFilter]) -> Result<Self, GazetteerError> {
        let mut csv_reader = csv::Reader::from_reader(reader);
        let mut places: Vec<PlaceRecord> = Vec::new();
        for row in csv_reader.deserialize() {
            let row: PlaceRow = row?;
            places.push(row.into());
        }
        let decoded = places.len();
        let places = apply_filters(places, filters);
        info!("decoded {} places, kept {} after filtering", decoded, places.len());
        Self::from_records(places)
    }

    /// Build from already-cooked records. An empty set is a construction
    /// error, searches never re-check it.
    pub fn from_records(places: Vec<PlaceRecord>) -> Result<Self, GazetteerError> {
        if places.is_empty() {
            return Err(GazetteerError::Empty);
        }
        Ok(Self { places })
    }

    pub fn places(&self) -> &[PlaceRecord] {
        &self.places
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }
}
