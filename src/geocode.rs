use std::cell::Cell;

use geo::Point;
use log::debug;

use crate::config::{GazetteerConfig, PlaceConfig};


/// Failure statuses a geocoder can answer with.
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum GeocodeError {
    #[error("invalid request: the address is empty")]
    InvalidRequest,
    #[error("no results for the address")]
    ZeroResults,
    #[error("unknown geocoder error")]
    UnknownError,
    #[error("query limit exceeded")]
    OverQueryLimit,
    #[error("request denied")]
    RequestDenied,
}

impl GeocodeError {
    /// Message shown to the user for this status.
    pub fn user_message(&self) -> &'static str {
        match self {
            Self::InvalidRequest => "Please fill in the address box.",
            Self::ZeroResults | Self::UnknownError => "This address is invalid. Please enter a valid one.",
            Self::OverQueryLimit | Self::RequestDenied => "The address could not be looked up right now.",
        }
    }
}


#[derive(Clone, Debug, PartialEq)]
pub struct GeocodeResult {
    pub name: String,
    pub location: Point,
}


pub trait Geocoder {
    fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodeError>;
}


/// Offline geocoder answering from a fixed list of named places.
#[derive(Debug)]
pub struct Gazetteer {
    places: Vec<PlaceConfig>,
    enabled: bool,
    query_limit: Option<usize>,
    queries: Cell<usize>,
}

impl Gazetteer {
    pub fn new(config: GazetteerConfig) -> Self {
        Self {
            places: config.places,
            enabled: config.enabled,
            query_limit: config.query_limit,
            queries: Cell::new(0),
        }
    }

    fn find(&self, key: &str) -> Option<&PlaceConfig> {
        self.places.iter().find(|place| {
            normalize(&place.name) == key || place.aliases.iter().any(|a| normalize(a) == key)
        })
    }
}

fn normalize(address: &str) -> String {
    address.split_whitespace().collect::<Vec<_>>().join(" ").to_lowercase()
}

impl Geocoder for Gazetteer {
    fn geocode(&self, address: &str) -> Result<GeocodeResult, GeocodeError> {
        let key = normalize(address);
        if key.is_empty() {
            return Err(GeocodeError::InvalidRequest);
        }

        if !self.enabled {
            return Err(GeocodeError::RequestDenied);
        }

        if let Some(limit) = self.query_limit {
            if self.queries.get() >= limit {
                return Err(GeocodeError::OverQueryLimit);
            }
        }
        self.queries.set(self.queries.get() + 1);

        let place = self.find(&key).ok_or(GeocodeError::ZeroResults)?;

        if !place.lon.is_finite() || !place.lat.is_finite() || !(-90.0..=90.0).contains(&place.lat) {
            debug!("Place {:?} has unusable coordinates ({}, {})", place.name, place.lon, place.lat);
            return Err(GeocodeError::UnknownError);
        }

        Ok(GeocodeResult {
            name: place.name.clone(),
            location: Point::new(place.lon, place.lat),
        })
    }
}
